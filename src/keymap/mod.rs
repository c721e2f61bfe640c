use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyModifiers,
};

/// Split a key sequence string into tokens, preserving modifier tokens like
/// "<C-x>" as single units.
pub fn tokenize_sequence(seq: &str) -> Vec<String>
{
  let mut toks = Vec::new();
  let mut rest = seq;
  while let Some(ch) = rest.chars().next()
  {
    if ch == '<'
      && let Some(j) = rest[1..].find('>')
    {
      let end = j + 2;
      toks.push(rest[..end].to_string());
      rest = &rest[end..];
      continue;
    }
    toks.push(ch.to_string());
    rest = &rest[ch.len_utf8()..];
  }
  toks
}

/// Build a key token from a character and its modifiers.
/// Examples: 'x' -> "x", Ctrl-x -> "<C-x>", Alt-Space -> "<M- >"
pub fn build_token(
  ch: char,
  mods: KeyModifiers,
) -> String
{
  let ctrl = mods.contains(KeyModifiers::CONTROL);
  let alt = mods.contains(KeyModifiers::ALT);
  let superm = mods.contains(KeyModifiers::SUPER);
  if !(ctrl || alt || superm)
  {
    return ch.to_string();
  }
  let mut tok = String::from("<");
  if ctrl
  {
    tok.push_str("C-");
  }
  if alt
  {
    tok.push_str("M-");
  }
  if superm
  {
    tok.push_str("S-");
  }
  tok.push(ch);
  tok.push('>');
  tok
}

/// Token for a key event, or `None` for keys that never take part in
/// sequences (arrows, Tab, Enter, ...).
pub fn token_for(key: &KeyEvent) -> Option<String>
{
  match key.code
  {
    KeyCode::Char(ch) => Some(build_token(ch, key.modifiers)),
    KeyCode::F(n) => Some(format!("<F{n}>")),
    _ => None,
  }
}

/// Human label for a token in the help overlay.
pub fn format_token(tok: &str) -> String
{
  match tok
  {
    " " => "Space".to_string(),
    t if t.starts_with("<C-") => format!("Ctrl-{}", &t[3..t.len() - 1]),
    t if t.starts_with("<M-") => format!("Alt-{}", &t[3..t.len() - 1]),
    t => t.to_string(),
  }
}

/// Human label for a whole sequence, tokens separated by spaces.
pub fn format_sequence(seq: &str) -> String
{
  tokenize_sequence(seq).iter().map(|t| format_token(t)).collect::<Vec<_>>().join(" ")
}
