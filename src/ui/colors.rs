use ratatui::style::{
  Color,
  Style,
};

use crate::config::UiTheme;

pub fn parse_color(s: &str) -> Option<Color>
{
  let low = s.trim().to_ascii_lowercase();
  match low.as_str()
  {
    "black" => Some(Color::Black),
    "red" => Some(Color::Red),
    "green" => Some(Color::Green),
    "yellow" => Some(Color::Yellow),
    "blue" => Some(Color::Blue),
    "magenta" | "purple" => Some(Color::Magenta),
    "cyan" => Some(Color::Cyan),
    "gray" | "grey" => Some(Color::Gray),
    "darkgray" | "darkgrey" => Some(Color::DarkGray),
    "white" => Some(Color::White),
    _ => parse_hex_rgb(&low),
  }
}

fn parse_hex_rgb(s: &str) -> Option<Color>
{
  let t = s.strip_prefix('#')?;
  if t.len() != 6
  {
    return None;
  }
  let r = u8::from_str_radix(&t[0..2], 16).ok()?;
  let g = u8::from_str_radix(&t[2..4], 16).ok()?;
  let b = u8::from_str_radix(&t[4..6], 16).ok()?;
  Some(Color::Rgb(r, g, b))
}

/// Resolve one theme slot, if a theme is set and the slot parses.
pub fn theme_color(
  theme: Option<&UiTheme>,
  pick: impl Fn(&UiTheme) -> &Option<String>,
) -> Option<Color>
{
  theme.and_then(|t| pick(t).as_deref()).and_then(parse_color)
}

/// `base` with the given theme slots applied as foreground and background.
pub fn themed_style(
  base: Style,
  theme: Option<&UiTheme>,
  fg: impl Fn(&UiTheme) -> &Option<String>,
  bg: impl Fn(&UiTheme) -> &Option<String>,
) -> Style
{
  let mut style = base;
  if let Some(c) = theme_color(theme, fg)
  {
    style = style.fg(c);
  }
  if let Some(c) = theme_color(theme, bg)
  {
    style = style.bg(c);
  }
  style
}
