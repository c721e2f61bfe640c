//! Small text helpers shared by the panes.

/// Make `s` safe to render on one terminal row. Tabs become four spaces and
/// other control characters become one.
pub fn sanitize_line(s: &str) -> String
{
  let mut out = String::with_capacity(s.len());
  for ch in s.chars()
  {
    match ch
    {
      '\t' => out.push_str("    "),
      '\r' =>
      {}
      c if c.is_control() => out.push(' '),
      c => out.push(c),
    }
  }
  out
}
