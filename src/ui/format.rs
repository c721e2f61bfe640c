use std::{
  path::Path,
  time::SystemTime,
};

use unicode_width::UnicodeWidthChar;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn format_time_abs(
  t: SystemTime,
  fmt: &str,
) -> String
{
  use chrono::{
    DateTime,
    Local,
  };
  let dt: DateTime<Local> = DateTime::from(t);
  dt.format(fmt).to_string()
}

/// Modification time of `path`, or `-` when it cannot be read.
pub fn modified_string(
  path: &Path,
  fmt: &str,
) -> String
{
  match std::fs::metadata(path).and_then(|m| m.modified())
  {
    Ok(t) => format_time_abs(t, fmt),
    Err(_) => String::from("-"),
  }
}

/// Cut `s` to at most `max_w` terminal columns.
pub fn truncate_to_width(
  s: &str,
  max_w: usize,
) -> String
{
  let mut out = String::new();
  let mut w = 0usize;
  for ch in s.chars()
  {
    let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
    if w + cw > max_w
    {
      break;
    }
    out.push(ch);
    w += cw;
  }
  out
}

/// Compact axis label: integers stay bare, everything else gets 2 decimals.
pub fn axis_label(v: f64) -> String
{
  if v.fract() == 0.0 && v.abs() < 1e12
  {
    format!("{}", v as i64)
  }
  else
  {
    format!("{v:.2}")
  }
}
