//! Parse configuration chosen in the Browse pane.

use std::{
  fmt,
  str::FromStr,
};

use super::error::ColumnIdsError;

/// Marker that flags a line as a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentPrefix
{
  #[default]
  Hash,
  Percent,
  DoubleSlash,
  Semicolon,
}

impl CommentPrefix
{
  pub const ALL: [CommentPrefix; 4] = [
    CommentPrefix::Hash,
    CommentPrefix::Percent,
    CommentPrefix::DoubleSlash,
    CommentPrefix::Semicolon,
  ];

  pub fn as_str(self) -> &'static str
  {
    match self
    {
      CommentPrefix::Hash => "#",
      CommentPrefix::Percent => "%",
      CommentPrefix::DoubleSlash => "//",
      CommentPrefix::Semicolon => ";",
    }
  }

  pub fn matches(
    self,
    line: &str,
  ) -> bool
  {
    line.starts_with(self.as_str())
  }

  pub fn next(self) -> Self
  {
    cycle(&Self::ALL, self, 1)
  }

  pub fn prev(self) -> Self
  {
    cycle(&Self::ALL, self, Self::ALL.len() - 1)
  }
}

impl FromStr for CommentPrefix
{
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err>
  {
    Self::ALL
      .into_iter()
      .find(|p| p.as_str() == s)
      .ok_or_else(|| format!("unsupported comment prefix '{s}'"))
  }
}

impl fmt::Display for CommentPrefix
{
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result
  {
    f.write_str(self.as_str())
  }
}

/// Field delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator
{
  #[default]
  Tab,
  Comma,
  Semicolon,
  Space,
}

impl Separator
{
  pub const ALL: [Separator; 4] =
    [Separator::Tab, Separator::Comma, Separator::Semicolon, Separator::Space];

  pub fn as_byte(self) -> u8
  {
    match self
    {
      Separator::Tab => b'\t',
      Separator::Comma => b',',
      Separator::Semicolon => b';',
      Separator::Space => b' ',
    }
  }

  /// Label shown in the separator selector (`\t` is shown escaped).
  pub fn label(self) -> &'static str
  {
    match self
    {
      Separator::Tab => "\\t",
      Separator::Comma => ",",
      Separator::Semicolon => ";",
      Separator::Space => "' '",
    }
  }

  pub fn next(self) -> Self
  {
    cycle(&Self::ALL, self, 1)
  }

  pub fn prev(self) -> Self
  {
    cycle(&Self::ALL, self, Self::ALL.len() - 1)
  }
}

impl FromStr for Separator
{
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err>
  {
    match s
    {
      "\t" | "\\t" | "tab" => Ok(Separator::Tab),
      "," | "comma" => Ok(Separator::Comma),
      ";" | "semicolon" => Ok(Separator::Semicolon),
      " " | "space" => Ok(Separator::Space),
      other => Err(format!("unsupported separator '{other}'")),
    }
  }
}

fn cycle<T: Copy + PartialEq>(
  all: &[T],
  cur: T,
  step: usize,
) -> T
{
  let idx = all.iter().position(|v| *v == cur).unwrap_or(0);
  all[(idx + step) % all.len()]
}

/// Ordered, duplicate-free list of 1-based column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIds(Vec<usize>);

impl ColumnIds
{
  pub fn new(ids: Vec<usize>) -> Result<Self, ColumnIdsError>
  {
    if ids.is_empty()
    {
      return Err(ColumnIdsError::Empty);
    }
    let mut seen = Vec::with_capacity(ids.len());
    for &id in &ids
    {
      if id == 0
      {
        return Err(ColumnIdsError::Zero);
      }
      if seen.contains(&id)
      {
        return Err(ColumnIdsError::Duplicate(id));
      }
      seen.push(id);
    }
    Ok(Self(ids))
  }

  pub fn as_slice(&self) -> &[usize]
  {
    &self.0
  }

  pub fn len(&self) -> usize
  {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool
  {
    self.0.is_empty()
  }
}

impl Default for ColumnIds
{
  fn default() -> Self
  {
    Self(vec![1, 2])
  }
}

impl FromStr for ColumnIds
{
  type Err = ColumnIdsError;

  /// Parse `"1, 2,3"`; items are trimmed.
  fn from_str(s: &str) -> Result<Self, Self::Err>
  {
    if s.trim().is_empty()
    {
      return Err(ColumnIdsError::Empty);
    }
    let mut ids = Vec::new();
    for item in s.split(',')
    {
      let item = item.trim();
      if item.is_empty()
      {
        return Err(ColumnIdsError::EmptyItem(s.to_string()));
      }
      let id = item
        .parse::<usize>()
        .map_err(|_| ColumnIdsError::NotANumber(item.to_string()))?;
      ids.push(id);
    }
    Self::new(ids)
  }
}

impl fmt::Display for ColumnIds
{
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result
  {
    let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
    f.write_str(&parts.join(","))
  }
}

/// Everything the loader needs to turn a file into a frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseConfig
{
  pub comment_prefix: CommentPrefix,
  pub separator:      Separator,
  pub has_header:     bool,
  pub column_ids:     ColumnIds,
}
