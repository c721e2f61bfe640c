//! Widget-level state for the Browse and Inspect panes.

/// Widgets in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus
{
  Rootdir,
  Directories,
  Files,
  CommentPrefix,
  Separator,
  Columns,
  Header,
  ViewerFiles,
}

impl Focus
{
  pub const ALL: [Focus; 8] = [
    Focus::Rootdir,
    Focus::Directories,
    Focus::Files,
    Focus::CommentPrefix,
    Focus::Separator,
    Focus::Columns,
    Focus::Header,
    Focus::ViewerFiles,
  ];

  fn index(self) -> usize
  {
    Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
  }

  pub fn next(self) -> Focus
  {
    Self::ALL[(self.index() + 1) % Self::ALL.len()]
  }

  pub fn prev(self) -> Focus
  {
    Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
  }

  /// Text inputs swallow printable keys instead of running key maps.
  pub fn is_text(self) -> bool
  {
    matches!(self, Focus::Rootdir | Focus::Columns)
  }
}

/// Single-line editable text with a committed value to revert to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput
{
  value:     String,
  committed: String,
  /// Cursor position in chars.
  cursor:    usize,
}

impl TextInput
{
  pub fn new(initial: &str) -> Self
  {
    Self {
      value:     initial.to_string(),
      committed: initial.to_string(),
      cursor:    initial.chars().count(),
    }
  }

  pub fn value(&self) -> &str
  {
    &self.value
  }

  pub fn cursor(&self) -> usize
  {
    self.cursor
  }

  pub fn is_dirty(&self) -> bool
  {
    self.value != self.committed
  }

  fn byte_at(
    &self,
    char_idx: usize,
  ) -> usize
  {
    self.value.char_indices().nth(char_idx).map(|(b, _)| b).unwrap_or(self.value.len())
  }

  pub fn insert(
    &mut self,
    ch: char,
  )
  {
    let at = self.byte_at(self.cursor);
    self.value.insert(at, ch);
    self.cursor += 1;
  }

  pub fn backspace(&mut self)
  {
    if self.cursor == 0
    {
      return;
    }
    self.cursor -= 1;
    let at = self.byte_at(self.cursor);
    self.value.remove(at);
  }

  pub fn delete(&mut self)
  {
    if self.cursor < self.value.chars().count()
    {
      let at = self.byte_at(self.cursor);
      self.value.remove(at);
    }
  }

  pub fn left(&mut self)
  {
    self.cursor = self.cursor.saturating_sub(1);
  }

  pub fn right(&mut self)
  {
    self.cursor = (self.cursor + 1).min(self.value.chars().count());
  }

  pub fn home(&mut self)
  {
    self.cursor = 0;
  }

  pub fn end(&mut self)
  {
    self.cursor = self.value.chars().count();
  }

  /// Drop uncommitted edits.
  pub fn revert(&mut self)
  {
    self.value = self.committed.clone();
    self.end();
  }

  /// Accept the current text and return it.
  pub fn commit(&mut self) -> String
  {
    self.committed = self.value.clone();
    self.value.clone()
  }

  /// Replace both the text and the committed value.
  pub fn reset(
    &mut self,
    value: &str,
  )
  {
    *self = Self::new(value);
  }
}
