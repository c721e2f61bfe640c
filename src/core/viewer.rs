//! Single-file inspection: the parsed rows of one selected file and its
//! leading comment block.

use polars::prelude::{
  DataFrame,
  IntoLazy,
  col,
  lit,
};
use tracing::debug;

use super::{
  dispatch::Signal,
  error::{
    DisplayError,
    ViewerError,
  },
  explorer::Explorer,
  frame::FILENAME_COLUMN,
  header::read_comment_block,
};

#[derive(Debug, Clone)]
pub enum Display
{
  NoFileSelected,
  Loaded
  {
    file:   String,
    frame:  DataFrame,
    header: String,
  },
  Error
  {
    file:    String,
    message: String,
  },
}

#[derive(Debug)]
pub struct Viewer
{
  menu:     Vec<String>,
  selected: Option<String>,
  display:  Display,
}

impl Default for Viewer
{
  fn default() -> Self
  {
    Self { menu: Vec::new(), selected: None, display: Display::NoFileSelected }
  }
}

impl Viewer
{
  pub fn menu(&self) -> &[String]
  {
    &self.menu
  }

  pub fn selected(&self) -> Option<&str>
  {
    self.selected.as_deref()
  }

  pub fn display(&self) -> &Display
  {
    &self.display
  }

  /// Header text of the displayed file; empty unless loaded.
  pub fn header(&self) -> &str
  {
    match &self.display
    {
      Display::Loaded { header, .. } => header,
      _ => "",
    }
  }

  /// Follow the explorer's selection. The displayed file is kept only if it
  /// is still part of the selection.
  pub fn sync_menu(
    &mut self,
    selected_files: &[String],
  ) -> Vec<Signal>
  {
    self.menu = selected_files.to_vec();
    if let Some(cur) = &self.selected
      && !self.menu.contains(cur)
    {
      debug!(file = %cur, "viewer selection dropped");
      self.selected = None;
      return vec![Signal::FileChosen];
    }
    Vec::new()
  }

  pub fn select_file(
    &mut self,
    name: Option<&str>,
  ) -> Result<Vec<Signal>, ViewerError>
  {
    if let Some(n) = name
      && !self.menu.iter().any(|m| m == n)
    {
      return Err(ViewerError::NotInMenu(n.to_string()));
    }
    let next = name.map(str::to_string);
    if next == self.selected
    {
      return Ok(Vec::new());
    }
    self.selected = next;
    Ok(vec![Signal::FileChosen])
  }

  /// Recompute the display from the explorer's frame and the file on disk.
  pub fn refresh(
    &mut self,
    explorer: &Explorer,
  ) -> Vec<Signal>
  {
    self.display = match &self.selected
    {
      None => Display::NoFileSelected,
      Some(file) => match load_display(explorer, file)
      {
        Ok((frame, header)) => Display::Loaded { file: file.clone(), frame, header },
        Err(e) =>
        {
          debug!(file = %file, "viewer error: {e}");
          Display::Error { file: file.clone(), message: format!("Error loading file: {e}") }
        }
      },
    };
    vec![Signal::DisplayChanged]
  }
}

fn load_display(
  explorer: &Explorer,
  file: &str,
) -> Result<(DataFrame, String), DisplayError>
{
  if let Some(err) = explorer.frame_error()
  {
    return Err(DisplayError::Upstream(err.to_string()));
  }
  let frame = explorer.frame();
  if frame.column(FILENAME_COLUMN).is_err()
  {
    return Err(DisplayError::MissingColumn(FILENAME_COLUMN.to_string()));
  }
  let slice = frame
    .clone()
    .lazy()
    .filter(col(FILENAME_COLUMN).eq(lit(file)))
    .collect()?
    .drop(FILENAME_COLUMN)?;
  let path = explorer.rootdir().join(file);
  let header = read_comment_block(&path, explorer.config().comment_prefix)
    .map_err(|source| DisplayError::Header { path, source })?;
  Ok((slice, header))
}
