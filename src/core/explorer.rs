//! Directory/file explorer: root, folder and file selection, parse options,
//! and the combined frame built from them.

use std::path::{
  Path,
  PathBuf,
};

use polars::prelude::DataFrame;
use tracing::{
  debug,
  info,
  warn,
};

use super::{
  dispatch::Signal,
  error::{
    ExplorerError,
    ParseError,
  },
  listing,
  loader,
  options::{
    ColumnIds,
    CommentPrefix,
    ParseConfig,
    Separator,
  },
};

pub const DEFAULT_ROOTDIR: &str = "/";

#[derive(Debug)]
pub struct Explorer
{
  rootdir:        PathBuf,
  directories:    Vec<String>,
  selected_dirs:  Vec<String>,
  files:          Vec<String>,
  selected_files: Vec<String>,
  config:         ParseConfig,
  frame:          DataFrame,
  frame_error:    Option<ParseError>,
  /// False until the first `set_rootdir`.
  rooted:         bool,
}

impl Default for Explorer
{
  fn default() -> Self
  {
    Self::new()
  }
}

impl Explorer
{
  /// Explorer with the built-in defaults: root `/`, tab separator, `#`
  /// comments, no header, columns 1 and 2. Nothing is listed yet.
  pub fn new() -> Self
  {
    Self {
      rootdir:        PathBuf::from(DEFAULT_ROOTDIR),
      directories:    Vec::new(),
      selected_dirs:  Vec::new(),
      files:          Vec::new(),
      selected_files: Vec::new(),
      config:         ParseConfig::default(),
      frame:          DataFrame::empty(),
      frame_error:    None,
      rooted:         false,
    }
  }

  pub fn rootdir(&self) -> &Path
  {
    &self.rootdir
  }

  pub fn is_rooted(&self) -> bool
  {
    self.rooted
  }

  pub fn directories(&self) -> &[String]
  {
    &self.directories
  }

  pub fn selected_directories(&self) -> &[String]
  {
    &self.selected_dirs
  }

  pub fn files(&self) -> &[String]
  {
    &self.files
  }

  pub fn selected_files(&self) -> &[String]
  {
    &self.selected_files
  }

  pub fn config(&self) -> &ParseConfig
  {
    &self.config
  }

  pub fn frame(&self) -> &DataFrame
  {
    &self.frame
  }

  /// Error from the most recent frame build, if it failed.
  pub fn frame_error(&self) -> Option<&ParseError>
  {
    self.frame_error.as_ref()
  }

  /// Point the explorer at a new root. Selections that still exist under
  /// the new root are kept, and the frame is rebuilt from their new paths.
  pub fn set_rootdir(
    &mut self,
    path: impl Into<PathBuf>,
  ) -> Vec<Signal>
  {
    self.rootdir = path.into();
    self.rooted = true;
    info!(rootdir = %self.rootdir.display(), "root directory set");
    self.directories = listing::available_directories(&self.rootdir);
    let mut signals = vec![Signal::DirectoriesChanged];
    let dirs = &self.directories;
    self.selected_dirs.retain(|d| dirs.contains(d));
    signals.extend(self.refresh_files(true));
    signals
  }

  /// Names not present in the current listing are ignored.
  pub fn set_selected_directories(
    &mut self,
    names: &[String],
  ) -> Vec<Signal>
  {
    let mut picked: Vec<String> = names
      .iter()
      .filter(|n| {
        let known = self.directories.contains(n);
        if !known
        {
          debug!(dir = %n, "ignoring unknown directory");
        }
        known
      })
      .cloned()
      .collect();
    picked.sort();
    picked.dedup();
    self.selected_dirs = picked;
    self.refresh_files(false)
  }

  pub fn set_selected_files(
    &mut self,
    paths: &[String],
  ) -> Result<Vec<Signal>, ExplorerError>
  {
    let mut picked: Vec<String> = Vec::with_capacity(paths.len());
    for p in paths
    {
      if !self.files.contains(p)
      {
        return Err(ExplorerError::NotAvailable(p.clone()));
      }
      if !picked.contains(p)
      {
        picked.push(p.clone());
      }
    }
    if picked == self.selected_files
    {
      return Ok(Vec::new());
    }
    self.selected_files = picked;
    let mut signals = vec![Signal::SelectionChanged];
    signals.extend(self.rebuild());
    Ok(signals)
  }

  /// Replace the whole parse configuration, `column_ids` given as text.
  pub fn set_parse_config(
    &mut self,
    comment_prefix: CommentPrefix,
    separator: Separator,
    has_header: bool,
    column_ids: &str,
  ) -> Result<Vec<Signal>, ExplorerError>
  {
    let column_ids: ColumnIds = column_ids.parse()?;
    Ok(self.apply_config(ParseConfig { comment_prefix, separator, has_header, column_ids }))
  }

  pub fn set_comment_prefix(
    &mut self,
    prefix: CommentPrefix,
  ) -> Vec<Signal>
  {
    let cfg = ParseConfig { comment_prefix: prefix, ..self.config.clone() };
    self.apply_config(cfg)
  }

  pub fn set_separator(
    &mut self,
    separator: Separator,
  ) -> Vec<Signal>
  {
    let cfg = ParseConfig { separator, ..self.config.clone() };
    self.apply_config(cfg)
  }

  pub fn set_has_header(
    &mut self,
    has_header: bool,
  ) -> Vec<Signal>
  {
    let cfg = ParseConfig { has_header, ..self.config.clone() };
    self.apply_config(cfg)
  }

  pub fn set_column_ids(
    &mut self,
    text: &str,
  ) -> Result<Vec<Signal>, ExplorerError>
  {
    let column_ids: ColumnIds = text.parse()?;
    let cfg = ParseConfig { column_ids, ..self.config.clone() };
    Ok(self.apply_config(cfg))
  }

  fn apply_config(
    &mut self,
    cfg: ParseConfig,
  ) -> Vec<Signal>
  {
    if cfg == self.config
    {
      return Vec::new();
    }
    debug!(?cfg, "parse config changed");
    self.config = cfg;
    self.rebuild()
  }

  /// Rebuild the combined frame from the current selection and config.
  ///
  /// A failed build leaves an empty frame and records the error.
  pub fn rebuild(&mut self) -> Vec<Signal>
  {
    match loader::combine(&self.rootdir, &self.selected_files, &self.config)
    {
      Ok(frame) =>
      {
        debug!(rows = frame.height(), cols = frame.width(), "combined frame rebuilt");
        self.frame = frame;
        self.frame_error = None;
      }
      Err(e) =>
      {
        warn!("frame rebuild failed: {e}");
        self.frame = DataFrame::empty();
        self.frame_error = Some(e);
      }
    }
    vec![Signal::FrameChanged]
  }

  /// Re-list files and prune the selection. `moved` means the same relative
  /// paths now resolve to different files.
  fn refresh_files(
    &mut self,
    moved: bool,
  ) -> Vec<Signal>
  {
    self.files = listing::available_files(&self.rootdir, &self.selected_dirs);
    let mut signals = vec![Signal::FilesChanged];
    let before = self.selected_files.len();
    let files = &self.files;
    self.selected_files.retain(|f| files.contains(f));
    let pruned = self.selected_files.len() != before;
    if pruned || (moved && !self.selected_files.is_empty())
    {
      signals.push(Signal::SelectionChanged);
      signals.extend(self.rebuild());
    }
    signals
  }
}
