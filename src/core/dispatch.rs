//! Event dispatch between the explorer, viewer and plotter.
//!
//! Every state field has a single writer: the explorer owns listings,
//! selection, config and the frame; the viewer owns its menu and display;
//! the plotter owns the plot. Handlers return the signals they raised and
//! the dispatcher routes them until the queue is empty.

use std::{
  collections::VecDeque,
  path::PathBuf,
};

use tracing::trace;

use super::{
  error::DispatchError,
  explorer::Explorer,
  options::{
    CommentPrefix,
    Separator,
  },
  plotter::{
    Plot,
    Plotter,
  },
  viewer::Viewer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event
{
  SetRootdir(PathBuf),
  SetSelectedDirectories(Vec<String>),
  SetSelectedFiles(Vec<String>),
  SetParseConfig
  {
    comment_prefix: CommentPrefix,
    separator:      Separator,
    has_header:     bool,
    column_ids:     String,
  },
  SetCommentPrefix(CommentPrefix),
  SetSeparator(Separator),
  SetHasHeader(bool),
  SetColumnIds(String),
  SelectViewerFile(Option<String>),
  /// Re-read everything from disk without changing any input.
  Reload,
  /// Recompute only the viewer display (re-reads the header from disk).
  RefreshViewer,
}

/// A derived value that changed and may need downstream recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal
{
  DirectoriesChanged,
  FilesChanged,
  SelectionChanged,
  FrameChanged,
  FileChosen,
  DisplayChanged,
  PlotChanged,
}

/// Coarse progress through the browse → inspect flow.
///
/// `Inspecting` and `Plotting` both follow `FilesSelected`. A chosen viewer
/// file takes precedence; otherwise a drawable chart means `Plotting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase
{
  Unconfigured,
  Browsing,
  FilesListed,
  FilesSelected,
  Inspecting,
  Plotting,
}

#[derive(Debug, Default)]
pub struct DispatchReport
{
  pub signals: Vec<Signal>,
  pub error:   Option<DispatchError>,
}

impl DispatchReport
{
  pub fn changed(
    &self,
    sig: Signal,
  ) -> bool
  {
    self.signals.contains(&sig)
  }
}

#[derive(Debug, Default)]
pub struct Dashboard
{
  pub explorer: Explorer,
  pub viewer:   Viewer,
  pub plotter:  Plotter,
}

impl Dashboard
{
  pub fn new() -> Self
  {
    Self::default()
  }

  pub fn phase(&self) -> Phase
  {
    let ex = &self.explorer;
    if !ex.is_rooted()
    {
      Phase::Unconfigured
    }
    else if self.viewer.selected().is_some()
    {
      Phase::Inspecting
    }
    else if matches!(self.plotter.plot(), Plot::Lines { .. })
    {
      Phase::Plotting
    }
    else if !ex.selected_files().is_empty()
    {
      Phase::FilesSelected
    }
    else if !ex.files().is_empty()
    {
      Phase::FilesListed
    }
    else
    {
      Phase::Browsing
    }
  }

  /// Apply `event` and run every recomputation it triggers.
  pub fn dispatch(
    &mut self,
    event: Event,
  ) -> DispatchReport
  {
    trace!(?event, "dispatch");
    let initial = match self.apply(event)
    {
      Ok(signals) => signals,
      Err(e) =>
      {
        return DispatchReport { signals: Vec::new(), error: Some(e) };
      }
    };
    let mut report = DispatchReport::default();
    let mut queue: VecDeque<Signal> = initial.into();
    while let Some(sig) = queue.pop_front()
    {
      if report.signals.contains(&sig)
      {
        continue;
      }
      report.signals.push(sig);
      for next in self.route(sig)
      {
        if !report.signals.contains(&next)
        {
          queue.push_back(next);
        }
      }
    }
    report
  }

  fn apply(
    &mut self,
    event: Event,
  ) -> Result<Vec<Signal>, DispatchError>
  {
    let ex = &mut self.explorer;
    let signals = match event
    {
      Event::SetRootdir(path) => ex.set_rootdir(path),
      Event::SetSelectedDirectories(names) => ex.set_selected_directories(&names),
      Event::SetSelectedFiles(paths) => ex.set_selected_files(&paths)?,
      Event::SetParseConfig { comment_prefix, separator, has_header, column_ids } =>
      {
        ex.set_parse_config(comment_prefix, separator, has_header, &column_ids)?
      }
      Event::SetCommentPrefix(p) => ex.set_comment_prefix(p),
      Event::SetSeparator(s) => ex.set_separator(s),
      Event::SetHasHeader(b) => ex.set_has_header(b),
      Event::SetColumnIds(text) => ex.set_column_ids(&text)?,
      Event::SelectViewerFile(name) => self.viewer.select_file(name.as_deref())?,
      Event::Reload => ex.rebuild(),
      Event::RefreshViewer => vec![Signal::FileChosen],
    };
    Ok(signals)
  }

  fn route(
    &mut self,
    sig: Signal,
  ) -> Vec<Signal>
  {
    match sig
    {
      Signal::SelectionChanged => self.viewer.sync_menu(self.explorer.selected_files()),
      Signal::FrameChanged =>
      {
        let mut out = self.viewer.refresh(&self.explorer);
        out.extend(self.plotter.refresh(self.explorer.frame()));
        out
      }
      Signal::FileChosen => self.viewer.refresh(&self.explorer),
      Signal::DirectoriesChanged
      | Signal::FilesChanged
      | Signal::DisplayChanged
      | Signal::PlotChanged => Vec::new(),
    }
  }
}
