//! Core application state, used both by the TUI and integration tests.
//!
//! The [`App`] struct wraps the [`Dashboard`] (explorer, viewer and plotter
//! state) together with everything the terminal interface needs on top of
//! it: which widget has focus, list cursors, text-input buffers, the message
//! log, overlays, configuration and key maps.

mod keys;
mod widgets;

use std::{
  cmp::min,
  collections::{
    HashMap,
    HashSet,
  },
  path::PathBuf,
  time::Instant,
};

use ratatui::widgets::ListState;
use tracing::{
  debug,
  warn,
};

pub use self::widgets::{
  Focus,
  TextInput,
};
use crate::{
  config::{
    self,
    Config,
    KeyMapping,
  },
  core::{
    Dashboard,
    Event,
    Signal,
    explorer::DEFAULT_ROOTDIR,
  },
};

const MAX_MESSAGES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay
{
  None,
  Messages,
  Help,
}

#[derive(Debug, Clone, Default)]
pub struct KeyState
{
  pub maps:     Vec<KeyMapping>,
  pub lookup:   HashMap<String, String>,
  pub prefixes: HashSet<String>,
  pub pending:  String,
  pub last_at:  Option<Instant>,
}

/// Mutable application state driving the dashboard UI.
pub struct App
{
  pub(crate) dash:              Dashboard,
  pub(crate) focus:             Focus,
  pub(crate) rootdir_input:     TextInput,
  pub(crate) columns_input:     TextInput,
  pub(crate) dir_list:          ListState,
  pub(crate) file_list:         ListState,
  pub(crate) viewer_list:       ListState,
  pub(crate) table_scroll:      usize,
  pub(crate) recent_messages:   Vec<String>,
  pub(crate) status_error:      Option<String>,
  pub(crate) overlay:           Overlay,
  pub(crate) config:            Config,
  pub(crate) keys:              KeyState,
  pub(crate) force_full_redraw: bool,
  pub(crate) should_quit:       bool,
}

impl App
{
  /// Construct an [`App`] with the discovered user configuration and the
  /// root directory listed.
  pub fn new() -> Self
  {
    let paths = config::discover_config_paths();
    let (cfg, maps, err) = match config::load_config(&paths)
    {
      Ok((cfg, maps)) => (cfg, maps, None),
      Err(e) =>
      {
        warn!("config load error: {e}");
        (config::default_config(), config::rust_default_keymaps(), Some(e))
      }
    };
    let mut app = Self::with_config(cfg, maps);
    if let Some(e) = err
    {
      app.add_error(format!("config load error: {e}"));
    }
    app
  }

  /// Construct an [`App`] from an explicit configuration. The file system
  /// is listed from the default root straight away.
  pub fn with_config(
    config: Config,
    maps: Vec<KeyMapping>,
  ) -> Self
  {
    let columns = crate::core::ColumnIds::default().to_string();
    let mut app = Self {
      dash: Dashboard::new(),
      focus: Focus::Directories,
      rootdir_input: TextInput::new(DEFAULT_ROOTDIR),
      columns_input: TextInput::new(&columns),
      dir_list: ListState::default(),
      file_list: ListState::default(),
      viewer_list: ListState::default(),
      table_scroll: 0,
      recent_messages: Vec::new(),
      status_error: None,
      overlay: Overlay::None,
      config,
      keys: KeyState::default(),
      force_full_redraw: false,
      should_quit: false,
    };
    app.set_keymaps(maps);
    app.dispatch(Event::SetRootdir(PathBuf::from(DEFAULT_ROOTDIR)));
    app
  }

  pub fn dashboard(&self) -> &Dashboard
  {
    &self.dash
  }

  pub fn config(&self) -> &Config
  {
    &self.config
  }

  pub fn focus(&self) -> Focus
  {
    self.focus
  }

  pub fn set_focus(
    &mut self,
    focus: Focus,
  )
  {
    if self.focus != focus
      && let Some(input) = self.input_mut(self.focus)
    {
      input.revert();
    }
    debug!(focus = crate::enums::focus_to_str(focus), "focus changed");
    self.focus = focus;
    self.keys.pending.clear();
  }

  pub fn overlay(&self) -> Overlay
  {
    self.overlay
  }

  pub fn messages(&self) -> &[String]
  {
    &self.recent_messages
  }

  pub fn status_error(&self) -> Option<&str>
  {
    self.status_error.as_deref()
  }

  pub fn should_quit(&self) -> bool
  {
    self.should_quit
  }

  pub fn rootdir_input(&self) -> &TextInput
  {
    &self.rootdir_input
  }

  pub fn columns_input(&self) -> &TextInput
  {
    &self.columns_input
  }

  pub fn table_scroll(&self) -> usize
  {
    self.table_scroll
  }

  /// Cursor row of the list widget behind `focus`, if it is a list.
  pub fn cursor(
    &self,
    focus: Focus,
  ) -> Option<usize>
  {
    match focus
    {
      Focus::Directories => self.dir_list.selected(),
      Focus::Files => self.file_list.selected(),
      Focus::ViewerFiles => self.viewer_list.selected(),
      _ => None,
    }
  }

  pub fn add_message(
    &mut self,
    msg: impl Into<String>,
  )
  {
    self.recent_messages.push(msg.into());
    if self.recent_messages.len() > MAX_MESSAGES
    {
      let extra = self.recent_messages.len() - MAX_MESSAGES;
      self.recent_messages.drain(..extra);
    }
  }

  pub(crate) fn add_error(
    &mut self,
    msg: String,
  )
  {
    self.add_message(msg.clone());
    self.status_error = Some(msg);
  }

  /// Forward `event` to the dashboard and bring the widgets in line with
  /// the result. Returns false when the event was rejected.
  pub fn dispatch(
    &mut self,
    event: Event,
  ) -> bool
  {
    let report = self.dash.dispatch(event);
    if let Some(e) = report.error
    {
      self.add_error(e.to_string());
      return false;
    }
    self.status_error = None;
    let ex = &self.dash.explorer;
    if report.changed(Signal::DirectoriesChanged)
    {
      self.rootdir_input.reset(&ex.rootdir().to_string_lossy());
      clamp(&mut self.dir_list, ex.directories().len());
    }
    if report.changed(Signal::FilesChanged)
    {
      clamp(&mut self.file_list, ex.files().len());
    }
    if report.changed(Signal::SelectionChanged)
    {
      clamp(&mut self.viewer_list, self.dash.viewer.menu().len());
    }
    if report.changed(Signal::FrameChanged)
      && let Some(err) = self.dash.explorer.frame_error()
    {
      let msg = err.to_string();
      self.add_error(msg);
    }
    if report.changed(Signal::DisplayChanged)
    {
      self.table_scroll = 0;
    }
    true
  }

  fn input_mut(
    &mut self,
    focus: Focus,
  ) -> Option<&mut TextInput>
  {
    match focus
    {
      Focus::Rootdir => Some(&mut self.rootdir_input),
      Focus::Columns => Some(&mut self.columns_input),
      _ => None,
    }
  }

  pub(crate) fn focused_input_mut(&mut self) -> Option<&mut TextInput>
  {
    self.input_mut(self.focus)
  }

  /// Commit the focused text input and dispatch its setter.
  pub fn commit_input(&mut self) -> bool
  {
    match self.focus
    {
      Focus::Rootdir =>
      {
        let text = self.rootdir_input.commit();
        self.dispatch(Event::SetRootdir(PathBuf::from(text.trim())))
      }
      Focus::Columns =>
      {
        let text = self.columns_input.value().to_string();
        if self.dispatch(Event::SetColumnIds(text))
        {
          let shown = self.dash.explorer.config().column_ids.to_string();
          self.columns_input.reset(&shown);
          true
        }
        else
        {
          false
        }
      }
      _ => false,
    }
  }

  fn list_len(
    &self,
    focus: Focus,
  ) -> usize
  {
    match focus
    {
      Focus::Directories => self.dash.explorer.directories().len(),
      Focus::Files => self.dash.explorer.files().len(),
      Focus::ViewerFiles => self.dash.viewer.menu().len(),
      _ => 0,
    }
  }

  fn list_state_mut(
    &mut self,
    focus: Focus,
  ) -> Option<&mut ListState>
  {
    match focus
    {
      Focus::Directories => Some(&mut self.dir_list),
      Focus::Files => Some(&mut self.file_list),
      Focus::ViewerFiles => Some(&mut self.viewer_list),
      _ => None,
    }
  }

  /// Move the focused list cursor by `delta` rows, clamped to the list.
  pub fn move_cursor(
    &mut self,
    delta: isize,
  )
  {
    let len = self.list_len(self.focus);
    if let Some(state) = self.list_state_mut(self.focus)
    {
      if len == 0
      {
        state.select(None);
        return;
      }
      let cur = state.selected().unwrap_or(0) as isize;
      let next = (cur + delta).clamp(0, len as isize - 1) as usize;
      state.select(Some(next));
    }
  }

  pub fn cursor_to_top(&mut self)
  {
    let len = self.list_len(self.focus);
    if let Some(state) = self.list_state_mut(self.focus)
    {
      state.select(if len == 0 { None } else { Some(0) });
    }
  }

  pub fn cursor_to_bottom(&mut self)
  {
    let len = self.list_len(self.focus);
    if let Some(state) = self.list_state_mut(self.focus)
    {
      state.select(len.checked_sub(1));
    }
  }

  /// Toggle the item under the cursor in the focused multi-select list.
  pub fn toggle_current(&mut self) -> bool
  {
    let Some(idx) = self.cursor(self.focus)
    else
    {
      return false;
    };
    let ex = &self.dash.explorer;
    match self.focus
    {
      Focus::Directories =>
      {
        let Some(name) = ex.directories().get(idx).cloned()
        else
        {
          return false;
        };
        let next = toggled(ex.selected_directories(), name);
        self.dispatch(Event::SetSelectedDirectories(next))
      }
      Focus::Files =>
      {
        let Some(name) = ex.files().get(idx).cloned()
        else
        {
          return false;
        };
        let next = toggled(ex.selected_files(), name);
        self.dispatch(Event::SetSelectedFiles(next))
      }
      _ => false,
    }
  }

  /// Select every item of the focused multi-select list.
  pub fn select_all(&mut self) -> bool
  {
    let ex = &self.dash.explorer;
    match self.focus
    {
      Focus::Directories =>
      {
        let all = ex.directories().to_vec();
        self.dispatch(Event::SetSelectedDirectories(all))
      }
      Focus::Files =>
      {
        let all = ex.files().to_vec();
        self.dispatch(Event::SetSelectedFiles(all))
      }
      _ => false,
    }
  }

  pub fn select_none(&mut self) -> bool
  {
    match self.focus
    {
      Focus::Directories => self.dispatch(Event::SetSelectedDirectories(Vec::new())),
      Focus::Files => self.dispatch(Event::SetSelectedFiles(Vec::new())),
      Focus::ViewerFiles => self.dispatch(Event::SelectViewerFile(None)),
      _ => false,
    }
  }

  pub fn cycle_comment_prefix(
    &mut self,
    forward: bool,
  ) -> bool
  {
    let cur = self.dash.explorer.config().comment_prefix;
    let next = if forward { cur.next() } else { cur.prev() };
    self.dispatch(Event::SetCommentPrefix(next))
  }

  pub fn cycle_separator(
    &mut self,
    forward: bool,
  ) -> bool
  {
    let cur = self.dash.explorer.config().separator;
    let next = if forward { cur.next() } else { cur.prev() };
    self.dispatch(Event::SetSeparator(next))
  }

  pub fn toggle_header(&mut self) -> bool
  {
    let cur = self.dash.explorer.config().has_header;
    self.dispatch(Event::SetHasHeader(!cur))
  }

  /// Show the viewer menu entry under the cursor.
  pub fn choose_viewer_file(&mut self) -> bool
  {
    let Some(name) = self.viewer_list.selected().and_then(|i| self.dash.viewer.menu().get(i))
    else
    {
      return false;
    };
    let name = name.clone();
    self.dispatch(Event::SelectViewerFile(Some(name)))
  }

  /// Rebuild the frame from disk and refresh both views.
  pub fn reload(&mut self) -> bool
  {
    debug!("reload requested");
    let ok = self.dispatch(Event::Reload);
    if ok && self.dash.explorer.frame_error().is_none()
    {
      self.add_message(format!(
        "Reloaded {} file(s), {} row(s)",
        self.dash.explorer.selected_files().len(),
        self.dash.explorer.frame().height()
      ));
    }
    ok
  }

  /// Scroll the inspect table, keeping at least one row visible.
  pub fn scroll_table(
    &mut self,
    delta: isize,
  )
  {
    let rows = match self.dash.viewer.display()
    {
      crate::core::viewer::Display::Loaded { frame, .. } => frame.height(),
      _ => 0,
    };
    let max = rows.saturating_sub(1) as isize;
    self.table_scroll = (self.table_scroll as isize + delta).clamp(0, max.max(0)) as usize;
  }
}

impl Default for App
{
  fn default() -> Self
  {
    Self::new()
  }
}

fn clamp(
  state: &mut ListState,
  len: usize,
)
{
  if len == 0
  {
    state.select(None);
    return;
  }
  let sel = state.selected().unwrap_or(0);
  state.select(Some(min(sel, len - 1)));
}

fn toggled(
  current: &[String],
  item: String,
) -> Vec<String>
{
  if current.contains(&item)
  {
    current.iter().filter(|c| **c != item).cloned().collect()
  }
  else
  {
    let mut next = current.to_vec();
    next.push(item);
    next
  }
}
