#[derive(Debug, Clone, Default)]
/// Key-handling configuration (currently only sequence timeout).
pub struct KeysConfig
{
  pub sequence_timeout_ms: u64,
}

#[derive(Debug, Clone, Default)]
/// Top-level configuration composed from Lua input.
pub struct Config
{
  pub config_version: u32,
  pub keys:           KeysConfig,
  pub ui:             UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single key mapping supplied by `csvdash.map_action` or the defaults.
pub struct KeyMapping
{
  pub sequence:    String,
  pub action:      String,
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pane split: `browse` is the width share of the left column, `inspect` and
/// `view` share the height of the right column.
pub struct UiPanes
{
  pub browse:  u16,
  pub inspect: u16,
  pub view:    u16,
}

impl Default for UiPanes
{
  fn default() -> Self
  {
    Self { browse: 35, inspect: 50, view: 50 }
  }
}

#[derive(Debug, Clone)]
/// User interface configuration block replicated from Lua.
pub struct UiConfig
{
  pub panes:          Option<UiPanes>,
  pub max_table_rows: usize,
  pub date_format:    Option<String>,
  pub theme:          Option<UiTheme>,
}

impl Default for UiConfig
{
  fn default() -> Self
  {
    Self { panes: None, max_table_rows: 1000, date_format: None, theme: None }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Theme colours for the UI. Fields are optional and fall back to defaults.
pub struct UiTheme
{
  pub pane_bg:          Option<String>,
  pub border_fg:        Option<String>,
  pub focus_border_fg:  Option<String>,
  pub item_fg:          Option<String>,
  pub item_bg:          Option<String>,
  pub selected_item_fg: Option<String>,
  pub selected_item_bg: Option<String>,
  pub marked_fg:        Option<String>,
  pub title_fg:         Option<String>,
  pub title_bg:         Option<String>,
  pub header_fg:        Option<String>,
  pub header_bg:        Option<String>,
  pub error_fg:         Option<String>,
}
