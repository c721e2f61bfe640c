use super::{
  Config,
  KeyMapping,
};

fn map(
  sequence: &str,
  action: &str,
  description: &str,
) -> KeyMapping
{
  KeyMapping {
    sequence:    sequence.into(),
    action:      action.into(),
    description: Some(description.into()),
  }
}

/// Built-in key maps, applied before user config.
pub fn rust_default_keymaps() -> Vec<KeyMapping>
{
  vec![
    map("q", "quit", "Quit csvdash"),
    map("r", "reload", "Reload selected files"),
    map("m", "messages:toggle", "Show or hide messages"),
    map("?", "help:toggle", "Show key bindings"),
    map("gg", "nav:top", "Go to first item"),
    map("G", "nav:bottom", "Go to last item"),
    map("a", "select:all", "Select every item in the list"),
    map("A", "select:none", "Clear the list selection"),
    map("<C-n>", "focus:next", "Focus next widget"),
    map("<C-p>", "focus:prev", "Focus previous widget"),
  ]
}

/// Built-in configuration values.
pub fn default_config() -> Config
{
  let mut cfg = Config { config_version: 1, ..Config::default() };
  cfg.keys.sequence_timeout_ms = 800;
  cfg
}
