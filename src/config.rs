//! Presentation configuration loaded from an optional Lua file.
//!
//! `init.lua` can adjust the theme, pane split, table row limit, date format
//! and key maps. It never touches the parse or browse defaults; those always
//! start from the built-in values.

mod api;
mod defaults;
mod lua_engine;
mod paths;
mod require;
mod theme;
mod types;

use std::{
  cell::RefCell,
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
  rc::Rc,
};

use thiserror::Error;
use tracing::{
  debug,
  info,
};

pub(crate) use api::install_csvdash_api;
pub use defaults::{
  default_config,
  rust_default_keymaps,
};
pub use lua_engine::LuaEngine;
pub use paths::{
  ConfigPaths,
  discover_config_paths,
  discover_config_paths_with,
};
pub(crate) use require::install_require;
pub(crate) use theme::{
  load_theme_table_from_path,
  merge_theme_table,
  resolve_theme_path,
};
pub use types::{
  Config,
  KeyMapping,
  KeysConfig,
  UiConfig,
  UiPanes,
  UiTheme,
};

#[derive(Debug, Error)]
pub enum ConfigError
{
  #[error("lua init failed: {0}")]
  Init(#[source] mlua::Error),

  #[error("read {path} failed: {source}")]
  Read
  {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("{chunk} execution failed: {source}")]
  Exec
  {
    chunk:  String,
    #[source]
    source: mlua::Error,
  },
}

/// Final configuration plus every key mapping (defaults first).
pub type ConfigArtifacts = (Config, Vec<KeyMapping>);

/// Load `init.lua` from `paths`, or just the defaults when it is absent.
pub fn load_config(paths: &ConfigPaths) -> Result<ConfigArtifacts, ConfigError>
{
  if !paths.exists
  {
    debug!(entry = %paths.entry.display(), "no user config");
    return Ok((default_config(), rust_default_keymaps()));
  }
  let code = fs::read_to_string(&paths.entry)
    .map_err(|source| ConfigError::Read { path: paths.entry.clone(), source })?;
  info!(entry = %paths.entry.display(), "loading user config");
  run_config(&code, &paths.entry.to_string_lossy(), &paths.root)
}

/// Evaluate config source directly, with `root` as the config directory.
pub fn load_config_from_code(
  code: &str,
  root: Option<&Path>,
) -> Result<ConfigArtifacts, ConfigError>
{
  let root = match root
  {
    Some(p) => p.to_path_buf(),
    None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
  };
  run_config(code, "inline init.lua", &root)
}

fn run_config(
  code: &str,
  chunk: &str,
  root: &Path,
) -> Result<ConfigArtifacts, ConfigError>
{
  let engine = LuaEngine::new().map_err(ConfigError::Init)?;
  let lua = engine.lua();

  let config_acc = Rc::new(RefCell::new(default_config()));
  let maps_acc = Rc::new(RefCell::new(rust_default_keymaps()));
  let exec_err = |source| ConfigError::Exec { chunk: chunk.to_string(), source };

  install_csvdash_api(
    lua,
    Rc::clone(&config_acc),
    Rc::clone(&maps_acc),
    Some(root.to_path_buf()),
  )
  .map_err(ConfigError::Init)?;
  install_require(lua, &ConfigPaths::from_root(root.to_path_buf()).module_dir())
    .map_err(ConfigError::Init)?;

  lua.load(code).set_name(chunk).exec().map_err(exec_err)?;

  let cfg = config_acc.borrow().clone();
  let maps = maps_acc.borrow().clone();
  Ok((cfg, maps))
}
