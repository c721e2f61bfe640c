use std::{
  env,
  path::{
    Path,
    PathBuf,
  },
};

/// Resolved configuration locations for csvdash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths
{
  pub root:   PathBuf,
  pub entry:  PathBuf,
  pub exists: bool,
}

impl ConfigPaths
{
  pub fn from_root(root: PathBuf) -> Self
  {
    let entry = root.join("init.lua");
    let exists = entry.is_file();
    Self { root, entry, exists }
  }

  /// Directory searched by the restricted `require`.
  pub fn module_dir(&self) -> PathBuf
  {
    self.root.join("lua")
  }
}

/// Discover the configuration directory from the process environment.
///
/// Order: `CSVDASH_CONFIG_DIR`, `XDG_CONFIG_HOME/csvdash`, then the platform
/// default (`~/.config/csvdash` on Unix; `%LOCALAPPDATA%`, `%APPDATA%`,
/// `%USERPROFILE%\.config` on Windows).
pub fn discover_config_paths() -> ConfigPaths
{
  discover_config_paths_with(|k| env::var(k).ok())
}

/// Same as [`discover_config_paths`] with an injectable variable lookup.
pub fn discover_config_paths_with(lookup: impl Fn(&str) -> Option<String>) -> ConfigPaths
{
  let var = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

  let root = if let Some(dir) = var("CSVDASH_CONFIG_DIR")
  {
    PathBuf::from(dir)
  }
  else if let Some(xdg) = var("XDG_CONFIG_HOME")
  {
    Path::new(&xdg).join("csvdash")
  }
  else
  {
    platform_default(&var)
  };
  ConfigPaths::from_root(root)
}

#[cfg(not(windows))]
fn platform_default(var: &dyn Fn(&str) -> Option<String>) -> PathBuf
{
  match var("HOME")
  {
    Some(home) => Path::new(&home).join(".config").join("csvdash"),
    None => Path::new(".config").join("csvdash"),
  }
}

#[cfg(windows)]
fn platform_default(var: &dyn Fn(&str) -> Option<String>) -> PathBuf
{
  if let Some(local) = var("LOCALAPPDATA")
  {
    Path::new(&local).join("csvdash")
  }
  else if let Some(app) = var("APPDATA")
  {
    Path::new(&app).join("csvdash")
  }
  else if let Some(up) = var("USERPROFILE")
  {
    Path::new(&up).join(".config").join("csvdash")
  }
  else
  {
    Path::new(".config").join("csvdash")
  }
}
