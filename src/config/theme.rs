use std::{
  fs,
  path::{
    Path,
    PathBuf,
  },
};

use mlua::{
  Error as LuaError,
  Lua,
  Table,
  Value,
};
use tracing::debug;

use super::UiTheme;

/// Copy every string field present in `tbl` onto `theme`.
pub(crate) fn merge_theme_table(
  tbl: &Table,
  theme: &mut UiTheme,
)
{
  let fields: [(&str, &mut Option<String>); 13] = [
    ("pane_bg", &mut theme.pane_bg),
    ("border_fg", &mut theme.border_fg),
    ("focus_border_fg", &mut theme.focus_border_fg),
    ("item_fg", &mut theme.item_fg),
    ("item_bg", &mut theme.item_bg),
    ("selected_item_fg", &mut theme.selected_item_fg),
    ("selected_item_bg", &mut theme.selected_item_bg),
    ("marked_fg", &mut theme.marked_fg),
    ("title_fg", &mut theme.title_fg),
    ("title_bg", &mut theme.title_bg),
    ("header_fg", &mut theme.header_fg),
    ("header_bg", &mut theme.header_bg),
    ("error_fg", &mut theme.error_fg),
  ];
  for (key, slot) in fields
  {
    if let Ok(s) = tbl.get::<String>(key)
    {
      *slot = Some(s);
    }
  }
}

pub(crate) fn resolve_theme_path(
  theme_path: &str,
  root: Option<&Path>,
) -> PathBuf
{
  let candidate = Path::new(theme_path);
  match root
  {
    Some(base) if !candidate.is_absolute() => base.join(candidate),
    _ => candidate.to_path_buf(),
  }
}

/// Evaluate a theme file that returns a table.
pub(crate) fn load_theme_table_from_path(
  lua: &Lua,
  path: &Path,
) -> mlua::Result<Table>
{
  debug!(path = %path.display(), "loading theme");
  let code = fs::read_to_string(path).map_err(|e| {
    LuaError::RuntimeError(format!("read theme '{}' failed: {}", path.display(), e))
  })?;
  match lua.load(&code).set_name(path.to_string_lossy()).eval::<Value>()?
  {
    Value::Table(t) => Ok(t),
    other => Err(LuaError::RuntimeError(format!(
      "theme '{}' returned {} (table expected)",
      path.display(),
      other.type_name()
    ))),
  }
}
