use mlua::{
  Error as LuaError,
  Lua,
  Value,
};
use std::path::Path;

/// Install a `require` that only loads `<module_dir>/<name>.lua`.
///
/// Dotted names map to subdirectories. Names containing `..` or starting
/// with `/` are rejected, and the canonical path must stay under
/// `module_dir`.
pub(crate) fn install_require(
  lua: &Lua,
  module_dir: &Path,
) -> mlua::Result<()>
{
  let root = module_dir.to_path_buf();
  let require_fn = lua.create_function(move |lua, name: String| {
    if name.contains("..") || name.starts_with('/') || name.contains('\\')
    {
      return Err(LuaError::external("invalid module name"));
    }
    let path = root.join(format!("{}.lua", name.replace('.', "/")));
    let canon = std::fs::canonicalize(&path)
      .map_err(|e| LuaError::external(format!("module '{name}': {e}")))?;
    let canon_root = std::fs::canonicalize(&root)
      .map_err(|e| LuaError::external(format!("module root: {e}")))?;
    if !canon.starts_with(&canon_root)
    {
      return Err(LuaError::external("module outside config root"));
    }
    let code = std::fs::read_to_string(&canon)
      .map_err(|e| LuaError::external(format!("module '{name}': {e}")))?;
    lua.load(&code).set_name(name).eval::<Value>()
  })?;
  lua.globals().set("require", require_fn)
}
