use mlua::{
  Lua,
  LuaOptions,
  Result as LuaResult,
  StdLib,
  Value,
};

/// Sandboxed Lua state used to evaluate `init.lua`.
///
/// Only the `string`, `table` and `math` libraries are loaded; there is no
/// `io`, `os`, `debug` or `package`, and the base `dofile`/`loadfile` are
/// removed. `require` is replaced by the restricted loader from `require.rs`.
pub struct LuaEngine
{
  lua: Lua,
}

impl LuaEngine
{
  pub fn new() -> LuaResult<Self>
  {
    let lua = Lua::new_with(
      StdLib::STRING | StdLib::TABLE | StdLib::MATH,
      LuaOptions::default(),
    )?;
    // The base library still brings file loaders along
    let globals = lua.globals();
    for name in ["dofile", "loadfile"]
    {
      globals.set(name, Value::Nil)?;
    }
    Ok(Self { lua })
  }

  pub fn lua(&self) -> &Lua
  {
    &self.lua
  }
}
