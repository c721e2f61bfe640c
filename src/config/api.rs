use std::{
  cell::RefCell,
  path::PathBuf,
  rc::Rc,
};

use mlua::{
  Error as LuaError,
  Lua,
  Table,
  Value,
};

use super::{
  Config,
  KeyMapping,
  UiPanes,
  UiTheme,
  load_theme_table_from_path,
  merge_theme_table,
  resolve_theme_path,
};

/// Install the `csvdash` global table exposing `config` and `map_action`.
pub(crate) fn install_csvdash_api(
  lua: &Lua,
  config_acc: Rc<RefCell<Config>>,
  maps_acc: Rc<RefCell<Vec<KeyMapping>>>,
  config_root: Option<PathBuf>,
) -> mlua::Result<()>
{
  let api: Table = lua.create_table()?;

  let config_fn = lua.create_function(move |lua, tbl: Value| {
    let Value::Table(t) = tbl
    else
    {
      return Err(LuaError::RuntimeError("csvdash.config expects a table".into()));
    };
    let mut cfg = config_acc
      .try_borrow_mut()
      .map_err(|e| LuaError::RuntimeError(e.to_string()))?;
    if let Ok(v) = t.get::<u32>("config_version")
    {
      cfg.config_version = v;
    }
    if let Ok(keys) = t.get::<Table>("keys")
      && let Ok(ms) = keys.get::<u64>("sequence_timeout_ms")
    {
      cfg.keys.sequence_timeout_ms = ms;
    }
    if let Ok(ui) = t.get::<Table>("ui")
    {
      if let Ok(p) = ui.get::<Table>("panes")
      {
        let base = cfg.ui.panes.clone().unwrap_or_default();
        cfg.ui.panes = Some(UiPanes {
          browse:  p.get::<u16>("browse").unwrap_or(base.browse),
          inspect: p.get::<u16>("inspect").unwrap_or(base.inspect),
          view:    p.get::<u16>("view").unwrap_or(base.view),
        });
      }
      if let Ok(n) = ui.get::<usize>("max_table_rows")
      {
        cfg.ui.max_table_rows = n;
      }
      if let Ok(s) = ui.get::<String>("date_format")
      {
        cfg.ui.date_format = Some(s);
      }
      match ui.get::<Value>("theme")?
      {
        Value::Table(th) =>
        {
          let mut theme = cfg.ui.theme.clone().unwrap_or_default();
          merge_theme_table(&th, &mut theme);
          cfg.ui.theme = Some(theme);
        }
        Value::String(s) =>
        {
          let path = resolve_theme_path(&s.to_str()?, config_root.as_deref());
          let th = load_theme_table_from_path(lua, &path)?;
          let mut theme = UiTheme::default();
          merge_theme_table(&th, &mut theme);
          cfg.ui.theme = Some(theme);
        }
        _ =>
        {}
      }
    }
    Ok(true)
  })?;

  let map_action_fn = lua.create_function(
    move |_, (seq, action, desc): (Value, String, Option<String>)| {
      let mut maps = maps_acc.borrow_mut();
      let mut push = |s: String| {
        maps.push(KeyMapping { sequence: s, action: action.clone(), description: desc.clone() })
      };
      match seq
      {
        Value::String(s) => push(s.to_str()?.to_string()),
        Value::Table(t) =>
        {
          for s in t.sequence_values::<String>()
          {
            push(s?);
          }
        }
        other =>
        {
          return Err(LuaError::RuntimeError(format!(
            "csvdash.map_action: key sequence must be a string or list, got {}",
            other.type_name()
          )));
        }
      }
      Ok(true)
    },
  )?;

  api.set("config", config_fn)?;
  api.set("map_action", map_action_fn)?;
  lua.globals().set("csvdash", api)
}
