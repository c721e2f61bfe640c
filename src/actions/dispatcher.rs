// Central action dispatcher.
//
// Accepts action strings, supports ';' separated sequences, and executes
// internal actions parsed by `internal`.
use tracing::debug;

use super::internal::{
  execute_internal_action,
  parse_internal_action,
};
use crate::app::App;

/// Parse and execute an action string. Returns whether anything ran.
pub fn dispatch_action(
  app: &mut App,
  action: &str,
) -> bool
{
  let parts: Vec<&str> =
    action.split(';').map(|s| s.trim()).filter(|s| !s.is_empty()).collect();
  if parts.len() > 1
  {
    let mut any = false;
    for p in parts
    {
      any |= dispatch_action(app, p);
      if app.should_quit
      {
        break;
      }
    }
    return any;
  }

  match parse_internal_action(action)
  {
    Some(int) =>
    {
      debug!(action, "dispatch action");
      execute_internal_action(app, int);
      true
    }
    None =>
    {
      app.add_message(format!("unknown action: {action}"));
      false
    }
  }
}
