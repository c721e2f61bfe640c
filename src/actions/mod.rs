//! Named actions that key maps can trigger.

mod dispatcher;
pub mod internal;

pub use dispatcher::dispatch_action;
pub use internal::{
  InternalAction,
  parse_internal_action,
};
