//! Dashboard state and the data-flow between its three components.
//!
//! Nothing in here touches the terminal; the `ui` and `input` modules read
//! and drive a [`Dashboard`] through [`Event`]s.

pub mod dispatch;
pub mod error;
pub mod explorer;
pub mod frame;
pub mod header;
pub mod listing;
pub mod loader;
pub mod options;
pub mod plotter;
pub mod viewer;

pub use dispatch::{
  Dashboard,
  DispatchReport,
  Event,
  Phase,
  Signal,
};
pub use options::{
  ColumnIds,
  CommentPrefix,
  ParseConfig,
  Separator,
};
