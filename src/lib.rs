//! csvdash: browse directories under a root, combine the selected delimited
//! text files into one table, inspect them one at a time and plot them.
//!
//! The [`core`] module holds the explorer, viewer and plotter state and the
//! dispatcher that keeps them consistent. Everything else is the terminal
//! front end built on top of it.

pub mod actions;
pub mod app;
pub mod config;
pub mod core;
pub mod enums;
pub mod input;
pub mod keymap;
pub mod runtime;
pub mod runtime_util;
pub mod trace;
pub mod ui;
pub mod util;

pub use app::App;
