//! Error taxonomy for the dashboard core.
//!
//! None of these are fatal: path errors collapse into empty listings, parse
//! errors collapse into an empty frame, and display errors are rendered
//! inline by the pane that hit them.

use std::{
  io,
  path::PathBuf,
};

use polars::prelude::PolarsError;
use thiserror::Error;

/// A directory could not be listed.
#[derive(Debug, Error)]
pub enum PathError
{
  #[error("cannot read directory {path}: {source}")]
  Unreadable
  {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
}

/// A selected file could not be turned into a frame.
#[derive(Debug, Error)]
pub enum ParseError
{
  #[error("cannot read {path}: {source}")]
  Io
  {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("malformed delimited data in {file}: {source}")]
  Malformed
  {
    file:   String,
    #[source]
    source: PolarsError,
  },

  #[error("{file}: column name 'filename' is reserved for the file tag")]
  ReservedColumn
  {
    file: String,
  },

  #[error("cannot build frame for {file}: {source}")]
  Frame
  {
    file:   String,
    #[source]
    source: PolarsError,
  },

  #[error("cannot combine frames: {0}")]
  Combine(#[source] PolarsError),

  #[error("column {index} is out of range for {file} ({width} columns)")]
  ColumnOutOfRange
  {
    file:  String,
    index: usize,
    width: usize,
  },

  #[error("columns of {file} ({found}) do not match earlier files ({expected})")]
  SchemaMismatch
  {
    file:     String,
    expected: String,
    found:    String,
  },
}

/// A previously valid viewer selection can no longer be shown.
#[derive(Debug, Error)]
pub enum DisplayError
{
  #[error("cannot read header of {path}: {source}")]
  Header
  {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("frame has no column named '{0}'")]
  MissingColumn(String),

  #[error("cannot slice frame: {0}")]
  Frame(#[from] PolarsError),

  #[error("{0}")]
  Upstream(String),
}

/// The column id text typed by the user was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnIdsError
{
  #[error("no column ids given")]
  Empty,
  #[error("empty column id in '{0}'")]
  EmptyItem(String),
  #[error("'{0}' is not a column number")]
  NotANumber(String),
  #[error("column ids start at 1")]
  Zero,
  #[error("column {0} listed more than once")]
  Duplicate(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError
{
  #[error("'{0}' is not in the current file listing")]
  NotAvailable(String),
  #[error(transparent)]
  ColumnIds(#[from] ColumnIdsError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError
{
  #[error("'{0}' is not one of the selected files")]
  NotInMenu(String),
}

/// Any rejection produced while dispatching an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError
{
  #[error(transparent)]
  Explorer(#[from] ExplorerError),
  #[error(transparent)]
  Viewer(#[from] ViewerError),
}
