//! Delimited-file loading and the combined-frame build.

use std::{
  fs,
  io::Cursor,
  path::Path,
};

use polars::prelude::{
  CsvParseOptions,
  CsvReadOptions,
  DataFrame,
  IntoLazy,
  LazyFrame,
  PlSmallStr,
  PolarsError,
  SerReader,
  UnionArgs,
  concat,
  lit,
};
use tracing::debug;

use super::{
  error::ParseError,
  frame::FILENAME_COLUMN,
  options::ParseConfig,
};

/// Strip comment lines and blank lines, keeping everything else verbatim.
fn data_lines(
  text: &str,
  cfg: &ParseConfig,
) -> String
{
  let mut out = String::with_capacity(text.len());
  for line in text.lines()
  {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() || cfg.comment_prefix.matches(line)
    {
      continue;
    }
    out.push_str(line);
    out.push('\n');
  }
  out
}

/// Parse `path` into a frame with every raw column.
///
/// Without a header the columns are named `column_1`, `column_2`, ... and
/// a file with no data lines gives a frame with no columns. `label` names
/// the file in error messages.
pub fn read_table(
  path: &Path,
  label: &str,
  cfg: &ParseConfig,
) -> Result<DataFrame, ParseError>
{
  let bytes = fs::read(path)
    .map_err(|source| ParseError::Io { path: path.to_path_buf(), source })?;
  let text = String::from_utf8_lossy(&bytes);
  let body = data_lines(&text, cfg);
  if body.is_empty()
  {
    debug!(file = label, "no data lines");
    return Ok(DataFrame::empty());
  }

  let parse = CsvParseOptions::default()
    .with_separator(cfg.separator.as_byte())
    .with_comment_prefix(Some(cfg.comment_prefix.as_str()))
    .with_truncate_ragged_lines(false);
  let df = CsvReadOptions::default()
    .with_has_header(cfg.has_header)
    .with_infer_schema_length(None)
    .with_parse_options(parse)
    .into_reader_with_file_handle(Cursor::new(body.into_bytes()))
    .finish()
    .map_err(|source| ParseError::Malformed { file: label.to_string(), source })?;
  debug!(file = label, rows = df.height(), width = df.width(), "parsed table");
  Ok(df)
}

/// Parse one file, keep the configured columns, and tag each row with
/// `rel` in the `filename` column.
pub fn load_file(
  root: &Path,
  rel: &str,
  cfg: &ParseConfig,
) -> Result<DataFrame, ParseError>
{
  let table = read_table(&root.join(rel), rel, cfg)?;
  let names = table.get_column_names_owned();
  let width = names.len();
  let mut picked: Vec<PlSmallStr> = Vec::with_capacity(cfg.column_ids.len());
  for &id in cfg.column_ids.as_slice()
  {
    let Some(name) = id.checked_sub(1).and_then(|p| names.get(p))
    else
    {
      return Err(ParseError::ColumnOutOfRange { file: rel.to_string(), index: id, width });
    };
    if name.as_str() == FILENAME_COLUMN
    {
      return Err(ParseError::ReservedColumn { file: rel.to_string() });
    }
    picked.push(name.clone());
  }
  let frame_err = |source: PolarsError| ParseError::Frame { file: rel.to_string(), source };
  table
    .select(picked)
    .map_err(frame_err)?
    .lazy()
    .with_column(lit(rel).alias(FILENAME_COLUMN))
    .collect()
    .map_err(frame_err)
}

fn joined_names(df: &DataFrame) -> String
{
  df.get_column_names().iter().map(|n| n.as_str()).collect::<Vec<_>>().join(",")
}

/// Load and concatenate `files` in order. An empty list gives an empty
/// frame.
///
/// Every file must produce the same column names. Column types are widened
/// to a common supertype, so an integer column meeting a float one becomes
/// float.
pub fn combine(
  root: &Path,
  files: &[String],
  cfg: &ParseConfig,
) -> Result<DataFrame, ParseError>
{
  let mut frames: Vec<LazyFrame> = Vec::with_capacity(files.len());
  let mut expected: Option<String> = None;
  for rel in files
  {
    let frame = load_file(root, rel, cfg)?;
    let found = joined_names(&frame);
    let names = expected.get_or_insert_with(|| found.clone());
    if *names != found
    {
      return Err(ParseError::SchemaMismatch {
        file: rel.clone(),
        expected: names.clone(),
        found,
      });
    }
    frames.push(frame.lazy());
  }
  if frames.is_empty()
  {
    return Ok(DataFrame::empty());
  }
  let args = UnionArgs { to_supertypes: true, rechunk: true, ..UnionArgs::default() };
  concat(frames, args).and_then(LazyFrame::collect).map_err(ParseError::Combine)
}
