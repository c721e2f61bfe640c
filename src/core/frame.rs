//! Read helpers over the polars `DataFrame` holding the combined rows.

use polars::prelude::{
  AnyValue,
  DataFrame,
};

/// Name of the tag column appended to every combined frame.
pub const FILENAME_COLUMN: &str = "filename";

/// Cell text as shown in the table. Nulls are empty and strings unquoted.
pub fn any_to_string(value: AnyValue) -> String
{
  match value
  {
    AnyValue::Null => String::new(),
    AnyValue::String(s) => s.to_string(),
    AnyValue::StringOwned(s) => s.to_string(),
    other => other.to_string(),
  }
}

pub fn column_names(df: &DataFrame) -> Vec<String>
{
  df.get_column_names().into_iter().map(|n| n.to_string()).collect()
}

/// Every cell of row `idx`, left to right.
pub fn row_text(
  df: &DataFrame,
  idx: usize,
) -> Vec<String>
{
  df.get_columns()
    .iter()
    .map(|c| any_to_string(c.get(idx).unwrap_or(AnyValue::Null)))
    .collect()
}

/// Every cell of column `name`, top to bottom.
pub fn column_text(
  df: &DataFrame,
  name: &str,
) -> Option<Vec<String>>
{
  let column = df.column(name).ok()?;
  Some(
    (0..df.height())
      .map(|i| any_to_string(column.get(i).unwrap_or(AnyValue::Null)))
      .collect(),
  )
}
