//! Line-plot data derived from the combined frame.

use polars::prelude::{
  DataFrame,
  DataType,
  PolarsResult,
};
use tracing::debug;

use super::{
  dispatch::Signal,
  frame::FILENAME_COLUMN,
};

/// Which columns play the x, y and grouping roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSpec
{
  pub x:  String,
  pub y:  String,
  pub by: String,
}

impl PlotSpec
{
  /// First and second data columns against the filename tag.
  pub fn for_frame(frame: &DataFrame) -> Option<PlotSpec>
  {
    let names = frame.get_column_names();
    let data: Vec<&str> =
      names.iter().map(|n| n.as_str()).filter(|n| *n != FILENAME_COLUMN).collect();
    if data.len() < 2 || frame.column(FILENAME_COLUMN).is_err()
    {
      return None;
    }
    Some(PlotSpec {
      x:  data[0].to_string(),
      y:  data[1].to_string(),
      by: FILENAME_COLUMN.to_string(),
    })
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series
{
  pub name:   String,
  pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Plot
{
  Placeholder,
  Unplottable(String),
  Lines
  {
    spec:     PlotSpec,
    series:   Vec<Series>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
  },
}

#[derive(Debug)]
pub struct Plotter
{
  plot: Plot,
}

impl Default for Plotter
{
  fn default() -> Self
  {
    Self { plot: Plot::Placeholder }
  }
}

impl Plotter
{
  pub fn plot(&self) -> &Plot
  {
    &self.plot
  }

  pub fn refresh(
    &mut self,
    frame: &DataFrame,
  ) -> Vec<Signal>
  {
    self.plot = build_plot(frame);
    vec![Signal::PlotChanged]
  }
}

pub fn build_plot(frame: &DataFrame) -> Plot
{
  if frame.is_empty()
  {
    return Plot::Placeholder;
  }
  let Some(spec) = PlotSpec::for_frame(frame)
  else
  {
    return Plot::Unplottable("need at least two columns to plot".to_string());
  };
  let series = match group_points(frame, &spec)
  {
    Ok(series) => series,
    Err(e) =>
    {
      debug!("cannot read plot columns: {e}");
      return Plot::Unplottable(format!("cannot read {} / {}", spec.x, spec.y));
    }
  };
  if series.is_empty()
  {
    return Plot::Unplottable(format!("no numeric values in {} / {}", spec.x, spec.y));
  }
  let x_bounds = bounds(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
  let y_bounds = bounds(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));
  Plot::Lines { spec, series, x_bounds, y_bounds }
}

/// One series per group value in first-seen order. Cells that do not cast
/// to a finite float are skipped.
fn group_points(
  frame: &DataFrame,
  spec: &PlotSpec,
) -> PolarsResult<Vec<Series>>
{
  let xs = frame.column(&spec.x)?.cast(&DataType::Float64)?;
  let ys = frame.column(&spec.y)?.cast(&DataType::Float64)?;
  let groups = frame.column(&spec.by)?.cast(&DataType::String)?;

  let mut series: Vec<Series> = Vec::new();
  for ((x, y), group) in xs.f64()?.into_iter().zip(ys.f64()?).zip(groups.str()?)
  {
    let (Some(x), Some(y)) = (x, y)
    else
    {
      continue;
    };
    if !x.is_finite() || !y.is_finite()
    {
      continue;
    }
    let group = group.unwrap_or_default();
    match series.iter_mut().find(|s| s.name == group)
    {
      Some(s) => s.points.push((x, y)),
      None => series.push(Series { name: group.to_string(), points: vec![(x, y)] }),
    }
  }
  Ok(series)
}

fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2]
{
  let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
  for v in values
  {
    lo = lo.min(v);
    hi = hi.max(v);
  }
  if !lo.is_finite() || !hi.is_finite()
  {
    return [0.0, 1.0];
  }
  if lo == hi
  {
    return [lo - 1.0, hi + 1.0];
  }
  [lo, hi]
}
