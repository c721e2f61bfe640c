use std::{
  fs,
  path::Path,
};

use csvdash::core::{
  CommentPrefix,
  Dashboard,
  Event,
  Phase,
  Separator,
  Signal,
  error::{
    DispatchError,
    ExplorerError,
  },
  frame::{
    FILENAME_COLUMN,
    column_names,
  },
  plotter::Plot,
  viewer::Display,
};
use polars::prelude::DataFrame;

fn first_i64(
  frame: &DataFrame,
  name: &str,
) -> Option<i64>
{
  frame.column(name).ok()?.i64().ok()?.get(0)
}

const RUN1: &str = "# instrument: a\n1\t10\t0.5\n2\t20\t1.5\n3\t30\t2.5\n";

fn s(v: &[&str]) -> Vec<String>
{
  v.iter().map(|x| x.to_string()).collect()
}

fn write(
  root: &Path,
  rel: &str,
  body: &str,
)
{
  let p = root.join(rel);
  fs::create_dir_all(p.parent().unwrap()).unwrap();
  fs::write(p, body).unwrap();
}

/// Dashboard rooted at a temp tree with logs/run1.tsv and logs/run2.tsv.
fn fixture() -> (tempfile::TempDir, Dashboard)
{
  let tmp = tempfile::tempdir().unwrap();
  write(tmp.path(), "logs/run1.tsv", RUN1);
  write(tmp.path(), "logs/run2.tsv", "4\t40\t3.5\n5\t50\t4.5\n");
  write(tmp.path(), "other/o.tsv", "9\t9\t9\n");
  let mut dash = Dashboard::new();
  dash.dispatch(Event::SetRootdir(tmp.path().to_path_buf()));
  (tmp, dash)
}

#[test]
fn new_dashboard_is_unconfigured_with_defaults()
{
  let dash = Dashboard::new();
  assert_eq!(dash.phase(), Phase::Unconfigured);
  let ex = &dash.explorer;
  assert_eq!(ex.rootdir(), Path::new("/"));
  assert_eq!(ex.config().separator, Separator::Tab);
  assert_eq!(ex.config().comment_prefix, CommentPrefix::Hash);
  assert!(ex.frame().is_empty());
  assert!(matches!(dash.plotter.plot(), Plot::Placeholder));
}

#[test]
fn phases_follow_the_browse_flow()
{
  let (_tmp, mut dash) = fixture();
  assert_eq!(dash.phase(), Phase::Browsing);
  assert_eq!(dash.explorer.directories(), s(&["logs", "other"]).as_slice());

  dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  assert_eq!(dash.phase(), Phase::FilesListed);
  assert_eq!(dash.explorer.files(), s(&["logs/run1.tsv", "logs/run2.tsv"]).as_slice());

  dash.dispatch(Event::SetSelectedFiles(s(&["logs/run1.tsv"])));
  assert_eq!(dash.phase(), Phase::Plotting);

  // A frame that cannot be charted stays at FilesSelected
  dash.dispatch(Event::SetColumnIds("1,9".into()));
  assert_eq!(dash.phase(), Phase::FilesSelected);
  dash.dispatch(Event::SetColumnIds("1,2".into()));
  assert_eq!(dash.phase(), Phase::Plotting);

  dash.dispatch(Event::SelectViewerFile(Some("logs/run1.tsv".into())));
  assert_eq!(dash.phase(), Phase::Inspecting);
  dash.dispatch(Event::SelectViewerFile(None));
  assert_eq!(dash.phase(), Phase::Plotting);
}

#[test]
fn selecting_run1_builds_tagged_frame_and_plot()
{
  let (_tmp, mut dash) = fixture();
  dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  let report = dash.dispatch(Event::SetSelectedFiles(s(&["logs/run1.tsv"])));
  assert!(report.error.is_none());
  assert!(report.changed(Signal::SelectionChanged));
  assert!(report.changed(Signal::FrameChanged));
  assert!(report.changed(Signal::PlotChanged));

  let frame = dash.explorer.frame();
  assert_eq!(column_names(frame), vec!["column_1", "column_2", FILENAME_COLUMN]);
  assert_eq!(frame.height(), 3);
  assert_eq!(dash.viewer.menu(), s(&["logs/run1.tsv"]).as_slice());

  match dash.plotter.plot()
  {
    Plot::Lines { spec, series, .. } =>
    {
      assert_eq!(spec.x, "column_1");
      assert_eq!(spec.y, "column_2");
      assert_eq!(spec.by, FILENAME_COLUMN);
      assert_eq!(series.len(), 1);
      assert_eq!(series[0].points, vec![(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]);
    }
    other => panic!("expected lines, got {other:?}"),
  }
}

#[test]
fn changing_column_ids_rebuilds_from_new_columns()
{
  let (_tmp, mut dash) = fixture();
  dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  dash.dispatch(Event::SetSelectedFiles(s(&["logs/run1.tsv"])));
  assert_eq!(first_i64(dash.explorer.frame(), "column_1"), Some(1));

  let report = dash.dispatch(Event::SetColumnIds("2, 3".into()));
  assert!(report.changed(Signal::FrameChanged));
  let frame = dash.explorer.frame();
  assert_eq!(column_names(frame), vec!["column_2", "column_3", FILENAME_COLUMN]);
  assert_eq!(first_i64(frame, "column_2"), Some(10));
  assert_eq!(frame.column("column_3").unwrap().f64().unwrap().get(0), Some(0.5));
}

#[test]
fn unchanged_config_does_not_rebuild()
{
  let (_tmp, mut dash) = fixture();
  let report = dash.dispatch(Event::SetColumnIds("1,2".into()));
  assert!(report.signals.is_empty());
  let report = dash.dispatch(Event::SetSeparator(Separator::Tab));
  assert!(report.signals.is_empty());
}

#[test]
fn set_parse_config_replaces_everything_at_once()
{
  let (tmp, mut dash) = fixture();
  write(tmp.path(), "csv/a.csv", "% c\nx,y\n1,2\n");
  dash.dispatch(Event::SetRootdir(tmp.path().to_path_buf()));
  dash.dispatch(Event::SetSelectedDirectories(s(&["csv"])));
  dash.dispatch(Event::SetSelectedFiles(s(&["csv/a.csv"])));
  assert!(dash.explorer.frame_error().is_some());

  let report = dash.dispatch(Event::SetParseConfig {
    comment_prefix: CommentPrefix::Percent,
    separator:      Separator::Comma,
    has_header:     true,
    column_ids:     "2,1".into(),
  });
  assert!(report.error.is_none());
  assert!(dash.explorer.frame_error().is_none());
  let frame = dash.explorer.frame();
  assert_eq!(column_names(frame), vec!["y", "x", FILENAME_COLUMN]);
  assert_eq!(first_i64(frame, "y"), Some(2));
}

#[test]
fn invalid_column_ids_are_rejected_without_side_effects()
{
  let (_tmp, mut dash) = fixture();
  dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  dash.dispatch(Event::SetSelectedFiles(s(&["logs/run1.tsv"])));
  let before = dash.explorer.frame().clone();

  let report = dash.dispatch(Event::SetColumnIds("1,a".into()));
  assert!(matches!(
    report.error,
    Some(DispatchError::Explorer(ExplorerError::ColumnIds(_)))
  ));
  assert!(report.signals.is_empty());
  assert_eq!(dash.explorer.config().column_ids.as_slice(), &[1, 2]);
  assert!(dash.explorer.frame().equals_missing(&before));
}

#[test]
fn parse_failure_resets_frame_and_reports()
{
  let (_tmp, mut dash) = fixture();
  dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  dash.dispatch(Event::SetSelectedFiles(s(&["logs/run1.tsv"])));
  assert!(!dash.explorer.frame().is_empty());

  let report = dash.dispatch(Event::SetColumnIds("1,7".into()));
  assert!(report.error.is_none());
  assert!(dash.explorer.frame().is_empty());
  assert!(dash.explorer.frame_error().is_some());
  assert!(matches!(dash.plotter.plot(), Plot::Placeholder));

  // Recovers once the input is corrected
  dash.dispatch(Event::SetColumnIds("1,3".into()));
  assert!(dash.explorer.frame_error().is_none());
  assert_eq!(dash.explorer.frame().height(), 3);
}

#[test]
fn files_outside_listing_are_rejected()
{
  let (_tmp, mut dash) = fixture();
  dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  let report = dash.dispatch(Event::SetSelectedFiles(s(&["other/o.tsv"])));
  assert_eq!(
    report.error,
    Some(DispatchError::Explorer(ExplorerError::NotAvailable("other/o.tsv".into())))
  );
  assert!(dash.explorer.selected_files().is_empty());
}

#[test]
fn deselecting_a_directory_prunes_file_selection()
{
  let (_tmp, mut dash) = fixture();
  dash.dispatch(Event::SetSelectedDirectories(s(&["logs", "other"])));
  dash.dispatch(Event::SetSelectedFiles(s(&["other/o.tsv", "logs/run1.tsv"])));
  dash.dispatch(Event::SelectViewerFile(Some("other/o.tsv".into())));

  let report = dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  assert!(report.changed(Signal::SelectionChanged));
  assert!(report.changed(Signal::FrameChanged));
  assert_eq!(dash.explorer.selected_files(), s(&["logs/run1.tsv"]).as_slice());
  assert_eq!(dash.explorer.frame().height(), 3);
  assert_eq!(dash.viewer.selected(), None);
}

#[test]
fn new_rootdir_drops_stale_selection()
{
  let (_tmp, mut dash) = fixture();
  dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  dash.dispatch(Event::SetSelectedFiles(s(&["logs/run1.tsv"])));

  let other = tempfile::tempdir().unwrap();
  fs::create_dir_all(other.path().join("fresh")).unwrap();
  dash.dispatch(Event::SetRootdir(other.path().to_path_buf()));
  assert_eq!(dash.explorer.directories(), s(&["fresh"]).as_slice());
  assert!(dash.explorer.selected_directories().is_empty());
  assert!(dash.explorer.selected_files().is_empty());
  assert!(dash.explorer.frame().is_empty());
  assert!(matches!(dash.plotter.plot(), Plot::Placeholder));
}

#[test]
fn new_rootdir_with_same_layout_reloads_selection()
{
  let a = tempfile::tempdir().unwrap();
  let b = tempfile::tempdir().unwrap();
  write(a.path(), "logs/run1.tsv", "# from a\n1\t10\n");
  write(b.path(), "logs/run1.tsv", "# from b\n7\t70\n8\t80\n");

  let mut dash = Dashboard::new();
  dash.dispatch(Event::SetRootdir(a.path().to_path_buf()));
  dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  dash.dispatch(Event::SetSelectedFiles(s(&["logs/run1.tsv"])));
  dash.dispatch(Event::SelectViewerFile(Some("logs/run1.tsv".into())));
  assert_eq!(dash.viewer.header(), "from a");

  let report = dash.dispatch(Event::SetRootdir(b.path().to_path_buf()));
  assert!(report.changed(Signal::SelectionChanged));
  assert!(report.changed(Signal::FrameChanged));
  assert!(report.changed(Signal::PlotChanged));
  assert_eq!(dash.explorer.selected_files(), s(&["logs/run1.tsv"]).as_slice());

  let frame = dash.explorer.frame();
  assert_eq!(frame.height(), 2);
  assert_eq!(first_i64(frame, "column_1"), Some(7));
  assert_eq!(dash.viewer.selected(), Some("logs/run1.tsv"));
  assert_eq!(dash.viewer.header(), "from b");
  match dash.viewer.display()
  {
    Display::Loaded { frame, .. } => assert_eq!(first_i64(frame, "column_1"), Some(7)),
    other => panic!("unexpected display {other:?}"),
  }
  match dash.plotter.plot()
  {
    Plot::Lines { series, .. } => assert_eq!(series[0].points, vec![(7.0, 70.0), (8.0, 80.0)]),
    other => panic!("expected lines, got {other:?}"),
  }
}

#[test]
fn missing_rootdir_gives_empty_listing()
{
  let mut dash = Dashboard::new();
  let report = dash.dispatch(Event::SetRootdir("/definitely/not/here".into()));
  assert!(report.error.is_none());
  assert!(dash.explorer.directories().is_empty());
  assert_eq!(dash.phase(), Phase::Browsing);
}

#[test]
fn unknown_directory_names_are_ignored()
{
  let (_tmp, mut dash) = fixture();
  dash.dispatch(Event::SetSelectedDirectories(s(&["nope", "logs", "logs"])));
  assert_eq!(dash.explorer.selected_directories(), s(&["logs"]).as_slice());
}

#[test]
fn reload_is_idempotent_for_unchanged_inputs()
{
  let (_tmp, mut dash) = fixture();
  dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  dash.dispatch(Event::SetSelectedFiles(s(&["logs/run1.tsv", "logs/run2.tsv"])));
  let first = dash.explorer.frame().clone();
  let report = dash.dispatch(Event::Reload);
  assert!(report.changed(Signal::FrameChanged));
  assert!(dash.explorer.frame().equals_missing(&first));
  assert_eq!(first.height(), 5);
}

#[test]
fn each_signal_is_routed_once_per_event()
{
  let (_tmp, mut dash) = fixture();
  dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  dash.dispatch(Event::SetSelectedFiles(s(&["logs/run1.tsv"])));
  dash.dispatch(Event::SelectViewerFile(Some("logs/run1.tsv".into())));
  let report = dash.dispatch(Event::SetSelectedFiles(s(&["logs/run2.tsv"])));
  for sig in &report.signals
  {
    assert_eq!(report.signals.iter().filter(|o| *o == sig).count(), 1, "{sig:?}");
  }
  assert!(report.changed(Signal::FileChosen));
  assert!(report.changed(Signal::DisplayChanged));
}
