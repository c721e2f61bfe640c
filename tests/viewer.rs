use std::{
  fs,
  path::Path,
};

use csvdash::core::{
  CommentPrefix,
  Dashboard,
  Event,
  Signal,
  error::{
    DispatchError,
    ViewerError,
  },
  frame::{
    column_names,
    column_text,
  },
  viewer::Display,
};

const RUN1: &str = "# instrument: alpha\n#   operator: bob  \n1\t10\t0.5\n# trailing\n2\t20\t1.5\n";

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

fn selected() -> (tempfile::TempDir, Dashboard)
{
  let tmp = tempfile::tempdir().unwrap();
  write(tmp.path(), "logs/run1.tsv", RUN1);
  write(tmp.path(), "logs/run2.tsv", "3\t30\t2.5\n");
  let mut dash = Dashboard::new();
  dash.dispatch(Event::SetRootdir(tmp.path().to_path_buf()));
  dash.dispatch(Event::SetSelectedDirectories(s(&["logs"])));
  dash.dispatch(Event::SetSelectedFiles(s(&["logs/run1.tsv", "logs/run2.tsv"])));
  (tmp, dash)
}

#[test]
fn nothing_chosen_shows_placeholder()
{
  let (_tmp, dash) = selected();
  assert_eq!(dash.viewer.menu(), s(&["logs/run1.tsv", "logs/run2.tsv"]).as_slice());
  assert_eq!(dash.viewer.selected(), None);
  assert!(matches!(dash.viewer.display(), Display::NoFileSelected));
  assert_eq!(dash.viewer.header(), "");
}

#[test]
fn chosen_file_shows_its_rows_and_header()
{
  let (_tmp, mut dash) = selected();
  let report = dash.dispatch(Event::SelectViewerFile(Some("logs/run1.tsv".into())));
  assert!(report.changed(Signal::FileChosen));
  assert!(report.changed(Signal::DisplayChanged));
  assert!(!report.changed(Signal::FrameChanged));

  match dash.viewer.display()
  {
    Display::Loaded { file, frame, header } =>
    {
      assert_eq!(file, "logs/run1.tsv");
      assert_eq!(column_names(frame), vec!["column_1", "column_2"]);
      assert_eq!(frame.height(), 2);
      assert_eq!(column_text(frame, "column_2").unwrap(), vec!["10", "20"]);
      // Only the leading block, prefix stripped and trimmed
      assert_eq!(header, "instrument: alpha\noperator: bob");
    }
    other => panic!("unexpected display {other:?}"),
  }
}

#[test]
fn header_follows_comment_prefix()
{
  let (tmp, mut dash) = selected();
  write(tmp.path(), "logs/run1.tsv", "% meta\n1\t2\n");
  dash.dispatch(Event::SelectViewerFile(Some("logs/run1.tsv".into())));
  assert_eq!(dash.viewer.header(), "");

  dash.dispatch(Event::SetCommentPrefix(CommentPrefix::Percent));
  assert_eq!(dash.viewer.header(), "meta");
}

#[test]
fn choosing_outside_menu_is_rejected()
{
  let (_tmp, mut dash) = selected();
  let report = dash.dispatch(Event::SelectViewerFile(Some("logs/zzz.tsv".into())));
  assert_eq!(
    report.error,
    Some(DispatchError::Viewer(ViewerError::NotInMenu("logs/zzz.tsv".into())))
  );
  assert_eq!(dash.viewer.selected(), None);
}

#[test]
fn choice_survives_selection_change_when_still_selected()
{
  let (_tmp, mut dash) = selected();
  dash.dispatch(Event::SelectViewerFile(Some("logs/run2.tsv".into())));
  dash.dispatch(Event::SetSelectedFiles(s(&["logs/run2.tsv"])));
  assert_eq!(dash.viewer.selected(), Some("logs/run2.tsv"));
  assert!(matches!(dash.viewer.display(), Display::Loaded { .. }));

  dash.dispatch(Event::SetSelectedFiles(s(&["logs/run1.tsv"])));
  assert_eq!(dash.viewer.selected(), None);
  assert!(matches!(dash.viewer.display(), Display::NoFileSelected));
}

#[test]
fn deselecting_viewer_file_returns_to_placeholder()
{
  let (_tmp, mut dash) = selected();
  dash.dispatch(Event::SelectViewerFile(Some("logs/run1.tsv".into())));
  dash.dispatch(Event::SelectViewerFile(None));
  assert!(matches!(dash.viewer.display(), Display::NoFileSelected));
}

#[test]
fn deleted_file_turns_into_inline_error()
{
  let (tmp, mut dash) = selected();
  dash.dispatch(Event::SelectViewerFile(Some("logs/run1.tsv".into())));
  fs::remove_file(tmp.path().join("logs/run1.tsv")).unwrap();

  let report = dash.dispatch(Event::RefreshViewer);
  assert!(report.error.is_none());
  match dash.viewer.display()
  {
    Display::Error { file, message } =>
    {
      assert_eq!(file, "logs/run1.tsv");
      assert!(message.starts_with("Error loading file:"), "{message}");
    }
    other => panic!("unexpected display {other:?}"),
  }
  assert_eq!(dash.viewer.header(), "");

  // Still responsive afterwards
  dash.dispatch(Event::SelectViewerFile(Some("logs/run2.tsv".into())));
  assert!(matches!(dash.viewer.display(), Display::Loaded { .. }));
}

#[test]
fn reload_after_delete_reports_upstream_error()
{
  let (tmp, mut dash) = selected();
  dash.dispatch(Event::SelectViewerFile(Some("logs/run2.tsv".into())));
  fs::remove_file(tmp.path().join("logs/run1.tsv")).unwrap();

  dash.dispatch(Event::Reload);
  assert!(dash.explorer.frame().is_empty());
  assert!(dash.explorer.frame_error().is_some());
  assert!(matches!(dash.viewer.display(), Display::Error { .. }));
}

#[test]
fn latin1_header_decodes_like_the_table()
{
  let (tmp, mut dash) = selected();
  fs::write(tmp.path().join("logs/run1.tsv"), b"# caf\xe9\n1\t2\n").unwrap();
  dash.dispatch(Event::Reload);
  dash.dispatch(Event::SelectViewerFile(Some("logs/run1.tsv".into())));
  match dash.viewer.display()
  {
    Display::Loaded { header, frame, .. } =>
    {
      assert_eq!(header, "caf\u{FFFD}");
      assert_eq!(frame.height(), 1);
    }
    other => panic!("unexpected display {other:?}"),
  }
}
