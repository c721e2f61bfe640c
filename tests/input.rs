use std::{
  fs,
  path::Path,
};

use crossterm::event::{
  Event,
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
};
use csvdash::{
  App,
  app::{
    Focus,
    Overlay,
  },
  config::{
    KeyMapping,
    default_config,
    rust_default_keymaps,
  },
  core::{
    Phase,
    Separator,
    viewer::Display,
  },
  runtime_util::process_event,
};

fn key(code: KeyCode) -> Event
{
  Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press(
  app: &mut App,
  code: KeyCode,
) -> bool
{
  process_event(app, key(code)).unwrap()
}

fn type_str(
  app: &mut App,
  text: &str,
)
{
  for ch in text.chars()
  {
    press(app, KeyCode::Char(ch));
  }
}

fn clear_input(app: &mut App)
{
  press(app, KeyCode::End);
  let n = match app.focus()
  {
    Focus::Rootdir => app.rootdir_input().value().chars().count(),
    _ => app.columns_input().value().chars().count(),
  };
  for _ in 0..n
  {
    press(app, KeyCode::Backspace);
  }
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

fn make_app() -> App
{
  App::with_config(default_config(), rust_default_keymaps())
}

/// App rooted at a temp tree, reached by typing into the root input.
fn rooted() -> (tempfile::TempDir, App)
{
  let tmp = tempfile::tempdir().unwrap();
  write(tmp.path(), "logs/run1.tsv", "# a\n1\t10\n2\t20\n");
  write(tmp.path(), "logs/run2.tsv", "3\t30\n");
  write(tmp.path(), "zeta/z.tsv", "1\t1\n");

  let mut app = make_app();
  app.set_focus(Focus::Rootdir);
  clear_input(&mut app);
  type_str(&mut app, &tmp.path().to_string_lossy());
  press(&mut app, KeyCode::Enter);
  (tmp, app)
}

#[test]
fn tab_and_backtab_cycle_focus()
{
  let mut app = make_app();
  assert_eq!(app.focus(), Focus::Directories);
  press(&mut app, KeyCode::Tab);
  assert_eq!(app.focus(), Focus::Files);
  press(&mut app, KeyCode::BackTab);
  press(&mut app, KeyCode::BackTab);
  assert_eq!(app.focus(), Focus::Rootdir);
  press(&mut app, KeyCode::BackTab);
  assert_eq!(app.focus(), Focus::ViewerFiles);
}

#[test]
fn typing_root_and_enter_lists_directories()
{
  let (tmp, app) = rooted();
  let ex = &app.dashboard().explorer;
  assert_eq!(ex.rootdir(), tmp.path());
  assert_eq!(ex.directories(), ["logs".to_string(), "zeta".to_string()].as_slice());
  assert!(!app.rootdir_input().is_dirty());
}

#[test]
fn space_toggles_directory_and_file()
{
  let (_tmp, mut app) = rooted();
  press(&mut app, KeyCode::Tab);
  assert_eq!(app.focus(), Focus::Directories);
  press(&mut app, KeyCode::Char(' '));
  assert_eq!(app.dashboard().explorer.selected_directories(), ["logs".to_string()].as_slice());
  assert_eq!(app.dashboard().phase(), Phase::FilesListed);

  press(&mut app, KeyCode::Tab);
  press(&mut app, KeyCode::Char('j'));
  press(&mut app, KeyCode::Char(' '));
  assert_eq!(
    app.dashboard().explorer.selected_files(),
    ["logs/run2.tsv".to_string()].as_slice()
  );
  assert_eq!(app.dashboard().explorer.frame().height(), 1);

  // Deselect again
  press(&mut app, KeyCode::Enter);
  assert!(app.dashboard().explorer.selected_files().is_empty());
}

#[test]
fn gg_and_g_jump_in_lists()
{
  let (_tmp, mut app) = rooted();
  app.set_focus(Focus::Directories);
  press(&mut app, KeyCode::Char('G'));
  assert_eq!(app.cursor(Focus::Directories), Some(1));
  press(&mut app, KeyCode::Char('g'));
  press(&mut app, KeyCode::Char('g'));
  assert_eq!(app.cursor(Focus::Directories), Some(0));

  // A broken sequence restarts with the breaking key
  press(&mut app, KeyCode::Char('g'));
  press(&mut app, KeyCode::Char('G'));
  assert_eq!(app.cursor(Focus::Directories), Some(1));
}

#[test]
fn select_all_and_none_keys()
{
  let (_tmp, mut app) = rooted();
  app.set_focus(Focus::Directories);
  press(&mut app, KeyCode::Char('a'));
  assert_eq!(app.dashboard().explorer.selected_directories().len(), 2);
  assert_eq!(app.dashboard().explorer.files().len(), 3);
  press(&mut app, KeyCode::Char('A'));
  assert!(app.dashboard().explorer.selected_directories().is_empty());
}

#[test]
fn viewer_menu_enter_shows_file()
{
  let (_tmp, mut app) = rooted();
  app.set_focus(Focus::Directories);
  press(&mut app, KeyCode::Char(' '));
  app.set_focus(Focus::Files);
  press(&mut app, KeyCode::Char('a'));
  app.set_focus(Focus::ViewerFiles);
  press(&mut app, KeyCode::Enter);

  assert_eq!(app.dashboard().phase(), Phase::Inspecting);
  assert_eq!(app.dashboard().viewer.selected(), Some("logs/run1.tsv"));
  match app.dashboard().viewer.display()
  {
    Display::Loaded { header, .. } => assert_eq!(header, "a"),
    other => panic!("unexpected display {other:?}"),
  }
}

#[test]
fn option_widgets_cycle_and_toggle()
{
  let mut app = make_app();
  app.set_focus(Focus::Separator);
  press(&mut app, KeyCode::Right);
  assert_eq!(app.dashboard().explorer.config().separator, Separator::Comma);
  press(&mut app, KeyCode::Left);
  assert_eq!(app.dashboard().explorer.config().separator, Separator::Tab);

  app.set_focus(Focus::Header);
  press(&mut app, KeyCode::Char(' '));
  assert!(app.dashboard().explorer.config().has_header);
}

#[test]
fn help_overlay_toggles_and_esc_closes()
{
  let mut app = make_app();
  press(&mut app, KeyCode::Char('?'));
  assert_eq!(app.overlay(), Overlay::Help);
  press(&mut app, KeyCode::Esc);
  assert_eq!(app.overlay(), Overlay::None);

  press(&mut app, KeyCode::Char('m'));
  assert_eq!(app.overlay(), Overlay::Messages);
  // q closes an overlay before it would quit
  assert!(!press(&mut app, KeyCode::Char('q')));
  assert_eq!(app.overlay(), Overlay::None);
  assert!(!app.should_quit());
}

#[test]
fn q_quits_from_a_list()
{
  let mut app = make_app();
  assert!(press(&mut app, KeyCode::Char('q')));
  assert!(app.should_quit());
}

#[test]
fn ctrl_c_quits_even_in_text_input()
{
  let mut app = make_app();
  app.set_focus(Focus::Columns);
  let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
  assert!(process_event(&mut app, ev).unwrap());
}

#[test]
fn release_events_are_ignored()
{
  let mut app = make_app();
  let mut ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
  ev.kind = KeyEventKind::Release;
  assert!(!process_event(&mut app, Event::Key(ev)).unwrap());
  assert!(!app.should_quit());
}

#[test]
fn text_input_takes_keys_and_esc_reverts()
{
  let mut app = make_app();
  app.set_focus(Focus::Columns);
  type_str(&mut app, ",q");
  assert_eq!(app.columns_input().value(), "1,2,q");
  assert!(app.columns_input().is_dirty());
  assert!(!app.should_quit());

  press(&mut app, KeyCode::Esc);
  assert_eq!(app.columns_input().value(), "1,2");
}

#[test]
fn committing_column_ids_updates_config()
{
  let mut app = make_app();
  app.set_focus(Focus::Columns);
  clear_input(&mut app);
  type_str(&mut app, " 3 , 1");
  press(&mut app, KeyCode::Enter);
  assert_eq!(app.dashboard().explorer.config().column_ids.as_slice(), &[3, 1]);
  assert_eq!(app.columns_input().value(), "3,1");
  assert!(app.status_error().is_none());
}

#[test]
fn bad_column_ids_set_status_error()
{
  let mut app = make_app();
  app.set_focus(Focus::Columns);
  type_str(&mut app, ",x");
  press(&mut app, KeyCode::Enter);
  assert!(app.status_error().is_some_and(|e| e.contains('x')));
  assert_eq!(app.dashboard().explorer.config().column_ids.as_slice(), &[1, 2]);
  // The rejected text stays for editing
  assert_eq!(app.columns_input().value(), "1,2,x");

  // Leaving the input drops the edit
  press(&mut app, KeyCode::Tab);
  assert_eq!(app.columns_input().value(), "1,2");
}

#[test]
fn unknown_actions_are_reported()
{
  let maps = vec![KeyMapping { sequence: "z".into(), action: "bogus".into(), description: None }];
  let mut app = App::with_config(default_config(), maps);
  press(&mut app, KeyCode::Char('z'));
  assert!(app.messages().iter().any(|m| m == "unknown action: bogus"));
}

#[test]
fn chained_actions_run_in_order()
{
  let maps = vec![KeyMapping {
    sequence:    "x".into(),
    action:      "focus:columns; help:toggle".into(),
    description: None,
  }];
  let mut app = App::with_config(default_config(), maps);
  press(&mut app, KeyCode::Char('x'));
  assert_eq!(app.focus(), Focus::Columns);
  assert_eq!(app.overlay(), Overlay::Help);
}
