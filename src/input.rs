//! Input handling for keyboard events.

use std::{
  io,
  time::{
    Duration,
    Instant,
  },
};

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
};

use crate::app::{
  App,
  Focus,
  Overlay,
};

/// Accept a terminal key event and mutate the [`App`] accordingly.
///
/// Returns `Ok(true)` when the caller should exit. Text inputs get first
/// claim on printable keys; everything else goes through the key maps and
/// then falls back to per-widget behaviour.
pub fn handle_key(
  app: &mut App,
  key: KeyEvent,
) -> io::Result<bool>
{
  // Ignore key release/repeat events to avoid double-processing (esp. on
  // Windows)
  if key.kind != KeyEventKind::Press
  {
    return Ok(false);
  }

  if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
  {
    app.should_quit = true;
    return Ok(true);
  }

  if app.overlay != Overlay::None && matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
  {
    app.overlay = Overlay::None;
    app.force_full_redraw = true;
    return Ok(false);
  }

  match key.code
  {
    KeyCode::Tab =>
    {
      app.set_focus(app.focus().next());
      return Ok(false);
    }
    KeyCode::BackTab =>
    {
      app.set_focus(app.focus().prev());
      return Ok(false);
    }
    _ =>
    {}
  }

  if app.focus().is_text()
  {
    handle_text_key(app, key);
    return Ok(false);
  }

  if let Some(tok) = crate::keymap::token_for(&key)
    && run_sequence(app, &tok)
  {
    return Ok(app.should_quit);
  }

  if key.code == KeyCode::Esc
  {
    app.keys.pending.clear();
    app.status_error = None;
    return Ok(false);
  }

  handle_widget_key(app, key);
  Ok(app.should_quit)
}

/// Feed one token to the pending key sequence. Returns true when the token
/// was consumed, either completing a mapping or extending a prefix.
fn run_sequence(
  app: &mut App,
  tok: &str,
) -> bool
{
  let now = Instant::now();
  let timeout_ms = app.config.keys.sequence_timeout_ms;
  if timeout_ms > 0
    && let Some(last) = app.keys.last_at
    && now.duration_since(last) > Duration::from_millis(timeout_ms)
  {
    app.keys.pending.clear();
  }
  app.keys.last_at = Some(now);

  let mut seq = app.keys.pending.clone();
  seq.push_str(tok);
  if let Some(action) = app.get_keymap_action(&seq)
  {
    app.keys.pending.clear();
    return crate::actions::dispatch_action(app, &action);
  }
  if app.has_prefix(&seq)
  {
    app.keys.pending = seq;
    return true;
  }
  let had_pending = !app.keys.pending.is_empty();
  app.keys.pending.clear();
  // A broken sequence restarts with the key that broke it
  if had_pending && let Some(action) = app.get_keymap_action(tok)
  {
    return crate::actions::dispatch_action(app, &action);
  }
  if had_pending && app.has_prefix(tok)
  {
    app.keys.pending = tok.to_string();
    return true;
  }
  false
}

fn handle_text_key(
  app: &mut App,
  key: KeyEvent,
)
{
  match key.code
  {
    KeyCode::Enter =>
    {
      app.commit_input();
    }
    KeyCode::Esc =>
    {
      if let Some(input) = app.focused_input_mut()
      {
        input.revert();
      }
    }
    code =>
    {
      let Some(input) = app.focused_input_mut()
      else
      {
        return;
      };
      match code
      {
        KeyCode::Char(ch)
          if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
          input.insert(ch)
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ =>
        {}
      }
    }
  }
}

fn handle_widget_key(
  app: &mut App,
  key: KeyEvent,
)
{
  match (app.focus(), key.code)
  {
    (_, KeyCode::PageUp) => app.scroll_table(-10),
    (_, KeyCode::PageDown) => app.scroll_table(10),
    (Focus::Directories | Focus::Files | Focus::ViewerFiles, KeyCode::Up | KeyCode::Char('k')) =>
    {
      app.move_cursor(-1)
    }
    (
      Focus::Directories | Focus::Files | Focus::ViewerFiles,
      KeyCode::Down | KeyCode::Char('j'),
    ) => app.move_cursor(1),
    (Focus::Directories | Focus::Files, KeyCode::Char(' ') | KeyCode::Enter) =>
    {
      app.toggle_current();
    }
    (Focus::ViewerFiles, KeyCode::Enter | KeyCode::Char(' ')) =>
    {
      app.choose_viewer_file();
    }
    (Focus::CommentPrefix, KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l')) =>
    {
      app.cycle_comment_prefix(true);
    }
    (Focus::CommentPrefix, KeyCode::Left | KeyCode::Char('h')) =>
    {
      app.cycle_comment_prefix(false);
    }
    (Focus::Separator, KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l')) =>
    {
      app.cycle_separator(true);
    }
    (Focus::Separator, KeyCode::Left | KeyCode::Char('h')) =>
    {
      app.cycle_separator(false);
    }
    (Focus::Header, KeyCode::Char(' ') | KeyCode::Enter) =>
    {
      app.toggle_header();
    }
    _ =>
    {}
  }
}
