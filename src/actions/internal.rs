// Built-in actions addressable from key maps.

use crate::app::{
  App,
  Focus,
  Overlay,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalAction
{
  Quit,
  Reload,
  ToggleMessages,
  ToggleHelp,
  FocusNext,
  FocusPrev,
  Focus(Focus),
  GoTop,
  GoBottom,
  SelectAll,
  SelectNone,
  ScrollTable(isize),
}

pub fn parse_internal_action(s: &str) -> Option<InternalAction>
{
  let low = s.trim().to_ascii_lowercase();
  let action = match low.as_str()
  {
    "quit" | "q" => InternalAction::Quit,
    "reload" => InternalAction::Reload,
    "messages:toggle" | "messages" => InternalAction::ToggleMessages,
    "help:toggle" | "help" => InternalAction::ToggleHelp,
    "focus:next" => InternalAction::FocusNext,
    "focus:prev" => InternalAction::FocusPrev,
    "nav:top" | "top" => InternalAction::GoTop,
    "nav:bottom" | "bottom" => InternalAction::GoBottom,
    "select:all" => InternalAction::SelectAll,
    "select:none" => InternalAction::SelectNone,
    other =>
    {
      if let Some(name) = other.strip_prefix("focus:")
      {
        return crate::enums::focus_from_str(name).map(InternalAction::Focus);
      }
      if let Some(n) = other.strip_prefix("scroll:")
      {
        return n.parse::<isize>().ok().map(InternalAction::ScrollTable);
      }
      return None;
    }
  };
  Some(action)
}

fn toggle_overlay(
  app: &mut App,
  which: Overlay,
)
{
  app.overlay = if app.overlay == which { Overlay::None } else { which };
  app.force_full_redraw = true;
}

pub(crate) fn execute_internal_action(
  app: &mut App,
  action: InternalAction,
)
{
  match action
  {
    InternalAction::Quit => app.should_quit = true,
    InternalAction::Reload =>
    {
      app.reload();
    }
    InternalAction::ToggleMessages => toggle_overlay(app, Overlay::Messages),
    InternalAction::ToggleHelp => toggle_overlay(app, Overlay::Help),
    InternalAction::FocusNext => app.set_focus(app.focus().next()),
    InternalAction::FocusPrev => app.set_focus(app.focus().prev()),
    InternalAction::Focus(f) => app.set_focus(f),
    InternalAction::GoTop => app.cursor_to_top(),
    InternalAction::GoBottom => app.cursor_to_bottom(),
    InternalAction::SelectAll =>
    {
      app.select_all();
    }
    InternalAction::SelectNone =>
    {
      app.select_none();
    }
    InternalAction::ScrollTable(n) => app.scroll_table(n),
  }
}
