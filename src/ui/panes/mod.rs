mod browse;
mod inspect;
mod layout;
mod view;

use ratatui::{
  style::{
    Color,
    Modifier,
    Style,
  },
  text::Span,
  widgets::{
    Block,
    Borders,
  },
};

pub use self::{
  browse::draw_browse_panel,
  inspect::draw_inspect_panel,
  layout::pane_constraints,
  view::draw_view_panel,
};
use crate::{
  app::Focus,
  ui::colors::theme_color,
};

/// Bordered block for a widget, highlighted when it holds focus.
pub(crate) fn widget_block<'a>(
  app: &crate::App,
  title: impl Into<String>,
  focused: bool,
) -> Block<'a>
{
  let theme = app.config().ui.theme.as_ref();
  let mut title_style = Style::default().fg(Color::Yellow);
  if let Some(fg) = theme_color(theme, |t| &t.title_fg)
  {
    title_style = title_style.fg(fg);
  }
  let mut block = Block::default()
    .borders(Borders::ALL)
    .title(Span::styled(title.into(), title_style));
  if let Some(bg) = theme_color(theme, |t| &t.pane_bg)
  {
    block = block.style(Style::default().bg(bg));
  }
  let border = if focused
  {
    let fg =
      theme_color(theme, |t| &t.focus_border_fg).unwrap_or(Color::Cyan);
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
  }
  else
  {
    theme_color(theme, |t| &t.border_fg)
      .map(|c| Style::default().fg(c))
      .unwrap_or_default()
  };
  block.border_style(border)
}

/// Cursor highlight for list widgets.
pub(crate) fn highlight_style(app: &crate::App) -> Style
{
  let theme = app.config().ui.theme.as_ref();
  let fg =
    theme_color(theme, |t| &t.selected_item_fg).unwrap_or(Color::Cyan);
  let mut hl = Style::default().fg(fg).add_modifier(Modifier::BOLD);
  if let Some(bg) = theme_color(theme, |t| &t.selected_item_bg)
  {
    hl = hl.bg(bg);
  }
  hl
}

pub(crate) fn is_focused(
  app: &crate::App,
  focus: Focus,
) -> bool
{
  app.focus() == focus
}
