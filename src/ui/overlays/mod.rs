pub mod help;
pub mod messages;

pub use help::draw_help_panel;
pub use messages::draw_messages_panel;
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

use crate::ui::colors::theme_color;

pub(crate) fn overlay_block<'a>(
  app: &crate::App,
  title: &'a str,
) -> Block<'a>
{
  let mut block = Block::default().borders(Borders::ALL).title(Span::styled(
    title,
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
  ));
  let theme = app.config().ui.theme.as_ref();
  if let Some(bg) = theme_color(theme, |t| &t.pane_bg)
  {
    block = block.style(Style::default().bg(bg));
  }
  if let Some(bfg) = theme_color(theme, |t| &t.border_fg)
  {
    block = block.border_style(Style::default().fg(bfg));
  }
  block
}
