use ratatui::{
  layout::{
    Constraint,
    Direction,
    Layout,
    Rect,
  },
  style::{
    Color,
    Style,
  },
  text::{
    Line,
    Span,
  },
  widgets::{
    Clear,
    Paragraph,
    Wrap,
  },
};

use super::overlay_block;

/// Bottom panel with the most recent messages, newest last.
pub fn draw_messages_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
)
{
  let messages = app.messages();
  let min_h = ((area.height as u32 * 20) / 100).max(3) as u16;
  let max_h = ((area.height as u32 * 50) / 100).max(min_h as u32) as u16;
  let needed = (messages.len() as u16).saturating_add(2).max(3);
  let panel_h = needed.min(max_h).max(min_h).min(area.height);

  let block = overlay_block(app, "Messages");
  let layout = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(0), Constraint::Length(panel_h)])
    .split(area);
  let panel = layout[1];
  f.render_widget(Clear, panel);

  let avail_rows = panel_h.saturating_sub(2) as usize;
  let start = messages.len().saturating_sub(avail_rows);
  let lines: Vec<Line> = if messages.is_empty()
  {
    vec![Line::from(Span::styled(
      "(no messages)",
      Style::default().fg(Color::DarkGray),
    ))]
  }
  else
  {
    messages[start..]
      .iter()
      .map(|m| {
        Line::from(Span::styled(m.clone(), Style::default().fg(Color::Gray)))
      })
      .collect()
  };
  let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
  f.render_widget(para, panel);
}
