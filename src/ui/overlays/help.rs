use ratatui::{
  layout::{
    Constraint,
    Direction,
    Layout,
    Rect,
  },
  style::{
    Color,
    Modifier,
    Style,
  },
  text::{
    Line,
    Span,
  },
  widgets::{
    Clear,
    Paragraph,
  },
};
use unicode_width::UnicodeWidthStr;

use super::overlay_block;
use crate::keymap::format_sequence;

/// Keys handled by widgets themselves rather than key maps.
const WIDGET_KEYS: [(&str, &str); 8] = [
  ("Tab / Shift-Tab", "next / previous widget"),
  ("Up Down j k", "move list cursor"),
  ("Space Enter", "toggle item / choose file"),
  ("Left Right", "cycle comment prefix or separator"),
  ("Enter", "apply text input"),
  ("Esc", "revert text input / close overlay"),
  ("PgUp PgDn", "scroll the data table"),
  ("Ctrl-c", "quit"),
];

/// Centered panel listing key maps and widget keys.
pub fn draw_help_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
)
{
  let mut entries: Vec<(String, String)> = app
    .keymaps_with_prefix("")
    .into_iter()
    .map(|m| {
      let label = m.description.clone().unwrap_or_else(|| m.action.clone());
      (format_sequence(&m.sequence), label)
    })
    .collect();
  entries.sort();
  entries
    .extend(WIDGET_KEYS.iter().map(|(k, d)| (k.to_string(), d.to_string())));

  let key_w = entries
    .iter()
    .map(|(k, _)| UnicodeWidthStr::width(k.as_str()))
    .max()
    .unwrap_or(0);
  let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
  let lines: Vec<Line> = entries
    .into_iter()
    .map(|(k, d)| {
      let pad = key_w.saturating_sub(UnicodeWidthStr::width(k.as_str())) + 2;
      Line::from(vec![
        Span::styled(k, key_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(d, Style::default().fg(Color::Gray)),
      ])
    })
    .collect();

  let height = (lines.len() as u16).saturating_add(2).min(area.height);
  let panel = centered(area, 60, height);
  f.render_widget(Clear, panel);
  let para = Paragraph::new(lines).block(overlay_block(app, "Keys"));
  f.render_widget(para, panel);
}

fn centered(
  area: Rect,
  percent_x: u16,
  height: u16,
) -> Rect
{
  let v = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Min(0),
      Constraint::Length(height),
      Constraint::Min(0),
    ])
    .split(area);
  let side = (100 - percent_x) / 2;
  Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Percentage(side),
      Constraint::Percentage(percent_x),
      Constraint::Percentage(side),
    ])
    .split(v[1])[1]
}
