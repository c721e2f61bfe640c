pub mod colors;
pub mod format;
pub mod overlays;
pub mod panes;

use ratatui::{
  layout::{
    Alignment,
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

use crate::{
  app::Overlay,
  core::Phase,
};

pub fn draw(
  f: &mut ratatui::Frame,
  app: &mut crate::App,
)
{
  // Split top header (1 row) and content
  let full = f.area();
  let vchunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(1), Constraint::Min(1)])
    .split(full);

  draw_header(f, vchunks[0], app);

  let (outer, right) = panes::pane_constraints(app);
  let chunks = Layout::default()
    .direction(Direction::Horizontal)
    .constraints(outer)
    .split(vchunks[1]);
  let rchunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints(right)
    .split(chunks[1]);

  panes::draw_browse_panel(f, chunks[0], app);
  panes::draw_inspect_panel(f, rchunks[0], app);
  panes::draw_view_panel(f, rchunks[1], app);

  if let Some(msg) = app.status_error()
  {
    draw_error_bar(f, full, msg, app);
  }

  // Overlays last so they appear on top
  match app.overlay()
  {
    Overlay::Messages => overlays::draw_messages_panel(f, full, app),
    Overlay::Help => overlays::draw_help_panel(f, full, app),
    Overlay::None =>
    {}
  }
}

pub fn phase_label(phase: Phase) -> &'static str
{
  match phase
  {
    Phase::Unconfigured => "no root",
    Phase::Browsing => "browsing",
    Phase::FilesListed => "files listed",
    Phase::FilesSelected => "files selected",
    Phase::Inspecting => "inspecting",
    Phase::Plotting => "plotting",
  }
}

fn draw_header(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
)
{
  // Left: {user}@{host}:{rootdir}
  let user = whoami::username().unwrap_or_default();
  let host = whoami::hostname().unwrap_or_default();
  let dash = app.dashboard();
  let left_full = format!("{}@{}:{}", user, host, dash.explorer.rootdir().display());

  // Right: phase and the shape of the combined frame
  let frame = dash.explorer.frame();
  let right_full = format!(
    "{}  {} file(s)  {}x{}",
    phase_label(dash.phase()),
    dash.explorer.selected_files().len(),
    frame.height(),
    frame.width()
  );

  let total = area.width as usize;
  let right_w = UnicodeWidthStr::width(right_full.as_str());
  let left_max = total.saturating_sub(right_w + 1);
  let left = format::truncate_to_width(&left_full, left_max);

  let theme = app.config().ui.theme.as_ref();
  let style = colors::themed_style(
    Style::default().fg(Color::Gray),
    theme,
    |t| &t.title_fg,
    |t| &t.title_bg,
  );
  let left_p = Paragraph::new(left).alignment(Alignment::Left).style(style);
  let right_p = Paragraph::new(right_full).alignment(Alignment::Right).style(style);
  f.render_widget(left_p, area);
  f.render_widget(right_p, area);
}

fn draw_error_bar(
  f: &mut ratatui::Frame,
  area: Rect,
  msg: &str,
  app: &crate::App,
)
{
  let layout = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(0), Constraint::Length(1)])
    .split(area);
  let bar = layout[1];
  let bg = colors::theme_color(app.config().ui.theme.as_ref(), |t| &t.error_fg)
    .unwrap_or(Color::Red);
  let text = Line::from(Span::styled(
    msg.to_string(),
    Style::default().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD),
  ));
  f.render_widget(Clear, bar);
  f.render_widget(Paragraph::new(text), bar);
}
