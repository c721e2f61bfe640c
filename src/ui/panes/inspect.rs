use polars::prelude::DataFrame;
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
  text::Line,
  widgets::{
    Cell,
    Clear,
    List,
    ListItem,
    Paragraph,
    Row,
    Table,
    Wrap,
  },
};
use unicode_width::UnicodeWidthStr;

use super::{
  highlight_style,
  is_focused,
  widget_block,
};
use crate::{
  app::{
    App,
    Focus,
  },
  core::{
    frame::{
      column_names,
      row_text,
    },
    viewer::Display,
  },
  enums::focus_title,
  ui::{
    colors::{
      theme_color,
      themed_style,
    },
    format::{
      DEFAULT_DATE_FORMAT,
      modified_string,
    },
  },
  util::sanitize_line,
};

const MAX_MENU_ROWS: u16 = 6;
const MAX_HEADER_ROWS: u16 = 8;
const MAX_CELL_WIDTH: usize = 24;

pub fn draw_inspect_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &mut App,
)
{
  f.render_widget(Clear, area);
  let viewer = &app.dashboard().viewer;
  let menu_rows = (viewer.menu().len() as u16).clamp(1, MAX_MENU_ROWS) + 2;
  let header_lines: Vec<String> =
    viewer.header().lines().map(sanitize_line).collect();
  let header_rows = if header_lines.is_empty()
  {
    0
  }
  else
  {
    (header_lines.len() as u16).min(MAX_HEADER_ROWS) + 2
  };

  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(menu_rows),
      Constraint::Length(header_rows),
      Constraint::Min(3),
    ])
    .split(area);

  let items: Vec<ListItem> = viewer
    .menu()
    .iter()
    .map(|name| {
      let shown = if viewer.selected() == Some(name.as_str())
      {
        format!("> {name}")
      }
      else
      {
        format!("  {name}")
      };
      ListItem::new(shown)
    })
    .collect();
  let focused = is_focused(app, Focus::ViewerFiles);
  let mut list = List::new(items)
    .block(widget_block(app, focus_title(Focus::ViewerFiles), focused))
    .highlight_symbol("");
  if focused
  {
    list = list.highlight_style(highlight_style(app));
  }

  if header_rows > 0
  {
    let lines: Vec<Line> = header_lines.into_iter().map(Line::from).collect();
    let para = Paragraph::new(lines)
      .block(widget_block(app, "Header", false))
      .wrap(Wrap { trim: false });
    f.render_widget(para, chunks[1]);
  }

  draw_display(f, chunks[2], app);
  f.render_stateful_widget(list, chunks[0], &mut app.viewer_list);
}

fn draw_display(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let theme = app.config().ui.theme.as_ref();
  match app.dashboard().viewer.display()
  {
    Display::NoFileSelected =>
    {
      let para = Paragraph::new("No file selected")
        .style(Style::default().fg(Color::DarkGray))
        .block(widget_block(app, "Data", false));
      f.render_widget(para, area);
    }
    Display::Error { file, message } =>
    {
      let fg = theme_color(theme, |t| &t.error_fg).unwrap_or(Color::Red);
      let para = Paragraph::new(message.clone())
        .style(Style::default().fg(fg))
        .wrap(Wrap { trim: true })
        .block(widget_block(app, file.clone(), false));
      f.render_widget(para, area);
    }
    Display::Loaded { file, frame, .. } =>
    {
      let fmt =
        app.config().ui.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT);
      let path = app.dashboard().explorer.rootdir().join(file);
      let title = format!(
        "{}  {} rows  {}",
        file,
        frame.height(),
        modified_string(&path, fmt)
      );
      let block = widget_block(app, title, false);
      let inner = block.inner(area);
      let visible = (inner.height as usize).saturating_sub(1);
      let table = frame_table(app, frame, visible).block(block);
      f.render_widget(table, area);
    }
  }
}

/// Table of the visible window of `frame`, bounded by the configured row cap.
fn frame_table<'a>(
  app: &App,
  frame: &DataFrame,
  visible: usize,
) -> Table<'a>
{
  let theme = app.config().ui.theme.as_ref();
  let cap = app.config().ui.max_table_rows;
  let start = app.table_scroll().min(cap);
  let end = (start + visible).min(frame.height()).min(cap);

  let names = column_names(frame);
  let mut widths: Vec<usize> =
    names.iter().map(|n| UnicodeWidthStr::width(n.as_str())).collect();
  let rows: Vec<Row> = (start..end)
    .map(|i| {
      let cells: Vec<String> =
        row_text(frame, i).iter().map(|c| sanitize_line(c)).collect();
      for (w, c) in widths.iter_mut().zip(&cells)
      {
        *w = (*w).max(UnicodeWidthStr::width(c.as_str()));
      }
      Row::new(cells.into_iter().map(Cell::from).collect::<Vec<_>>())
    })
    .collect();

  let header_style = themed_style(
    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    theme,
    |t| &t.header_fg,
    |t| &t.header_bg,
  );
  let header = Row::new(
    names.into_iter().map(Cell::from).collect::<Vec<_>>(),
  )
  .style(header_style);
  let constraints: Vec<Constraint> = widths
    .iter()
    .map(|w| Constraint::Length((*w).min(MAX_CELL_WIDTH) as u16))
    .collect();
  let mut style = Style::default();
  if let Some(fg) = theme_color(theme, |t| &t.item_fg)
  {
    style = style.fg(fg);
  }
  Table::new(rows, constraints).header(header).column_spacing(2).style(style)
}
