use ratatui::{
  layout::{
    Constraint,
    Direction,
    Layout,
    Position,
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
    List,
    ListItem,
    ListState,
    Paragraph,
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
    TextInput,
  },
  enums::focus_title,
  ui::colors::theme_color,
};

const LABEL_WIDTH: usize = 11;

pub fn draw_browse_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &mut App,
)
{
  f.render_widget(Clear, area);
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3),
      Constraint::Percentage(40),
      Constraint::Min(3),
      Constraint::Length(6),
    ])
    .split(area);

  draw_rootdir(f, chunks[0], app);

  let ex = &app.dashboard().explorer;
  let dirs = checklist(ex.directories(), ex.selected_directories(), app);
  let dir_title = counted_title(
    Focus::Directories,
    ex.selected_directories().len(),
    ex.directories().len(),
  );
  let files = checklist(ex.files(), ex.selected_files(), app);
  let file_title =
    counted_title(Focus::Files, ex.selected_files().len(), ex.files().len());

  let dir_list = list_widget(app, dirs, dir_title, Focus::Directories);
  let file_list = list_widget(app, files, file_title, Focus::Files);
  render_list(f, chunks[1], dir_list, &mut app.dir_list);
  render_list(f, chunks[2], file_list, &mut app.file_list);

  draw_options(f, chunks[3], app);
}

fn draw_rootdir(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let focused = is_focused(app, Focus::Rootdir);
  let input = app.rootdir_input();
  let mut title = focus_title(Focus::Rootdir).to_string();
  if input.is_dirty()
  {
    title.push_str(" *");
  }
  let block = widget_block(app, title, focused);
  let inner = block.inner(area);
  f.render_widget(Paragraph::new(input.value().to_string()).block(block), area);
  if focused
  {
    place_cursor(f, inner, 0, input);
  }
}

fn counted_title(
  focus: Focus,
  selected: usize,
  total: usize,
) -> String
{
  format!("{} ({selected}/{total})", focus_title(focus))
}

/// `[x] name` rows for a multi-select list.
fn checklist<'a>(
  items: &[String],
  selected: &[String],
  app: &App,
) -> Vec<ListItem<'a>>
{
  let theme = app.config().ui.theme.as_ref();
  let marked = theme_color(theme, |t| &t.marked_fg).unwrap_or(Color::Green);
  let item_fg = theme_color(theme, |t| &t.item_fg);
  items
    .iter()
    .map(|name| {
      let on = selected.contains(name);
      let mark = if on { "[x] " } else { "[ ] " };
      let mut style = Style::default();
      if on
      {
        style = style.fg(marked);
      }
      else if let Some(fg) = item_fg
      {
        style = style.fg(fg);
      }
      ListItem::new(Line::from(vec![
        Span::styled(mark, style),
        Span::styled(name.clone(), style),
      ]))
    })
    .collect()
}

fn list_widget<'a>(
  app: &App,
  items: Vec<ListItem<'a>>,
  title: String,
  focus: Focus,
) -> List<'a>
{
  let block = widget_block(app, title, is_focused(app, focus));
  let mut list = List::new(items).block(block).highlight_symbol("");
  if is_focused(app, focus)
  {
    list = list.highlight_style(highlight_style(app));
  }
  if let Some(bg) = theme_color(app.config().ui.theme.as_ref(), |t| &t.item_bg)
  {
    list = list.style(Style::default().bg(bg));
  }
  list
}

fn render_list(
  f: &mut ratatui::Frame,
  area: Rect,
  list: List<'_>,
  state: &mut ListState,
)
{
  f.render_stateful_widget(list, area, state);
}

fn draw_options(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let cfg = app.dashboard().explorer.config();
  let header = if cfg.has_header { "[x]" } else { "[ ]" };
  let rows: [(Focus, String); 4] = [
    (Focus::CommentPrefix, cfg.comment_prefix.as_str().to_string()),
    (Focus::Separator, cfg.separator.label().to_string()),
    (Focus::Columns, app.columns_input().value().to_string()),
    (Focus::Header, header.to_string()),
  ];
  let hl = highlight_style(app);
  let lines: Vec<Line> = rows
    .iter()
    .map(|(focus, value)| {
      let label =
        format!("{:<width$}", focus_title(*focus), width = LABEL_WIDTH);
      let value_style =
        if is_focused(app, *focus) { hl } else { Style::default() };
      let cyclic = matches!(focus, Focus::CommentPrefix | Focus::Separator);
      let shown = if cyclic && is_focused(app, *focus)
      {
        format!("< {value} >")
      }
      else
      {
        value.clone()
      };
      Line::from(vec![
        Span::styled(label, Style::default().add_modifier(Modifier::DIM)),
        Span::styled(shown, value_style),
      ])
    })
    .collect();

  let focused = matches!(
    app.focus(),
    Focus::CommentPrefix | Focus::Separator | Focus::Columns | Focus::Header
  );
  let mut title = String::from("Options");
  if app.columns_input().is_dirty()
  {
    title.push_str(" *");
  }
  let block = widget_block(app, title, focused);
  let inner = block.inner(area);
  f.render_widget(Paragraph::new(lines).block(block), area);
  if is_focused(app, Focus::Columns)
  {
    let offset = LABEL_WIDTH as u16;
    let row = Rect {
      x:      inner.x + offset,
      y:      inner.y,
      width:  inner.width.saturating_sub(offset),
      height: inner.height,
    };
    place_cursor(f, row, 2, app.columns_input());
  }
}

/// Put the terminal cursor inside `area` at `line`, after the text left of
/// the input's cursor.
fn place_cursor(
  f: &mut ratatui::Frame,
  area: Rect,
  line: u16,
  input: &TextInput,
)
{
  if area.width == 0 || line >= area.height
  {
    return;
  }
  let before: String = input.value().chars().take(input.cursor()).collect();
  let w = UnicodeWidthStr::width(before.as_str()) as u16;
  let x = area.x + w.min(area.width.saturating_sub(1));
  f.set_cursor_position(Position::new(x, area.y + line));
}
