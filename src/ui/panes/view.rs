use ratatui::{
  layout::Rect,
  style::{
    Color,
    Style,
  },
  symbols::Marker,
  widgets::{
    Axis,
    Chart,
    Clear,
    Dataset,
    GraphType,
    Paragraph,
    Wrap,
  },
};

use super::widget_block;
use crate::{
  app::App,
  core::plotter::Plot,
  ui::format::axis_label,
};

const PALETTE: [Color; 8] = [
  Color::Cyan,
  Color::Yellow,
  Color::Green,
  Color::Magenta,
  Color::Red,
  Color::Blue,
  Color::LightCyan,
  Color::LightYellow,
];

pub fn draw_view_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  f.render_widget(Clear, area);
  match app.dashboard().plotter.plot()
  {
    Plot::Placeholder =>
    {
      let para = Paragraph::new("Select files to plot")
        .style(Style::default().fg(Color::DarkGray))
        .block(widget_block(app, "Plot", false));
      f.render_widget(para, area);
    }
    Plot::Unplottable(reason) =>
    {
      let para = Paragraph::new(reason.clone())
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true })
        .block(widget_block(app, "Plot", false));
      f.render_widget(para, area);
    }
    Plot::Lines { spec, series, x_bounds, y_bounds } =>
    {
      let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
          Dataset::default()
            .name(s.name.clone())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(PALETTE[i % PALETTE.len()]))
            .data(&s.points)
        })
        .collect();
      let x_axis = Axis::default()
        .title(spec.x.clone())
        .style(Style::default().fg(Color::Gray))
        .bounds(*x_bounds)
        .labels(bound_labels(*x_bounds));
      let y_axis = Axis::default()
        .title(spec.y.clone())
        .style(Style::default().fg(Color::Gray))
        .bounds(*y_bounds)
        .labels(bound_labels(*y_bounds));
      let title = format!("{} vs {} by {}", spec.y, spec.x, spec.by);
      let chart = Chart::new(datasets)
        .block(widget_block(app, title, false))
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(None);
      f.render_widget(chart, area);
    }
  }
}

fn bound_labels(bounds: [f64; 2]) -> Vec<String>
{
  let mid = (bounds[0] + bounds[1]) / 2.0;
  vec![axis_label(bounds[0]), axis_label(mid), axis_label(bounds[1])]
}
