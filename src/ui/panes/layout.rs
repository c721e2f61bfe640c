use ratatui::layout::Constraint;

/// Column split between Browse and the right-hand side, then the row split
/// between Inspect and View within it.
pub fn pane_constraints(app: &crate::App) -> ([Constraint; 2], [Constraint; 2])
{
  let panes = app.config().ui.panes.clone().unwrap_or_default();
  let browse = panes.browse.min(100);
  let outer = if browse == 0 || browse == 100
  {
    [Constraint::Percentage(35), Constraint::Percentage(65)]
  }
  else
  {
    [Constraint::Percentage(browse), Constraint::Percentage(100 - browse)]
  };

  let total = panes.inspect.saturating_add(panes.view);
  if total == 0
  {
    return (outer, [Constraint::Percentage(50), Constraint::Percentage(50)]);
  }
  let i_norm = (panes.inspect as u32 * 100 / total as u32) as u16;
  let v_norm = 100u16.saturating_sub(i_norm);
  (outer, [Constraint::Percentage(i_norm), Constraint::Percentage(v_norm)])
}
