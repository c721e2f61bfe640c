use std::{
  error::Error,
  io::{
    self,
    Stdout,
  },
  time::Duration,
};

use crossterm::{
  event,
  execute,
  terminal::{
    EnterAlternateScreen,
    LeaveAlternateScreen,
    disable_raw_mode,
    enable_raw_mode,
  },
};
use ratatui::{
  Terminal,
  backend::CrosstermBackend,
};

use crate::{
  app::App,
  runtime_util::process_event,
};

type Term = Terminal<CrosstermBackend<Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Take over the terminal and run the draw/event loop until the app quits.
/// The terminal is handed back whether or not the loop failed.
pub fn run_app(app: &mut App) -> Result<(), Box<dyn Error>>
{
  let mut terminal = enter()?;
  let res = event_loop(&mut terminal, app);
  leave(&mut terminal)?;
  if let Err(e) = &res
  {
    tracing::error!("event loop stopped: {e}");
  }
  res
}

fn enter() -> io::Result<Term>
{
  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
  terminal.clear()?;
  Ok(terminal)
}

fn leave(terminal: &mut Term) -> io::Result<()>
{
  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
  terminal.show_cursor()
}

fn event_loop(
  terminal: &mut Term,
  app: &mut App,
) -> Result<(), Box<dyn Error>>
{
  loop
  {
    if std::mem::take(&mut app.force_full_redraw)
    {
      terminal.clear()?;
    }
    terminal.draw(|f| crate::ui::draw(f, app))?;
    if event::poll(POLL_INTERVAL)? && process_event(app, event::read()?)?
    {
      return Ok(());
    }
  }
}
