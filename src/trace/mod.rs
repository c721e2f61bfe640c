//! Opt-in file logging and the panic hook.
//!
//! The terminal belongs to the UI, so log output never goes to stdout or
//! stderr. When tracing is enabled (`--trace` or `CSVDASH_TRACE=1`) a
//! `tracing-subscriber` writes to `CSVDASH_TRACE_FILE`, or
//! `$TMPDIR/csvdash-trace.log`, or `/tmp/csvdash-trace.log`.

use std::{
  fs::OpenOptions,
  io,
  path::PathBuf,
  sync::Mutex,
};

use tracing_subscriber::{
  EnvFilter,
  fmt,
  layer::SubscriberExt,
  util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "csvdash=debug";

/// True when `CSVDASH_TRACE` is set to anything but empty or `0`.
pub fn enabled_from_env() -> bool
{
  std::env::var("CSVDASH_TRACE").map(|v| !v.is_empty() && v != "0").unwrap_or(false)
}

/// Where log lines go unless an explicit file is given.
pub fn default_file_path() -> PathBuf
{
  if let Ok(fp) = std::env::var("CSVDASH_TRACE_FILE")
    && !fp.is_empty()
  {
    return PathBuf::from(fp);
  }
  if let Ok(tmp) = std::env::var("TMPDIR")
    && !tmp.is_empty()
  {
    return PathBuf::from(tmp).join("csvdash-trace.log");
  }
  PathBuf::from("/tmp/csvdash-trace.log")
}

/// Install the global subscriber writing to `path` (appending).
///
/// The filter comes from `CSVDASH_LOG`, defaulting to `csvdash=debug`.
pub fn init(path: Option<PathBuf>) -> io::Result<PathBuf>
{
  let path = path.unwrap_or_else(default_file_path);
  let file = OpenOptions::new().create(true).append(true).open(&path)?;
  let filter =
    EnvFilter::try_from_env("CSVDASH_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
  let layer = fmt::layer().with_writer(Mutex::new(file)).with_ansi(false).with_target(true);
  tracing_subscriber::registry()
    .with(filter)
    .with(layer)
    .try_init()
    .map_err(|e| io::Error::other(e.to_string()))?;
  Ok(path)
}

/// Install a panic hook that logs the panic message, location and backtrace,
/// then restores the terminal so the panic is visible to the user.
pub fn install_panic_hook()
{
  std::panic::set_hook(Box::new(|info| {
    let msg = if let Some(s) = info.payload().downcast_ref::<&str>()
    {
      s.to_string()
    }
    else if let Some(s) = info.payload().downcast_ref::<String>()
    {
      s.clone()
    }
    else
    {
      String::from("<non-string panic payload>")
    };
    let loc = info
      .location()
      .map(|l| format!("{}:{}", l.file(), l.line()))
      .unwrap_or_else(|| "<unknown>".to_string());
    let bt = std::backtrace::Backtrace::force_capture();
    tracing::error!("panic: {msg} @ {loc}");
    tracing::error!("backtrace:\n{bt}");
    let _ = crossterm::terminal::disable_raw_mode();
    let mut out = std::io::stdout();
    let _ = crossterm::execute!(out, crossterm::terminal::LeaveAlternateScreen);
    eprintln!("csvdash panicked: {msg} @ {loc}");
  }));
}
