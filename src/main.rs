use std::path::PathBuf;

use clap::Parser;
use csvdash::{
  App,
  core::Event,
  runtime,
  trace,
};
use tracing::info;

/// Browse, inspect and plot delimited text files in the terminal.
#[derive(Debug, Parser)]
#[command(name = "csvdash", version, about)]
struct Cli
{
  /// Use DIR as the config root
  #[arg(long, value_name = "DIR", env = "CSVDASH_CONFIG_DIR")]
  config_dir: Option<PathBuf>,

  /// Write logs to FILE (default $TMPDIR/csvdash-trace.log)
  #[arg(
    long,
    value_name = "FILE",
    num_args = 0..=1,
    default_missing_value = ""
  )]
  trace: Option<String>,

  /// Start with DIR as the root directory (default /)
  #[arg(value_name = "DIR")]
  rootdir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>>
{
  let cli = Cli::parse();
  trace::install_panic_hook();

  if let Some(dir) = &cli.config_dir
  {
    // Single-threaded at this point
    unsafe { std::env::set_var("CSVDASH_CONFIG_DIR", dir) };
  }

  if cli.trace.is_some() || trace::enabled_from_env()
  {
    let file = cli.trace.filter(|s| !s.is_empty()).map(PathBuf::from);
    match trace::init(file)
    {
      Ok(path) => info!(path = %path.display(), "tracing enabled"),
      Err(e) => eprintln!("csvdash: cannot open trace file: {e}"),
    }
  }

  info!("starting csvdash {}", env!("CARGO_PKG_VERSION"));
  let mut app = App::new();
  if let Some(dir) = cli.rootdir
  {
    app.dispatch(Event::SetRootdir(dir));
  }
  runtime::run_app(&mut app)
}
