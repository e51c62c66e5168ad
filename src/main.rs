use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use dualbank_mem::stimulus::{Stimulus, Testbench};
use log::{error, info, LevelFilter};

#[derive(Parser, Debug)]
#[command(about = "Run stimulus scripts against the dual-bank memory controller")]
struct Args {
  /// Only report failures
  #[arg(short, long)]
  quiet: bool,

  /// Stimulus JSON files
  #[arg(required = true)]
  files: Vec<PathBuf>,
}

fn main() -> ExitCode {
  let args = Args::parse();

  let default_level = if args.quiet { LevelFilter::Warn } else { LevelFilter::Info };
  env_logger::Builder::new()
    .filter_level(default_level)
    .parse_default_env()
    .init();

  for path in &args.files {
    let result = Stimulus::from_file(path)
      .and_then(|stimulus| Testbench::run(&stimulus));

    match result {
      Ok(report) => info!("{}: ok ({} checks)", path.display(), report.checks),
      Err(e) => {
        error!("{}: {e}", path.display());
        return ExitCode::FAILURE;
      }
    }
  }

  ExitCode::SUCCESS
}
