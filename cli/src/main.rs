mod cmd;

use std::path::PathBuf;
use std::process::ExitCode;

use crate::cmd::CliCommand;

use clap::Parser;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
  /// INI color catalog to layer over the built-in Material colors
  #[clap(long, global = true, value_parser)]
  catalog: Option<PathBuf>,

  #[clap(subcommand)]
  command: CliCommand,
}

fn main() -> ExitCode {
  let default_log_level = "warn";
  let env = env_logger::Env::default().filter_or("RUST_LOG", default_log_level);
  env_logger::init_from_env(env);

  let cli = Cli::parse();
  match cli.command.run(cli.catalog.as_deref()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(report) => {
      eprintln!("{report:?}");
      ExitCode::FAILURE
    }
  }
}
