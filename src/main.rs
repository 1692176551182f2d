use std::process::ExitCode;

use clap::Parser;
use minilang::{MiniLang, cli::*};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let driver = MiniLang::new(cli.verbose);
	let result = match cli.mode {
		Mode::File { path } => driver.run_file(&path),
		Mode::Eval { source } => driver.run_source(&source),
		Mode::Repl => {
			driver.run_prompt();
			Ok(())
		}
		Mode::Tokens { path } => driver.print_tokens(&path, std::io::stdout().lock()),
		Mode::Ast { path } => driver.print_ast(&path, std::io::stdout().lock()),
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{e}");
			ExitCode::FAILURE
		}
	}
}

/// Logs go to stderr so they never mix with program output.
fn init_logging(verbose: bool) {
	let default = if verbose { "debug" } else { "error" };
	let filter = EnvFilter::try_from_env("MINILANG_LOG").unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();
}
