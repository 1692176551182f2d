use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "minilang", version, about = "Run MiniLang programs", after_long_help = "Logs go to stderr, set MINILANG_LOG (e.g. MINILANG_LOG=debug) to filter them.")]
pub struct Cli {
	/// Print stage banners, the final variables and debug logs
	#[arg(short, long, global = true)]
	pub verbose: bool,
	#[command(subcommand)]
	pub mode:    Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Input file
	File { path: PathBuf },
	/// Source text given on the command line
	Eval { source: String },
	/// Input prompt, variables persist between lines
	Repl,
	/// Print the token table of a file
	Tokens { path: PathBuf },
	/// Print the syntax tree of a file
	Ast { path: PathBuf },
}
