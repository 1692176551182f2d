pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod semantic;

use scanner::ScanError;
use semantic::SemanticError;

/// MiniError is the top-level error type for the MiniLang pipeline.
#[derive(thiserror::Error, Debug)]
pub enum MiniError {
	/// Internal error, reading sources or flushing output
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Every lexical error of the source, in source order
	#[error("LEXICAL ERROR\n{}", join_lines(.0))]
	ScannerErrors(Vec<ScanError>),
	/// The first syntax error, parsing stops there
	#[error("{0}")]
	ParseError(#[from] parser::ParseError),
	/// Every declare-before-use violation of the program
	#[error("Semantic Analysis Errors:\n{}", join_lines(.0))]
	SemanticErrors(Vec<SemanticError>),
	/// Runtime errors encountered during execution
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] interpreter::InterpreterError),
}

fn join_lines<T: std::fmt::Display>(errors: &[T]) -> String {
	errors.iter().map(|e| e.to_string()).collect::<Vec<String>>().join("\n")
}
