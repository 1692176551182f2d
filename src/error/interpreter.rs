#[derive(thiserror::Error, Debug)]
/// Errors that can occur during execution
///
/// Division by zero and reads of never-assigned names have defined results,
/// so only the output sink can fail.
pub enum InterpreterError {
	/// The output sink refused a printed value
	#[error("Failed write output: {0}")]
	Output(#[from] std::io::Error),
}
