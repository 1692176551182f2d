/// A specific scanning error with its source position and type.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Line {line}, Column {column}: {type}")]
pub struct ScanError {
	/// The line of the first character of the offending lexeme.
	pub line:   usize,
	/// The column of the first character of the offending lexeme.
	pub column: usize,
	/// The type of scanning error.
	pub r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, column: usize, r#type: ScanErrorType) -> Self { Self { line, column, r#type } }
}

/// Types of scanning errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanErrorType {
	/// A character outside the MiniLang alphabet.
	InvalidCharacter(char),
	/// An operator character that only exists as part of a two-character
	/// operator, like a lone `!`.
	InvalidOperator(char),
	/// A digit run glued to a letter or underscore, e.g. `5x`.
	NumericIdentifier,
	/// A digit run that does not fit in a 64-bit integer.
	NumberTooLarge,
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			InvalidCharacter(c) => write!(f, "Invalid character: '{c}'"),
			InvalidOperator(c) => write!(f, "Invalid operator: {c}"),
			NumericIdentifier => write!(f, "Identifiers cannot start with a number"),
			NumberTooLarge => write!(f, "Number literal is too large"),
		}
	}
}
