#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

/// A syntax error. Parsing stops at the first one.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Syntax Error at line {line}, column {column}: {type}")]
pub struct ParseError {
	pub line:   usize,
	pub column: usize,
	pub r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, column: usize, r#type: ParseErrorType) -> Self { Self { line, column, r#type } }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	/// A token that cannot start a statement.
	UnexpectedToken(String),
	/// A token that cannot start a factor.
	ExpectedExpression(String),
	/// Anything but an identifier after the `=` of an assignment.
	ExpectedIdentifier(String),
	MissingSemicolon,
	MissingLeftParen,
	MissingRightParen,
	MissingLeftBrace,
	MissingRightBrace,
	MissingAssign,
	/// An expression tree or parenthesis nesting past `MAX_DEPTH`.
	TooDeep,
	/// Fallback for expected tokens without a dedicated message.
	Expected(String),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken(lexeme) => write!(f, "Unexpected token ({lexeme})"),
			ExpectedExpression(lexeme) => write!(f, "Expected a number, identifier, or expression ({lexeme})"),
			ExpectedIdentifier(lexeme) => write!(f, "Expected an identifier on the right side of '=' ({lexeme})"),
			MissingSemicolon => write!(f, "Expected ; after Statement"),
			MissingLeftParen => write!(f, "Expected ( after Statement"),
			MissingRightParen => write!(f, "Expected ) after expression"),
			MissingLeftBrace => write!(f, "Expected {{ before block"),
			MissingRightBrace => write!(f, "Expected }} after block"),
			MissingAssign => write!(f, "Expected = in assignment"),
			TooDeep => write!(f, "Expression nested too deeply"),
			Expected(what) => write!(f, "Expected {what}"),
		}
	}
}
