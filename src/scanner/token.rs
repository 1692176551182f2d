/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
	pub r#type: TokenType,
	/// The source text of the token, empty for [`TokenType::Eof`].
	pub lexeme: &'a str,
	pub line:   usize,
	pub column: usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType, lexeme: &'a str, line: usize, column: usize) -> Self {
		Self { r#type, lexeme, line, column }
	}

	/// The payload shown in diagnostics and token tables.
	pub fn value(&self) -> String {
		match self.r#type {
			TokenType::Number(n) => n.to_string(),
			TokenType::Eof => "EOF".to_string(),
			_ => self.lexeme.to_string(),
		}
	}
}

/// The different types of tokens in MiniLang, The copying is lightweight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Semicolon `;`.
	Semicolon,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Star,
	/// Slash `/`.
	Slash,
	/// Equal `=`, only used by assignments.
	Equal,
	/// Equal equal `==`.
	EqualEqual,
	/// Bang equal `!=`.
	BangEqual,
	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Greater than `>`.
	Greater,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Identifier, the name is the lexeme.
	Identifier,
	/// Integer literal, e.g. `123`.
	Number(i64),
	/// If statement keyword.
	If,
	/// Else branch keyword.
	Else,
	/// While loop keyword.
	While,
	/// Print statement keyword.
	Pout,
	/// End of input.
	Eof,
}

impl TokenType {
	pub fn keyword_or_identifier(value: &str) -> Self {
		match value {
			"if" => TokenType::If,
			"else" => TokenType::Else,
			"while" => TokenType::While,
			"pout" => TokenType::Pout,
			_ => TokenType::Identifier,
		}
	}

	/// Upper-case name used by token dumps and generic parse errors.
	pub fn name(&self) -> &'static str {
		use TokenType::*;
		match self {
			LeftParen => "LPAREN",
			RightParen => "RPAREN",
			LeftBrace => "LBRACE",
			RightBrace => "RBRACE",
			Semicolon => "SEMICOLON",
			Plus => "PLUS",
			Minus => "MINUS",
			Star => "MULTIPLY",
			Slash => "DIVIDE",
			Equal => "ASSIGN",
			EqualEqual => "EQUALS",
			BangEqual => "NOT_EQUALS",
			Less => "LESS_THAN",
			LessEqual => "LESS_EQUAL",
			Greater => "GREATER_THAN",
			GreaterEqual => "GREATER_EQUAL",
			Identifier => "IDENTIFIER",
			Number(_) => "NUMBER",
			If => "IF",
			Else => "ELSE",
			While => "WHILE",
			Pout => "POUT",
			Eof => "EOF",
		}
	}
}
