//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `x * (3 + y)`
//! as nested nodes. Identifiers and numbers are the only leaves.

use crate::scanner::TokenType;

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
	Number(i64),
	Identifier(Identifier),
	Binary { left: Box<Expression>, operator: BinaryOperator, right: Box<Expression> },
}

impl Expression {
	pub fn binary(left: Self, operator: BinaryOperator, right: Self) -> Self {
		Self::Binary { left: Box::new(left), operator, right: Box::new(right) }
	}
}

/// A variable name together with where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
	pub name:   String,
	pub line:   usize,
	pub column: usize,
}

impl Identifier {
	pub fn new(name: impl Into<String>, line: usize, column: usize) -> Self {
		Self { name: name.into(), line, column }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
	Plus,
	Minus,
	Star,
	Slash,
	EqualEqual,
	BangEqual,
	Less,
	LessEqual,
	Greater,
	GreaterEqual,
}

impl BinaryOperator {
	/// Operators of the `term` rule, `*` and `/`.
	pub fn multiplicative(r#type: TokenType) -> Option<Self> {
		match r#type {
			TokenType::Star => Some(Self::Star),
			TokenType::Slash => Some(Self::Slash),
			_ => None,
		}
	}

	/// Operators of the `expression` rule. Arithmetic and comparison share this
	/// single level, so `1 + 2 < 3 + 4` is `((1 + 2) < 3) + 4`.
	pub fn additive(r#type: TokenType) -> Option<Self> {
		Some(match r#type {
			TokenType::Plus => Self::Plus,
			TokenType::Minus => Self::Minus,
			TokenType::EqualEqual => Self::EqualEqual,
			TokenType::BangEqual => Self::BangEqual,
			TokenType::Less => Self::Less,
			TokenType::LessEqual => Self::LessEqual,
			TokenType::Greater => Self::Greater,
			TokenType::GreaterEqual => Self::GreaterEqual,
			_ => return None,
		})
	}

	pub fn is_multiplicative(self) -> bool { matches!(self, Self::Star | Self::Slash) }

	pub fn symbol(self) -> &'static str {
		match self {
			Self::Plus => "+",
			Self::Minus => "-",
			Self::Star => "*",
			Self::Slash => "/",
			Self::EqualEqual => "==",
			Self::BangEqual => "!=",
			Self::Less => "<",
			Self::LessEqual => "<=",
			Self::Greater => ">",
			Self::GreaterEqual => ">=",
		}
	}
}

impl std::fmt::Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Number(n) => write!(f, "{n}"),
			Self::Identifier(identifier) => write!(f, "{}", identifier.name),
			Self::Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.symbol()),
		}
	}
}
