//! The `Scanner` uses the lexical grammar: its alphabet is characters and its
//! strings are tokens. The `Parser` uses the syntactic grammar: its alphabet
//! is tokens and its strings are statements.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Expression|+ - == != < > <= >=|Left
//! Term|* /|Left
//!
//! Additive and comparison operators deliberately share one level, so
//! `1 + 2 < 3 + 4` groups as `((1 + 2) < 3) + 4`.
//!
//! Grammar:
//!
//! ``` BNF
//! program        → statement* EOF ;
//! statement      → assignment | if | while | print ;
//! assignment     → expression "=" IDENTIFIER ";" ;
//! if             → "if" "(" expression ")" block ( "else" block )? ;
//! while          → "while" "(" expression ")" block ;
//! print          → "pout" "(" expression ")" ";" ;
//! block          → "{" statement* "}" ;
//! expression     → term ( ( "+" | "-" | "==" | "!=" | "<" | ">" | "<=" | ">=" ) term )* ;
//! term           → factor ( ( "*" | "/" ) factor )* ;
//! factor         → NUMBER | IDENTIFIER | "(" expression ")" ;
//! ```
//!
//! The first syntax error ends parsing, there is no recovery.
//!
//! Expression trees deeper than [`MAX_DEPTH`] are rejected, the later stages
//! walk them recursively.

pub mod expression;

use TokenType::*;
use anyhow::anyhow;
use expression::{BinaryOperator, Expression};
use tracing::{debug, warn};

use crate::{MiniError, error::parser::{ParseError, ParseErrorType, ParserError}, scanner::{Token, TokenType}, statement::{self, Block, Program, Statement}};

/// Deepest expression tree, and deepest parenthesis nesting, accepted.
pub const MAX_DEPTH: usize = 256;

/// An expression with the depth of its tree.
type Nested = (Expression, usize);

/// Recursive descent parser over a scanned token sequence.
pub struct Parser<'a> {
	/// The tokens to parse, ending with `Eof`.
	tokens:  Vec<Token<'a>>,
	/// Index of the current token.
	current: usize,
	/// Open parentheses around the current token.
	nesting: usize,
}

impl<'a> Parser<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self { Self { tokens, current: 0, nesting: 0 } }

	/// Parse the whole token sequence into a [`Program`].
	pub fn parse(mut self) -> Result<Program, MiniError> {
		match self.program() {
			Ok(program) => {
				debug!(statements = program.statements.len(), "parsed program");
				Ok(program)
			}
			Err(ParserError::InternalError(e)) => Err(e.into()),
			Err(ParserError::ParseError(e)) => {
				warn!(line = e.line, column = e.column, "syntax error: {}", e.r#type);
				Err(e.into())
			}
		}
	}

	fn program(&mut self) -> Result<Program, ParserError> {
		let mut statements = Vec::new();
		while !self.check(Eof)? {
			statements.push(self.statement()?);
		}
		Ok(Program { statements })
	}

	/// Dispatch on the first token of the statement.
	fn statement(&mut self) -> Result<Statement, ParserError> {
		let token = self.peek()?;
		match token.r#type {
			Number(_) | Identifier => self.assignment(),
			If => self.if_statement(),
			While => self.while_statement(),
			Pout => self.print_statement(),
			_ => Err(self.error(token, ParseErrorType::UnexpectedToken(token.value()))),
		}
	}

	/// `value = target;`, the value comes first.
	fn assignment(&mut self) -> Result<Statement, ParserError> {
		let start = self.peek()?.clone();
		let (value, _) = self.expression()?;
		self.expect(Equal)?;
		let target = self.identifier()?;
		self.terminate(&start)?;
		Ok(Statement::Assign { target, value })
	}

	fn if_statement(&mut self) -> Result<Statement, ParserError> {
		self.advance()?; // consume 'if'
		let condition = self.condition()?;
		let then_branch = self.block()?;

		let else_branch = if self.check(Else)? {
			self.advance()?; // consume 'else'
			Some(statement::Else { body: self.block()? })
		} else {
			None
		};

		Ok(Statement::If { condition, then_branch, else_branch })
	}

	fn while_statement(&mut self) -> Result<Statement, ParserError> {
		self.advance()?; // consume 'while'
		let condition = self.condition()?;
		let body = self.block()?;
		Ok(Statement::While { condition, body })
	}

	fn print_statement(&mut self) -> Result<Statement, ParserError> {
		let start = self.advance()?; // consume 'pout'
		let expression = self.condition()?;
		self.terminate(&start)?;
		Ok(Statement::Print(expression))
	}

	/// A parenthesized expression, as used by `if`, `while` and `pout`.
	fn condition(&mut self) -> Result<Expression, ParserError> {
		self.expect(LeftParen)?;
		let (expression, _) = self.expression()?;
		self.expect(RightParen)?;
		Ok(expression)
	}

	/// `{ statement* }`, always materialized even when empty.
	fn block(&mut self) -> Result<Block, ParserError> {
		self.expect(LeftBrace)?;
		let mut statements = Vec::new();
		while !self.check(RightBrace)? && !self.check(Eof)? {
			statements.push(self.statement()?);
		}
		self.expect(RightBrace)?;
		Ok(Block { statements })
	}

	/// Parse expressions, arithmetic and comparison share one level.
	fn expression(&mut self) -> Result<Nested, ParserError> {
		let (mut expression, mut depth) = self.term()?;
		while let Some(operator) = BinaryOperator::additive(self.peek()?.r#type) {
			let token = self.advance()?;
			let (right, right_depth) = self.term()?;
			depth = self.deepen(&token, depth, right_depth)?;
			expression = Expression::binary(expression, operator, right);
		}
		Ok((expression, depth))
	}

	/// Parse term expressions.
	fn term(&mut self) -> Result<Nested, ParserError> {
		let (mut expression, mut depth) = self.factor()?;
		while let Some(operator) = BinaryOperator::multiplicative(self.peek()?.r#type) {
			let token = self.advance()?;
			let (right, right_depth) = self.factor()?;
			depth = self.deepen(&token, depth, right_depth)?;
			expression = Expression::binary(expression, operator, right);
		}
		Ok((expression, depth))
	}

	/// Parse numbers, identifiers and parenthesized expressions.
	fn factor(&mut self) -> Result<Nested, ParserError> {
		let token = self.peek()?;
		match token.r#type {
			Number(n) => {
				self.advance()?;
				Ok((Expression::Number(n), 1))
			}
			Identifier => Ok((Expression::Identifier(self.identifier()?), 1)),
			LeftParen => {
				let token = self.advance()?; // consume '('
				self.nesting += 1;
				if self.nesting > MAX_DEPTH {
					return Err(self.error(&token, ParseErrorType::TooDeep));
				}
				let nested = self.expression()?;
				self.expect(RightParen)?;
				self.nesting -= 1;
				Ok(nested)
			}
			_ => Err(self.error(token, ParseErrorType::ExpectedExpression(token.value()))),
		}
	}

	/// Depth of a binary node over operands of the given depths.
	fn deepen(&self, operator: &Token<'a>, left: usize, right: usize) -> Result<usize, ParserError> {
		let depth = left.max(right) + 1;
		if depth > MAX_DEPTH {
			return Err(self.error(operator, ParseErrorType::TooDeep));
		}
		Ok(depth)
	}

	/// Consume an identifier token.
	fn identifier(&mut self) -> Result<expression::Identifier, ParserError> {
		let token = self.peek()?;
		if token.r#type != Identifier {
			return Err(self.error(token, ParseErrorType::ExpectedIdentifier(token.value())));
		}
		let token = self.advance()?;
		Ok(expression::Identifier::new(token.lexeme, token.line, token.column))
	}

	/// Consume the closing `;` of a statement.
	///
	/// A missing `;` is usually only noticed at the first token of the next
	/// line, so the error points at the start of the statement instead.
	fn terminate(&mut self, start: &Token<'a>) -> Result<(), ParserError> {
		if !self.check(Semicolon)? {
			return Err(ParseError::new(start.line, start.column, ParseErrorType::MissingSemicolon).into());
		}
		self.advance()?;
		Ok(())
	}

	/// Consume the current token if it has the given type, otherwise fail with
	/// a message specific to that type.
	fn expect(&mut self, r#type: TokenType) -> Result<Token<'a>, ParserError> {
		let token = self.peek()?;
		if token.r#type == r#type {
			return self.advance();
		}
		let error = match r#type {
			LeftParen => ParseErrorType::MissingLeftParen,
			RightParen => ParseErrorType::MissingRightParen,
			LeftBrace => ParseErrorType::MissingLeftBrace,
			RightBrace => ParseErrorType::MissingRightBrace,
			Equal => ParseErrorType::MissingAssign,
			other => ParseErrorType::Expected(other.name().to_string()),
		};
		Err(self.error(token, error))
	}

	fn check(&self, r#type: TokenType) -> Result<bool, ParserError> { Ok(self.peek()?.r#type == r#type) }

	/// Move past the current token and return it, `Eof` is never passed.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> {
		let token = self.peek()?.clone();
		if token.r#type != Eof {
			self.current += 1;
		}
		Ok(token)
	}

	/// Peek at the current token.
	fn peek(&self) -> Result<&Token<'a>, ParserError> {
		self.tokens.get(self.current).ok_or_else(|| anyhow!("Token sequence ended without EOF").into())
	}

	fn error(&self, token: &Token<'a>, r#type: ParseErrorType) -> ParserError {
		ParseError::new(token.line, token.column, r#type).into()
	}
}
