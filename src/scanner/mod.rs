//! Turns MiniLang source text into tokens.
//!
//! The lexical grammar is small: integer literals, identifiers, the four
//! reserved words `if`, `else`, `while` and `pout`, and the operators
//! `+ - * / = == != < > <= >= ( ) { } ;`. Whitespace only moves the position
//! and `#` comments run to the end of the line.
//!
//! Two-character operators are matched before their one-character prefix, and
//! a reserved word can only be told apart from an identifier once the whole
//! word has been read, this is `maximal munch`.
//!
//! Errors don't stop the scan. [`Scanner`] yields them in place of the token
//! that would have been produced, and [`Scanner::scan_tokens`] gathers all of
//! them so a single run reports every bad lexeme.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;
use tracing::{debug, warn};

use crate::{MiniError, ScanError, ScanErrorType};

/// A scanner for MiniLang source code
///
/// Iterating yields tokens (or scan errors) up to and including a single
/// [`TokenType::Eof`], then stops. Create a new scanner to start over.
#[derive(Clone)]
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator, `peek` is the one-character lookahead
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the last consumed character
	cursor:      usize,
	/// Line of the next unread character
	line:        usize,
	/// Column of the next unread character
	column:      usize,
	/// Set once `Eof` has been produced
	finished:    bool,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, column: 1, finished: false }
	}

	/// Scan all tokens from the source code
	///
	/// Fails with every scan error when at least one lexeme was invalid.
	pub fn scan_tokens(self) -> Result<Vec<Token<'a>>, MiniError> {
		let mut tokens = Vec::new();
		let mut errors = Vec::new();
		for item in self {
			match item {
				Ok(token) => tokens.push(token),
				Err(e) => {
					warn!(line = e.line, column = e.column, "scan error: {}", e.r#type);
					errors.push(e);
				}
			}
		}
		if !errors.is_empty() {
			return Err(MiniError::ScannerErrors(errors));
		}
		debug!(count = tokens.len(), "scanned tokens");
		Ok(tokens)
	}

	/// Scan a single token whose first character has just been consumed
	fn scan_token(&mut self, next_char: char, line: usize, column: usize) -> Result<Token<'a>, ScanError> {
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			';' => Semicolon,
			'+' => Plus,
			'-' => Minus,
			'*' => Star,
			'/' => Slash,
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'!' => if self.match_next('=') { BangEqual } else {
				return Err(ScanError::new(line, column, ScanErrorType::InvalidOperator('!')));
			},
			c if c.is_ascii_digit() => self.number(line, column)?,
			c if c.is_ascii_alphabetic() => self.identifier(),
			c => return Err(ScanError::new(line, column, ScanErrorType::InvalidCharacter(c))),
		};

		Ok(Token::new(r#type, &self.source[self.start..self.cursor], line, column))
	}

	/// Skip whitespace and `#` comments, a comment swallows its newline
	fn skip_trivia(&mut self) {
		while let Some(c) = self.peek() {
			if c.is_whitespace() {
				self.advance();
			} else if c == '#' {
				while let Some(c) = self.advance() {
					if c == '\n' {
						break;
					}
				}
			} else {
				break;
			}
		}
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character, keeping line and column in step
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		if c == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Scan a number literal
	fn number(&mut self, line: usize, column: usize) -> Result<TokenType, ScanError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// `5x` is neither a number nor an identifier, drop the whole word.
		if self.peek().is_some_and(|c| c.is_ascii_alphabetic() || c == '_') {
			while self.peek().is_some_and(is_word_char) {
				self.advance();
			}
			return Err(ScanError::new(line, column, ScanErrorType::NumericIdentifier));
		}

		let s = &self.source[self.start..self.cursor];
		s.parse().map(Number).map_err(|_| ScanError::new(line, column, ScanErrorType::NumberTooLarge))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(is_word_char) {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}

impl<'a> Iterator for Scanner<'a> {
	type Item = Result<Token<'a>, ScanError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}
		self.skip_trivia();

		// We are at the beginning of the next lexeme.
		let (line, column) = (self.line, self.column);
		self.start = self.cursor;
		let Some(next_char) = self.advance() else {
			self.finished = true;
			return Some(Ok(Token::new(Eof, "", line, column)));
		};
		Some(self.scan_token(next_char, line, column))
	}
}

fn is_word_char(c: char) -> bool { c.is_ascii_alphanumeric() || c == '_' }
