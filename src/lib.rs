//! # How MiniLang text becomes program output
//!
//! User's source code: `x * 3 + x = y;`
//!
//! MiniLang writes assignments backwards, the value comes first and the
//! variable it is stored in comes after the `=`.

//! ## Scanning
//!
//! The [`scanner`] takes in the characters and converts them into tokens.
//! Whitespace and `#` comments are dropped, so the tokens are
//! `["x", "*", "3", "+", "x", "=", "y", ";", EOF]`.
//!
//! A bad character doesn't stop the scan, every lexical error of the source is
//! reported at once and none of the later stages run.

//! ## Parsing
//!
//! The [`parser`] builds a tree out of the tokens and reports the first syntax
//! error it meets.
//!
//! ``` text
//! PROGRAM
//!    |-- ASSIGN (=)
//!    |--    |-- IDENTIFIER (y)
//!    |--    |-- EXPR (+)
//!    |--    |--    |-- TERM (*)
//!    |--    |--    |--    |-- IDENTIFIER (x)
//!    |--    |--    |--    |-- NUMBER (3)
//!    |--    |--    |-- IDENTIFIER (x)
//! ```

//! ## Static analysis
//!
//! The [`analyzer`] checks that every variable is assigned somewhere before it
//! is read, collecting every violation, and fills the [`SymbolTable`].

//! ## Tree-walk interpreter
//!
//! The [`interpreter`] executes the tree directly, with no intermediate form.
//! All values are integers, comparisons give 1 or 0, and dividing by zero
//! gives 0.

pub mod analyzer;
pub mod cli;
pub mod error;
pub mod interpreter;
mod minilang;
pub mod parser;
pub mod scanner;
pub mod statement;
pub mod symbol_table;

use std::io::Write;

pub use analyzer::{Analysis, Analyzer};
pub use error::{MiniError, parser::ParseError, scanner::{ScanError, ScanErrorType}, semantic::SemanticError};
pub use interpreter::{Interpreter, value::Value};
pub use minilang::MiniLang;
pub use parser::Parser;
pub use scanner::{Scanner, Token, TokenType};
pub use statement::Program;
pub use symbol_table::SymbolTable;

/// Scan `source` into tokens ending with [`TokenType::Eof`].
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, MiniError> { Scanner::new(source).scan_tokens() }

/// Parse a token sequence into a [`Program`].
pub fn parse(tokens: Vec<Token<'_>>) -> Result<Program, MiniError> { Parser::new(tokens).parse() }

/// Check declare-before-use rules on a fresh [`SymbolTable`].
pub fn analyze(program: &Program) -> Analysis { Analyzer::new().analyze(program) }

/// Execute `program`, writing printed values to `output`, and return them.
pub fn execute<W: Write>(program: &Program, symbols: SymbolTable, output: W) -> Result<Vec<Value>, MiniError> {
	Ok(Interpreter::new(symbols, output).execute(program)?)
}
