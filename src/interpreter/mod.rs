//! MiniLang tree-walk interpreter.
//!
//! The interpreter walks the program produced by the parser, in document
//! order, against the symbol table filled by the analyzer. Every name lives in
//! that one table, blocks don't open scopes.
//!
//! # Runtime rules
//!
//! - **Numbers** evaluate to themselves.
//! - **Identifiers** evaluate to their stored value, 0 if never assigned.
//! - **Binary**: both operands, then the operator. See [`value`].
//! - **Conditions** are true when non-zero.
//! - **`while`** re-evaluates its condition before every iteration and has no
//!   iteration cap.

pub mod value;

use std::io::Write;

use tracing::debug;
use value::{Value, is_truthy};

use crate::{error::interpreter::InterpreterError, parser::expression::Expression, statement::{Block, Else, Program, Statement}, symbol_table::SymbolTable};

/// Interpreter that executes MiniLang programs, printing to `output`.
pub struct Interpreter<W: Write> {
	symbols: SymbolTable,
	output:  W,
	printed: Vec<Value>,
}

impl<W: Write> Interpreter<W> {
	pub fn new(symbols: SymbolTable, output: W) -> Self { Self { symbols, output, printed: Vec::new() } }

	/// Execute every statement of `program` once and return the printed values
	/// in order. Each value is also written to the output as it is printed.
	pub fn execute(&mut self, program: &Program) -> Result<Vec<Value>, InterpreterError> {
		for statement in &program.statements {
			self.execute_statement(statement)?;
		}
		self.output.flush()?;
		let printed = std::mem::take(&mut self.printed);
		debug!(printed = printed.len(), symbols = self.symbols.len(), "executed program");
		Ok(printed)
	}

	/// Final variable state.
	pub fn symbols(&self) -> &SymbolTable { &self.symbols }

	pub fn into_symbols(self) -> SymbolTable { self.symbols }

	fn execute_statement(&mut self, statement: &Statement) -> Result<(), InterpreterError> {
		match statement {
			Statement::Assign { target, value } => {
				let value = self.evaluate(value);
				self.symbols.assign(&target.name, value);
			}
			Statement::Print(expression) => {
				let value = self.evaluate(expression);
				writeln!(self.output, "{value}")?;
				self.printed.push(value);
			}
			Statement::If { condition, then_branch, else_branch } => {
				if is_truthy(self.evaluate(condition)) {
					self.execute_block(then_branch)?;
				} else if let Some(Else { body }) = else_branch {
					self.execute_block(body)?;
				}
			}
			Statement::While { condition, body } => {
				while is_truthy(self.evaluate(condition)) {
					self.execute_block(body)?;
				}
			}
		}
		Ok(())
	}

	fn execute_block(&mut self, block: &Block) -> Result<(), InterpreterError> {
		for statement in &block.statements {
			self.execute_statement(statement)?;
		}
		Ok(())
	}

	/// Evaluate the given expression and return its value.
	fn evaluate(&self, expression: &Expression) -> Value {
		match expression {
			Expression::Number(n) => *n,
			Expression::Identifier(identifier) => self.symbols.get(&identifier.name),
			Expression::Binary { left, operator, right } => {
				let left = self.evaluate(left);
				let right = self.evaluate(right);
				operator.apply(left, right)
			}
		}
	}
}
