//! Declare-before-use checking.
//!
//! A single walk over the program, before anything runs. Assignments are the
//! only way to declare a name: the target of the first assignment to `x`
//! declares it, later assignments to `x` reuse that declaration. Every read of
//! a name that has no declaration yet is reported, and the walk never stops
//! early, so one pass reports every violation.
//!
//! The target of an assignment is declared before its value is checked, so
//! `x = x;` passes analysis and reads the never-assigned `x` as 0 at runtime.

use tracing::{debug, warn};

use crate::{MiniError, error::semantic::SemanticError, parser::expression::{Expression, Identifier}, statement::{Block, Else, Program, Statement}, symbol_table::SymbolTable};

/// Walks a [`Program`] and fills a [`SymbolTable`].
#[derive(Debug, Default)]
pub struct Analyzer {
	symbols: SymbolTable,
	errors:  Vec<SemanticError>,
}

/// Outcome of an analysis pass.
#[derive(Debug)]
pub struct Analysis {
	/// Every declared name. Only names carried over through
	/// [`Analyzer::with_symbols`] have values.
	pub symbols: SymbolTable,
	/// Violations in the order they were found.
	pub errors:  Vec<SemanticError>,
}

impl Analysis {
	pub fn is_valid(&self) -> bool { self.errors.is_empty() }

	/// The symbol table, or every violation when there is at least one.
	pub fn into_result(self) -> Result<SymbolTable, MiniError> {
		if self.is_valid() { Ok(self.symbols) } else { Err(MiniError::SemanticErrors(self.errors)) }
	}
}

impl Analyzer {
	pub fn new() -> Self { Self::default() }

	/// Continue from names declared by earlier programs, as the REPL does.
	pub fn with_symbols(symbols: SymbolTable) -> Self { Self { symbols, errors: Vec::new() } }

	pub fn analyze(mut self, program: &Program) -> Analysis {
		for statement in &program.statements {
			self.statement(statement);
		}
		debug!(symbols = self.symbols.len(), errors = self.errors.len(), "analyzed program");
		Analysis { symbols: self.symbols, errors: self.errors }
	}

	fn statement(&mut self, statement: &Statement) {
		match statement {
			Statement::Assign { target, value } => {
				self.declare(target);
				self.expression(value);
			}
			Statement::If { condition, then_branch, else_branch } => {
				self.expression(condition);
				self.block(then_branch);
				if let Some(Else { body }) = else_branch {
					self.block(body);
				}
			}
			Statement::While { condition, body } => {
				self.expression(condition);
				self.block(body);
			}
			Statement::Print(expression) => self.expression(expression),
		}
	}

	fn block(&mut self, block: &Block) {
		for statement in &block.statements {
			self.statement(statement);
		}
	}

	fn expression(&mut self, expression: &Expression) {
		match expression {
			Expression::Number(_) => {}
			Expression::Identifier(identifier) => {
				let result = self.symbols.lookup(&identifier.name);
				self.record(identifier, result);
			}
			Expression::Binary { left, right, .. } => {
				self.expression(left);
				self.expression(right);
			}
		}
	}

	/// Declare the target of an assignment unless an earlier assignment did.
	fn declare(&mut self, target: &Identifier) {
		if !self.symbols.is_declared(&target.name) {
			let result = self.symbols.declare(&target.name);
			self.record(target, result);
		}
	}

	fn record<T>(&mut self, at: &Identifier, result: Result<T, SemanticError>) {
		if let Err(e) = result {
			warn!(line = at.line, column = at.column, "{e}");
			self.errors.push(e);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{parser::Parser, scanner::Scanner};

	fn analyze(input: &str) -> Analysis {
		let tokens = Scanner::new(input).scan_tokens().unwrap();
		let program = Parser::new(tokens).parse().unwrap();
		Analyzer::new().analyze(&program)
	}

	fn messages(input: &str) -> Vec<String> { analyze(input).errors.iter().map(ToString::to_string).collect() }

	#[test]
	fn analyze_valid_program() {
		let analysis = analyze("5 = x;\nx * 3 + x = y;\nif (y > 10) { pout(y); } else { pout(x); }");
		assert!(analysis.is_valid());
		assert_eq!(analysis.symbols.entries(), vec![("x", None), ("y", None)]);
	}

	#[test]
	fn analyze_undeclared_reads() {
		assert_eq!(messages("pout(x);"), vec!["Variable 'x' is undeclared."]);
		assert_eq!(messages("a + b = c;"), vec!["Variable 'a' is undeclared.", "Variable 'b' is undeclared."]);
		assert_eq!(messages("while (n) { }"), vec!["Variable 'n' is undeclared."]);
	}

	#[test]
	fn analyze_one_error_per_use_site() {
		let errors = analyze("pout(x); pout(x + x); 1 = x; pout(x);").errors;
		assert_eq!(errors, vec![SemanticError::Undeclared("x".to_string()); 3]);
	}

	#[test]
	fn analyze_keeps_going_after_errors() {
		assert_eq!(messages("if (a) { pout(b); } else { pout(c * (d / 2)); }"), vec![
			"Variable 'a' is undeclared.",
			"Variable 'b' is undeclared.",
			"Variable 'c' is undeclared.",
			"Variable 'd' is undeclared.",
		]);
	}

	#[test]
	fn analyze_reassignment_is_not_redeclaration() {
		let analysis = analyze("1 = x; 2 = x; x + 1 = x;");
		assert!(analysis.is_valid());
		assert_eq!(analysis.symbols.len(), 1);
	}

	#[test]
	fn analyze_declares_target_before_value() {
		assert!(analyze("x = x;").is_valid());
		assert_eq!(messages("x = y;"), vec!["Variable 'x' is undeclared."]);
	}

	#[test]
	fn analyze_declarations_in_blocks_are_global() {
		assert!(analyze("if (1) { 2 = inner; } pout(inner);").is_valid());
	}

	#[test]
	fn analyze_with_existing_symbols() {
		let mut symbols = SymbolTable::new();
		symbols.assign("x", 4);
		let tokens = Scanner::new("pout(x); 1 = y;").scan_tokens().unwrap();
		let program = Parser::new(tokens).parse().unwrap();
		let analysis = Analyzer::with_symbols(symbols).analyze(&program);
		assert!(analysis.is_valid());
		assert_eq!(analysis.symbols.entries(), vec![("x", Some(4)), ("y", None)]);
	}

	#[test]
	fn analysis_into_result() {
		assert!(analyze("1 = x;").into_result().is_ok());
		let error = analyze("pout(x); pout(y);").into_result().unwrap_err();
		assert_eq!(
			error.to_string(),
			"Semantic Analysis Errors:\nVariable 'x' is undeclared.\nVariable 'y' is undeclared."
		);
	}
}
