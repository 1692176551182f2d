//! Statements only ever appear at the top level or inside a block, and the
//! operands of `+` or the condition of a `while` are always expressions. Each
//! statement has a fixed shape, an assignment always has exactly one target
//! and one value.

mod tree;

use crate::parser::expression::{Expression, Identifier};

/// The root of every parsed source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
	pub statements: Vec<Statement>,
}

/// A statement in MiniLang.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
	/// `<value> = <target>;`, declares `target` on first use.
	Assign {
		target: Identifier,
		value:  Expression,
	},
	If {
		condition:   Expression,
		then_branch: Block,
		else_branch: Option<Else>,
	},
	While {
		condition: Expression,
		body:      Block,
	},
	/// A `pout(...)` statement.
	Print(Expression),
}

/// A braced statement list, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
	pub statements: Vec<Statement>,
}

/// The `else { ... }` branch of an if statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Else {
	pub body: Block,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{parser::Parser, scanner::Scanner};

	fn program(input: &'static str) -> Program {
		let tokens = Scanner::new(input).scan_tokens().unwrap();
		Parser::new(tokens).parse().unwrap()
	}

	#[test]
	fn test_statement_count() {
		assert_eq!(program("").statements.len(), 0);
		assert_eq!(program("1 = x;").statements.len(), 1);
		assert_eq!(program("1 = x; x + 1 = y; pout(y);").statements.len(), 3);
		assert_eq!(program("while (0) { 1 = x; 2 = y; }").statements.len(), 1);
	}

	#[test]
	fn test_statement_type() {
		let statements = program("1 = x; pout(x); if (x) { } while (x) { }").statements;
		assert!(matches!(statements[0], Statement::Assign { .. }));
		assert!(matches!(statements[1], Statement::Print(_)));
		assert!(matches!(statements[2], Statement::If { else_branch: None, .. }));
		assert!(matches!(statements[3], Statement::While { .. }));
	}

	#[test]
	fn test_blocks_are_always_materialized() {
		let statements = program("if (1) { } else { pout(2); }").statements;
		let Statement::If { then_branch, else_branch: Some(Else { body }), .. } = &statements[0] else {
			panic!("expected if with else, got {statements:?}");
		};
		assert!(then_branch.statements.is_empty());
		assert_eq!(body.statements, vec![Statement::Print(Expression::Number(2))]);
	}
}
