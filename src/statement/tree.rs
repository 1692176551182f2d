//! ASCII rendering of a parsed program, one node per line:
//!
//! ``` text
//! PROGRAM
//!    |-- ASSIGN (=)
//!    |--    |-- IDENTIFIER (y)
//!    |--    |-- EXPR (+)
//!    |--    |--    |-- TERM (*)
//! ```

use std::fmt::{Display, Formatter, Result};

use super::{Block, Else, Program, Statement};
use crate::parser::expression::Expression;

const BRANCH: &str = "   |-- ";

impl Display for Program {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		writeln!(f, "PROGRAM")?;
		for statement in &self.statements {
			write_statement(f, statement, BRANCH)?;
		}
		Ok(())
	}
}

fn write_statement(f: &mut Formatter<'_>, statement: &Statement, prefix: &str) -> Result {
	let child = format!("{prefix}{BRANCH}");
	match statement {
		Statement::Assign { target, value } => {
			writeln!(f, "{prefix}ASSIGN (=)")?;
			writeln!(f, "{child}IDENTIFIER ({})", target.name)?;
			write_expression(f, value, &child)
		}
		Statement::If { condition, then_branch, else_branch } => {
			writeln!(f, "{prefix}IF")?;
			write_expression(f, condition, &child)?;
			write_block(f, then_branch, &child)?;
			if let Some(Else { body }) = else_branch {
				writeln!(f, "{child}ELSE")?;
				write_block(f, body, &format!("{child}{BRANCH}"))?;
			}
			Ok(())
		}
		Statement::While { condition, body } => {
			writeln!(f, "{prefix}WHILE")?;
			write_expression(f, condition, &child)?;
			write_block(f, body, &child)
		}
		Statement::Print(expression) => {
			writeln!(f, "{prefix}PRINT")?;
			write_expression(f, expression, &child)
		}
	}
}

fn write_block(f: &mut Formatter<'_>, block: &Block, prefix: &str) -> Result {
	writeln!(f, "{prefix}BLOCK")?;
	let child = format!("{prefix}{BRANCH}");
	block.statements.iter().try_for_each(|statement| write_statement(f, statement, &child))
}

fn write_expression(f: &mut Formatter<'_>, expression: &Expression, prefix: &str) -> Result {
	match expression {
		Expression::Number(n) => writeln!(f, "{prefix}NUMBER ({n})"),
		Expression::Identifier(identifier) => writeln!(f, "{prefix}IDENTIFIER ({})", identifier.name),
		Expression::Binary { left, operator, right } => {
			let kind = if operator.is_multiplicative() { "TERM" } else { "EXPR" };
			writeln!(f, "{prefix}{kind} ({})", operator.symbol())?;
			let child = format!("{prefix}{BRANCH}");
			write_expression(f, left, &child)?;
			write_expression(f, right, &child)
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::{parser::Parser, scanner::Scanner};

	fn render(input: &str) -> String {
		let tokens = Scanner::new(input).scan_tokens().unwrap();
		Parser::new(tokens).parse().unwrap().to_string()
	}

	#[test]
	fn render_assignment() {
		assert_eq!(
			render("x * 3 + x = y;"),
			"PROGRAM
   |-- ASSIGN (=)
   |--    |-- IDENTIFIER (y)
   |--    |-- EXPR (+)
   |--    |--    |-- TERM (*)
   |--    |--    |--    |-- IDENTIFIER (x)
   |--    |--    |--    |-- NUMBER (3)
   |--    |--    |-- IDENTIFIER (x)
"
		);
	}

	#[test]
	fn render_if_else() {
		assert_eq!(
			render("if (y > 10) { pout(y); } else { }"),
			"PROGRAM
   |-- IF
   |--    |-- EXPR (>)
   |--    |--    |-- IDENTIFIER (y)
   |--    |--    |-- NUMBER (10)
   |--    |-- BLOCK
   |--    |--    |-- PRINT
   |--    |--    |--    |-- IDENTIFIER (y)
   |--    |-- ELSE
   |--    |--    |-- BLOCK
"
		);
	}

	#[test]
	fn render_empty_program() {
		assert_eq!(render("# nothing"), "PROGRAM\n");
	}
}
