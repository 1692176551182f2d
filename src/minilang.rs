use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;
use tracing::info;

use crate::{MiniError, analyzer::Analyzer, interpreter::Interpreter, parser::Parser, scanner::Scanner, symbol_table::SymbolTable};

/// MiniLang is the driver tying the pipeline stages together.
#[derive(Debug, Default, Clone, Copy)]
pub struct MiniLang {
	/// Print stage banners and the final variables along with the output.
	pub verbose: bool,
}

impl MiniLang {
	pub fn new(verbose: bool) -> Self { Self { verbose } }

	/// Run a source file, printing to stdout.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MiniError> {
		let source = read_source(path.as_ref())?;
		self.run_source(&source)
	}

	/// Run source text, printing to stdout.
	pub fn run_source(&self, source: &str) -> Result<(), MiniError> {
		self.run(source, SymbolTable::new(), std::io::stdout().lock())?;
		Ok(())
	}

	/// Run the REPL prompt.
	///
	/// Every line is a complete program, variables carry over to the next
	/// line.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let mut symbols = SymbolTable::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited minilang repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			match self.run(input.trim(), symbols.clone(), std::io::stdout().lock()) {
				Ok(updated) => symbols = updated,
				Err(e) => eprintln!("{e}"),
			}
		}
	}

	/// Print the token table of a source file.
	pub fn print_tokens<P: AsRef<Path>, W: Write>(&self, path: P, mut output: W) -> Result<(), MiniError> {
		let source = read_source(path.as_ref())?;
		let tokens = Scanner::new(&source).scan_tokens()?;
		writeln!(output, "{:<14}{:<10}{:<6}{:<6}", "Name", "Value", "Line", "Column").context("Failed write tokens")?;
		writeln!(output, "{}", "-".repeat(36)).context("Failed write tokens")?;
		for token in &tokens {
			writeln!(output, "{:<14}{:<10}{:<6}{:<6}", token.r#type.name(), token.value(), token.line, token.column)
				.context("Failed write tokens")?;
		}
		Ok(())
	}

	/// Print the syntax tree of a source file.
	pub fn print_ast<P: AsRef<Path>, W: Write>(&self, path: P, mut output: W) -> Result<(), MiniError> {
		let source = read_source(path.as_ref())?;
		let tokens = Scanner::new(&source).scan_tokens()?;
		let program = Parser::new(tokens).parse()?;
		write!(output, "{program}").context("Failed write syntax tree")?;
		Ok(())
	}

	/// Run `source` on top of `symbols` and return the final variables.
	///
	/// Each stage must succeed before the next one starts: scan errors,
	/// the syntax error or semantic errors stop the run before anything is
	/// executed.
	pub fn run<W: Write>(&self, source: &str, symbols: SymbolTable, mut output: W) -> Result<SymbolTable, MiniError> {
		let tokens = Scanner::new(source).scan_tokens()?;
		self.banner(&mut output, "Lexical Analysis: PASSED")?;

		let program = Parser::new(tokens).parse()?;
		self.banner(&mut output, "Syntax Analysis: PASSED")?;

		let symbols = Analyzer::with_symbols(symbols).analyze(&program).into_result()?;
		self.banner(&mut output, "Semantic Analysis Passed Successfully!")?;

		let mut interpreter = Interpreter::new(symbols, &mut output);
		let printed = interpreter.execute(&program)?;
		let symbols = interpreter.into_symbols();
		info!(printed = printed.len(), "program finished");

		if self.verbose {
			writeln!(output, "\nVariables:").context("Failed write variables")?;
			for (name, value) in symbols.entries() {
				let value = value.map_or_else(|| "unassigned".to_string(), |v| v.to_string());
				writeln!(output, "{name} = {value}").context("Failed write variables")?;
			}
		}
		Ok(symbols)
	}

	fn banner<W: Write>(&self, output: &mut W, text: &str) -> Result<(), MiniError> {
		if self.verbose {
			writeln!(output, "{text}").context("Failed write banner")?;
		}
		Ok(())
	}
}

fn read_source(path: &Path) -> Result<String, MiniError> {
	Ok(read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn run(minilang: MiniLang, source: &str) -> (Result<SymbolTable, MiniError>, String) {
		let mut buffer = Vec::new();
		let result = minilang.run(source, SymbolTable::new(), &mut buffer);
		(result, String::from_utf8(buffer).unwrap())
	}

	#[test]
	fn run_prints_program_output() {
		let (result, output) = run(MiniLang::default(), "3 = x; pout(x * x);");
		assert_eq!(result.unwrap().get("x"), 3);
		assert_eq!(output, "9\n");
	}

	#[test]
	fn run_verbose_prints_banners_and_variables() {
		let (result, output) = run(MiniLang::new(true), "3 = x; x = y; pout(x);");
		assert!(result.is_ok());
		assert_eq!(
			output,
			"Lexical Analysis: PASSED\nSyntax Analysis: PASSED\nSemantic Analysis Passed Successfully!\n3\n\nVariables:\nx = 3\ny = 3\n"
		);
	}

	#[test]
	fn run_stops_before_execution_on_semantic_errors() {
		let (result, output) = run(MiniLang::default(), "pout(1); pout(x);");
		assert!(matches!(result, Err(MiniError::SemanticErrors(ref errors)) if errors.len() == 1));
		assert_eq!(output, "");
	}

	#[test]
	fn run_carries_symbols_over() {
		let mut buffer = Vec::new();
		let minilang = MiniLang::default();
		let symbols = minilang.run("4 = x;", SymbolTable::new(), &mut buffer).unwrap();
		let symbols = minilang.run("x + 1 = x; pout(x);", symbols, &mut buffer).unwrap();
		assert_eq!(symbols.get("x"), 5);
		assert_eq!(String::from_utf8(buffer).unwrap(), "5\n");
	}

	#[test]
	fn run_file_missing() {
		let result = MiniLang::default().run_file("does/not/exist.mini");
		assert!(matches!(result, Err(MiniError::InternalError(_))));
	}
}
