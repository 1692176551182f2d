use std::path::PathBuf;

use minilang::{MiniError, MiniLang, ScanErrorType, SemanticError, SymbolTable, TokenType, analyze, execute, parse, tokenize};

const EXAMPLE: &str = "5 = x;
x * 3 + x = y;
if (y > 10) { pout(y); } else { pout(x); }";

fn fixture() -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("test.mini") }

fn run(source: &str) -> Result<Vec<i64>, MiniError> {
	let program = parse(tokenize(source)?)?;
	let symbols = analyze(&program).into_result()?;
	execute(&program, symbols, std::io::sink())
}

#[test]
fn test_pipeline_end_to_end() {
	let tokens = tokenize(EXAMPLE).unwrap();
	assert_eq!(tokens.len(), 34);
	assert_eq!(tokens.last().map(|t| t.r#type), Some(TokenType::Eof));

	let program = parse(tokens).unwrap();
	assert_eq!(program.statements.len(), 3);

	let analysis = analyze(&program);
	assert!(analysis.is_valid());

	let mut output = Vec::new();
	let printed = execute(&program, analysis.symbols, &mut output).unwrap();
	assert_eq!(printed, vec![20]);
	assert_eq!(output, b"20\n");
}

#[test]
fn test_mini_file() {
	let driver = MiniLang::default();
	assert!(driver.run_file(fixture()).is_ok());

	let source = std::fs::read_to_string(fixture()).unwrap();
	let symbols = driver.run(&source, SymbolTable::new(), std::io::sink()).unwrap();
	assert_eq!(symbols.get("sum"), 55);
	assert_eq!(symbols.get("q"), 0);
	assert_eq!(run(&source).unwrap(), vec![2, 4, 6, 8, 10, 55, 0]);
}

#[test]
fn test_print_tokens() {
	let mut output = Vec::new();
	MiniLang::default().print_tokens(fixture(), &mut output).unwrap();
	let table = String::from_utf8(output).unwrap();
	let mut lines = table.lines();
	assert!(lines.next().unwrap().starts_with("Name"));
	lines.next();
	assert_eq!(lines.next().unwrap().split_whitespace().collect::<Vec<_>>(), vec!["NUMBER", "0", "2", "1"]);
	assert_eq!(table.lines().last().unwrap().split_whitespace().next(), Some("EOF"));
}

#[test]
fn test_print_ast() {
	let mut output = Vec::new();
	MiniLang::default().print_ast(fixture(), &mut output).unwrap();
	let tree = String::from_utf8(output).unwrap();
	assert!(tree.starts_with("PROGRAM\n   |-- ASSIGN (=)\n   |--    |-- IDENTIFIER (i)\n"));
	assert!(tree.contains("   |-- WHILE\n"));
}

#[test]
fn test_lexical_errors_are_reported_together() {
	let source = "5 = x;\n🔥Comment line\nx * 3 = 9y;";
	let Err(MiniError::ScannerErrors(errors)) = tokenize(source) else { panic!("expected scanner errors") };
	let types: Vec<_> = errors.iter().map(|e| e.r#type.clone()).collect();
	assert_eq!(types, vec![ScanErrorType::InvalidCharacter('🔥'), ScanErrorType::NumericIdentifier]);
	assert_eq!(
		MiniError::ScannerErrors(errors).to_string(),
		"LEXICAL ERROR\nLine 2, Column 1: Invalid character: '🔥'\nLine 3, Column 9: Identifiers cannot start with a number"
	);
}

#[test]
fn test_syntax_error_stops_pipeline() {
	let error = run("5 = x\npout(x);").unwrap_err();
	assert_eq!(error.to_string(), "Syntax Error at line 1, column 1: Expected ; after Statement");
}

#[test]
fn test_semantic_errors_block_execution() {
	let program = parse(tokenize("pout(a); b + 1 = c; 1 = a;").unwrap()).unwrap();
	let analysis = analyze(&program);
	assert!(!analysis.is_valid());
	assert_eq!(analysis.errors, vec![
		SemanticError::Undeclared("a".to_string()),
		SemanticError::Undeclared("b".to_string())
	]);
	assert!(matches!(run("pout(a);"), Err(MiniError::SemanticErrors(_))));
}

#[test]
fn test_reassignment_is_accepted() {
	assert_eq!(run("1 = x; 2 = x; pout(x);").unwrap(), vec![2]);
}

#[test]
fn test_division_by_zero_prints_zero() {
	assert_eq!(run("0 = x; 5 / x = y; pout(y);").unwrap(), vec![0]);
}

#[test]
fn test_deep_expressions() {
	let sum = vec!["1"; minilang::parser::MAX_DEPTH].join(" + ");
	assert_eq!(run(&format!("{sum} = x; pout(x);")).unwrap(), vec![256]);

	let sum = vec!["1"; 50_000].join(" + ");
	let error = run(&format!("{sum} = x;")).unwrap_err();
	assert_eq!(error.to_string(), "Syntax Error at line 1, column 1023: Expression nested too deeply");
}
