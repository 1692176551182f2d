/// Declare-before-use violations found by the analyzer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
	/// An identifier read before any assignment declared it.
	#[error("Variable '{0}' is undeclared.")]
	Undeclared(String),
	/// A second declaration of a name already in the symbol table.
	#[error("Variable '{0}' is already declared.")]
	AlreadyDeclared(String),
}
