use std::collections::HashMap;

use crate::error::semantic::SemanticError;

/// The single flat namespace of a MiniLang program.
///
/// The analyzer declares each name once, without a value. The interpreter
/// then overwrites the value on every assignment.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
	symbols: HashMap<String, Option<i64>>,
}

impl SymbolTable {
	pub fn new() -> Self { Self::default() }

	/// Declare a new name, a name can only be declared once.
	pub fn declare(&mut self, name: &str) -> Result<(), SemanticError> {
		if self.symbols.contains_key(name) {
			return Err(SemanticError::AlreadyDeclared(name.to_string()));
		}
		self.symbols.insert(name.to_string(), None);
		Ok(())
	}

	pub fn is_declared(&self, name: &str) -> bool { self.symbols.contains_key(name) }

	/// The value of a declared name, `None` until it has been assigned.
	pub fn lookup(&self, name: &str) -> Result<Option<i64>, SemanticError> {
		self.symbols.get(name).copied().ok_or_else(|| SemanticError::Undeclared(name.to_string()))
	}

	/// Store a value, creating the entry on first write.
	pub fn assign(&mut self, name: &str, value: i64) {
		match self.symbols.get_mut(name) {
			Some(slot) => *slot = Some(value),
			None => {
				self.symbols.insert(name.to_string(), Some(value));
			}
		}
	}

	/// The current value of a name, 0 when it was never assigned.
	pub fn get(&self, name: &str) -> i64 { self.symbols.get(name).copied().flatten().unwrap_or(0) }

	pub fn len(&self) -> usize { self.symbols.len() }

	pub fn is_empty(&self) -> bool { self.symbols.is_empty() }

	/// All symbols sorted by name.
	pub fn entries(&self) -> Vec<(&str, Option<i64>)> {
		let mut entries: Vec<_> = self.symbols.iter().map(|(name, value)| (name.as_str(), *value)).collect();
		entries.sort_unstable_by_key(|&(name, _)| name);
		entries
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn declare_once() {
		let mut table = SymbolTable::new();
		assert!(table.declare("x").is_ok());
		assert_eq!(table.declare("x"), Err(SemanticError::AlreadyDeclared("x".to_string())));
		assert_eq!(table.len(), 1);
	}

	#[test]
	fn lookup_undeclared() {
		let table = SymbolTable::new();
		let error = table.lookup("x").unwrap_err();
		assert_eq!(error.to_string(), "Variable 'x' is undeclared.");
	}

	#[test]
	fn assign_overwrites() {
		let mut table = SymbolTable::new();
		table.declare("x").unwrap();
		assert_eq!(table.lookup("x"), Ok(None));
		assert_eq!(table.get("x"), 0);

		table.assign("x", 5);
		table.assign("x", 7);
		table.assign("y", 1);
		assert_eq!(table.get("x"), 7);
		assert_eq!(table.entries(), vec![("x", Some(7)), ("y", Some(1))]);
	}

	#[test]
	fn get_missing_defaults_to_zero() {
		assert_eq!(SymbolTable::new().get("nothing"), 0);
	}
}
