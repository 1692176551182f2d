use crate::parser::expression::BinaryOperator::{self, *};

/// Value represents a runtime value in MiniLang, every expression is an
/// integer and comparisons produce 1 or 0.
pub type Value = i64;

/// Determines if the value is considered "true" in a condition.
pub fn is_truthy(value: Value) -> bool { value != 0 }

impl BinaryOperator {
	/// Performs the operation, total over all operands.
	///
	/// Arithmetic wraps on overflow and dividing by zero yields 0.
	pub fn apply(self, left: Value, right: Value) -> Value {
		match self {
			Plus => left.wrapping_add(right),
			Minus => left.wrapping_sub(right),
			Star => left.wrapping_mul(right),
			Slash => {
				if right == 0 {
					0
				} else {
					left.wrapping_div(right)
				}
			}
			EqualEqual => Value::from(left == right),
			BangEqual => Value::from(left != right),
			Less => Value::from(left < right),
			LessEqual => Value::from(left <= right),
			Greater => Value::from(left > right),
			GreaterEqual => Value::from(left >= right),
		}
	}
}
