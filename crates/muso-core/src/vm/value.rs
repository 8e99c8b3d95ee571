//! Runtime Value Representation
//!
//! The three Musolang value types. The type tag of a variable is derived from
//! its value, so a tag and its representation can never disagree.

use std::fmt;

use crate::program::Instruction;

/// Runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numeric value (IEEE 754)
    Number(f64),

    /// Text value
    String(String),

    /// Function body (reserved for future extensions; never produced yet)
    Function(Vec<Instruction>),
}

/// Type tag of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Number,
    String,
    Function,
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Function(_) => ValueType::Function,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Number => write!(f, "number"),
            ValueType::String => write!(f, "string"),
            ValueType::Function => write!(f, "function"),
        }
    }
}

/// Renders numbers in their shortest re-parseable decimal form (`42`, `0.5`)
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Function(body) => write!(f, "<function of {} instructions>", body.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_rendering() {
        assert_eq!(Value::Number(42.0).to_string(), "42");
        assert_eq!(Value::Number(0.5).to_string(), "0.5");
        assert_eq!(Value::Number(-3.25).to_string(), "-3.25");
        assert_eq!(Value::Number(0.0).to_string(), "0");
    }

    #[test]
    fn tags_follow_representation() {
        assert_eq!(Value::Number(1.0).value_type(), ValueType::Number);
        assert_eq!(Value::String("a".into()).value_type(), ValueType::String);
        assert_eq!(Value::Function(Vec::new()).value_type(), ValueType::Function);
        assert_eq!(ValueType::Function.to_string(), "function");
    }
}
