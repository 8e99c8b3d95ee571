//! Symbol Table
//!
//! Variables keyed by the identity of the token that declared them.
//! Entries are only ever inserted, never removed, for the length of a run.

use std::collections::HashMap;

use crate::error::{MusoError, MusoResult};
use crate::program::{FrequencyToken, Identity};
use super::value::{Value, ValueType};

/// A declared variable
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Token that declared the variable
    pub name: FrequencyToken,
    pub value: Value,
}

impl Variable {
    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }
}

/// Mapping from identity to variable
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: HashMap<Identity, Variable>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new variable; fails if the name is taken
    pub fn declare(&mut self, name: FrequencyToken, value: Value) -> MusoResult<()> {
        let key = name.identity();
        if self.variables.contains_key(&key) {
            return Err(MusoError::DuplicateDeclaration(name.value));
        }
        self.variables.insert(key, Variable { name, value });
        Ok(())
    }

    pub fn contains(&self, name: &FrequencyToken) -> bool {
        self.variables.contains_key(&name.identity())
    }

    pub fn get(&self, name: &FrequencyToken) -> MusoResult<&Variable> {
        self.variables
            .get(&name.identity())
            .ok_or(MusoError::UndefinedVariable(name.value))
    }

    pub fn get_mut(&mut self, name: &FrequencyToken) -> MusoResult<&mut Variable> {
        self.variables
            .get_mut(&name.identity())
            .ok_or(MusoError::UndefinedVariable(name.value))
    }

    /// Look up a value by raw frequency
    pub fn value_of(&self, name: f64) -> Option<&Value> {
        self.variables.get(&Identity::new(name)).map(|v| &v.value)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
