//! Instruction Representation
//!
//! An opcode plus the raw operand tokens collected for it by the decoder.
//! This layer contains no execution semantics.

use std::fmt;

use super::opcode::Opcode;
use super::token::FrequencyToken;

/// Decoded instruction
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: Vec<FrequencyToken>,
}

impl Instruction {
    /// Create an instruction with the given operands
    pub fn with_operands(opcode: Opcode, operands: Vec<FrequencyToken>) -> Self {
        Instruction { opcode, operands }
    }

    /// Valid once it carries at least the opcode's arity
    pub fn is_valid(&self) -> bool {
        self.operands.len() >= self.opcode.arity()
    }

    /// Operand values, without their time spans
    pub fn operand_values(&self) -> Vec<f64> {
        self.operands.iter().map(|t| t.value).collect()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands: Vec<String> = self.operands.iter().map(|t| t.to_string()).collect();
        write!(
            f,
            "Action: {} Hz, {} arguments required, [{}]",
            self.opcode.hz(),
            self.opcode.arity(),
            operands.join(", ")
        )
    }
}
