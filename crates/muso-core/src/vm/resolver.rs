//! Argument Resolver
//!
//! Trims an instruction's raw operands against the live symbol table and
//! checks its arity. Resolution of one instruction must see every mutation
//! made by the instructions before it.

use tracing::trace;

use crate::error::{MusoError, MusoResult};
use crate::program::Instruction;
use super::memory::SymbolTable;

/// Operand resolver
pub struct Resolver;

impl Resolver {
    /// Produce the final operand list for `instruction`.
    ///
    /// Non-encasing opcodes keep at most `arity` operands. Operands that name
    /// no declared variable are dropped when the opcode ignores undefined
    /// names, and kept otherwise so execution can report them.
    pub fn resolve(instruction: &Instruction, symbols: &SymbolTable) -> MusoResult<Instruction> {
        let opcode = instruction.opcode;
        let limit = if opcode.is_encasing() {
            usize::MAX
        } else {
            opcode.arity()
        };

        let operands: Vec<_> = instruction
            .operands
            .iter()
            .filter(|token| {
                let keep = !opcode.ignores_undefined() || symbols.contains(token);
                if !keep {
                    trace!(token = %token, opcode = opcode.name(), "skipping undefined operand");
                }
                keep
            })
            .take(limit)
            .copied()
            .collect();

        let resolved = Instruction::with_operands(opcode, operands);
        if !resolved.is_valid() {
            return Err(MusoError::ArityError {
                opcode,
                found: resolved.operands.len(),
                required: opcode.arity(),
            });
        }
        Ok(resolved)
    }
}
