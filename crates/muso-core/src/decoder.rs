//! Instruction Decoder
//!
//! Turns the classified frequency stream into instructions.
//! This layer performs structural grouping only; it never fails. Malformed
//! programs surface later as arity errors during resolution.

use tracing::{debug, warn};

use crate::program::{FrequencyToken, Instruction, Opcode};

/// Frequency stream decoder
pub struct Decoder;

impl Decoder {
    /// Decode the whole token stream, left to right, consuming each token once.
    ///
    /// A reserved frequency opens an instruction. A non-encasing instruction
    /// collects operands until the next reserved frequency, which is left for
    /// the next instruction. An encasing instruction collects everything,
    /// including other reserved frequencies, until its own frequency recurs;
    /// that closing token is consumed and dropped. Tokens outside any
    /// instruction are discarded.
    pub fn decode(tokens: &[FrequencyToken]) -> Vec<Instruction> {
        let mut instructions = Vec::new();
        let mut cursor = 0;

        while cursor < tokens.len() {
            let token = &tokens[cursor];
            cursor += 1;

            let Some(opcode) = token.opcode() else {
                debug!(token = %token, "discarding token outside of an instruction");
                continue;
            };

            let (operands, closed) = if opcode.is_encasing() {
                Self::collect_encased(opcode, tokens, &mut cursor)
            } else {
                (Self::collect_plain(tokens, &mut cursor), true)
            };

            if !closed {
                warn!(
                    opcode = opcode.name(),
                    start = token.start,
                    "encasing instruction never closed, body runs to end of input"
                );
            }

            let instruction = Instruction::with_operands(opcode, operands);
            debug!(%instruction, "decoded");
            instructions.push(instruction);
        }

        instructions
    }

    /// Operands of a non-encasing opcode: everything up to the next reserved frequency
    fn collect_plain(tokens: &[FrequencyToken], cursor: &mut usize) -> Vec<FrequencyToken> {
        let mut operands = Vec::new();
        while let Some(token) = tokens.get(*cursor) {
            if token.opcode().is_some() {
                break;
            }
            operands.push(*token);
            *cursor += 1;
        }
        operands
    }

    /// Body of an encasing opcode. Returns the payload and whether a closing
    /// token was found.
    fn collect_encased(
        opcode: Opcode,
        tokens: &[FrequencyToken],
        cursor: &mut usize,
    ) -> (Vec<FrequencyToken>, bool) {
        let mut operands = Vec::new();
        while let Some(token) = tokens.get(*cursor) {
            *cursor += 1;
            if token.opcode() == Some(opcode) {
                return (operands, true);
            }
            operands.push(*token);
        }
        (operands, false)
    }
}
