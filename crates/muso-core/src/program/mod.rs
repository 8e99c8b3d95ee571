pub mod instruction;
pub mod opcode;
pub mod source;
pub mod token;

pub use instruction::Instruction;
pub use opcode::Opcode;
pub use token::{FrequencyToken, Identity};
