//! Opcode Definitions
//!
//! Defines the reserved opcode frequencies of Musolang.
//! This file contains no execution semantics.
//! Opcode frequencies are a compatibility contract with existing recordings.

use std::fmt;

/// Reserved opcode frequencies, in Hz
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Assignment
    Immediate = 50,

    // Output
    Print = 110,

    // Arithmetic
    Add  = 140,
    Sub  = 170,
    Mult = 220,
    Div  = 260,

    // Types
    CycleType = 310,
    StrDef    = 390,

    // Input
    Input = 500,

    // Functions
    FuncDef  = 600,
    FuncExec = 660,

    // Declaration
    VarInit = 700,
}

impl Opcode {
    /// Every opcode, in ascending frequency order
    pub const ALL: [Opcode; 12] = [
        Opcode::Immediate,
        Opcode::Print,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mult,
        Opcode::Div,
        Opcode::CycleType,
        Opcode::StrDef,
        Opcode::Input,
        Opcode::FuncDef,
        Opcode::FuncExec,
        Opcode::VarInit,
    ];

    /// Recognize a measured frequency as an opcode (exact match only)
    pub fn from_hz(value: f64) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.hz() == value)
    }

    /// Reserved frequency of this opcode
    pub fn hz(self) -> f64 {
        f64::from(self as u16)
    }

    /// Minimum number of resolved operands
    pub fn arity(self) -> usize {
        match self {
            Opcode::Immediate => 2,
            Opcode::Add | Opcode::Sub | Opcode::Mult | Opcode::Div => 3,
            Opcode::Print
            | Opcode::CycleType
            | Opcode::StrDef
            | Opcode::Input
            | Opcode::FuncDef
            | Opcode::FuncExec
            | Opcode::VarInit => 1,
        }
    }

    /// Encasing opcodes are closed by a repeat of their own frequency
    pub fn is_encasing(self) -> bool {
        matches!(self, Opcode::StrDef | Opcode::FuncDef)
    }

    /// Whether operands naming undeclared variables are dropped during resolution.
    ///
    /// VarInit and Immediate have to name targets that may not exist yet,
    /// and encasing bodies are raw payload.
    pub fn ignores_undefined(self) -> bool {
        !(self.is_encasing() || matches!(self, Opcode::VarInit | Opcode::Immediate))
    }

    pub fn name(self) -> &'static str {
        match self {
            Opcode::Immediate => "IMMEDIATE",
            Opcode::Print => "PRINT",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mult => "MULT",
            Opcode::Div => "DIV",
            Opcode::CycleType => "CYCLE_TYPE",
            Opcode::StrDef => "STR_DEF",
            Opcode::Input => "INPUT",
            Opcode::FuncDef => "FUNC_DEF",
            Opcode::FuncExec => "FUNC_EXEC",
            Opcode::VarInit => "VAR_INIT",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} Hz)", self.name(), self.hz())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_match_table() {
        assert_eq!(Opcode::from_hz(50.0), Some(Opcode::Immediate));
        assert_eq!(Opcode::from_hz(260.0), Some(Opcode::Div));
        assert_eq!(Opcode::from_hz(700.0), Some(Opcode::VarInit));
        assert_eq!(Opcode::from_hz(700.5), None);
        assert_eq!(Opcode::from_hz(0.0), None);
    }

    #[test]
    fn hz_round_trips_for_every_opcode() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_hz(op.hz()), Some(op));
        }
    }

    #[test]
    fn only_literal_definitions_encase() {
        let encasing: Vec<Opcode> = Opcode::ALL.iter().copied().filter(|op| op.is_encasing()).collect();
        assert_eq!(encasing, vec![Opcode::StrDef, Opcode::FuncDef]);
    }

    #[test]
    fn undefined_policy() {
        assert!(!Opcode::VarInit.ignores_undefined());
        assert!(!Opcode::Immediate.ignores_undefined());
        assert!(!Opcode::StrDef.ignores_undefined());
        assert!(!Opcode::FuncDef.ignores_undefined());
        assert!(Opcode::Print.ignores_undefined());
        assert!(Opcode::Add.ignores_undefined());
        assert!(Opcode::FuncExec.ignores_undefined());
    }
}
