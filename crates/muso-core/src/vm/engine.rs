//! Execution Engine
//!
//! Resolves and executes decoded instructions one at a time against a
//! symbol table it owns. Every failure is returned to the caller; nothing
//! already executed is rolled back.

use tracing::{debug, info};

use crate::error::{MusoError, MusoResult};
use crate::program::{Instruction, Opcode};

use super::host::Host;
use super::memory::SymbolTable;
use super::resolver::Resolver;
use super::value::{Value, ValueType};

/// Musolang execution engine
#[derive(Debug)]
pub struct Engine<H: Host> {
    symbols: SymbolTable,
    host: H,
    executed: usize,
}

impl<H: Host> Engine<H> {
    /// Create an engine with an empty symbol table
    pub fn new(host: H) -> Self {
        Engine {
            symbols: SymbolTable::new(),
            host,
            executed: 0,
        }
    }

    /// Execute a decoded program until it ends or the first error
    pub fn run(&mut self, program: &[Instruction]) -> MusoResult<()> {
        for instruction in program {
            self.step(instruction)?;
        }
        info!(
            executed = self.executed,
            variables = self.symbols.len(),
            "program finished"
        );
        Ok(())
    }

    /// Resolve one instruction against the current state and execute it
    pub fn step(&mut self, instruction: &Instruction) -> MusoResult<()> {
        let resolved = Resolver::resolve(instruction, &self.symbols)?;
        debug!(instruction = %resolved, "executing");
        self.execute(&resolved)?;
        self.executed += 1;
        Ok(())
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Number of instructions that completed
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Dispatch a resolved instruction
    fn execute(&mut self, instruction: &Instruction) -> MusoResult<()> {
        match instruction.opcode {
            Opcode::VarInit => self.var_init(instruction),
            Opcode::Immediate => self.immediate(instruction),
            Opcode::Print => self.print(instruction),
            Opcode::Add => self.add(instruction),
            Opcode::Sub => self.arithmetic(instruction, |l, r| l - r),
            Opcode::Mult => self.arithmetic(instruction, |l, r| l * r),
            Opcode::Div => self.divide(instruction),
            Opcode::CycleType => self.cycle_type(instruction),
            Opcode::Input => self.input(instruction),

            // Bodies are captured by the decoder; materializing them is not
            // supported yet.
            Opcode::StrDef | Opcode::FuncDef | Opcode::FuncExec => {
                debug!(
                    opcode = instruction.opcode.name(),
                    operands = instruction.operands.len(),
                    "no-op"
                );
                Ok(())
            }
        }
    }

    fn var_init(&mut self, instruction: &Instruction) -> MusoResult<()> {
        let name = instruction.operands[0];
        self.symbols.declare(name, Value::Number(0.0))
    }

    /// Store operand 1's own frequency, as a literal, into operand 0
    fn immediate(&mut self, instruction: &Instruction) -> MusoResult<()> {
        let literal = instruction.operands[1].value;
        let target = self.symbols.get_mut(&instruction.operands[0])?;
        if target.value_type() != ValueType::Number {
            return Err(MusoError::TypeMismatch {
                opcode: Opcode::Immediate,
                found: vec![target.value_type()],
            });
        }
        target.value = Value::Number(literal);
        Ok(())
    }

    fn print(&mut self, instruction: &Instruction) -> MusoResult<()> {
        let variable = self.symbols.get(&instruction.operands[0])?;
        if variable.value_type() == ValueType::Function {
            return Err(MusoError::TypeMismatch {
                opcode: Opcode::Print,
                found: vec![ValueType::Function],
            });
        }
        let line = variable.value.to_string();
        self.host.write_line(&line)
    }

    /// Numeric sum or string concatenation; all three operands share one type
    fn add(&mut self, instruction: &Instruction) -> MusoResult<()> {
        let [dst, left, right] = self.operand_values(instruction)?;
        let types = [dst.value_type(), left.value_type(), right.value_type()];

        let mismatch = || MusoError::TypeMismatch {
            opcode: Opcode::Add,
            found: types.to_vec(),
        };
        if types[0] != types[1] || types[0] != types[2] {
            return Err(mismatch());
        }

        let sum = match (left, right) {
            (Value::Number(l), Value::Number(r)) => Value::Number(l + r),
            (Value::String(l), Value::String(r)) => Value::String(l + &r),
            _ => return Err(mismatch()),
        };
        self.symbols.get_mut(&instruction.operands[0])?.value = sum;
        Ok(())
    }

    /// SUB and MULT: all three operands must be numbers
    fn arithmetic<F>(&mut self, instruction: &Instruction, op: F) -> MusoResult<()>
    where
        F: Fn(f64, f64) -> f64,
    {
        let (left, right) = self.numeric_operands(instruction)?;
        self.symbols.get_mut(&instruction.operands[0])?.value = Value::Number(op(left, right));
        Ok(())
    }

    /// The zero guard compares the right operand's identity, not its stored value
    fn divide(&mut self, instruction: &Instruction) -> MusoResult<()> {
        let (left, right) = self.numeric_operands(instruction)?;
        if instruction.operands[2].value == 0.0 {
            return Err(MusoError::DivideByZero);
        }
        self.symbols.get_mut(&instruction.operands[0])?.value = Value::Number(left / right);
        Ok(())
    }

    /// Number becomes its text; text becomes the number it spells
    fn cycle_type(&mut self, instruction: &Instruction) -> MusoResult<()> {
        let variable = self.symbols.get_mut(&instruction.operands[0])?;
        let cycled = match &variable.value {
            Value::Number(n) => Value::String(n.to_string()),
            Value::String(text) => match text.trim().parse::<f64>() {
                Ok(n) => Value::Number(n),
                Err(_) => return Err(MusoError::UnparsableConversion(text.clone())),
            },
            Value::Function(_) => {
                return Err(MusoError::TypeMismatch {
                    opcode: Opcode::CycleType,
                    found: vec![ValueType::Function],
                })
            }
        };
        variable.value = cycled;
        Ok(())
    }

    fn input(&mut self, instruction: &Instruction) -> MusoResult<()> {
        let found = self.symbols.get(&instruction.operands[0])?.value_type();
        if found != ValueType::String {
            return Err(MusoError::TypeMismatch {
                opcode: Opcode::Input,
                found: vec![found],
            });
        }
        let line = self.host.read_line()?;
        self.symbols.get_mut(&instruction.operands[0])?.value = Value::String(line);
        Ok(())
    }

    /// Current values of the three operands of a binary operation
    fn operand_values(&self, instruction: &Instruction) -> MusoResult<[Value; 3]> {
        let ops = &instruction.operands;
        Ok([
            self.symbols.get(&ops[0])?.value.clone(),
            self.symbols.get(&ops[1])?.value.clone(),
            self.symbols.get(&ops[2])?.value.clone(),
        ])
    }

    /// Left and right numbers of a binary operation whose destination is a number
    fn numeric_operands(&self, instruction: &Instruction) -> MusoResult<(f64, f64)> {
        let values = self.operand_values(instruction)?;
        match &values {
            [Value::Number(_), Value::Number(l), Value::Number(r)] => Ok((*l, *r)),
            _ => Err(MusoError::TypeMismatch {
                opcode: instruction.opcode,
                found: values.iter().map(Value::value_type).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::FrequencyToken;
    use crate::vm::host::BufferHost;

    // Function values cannot be produced by a program yet, so they are
    // planted directly in the symbol table.
    fn engine_with_function(name: f64) -> Engine<BufferHost> {
        let mut engine = Engine::new(BufferHost::with_input(["line"]));
        engine
            .symbols
            .declare(FrequencyToken::bare(name), Value::Function(Vec::new()))
            .expect("declare failed");
        engine
    }

    fn instruction(opcode: Opcode, operands: &[f64]) -> Instruction {
        Instruction::with_operands(
            opcode,
            operands.iter().map(|&v| FrequencyToken::bare(v)).collect(),
        )
    }

    fn assert_function_mismatch(res: MusoResult<()>, expected: Opcode) {
        match res {
            Err(MusoError::TypeMismatch { opcode, found }) => {
                assert_eq!(opcode, expected);
                assert!(found.contains(&ValueType::Function));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn functions_cannot_be_printed() {
        let mut engine = engine_with_function(5.0);
        let res = engine.step(&instruction(Opcode::Print, &[5.0]));
        assert_function_mismatch(res, Opcode::Print);
        assert!(engine.host().output().is_empty());
    }

    #[test]
    fn functions_cannot_cycle_type() {
        let mut engine = engine_with_function(5.0);
        let res = engine.step(&instruction(Opcode::CycleType, &[5.0]));
        assert_function_mismatch(res, Opcode::CycleType);
        assert_eq!(
            engine.symbols().value_of(5.0),
            Some(&Value::Function(Vec::new()))
        );
    }

    #[test]
    fn functions_cannot_be_added_or_read_into() {
        let mut engine = engine_with_function(5.0);
        let res = engine.step(&instruction(Opcode::Add, &[5.0, 5.0, 5.0]));
        assert_function_mismatch(res, Opcode::Add);

        let res = engine.step(&instruction(Opcode::Input, &[5.0]));
        assert_function_mismatch(res, Opcode::Input);
        assert_eq!(engine.executed(), 0);
    }
}
