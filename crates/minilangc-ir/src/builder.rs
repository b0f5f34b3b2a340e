use crate::instruction::Instruction;
use crate::operand::Operand;

/// Accumulates instructions and hands out fresh temporaries and labels.
/// Mirrors the counter-plus-emit discipline of a three-address-code
/// builder: state lives entirely in two monotonic counters and an
/// append-only instruction buffer, both reset by `IrBuilder::new`.
#[derive(Debug, Default)]
pub struct IrBuilder {
    instructions: Vec<Instruction>,
    temp_counter: u32,
    label_counter: u32,
}

impl IrBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_temp(&mut self) -> Operand {
        let temp = Operand::Temp(self.temp_counter);
        self.temp_counter += 1;
        temp
    }

    pub fn new_label(&mut self) -> Operand {
        let label = Operand::Label(self.label_counter);
        self.label_counter += 1;
        label
    }

    pub fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn finish(self) -> Vec<Instruction> {
        self.instructions
    }
}
