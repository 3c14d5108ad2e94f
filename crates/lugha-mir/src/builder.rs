use lugha_util::Symbol;

use crate::ir::{Instr, IrProgram, Label};

/// Accumulates instructions and hands out fresh temporary names and
/// labels as lowering walks the AST.
pub struct Builder {
    program: IrProgram,
    temp_counter: u32,
    label_counter: u32,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            program: IrProgram::default(),
            temp_counter: 0,
            label_counter: 0,
        }
    }

    /// Allocates a fresh temporary, e.g. `t1`, `t2`, ...
    pub fn new_temp(&mut self) -> Symbol {
        self.temp_counter += 1;
        Symbol::intern(&format!("t{}", self.temp_counter))
    }

    /// Allocates a fresh label, e.g. `L1`, `L2`, ...
    pub fn new_label(&mut self) -> Label {
        self.label_counter += 1;
        Label(self.label_counter)
    }

    pub fn push(&mut self, instr: Instr) {
        self.program.instructions.push(instr);
    }

    pub fn build(self) -> IrProgram {
        self.program
    }
}
