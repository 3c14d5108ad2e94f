use rustc_hash::FxHashMap;

use lugha_lir::{Instr, Label, PushOperand, TargetProgram};
use lugha_util::Symbol;

use crate::error::RuntimeError;
use crate::value::Value;

/// A register-less stack machine. Memory is a single flat map shared
/// by every call frame - parameters and locals of different, even
/// recursive, invocations of the same function all write through the
/// same slots. This reproduces the source interpreter's behavior
/// bug-for-bug rather than introducing per-call frames.
pub struct VirtualMachine<'a> {
    instructions: &'a [Instr],
    labels: FxHashMap<Label, usize>,
    functions: FxHashMap<Symbol, usize>,
    memory: FxHashMap<Symbol, Value>,
    stack: Vec<Value>,
    call_stack: Vec<usize>,
    output: Vec<Value>,
}

impl<'a> VirtualMachine<'a> {
    pub fn new(program: &'a TargetProgram) -> Self {
        let labels = build_label_table(&program.instructions);
        Self {
            instructions: &program.instructions,
            labels,
            functions: FxHashMap::default(),
            memory: FxHashMap::default(),
            stack: Vec::new(),
            call_stack: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Runs the full instruction stream to completion and returns the
    /// values produced by every `PRINT`, in order.
    pub fn run(mut self) -> Result<Vec<Value>, RuntimeError> {
        tracing::debug!(instructions = self.instructions.len(), "executing program");
        let mut pc = 0usize;
        while pc < self.instructions.len() {
            let mut jumped = false;
            match &self.instructions[pc] {
                Instr::Push(operand) => {
                    let value = self.resolve(operand)?;
                    self.stack.push(value);
                }
                Instr::Store(name) => {
                    let value = self.pop("STORE")?;
                    self.memory.insert(*name, value);
                }
                Instr::Add => self.binary_numeric("ADD", |a, b| a + b)?,
                Instr::Sub => self.binary_numeric("SUB", |a, b| a - b)?,
                Instr::Mul => self.binary_numeric("MUL", |a, b| a * b)?,
                Instr::Div => {
                    let right = self.pop("DIV")?;
                    let left = self.pop("DIV")?;
                    let r = right.as_number().ok_or(RuntimeError::NotANumber("DIV"))?;
                    let l = left.as_number().ok_or(RuntimeError::NotANumber("DIV"))?;
                    if r == 0.0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    self.stack.push(Value::Number(l / r));
                }
                Instr::CompareGt => self.compare_numeric("COMPARE_GT", |a, b| a > b)?,
                Instr::CompareLt => self.compare_numeric("COMPARE_LT", |a, b| a < b)?,
                Instr::CompareGte => self.compare_numeric("COMPARE_GTE", |a, b| a >= b)?,
                Instr::CompareLte => self.compare_numeric("COMPARE_LTE", |a, b| a <= b)?,
                Instr::CompareEq => {
                    let right = self.pop("COMPARE_EQ")?;
                    let left = self.pop("COMPARE_EQ")?;
                    self.stack.push(bool_value(left == right));
                }
                Instr::CompareNe => {
                    let right = self.pop("COMPARE_NE")?;
                    let left = self.pop("COMPARE_NE")?;
                    self.stack.push(bool_value(left != right));
                }
                Instr::LogicalAnd => {
                    let right = self.pop("LOGICAL_AND")?;
                    let left = self.pop("LOGICAL_AND")?;
                    self.stack
                        .push(bool_value(left.is_truthy() && right.is_truthy()));
                }
                Instr::LogicalOr => {
                    let right = self.pop("LOGICAL_OR")?;
                    let left = self.pop("LOGICAL_OR")?;
                    self.stack
                        .push(bool_value(left.is_truthy() || right.is_truthy()));
                }
                Instr::Print => {
                    let value = self.pop("PRINT")?;
                    tracing::trace!(%value, "print");
                    self.output.push(value);
                }
                Instr::Jump(label) => {
                    pc = self.label_target(*label)?;
                    jumped = true;
                }
                Instr::JumpIfTrue(label) => {
                    let value = self.pop("JUMP_IF_TRUE")?;
                    if value.is_truthy() {
                        pc = self.label_target(*label)?;
                        jumped = true;
                    }
                }
                Instr::JumpIfFalse(label) => {
                    let value = self.pop("JUMP_IF_FALSE")?;
                    if !value.is_truthy() {
                        pc = self.label_target(*label)?;
                        jumped = true;
                    }
                }
                Instr::Label(_) => {}
                Instr::FuncDefine(name) => {
                    self.functions.insert(*name, pc + 1);
                    let end = find_func_end(self.instructions, pc + 1)
                        .ok_or(RuntimeError::MissingFuncEnd(*name))?;
                    pc = end;
                    jumped = true;
                }
                Instr::Param(name) => {
                    if self.stack.is_empty() {
                        return Err(RuntimeError::StackUnderflow("PARAM"));
                    }
                    let value = self.stack.remove(0);
                    self.memory.insert(*name, value);
                }
                Instr::FuncStart => {}
                Instr::Call(name) => {
                    let entry = *self
                        .functions
                        .get(name)
                        .ok_or(RuntimeError::UnknownFunction(*name))?;
                    self.call_stack.push(pc + 1);
                    pc = entry;
                    jumped = true;
                }
                Instr::Return | Instr::FuncEnd => {
                    if let Some(return_pc) = self.call_stack.pop() {
                        pc = return_pc;
                        jumped = true;
                    }
                }
            }
            if !jumped {
                pc += 1;
            }
        }
        tracing::debug!(printed = self.output.len(), "execution complete");
        Ok(self.output)
    }

    fn resolve(&self, operand: &PushOperand) -> Result<Value, RuntimeError> {
        match operand {
            PushOperand::Number(n) => Ok(Value::Number(*n)),
            PushOperand::Str(s) => Ok(Value::Str(strip_quotes(s.as_str()))),
            PushOperand::Name(name) => self
                .memory
                .get(name)
                .cloned()
                .ok_or(RuntimeError::UndefinedIdentifier(*name)),
        }
    }

    fn pop(&mut self, context: &'static str) -> Result<Value, RuntimeError> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow(context))
    }

    fn binary_numeric(
        &mut self,
        context: &'static str,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<(), RuntimeError> {
        let right = self.pop(context)?;
        let left = self.pop(context)?;
        let r = right.as_number().ok_or(RuntimeError::NotANumber(context))?;
        let l = left.as_number().ok_or(RuntimeError::NotANumber(context))?;
        self.stack.push(Value::Number(op(l, r)));
        Ok(())
    }

    fn compare_numeric(
        &mut self,
        context: &'static str,
        op: impl Fn(f64, f64) -> bool,
    ) -> Result<(), RuntimeError> {
        let right = self.pop(context)?;
        let left = self.pop(context)?;
        let r = right.as_number().ok_or(RuntimeError::NotANumber(context))?;
        let l = left.as_number().ok_or(RuntimeError::NotANumber(context))?;
        self.stack.push(bool_value(op(l, r)));
        Ok(())
    }

    fn label_target(&self, label: Label) -> Result<usize, RuntimeError> {
        self.labels.get(&label).copied().ok_or(RuntimeError::UnknownLabel(label))
    }
}

fn bool_value(b: bool) -> Value {
    Value::Number(if b { 1.0 } else { 0.0 })
}

fn strip_quotes(lexeme: &str) -> String {
    lexeme
        .trim_matches(|c| c == '"')
        .to_string()
}

fn build_label_table(instructions: &[Instr]) -> FxHashMap<Label, usize> {
    let mut table = FxHashMap::default();
    for (index, instr) in instructions.iter().enumerate() {
        if let Instr::Label(label) = instr {
            table.insert(*label, index);
        }
    }
    table
}

fn find_func_end(instructions: &[Instr], from: usize) -> Option<usize> {
    instructions[from..]
        .iter()
        .position(|i| matches!(i, Instr::FuncEnd))
        .map(|offset| from + offset)
}
