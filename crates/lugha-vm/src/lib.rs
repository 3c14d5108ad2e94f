//! The stack-based virtual machine: executes the flat instruction
//! stream produced by the target generator and yields the sequence of
//! printed values.

mod error;
mod value;
mod vm;

pub use error::RuntimeError;
pub use value::Value;
pub use vm::VirtualMachine;
