mod addressing_mode;
mod config;
mod cpu_instruction;
mod executor;
pub mod memory;
mod opcode_table;
mod processing_unit;
mod registers;
mod symbols;

pub use addressing_mode::{AddressingMode, AddressingModeResolution};
pub use config::ExecutorConfig;
pub use cpu_instruction::microcode::MicrocodeError;
pub use cpu_instruction::{CPUInstruction, LogLine, Microcode};
pub use executor::{ExecutionError, Executor, RunOutcome, StopReason, CALL_SENTINEL};
pub use memory::MemoryStack as Memory;
pub use memory::{AddressableIO, MemoryAccess, MemoryError, RAM, ROM};
pub use opcode_table::{
    instructions, opcode_table, OpcodeDefinition, OpcodeTable, OpcodeTableError, OPCODE_LIST,
};
pub use processing_unit::*;
pub use registers::{Accumulator, Registers};
pub use symbols::{MergeStyle, Symbol, SymbolError, SymbolTable};
