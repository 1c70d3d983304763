use crate::addressing_mode::AddressingMode;
use crate::memory;
use crate::opcode_table::OpcodeTableError;
use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum MicrocodeError {
    // ↓ when a memory access fails during the microcode operation
    Memory(memory::MemoryError),
    // ↓ opcode, address of the opcode byte
    InvalidOpcode(u8, usize),
    // ↓ the addressing mode gave no effective address to an instruction needing one
    Resolution(AddressingMode, usize),
    OpcodeTable(OpcodeTableError),
}

pub type Result<T> = std::result::Result<T, MicrocodeError>;

impl fmt::Display for MicrocodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MicrocodeError::Memory(e) => {
                write!(f, "memory error during microcode operation: {}", e)
            }
            MicrocodeError::InvalidOpcode(opcode, pc) => {
                write!(f, "invalid opcode=${:02X} pc=${:04X}", opcode, pc)
            }
            MicrocodeError::Resolution(addressing_mode, address) => write!(
                f,
                "{} addressing mode gives no target address for the instruction at #0x{:04X}",
                addressing_mode, address
            ),
            MicrocodeError::OpcodeTable(e) => write!(f, "opcode table is unusable: {}", e),
        }
    }
}

impl error::Error for MicrocodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MicrocodeError::Memory(e) => Some(e),
            MicrocodeError::OpcodeTable(e) => Some(e),
            _ => None,
        }
    }
}

impl std::convert::From<memory::MemoryError> for MicrocodeError {
    fn from(err: memory::MemoryError) -> MicrocodeError {
        MicrocodeError::Memory(err)
    }
}

impl std::convert::From<OpcodeTableError> for MicrocodeError {
    fn from(err: OpcodeTableError) -> MicrocodeError {
        MicrocodeError::OpcodeTable(err)
    }
}
