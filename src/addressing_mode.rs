use super::memory::{big_endian, AddressableIO, MemoryError};
use super::registers::Registers;
use std::fmt;

pub type Result<T> = std::result::Result<T, MemoryError>;

#[derive(Debug)]
pub struct AddressingModeResolution {
    pub operands: Vec<u8>,
    pub addressing_mode: AddressingMode,
    pub target_address: Option<usize>,
}

impl AddressingModeResolution {
    fn new(
        operands: Vec<u8>,
        addressing_mode: AddressingMode,
        target_address: Option<usize>,
    ) -> Self {
        AddressingModeResolution {
            operands,
            addressing_mode,
            target_address,
        }
    }

    fn format_operands(&self) -> String {
        match self.addressing_mode {
            AddressingMode::Implied => String::new(),
            AddressingMode::Immediate => format!("#${:02x}", self.operands[0]),
            AddressingMode::ImmediateWord => format!("#${:04X}", big_endian(&self.operands)),
            AddressingMode::Direct => format!("${:02x}", self.operands[0]),
            AddressingMode::Extended => format!("${:04X}", big_endian(&self.operands)),
            AddressingMode::Indexed => format!("${:02x},X", self.operands[0]),
            AddressingMode::Relative => format!("${:04X}", self.target_address.unwrap_or(0)),
        }
    }
}

impl fmt::Display for AddressingModeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.addressing_mode, self.target_address) {
            (AddressingMode::Relative, _) | (_, None) => {
                write!(f, "{: <9}         ", self.format_operands())
            }
            (_, Some(addr)) => write!(f, "{: <9}(#0x{:04X})", self.format_operands(), addr),
        }
    }
}

/*
 * AddressingMode
 * Each mode knows how many operand bytes follow the opcode and how to turn
 * them into an effective address.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AddressingMode {
    Implied,
    Immediate,
    ImmediateWord,
    Direct,
    Extended,
    Indexed,
    Relative,
}

impl AddressingMode {
    /*
     * solve
     * Consume the operand bytes at the command pointer (which points right
     * after the opcode) and compute the effective address. Immediate modes
     * target the operand bytes themselves.
     */
    pub fn solve<M: AddressableIO + ?Sized>(
        &self,
        registers: &mut Registers,
        memory: &M,
    ) -> Result<AddressingModeResolution> {
        let operand_address = registers.command_pointer as usize;

        match *self {
            AddressingMode::Implied => Ok(AddressingModeResolution::new(vec![], *self, None)),
            AddressingMode::Immediate => {
                let byte = registers.fetch_byte(memory)?;
                Ok(AddressingModeResolution::new(
                    vec![byte],
                    *self,
                    Some(operand_address),
                ))
            }
            AddressingMode::ImmediateWord => {
                let word = registers.fetch_word(memory)?;
                Ok(AddressingModeResolution::new(
                    word.to_be_bytes().to_vec(),
                    *self,
                    Some(operand_address),
                ))
            }
            AddressingMode::Direct => {
                let byte = registers.fetch_byte(memory)?;
                Ok(AddressingModeResolution::new(
                    vec![byte],
                    *self,
                    Some(byte as usize),
                ))
            }
            AddressingMode::Extended => {
                let word = registers.fetch_word(memory)?;
                Ok(AddressingModeResolution::new(
                    word.to_be_bytes().to_vec(),
                    *self,
                    Some(word as usize),
                ))
            }
            AddressingMode::Indexed => {
                let offset = registers.fetch_byte(memory)?;
                let dst_addr = registers.register_x.wrapping_add(offset as u16);
                Ok(AddressingModeResolution::new(
                    vec![offset],
                    *self,
                    Some(dst_addr as usize),
                ))
            }
            AddressingMode::Relative => {
                let offset = registers.fetch_byte(memory)?;
                let dst_addr = resolve_relative(registers.command_pointer, offset);
                Ok(AddressingModeResolution::new(
                    vec![offset],
                    *self,
                    Some(dst_addr as usize),
                ))
            }
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AddressingMode::Implied => write!(f, "implied"),
            AddressingMode::Immediate => write!(f, "immediate"),
            AddressingMode::ImmediateWord => write!(f, "immediate (16 bits)"),
            AddressingMode::Direct => write!(f, "direct"),
            AddressingMode::Extended => write!(f, "extended"),
            AddressingMode::Indexed => write!(f, "indexed"),
            AddressingMode::Relative => write!(f, "relative"),
        }
    }
}

/// Branch target: the address following the offset byte plus the signed
/// offset, wrapping at $FFFF.
pub fn resolve_relative(next_addr: u16, offset: u8) -> u16 {
    next_addr.wrapping_add(offset as i8 as u16)
}
