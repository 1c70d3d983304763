use super::microcode::Result as MicrocodeResult;
use crate::addressing_mode::*;
use crate::memory::AddressableIO;
use crate::registers::Registers;
use std::fmt;

pub type Microcode =
    fn(&mut dyn AddressableIO, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>;

pub struct CPUInstruction {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub addressing_mode: AddressingMode,
    pub microcode: Microcode,
}

impl CPUInstruction {
    pub fn new(
        address: usize,
        opcode: u8,
        mnemonic: &'static str,
        addressing_mode: AddressingMode,
        microcode: Microcode,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic,
            addressing_mode,
            microcode,
        }
    }

    /*
     * The command pointer must point right after the opcode byte. When the
     * microcode fails the registers are left as they were before the call.
     */
    pub fn execute(
        &self,
        memory: &mut dyn AddressableIO,
        registers: &mut Registers,
    ) -> MicrocodeResult<LogLine> {
        let snapshot = registers.clone();

        match (self.microcode)(memory, registers, self) {
            Ok(log_line) => Ok(log_line),
            Err(e) => {
                *registers = snapshot;
                Err(e)
            }
        }
    }

    /// The assembly mnemonic, without the addressing mode suffix of the
    /// opcode constant (`LDAAz` → `LDAA`).
    pub fn assembly_mnemonic(&self) -> &'static str {
        self.mnemonic
            .trim_end_matches(|c: char| c.is_ascii_lowercase())
    }
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#0x{:04X}: ({:02x})  {: <5} {}",
            self.address,
            self.opcode,
            self.assembly_mnemonic(),
            self.addressing_mode
        )
    }
}

#[derive(Debug)]
pub struct LogLine {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub resolution: AddressingModeResolution,
    pub outcome: String,
}

impl LogLine {
    pub fn new(
        cpu_instruction: &CPUInstruction,
        resolution: AddressingModeResolution,
        outcome: String,
    ) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            mnemonic: cpu_instruction.assembly_mnemonic().to_owned(),
            resolution,
            outcome,
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = vec![self.opcode];
        for i in self.resolution.operands.iter() {
            bytes.push(*i);
        }
        let byte_sequence = format!(
            "({})",
            bytes
                .iter()
                .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
                .trim()
        );

        write!(
            f,
            "#0x{:04X}: {: <14}{: <5} {: <15}  {}",
            self.address, byte_sequence, self.mnemonic, self.resolution, self.outcome
        )
    }
}
