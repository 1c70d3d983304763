use super::addressing_mode::AddressingMode;
use super::cpu_instruction::microcode::{MicrocodeError, Result};
use super::cpu_instruction::{CPUInstruction, LogLine};
use super::memory::{AddressableIO, MemoryAccess};
use super::opcode_table::opcode_table;
use super::registers::Registers;
use log::{trace, warn};

/// Decode the opcode found at `address`.
pub fn resolve_opcode(address: usize, opcode: u8) -> Result<CPUInstruction> {
    match opcode_table()?.get(opcode) {
        Some(definition) => Ok(definition.instantiate(address)),
        None => Err(MicrocodeError::InvalidOpcode(opcode, address)),
    }
}

/*
 * execute_step
 * Fetch the opcode at the command pointer, decode it and run it. An illegal
 * opcode is reported before anything is changed.
 */
pub fn execute_step(registers: &mut Registers, memory: &mut dyn AddressableIO) -> Result<LogLine> {
    let address = registers.command_pointer as usize;
    let opcode = memory.byte(address)?;
    let cpu_instruction = match resolve_opcode(address, opcode) {
        Ok(v) => v,
        Err(e) => {
            warn!("{}", e);
            return Err(e);
        }
    };

    let snapshot = registers.command_pointer;
    registers.command_pointer = registers.command_pointer.wrapping_add(1);
    match cpu_instruction.execute(memory, registers) {
        Ok(log_line) => {
            trace!("{}", log_line);
            Ok(log_line)
        }
        Err(e) => {
            registers.command_pointer = snapshot;
            Err(e)
        }
    }
}

/// Decode `len` instructions from `address` without executing them. The
/// operand bytes are read from the memory, nothing is written.
pub fn disassemble(memory: &dyn AddressableIO, address: usize, len: usize) -> Result<Vec<String>> {
    let mut output: Vec<String> = Vec::new();
    let mut registers = Registers::new(address as u16);

    for _ in 0..len {
        let cp = registers.command_pointer as usize;
        let opcode = memory.byte(cp)?;
        registers.command_pointer = registers.command_pointer.wrapping_add(1);
        let line = match resolve_opcode(cp, opcode) {
            Ok(cpu_instruction) => {
                let mut resolution = cpu_instruction
                    .addressing_mode
                    .solve(&mut registers, memory)?;
                // X is unknown out of execution
                if cpu_instruction.addressing_mode == AddressingMode::Indexed {
                    resolution.target_address = None;
                }
                LogLine::new(&cpu_instruction, resolution, String::new()).to_string()
            }
            Err(MicrocodeError::InvalidOpcode(_, _)) => {
                format!("#0x{:04X}: ({:02x})          ???", cp, opcode)
            }
            Err(e) => return Err(e),
        };
        output.push(line.trim_end().to_owned());
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStack as Memory;
    use crate::opcode_table::instructions::*;

    #[test]
    fn test_resolve_opcode() {
        let instruction = resolve_opcode(0x1000, DEX).unwrap();
        assert_eq!("DEX", instruction.mnemonic);
        assert_eq!(AddressingMode::Implied, instruction.addressing_mode);
        let instruction = resolve_opcode(0x1000, CLRx).unwrap();
        assert_eq!("CLRx", instruction.mnemonic);
        assert_eq!("CLR", instruction.assembly_mnemonic());
        assert_eq!(AddressingMode::Indexed, instruction.addressing_mode);
    }

    #[test]
    fn test_resolve_invalid_opcode() {
        match resolve_opcode(0x1000, 0xff) {
            Err(MicrocodeError::InvalidOpcode(0xff, 0x1000)) => {}
            Err(e) => panic!("unexpected error {}", e),
            Ok(i) => panic!("0xff should not decode, got {}", i),
        }
    }

    #[test]
    fn test_execute_step_dex() {
        let mut memory = Memory::new_with_ram();
        memory.deposit(0x1000, &[DEX]).unwrap();
        let mut registers = Registers::new(0x1000);
        registers.register_x = 0x10;

        let log_line = execute_step(&mut registers, &mut memory).unwrap();
        assert_eq!(0x0f, registers.register_x);
        assert_eq!(0x1001, registers.command_pointer);
        assert_eq!(0x1000, log_line.address);
        assert_eq!("DEX".to_owned(), log_line.mnemonic);
    }

    #[test]
    fn test_execute_step_invalid_opcode() {
        let mut memory = Memory::new_with_ram();
        memory.deposit(0x1000, &[0xff]).unwrap();
        let mut registers = Registers::new(0x1000);
        registers.accumulator_a = 0x42;
        let before = registers.clone();

        match execute_step(&mut registers, &mut memory) {
            Err(MicrocodeError::InvalidOpcode(0xff, 0x1000)) => {}
            v => panic!("expected an invalid opcode error, got {:?}", v.map(|l| l.to_string())),
        }
        assert_eq!(before, registers);
    }

    #[test]
    fn test_execute_step_memory_error_keeps_command_pointer() {
        let mut memory = Memory::new_with_ram();
        memory.add_subsystem("ROM", 0x0000, crate::memory::ROM::new(vec![0x00; 0x100]));
        memory.deposit(0x1000, &[CLRm, 0x00, 0x10]).unwrap();
        let mut registers = Registers::new(0x1000);
        registers.set_c_flag(true);
        let before = registers.clone();

        match execute_step(&mut registers, &mut memory) {
            Err(MicrocodeError::Memory(_)) => {}
            v => panic!("expected a memory error, got {:?}", v.map(|l| l.to_string())),
        }
        assert_eq!(before, registers);
    }

    #[test]
    fn test_disassemble() {
        let mut memory = Memory::new_with_ram();
        memory
            .deposit(0x1000, &[LDAA, 0x0a, STAAm, 0x20, 0x00, 0xff, BRA, 0xfe])
            .unwrap();
        let output = disassemble(&memory, 0x1000, 4).unwrap();
        assert_eq!(
            vec![
                "#0x1000: (86 0a)       LDAA  #$0a     (#0x1001)",
                "#0x1002: (b7 20 00)    STAA  $2000    (#0x2000)",
                "#0x1005: (ff)          ???",
                "#0x1006: (20 fe)       BRA   $1006",
            ],
            output
        );
    }
}
