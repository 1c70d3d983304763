use super::*;

/*
 * The return address is the address of the next instruction. It is pushed
 * low byte first so the high byte ends at the lower address.
 */
fn call_subroutine(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let return_address = registers.command_pointer;

    registers.stack_push_word(memory, return_address)?;
    registers.command_pointer = target_address as u16;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[CP=0x{:04X}][SP=0x{:04x}]",
            registers.command_pointer, registers.stack_pointer
        ),
    ))
}

/// # JSR - Jump to subroutine
pub fn jsr(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    call_subroutine(memory, registers, cpu_instruction)
}

/// # BSR - Branch to subroutine
pub fn bsr(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    call_subroutine(memory, registers, cpu_instruction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_jsr() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0xbd, "JSR", AddressingMode::Extended, jsr);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xbd, 0x20, 0x0a]);
        registers.stack_pointer = 0x01ff;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("JSR".to_owned(), log_line.mnemonic);
        assert_eq!(0x200a, registers.command_pointer);
        assert_eq!(0x01fd, registers.stack_pointer);
        assert_eq!(vec![0x10, 0x03], memory.bytes(0x01fe, 2).unwrap());
    }

    #[test]
    fn test_jsr_indexed() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0xad, "JSRx", AddressingMode::Indexed, jsr);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xad, 0x04]);
        registers.stack_pointer = 0x01ff;
        registers.register_x = 0x3000;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x3004, registers.command_pointer);
        assert_eq!(0x1002, memory.word(0x01fe).unwrap());
    }

    #[test]
    fn test_bsr() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x8d, "BSR", AddressingMode::Relative, bsr);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x8d, 0x10]);
        registers.stack_pointer = 0x01ff;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x1012, registers.command_pointer);
        assert_eq!(0x01fd, registers.stack_pointer);
        assert_eq!(0x1002, memory.word(0x01fe).unwrap());
    }
}
