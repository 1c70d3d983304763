use super::*;

fn pull_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let byte = registers.stack_pull(memory)?;
    registers.set_accumulator(accumulator, byte);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[{}=0x{:02x}][SP=0x{:04x}]",
            accumulator, byte, registers.stack_pointer
        ),
    ))
}

/// # PULA - Pull accumulator A
pub fn pula(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    pull_accumulator(memory, registers, cpu_instruction, Accumulator::A)
}

/// # PULB - Pull accumulator B
pub fn pulb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    pull_accumulator(memory, registers, cpu_instruction, Accumulator::B)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_pula() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x32, "PULA", AddressingMode::Implied, pula);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x32]);
        memory.deposit(0x01ff, &[0x80]).unwrap();
        registers.stack_pointer = 0x01fe;
        let status = registers.get_status_register();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("PULA".to_owned(), log_line.mnemonic);
        assert_eq!(0x80, registers.accumulator_a);
        assert_eq!(0x01ff, registers.stack_pointer);
        assert_eq!(status, registers.get_status_register());
        assert_eq!(
            "#0x1000: (32)          PULA                      [A=0x80][SP=0x01ff]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_pulb_wraps() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x33, "PULB", AddressingMode::Implied, pulb);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x33]);
        memory.deposit(0x0000, &[0x42]).unwrap();
        registers.stack_pointer = 0xffff;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x42, registers.accumulator_b);
        assert_eq!(0x0000, registers.stack_pointer);
    }
}
