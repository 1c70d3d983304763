use super::*;

fn test_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let value = registers.accumulator(accumulator);
    set_logic_flags(registers, value);
    registers.set_c_flag(false);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, accumulator),
    ))
}

/// # TSTA - Test accumulator A
pub fn tsta(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    test_accumulator(memory, registers, cpu_instruction, Accumulator::A)
}

/// # TSTB - Test accumulator B
pub fn tstb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    test_accumulator(memory, registers, cpu_instruction, Accumulator::B)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_tsta() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x4d, "TSTA", AddressingMode::Implied, tsta);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x4d]);
        registers.accumulator_a = 0x80;
        registers.set_v_flag(true);
        registers.set_c_flag(true);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("TSTA".to_owned(), log_line.mnemonic);
        assert_eq!(0x80, registers.accumulator_a);
        assert_eq!("hiNzvc", registers.format_status());
        assert_eq!(0x1001, registers.command_pointer);
    }

    #[test]
    fn test_tstb_zero() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x5d, "TSTB", AddressingMode::Implied, tstb);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x5d]);
        registers.accumulator_a = 0x80;
        registers.accumulator_b = 0x00;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("hinZvc", registers.format_status());
    }
}
