use super::*;

fn compare_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let byte = memory.byte(target_address)?;
    let minuend = registers.accumulator(accumulator);
    sub_with_flags(registers, minuend, byte, false, true);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "(0x{:02x}){}",
            byte,
            format_accumulator(registers, accumulator)
        ),
    ))
}

/// # CMPA - Compare accumulator A with memory
///
/// Flags are set as SUBA would set them, the accumulator is left untouched.
pub fn cmpa(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    compare_accumulator(memory, registers, cpu_instruction, Accumulator::A)
}

/// # CMPB - Compare accumulator B with memory
pub fn cmpb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    compare_accumulator(memory, registers, cpu_instruction, Accumulator::B)
}

/// # CBA - Compare accumulators
pub fn cba(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let (a, b) = (registers.accumulator_a, registers.accumulator_b);
    sub_with_flags(registers, a, b, false, true);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[S={}]", registers.format_status()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_cmpa_greater() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x81, "CMPA", AddressingMode::Immediate, cmpa);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x81, 0x0a]);
        registers.accumulator_a = 0x28;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("CMPA".to_owned(), log_line.mnemonic);
        assert_eq!(0x28, registers.accumulator_a);
        assert!(!registers.c_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());
        assert_eq!(0x1002, registers.command_pointer);
    }

    #[test]
    fn test_cmpa_equal() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0xa1, "CMPAx", AddressingMode::Indexed, cmpa);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xa1, 0x00]);
        memory.deposit(0x2000, &[0x0a]).unwrap();
        registers.register_x = 0x2000;
        registers.accumulator_a = 0x0a;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(registers.z_flag_is_set());
        assert!(!registers.c_flag_is_set());
        assert!(!registers.n_flag_is_set());
    }

    #[test]
    fn test_cmpa_less() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x91, "CMPAz", AddressingMode::Direct, cmpa);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x91, 0x20]);
        memory.deposit(0x20, &[0x0a]).unwrap();
        registers.accumulator_a = 0x01;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(registers.c_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert!(registers.n_flag_is_set());
        assert_eq!(0x01, registers.accumulator_a);
    }

    #[test]
    fn test_cmpb() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0xc1, "CMPB", AddressingMode::Immediate, cmpb);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xc1, 0x80]);
        registers.accumulator_b = 0x7f;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(registers.c_flag_is_set());
        assert!(registers.v_flag_is_set());
        assert!(registers.n_flag_is_set());
    }

    #[test]
    fn test_cba() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x11, "CBA", AddressingMode::Implied, cba);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x11]);
        registers.accumulator_a = 0x42;
        registers.accumulator_b = 0x42;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(registers.z_flag_is_set());
        assert_eq!(0x42, registers.accumulator_a);
        assert_eq!(0x1001, registers.command_pointer);
    }
}
