use super::*;

/// # ORAA - Inclusive OR on accumulator A
pub fn oraa(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let byte = memory.byte(target_address)?;
    registers.accumulator_a |= byte;
    let result = registers.accumulator_a;
    set_logic_flags(registers, result);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "(0x{:02x}){}",
            byte,
            format_accumulator(registers, Accumulator::A)
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_oraa() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x8a, "ORAA", AddressingMode::Immediate, oraa);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x8a, 0x81]);
        registers.accumulator_a = 0x18;
        registers.set_v_flag(true);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("ORAA".to_owned(), log_line.mnemonic);
        assert_eq!(0x99, registers.accumulator_a);
        assert!(registers.n_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert!(!registers.v_flag_is_set());
        assert_eq!(0x1002, registers.command_pointer);
    }

    #[test]
    fn test_oraa_zero() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x8a, "ORAA", AddressingMode::Immediate, oraa);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x8a, 0x00]);
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x00, registers.accumulator_a);
        assert!(registers.z_flag_is_set());
    }
}
