use super::*;

fn and_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
    keep_result: bool,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let byte = memory.byte(target_address)?;
    let result = registers.accumulator(accumulator) & byte;

    if keep_result {
        registers.set_accumulator(accumulator, result);
    }
    set_logic_flags(registers, result);

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

/// # ANDA - Logical AND on accumulator A
pub fn anda(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    and_accumulator(memory, registers, cpu_instruction, Accumulator::A, true)
}

/// # ANDB - Logical AND on accumulator B
pub fn andb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    and_accumulator(memory, registers, cpu_instruction, Accumulator::B, true)
}

/// # BITA - Bit test accumulator A
///
/// Sets the flags as ANDA does but drops the result.
pub fn bita(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    and_accumulator(memory, registers, cpu_instruction, Accumulator::A, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_anda() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x84, "ANDA", AddressingMode::Immediate, anda);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x84, 0xf0]);
        registers.accumulator_a = 0x9c;
        registers.set_v_flag(true);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("ANDA".to_owned(), log_line.mnemonic);
        assert_eq!(0x90, registers.accumulator_a);
        assert!(registers.n_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert!(!registers.v_flag_is_set());
        assert_eq!(0x1002, registers.command_pointer);
    }

    #[test]
    fn test_anda_extended_zero() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0xb4, "ANDAm", AddressingMode::Extended, anda);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xb4, 0x20, 0x00]);
        memory.deposit(0x2000, &[0x0f]).unwrap();
        registers.accumulator_a = 0xf0;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x00, registers.accumulator_a);
        assert!(registers.z_flag_is_set());
        assert_eq!(0x1003, registers.command_pointer);
    }

    #[test]
    fn test_andb() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0xc4, "ANDB", AddressingMode::Immediate, andb);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xc4, 0x0f]);
        registers.accumulator_a = 0xff;
        registers.accumulator_b = 0x3c;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x0c, registers.accumulator_b);
        assert_eq!(0xff, registers.accumulator_a);
    }

    #[test]
    fn test_bita_keeps_accumulator() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x85, "BITA", AddressingMode::Immediate, bita);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x85, 0x01]);
        registers.accumulator_a = 0xfe;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0xfe, registers.accumulator_a);
        assert!(registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());
    }
}
