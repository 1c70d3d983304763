use super::*;

fn decrement_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let result = registers.accumulator(accumulator).wrapping_sub(1);
    registers.set_accumulator(accumulator, result);
    registers.set_n_flag(result & 0x80 != 0);
    registers.set_z_flag(result == 0);
    registers.set_v_flag(result == 0x7f);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, accumulator),
    ))
}

/// # DECA - Decrement accumulator A
///
/// V is set only when 0x80 becomes 0x7F, C is not affected.
pub fn deca(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    decrement_accumulator(memory, registers, cpu_instruction, Accumulator::A)
}

/// # DECB - Decrement accumulator B
pub fn decb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    decrement_accumulator(memory, registers, cpu_instruction, Accumulator::B)
}

/// # DEX - Decrement index register
///
/// Only Z is affected.
pub fn dex(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    registers.register_x = registers.register_x.wrapping_sub(1);
    registers.set_z_flag(registers.register_x == 0);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[X=0x{:04x}][S={}]",
            registers.register_x,
            registers.format_status()
        ),
    ))
}

/// # DES - Decrement stack pointer
pub fn des(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    registers.stack_pointer = registers.stack_pointer.wrapping_sub(1);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[SP=0x{:04x}]", registers.stack_pointer),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_deca() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x4a, "DECA", AddressingMode::Implied, deca);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x4a]);
        registers.accumulator_a = 0x80;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("DECA".to_owned(), log_line.mnemonic);
        assert_eq!(0x7f, registers.accumulator_a);
        assert!(!registers.n_flag_is_set());
        assert!(registers.v_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert_eq!(0x1001, registers.command_pointer);
    }

    #[test]
    fn test_deca_to_zero() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x4a, "DECA", AddressingMode::Implied, deca);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x4a]);
        registers.accumulator_a = 0x01;
        registers.set_v_flag(true);
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x00, registers.accumulator_a);
        assert!(registers.z_flag_is_set());
        assert!(!registers.v_flag_is_set());
    }

    #[test]
    fn test_decb_wraps() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x5a, "DECB", AddressingMode::Implied, decb);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x5a]);
        registers.accumulator_b = 0x00;
        registers.set_c_flag(true);
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0xff, registers.accumulator_b);
        assert!(registers.n_flag_is_set());
        assert!(!registers.v_flag_is_set());
        assert!(registers.c_flag_is_set());
    }

    #[test]
    fn test_dex() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x09, "DEX", AddressingMode::Implied, dex);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x09]);
        registers.register_x = 0x0001;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x0000, registers.register_x);
        assert!(registers.z_flag_is_set());

        registers.command_pointer = 0x1001;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0xffff, registers.register_x);
        assert!(!registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());
    }

    #[test]
    fn test_des() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x34, "DES", AddressingMode::Implied, des);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x34]);
        registers.stack_pointer = 0x0000;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0xffff, registers.stack_pointer);
        assert_eq!("hinzvc", registers.format_status());
    }
}
