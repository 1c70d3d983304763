use super::*;

/// # CPX - Compare index register
///
/// The 6800 compares both bytes separately without propagating the borrow:
/// Z is set when both bytes are equal, N and V come from the high bytes
/// and C is not affected.
pub fn cpx(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let word = read_word(memory, target_address)?;
    let [x_high, x_low] = registers.register_x.to_be_bytes();
    let [m_high, m_low] = word.to_be_bytes();

    sub_with_flags(registers, x_low, m_low, false, false);
    let low_is_zero = registers.z_flag_is_set();
    sub_with_flags(registers, x_high, m_high, false, false);
    let high_is_zero = registers.z_flag_is_set();
    registers.set_z_flag(low_is_zero && high_is_zero);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "(0x{:04x})[X=0x{:04x}][S={}]",
            word,
            registers.register_x,
            registers.format_status()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_cpx_equal() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x8c, "CPX", AddressingMode::ImmediateWord, cpx);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x8c, 0x12, 0x34]);
        registers.register_x = 0x1234;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("CPX".to_owned(), log_line.mnemonic);
        assert!(registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());
        assert!(!registers.v_flag_is_set());
        assert_eq!(0x1234, registers.register_x);
        assert_eq!(0x1003, registers.command_pointer);
    }

    #[test]
    fn test_cpx_low_byte_differs() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0x9c, "CPXz", AddressingMode::Direct, cpx);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x9c, 0x40]);
        memory.deposit(0x40, &[0x12, 0x34]).unwrap();
        registers.register_x = 0x1200;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(!registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());
        assert!(!registers.v_flag_is_set());
        assert_eq!(0x1002, registers.command_pointer);
    }

    #[test]
    fn test_cpx_high_byte_gives_n_and_v() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0xbc, "CPXm", AddressingMode::Extended, cpx);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xbc, 0x20, 0x00]);
        memory.deposit(0x2000, &[0x80, 0x00]).unwrap();
        registers.register_x = 0x7fff;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        // 0x7f - 0x80 overflows, the low bytes are not chained
        assert!(registers.n_flag_is_set());
        assert!(registers.v_flag_is_set());
        assert!(!registers.z_flag_is_set());
    }

    #[test]
    fn test_cpx_leaves_carry() {
        let cpu_instruction =
            CPUInstruction::new(0x1000, 0xac, "CPXx", AddressingMode::Indexed, cpx);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xac, 0x00]);
        memory.deposit(0x2000, &[0x20, 0x01]).unwrap();
        registers.register_x = 0x2000;
        registers.set_c_flag(true);
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(registers.c_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());

        registers.set_c_flag(false);
        registers.command_pointer = 0x1001;
        registers.register_x = 0x0000;
        memory.deposit(0x0000, &[0x20, 0x01]).unwrap();
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(!registers.c_flag_is_set());
        assert!(registers.n_flag_is_set());
    }
}
