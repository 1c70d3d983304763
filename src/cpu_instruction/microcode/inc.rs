use super::*;

fn increment_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let result = registers.accumulator(accumulator).wrapping_add(1);
    registers.set_accumulator(accumulator, result);
    registers.set_n_flag(result & 0x80 != 0);
    registers.set_z_flag(result == 0);
    registers.set_v_flag(result == 0x80);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, accumulator),
    ))
}

/// # INCA - Increment accumulator A
///
/// V is set only when 0x7F becomes 0x80, C is not affected.
pub fn inca(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    increment_accumulator(memory, registers, cpu_instruction, Accumulator::A)
}

/// # INCB - Increment accumulator B
pub fn incb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    increment_accumulator(memory, registers, cpu_instruction, Accumulator::B)
}

/// # INX - Increment index register
///
/// Only Z is affected.
pub fn inx(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    registers.register_x = registers.register_x.wrapping_add(1);
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

/// # INS - Increment stack pointer
pub fn ins(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    registers.stack_pointer = registers.stack_pointer.wrapping_add(1);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[SP=0x{:04x}]", registers.stack_pointer),
    ))
}
