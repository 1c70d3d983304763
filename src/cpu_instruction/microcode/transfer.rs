use super::*;

/// # TAB - Transfer accumulator A to B
pub fn tab(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let value = registers.accumulator_a;
    registers.accumulator_b = value;
    set_logic_flags(registers, value);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, Accumulator::B),
    ))
}

/// # TBA - Transfer accumulator B to A
pub fn tba(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let value = registers.accumulator_b;
    registers.accumulator_a = value;
    set_logic_flags(registers, value);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, Accumulator::A),
    ))
}

/// # TSX - Transfer stack pointer to index register
///
/// The stack pointer points to the next free byte, X gets the address of
/// the last pushed byte.
pub fn tsx(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    registers.register_x = registers.stack_pointer.wrapping_add(1);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[X=0x{:04x}]", registers.register_x),
    ))
}

/// # TXS - Transfer index register to stack pointer
pub fn txs(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    registers.stack_pointer = registers.register_x.wrapping_sub(1);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[SP=0x{:04x}]", registers.stack_pointer),
    ))
}
