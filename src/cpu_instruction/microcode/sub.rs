use super::*;

fn sub_from_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
    with_carry: bool,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let byte = memory.byte(target_address)?;
    let borrow = with_carry && registers.c_flag_is_set();
    let minuend = registers.accumulator(accumulator);
    let result = sub_with_flags(registers, minuend, byte, borrow, true);
    registers.set_accumulator(accumulator, result);

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

/// # SUBA - Subtract memory from accumulator A
pub fn suba(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    sub_from_accumulator(memory, registers, cpu_instruction, Accumulator::A, false)
}

/// # SUBB - Subtract memory from accumulator B
pub fn subb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    sub_from_accumulator(memory, registers, cpu_instruction, Accumulator::B, false)
}

/// # SBCA - Subtract memory and carry from accumulator A
pub fn sbca(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    sub_from_accumulator(memory, registers, cpu_instruction, Accumulator::A, true)
}

/// # SBA - Subtract accumulator B from accumulator A
pub fn sba(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let (a, b) = (registers.accumulator_a, registers.accumulator_b);
    registers.accumulator_a = sub_with_flags(registers, a, b, false, true);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, Accumulator::A),
    ))
}
