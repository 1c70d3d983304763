use super::*;

/// # TAP - Transfer accumulator A to the condition code register
///
/// Bits 5 to 0 of A become H, I, N, Z, V and C.
pub fn tap(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let value = registers.accumulator_a;
    registers.set_status_register(value);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[S={}]", registers.format_status()),
    ))
}

/// # TPA - Transfer the condition code register to accumulator A
///
/// Bits 7 and 6 read as 1.
pub fn tpa(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    registers.accumulator_a = registers.get_status_register();

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, Accumulator::A),
    ))
}
