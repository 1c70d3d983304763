use super::*;

/// # EORA - Exclusive OR on accumulator A
pub fn eora(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let byte = memory.byte(target_address)?;
    registers.accumulator_a ^= byte;
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
