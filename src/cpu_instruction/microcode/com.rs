use super::*;

fn complement_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let result = !registers.accumulator(accumulator);
    registers.set_accumulator(accumulator, result);
    set_logic_flags(registers, result);
    registers.set_c_flag(true);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, accumulator),
    ))
}

/// # COMA - One's complement of accumulator A
pub fn coma(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    complement_accumulator(memory, registers, cpu_instruction, Accumulator::A)
}

/// # COMB - One's complement of accumulator B
pub fn comb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    complement_accumulator(memory, registers, cpu_instruction, Accumulator::B)
}
