use super::*;

fn negate_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let result = registers.accumulator(accumulator).wrapping_neg();
    registers.set_accumulator(accumulator, result);
    registers.set_n_flag(result & 0x80 != 0);
    registers.set_z_flag(result == 0);
    registers.set_v_flag(result == 0x80);
    registers.set_c_flag(result != 0);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, accumulator),
    ))
}

/// # NEGA - Two's complement of accumulator A
///
/// C is set unless the result is null, V is set when the result is 0x80.
pub fn nega(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    negate_accumulator(memory, registers, cpu_instruction, Accumulator::A)
}

/// # NEGB - Two's complement of accumulator B
pub fn negb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    negate_accumulator(memory, registers, cpu_instruction, Accumulator::B)
}
