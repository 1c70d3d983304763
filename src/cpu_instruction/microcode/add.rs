use super::*;

fn add_to_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
    with_carry: bool,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let byte = memory.byte(target_address)?;
    let carry = with_carry && registers.c_flag_is_set();
    let augend = registers.accumulator(accumulator);
    let result = add_with_flags(registers, augend, byte, carry);
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

/// # ADDA - Add memory to accumulator A
///
/// All additions share the same truth table for H, N, Z, V and C.
pub fn adda(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    add_to_accumulator(memory, registers, cpu_instruction, Accumulator::A, false)
}

/// # ADDB - Add memory to accumulator B
pub fn addb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    add_to_accumulator(memory, registers, cpu_instruction, Accumulator::B, false)
}

/// # ADCA - Add memory and carry to accumulator A
pub fn adca(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    add_to_accumulator(memory, registers, cpu_instruction, Accumulator::A, true)
}

/// # ABA - Add accumulator B to accumulator A
pub fn aba(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let (a, b) = (registers.accumulator_a, registers.accumulator_b);
    registers.accumulator_a = add_with_flags(registers, a, b, false);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, Accumulator::A),
    ))
}
