use super::*;

fn load_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let byte = memory.byte(target_address)?;

    registers.set_accumulator(accumulator, byte);
    set_logic_flags(registers, byte);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, accumulator),
    ))
}

/// # LDAA - Load accumulator A
pub fn ldaa(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    load_accumulator(memory, registers, cpu_instruction, Accumulator::A)
}

/// # LDAB - Load accumulator B
pub fn ldab(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    load_accumulator(memory, registers, cpu_instruction, Accumulator::B)
}
