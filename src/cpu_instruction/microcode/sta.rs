use super::*;

fn store_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let byte = registers.accumulator(accumulator);

    memory.write(target_address, &[byte])?;
    set_logic_flags(registers, byte);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("0x{:02x}[S={}]", byte, registers.format_status()),
    ))
}

/// # STAA - Store accumulator A
pub fn staa(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    store_accumulator(memory, registers, cpu_instruction, Accumulator::A)
}

/// # STAB - Store accumulator B
pub fn stab(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    store_accumulator(memory, registers, cpu_instruction, Accumulator::B)
}
