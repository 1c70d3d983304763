use super::*;

fn push_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let byte = registers.accumulator(accumulator);
    registers.stack_push(memory, byte)?;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("0x{:02x}[SP=0x{:04x}]", byte, registers.stack_pointer),
    ))
}

/// # PSHA - Push accumulator A
pub fn psha(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    push_accumulator(memory, registers, cpu_instruction, Accumulator::A)
}

/// # PSHB - Push accumulator B
pub fn pshb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    push_accumulator(memory, registers, cpu_instruction, Accumulator::B)
}
