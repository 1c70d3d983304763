use super::*;

pub fn nop(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;

    Ok(LogLine::new(cpu_instruction, resolution, String::new()))
}
