use super::*;

/// # JMP - Jump
///
/// Extended or indexed, the effective address becomes the command pointer.
pub fn jmp(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    registers.command_pointer = target_address as u16;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[CP=0x{:04X}]", registers.command_pointer),
    ))
}
