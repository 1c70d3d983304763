use super::*;

/// # RTS - Return from subroutine
///
/// Pull the high byte then the low byte of the return address.
pub fn rts(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    registers.command_pointer = registers.stack_pull_word(memory)?;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[CP=0x{:04X}][SP=0x{:04x}]",
            registers.command_pointer, registers.stack_pointer
        ),
    ))
}
