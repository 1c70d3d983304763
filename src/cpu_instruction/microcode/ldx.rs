use super::*;

/// # LDX - Load index register
///
/// The operand is 16 bits wide, the immediate form carries two bytes.
pub fn ldx(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let word = read_word(memory, target_address)?;

    registers.register_x = word;
    set_logic_flags_word(registers, word);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[X=0x{:04x}][S={}]", word, registers.format_status()),
    ))
}

/// # LDS - Load stack pointer
pub fn lds(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let word = read_word(memory, target_address)?;

    registers.stack_pointer = word;
    set_logic_flags_word(registers, word);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[SP=0x{:04x}][S={}]", word, registers.format_status()),
    ))
}
