use super::*;

fn store_word(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    word: u16,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;

    write_word(memory, target_address, word)?;
    set_logic_flags_word(registers, word);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("0x{:04x}[S={}]", word, registers.format_status()),
    ))
}

/// # STX - Store index register
pub fn stx(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let word = registers.register_x;
    store_word(memory, registers, cpu_instruction, word)
}

/// # STS - Store stack pointer
pub fn sts(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let word = registers.stack_pointer;
    store_word(memory, registers, cpu_instruction, word)
}
