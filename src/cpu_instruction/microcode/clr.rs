use super::*;

fn clear_flags(registers: &mut Registers) {
    set_logic_flags(registers, 0x00);
    registers.set_c_flag(false);
}

fn clear_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    registers.set_accumulator(accumulator, 0x00);
    clear_flags(registers);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, accumulator),
    ))
}

pub fn clra(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    clear_accumulator(memory, registers, cpu_instruction, Accumulator::A)
}

pub fn clrb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    clear_accumulator(memory, registers, cpu_instruction, Accumulator::B)
}

/// # CLR - Clear memory
pub fn clr(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;

    memory.write(target_address, &[0x00])?;
    clear_flags(registers);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("0x00[S={}]", registers.format_status()),
    ))
}
