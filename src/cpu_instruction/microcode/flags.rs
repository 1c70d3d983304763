use super::*;

fn set_flag(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    setter: fn(&mut Registers, bool),
    value: bool,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    setter(registers, value);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[S={}]", registers.format_status()),
    ))
}

/// # CLC - Clear carry
pub fn clc(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    set_flag(memory, registers, cpu_instruction, Registers::set_c_flag, false)
}

/// # SEC - Set carry
pub fn sec(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    set_flag(memory, registers, cpu_instruction, Registers::set_c_flag, true)
}

/// # CLV - Clear overflow
pub fn clv(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    set_flag(memory, registers, cpu_instruction, Registers::set_v_flag, false)
}

/// # SEV - Set overflow
pub fn sev(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    set_flag(memory, registers, cpu_instruction, Registers::set_v_flag, true)
}

/// # CLI - Clear interrupt mask
pub fn cli(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    set_flag(memory, registers, cpu_instruction, Registers::set_i_flag, false)
}

/// # SEI - Set interrupt mask
pub fn sei(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    set_flag(memory, registers, cpu_instruction, Registers::set_i_flag, true)
}
