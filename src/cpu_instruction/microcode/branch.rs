use super::*;

/*
 * Conditional branches
 * The relative target is computed from the address following the offset
 * byte. When the condition does not hold, execution goes on after the
 * offset byte. An offset of -2 branches on itself.
 */
fn branch(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    condition: fn(&Registers) -> bool,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    let taken = condition(registers);

    if taken {
        registers.command_pointer = target_address as u16;
    }

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[CP=0x{:04X}]{}",
            registers.command_pointer,
            if taken { "" } else { "(not taken)" }
        ),
    ))
}

fn n_xor_v(registers: &Registers) -> bool {
    registers.n_flag_is_set() ^ registers.v_flag_is_set()
}

/// # BRA - Branch always
pub fn bra(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |_| true)
}

/// # BHI - Branch if higher (unsigned)
pub fn bhi(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| {
        !(r.c_flag_is_set() || r.z_flag_is_set())
    })
}

/// # BLS - Branch if lower or same (unsigned)
pub fn bls(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| {
        r.c_flag_is_set() || r.z_flag_is_set()
    })
}

/// # BCC - Branch if carry clear
pub fn bcc(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| !r.c_flag_is_set())
}

/// # BCS - Branch if carry set
pub fn bcs(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| r.c_flag_is_set())
}

/// # BNE - Branch if not equal
pub fn bne(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| !r.z_flag_is_set())
}

/// # BEQ - Branch if equal
pub fn beq(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| r.z_flag_is_set())
}

/// # BVC - Branch if overflow clear
pub fn bvc(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| !r.v_flag_is_set())
}

/// # BVS - Branch if overflow set
pub fn bvs(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| r.v_flag_is_set())
}

/// # BPL - Branch if plus
pub fn bpl(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| !r.n_flag_is_set())
}

/// # BMI - Branch if minus
pub fn bmi(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| r.n_flag_is_set())
}

/// # BGE - Branch if greater or equal (signed)
pub fn bge(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| !n_xor_v(r))
}

/// # BLT - Branch if less than (signed)
pub fn blt(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, n_xor_v)
}

/// # BGT - Branch if greater than (signed)
pub fn bgt(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| {
        !(r.z_flag_is_set() || n_xor_v(r))
    })
}

/// # BLE - Branch if less or equal (signed)
pub fn ble(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    branch(memory, registers, cpu_instruction, |r| {
        r.z_flag_is_set() || n_xor_v(r)
    })
}
