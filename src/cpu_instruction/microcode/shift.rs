use super::*;

/// A shift takes the operand and the incoming carry and gives back the
/// result with the bit shifted out.
type Shift = fn(u8, bool) -> (u8, bool);

fn arithmetic_left(value: u8, _carry: bool) -> (u8, bool) {
    (value << 1, value & 0x80 != 0)
}

fn arithmetic_right(value: u8, _carry: bool) -> (u8, bool) {
    ((value >> 1) | (value & 0x80), value & 0x01 != 0)
}

fn logical_right(value: u8, _carry: bool) -> (u8, bool) {
    (value >> 1, value & 0x01 != 0)
}

fn rotate_left(value: u8, carry: bool) -> (u8, bool) {
    ((value << 1) | carry as u8, value & 0x80 != 0)
}

fn rotate_right(value: u8, carry: bool) -> (u8, bool) {
    ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
}

fn shift_accumulator(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    accumulator: Accumulator,
    shift: Shift,
) -> Result<LogLine> {
    let resolution = resolve(memory, registers, cpu_instruction)?;
    let (result, carry) = shift(registers.accumulator(accumulator), registers.c_flag_is_set());
    registers.set_accumulator(accumulator, result);
    set_shift_flags(registers, result, carry);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format_accumulator(registers, accumulator),
    ))
}

pub fn asla(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    shift_accumulator(memory, registers, cpu_instruction, Accumulator::A, arithmetic_left)
}

pub fn aslb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    shift_accumulator(memory, registers, cpu_instruction, Accumulator::B, arithmetic_left)
}

pub fn asra(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    shift_accumulator(memory, registers, cpu_instruction, Accumulator::A, arithmetic_right)
}

pub fn asrb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    shift_accumulator(memory, registers, cpu_instruction, Accumulator::B, arithmetic_right)
}

pub fn lsra(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    shift_accumulator(memory, registers, cpu_instruction, Accumulator::A, logical_right)
}

pub fn lsrb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    shift_accumulator(memory, registers, cpu_instruction, Accumulator::B, logical_right)
}

pub fn rola(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    shift_accumulator(memory, registers, cpu_instruction, Accumulator::A, rotate_left)
}

pub fn rolb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    shift_accumulator(memory, registers, cpu_instruction, Accumulator::B, rotate_left)
}

pub fn rora(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    shift_accumulator(memory, registers, cpu_instruction, Accumulator::A, rotate_right)
}

pub fn rorb(
    memory: &mut dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    shift_accumulator(memory, registers, cpu_instruction, Accumulator::B, rotate_right)
}
