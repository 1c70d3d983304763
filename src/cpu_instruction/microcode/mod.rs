mod error;
pub use error::{MicrocodeError, Result};

use super::{CPUInstruction, LogLine};
use crate::addressing_mode::AddressingModeResolution;
use crate::memory::{AddressableIO, MemoryAccess};
use crate::registers::{Accumulator, Registers};

#[cfg(test)]
use crate::addressing_mode::AddressingMode;

mod add;
mod and;
mod branch;
mod clr;
mod cmp;
mod com;
mod cpx;
mod dec;
mod eor;
mod flags;
mod inc;
mod jmp;
mod jsr;
mod lda;
mod ldx;
mod neg;
mod nop;
mod ora;
mod psh;
mod pul;
mod rts;
mod shift;
mod sta;
mod stx;
mod sub;
mod tap;
mod transfer;
mod tst;

pub use add::{aba, adca, adda, addb};
pub use and::{anda, andb, bita};
pub use branch::{bcc, bcs, beq, bge, bgt, bhi, ble, bls, blt, bmi, bne, bpl, bra, bvc, bvs};
pub use clr::{clr, clra, clrb};
pub use cmp::{cba, cmpa, cmpb};
pub use com::{coma, comb};
pub use cpx::cpx;
pub use dec::{des, deca, decb, dex};
pub use eor::eora;
pub use flags::{clc, cli, clv, sec, sei, sev};
pub use inc::{inca, incb, ins, inx};
pub use jmp::jmp;
pub use jsr::{bsr, jsr};
pub use lda::{ldaa, ldab};
pub use ldx::{lds, ldx};
pub use neg::{nega, negb};
pub use nop::nop;
pub use ora::oraa;
pub use psh::{psha, pshb};
pub use pul::{pula, pulb};
pub use rts::rts;
pub use shift::{asla, aslb, asra, asrb, lsra, lsrb, rola, rolb, rora, rorb};
pub use sta::{staa, stab};
pub use stx::{sts, stx};
pub use sub::{sba, sbca, suba, subb};
pub use tap::{tap, tpa};
pub use transfer::{tab, tba, tsx, txs};
pub use tst::{tsta, tstb};

/// Consume the operand bytes of the instruction, the command pointer ends
/// right after them.
fn resolve(
    memory: &dyn AddressableIO,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<AddressingModeResolution> {
    Ok(cpu_instruction.addressing_mode.solve(registers, memory)?)
}

fn target_address(
    resolution: &AddressingModeResolution,
    cpu_instruction: &CPUInstruction,
) -> Result<usize> {
    resolution.target_address.ok_or(MicrocodeError::Resolution(
        cpu_instruction.addressing_mode,
        cpu_instruction.address,
    ))
}

/// 16 bits operands are big endian, the second byte address wraps at $FFFF.
fn read_word(memory: &dyn AddressableIO, addr: usize) -> Result<u16> {
    let msb = memory.byte(addr)?;
    let lsb = memory.byte((addr + 1) & 0xffff)?;

    Ok(u16::from_be_bytes([msb, lsb]))
}

fn write_word(memory: &mut dyn AddressableIO, addr: usize, word: u16) -> Result<()> {
    let [msb, lsb] = word.to_be_bytes();
    memory.write(addr, &[msb])?;
    memory.write((addr + 1) & 0xffff, &[lsb])?;

    Ok(())
}

fn bit7(value: u8) -> bool {
    value & 0x80 != 0
}

fn bit3(value: u8) -> bool {
    value & 0x08 != 0
}

/// N from the sign bit, Z when null, V cleared.
fn set_logic_flags(registers: &mut Registers, value: u8) {
    registers.set_n_flag(bit7(value));
    registers.set_z_flag(value == 0);
    registers.set_v_flag(false);
}

fn set_logic_flags_word(registers: &mut Registers, value: u16) {
    registers.set_n_flag(value & 0x8000 != 0);
    registers.set_z_flag(value == 0);
    registers.set_v_flag(false);
}

/*
 * Addition truth table, x is the augend, m the addend and r the result:
 * C = x7.m7 + m7.!r7 + !r7.x7
 * H = x3.m3 + m3.!r3 + !r3.x3
 * V = x7.m7.!r7 + !x7.!m7.r7
 */
fn add_with_flags(registers: &mut Registers, augend: u8, addend: u8, carry: bool) -> u8 {
    let result = augend.wrapping_add(addend).wrapping_add(carry as u8);
    let (x7, m7, r7) = (bit7(augend), bit7(addend), bit7(result));
    let (x3, m3, r3) = (bit3(augend), bit3(addend), bit3(result));

    registers.set_h_flag((x3 && m3) || (m3 && !r3) || (!r3 && x3));
    registers.set_n_flag(r7);
    registers.set_z_flag(result == 0);
    registers.set_v_flag((x7 && m7 && !r7) || (!x7 && !m7 && r7));
    registers.set_c_flag((x7 && m7) || (m7 && !r7) || (!r7 && x7));

    result
}

/*
 * Subtraction truth table, x is the minuend, m the subtrahend and r the
 * result:
 * C = !x7.m7 + m7.r7 + r7.!x7
 * V = x7.!m7.!r7 + !x7.m7.r7
 * The carry is left untouched when `affect_c` is false.
 */
fn sub_with_flags(
    registers: &mut Registers,
    minuend: u8,
    subtrahend: u8,
    borrow: bool,
    affect_c: bool,
) -> u8 {
    let result = minuend.wrapping_sub(subtrahend).wrapping_sub(borrow as u8);
    let (x7, m7, r7) = (bit7(minuend), bit7(subtrahend), bit7(result));

    registers.set_n_flag(r7);
    registers.set_z_flag(result == 0);
    registers.set_v_flag((x7 && !m7 && !r7) || (!x7 && m7 && r7));
    if affect_c {
        registers.set_c_flag((!x7 && m7) || (m7 && r7) || (r7 && !x7));
    }

    result
}

/// Shifts and rotations: C is the bit shifted out, V = N xor C.
fn set_shift_flags(registers: &mut Registers, result: u8, carry: bool) {
    registers.set_c_flag(carry);
    registers.set_n_flag(bit7(result));
    registers.set_z_flag(result == 0);
    registers.set_v_flag(bit7(result) ^ carry);
}

fn format_accumulator(registers: &Registers, accumulator: Accumulator) -> String {
    format!(
        "[{}=0x{:02x}][S={}]",
        accumulator,
        registers.accumulator(accumulator),
        registers.format_status()
    )
}
