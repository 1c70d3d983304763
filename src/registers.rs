use super::memory::{AddressableIO, MemoryAccess, MemoryError};
use std::fmt;
/*
 * 6800 registers
 * accumulators A & B are 8 bits general purpose registers.
 * index register X, command pointer and stack pointer are 16 bits.
 * condition code register :
 * bit 7: always set
 * bit 6: always set
 * bit 5: Half carry flag
 * bit 4: Interrupt mask
 * bit 3: Negative flag
 * bit 2: Zero flag
 * bit 1: oVerflow flag
 * bit 0: Carry flag
 *
 * The stack grows downward: a push stores at the stack pointer then
 * decrements it, a pull increments it then reads.
 */
pub const CCR_FIXED_BITS: u8 = 0b11000000;

#[derive(Clone, Copy, Eq, PartialEq)]
pub enum Accumulator {
    A,
    B,
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accumulator::A => write!(f, "A"),
            Accumulator::B => write!(f, "B"),
        }
    }
}

#[derive(Clone, Eq, PartialEq)]
pub struct Registers {
    pub accumulator_a: u8,
    pub accumulator_b: u8,
    pub register_x: u16,
    pub status_register: u8,
    pub command_pointer: u16,
    pub stack_pointer: u16,
}

impl Registers {
    pub fn new(init_address: u16) -> Registers {
        Registers {
            accumulator_a: 0x00,
            accumulator_b: 0x00,
            register_x: 0x0000,
            status_register: CCR_FIXED_BITS,
            command_pointer: init_address,
            stack_pointer: 0x0000,
        }
    }

    pub fn accumulator(&self, accumulator: Accumulator) -> u8 {
        match accumulator {
            Accumulator::A => self.accumulator_a,
            Accumulator::B => self.accumulator_b,
        }
    }

    pub fn set_accumulator(&mut self, accumulator: Accumulator, value: u8) {
        match accumulator {
            Accumulator::A => self.accumulator_a = value,
            Accumulator::B => self.accumulator_b = value,
        }
    }

    pub fn stack_push<M: AddressableIO + ?Sized>(
        &mut self,
        memory: &mut M,
        byte: u8,
    ) -> std::result::Result<(), MemoryError> {
        memory.write(self.stack_pointer as usize, &[byte])?;
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);

        Ok(())
    }

    pub fn stack_pull<M: AddressableIO + ?Sized>(
        &mut self,
        memory: &M,
    ) -> std::result::Result<u8, MemoryError> {
        let sp = self.stack_pointer.wrapping_add(1);
        let byte = memory.byte(sp as usize)?;
        self.stack_pointer = sp;

        Ok(byte)
    }

    /// Push a 16 bits word, the MSB lands at the lower address.
    pub fn stack_push_word<M: AddressableIO + ?Sized>(
        &mut self,
        memory: &mut M,
        word: u16,
    ) -> std::result::Result<(), MemoryError> {
        let [msb, lsb] = word.to_be_bytes();
        self.stack_push(memory, lsb)?;
        self.stack_push(memory, msb)
    }

    pub fn stack_pull_word<M: AddressableIO + ?Sized>(
        &mut self,
        memory: &M,
    ) -> std::result::Result<u16, MemoryError> {
        let msb = self.stack_pull(memory)?;
        let lsb = self.stack_pull(memory)?;

        Ok(u16::from_be_bytes([msb, lsb]))
    }

    /// Consume the byte pointed by the command pointer.
    pub fn fetch_byte<M: AddressableIO + ?Sized>(
        &mut self,
        memory: &M,
    ) -> std::result::Result<u8, MemoryError> {
        let byte = memory.byte(self.command_pointer as usize)?;
        self.command_pointer = self.command_pointer.wrapping_add(1);

        Ok(byte)
    }

    /// Consume a big endian word at the command pointer. The command pointer
    /// may wrap between the two bytes.
    pub fn fetch_word<M: AddressableIO + ?Sized>(
        &mut self,
        memory: &M,
    ) -> std::result::Result<u16, MemoryError> {
        let msb = self.fetch_byte(memory)?;
        let lsb = self.fetch_byte(memory)?;

        Ok(u16::from_be_bytes([msb, lsb]))
    }

    pub fn h_flag_is_set(&self) -> bool {
        self.status_register & 0b00100000 == 0b00100000
    }

    pub fn i_flag_is_set(&self) -> bool {
        self.status_register & 0b00010000 == 0b00010000
    }

    pub fn n_flag_is_set(&self) -> bool {
        self.status_register & 0b00001000 == 0b00001000
    }

    pub fn z_flag_is_set(&self) -> bool {
        self.status_register & 0b00000100 == 0b00000100
    }

    pub fn v_flag_is_set(&self) -> bool {
        self.status_register & 0b00000010 == 0b00000010
    }

    pub fn c_flag_is_set(&self) -> bool {
        self.status_register & 0b00000001 == 0b00000001
    }

    fn set_flag(&mut self, mask: u8, flag: bool) {
        if flag {
            self.status_register |= mask;
        } else {
            self.status_register &= !mask;
        }
    }

    pub fn set_h_flag(&mut self, flag: bool) {
        self.set_flag(0b00100000, flag);
    }

    pub fn set_i_flag(&mut self, flag: bool) {
        self.set_flag(0b00010000, flag);
    }

    pub fn set_n_flag(&mut self, flag: bool) {
        self.set_flag(0b00001000, flag);
    }

    pub fn set_z_flag(&mut self, flag: bool) {
        self.set_flag(0b00000100, flag);
    }

    pub fn set_v_flag(&mut self, flag: bool) {
        self.set_flag(0b00000010, flag);
    }

    pub fn set_c_flag(&mut self, flag: bool) {
        self.set_flag(0b00000001, flag);
    }

    /// Condition code register as TPA reads it.
    pub fn get_status_register(&self) -> u8 {
        self.status_register | CCR_FIXED_BITS
    }

    /// Load all six flags from bits 5..0, as TAP does.
    pub fn set_status_register(&mut self, value: u8) {
        self.status_register = value | CCR_FIXED_BITS;
    }

    pub fn format_status(&self) -> String {
        format!(
            "{}{}{}{}{}{}",
            if self.h_flag_is_set() { "H" } else { "h" },
            if self.i_flag_is_set() { "I" } else { "i" },
            if self.n_flag_is_set() { "N" } else { "n" },
            if self.z_flag_is_set() { "Z" } else { "z" },
            if self.v_flag_is_set() { "V" } else { "v" },
            if self.c_flag_is_set() { "C" } else { "c" },
        )
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers [A:0x{:02x}, B:0x{:02x}, X:0x{:04x} | SP:0x{:04x} CP:0x{:04x} | {}]",
            self.accumulator_a,
            self.accumulator_b,
            self.register_x,
            self.stack_pointer,
            self.command_pointer,
            self.format_status()
        )
    }
}
