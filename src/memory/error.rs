use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MemoryError {
    ReadOverflow(usize, usize),      // read len, address
    WriteOverflow(usize, usize),     // write len, address
    InvalidValue(usize, i64, i64),   // address, value, maximum
    Other(usize, &'static str),      // address, error message
}

impl MemoryError {
    /// True for the errors raised when an address (or address + length)
    /// falls outside of the memory.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            MemoryError::ReadOverflow(_, _) | MemoryError::WriteOverflow(_, _)
        )
    }

    /// True when a deposited value does not fit in a byte or a word.
    pub fn is_value_error(&self) -> bool {
        matches!(self, MemoryError::InvalidValue(_, _, _))
    }
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MemoryError::ReadOverflow(read_len, addr) => write!(
                f,
                "Could not READ {} bytes at address 0x{:04X}, last address is out of range.",
                read_len, addr
            ),
            MemoryError::WriteOverflow(write_len, addr) => write!(
                f,
                "Could not WRITE {} bytes at address 0x{:04X}, last address is out of range.",
                write_len, addr
            ),
            MemoryError::InvalidValue(addr, value, max) => write!(
                f,
                "deposit @0x{:04X}: invalid value {}, expected 0x00 to 0x{:02X}",
                addr, value, max
            ),
            MemoryError::Other(addr, err_msg) => {
                write!(f, "Memory error @{:04X} with message: {}", addr, err_msg)
            }
        }
    }
}

impl error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
