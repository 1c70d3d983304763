use std::convert::TryFrom;

mod error;
mod memory_stack;
mod ram;
mod rom;

pub use error::MemoryError;
pub use memory_stack::MemoryStack;
pub use ram::RAM;
pub use rom::ROM;

pub const MEMMAX: usize = 0xFFFF;

/// Decode bytes as an unsigned integer, most significant byte first (6800
/// order).
pub fn big_endian(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .fold(0, |addr, byte| addr << 8 | (*byte as usize))
}

/*
 * AddressableIO
 * this trait defines the interface for all memory systems
 */
pub trait AddressableIO {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError>;
    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError>;
    fn get_size(&self) -> usize;
}

fn check_range(addr: usize, len: usize) -> bool {
    match len {
        0 => addr <= MEMMAX + 1,
        _ => addr
            .checked_add(len - 1)
            .map_or(false, |last| last <= MEMMAX),
    }
}

/*
 * MemoryAccess
 * bounds checked byte and word access, available on every memory system.
 * Words are big endian. Nothing is ever wrapped around $FFFF.
 */
pub trait MemoryAccess: AddressableIO {
    fn byte(&self, addr: usize) -> Result<u8, MemoryError> {
        Ok(self.bytes(addr, 1)?[0])
    }

    fn bytes(&self, addr: usize, n: usize) -> Result<Vec<u8>, MemoryError> {
        if !check_range(addr, n) {
            return Err(MemoryError::ReadOverflow(n, addr));
        }
        if n == 0 {
            return Ok(vec![]);
        }

        self.read(addr, n)
    }

    fn word(&self, addr: usize) -> Result<u16, MemoryError> {
        let bytes = self.bytes(addr, 2)?;

        Ok(big_endian(&bytes) as u16)
    }

    fn words(&self, addr: usize, n: usize) -> Result<Vec<u16>, MemoryError> {
        let len = n
            .checked_mul(2)
            .ok_or(MemoryError::ReadOverflow(usize::MAX, addr))?;
        if !check_range(addr, len) {
            return Err(MemoryError::ReadOverflow(len, addr));
        }

        (0..n).map(|i| self.word(addr + i * 2)).collect()
    }

    /// Deposit bytes at contiguous addresses starting at `addr`. All the
    /// values are checked before anything is written. Returns the deposited
    /// bytes.
    fn deposit<V>(&mut self, addr: usize, values: &[V]) -> Result<Vec<u8>, MemoryError>
    where
        V: Copy + Into<i64>,
    {
        let mut data: Vec<u8> = Vec::with_capacity(values.len());

        for (offset, value) in values.iter().enumerate() {
            let value: i64 = (*value).into();
            let byte = u8::try_from(value)
                .map_err(|_| MemoryError::InvalidValue(addr.saturating_add(offset), value, 0xFF))?;
            data.push(byte);
        }

        if !check_range(addr, data.len()) {
            return Err(MemoryError::WriteOverflow(data.len(), addr));
        }
        if !data.is_empty() {
            self.write(addr, &data)?;
        }

        Ok(data)
    }

    /// Deposit 16 bits words, MSB first, at contiguous addresses starting at
    /// `addr`. Returns the deposited bytes.
    fn depword<V>(&mut self, addr: usize, values: &[V]) -> Result<Vec<u8>, MemoryError>
    where
        V: Copy + Into<i64>,
    {
        let mut data: Vec<u8> = Vec::with_capacity(values.len() * 2);

        for (index, value) in values.iter().enumerate() {
            let value: i64 = (*value).into();
            let word = u16::try_from(value)
                .map_err(|_| MemoryError::InvalidValue(addr.saturating_add(index.saturating_mul(2)), value, 0xFFFF))?;
            data.extend_from_slice(&word.to_be_bytes());
        }

        self.deposit(addr, &data)
    }

    /// Hexadecimal dump of `n` bytes from `addr`, 16 bytes per line.
    fn dump(&self, addr: usize, n: usize) -> Result<Vec<String>, MemoryError> {
        let bytes = self.bytes(addr, n)?;

        Ok(bytes
            .chunks(16)
            .enumerate()
            .map(|(line, chunk)| {
                let (left, right) = chunk.split_at(chunk.len().min(8));
                format!(
                    "#0x{:04X}: {} {}",
                    addr + line * 16,
                    hex::encode(left),
                    hex::encode(right)
                )
                .trim_end()
                .to_owned()
            })
            .collect())
    }
}

impl<T: AddressableIO + ?Sized> MemoryAccess for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian() {
        assert_eq!(0x1234, big_endian(&[0x12, 0x34]));
        assert_eq!(0x0011, big_endian(&[0x00, 0x11]));
        assert_eq!(0x1100, big_endian(&[0x11, 0x00]));
        assert_eq!(0x00ab, big_endian(&[0xab]));
    }

    #[test]
    fn test_check_range() {
        assert!(check_range(0x0000, 0x10000));
        assert!(check_range(0xFFFF, 1));
        assert!(check_range(0x10000, 0));
        assert!(!check_range(0xFFFF, 2));
        assert!(!check_range(0x10000, 1));
        assert!(!check_range(0x10001, 0));
    }

    #[test]
    fn test_deposit_and_read_back() {
        let mut memory = RAM::default();
        let deposited = memory.deposit(0x1000, &[0x86, 0x01, 0xff]).unwrap();
        assert_eq!(vec![0x86, 0x01, 0xff], deposited);
        assert_eq!(vec![0x86, 0x01, 0xff], memory.bytes(0x1000, 3).unwrap());
        assert_eq!(0x86, memory.byte(0x1000).unwrap());
        assert_eq!(0x8601, memory.word(0x1000).unwrap());
        assert_eq!(vec![0x8601, 0xff00], memory.words(0x1000, 2).unwrap());
    }

    #[test]
    fn test_deposit_is_all_or_nothing() {
        let mut memory = RAM::default();
        match memory.deposit(0x2000, &[0x01, 0x02, 0x100, 0x04]) {
            Err(MemoryError::InvalidValue(addr, value, max)) => {
                assert_eq!(0x2002, addr);
                assert_eq!(0x100, value);
                assert_eq!(0xFF, max);
            }
            v => panic!("deposit should refuse 0x100, got {:?}", v),
        }
        assert_eq!(vec![0x00, 0x00, 0x00, 0x00], memory.bytes(0x2000, 4).unwrap());

        let err = memory.deposit(0x2000, &[-1]).unwrap_err();
        assert!(err.is_value_error());
        assert_eq!(0x00, memory.byte(0x2000).unwrap());
    }

    #[test]
    fn test_deposit_out_of_range() {
        let mut memory = RAM::default();
        assert_eq!(
            Err(MemoryError::WriteOverflow(2, 0xFFFF)),
            memory.deposit(0xFFFF, &[0x01, 0x02])
        );
        assert_eq!(vec![0x01], memory.deposit(0xFFFF, &[0x01]).unwrap());
        assert!(memory.deposit(0x10000, &[0x01]).unwrap_err().is_range_error());
        assert_eq!(Vec::<u8>::new(), memory.deposit::<u8>(0x10000, &[]).unwrap());
    }

    #[test]
    fn test_depword() {
        let mut memory = RAM::default();
        let deposited = memory.depword(0x0300, &[0x1234, 0xabcd]).unwrap();
        assert_eq!(vec![0x12, 0x34, 0xab, 0xcd], deposited);
        assert_eq!(0xabcd, memory.word(0x0302).unwrap());

        assert_eq!(
            Err(MemoryError::InvalidValue(0x0302, 0x10000, 0xFFFF)),
            memory.depword(0x0300, &[0x0000, 0x10000])
        );
        assert_eq!(0x1234, memory.word(0x0300).unwrap());
        assert!(memory.depword(0xFFFF, &[0x0102]).unwrap_err().is_range_error());
    }

    #[test]
    fn test_read_out_of_range() {
        let memory = RAM::default();
        assert_eq!(Err(MemoryError::ReadOverflow(1, 0x10000)), memory.byte(0x10000));
        assert_eq!(Err(MemoryError::ReadOverflow(2, 0xFFFF)), memory.word(0xFFFF));
        assert_eq!(Err(MemoryError::ReadOverflow(4, 0xFFFE)), memory.bytes(0xFFFE, 4));
        assert_eq!(Err(MemoryError::ReadOverflow(4, 0xFFFE)), memory.words(0xFFFE, 2));
        assert!(memory
            .words(0x0000, usize::MAX / 2 + 1)
            .unwrap_err()
            .is_range_error());
    }

    #[test]
    fn test_invalid_value_far_away() {
        let mut memory = RAM::default();
        assert_eq!(
            Err(MemoryError::InvalidValue(usize::MAX, 0x100, 0xFF)),
            memory.deposit(usize::MAX, &[0x100])
        );
        assert_eq!(
            Err(MemoryError::InvalidValue(usize::MAX, -1, 0xFFFF)),
            memory.depword(usize::MAX - 1, &[0x0000, -1])
        );
    }

    #[test]
    fn test_dump() {
        let mut memory = RAM::default();
        memory
            .deposit(0x0800, &(0u8..20).collect::<Vec<u8>>())
            .unwrap();
        assert_eq!(
            vec![
                "#0x0800: 0001020304050607 08090a0b0c0d0e0f".to_owned(),
                "#0x0810: 10111213".to_owned(),
            ],
            memory.dump(0x0800, 20).unwrap()
        );
    }
}
