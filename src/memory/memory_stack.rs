use super::*;
use range_map::Range;
use std::cmp;
use std::fmt;

struct Subsystem {
    subsystem: Box<dyn AddressableIO>,
    address_range: Range<usize>,
    name: String,
}

impl Subsystem {
    pub fn new(
        name: &str,
        start_address: usize,
        subsystem: impl AddressableIO + 'static,
    ) -> Subsystem {
        let sub_len = subsystem.get_size();

        Subsystem {
            name: name.to_owned(),
            subsystem: Box::new(subsystem),
            address_range: Range {
                start: start_address,
                end: start_address + sub_len - 1,
            },
        }
    }

    pub fn contains(&self, addr: usize) -> bool {
        self.address_range.contains(addr)
    }
}

impl AddressableIO for Subsystem {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        self.subsystem.read(addr, len)
    }

    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError> {
        self.subsystem.write(location, data)
    }

    fn get_size(&self) -> usize {
        self.subsystem.get_size()
    }
}

impl fmt::Debug for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Subsystem {:<12}, address range=#0x{:04X} → #0x{:04X}, size = {} bytes",
            self.name,
            self.address_range.start,
            self.address_range.end,
            self.get_size()
        )
    }
}

/*
 * MemoryStack
 * Memory subsystems mapped on the 64K address space. A subsystem added
 * later shadows the ones below it on its own address range.
 */
#[derive(Debug, Default)]
pub struct MemoryStack {
    stack: Vec<Subsystem>,
}

impl MemoryStack {
    pub fn new_with_ram() -> Self {
        let mut memory_stack = Self::default();
        memory_stack.add_subsystem("RAM", 0x0000, RAM::default());

        memory_stack
    }

    pub fn add_subsystem(
        &mut self,
        name: &str,
        start_address: usize,
        memory: impl AddressableIO + 'static,
    ) {
        if memory.get_size() > 0 {
            self.stack.push(Subsystem::new(name, start_address, memory));
        }
    }

    pub fn get_subsystems_info(&self) -> Vec<String> {
        let mut output: Vec<String> = vec![];

        for sub in self.stack.iter() {
            output.push(format!("#{}: {:?}", output.len(), sub));
        }

        output
    }

    /*
     * Find the visible subsystem at `addr` and how many contiguous bytes
     * it serves from there before another subsystem takes over.
     */
    fn locate(&self, addr: usize) -> Option<(usize, usize)> {
        let index = self.stack.iter().rposition(|sub| sub.contains(addr))?;
        let mut end = self.stack[index].address_range.end;

        for sub in &self.stack[index + 1..] {
            let start = sub.address_range.start;
            if start > addr && start <= end {
                end = start - 1;
            }
        }

        Some((index, end - addr + 1))
    }

    /*
     * Split an access in chunks: (subsystem index, address, length).
     */
    fn split(&self, addr: usize, len: usize) -> Result<Vec<(usize, usize, usize)>, MemoryError> {
        let mut chunks = vec![];
        let mut tmpaddr = addr;
        let mut tmplen = len;

        while tmplen > 0 {
            let (index, available) = self
                .locate(tmpaddr)
                .ok_or(MemoryError::Other(tmpaddr, "accessing unmapped memory"))?;
            let sublen = cmp::min(available, tmplen);
            chunks.push((index, tmpaddr, sublen));
            tmpaddr += sublen;
            tmplen -= sublen;
        }

        Ok(chunks)
    }
}

impl AddressableIO for MemoryStack {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        if addr + len > MEMMAX + 1 {
            return Err(MemoryError::ReadOverflow(len, addr));
        }
        let mut results: Vec<u8> = Vec::with_capacity(len);

        for (index, chunk_addr, chunk_len) in self.split(addr, len)? {
            let sub = &self.stack[index];
            let mut subr = sub.read(chunk_addr - sub.address_range.start, chunk_len)?;
            results.append(&mut subr);
        }

        Ok(results)
    }

    fn write(&mut self, addr: usize, data: &[u8]) -> Result<(), MemoryError> {
        if addr + data.len() > MEMMAX + 1 {
            return Err(MemoryError::WriteOverflow(data.len(), addr));
        }
        let mut offset = 0;
        // (subsystem index, local address, previous content)
        let mut written: Vec<(usize, usize, Vec<u8>)> = Vec::new();

        for (index, chunk_addr, chunk_len) in self.split(addr, data.len())? {
            let sub = &mut self.stack[index];
            let location = chunk_addr - sub.address_range.start;
            let previous = sub.read(location, chunk_len)?;
            if let Err(e) = sub.write(location, &data[offset..offset + chunk_len]) {
                for (index, location, previous) in written.into_iter().rev() {
                    self.stack[index].write(location, &previous)?;
                }
                return Err(e);
            }
            written.push((index, location, previous));
            offset += chunk_len;
        }

        Ok(())
    }

    fn get_size(&self) -> usize {
        MEMMAX + 1
    }
}
