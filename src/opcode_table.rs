use crate::addressing_mode::AddressingMode;
use crate::cpu_instruction::{microcode, CPUInstruction, Microcode};
use std::collections::HashMap;
use std::error;
use std::fmt;
use std::sync::OnceLock;

/*
 * opcodes!
 * Each line gives the opcode byte, the mnemonic, the addressing mode and the
 * microcode. The mnemonic suffix tells the addressing mode: none for
 * implied, immediate and relative, `z` for direct, `m` for extended and `x`
 * for indexed. The same list produces the opcode constants and the
 * OPCODE_LIST the table is built from.
 */
macro_rules! opcodes {
    ( $( $opcode:literal => $mnemonic:ident, $mode:ident, $microcode:ident; )* ) => {
        /// One constant per mnemonic holding its opcode byte.
        #[allow(non_upper_case_globals)]
        pub mod instructions {
            $( pub const $mnemonic: u8 = $opcode; )*
        }

        pub const OPCODE_LIST: &[OpcodeDefinition] = &[
            $(
                OpcodeDefinition {
                    opcode: $opcode,
                    mnemonic: stringify!($mnemonic),
                    addressing_mode: AddressingMode::$mode,
                    microcode: microcode::$microcode,
                },
            )*
        ];
    };
}

opcodes! {
    0x01 => NOP, Implied, nop;
    0x06 => TAP, Implied, tap;
    0x07 => TPA, Implied, tpa;
    0x08 => INX, Implied, inx;
    0x09 => DEX, Implied, dex;
    0x0a => CLV, Implied, clv;
    0x0b => SEV, Implied, sev;
    0x0c => CLC, Implied, clc;
    0x0d => SEC, Implied, sec;
    0x0e => CLI, Implied, cli;
    0x0f => SEI, Implied, sei;
    0x10 => SBA, Implied, sba;
    0x11 => CBA, Implied, cba;
    0x16 => TAB, Implied, tab;
    0x17 => TBA, Implied, tba;
    0x1b => ABA, Implied, aba;
    0x20 => BRA, Relative, bra;
    0x22 => BHI, Relative, bhi;
    0x23 => BLS, Relative, bls;
    0x24 => BCC, Relative, bcc;
    0x25 => BCS, Relative, bcs;
    0x26 => BNE, Relative, bne;
    0x27 => BEQ, Relative, beq;
    0x28 => BVC, Relative, bvc;
    0x29 => BVS, Relative, bvs;
    0x2a => BPL, Relative, bpl;
    0x2b => BMI, Relative, bmi;
    0x2c => BGE, Relative, bge;
    0x2d => BLT, Relative, blt;
    0x2e => BGT, Relative, bgt;
    0x2f => BLE, Relative, ble;
    0x30 => TSX, Implied, tsx;
    0x31 => INS, Implied, ins;
    0x32 => PULA, Implied, pula;
    0x33 => PULB, Implied, pulb;
    0x34 => DES, Implied, des;
    0x35 => TXS, Implied, txs;
    0x36 => PSHA, Implied, psha;
    0x37 => PSHB, Implied, pshb;
    0x39 => RTS, Implied, rts;
    0x40 => NEGA, Implied, nega;
    0x43 => COMA, Implied, coma;
    0x44 => LSRA, Implied, lsra;
    0x46 => RORA, Implied, rora;
    0x47 => ASRA, Implied, asra;
    0x48 => ASLA, Implied, asla;
    0x49 => ROLA, Implied, rola;
    0x4a => DECA, Implied, deca;
    0x4c => INCA, Implied, inca;
    0x4d => TSTA, Implied, tsta;
    0x4f => CLRA, Implied, clra;
    0x50 => NEGB, Implied, negb;
    0x53 => COMB, Implied, comb;
    0x54 => LSRB, Implied, lsrb;
    0x56 => RORB, Implied, rorb;
    0x57 => ASRB, Implied, asrb;
    0x58 => ASLB, Implied, aslb;
    0x59 => ROLB, Implied, rolb;
    0x5a => DECB, Implied, decb;
    0x5c => INCB, Implied, incb;
    0x5d => TSTB, Implied, tstb;
    0x5f => CLRB, Implied, clrb;
    0x6e => JMPx, Indexed, jmp;
    0x6f => CLRx, Indexed, clr;
    0x7e => JMP, Extended, jmp;
    0x7f => CLRm, Extended, clr;
    0x80 => SUBA, Immediate, suba;
    0x81 => CMPA, Immediate, cmpa;
    0x82 => SBCA, Immediate, sbca;
    0x84 => ANDA, Immediate, anda;
    0x85 => BITA, Immediate, bita;
    0x86 => LDAA, Immediate, ldaa;
    0x88 => EORA, Immediate, eora;
    0x89 => ADCA, Immediate, adca;
    0x8a => ORAA, Immediate, oraa;
    0x8b => ADDA, Immediate, adda;
    0x8c => CPX, ImmediateWord, cpx;
    0x8d => BSR, Relative, bsr;
    0x8e => LDS, ImmediateWord, lds;
    0x90 => SUBAz, Direct, suba;
    0x91 => CMPAz, Direct, cmpa;
    0x94 => ANDAz, Direct, anda;
    0x96 => LDAAz, Direct, ldaa;
    0x97 => STAAz, Direct, staa;
    0x9b => ADDAz, Direct, adda;
    0x9c => CPXz, Direct, cpx;
    0x9e => LDSz, Direct, lds;
    0x9f => STSz, Direct, sts;
    0xa0 => SUBAx, Indexed, suba;
    0xa1 => CMPAx, Indexed, cmpa;
    0xa4 => ANDAx, Indexed, anda;
    0xa6 => LDAAx, Indexed, ldaa;
    0xa7 => STAAx, Indexed, staa;
    0xab => ADDAx, Indexed, adda;
    0xac => CPXx, Indexed, cpx;
    0xad => JSRx, Indexed, jsr;
    0xb0 => SUBAm, Extended, suba;
    0xb1 => CMPAm, Extended, cmpa;
    0xb4 => ANDAm, Extended, anda;
    0xb6 => LDAAm, Extended, ldaa;
    0xb7 => STAAm, Extended, staa;
    0xbb => ADDAm, Extended, adda;
    0xbc => CPXm, Extended, cpx;
    0xbd => JSR, Extended, jsr;
    0xbe => LDSm, Extended, lds;
    0xbf => STSm, Extended, sts;
    0xc0 => SUBB, Immediate, subb;
    0xc1 => CMPB, Immediate, cmpb;
    0xc4 => ANDB, Immediate, andb;
    0xc6 => LDAB, Immediate, ldab;
    0xcb => ADDB, Immediate, addb;
    0xce => LDX, ImmediateWord, ldx;
    0xd6 => LDABz, Direct, ldab;
    0xd7 => STABz, Direct, stab;
    0xde => LDXz, Direct, ldx;
    0xdf => STXz, Direct, stx;
    0xe6 => LDABx, Indexed, ldab;
    0xe7 => STABx, Indexed, stab;
    0xee => LDXx, Indexed, ldx;
    0xef => STXx, Indexed, stx;
    0xf6 => LDABm, Extended, ldab;
    0xf7 => STABm, Extended, stab;
    0xfe => LDXm, Extended, ldx;
}

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum OpcodeTableError {
    // ↓ opcode, first mnemonic, second mnemonic
    DuplicateOpcode(u8, &'static str, &'static str),
}

impl fmt::Display for OpcodeTableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            OpcodeTableError::DuplicateOpcode(opcode, first, second) => write!(
                f,
                "opcode ${:02X} is defined twice ({} and {})",
                opcode, first, second
            ),
        }
    }
}

impl error::Error for OpcodeTableError {}

#[derive(Clone, Copy)]
pub struct OpcodeDefinition {
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub addressing_mode: AddressingMode,
    pub microcode: Microcode,
}

impl OpcodeDefinition {
    /// Decoded instruction for this opcode found at `address`.
    pub fn instantiate(&self, address: usize) -> CPUInstruction {
        CPUInstruction::new(
            address,
            self.opcode,
            self.mnemonic,
            self.addressing_mode,
            self.microcode,
        )
    }
}

impl fmt::Debug for OpcodeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OpcodeDefinition [${:02X} {} {}]",
            self.opcode, self.mnemonic, self.addressing_mode
        )
    }
}

/*
 * OpcodeTable
 * 256 slots indexed by the opcode byte, plus the reverse mnemonic map. An
 * empty slot is an illegal opcode.
 */
pub struct OpcodeTable {
    slots: Vec<Option<OpcodeDefinition>>,
    mnemonics: HashMap<&'static str, u8>,
}

impl OpcodeTable {
    pub fn build(list: &[OpcodeDefinition]) -> Result<OpcodeTable, OpcodeTableError> {
        let mut slots: Vec<Option<OpcodeDefinition>> = vec![None; 256];
        let mut mnemonics = HashMap::new();

        for definition in list {
            let slot = &mut slots[definition.opcode as usize];
            if let Some(existing) = slot {
                return Err(OpcodeTableError::DuplicateOpcode(
                    definition.opcode,
                    existing.mnemonic,
                    definition.mnemonic,
                ));
            }
            *slot = Some(*definition);
            mnemonics.insert(definition.mnemonic, definition.opcode);
        }

        Ok(OpcodeTable { slots, mnemonics })
    }

    pub fn get(&self, opcode: u8) -> Option<&OpcodeDefinition> {
        self.slots[opcode as usize].as_ref()
    }

    /// Opcode byte of a mnemonic as written in the constants (`LDAAz`).
    pub fn opcode(&self, mnemonic: &str) -> Option<u8> {
        self.mnemonics.get(mnemonic).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpcodeDefinition> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.mnemonics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mnemonics.is_empty()
    }
}

impl fmt::Debug for OpcodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// The process wide opcode table, built from OPCODE_LIST at first use.
pub fn opcode_table() -> Result<&'static OpcodeTable, OpcodeTableError> {
    static TABLE: OnceLock<Result<OpcodeTable, OpcodeTableError>> = OnceLock::new();

    TABLE
        .get_or_init(|| OpcodeTable::build(OPCODE_LIST))
        .as_ref()
        .map_err(|e| *e)
}
