//! # Instruction Table
//!
//! Every opcode the CPU can execute is described by an [`Instruction`]: its opcode byte,
//! base cycle cost, the operation it performs and the addressing mode used to find its
//! operand (`None` for implied addressing).
//!
//! Each `CPU` owns an [`InstructionTable`] filled with the 151 documented NMOS opcodes at
//! construction. The table is per-instance and mutable, so a host can register
//! undocumented opcodes or override entries before (or between) clock pulses.
//!
//! ```
//! use cycle6502::{CPU, FlatMemory, Instruction, Mnemonic};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//!
//! // 0x1A is an undocumented single-byte NOP on NMOS parts
//! assert!(cpu.instructions().get(0x1A).is_none());
//! cpu.instructions_mut().insert(Instruction::implied(0x1A, Mnemonic::NOP, 2));
//! assert_eq!(cpu.instructions().get(0x1A).unwrap().mnemonic, Mnemonic::NOP);
//! ```

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;

/// The documented 6502 operations.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /* loads and stores */
    LDA,
    LDX,
    LDY,
    STA,
    STX,
    STY,

    /* register transfers */
    TAX,
    TAY,
    TSX,
    TXA,
    TXS,
    TYA,

    /* logic */
    AND,
    EOR,
    ORA,
    BIT,

    /* arithmetic */
    ADC,
    SBC,
    CMP,
    CPX,
    CPY,

    /* increments and decrements */
    INC,
    INX,
    INY,
    DEC,
    DEX,
    DEY,

    /* shifts and rotates */
    ASL,
    LSR,
    ROL,
    ROR,

    /* jumps and calls */
    JMP,
    JSR,
    RTS,

    /* branches */
    BCC,
    BCS,
    BEQ,
    BMI,
    BNE,
    BPL,
    BVC,
    BVS,

    /* stack */
    PHA,
    PHP,
    PLA,
    PLP,

    /* status flag changes */
    CLC,
    CLD,
    CLI,
    CLV,
    SEC,
    SED,
    SEI,

    /* system */
    BRK,
    NOP,
    RTI,
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Immutable descriptor for a single opcode.
///
/// # Examples
///
/// ```
/// use cycle6502::{AddressingMode, Instruction, InstructionTable, Mnemonic};
///
/// let table = InstructionTable::documented();
/// let lda_imm = table.get(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda_imm.mode, Some(AddressingMode::Immediate));
/// assert_eq!(lda_imm.cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Opcode byte this descriptor is registered under.
    pub opcode: u8,

    /// Operation performed.
    pub mnemonic: Mnemonic,

    /// Operand addressing mode; `None` means implied addressing.
    pub mode: Option<AddressingMode>,

    /// Base cycle cost. Page-crossing and branch-taken penalties are not modeled.
    pub cycles: u8,
}

impl Instruction {
    /// Creates a descriptor with an addressing mode.
    pub const fn new(opcode: u8, mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> Self {
        Self {
            opcode,
            mnemonic,
            mode: Some(mode),
            cycles,
        }
    }

    /// Creates a descriptor with implied addressing.
    pub const fn implied(opcode: u8, mnemonic: Mnemonic, cycles: u8) -> Self {
        Self {
            opcode,
            mnemonic,
            mode: None,
            cycles,
        }
    }

    /// Total instruction size in bytes (opcode + operands).
    pub fn size_bytes(&self) -> u8 {
        1 + self.mode.map_or(0, AddressingMode::operand_bytes)
    }
}

/// Per-processor mapping from opcode byte to descriptor.
///
/// Slots without an entry are unpopulated; fetching such an opcode is a configuration
/// error reported by the CPU rather than being treated as a NOP.
#[derive(Debug, Clone)]
pub struct InstructionTable {
    slots: [Option<Instruction>; 256],
}

impl InstructionTable {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self { slots: [None; 256] }
    }

    /// Creates a table holding every documented NMOS 6502 opcode.
    pub fn documented() -> Self {
        let mut table = Self::empty();
        for instruction in DOCUMENTED_OPCODES.iter() {
            table.slots[instruction.opcode as usize] = Some(*instruction);
        }
        table
    }

    /// Looks up the descriptor for `opcode`.
    pub fn get(&self, opcode: u8) -> Option<&Instruction> {
        self.slots[opcode as usize].as_ref()
    }

    /// Registers `instruction` under its opcode, returning the entry it replaced.
    pub fn insert(&mut self, instruction: Instruction) -> Option<Instruction> {
        let previous = self.slots[instruction.opcode as usize].replace(instruction);
        if let Some(old) = previous {
            log::debug!(
                "opcode 0x{:02X} overridden: {} -> {}",
                instruction.opcode,
                old.mnemonic,
                instruction.mnemonic
            );
        }
        previous
    }

    /// Clears the slot for `opcode`, returning its entry.
    pub fn remove(&mut self, opcode: u8) -> Option<Instruction> {
        self.slots[opcode as usize].take()
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns true if no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterates over populated entries in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.slots.iter().flatten()
    }
}

impl Default for InstructionTable {
    fn default() -> Self {
        Self::documented()
    }
}

use Mnemonic::*;

/// The 151 documented NMOS 6502 opcodes.
pub const DOCUMENTED_OPCODES: [Instruction; 151] = [
    // ADC
    Instruction::new(0x69, ADC, Immediate, 2),
    Instruction::new(0x65, ADC, ZeroPage, 3),
    Instruction::new(0x75, ADC, ZeroPageX, 4),
    Instruction::new(0x6D, ADC, Absolute, 4),
    Instruction::new(0x7D, ADC, AbsoluteX, 4),
    Instruction::new(0x79, ADC, AbsoluteY, 4),
    Instruction::new(0x61, ADC, IndirectX, 6),
    Instruction::new(0x71, ADC, IndirectY, 5),
    // AND
    Instruction::new(0x29, AND, Immediate, 2),
    Instruction::new(0x25, AND, ZeroPage, 3),
    Instruction::new(0x35, AND, ZeroPageX, 4),
    Instruction::new(0x2D, AND, Absolute, 4),
    Instruction::new(0x3D, AND, AbsoluteX, 4),
    Instruction::new(0x39, AND, AbsoluteY, 4),
    Instruction::new(0x21, AND, IndirectX, 6),
    Instruction::new(0x31, AND, IndirectY, 5),
    // ASL
    Instruction::new(0x0A, ASL, Accumulator, 2),
    Instruction::new(0x06, ASL, ZeroPage, 5),
    Instruction::new(0x16, ASL, ZeroPageX, 6),
    Instruction::new(0x0E, ASL, Absolute, 6),
    Instruction::new(0x1E, ASL, AbsoluteX, 7),
    // Branches
    Instruction::new(0x90, BCC, Relative, 2),
    Instruction::new(0xB0, BCS, Relative, 2),
    Instruction::new(0xF0, BEQ, Relative, 2),
    Instruction::new(0x30, BMI, Relative, 2),
    Instruction::new(0xD0, BNE, Relative, 2),
    Instruction::new(0x10, BPL, Relative, 2),
    Instruction::new(0x50, BVC, Relative, 2),
    Instruction::new(0x70, BVS, Relative, 2),
    // BIT
    Instruction::new(0x24, BIT, ZeroPage, 3),
    Instruction::new(0x2C, BIT, Absolute, 4),
    // BRK
    Instruction::implied(0x00, BRK, 7),
    // Flag clears
    Instruction::implied(0x18, CLC, 2),
    Instruction::implied(0xD8, CLD, 2),
    Instruction::implied(0x58, CLI, 2),
    Instruction::implied(0xB8, CLV, 2),
    // CMP
    Instruction::new(0xC9, CMP, Immediate, 2),
    Instruction::new(0xC5, CMP, ZeroPage, 3),
    Instruction::new(0xD5, CMP, ZeroPageX, 4),
    Instruction::new(0xCD, CMP, Absolute, 4),
    Instruction::new(0xDD, CMP, AbsoluteX, 4),
    Instruction::new(0xD9, CMP, AbsoluteY, 4),
    Instruction::new(0xC1, CMP, IndirectX, 6),
    Instruction::new(0xD1, CMP, IndirectY, 5),
    // CPX
    Instruction::new(0xE0, CPX, Immediate, 2),
    Instruction::new(0xE4, CPX, ZeroPage, 3),
    Instruction::new(0xEC, CPX, Absolute, 4),
    // CPY
    Instruction::new(0xC0, CPY, Immediate, 2),
    Instruction::new(0xC4, CPY, ZeroPage, 3),
    Instruction::new(0xCC, CPY, Absolute, 4),
    // DEC
    Instruction::new(0xC6, DEC, ZeroPage, 5),
    Instruction::new(0xD6, DEC, ZeroPageX, 6),
    Instruction::new(0xCE, DEC, Absolute, 6),
    Instruction::new(0xDE, DEC, AbsoluteX, 7),
    // DEX / DEY
    Instruction::implied(0xCA, DEX, 2),
    Instruction::implied(0x88, DEY, 2),
    // EOR
    Instruction::new(0x49, EOR, Immediate, 2),
    Instruction::new(0x45, EOR, ZeroPage, 3),
    Instruction::new(0x55, EOR, ZeroPageX, 4),
    Instruction::new(0x4D, EOR, Absolute, 4),
    Instruction::new(0x5D, EOR, AbsoluteX, 4),
    Instruction::new(0x59, EOR, AbsoluteY, 4),
    Instruction::new(0x41, EOR, IndirectX, 6),
    Instruction::new(0x51, EOR, IndirectY, 5),
    // INC
    Instruction::new(0xE6, INC, ZeroPage, 5),
    Instruction::new(0xF6, INC, ZeroPageX, 6),
    Instruction::new(0xEE, INC, Absolute, 6),
    Instruction::new(0xFE, INC, AbsoluteX, 7),
    // INX / INY
    Instruction::implied(0xE8, INX, 2),
    Instruction::implied(0xC8, INY, 2),
    // JMP / JSR
    Instruction::new(0x4C, JMP, Absolute, 3),
    Instruction::new(0x6C, JMP, Indirect, 5),
    Instruction::new(0x20, JSR, Absolute, 6),
    // LDA
    Instruction::new(0xA9, LDA, Immediate, 2),
    Instruction::new(0xA5, LDA, ZeroPage, 3),
    Instruction::new(0xB5, LDA, ZeroPageX, 4),
    Instruction::new(0xAD, LDA, Absolute, 4),
    Instruction::new(0xBD, LDA, AbsoluteX, 4),
    Instruction::new(0xB9, LDA, AbsoluteY, 4),
    Instruction::new(0xA1, LDA, IndirectX, 6),
    Instruction::new(0xB1, LDA, IndirectY, 5),
    // LDX
    Instruction::new(0xA2, LDX, Immediate, 2),
    Instruction::new(0xA6, LDX, ZeroPage, 3),
    Instruction::new(0xB6, LDX, ZeroPageY, 4),
    Instruction::new(0xAE, LDX, Absolute, 4),
    Instruction::new(0xBE, LDX, AbsoluteY, 4),
    // LDY
    Instruction::new(0xA0, LDY, Immediate, 2),
    Instruction::new(0xA4, LDY, ZeroPage, 3),
    Instruction::new(0xB4, LDY, ZeroPageX, 4),
    Instruction::new(0xAC, LDY, Absolute, 4),
    Instruction::new(0xBC, LDY, AbsoluteX, 4),
    // LSR
    Instruction::new(0x4A, LSR, Accumulator, 2),
    Instruction::new(0x46, LSR, ZeroPage, 5),
    Instruction::new(0x56, LSR, ZeroPageX, 6),
    Instruction::new(0x4E, LSR, Absolute, 6),
    Instruction::new(0x5E, LSR, AbsoluteX, 7),
    // NOP
    Instruction::implied(0xEA, NOP, 2),
    // ORA
    Instruction::new(0x09, ORA, Immediate, 2),
    Instruction::new(0x05, ORA, ZeroPage, 3),
    Instruction::new(0x15, ORA, ZeroPageX, 4),
    Instruction::new(0x0D, ORA, Absolute, 4),
    Instruction::new(0x1D, ORA, AbsoluteX, 4),
    Instruction::new(0x19, ORA, AbsoluteY, 4),
    Instruction::new(0x01, ORA, IndirectX, 6),
    Instruction::new(0x11, ORA, IndirectY, 5),
    // Stack
    Instruction::implied(0x48, PHA, 3),
    Instruction::implied(0x08, PHP, 3),
    Instruction::implied(0x68, PLA, 4),
    Instruction::implied(0x28, PLP, 4),
    // ROL
    Instruction::new(0x2A, ROL, Accumulator, 2),
    Instruction::new(0x26, ROL, ZeroPage, 5),
    Instruction::new(0x36, ROL, ZeroPageX, 6),
    Instruction::new(0x2E, ROL, Absolute, 6),
    Instruction::new(0x3E, ROL, AbsoluteX, 7),
    // ROR
    Instruction::new(0x6A, ROR, Accumulator, 2),
    Instruction::new(0x66, ROR, ZeroPage, 5),
    Instruction::new(0x76, ROR, ZeroPageX, 6),
    Instruction::new(0x6E, ROR, Absolute, 6),
    Instruction::new(0x7E, ROR, AbsoluteX, 7),
    // RTI / RTS
    Instruction::implied(0x40, RTI, 6),
    Instruction::implied(0x60, RTS, 6),
    // SBC
    Instruction::new(0xE9, SBC, Immediate, 2),
    Instruction::new(0xE5, SBC, ZeroPage, 3),
    Instruction::new(0xF5, SBC, ZeroPageX, 4),
    Instruction::new(0xED, SBC, Absolute, 4),
    Instruction::new(0xFD, SBC, AbsoluteX, 4),
    Instruction::new(0xF9, SBC, AbsoluteY, 4),
    Instruction::new(0xE1, SBC, IndirectX, 6),
    Instruction::new(0xF1, SBC, IndirectY, 5),
    // Flag sets
    Instruction::implied(0x38, SEC, 2),
    Instruction::implied(0xF8, SED, 2),
    Instruction::implied(0x78, SEI, 2),
    // STA
    Instruction::new(0x85, STA, ZeroPage, 3),
    Instruction::new(0x95, STA, ZeroPageX, 4),
    Instruction::new(0x8D, STA, Absolute, 4),
    Instruction::new(0x9D, STA, AbsoluteX, 5),
    Instruction::new(0x99, STA, AbsoluteY, 5),
    Instruction::new(0x81, STA, IndirectX, 6),
    Instruction::new(0x91, STA, IndirectY, 6),
    // STX
    Instruction::new(0x86, STX, ZeroPage, 3),
    Instruction::new(0x96, STX, ZeroPageY, 4),
    Instruction::new(0x8E, STX, Absolute, 4),
    // STY
    Instruction::new(0x84, STY, ZeroPage, 3),
    Instruction::new(0x94, STY, ZeroPageX, 4),
    Instruction::new(0x8C, STY, Absolute, 4),
    // Transfers
    Instruction::implied(0xAA, TAX, 2),
    Instruction::implied(0xA8, TAY, 2),
    Instruction::implied(0xBA, TSX, 2),
    Instruction::implied(0x8A, TXA, 2),
    Instruction::implied(0x9A, TXS, 2),
    Instruction::implied(0x98, TYA, 2),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_documented_table_has_151_unique_opcodes() {
        let unique: HashSet<u8> = DOCUMENTED_OPCODES.iter().map(|i| i.opcode).collect();
        assert_eq!(unique.len(), 151);
        assert_eq!(InstructionTable::documented().len(), 151);
    }

    #[test]
    fn test_documented_table_covers_56_mnemonics() {
        let mnemonics: HashSet<Mnemonic> = DOCUMENTED_OPCODES.iter().map(|i| i.mnemonic).collect();
        assert_eq!(mnemonics.len(), 56);
    }

    #[test]
    fn test_cycle_costs_in_range() {
        for instruction in DOCUMENTED_OPCODES.iter() {
            assert!(
                (2..=7).contains(&instruction.cycles),
                "0x{:02X} has {} cycles",
                instruction.opcode,
                instruction.cycles
            );
        }
    }

    #[test]
    fn test_sizes() {
        let table = InstructionTable::documented();
        assert_eq!(table.get(0x00).unwrap().size_bytes(), 1); // BRK
        assert_eq!(table.get(0x0A).unwrap().size_bytes(), 1); // ASL A
        assert_eq!(table.get(0xD0).unwrap().size_bytes(), 2); // BNE
        assert_eq!(table.get(0x6C).unwrap().size_bytes(), 3); // JMP ()
    }

    #[test]
    fn test_insert_and_remove() {
        let mut table = InstructionTable::empty();
        assert!(table.is_empty());

        assert_eq!(table.insert(Instruction::implied(0x02, NOP, 2)), None);
        let replaced = table.insert(Instruction::implied(0x02, CLC, 2));
        assert_eq!(replaced.map(|i| i.mnemonic), Some(NOP));
        assert_eq!(table.len(), 1);

        assert_eq!(table.remove(0x02).map(|i| i.mnemonic), Some(CLC));
        assert!(table.get(0x02).is_none());
    }

    #[test]
    fn test_undocumented_slots_empty() {
        let table = InstructionTable::documented();
        for opcode in [0x02u8, 0x03, 0x1A, 0x80, 0xFF] {
            assert!(table.get(opcode).is_none(), "0x{:02X} populated", opcode);
        }
    }

    #[test]
    fn test_mnemonic_display() {
        assert_eq!(ADC.to_string(), "ADC");
        assert_eq!(format!("{}", TXS), "TXS");
    }
}
