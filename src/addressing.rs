//! # Addressing Modes
//!
//! This module defines the addressing modes of the 6502 and the resolvers that turn
//! operand bytes into an effective address.
//!
//! Resolvers consume operand bytes through the CPU's fetch-and-advance primitive, so the
//! program counter always ends up pointing at the next instruction once an operand has
//! been resolved. Implied addressing has no resolver: an instruction descriptor without
//! an addressing mode never fetches operand bytes.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Resolves to the address of the operand byte itself, so the handler reads it
    /// like any other memory operand.
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ZeroPageY,

    /// Signed 8-bit offset from the address following the instruction. Branches only.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X register (16-bit wraparound).
    AbsoluteX,

    /// 16-bit address indexed by Y register (16-bit wraparound).
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Reproduces the NMOS page-wrap defect: JMP ($10FF) reads its target from
    /// $10FF and $1000, not $1100.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Where an instruction's operand lives once its addressing mode has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Effective memory address.
    Address(u16),

    /// The accumulator register.
    Accumulator,
}

/// Reads a 16-bit pointer stored in the zero page. The high byte wraps within page zero.
fn zero_page_pointer<M: MemoryBus>(cpu: &CPU<M>, zp: u8) -> u16 {
    let lo = cpu.memory.read(zp as u16) as u16;
    let hi = cpu.memory.read(zp.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Fetches a little-endian 16-bit operand.
fn fetch_word<M: MemoryBus>(cpu: &mut CPU<M>) -> u16 {
    let lo = cpu.fetch() as u16;
    let hi = cpu.fetch() as u16;
    (hi << 8) | lo
}

/// Resolves `mode` into an operand, consuming its operand bytes.
pub(crate) fn resolve<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> Operand {
    let addr = match mode {
        AddressingMode::Accumulator => return Operand::Accumulator,
        AddressingMode::Immediate => {
            let addr = cpu.pc;
            cpu.pc = cpu.pc.wrapping_add(1);
            addr
        }
        AddressingMode::ZeroPage => cpu.fetch() as u16,
        AddressingMode::ZeroPageX => cpu.fetch().wrapping_add(cpu.x) as u16,
        AddressingMode::ZeroPageY => cpu.fetch().wrapping_add(cpu.y) as u16,
        AddressingMode::Relative => {
            let offset = cpu.fetch() as i8;
            cpu.pc.wrapping_add_signed(offset as i16)
        }
        AddressingMode::Absolute => fetch_word(cpu),
        AddressingMode::AbsoluteX => fetch_word(cpu).wrapping_add(cpu.x as u16),
        AddressingMode::AbsoluteY => fetch_word(cpu).wrapping_add(cpu.y as u16),
        AddressingMode::Indirect => {
            let ptr = fetch_word(cpu);
            let lo = cpu.memory.read(ptr) as u16;
            // High byte never carries into the next page
            let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
            let hi = cpu.memory.read(hi_addr) as u16;
            (hi << 8) | lo
        }
        AddressingMode::IndirectX => {
            let zp = cpu.fetch().wrapping_add(cpu.x);
            zero_page_pointer(cpu, zp)
        }
        AddressingMode::IndirectY => {
            let zp = cpu.fetch();
            zero_page_pointer(cpu, zp).wrapping_add(cpu.y as u16)
        }
    };

    Operand::Address(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu(operands: &[u8]) -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x80);
        memory.load(0x8000, operands);
        CPU::new(memory)
    }

    #[test]
    fn test_operand_byte_counts() {
        assert_eq!(AddressingMode::Accumulator.operand_bytes(), 0);
        assert_eq!(AddressingMode::Immediate.operand_bytes(), 1);
        assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::Absolute.operand_bytes(), 2);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    }

    #[test]
    fn test_immediate_points_at_operand_byte() {
        let mut cpu = setup_cpu(&[0x42]);
        assert_eq!(
            resolve(&mut cpu, AddressingMode::Immediate),
            Operand::Address(0x8000)
        );
        assert_eq!(cpu.pc, 0x8001);
    }

    #[test]
    fn test_accumulator_consumes_nothing() {
        let mut cpu = setup_cpu(&[]);
        assert_eq!(
            resolve(&mut cpu, AddressingMode::Accumulator),
            Operand::Accumulator
        );
        assert_eq!(cpu.pc, 0x8000);
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut cpu = setup_cpu(&[0xF0]);
        cpu.x = 0x20;
        assert_eq!(
            resolve(&mut cpu, AddressingMode::ZeroPageX),
            Operand::Address(0x0010)
        );
    }

    #[test]
    fn test_absolute_y_wraps_16_bit() {
        let mut cpu = setup_cpu(&[0xFF, 0xFF]);
        cpu.y = 0x02;
        assert_eq!(
            resolve(&mut cpu, AddressingMode::AbsoluteY),
            Operand::Address(0x0001)
        );
        assert_eq!(cpu.pc, 0x8002);
    }

    #[test]
    fn test_relative_negative_offset() {
        let mut cpu = setup_cpu(&[0xFE]);
        // PC is 0x8001 after fetching the offset; -2 lands on 0x7FFF
        assert_eq!(
            resolve(&mut cpu, AddressingMode::Relative),
            Operand::Address(0x7FFF)
        );
    }

    #[test]
    fn test_indirect_page_wrap_defect() {
        let mut cpu = setup_cpu(&[0xFF, 0x30]);
        cpu.memory.write(0x30FF, 0x80);
        cpu.memory.write(0x3000, 0x50);
        cpu.memory.write(0x3100, 0x40);
        assert_eq!(
            resolve(&mut cpu, AddressingMode::Indirect),
            Operand::Address(0x5080)
        );
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut cpu = setup_cpu(&[0xFE]);
        cpu.x = 0x01;
        cpu.memory.write(0x00FF, 0x34);
        cpu.memory.write(0x0000, 0x12);
        assert_eq!(
            resolve(&mut cpu, AddressingMode::IndirectX),
            Operand::Address(0x1234)
        );
    }

    #[test]
    fn test_indirect_y_adds_after_dereference() {
        let mut cpu = setup_cpu(&[0x40]);
        cpu.y = 0x10;
        cpu.memory.write(0x0040, 0xF8);
        cpu.memory.write(0x0041, 0x20);
        assert_eq!(
            resolve(&mut cpu, AddressingMode::IndirectY),
            Operand::Address(0x2108)
        );
    }
}
