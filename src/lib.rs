//! # 6502 CPU Core
//!
//! A clock-driven NMOS 6502 processor model meant to be embedded in a larger machine
//! emulator (console, home computer, trainer board).
//!
//! The host hands the processor a 64KB memory bus at construction and then drives it one
//! clock pulse at a time. Interrupts are explicit calls made by the host between pulses.
//!
//! ## Quick Start
//!
//! ```rust
//! use cycle6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! memory.write(0xFFFC, 0xEF); // Reset vector low byte
//! memory.write(0xFFFD, 0xBE); // Reset vector high byte
//! memory.write(0xBEEF, 0xE8); // INX
//!
//! // Construction performs a reset, loading PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0xBEEF);
//!
//! // INX takes two pulses: the fetch/execute pulse and one countdown pulse
//! cpu.clock().unwrap();
//! cpu.clock().unwrap();
//! assert_eq!(cpu.x(), 0x01);
//! assert_eq!(cpu.cycles(), 2);
//! ```
//!
//! ## Borrowing host memory
//!
//! A host that owns its own memory map passes a mutable reference instead of a value:
//!
//! ```rust
//! use cycle6502::{CPU, MEMORY_SIZE};
//!
//! let mut ram = Box::new([0u8; MEMORY_SIZE]);
//! ram[0xFFFC] = 0x00;
//! ram[0xFFFD] = 0x02;
//! ram[0x0200] = 0xA9; // LDA #$42
//! ram[0x0201] = 0x42;
//!
//! {
//!     let mut cpu = CPU::new(&mut *ram);
//!     cpu.step().unwrap();
//!     assert_eq!(cpu.a(), 0x42);
//! }
//!
//! // The host still owns the buffer once the processor is gone
//! assert_eq!(ram[0x0201], 0x42);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - processor state and the execution engine
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - instruction descriptors and the per-processor instruction table
//! - `addressing` - addressing modes and effective-address resolution
//! - `config` - construction-time behavior switches

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Operation handlers (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use addressing::{AddressingMode, Operand};
pub use config::CpuConfig;
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{Instruction, InstructionTable, Mnemonic};

/// Errors that can occur during CPU execution.
///
/// Both variants describe a defect in how the host configured the instruction table.
/// Arithmetic and address wraparound is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched opcode has no entry in the instruction table.
    #[error("opcode 0x{opcode:02X} at ${address:04X} has no instruction table entry")]
    UnknownOpcode {
        /// The opcode byte that was fetched.
        opcode: u8,
        /// Address the opcode was fetched from.
        address: u16,
    },

    /// The descriptor pairs a mnemonic with an addressing mode its handler cannot use.
    #[error("opcode 0x{opcode:02X} ({mnemonic}) cannot execute with addressing mode {mode:?}")]
    InvalidAddressingMode {
        /// Opcode of the offending table entry.
        opcode: u8,
        /// Operation the entry names.
        mnemonic: Mnemonic,
        /// Addressing mode the entry carries, `None` for implied.
        mode: Option<AddressingMode>,
    },
}

impl ExecutionError {
    pub(crate) fn invalid_mode(instruction: &Instruction) -> Self {
        ExecutionError::InvalidAddressingMode {
            opcode: instruction.opcode,
            mnemonic: instruction.mnemonic,
            mode: instruction.mode,
        }
    }
}
