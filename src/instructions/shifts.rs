//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator (Accumulator addressing) or read-modify-writes a
//! memory cell. Carry receives the bit shifted out; Z and N follow the result.

use crate::opcodes::Instruction;
use crate::{ExecutionError, MemoryBus, CPU};

/// Reads the operand, applies `shift` and writes the result back.
///
/// `shift` receives the operand and the incoming carry, and returns the result and the
/// outgoing carry.
fn read_modify_write<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
    shift: impl FnOnce(u8, bool) -> (u8, bool),
) -> Result<(), ExecutionError> {
    let operand = cpu.operand(instruction)?;
    let value = cpu.read(operand);

    let (result, carry_out) = shift(value, cpu.flag_c);

    cpu.write(operand, result);
    cpu.flag_c = carry_out;
    cpu.set_zn(result);
    Ok(())
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, instruction, |value, _| {
        (value << 1, value & 0x80 != 0)
    })
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, instruction, |value, _| {
        (value >> 1, value & 0x01 != 0)
    })
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, instruction, |value, carry_in| {
        ((value << 1) | carry_in as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, instruction, |value, carry_in| {
        ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0)
    })
}
