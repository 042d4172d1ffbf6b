//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC / DEC: Memory (or the accumulator when a host maps an Accumulator-mode opcode)
//! - INX / INY / DEX / DEY: Index registers
//!
//! All wrap at 8 bits and update Z and N from the result.

use crate::opcodes::Instruction;
use crate::{ExecutionError, MemoryBus, CPU};

fn adjust_operand<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
    delta: i8,
) -> Result<(), ExecutionError> {
    let operand = cpu.operand(instruction)?;
    let result = cpu.read(operand).wrapping_add_signed(delta);
    cpu.write(operand, result);
    cpu.set_zn(result);
    Ok(())
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    adjust_operand(cpu, instruction, 1)
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Subtracts one from the value held at a specified memory location,
/// setting the zero and negative flags as appropriate.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    adjust_operand(cpu, instruction, -1)
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.implied(instruction)?;
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
    Ok(())
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.implied(instruction)?;
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
    Ok(())
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.implied(instruction)?;
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
    Ok(())
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.implied(instruction)?;
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
    Ok(())
}
