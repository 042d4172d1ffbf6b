//! # Load and Store Instructions
//!
//! This module implements the register load and store operations:
//! - LDA, LDX, LDY: Load a register from memory, updating Z and N
//! - STA, STX, STY: Store a register to memory
//!
//! Stores leave every flag untouched unless the CPU was built with
//! `CpuConfig::store_affects_flags`, in which case Z and N follow the stored value.

use crate::opcodes::Instruction;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Flags affected:
/// - Z: Set if the loaded value is zero
/// - N: Bit 7 of the loaded value
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    cpu.a = value;
    cpu.set_zn(value);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    cpu.x = value;
    cpu.set_zn(value);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    cpu.y = value;
    cpu.set_zn(value);
    Ok(())
}

fn store<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
    value: u8,
) -> Result<(), ExecutionError> {
    let operand = cpu.operand(instruction)?;
    cpu.write(operand, value);
    if cpu.config.store_affects_flags {
        cpu.set_zn(value);
    }
    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.a;
    store(cpu, instruction, value)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.x;
    store(cpu, instruction, value)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.y;
    store(cpu, instruction, value)
}
