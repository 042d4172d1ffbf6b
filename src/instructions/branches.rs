//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch on Carry Clear / Set
//! - BNE / BEQ: Branch on Zero Clear / Set
//! - BPL / BMI: Branch on Negative Clear / Set
//! - BVC / BVS: Branch on Overflow Clear / Set
//!
//! All branches use relative addressing with a signed 8-bit offset measured from the
//! address following the two-byte instruction. The offset byte is consumed whether or
//! not the branch is taken. No flags are affected, and only the base cycle cost is
//! charged.

use crate::opcodes::Instruction;
use crate::{ExecutionError, MemoryBus, CPU};

/// Resolves the branch target and jumps to it if `condition` holds.
fn branch_if<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
    condition: bool,
) -> Result<(), ExecutionError> {
    let target = cpu.effective_address(instruction)?;
    if condition {
        cpu.pc = target;
    }
    Ok(())
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let condition = !cpu.flag_c;
    branch_if(cpu, instruction, condition)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let condition = cpu.flag_c;
    branch_if(cpu, instruction, condition)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let condition = cpu.flag_z;
    branch_if(cpu, instruction, condition)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let condition = !cpu.flag_z;
    branch_if(cpu, instruction, condition)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let condition = cpu.flag_n;
    branch_if(cpu, instruction, condition)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let condition = !cpu.flag_n;
    branch_if(cpu, instruction, condition)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let condition = !cpu.flag_v;
    branch_if(cpu, instruction, condition)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let condition = cpu.flag_v;
    branch_if(cpu, instruction, condition)
}
