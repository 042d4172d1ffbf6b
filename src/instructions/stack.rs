//! # Stack Instructions
//!
//! This module implements stack operations:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The stack lives in page 1 ($0100-$01FF) and grows downward. A push writes at
//! $0100 + SP and then decrements SP; a pull increments SP and then reads. SP wraps
//! within the page in both directions.

use crate::cpu::{FLAG_B, FLAG_RESERVED};
use crate::opcodes::Instruction;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn execute_pha<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.implied(instruction)?;
    let value = cpu.a;
    cpu.push(value);
    Ok(())
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B (bit 4) and bit 5 set, regardless of the live flags.
pub(crate) fn execute_php<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.implied(instruction)?;
    let status = cpu.status() | FLAG_B | FLAG_RESERVED;
    cpu.push(status);
    Ok(())
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags affected:
/// - Z: Set if the pulled value is zero
/// - N: Bit 7 of the pulled value
pub(crate) fn execute_pla<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.implied(instruction)?;
    let value = cpu.pull();
    cpu.a = value;
    cpu.set_zn(value);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// All eight bits of the pulled byte are restored, including B and the reserved bit.
pub(crate) fn execute_plp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.implied(instruction)?;
    let status = cpu.pull();
    cpu.set_status(status);
    Ok(())
}
