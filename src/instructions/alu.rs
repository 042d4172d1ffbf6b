//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - BIT: Bit Test
//! - CMP, CPX, CPY: Register comparisons
//!
//! Arithmetic is always binary. The Decimal flag is stored but BCD is not applied.

use crate::opcodes::Instruction;
use crate::{ExecutionError, MemoryBus, CPU};

/// Adds `value` plus carry into the accumulator and updates C, Z, V and N.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.flag_c as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    // Carry flag: Set if result > 255
    cpu.flag_c = result16 > 0xFF;

    // Overflow: both operands share a sign that differs from the result's sign
    cpu.flag_v = ((a ^ result) & (value ^ result) & 0x80) != 0;

    cpu.set_zn(result);
    cpu.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// Flags affected:
/// - C: Set if the unsigned result exceeds 0xFF
/// - Z: Set if the 8-bit result is zero
/// - V: Set if two same-signed operands produce a result of the other sign
/// - N: Bit 7 of the result
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    add_with_carry(cpu, value);
    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes A - M - (1 - C). In binary mode this is exactly ADC of the operand's
/// one's complement, so Carry ends up as the inverted borrow and Overflow is set when
/// operands of different sign produce a result whose sign differs from A.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    add_with_carry(cpu, !value);
    Ok(())
}

/// Executes the AND (Logical AND) instruction. Updates Z and N flags.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    let result = cpu.a & value;
    cpu.set_zn(result);
    cpu.a = result;
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N flags.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    let result = cpu.a | value;
    cpu.set_zn(result);
    cpu.a = result;
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N flags.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    let result = cpu.a ^ value;
    cpu.set_zn(result);
    cpu.a = result;
    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// ANDs the operand with the accumulator without storing the result.
///
/// Flags affected:
/// - Z: Set if A & M is zero
/// - V: Bit 6 of the operand
/// - N: Bit 7 of the operand
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    cpu.flag_z = (cpu.a & value) == 0;
    cpu.flag_v = (value & 0x40) != 0;
    cpu.flag_n = (value & 0x80) != 0;
    Ok(())
}

/// Shared comparison: register - operand, result discarded.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.flag_c = register >= value;
    cpu.set_zn(result);
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Flags affected:
/// - C: Set if A >= M
/// - Z: Set if A == M
/// - N: Bit 7 of A - M
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    let register = cpu.a;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    let register = cpu.x;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_value(instruction)?;
    let register = cpu.y;
    compare(cpu, register, value);
    Ok(())
}
