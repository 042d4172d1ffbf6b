//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation
//!
//! BRK is a software interrupt that:
//! 1. Pushes the BRK address + 2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B set
//! 3. Sets the B and I flags
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::cpu::{FLAG_B, FLAG_RESERVED, IRQ_VECTOR};
use crate::opcodes::Instruction;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// Flags affected: None
///
/// Note: The Indirect addressing mode has a hardware bug in the original 6502:
/// If the low byte of the indirect address is 0xFF, the high byte is read from
/// the same page (wraps within page) instead of crossing to the next page.
/// For example, JMP ($10FF) reads from $10FF and $1000 (not $1100).
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.pc = cpu.effective_address(instruction)?;
    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return address - 1),
/// high byte first, then jumps to the target.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    let target = cpu.effective_address(instruction)?;
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = target;
    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte, then high byte) and adds one.
pub(crate) fn execute_rts<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.implied(instruction)?;
    cpu.pc = cpu.pull_word().wrapping_add(1);
    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte, then the program counter. Unlike RTS, the pulled address is
/// used as-is.
pub(crate) fn execute_rti<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.implied(instruction)?;
    let status = cpu.pull();
    cpu.set_status(status);
    cpu.pc = cpu.pull_word();
    Ok(())
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// The pushed return address skips the padding byte that follows the BRK opcode, so
/// RTI resumes at BRK + 2.
///
/// Flags affected:
/// - B: Set (and set in the pushed status byte)
/// - I: Set
pub(crate) fn execute_brk<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    cpu.implied(instruction)?;
    // PC already points one past the opcode
    let return_address = cpu.pc.wrapping_add(1);
    cpu.push_word(return_address);

    let status = cpu.status() | FLAG_B | FLAG_RESERVED;
    cpu.push(status);

    cpu.flag_b = true;
    cpu.flag_i = true;

    cpu.pc = cpu.memory.read_word(IRQ_VECTOR);
    Ok(())
}

/// Executes the NOP (No Operation) instruction.
///
/// Host-registered NOPs with an addressing mode consume (and read) their operand bytes,
/// matching the multi-byte undocumented NOPs of the NMOS part.
pub(crate) fn execute_nop<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    if instruction.mode.is_some() {
        cpu.operand_value(instruction)?;
    }
    Ok(())
}
