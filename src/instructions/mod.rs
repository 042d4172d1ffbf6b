//! # 6502 Instruction Implementations
//!
//! This module contains the operation handlers for all 56 documented mnemonics, organized
//! by category. Each handler is a standalone function taking the CPU and the decoded
//! instruction descriptor; handlers that need an operand resolve it through the
//! descriptor's addressing mode.
//!
//! Handlers never touch the cycle counter: the execution engine loads the countdown from
//! the descriptor before the handler runs.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::opcodes::{Instruction, Mnemonic};
use crate::{ExecutionError, MemoryBus, CPU};

/// Runs the handler for `instruction.mnemonic`.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: &Instruction,
) -> Result<(), ExecutionError> {
    match instruction.mnemonic {
        Mnemonic::ADC => alu::execute_adc(cpu, instruction),
        Mnemonic::SBC => alu::execute_sbc(cpu, instruction),
        Mnemonic::AND => alu::execute_and(cpu, instruction),
        Mnemonic::ORA => alu::execute_ora(cpu, instruction),
        Mnemonic::EOR => alu::execute_eor(cpu, instruction),
        Mnemonic::BIT => alu::execute_bit(cpu, instruction),
        Mnemonic::CMP => alu::execute_cmp(cpu, instruction),
        Mnemonic::CPX => alu::execute_cpx(cpu, instruction),
        Mnemonic::CPY => alu::execute_cpy(cpu, instruction),

        Mnemonic::BCC => branches::execute_bcc(cpu, instruction),
        Mnemonic::BCS => branches::execute_bcs(cpu, instruction),
        Mnemonic::BEQ => branches::execute_beq(cpu, instruction),
        Mnemonic::BNE => branches::execute_bne(cpu, instruction),
        Mnemonic::BMI => branches::execute_bmi(cpu, instruction),
        Mnemonic::BPL => branches::execute_bpl(cpu, instruction),
        Mnemonic::BVC => branches::execute_bvc(cpu, instruction),
        Mnemonic::BVS => branches::execute_bvs(cpu, instruction),

        Mnemonic::ASL => shifts::execute_asl(cpu, instruction),
        Mnemonic::LSR => shifts::execute_lsr(cpu, instruction),
        Mnemonic::ROL => shifts::execute_rol(cpu, instruction),
        Mnemonic::ROR => shifts::execute_ror(cpu, instruction),

        Mnemonic::LDA => load_store::execute_lda(cpu, instruction),
        Mnemonic::LDX => load_store::execute_ldx(cpu, instruction),
        Mnemonic::LDY => load_store::execute_ldy(cpu, instruction),
        Mnemonic::STA => load_store::execute_sta(cpu, instruction),
        Mnemonic::STX => load_store::execute_stx(cpu, instruction),
        Mnemonic::STY => load_store::execute_sty(cpu, instruction),

        Mnemonic::INC => inc_dec::execute_inc(cpu, instruction),
        Mnemonic::DEC => inc_dec::execute_dec(cpu, instruction),
        Mnemonic::INX => inc_dec::execute_inx(cpu, instruction),
        Mnemonic::INY => inc_dec::execute_iny(cpu, instruction),
        Mnemonic::DEX => inc_dec::execute_dex(cpu, instruction),
        Mnemonic::DEY => inc_dec::execute_dey(cpu, instruction),

        Mnemonic::JMP => control::execute_jmp(cpu, instruction),
        Mnemonic::JSR => control::execute_jsr(cpu, instruction),
        Mnemonic::RTS => control::execute_rts(cpu, instruction),
        Mnemonic::RTI => control::execute_rti(cpu, instruction),
        Mnemonic::BRK => control::execute_brk(cpu, instruction),
        Mnemonic::NOP => control::execute_nop(cpu, instruction),

        Mnemonic::PHA => stack::execute_pha(cpu, instruction),
        Mnemonic::PHP => stack::execute_php(cpu, instruction),
        Mnemonic::PLA => stack::execute_pla(cpu, instruction),
        Mnemonic::PLP => stack::execute_plp(cpu, instruction),

        Mnemonic::CLC => flags::execute_clc(cpu, instruction),
        Mnemonic::SEC => flags::execute_sec(cpu, instruction),
        Mnemonic::CLI => flags::execute_cli(cpu, instruction),
        Mnemonic::SEI => flags::execute_sei(cpu, instruction),
        Mnemonic::CLD => flags::execute_cld(cpu, instruction),
        Mnemonic::SED => flags::execute_sed(cpu, instruction),
        Mnemonic::CLV => flags::execute_clv(cpu, instruction),

        Mnemonic::TAX => transfer::execute_tax(cpu, instruction),
        Mnemonic::TAY => transfer::execute_tay(cpu, instruction),
        Mnemonic::TXA => transfer::execute_txa(cpu, instruction),
        Mnemonic::TYA => transfer::execute_tya(cpu, instruction),
        Mnemonic::TSX => transfer::execute_tsx(cpu, instruction),
        Mnemonic::TXS => transfer::execute_txs(cpu, instruction),
    }
}
