//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the clock-driven execution engine.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C plus the reserved bit 5 (individual bool fields)
//! - **Instruction table**: per-processor opcode descriptors
//! - **Cycle countdown**: pulses left before the next fetch
//!
//! ## Execution Model
//!
//! The host drives the CPU with `clock()`, one pulse at a time. When the countdown is
//! zero a pulse fetches, decodes and fully executes the next instruction, then loads the
//! countdown with the instruction's remaining cycles. Other pulses only count down.
//!
//! - `clock()`: One clock pulse
//! - `step()`: Pulses until the next instruction has completely elapsed
//! - `run_for_cycles()`: A fixed number of pulses
//! - `reset()`, `irq()`, `nmi()`: The three interrupt sequences

use crate::addressing::{self, Operand};
use crate::config::CpuConfig;
use crate::instructions;
use crate::opcodes::{Instruction, InstructionTable};
use crate::{ExecutionError, MemoryBus};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Address of the NMI vector (little-endian).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Address of the reset vector (little-endian).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector (little-endian).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Pulses consumed by the IRQ and NMI entry sequences.
pub const INTERRUPT_CYCLES: u8 = 7;

// Status register bit layout (NV1BDIZC)
pub(crate) const FLAG_N: u8 = 0b1000_0000;
pub(crate) const FLAG_V: u8 = 0b0100_0000;
pub(crate) const FLAG_RESERVED: u8 = 0b0010_0000;
pub(crate) const FLAG_B: u8 = 0b0001_0000;
pub(crate) const FLAG_D: u8 = 0b0000_1000;
pub(crate) const FLAG_I: u8 = 0b0000_0100;
pub(crate) const FLAG_Z: u8 = 0b0000_0010;
pub(crate) const FLAG_C: u8 = 0b0000_0001;

/// 6502 CPU state and execution context.
///
/// The CPU is generic over its memory via the `MemoryBus` trait. Passing a value (such as
/// `FlatMemory`) gives the CPU exclusive ownership of the memory; passing `&mut bus`
/// borrows memory the host keeps owning.
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i());
/// assert!(cpu.flag_z());
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Unused bit 5, carried through push/pull
    pub(crate) flag_reserved: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Decimal mode flag (stored only, arithmetic stays binary)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Total clock pulses since construction
    pub(crate) cycles: u64,

    /// Pulses left before the next fetch
    pub(crate) remaining: u8,

    /// Opcode descriptors for this processor
    pub(crate) instructions: InstructionTable,

    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and hardware-default configuration.
    ///
    /// The documented instruction table is installed and a reset is performed, so the
    /// program counter is loaded from the reset vector at 0xFFFC/0xFFFD.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0xEF);
    /// mem.write(0xFFFD, 0xBE);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0xBEEF);
    /// ```
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with an explicit configuration.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: config.reset_stack_pointer,
            flag_n: false,
            flag_v: false,
            flag_reserved: true,
            flag_b: false,
            flag_d: false,
            flag_i: true,
            flag_z: true,
            flag_c: false,
            cycles: 0,
            remaining: 0,
            instructions: InstructionTable::documented(),
            config,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Performs the reset sequence.
    ///
    /// - A, X and Y are zeroed
    /// - SP is set to the configured reset value (0xFD by default)
    /// - Flags are cleared except Interrupt Disable and Zero (and the reserved bit)
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD
    /// - The cycle countdown is cleared; the total cycle count is kept
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.memory_mut().write(0xFFFC, 0x00);
    /// cpu.memory_mut().write(0xFFFD, 0xC0);
    /// cpu.set_a(0x55);
    ///
    /// cpu.reset();
    /// assert_eq!(cpu.pc(), 0xC000);
    /// assert_eq!(cpu.a(), 0x00);
    /// ```
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = self.config.reset_stack_pointer;

        self.flag_n = false;
        self.flag_v = false;
        self.flag_reserved = true;
        self.flag_b = false;
        self.flag_d = false;
        self.flag_i = true;
        self.flag_z = true;
        self.flag_c = false;

        self.pc = RESET_VECTOR;
        let lo = self.fetch() as u16;
        let hi = self.fetch() as u16;
        self.pc = (hi << 8) | lo;

        self.remaining = 0;

        log::debug!("reset: PC=${:04X}", self.pc);
    }

    /// Advances the CPU by one clock pulse.
    ///
    /// If the previous instruction still has cycles outstanding, the countdown is
    /// decremented. Otherwise the next opcode is fetched and executed to completion, and
    /// the countdown is loaded with the instruction's remaining cycles.
    ///
    /// # Errors
    ///
    /// `ExecutionError::UnknownOpcode` if the fetched opcode has no table entry, and
    /// `ExecutionError::InvalidAddressingMode` if its descriptor cannot be executed.
    /// A failed pulse leaves no countdown behind. The program counter may already
    /// have moved past the opcode and any operand bytes resolved before the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0xA9, 0x07]); // LDA #$07 (2 cycles)
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.clock().unwrap();
    /// assert_eq!(cpu.a(), 0x07);
    /// assert_eq!(cpu.remaining_cycles(), 1);
    ///
    /// cpu.clock().unwrap();
    /// assert_eq!(cpu.remaining_cycles(), 0);
    /// ```
    pub fn clock(&mut self) -> Result<(), ExecutionError> {
        self.cycles += 1;

        if self.remaining > 0 {
            self.remaining -= 1;
            return Ok(());
        }

        let address = self.pc;
        let opcode = self.fetch();

        let instruction = match self.instructions.get(opcode) {
            Some(instruction) => *instruction,
            None => {
                log::warn!(
                    "unknown opcode 0x{:02X} at ${:04X}",
                    opcode,
                    address
                );
                return Err(ExecutionError::UnknownOpcode { opcode, address });
            }
        };

        log::trace!(
            "${:04X}: {:02X} {} {:?}",
            address,
            opcode,
            instruction.mnemonic,
            instruction.mode
        );

        instructions::execute(self, &instruction)?;
        self.remaining = instruction.cycles.saturating_sub(1);
        Ok(())
    }

    /// Runs pulses until the next instruction has completely elapsed.
    ///
    /// Any countdown left from a previous instruction or interrupt is drained first.
    /// Returns the number of pulses consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step().unwrap(), 2);
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;

        while self.remaining > 0 {
            self.clock()?;
        }

        self.clock()?;

        while self.remaining > 0 {
            self.clock()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Runs the CPU for a fixed number of clock pulses.
    ///
    /// This suits frame-locked hosts that must run an exact number of cycles per frame
    /// (e.g., 29780 cycles for 60Hz NTSC) and raise interrupts between frames.
    ///
    /// Returns the number of pulses executed, which equals the budget unless an error
    /// stops execution early.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;

        for _ in 0..cycle_budget {
            self.clock()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Raises a maskable interrupt request.
    ///
    /// Ignored while the Interrupt Disable flag is set. Otherwise PC (high, then low) and
    /// the status byte (B clear) are pushed, I and B are set and PC is loaded from the
    /// IRQ vector at 0xFFFE/0xFFFF.
    pub fn irq(&mut self) {
        if self.flag_i {
            log::debug!("IRQ ignored: interrupts disabled");
            return;
        }
        self.interrupt(IRQ_VECTOR);
    }

    /// Raises a non-maskable interrupt via the vector at 0xFFFA/0xFFFB.
    pub fn nmi(&mut self) {
        self.interrupt(NMI_VECTOR);
    }

    fn interrupt(&mut self, vector: u16) {
        self.push_word(self.pc);
        // Hardware interrupts push B clear so handlers can tell them apart from BRK
        let status = (self.status() & !FLAG_B) | FLAG_RESERVED;
        self.push(status);

        self.flag_i = true;
        self.flag_b = true;

        let return_pc = self.pc;
        self.pc = self.memory.read_word(vector);
        self.remaining = self.remaining.saturating_add(INTERRUPT_CYCLES);

        log::debug!(
            "interrupt via ${:04X}: ${:04X} -> ${:04X}",
            vector,
            return_pc,
            self.pc
        );
    }

    /// Returns the byte at PC and advances PC by one, wrapping at 0xFFFF.
    pub fn fetch(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    // ========== Operand Access ==========

    /// Rejects a descriptor that gives an implied-only mnemonic an addressing mode.
    pub(crate) fn implied(&self, instruction: &Instruction) -> Result<(), ExecutionError> {
        match instruction.mode {
            None => Ok(()),
            Some(_) => Err(ExecutionError::invalid_mode(instruction)),
        }
    }

    /// Resolves the instruction's addressing mode, consuming its operand bytes.
    pub(crate) fn operand(&mut self, instruction: &Instruction) -> Result<Operand, ExecutionError> {
        match instruction.mode {
            Some(mode) => Ok(addressing::resolve(self, mode)),
            None => Err(ExecutionError::invalid_mode(instruction)),
        }
    }

    /// Resolves the instruction's operand to a memory address.
    pub(crate) fn effective_address(
        &mut self,
        instruction: &Instruction,
    ) -> Result<u16, ExecutionError> {
        match self.operand(instruction)? {
            Operand::Address(addr) => Ok(addr),
            Operand::Accumulator => Err(ExecutionError::invalid_mode(instruction)),
        }
    }

    /// Resolves and reads the instruction's operand value.
    pub(crate) fn operand_value(&mut self, instruction: &Instruction) -> Result<u8, ExecutionError> {
        let operand = self.operand(instruction)?;
        Ok(self.read(operand))
    }

    pub(crate) fn read(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Address(addr) => self.memory.read(addr),
            Operand::Accumulator => self.a,
        }
    }

    pub(crate) fn write(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Address(addr) => self.memory.write(addr, value),
            Operand::Accumulator => self.a = value,
        }
    }

    /// Sets Z and N from `value`.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    // ========== Stack ==========

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes high byte then low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push((value & 0xFF) as u8);
    }

    /// Pulls low byte then high byte.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: reserved (1 after reset, round-trips through PLP/RTI)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    ///
    /// // Reserved bit, I and Z after reset
    /// assert_eq!(cpu.status(), 0b0010_0110);
    /// ```
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0;

        if self.flag_n {
            status |= FLAG_N;
        }
        if self.flag_v {
            status |= FLAG_V;
        }
        if self.flag_reserved {
            status |= FLAG_RESERVED;
        }
        if self.flag_b {
            status |= FLAG_B;
        }
        if self.flag_d {
            status |= FLAG_D;
        }
        if self.flag_i {
            status |= FLAG_I;
        }
        if self.flag_z {
            status |= FLAG_Z;
        }
        if self.flag_c {
            status |= FLAG_C;
        }

        status
    }

    /// Returns the total number of clock pulses since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the pulses left before the next fetch.
    pub fn remaining_cycles(&self) -> u8 {
        self.remaining
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Moves the program counter. Any pending countdown is unaffected.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer (offset into page 1).
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Unpacks all eight bits of `value` into the status flags.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & FLAG_N != 0;
        self.flag_v = value & FLAG_V != 0;
        self.flag_reserved = value & FLAG_RESERVED != 0;
        self.flag_b = value & FLAG_B != 0;
        self.flag_d = value & FLAG_D != 0;
        self.flag_i = value & FLAG_I != 0;
        self.flag_z = value & FLAG_Z != 0;
        self.flag_c = value & FLAG_C != 0;
    }

    // ========== Status Flag Setters ==========

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets or clears the live Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets or clears the Decimal flag. Arithmetic stays binary either way.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    // ========== Memory and Table Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// Hosts modelling memory-mapped peripherals write through this between pulses.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    /// Returns the instruction table.
    pub fn instructions(&self) -> &InstructionTable {
        &self.instructions
    }

    /// Returns the instruction table for adding or overriding opcodes.
    pub fn instructions_mut(&mut self) -> &mut InstructionTable {
        &mut self.instructions
    }

    /// Returns the configuration the CPU was built with.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlatMemory, Mnemonic};

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        CPU::new(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.remaining_cycles(), 0);

        assert!(cpu.flag_i());
        assert!(cpu.flag_z());
        assert!(!cpu.flag_n());
        assert!(!cpu.flag_v());
        assert!(!cpu.flag_b());
        assert!(!cpu.flag_d());
        assert!(!cpu.flag_c());
    }

    #[test]
    fn test_status_round_trip() {
        let mut cpu = setup_cpu();
        for value in [0x00u8, 0xFF, 0b1010_0101, 0b0101_1010] {
            cpu.set_status(value);
            assert_eq!(cpu.status(), value);
        }
    }

    #[test]
    fn test_fetch_wraps() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0xFFFF, 0x42);
        cpu.set_pc(0xFFFF);

        assert_eq!(cpu.fetch(), 0x42);
        assert_eq!(cpu.pc(), 0x0000);
    }

    #[test]
    fn test_stack_push_pull_wraps() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0x00);

        cpu.push(0xAB);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100), 0xAB);

        assert_eq!(cpu.pull(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_push_word_order() {
        let mut cpu = setup_cpu();
        cpu.push_word(0x1234);

        assert_eq!(cpu.memory().read(0x01FD), 0x12);
        assert_eq!(cpu.memory().read(0x01FC), 0x34);
        assert_eq!(cpu.pull_word(), 0x1234);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn test_clock_counts_down_between_fetches() {
        let mut cpu = setup_cpu();
        // INC $10 takes 5 cycles
        cpu.memory_mut().load(0x8000, &[0xE6, 0x10, 0xEA]);

        cpu.clock().unwrap();
        assert_eq!(cpu.memory().read(0x0010), 0x01);
        assert_eq!(cpu.remaining_cycles(), 4);

        for expected in (0..4).rev() {
            cpu.clock().unwrap();
            assert_eq!(cpu.remaining_cycles(), expected);
            assert_eq!(cpu.pc(), 0x8002);
        }

        // Next pulse fetches the NOP
        cpu.clock().unwrap();
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.cycles(), 6);
    }

    #[test]
    fn test_unknown_opcode_fails_fast() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0x02);

        assert_eq!(
            cpu.clock(),
            Err(ExecutionError::UnknownOpcode {
                opcode: 0x02,
                address: 0x8000
            })
        );
        assert_eq!(cpu.pc(), 0x8001);
    }

    #[test]
    fn test_implied_descriptor_for_operand_handler_is_rejected() {
        let mut cpu = setup_cpu();
        cpu.instructions_mut()
            .insert(Instruction::implied(0x02, Mnemonic::LDA, 2));
        cpu.memory_mut().write(0x8000, 0x02);

        assert_eq!(
            cpu.clock(),
            Err(ExecutionError::InvalidAddressingMode {
                opcode: 0x02,
                mnemonic: Mnemonic::LDA,
                mode: None,
            })
        );
    }

    #[test]
    fn test_tables_are_per_instance() {
        let mut first = setup_cpu();
        let second = setup_cpu();

        first.instructions_mut().remove(0xEA);
        assert!(first.instructions().get(0xEA).is_none());
        assert!(second.instructions().get(0xEA).is_some());
    }
}
