//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary register state and memory contents, optionally raises an
//! interrupt, then runs one instruction. Any panic is a bug: every address is 16 bits
//! and every documented opcode must execute without failing.

#![no_main]

use arbitrary::Arbitrary;
use cycle6502::{ExecutionError, FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

#[derive(Debug, Arbitrary)]
enum FuzzInterrupt {
    None,
    Irq,
    Nmi,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    interrupt: FuzzInterrupt,
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    vectors: [u8; 6],
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    memory.load(0x0000, &input.zero_page);
    memory.load(0x0100, &input.stack_page);
    memory.load(0xFFFA, &input.vectors);

    let mut cpu = CPU::new(memory);

    // Run from a fixed address regardless of the fuzzed reset vector
    cpu.memory_mut().load(0x8000, &input.instruction_bytes);
    cpu.set_pc(0x8000);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    match input.interrupt {
        FuzzInterrupt::None => {}
        FuzzInterrupt::Irq => cpu.irq(),
        FuzzInterrupt::Nmi => cpu.nmi(),
    }

    let opcode = cpu.memory().read(cpu.pc());
    let documented = cpu.instructions().get(opcode).is_some();

    match cpu.step() {
        Ok(pulses) => assert!(pulses >= 2),
        Err(ExecutionError::UnknownOpcode { opcode: bad, .. }) => {
            assert!(!documented, "documented opcode 0x{:02X} rejected", bad)
        }
        Err(e) => panic!("documented table produced {:?}", e),
    }
});
