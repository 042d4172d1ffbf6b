//! Sweeps every documented opcode through the engine and checks that the pulses taken
//! and bytes consumed agree with its table entry.

use cycle6502::{FlatMemory, InstructionTable, MemoryBus, Mnemonic, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_every_documented_opcode_takes_its_base_cycles() {
    let table = InstructionTable::documented();

    for instruction in table.iter() {
        let mut cpu = setup_cpu();
        cpu.memory_mut()
            .load(0x8000, &[instruction.opcode, 0x00, 0x00]);

        let pulses = cpu.step().unwrap_or_else(|err| {
            panic!("opcode 0x{:02X} failed: {}", instruction.opcode, err)
        });

        assert_eq!(
            pulses, instruction.cycles as u64,
            "opcode 0x{:02X} ({})",
            instruction.opcode, instruction.mnemonic
        );
        assert_eq!(cpu.remaining_cycles(), 0);
    }
}

#[test]
fn test_sequential_opcodes_advance_pc_by_size() {
    let table = InstructionTable::documented();

    for instruction in table.iter() {
        if matches!(
            instruction.mnemonic,
            Mnemonic::JMP | Mnemonic::JSR | Mnemonic::RTS | Mnemonic::RTI | Mnemonic::BRK
        ) {
            continue;
        }

        let mut cpu = setup_cpu();
        // Zero operands make every branch target the next instruction
        cpu.memory_mut()
            .load(0x8000, &[instruction.opcode, 0x00, 0x00]);

        cpu.step().unwrap();

        assert_eq!(
            cpu.pc(),
            0x8000 + instruction.size_bytes() as u16,
            "opcode 0x{:02X} ({})",
            instruction.opcode,
            instruction.mnemonic
        );
    }
}

#[test]
fn test_reset_program_runs_to_completion() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x06);

    // Sum 1..=10 into $00:
    //   LDX #$0A ; LDA #$00 ; CLC
    // loop:
    //   STX $01 ; ADC $01 ; DEX ; BNE loop
    //   STA $00 ; BRK
    memory.load(
        0x0600,
        &[
            0xA2, 0x0A, 0xA9, 0x00, 0x18, 0x86, 0x01, 0x65, 0x01, 0xCA, 0xD0, 0xF9, 0x85, 0x00,
            0x00,
        ],
    );
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x07);

    let mut cpu = CPU::new(memory);
    while cpu.pc() != 0x0700 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.memory().read(0x0000), 55);
}
