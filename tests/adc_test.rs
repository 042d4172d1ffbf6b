//! Comprehensive tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - All 8 addressing modes
//! - Flag updates (C, Z, V, N)
//! - Signed overflow in both directions
//! - Base cycle counts (no page-crossing penalty is charged)
//! - Decimal flag has no effect on the arithmetic

use cycle6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Basic ADC Operation Tests ==========

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();

    // ADC #$05 (0x69 0x05)
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x05);

    cpu.set_a(0x10);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_with_carry_in() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x05);

    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x16); // 0x10 + 0x05 + 1
    assert!(!cpu.flag_c());
}

// ========== Flag Tests ==========

#[test]
fn test_adc_signed_overflow_positive_plus_positive() {
    let mut cpu = setup_cpu();

    // 0x7F + 0x01 = 0x80: positive + positive = negative
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x01);

    cpu.set_a(0x7F);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
}

#[test]
fn test_adc_carry_and_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0xFF);

    cpu.set_a(0x01);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00); // 0x100 wrapped
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_overflow_negative_to_positive() {
    let mut cpu = setup_cpu();

    // 0x80 (-128) + 0xFF (-1) = 0x7F with carry
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0xFF);

    cpu.set_a(0x80);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_no_overflow_mixed_signs() {
    let mut cpu = setup_cpu();

    // 0x50 + 0xD0 = 0x120: carry but no signed overflow
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0xD0);

    cpu.set_a(0x50);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x20);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_carry_in_causes_carry_out() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x00);

    cpu.set_a(0xFF);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_ignores_decimal_flag() {
    let mut cpu = setup_cpu();

    // 0x09 + 0x01 would be 0x10 in BCD; binary gives 0x0A
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x01);

    cpu.set_a(0x09);
    cpu.set_flag_d(true);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x0A);
    assert!(cpu.flag_d());
}

// ========== Addressing Mode Tests ==========

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();

    // ADC $42
    cpu.memory_mut().write(0x8000, 0x65);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0x33);

    cpu.set_a(0x11);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x44);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_adc_zero_page_x_wrap() {
    let mut cpu = setup_cpu();

    // ADC $FF,X with X=2 wraps to 0x0001
    cpu.memory_mut().write(0x8000, 0x75);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x0001, 0x42);
    cpu.memory_mut().write(0x0101, 0x99); // Must not be read

    cpu.set_a(0x10);
    cpu.set_x(0x02);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x52);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_adc_absolute() {
    let mut cpu = setup_cpu();

    // ADC $1234
    cpu.memory_mut().write(0x8000, 0x6D);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1234, 0x55);

    cpu.set_a(0x10);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x65);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_adc_absolute_x_page_cross_charges_base_cycles() {
    let mut cpu = setup_cpu();

    // ADC $12FF,X with X=2 reads 0x1301
    cpu.memory_mut().write(0x8000, 0x7D);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1301, 0x77);

    cpu.set_a(0x11);
    cpu.set_x(0x02);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x88);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_adc_absolute_y() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x79);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1203, 0x44);

    cpu.set_a(0x22);
    cpu.set_y(0x03);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x66);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_adc_absolute_y_wraps_address_space() {
    let mut cpu = setup_cpu();

    // ADC $FFFF,Y with Y=1 reads 0x0000
    cpu.memory_mut().write(0x8000, 0x79);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0xFF);
    cpu.memory_mut().write(0x0000, 0x03);

    cpu.set_a(0x01);
    cpu.set_y(0x01);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x04);
}

#[test]
fn test_adc_indirect_x() {
    let mut cpu = setup_cpu();

    // ADC ($40,X) with X=5 reads pointer at 0x45/0x46
    cpu.memory_mut().write(0x8000, 0x61);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0045, 0x00);
    cpu.memory_mut().write(0x0046, 0x20);
    cpu.memory_mut().write(0x2000, 0x99);

    cpu.set_a(0x11);
    cpu.set_x(0x05);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xAA);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_adc_indirect_y() {
    let mut cpu = setup_cpu();

    // ADC ($40),Y reads base from 0x40/0x41 then adds Y
    cpu.memory_mut().write(0x8000, 0x71);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0040, 0x00);
    cpu.memory_mut().write(0x0041, 0x20);
    cpu.memory_mut().write(0x2010, 0x22);

    cpu.set_a(0x11);
    cpu.set_y(0x10);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x33);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 5);
}
