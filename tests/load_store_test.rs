//! Tests for the load (LDA, LDX, LDY) and store (STA, STX, STY) instructions.
//!
//! Tests cover:
//! - Flag updates on loads (Z, N)
//! - Stores leave flags untouched
//! - Cycle counts per addressing mode, including the read/store asymmetry
//!   around page crossing

use emu6502::{FlatMemory, MemoryBus, CPU};

const CODE: u16 = 0x0200;

/// Installs `program` at 0x0200 and points PC at it
fn setup(program: &[u8]) -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.load_at(CODE, program).unwrap();
    let mut cpu = CPU::new();
    cpu.set_pc(CODE);
    (cpu, memory)
}

// ========== Load Flag Tests ==========

#[test]
fn test_lda_immediate_zero() {
    let (mut cpu, mut memory) = setup(&[0xA9, 0x00]);
    cpu.set_a(0xFF);

    assert_eq!(cpu.execute(&mut memory, 2).unwrap(), 2);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flags().zero);
    assert!(!cpu.flags().negative);
    assert_eq!(cpu.pc(), CODE + 2);
}

#[test]
fn test_lda_immediate_negative() {
    let (mut cpu, mut memory) = setup(&[0xA9, 0x80]);

    cpu.execute(&mut memory, 2).unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flags().zero);
    assert!(cpu.flags().negative);
}

#[test]
fn test_lda_immediate_positive() {
    let (mut cpu, mut memory) = setup(&[0xA9, 0x42]);
    cpu.flags_mut().zero = true;
    cpu.flags_mut().negative = true;

    cpu.execute(&mut memory, 2).unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flags().zero);
    assert!(!cpu.flags().negative);
}

#[test]
fn test_ldx_ldy_immediate() {
    // LDX #$81 ; LDY #$00
    let (mut cpu, mut memory) = setup(&[0xA2, 0x81, 0xA0, 0x00]);

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.x(), 0x81);
    assert!(cpu.flags().negative);

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flags().zero);
    assert!(!cpu.flags().negative);
}

// ========== Load Cycle Tests ==========

#[test]
fn test_lda_zero_page_and_indexed() {
    // LDA $10 ; LDA $10,X
    let (mut cpu, mut memory) = setup(&[0xA5, 0x10, 0xB5, 0x10]);
    memory.write_byte(0x0010, 0x11).unwrap();
    memory.write_byte(0x0015, 0x22).unwrap();
    cpu.set_x(0x05);

    assert_eq!(cpu.step(&mut memory).unwrap(), 3);
    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.step(&mut memory).unwrap(), 4);
    assert_eq!(cpu.a(), 0x22);
}

#[test]
fn test_ldx_zero_page_y_wraps() {
    // LDX $F0,Y
    let (mut cpu, mut memory) = setup(&[0xB6, 0xF0]);
    memory.write_byte(0x0000, 0x33).unwrap();
    cpu.set_y(0x10);

    assert_eq!(cpu.step(&mut memory).unwrap(), 4);
    assert_eq!(cpu.x(), 0x33);
}

#[test]
fn test_lda_absolute_x_page_cross_penalty() {
    // LDA $40F0,X twice: X = 0x0F (same page), X = 0x10 (crosses)
    let (mut cpu, mut memory) = setup(&[0xBD, 0xF0, 0x40, 0xBD, 0xF0, 0x40]);
    memory.write_byte(0x40FF, 0x01).unwrap();
    memory.write_byte(0x4100, 0x02).unwrap();

    cpu.set_x(0x0F);
    assert_eq!(cpu.step(&mut memory).unwrap(), 4);
    assert_eq!(cpu.a(), 0x01);

    cpu.set_x(0x10);
    assert_eq!(cpu.step(&mut memory).unwrap(), 5);
    assert_eq!(cpu.a(), 0x02);
}

#[test]
fn test_lda_indirect_x() {
    // LDA ($20,X)
    let (mut cpu, mut memory) = setup(&[0xA1, 0x20]);
    cpu.set_x(0x04);
    memory.write_word(0x0024, 0x3000).unwrap();
    memory.write_byte(0x3000, 0x5A).unwrap();

    assert_eq!(cpu.step(&mut memory).unwrap(), 6);
    assert_eq!(cpu.a(), 0x5A);
}

#[test]
fn test_lda_indirect_y_page_cross_penalty() {
    // LDA ($20),Y twice
    let (mut cpu, mut memory) = setup(&[0xB1, 0x20, 0xB1, 0x20]);
    memory.write_word(0x0020, 0x30F0).unwrap();
    memory.write_byte(0x30F5, 0x01).unwrap();
    memory.write_byte(0x3105, 0x02).unwrap();

    cpu.set_y(0x05);
    assert_eq!(cpu.step(&mut memory).unwrap(), 5);
    assert_eq!(cpu.a(), 0x01);

    cpu.set_y(0x15);
    assert_eq!(cpu.step(&mut memory).unwrap(), 6);
    assert_eq!(cpu.a(), 0x02);
}

// ========== Store Tests ==========

#[test]
fn test_sta_zero_page() {
    let (mut cpu, mut memory) = setup(&[0x85, 0x00]);
    cpu.set_a(0x42);
    let prior_status = cpu.status();

    assert_eq!(cpu.execute(&mut memory, 3).unwrap(), 3);

    assert_eq!(memory.read_byte(0x0000).unwrap(), 0x42);
    assert_eq!(cpu.pc(), CODE + 2);
    assert_eq!(cpu.status(), prior_status);
}

#[test]
fn test_store_values_leave_flags_alone() {
    // STX $00 ; STY $00 with zero and negative values
    let (mut cpu, mut memory) = setup(&[0x86, 0x00, 0x84, 0x01]);
    cpu.set_x(0x00);
    cpu.set_y(0b1001_0101);
    let prior_status = cpu.status();

    assert_eq!(cpu.execute(&mut memory, 6).unwrap(), 6);

    assert_eq!(memory.read_byte(0x0000).unwrap(), 0x00);
    assert_eq!(memory.read_byte(0x0001).unwrap(), 0b1001_0101);
    assert_eq!(cpu.status(), prior_status);
}

#[test]
fn test_store_zero_page_indexed() {
    // STA $00,X ; STX $00,Y ; STY $00,X
    let (mut cpu, mut memory) = setup(&[0x95, 0x00, 0x96, 0x00, 0x94, 0x00]);
    cpu.set_x(0x01);
    cpu.set_y(0x02);
    cpu.set_a(0xAA);

    assert_eq!(cpu.step(&mut memory).unwrap(), 4);
    assert_eq!(memory.read_byte(0x0001).unwrap(), 0xAA);
    assert_eq!(cpu.step(&mut memory).unwrap(), 4);
    assert_eq!(memory.read_byte(0x0002).unwrap(), 0x01);
    assert_eq!(cpu.step(&mut memory).unwrap(), 4);
    assert_eq!(memory.read_byte(0x0001).unwrap(), 0x02);
    assert_eq!(cpu.pc(), CODE + 6);
}

#[test]
fn test_store_absolute() {
    // STA $4000 ; STX $4001 ; STY $4002
    let (mut cpu, mut memory) = setup(&[
        0x8D, 0x00, 0x40, 0x8E, 0x01, 0x40, 0x8C, 0x02, 0x40,
    ]);
    cpu.set_a(0x01);
    cpu.set_x(0x02);
    cpu.set_y(0x03);

    assert_eq!(cpu.execute(&mut memory, 12).unwrap(), 12);
    assert_eq!(memory.read_byte(0x4000).unwrap(), 0x01);
    assert_eq!(memory.read_byte(0x4001).unwrap(), 0x02);
    assert_eq!(memory.read_byte(0x4002).unwrap(), 0x03);
    assert_eq!(cpu.pc(), CODE + 9);
}

#[test]
fn test_store_absolute_indexed_always_pays_extra_cycle() {
    // STA $4000,X ; STA $4000,Y  (no page crossing)
    let (mut cpu, mut memory) = setup(&[0x9D, 0x00, 0x40, 0x99, 0x00, 0x40]);
    cpu.set_x(0x01);
    cpu.set_y(0x02);
    cpu.set_a(0x42);

    assert_eq!(cpu.step(&mut memory).unwrap(), 5);
    assert_eq!(memory.read_byte(0x4001).unwrap(), 0x42);
    assert_eq!(cpu.step(&mut memory).unwrap(), 5);
    assert_eq!(memory.read_byte(0x4002).unwrap(), 0x42);
}

#[test]
fn test_store_absolute_indexed_page_cross_costs_the_same() {
    // STA $40FF,X with X = 1
    let (mut cpu, mut memory) = setup(&[0x9D, 0xFF, 0x40]);
    cpu.set_x(0x01);
    cpu.set_a(0x99);

    assert_eq!(cpu.step(&mut memory).unwrap(), 5);
    assert_eq!(memory.read_byte(0x4100).unwrap(), 0x99);
}

#[test]
fn test_sta_indirect_modes() {
    // STA ($20,X) ; STA ($30),Y
    let (mut cpu, mut memory) = setup(&[0x81, 0x20, 0x91, 0x30]);
    cpu.set_x(0x02);
    cpu.set_y(0x03);
    cpu.set_a(0x77);
    memory.write_word(0x0022, 0x5000).unwrap();
    memory.write_word(0x0030, 0x6000).unwrap();

    assert_eq!(cpu.step(&mut memory).unwrap(), 6);
    assert_eq!(memory.read_byte(0x5000).unwrap(), 0x77);
    assert_eq!(cpu.step(&mut memory).unwrap(), 6);
    assert_eq!(memory.read_byte(0x6003).unwrap(), 0x77);
}
