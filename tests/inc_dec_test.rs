//! Tests for INC, DEC, INX, INY, DEX and DEY.

use emu6502::{FlatMemory, MemoryBus, CPU};

const CODE: u16 = 0x0200;

fn setup(program: &[u8]) -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.load_at(CODE, program).unwrap();
    let mut cpu = CPU::new();
    cpu.set_pc(CODE);
    (cpu, memory)
}

#[test]
fn test_inx_wraps_without_carry() {
    let (mut cpu, mut memory) = setup(&[0xE8]);
    cpu.set_x(0xFF);

    assert_eq!(cpu.step(&mut memory).unwrap(), 2);
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flags().zero);
    assert!(!cpu.flags().carry);
}

#[test]
fn test_iny() {
    let (mut cpu, mut memory) = setup(&[0xC8]);
    cpu.set_y(0x7F);

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flags().negative);
}

#[test]
fn test_dex_dey_wrap() {
    // DEX ; DEY
    let (mut cpu, mut memory) = setup(&[0xCA, 0x88]);
    cpu.set_x(0x00);
    cpu.set_y(0x01);

    assert_eq!(cpu.step(&mut memory).unwrap(), 2);
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flags().negative);

    assert_eq!(cpu.step(&mut memory).unwrap(), 2);
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flags().zero);
}

#[test]
fn test_inc_memory_modes() {
    // INC $10 ; INC $10,X ; INC $4000 ; INC $4000,X
    let (mut cpu, mut memory) = setup(&[
        0xE6, 0x10, 0xF6, 0x10, 0xEE, 0x00, 0x40, 0xFE, 0x00, 0x40,
    ]);
    cpu.set_x(0x01);
    memory.write_byte(0x0010, 0xFF).unwrap();

    assert_eq!(cpu.step(&mut memory).unwrap(), 5);
    assert_eq!(memory.read_byte(0x0010).unwrap(), 0x00);
    assert!(cpu.flags().zero);

    assert_eq!(cpu.step(&mut memory).unwrap(), 6);
    assert_eq!(memory.read_byte(0x0011).unwrap(), 0x01);

    assert_eq!(cpu.step(&mut memory).unwrap(), 6);
    assert_eq!(memory.read_byte(0x4000).unwrap(), 0x01);

    assert_eq!(cpu.step(&mut memory).unwrap(), 7);
    assert_eq!(memory.read_byte(0x4001).unwrap(), 0x01);
}

#[test]
fn test_dec_memory() {
    // DEC $4000 ; DEC $10,X
    let (mut cpu, mut memory) = setup(&[0xCE, 0x00, 0x40, 0xD6, 0x10]);
    cpu.set_x(0x05);
    memory.write_byte(0x4000, 0x00).unwrap();
    memory.write_byte(0x0015, 0x01).unwrap();

    assert_eq!(cpu.step(&mut memory).unwrap(), 6);
    assert_eq!(memory.read_byte(0x4000).unwrap(), 0xFF);
    assert!(cpu.flags().negative);

    assert_eq!(cpu.step(&mut memory).unwrap(), 6);
    assert_eq!(memory.read_byte(0x0015).unwrap(), 0x00);
    assert!(cpu.flags().zero);
}
