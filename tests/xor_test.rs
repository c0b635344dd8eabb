//! Tests for the XOR (Exclusive OR) instruction.

use libmsp430::{
    AddressingMode, FlatMemory, Instruction, MemoryBus, Opcode, Register, RegisterFile, TwoOperand,
};

fn setup() -> (RegisterFile, FlatMemory) {
    (RegisterFile::new(), FlatMemory::new())
}

fn xor(
    byte: bool,
    src: Register,
    src_mode: AddressingMode,
    dst: Register,
    dst_mode: AddressingMode,
) -> Instruction {
    Instruction::TwoOperand(TwoOperand::new(Opcode::Xor, byte, src, src_mode, dst, dst_mode))
}

// ========== Basic Operation ==========

#[test]
fn test_xor_register_to_register() {
    let (mut regs, mut memory) = setup();
    regs.write(Register::R4, 0xFF00);
    regs.write(Register::R5, 0x0FF0);

    let instr = xor(
        false,
        Register::R4,
        AddressingMode::Register,
        Register::R5,
        AddressingMode::Register,
    );
    let cycles = instr.execute(&mut regs, &mut memory, &[]);

    assert_eq!(regs.read(Register::R5), 0xF0F0);
    assert!(regs.negative());
    assert!(!regs.zero());
    assert_eq!(cycles, 1);
}

#[test]
fn test_xor_with_itself_gives_zero() {
    let (mut regs, mut memory) = setup();
    regs.write(Register::R4, 0x1234);
    regs.write(Register::R5, 0x1234);

    let instr = xor(
        false,
        Register::R4,
        AddressingMode::Register,
        Register::R5,
        AddressingMode::Register,
    );
    instr.execute(&mut regs, &mut memory, &[]);

    assert_eq!(regs.read(Register::R5), 0x0000);
    assert!(regs.zero());
    assert!(!regs.negative());
}

#[test]
fn test_xor_twice_restores_the_destination() {
    let (mut regs, mut memory) = setup();
    regs.write(Register::R4, 0xA5A5);
    regs.write(Register::R5, 0x1234);

    let instr = xor(
        false,
        Register::R4,
        AddressingMode::Register,
        Register::R5,
        AddressingMode::Register,
    );
    instr.execute(&mut regs, &mut memory, &[]);
    assert_eq!(regs.read(Register::R5), 0x1234 ^ 0xA5A5);

    instr.execute(&mut regs, &mut memory, &[]);
    assert_eq!(regs.read(Register::R5), 0x1234);
}

// ========== Byte Operations ==========

#[test]
fn test_xor_byte_preserves_register_high_byte() {
    let (mut regs, mut memory) = setup();
    regs.write(Register::R4, 0x12AA);
    regs.write(Register::R5, 0x3455);

    let instr = xor(
        true,
        Register::R4,
        AddressingMode::Register,
        Register::R5,
        AddressingMode::Register,
    );
    instr.execute(&mut regs, &mut memory, &[]);

    // 0xAA ^ 0x55 = 0xFF in the low byte; 0x34 preserved
    assert_eq!(regs.read(Register::R5), 0x34FF);
    assert!(regs.negative()); // Bit 7 of the byte result is set
    assert!(!regs.zero());
}

// ========== Flags ==========

#[test]
fn test_xor_always_clears_carry_and_overflow() {
    let (mut regs, mut memory) = setup();
    regs.write(Register::R4, 0x00FF);
    regs.write(Register::R5, 0x0F0F);
    regs.set_carry(true);
    regs.set_overflow(true);

    let instr = xor(
        false,
        Register::R4,
        AddressingMode::Register,
        Register::R5,
        AddressingMode::Register,
    );
    instr.execute(&mut regs, &mut memory, &[]);

    assert_eq!(regs.read(Register::R5), 0x0FF0);
    assert!(!regs.carry());
    assert!(!regs.overflow());
}

// ========== Addressing Modes ==========

#[test]
fn test_xor_immediate_toggles_bits_in_memory() {
    let (mut regs, mut memory) = setup();
    regs.write(Register::R6, 0x0300);
    memory.write_word(0x0300, 0x00F0);

    // XOR #0x00FF, @R6
    let instr = xor(
        false,
        Register::PC,
        AddressingMode::Immediate,
        Register::R6,
        AddressingMode::Indirect,
    );
    let cycles = instr.execute(&mut regs, &mut memory, &[0x00FF]);

    assert_eq!(memory.read_word(0x0300), 0x000F);
    assert_eq!(cycles, 4); // 1 + 1 + 2
}

#[test]
fn test_xor_auto_increment_byte_steps_by_one() {
    let (mut regs, mut memory) = setup();
    regs.write(Register::R4, 0x0240);
    regs.write(Register::R5, 0x00FF);
    memory.write(0x0240, 0x0F);

    let instr = xor(
        true,
        Register::R4,
        AddressingMode::IndirectAutoIncrement,
        Register::R5,
        AddressingMode::Register,
    );
    instr.execute(&mut regs, &mut memory, &[]);

    assert_eq!(regs.read(Register::R5), 0x00F0);
    assert_eq!(regs.read(Register::R4), 0x0241); // Byte op increments by 1
}

#[test]
fn test_xor_symbolic_to_symbolic_cycles() {
    let (mut regs, mut memory) = setup();
    regs.set_pc(0x4400);
    memory.write_word(0x4410, 0xAAAA);
    memory.write_word(0x4420, 0x5555);

    let instr = xor(
        false,
        Register::PC,
        AddressingMode::Symbolic,
        Register::PC,
        AddressingMode::Symbolic,
    );
    let cycles = instr.execute(&mut regs, &mut memory, &[0x0010, 0x0020]);

    assert_eq!(memory.read_word(0x4420), 0xFFFF);
    assert!(regs.negative());
    assert_eq!(cycles, 6); // 1 + 2 + 3
}
