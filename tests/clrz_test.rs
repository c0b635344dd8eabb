//! Tests for the CLRZ (Clear Zero) pseudo-instruction.

use libmsp430::{FlatMemory, Instruction, RegisterFile, StatusBit};

fn setup() -> (RegisterFile, FlatMemory) {
    (RegisterFile::new(), FlatMemory::new())
}

#[test]
fn test_clrz_clears_zero() {
    let (mut regs, mut memory) = setup();
    regs.set_zero(true);

    let instr = Instruction::StatusBit(StatusBit::Clrz);
    let cycles = instr.execute(&mut regs, &mut memory, &[]);

    assert!(!regs.zero());
    assert_eq!(cycles, 1);
}

#[test]
fn test_clrz_leaves_other_flags_untouched() {
    let (mut regs, mut memory) = setup();
    regs.set_zero(true);
    regs.set_carry(true);
    regs.set_negative(true);

    Instruction::StatusBit(StatusBit::Clrz).execute(&mut regs, &mut memory, &[]);

    assert!(!regs.zero());
    assert!(regs.carry());
    assert!(regs.negative());
    assert!(!regs.overflow());
}
