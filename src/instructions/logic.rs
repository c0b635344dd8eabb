//! # Two-Operand Logic Instructions
//!
//! This module implements the logic family:
//! - AND: Logical AND (`src & dst`)
//! - BIS: Bit set (`src | dst`)
//! - BIC: Bit clear (`dst & !src`)
//! - BIT: Bit test (`src & dst`, destination not written)
//! - XOR: Exclusive OR (`src ^ dst`)
//!
//! All five resolve their operands identically, apply a bitwise operator
//! at the operand width, and update the flags the same way: Zero from the
//! result, Negative from the result's high bit (bit 15 for words, bit 7
//! for bytes), Carry and Overflow always cleared. BIT differs from AND in
//! exactly one respect: the destination is left bit-for-bit unchanged.

use crate::cycles::format_i_cycles;
use crate::instruction::TwoOperand;
use crate::memory::MemoryBus;
use crate::registers::RegisterFile;

/// Executes the AND (Logical AND) instruction.
///
/// ANDs the source operand into the destination and writes the result
/// back at the operand width.
///
/// Flags affected:
/// - Z: Set if the result is 0
/// - N: Set if the result's high bit is set
/// - C, V: Always cleared
pub(crate) fn execute_and<M: MemoryBus>(
    instr: &TwoOperand,
    regs: &mut RegisterFile,
    memory: &mut M,
    extension_words: &[u16],
) -> u32 {
    let byte = instr.is_byte_operation();
    let ops = instr.resolve_operands(regs, memory, extension_words);

    let result = (ops.src_value & ops.dst_value) & operand_mask(byte);

    ops.dst.write(regs, memory, result, byte);
    update_flags(regs, result, byte);

    format_i_cycles(instr.source_mode(), instr.destination_mode())
}

/// Executes the BIS (Bit Set) instruction.
///
/// ORs the source operand into the destination: every bit set in the
/// source becomes set in the destination.
pub(crate) fn execute_bis<M: MemoryBus>(
    instr: &TwoOperand,
    regs: &mut RegisterFile,
    memory: &mut M,
    extension_words: &[u16],
) -> u32 {
    let byte = instr.is_byte_operation();
    let ops = instr.resolve_operands(regs, memory, extension_words);

    let result = (ops.src_value | ops.dst_value) & operand_mask(byte);

    ops.dst.write(regs, memory, result, byte);
    update_flags(regs, result, byte);

    format_i_cycles(instr.source_mode(), instr.destination_mode())
}

/// Executes the BIC (Bit Clear) instruction.
///
/// Clears every bit of the destination that is set in the source
/// (`dst & !src`).
pub(crate) fn execute_bic<M: MemoryBus>(
    instr: &TwoOperand,
    regs: &mut RegisterFile,
    memory: &mut M,
    extension_words: &[u16],
) -> u32 {
    let byte = instr.is_byte_operation();
    let ops = instr.resolve_operands(regs, memory, extension_words);

    let result = (ops.dst_value & !ops.src_value) & operand_mask(byte);

    ops.dst.write(regs, memory, result, byte);
    update_flags(regs, result, byte);

    format_i_cycles(instr.source_mode(), instr.destination_mode())
}

/// Executes the BIT (Bit Test) instruction.
///
/// Computes `src & dst` exactly like AND and updates the flags from the
/// result, but never writes the destination: the flag update is its only
/// observable effect. The destination operand is still resolved and read,
/// so the instruction pays the full destination-mode cycle cost.
pub(crate) fn execute_bit<M: MemoryBus>(
    instr: &TwoOperand,
    regs: &mut RegisterFile,
    memory: &mut M,
    extension_words: &[u16],
) -> u32 {
    let byte = instr.is_byte_operation();
    let ops = instr.resolve_operands(regs, memory, extension_words);

    let result = (ops.src_value & ops.dst_value) & operand_mask(byte);

    // No write-back
    update_flags(regs, result, byte);

    format_i_cycles(instr.source_mode(), instr.destination_mode())
}

/// Executes the XOR (Exclusive OR) instruction.
///
/// XORs the source operand into the destination and writes the result
/// back at the operand width.
pub(crate) fn execute_xor<M: MemoryBus>(
    instr: &TwoOperand,
    regs: &mut RegisterFile,
    memory: &mut M,
    extension_words: &[u16],
) -> u32 {
    let byte = instr.is_byte_operation();
    let ops = instr.resolve_operands(regs, memory, extension_words);

    let result = (ops.src_value ^ ops.dst_value) & operand_mask(byte);

    ops.dst.write(regs, memory, result, byte);
    update_flags(regs, result, byte);

    format_i_cycles(instr.source_mode(), instr.destination_mode())
}

/// Flag update shared by the whole family.
fn update_flags(regs: &mut RegisterFile, result: u16, byte: bool) {
    regs.set_zero(result == 0);
    regs.set_negative(result & sign_bit(byte) != 0);
    regs.set_carry(false);
    regs.set_overflow(false);
}

/// The operand's sign bit: bit 15 for words, bit 7 for bytes.
fn sign_bit(byte: bool) -> u16 {
    if byte {
        0x0080
    } else {
        0x8000
    }
}

/// Width mask applied at the write-back boundary.
fn operand_mask(byte: bool) -> u16 {
    if byte {
        0x00FF
    } else {
        0xFFFF
    }
}
