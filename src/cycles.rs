//! # Cycle Timing
//!
//! Cycle-cost tables for the two-operand instruction format and the
//! status-bit pseudo-instructions.
//!
//! The cost of a two-operand instruction is
//!
//! ```text
//! 1 + cost(source mode, as source) + cost(destination mode, as destination)
//! ```
//!
//! where the fixed 1 covers decode/dispatch. The table is asymmetric: a
//! non-register destination costs more than the same mode in source
//! position, because the destination needs a read-modify-write memory
//! cycle pair where a source needs only a read. Instructions that skip the
//! destination write (BIT) still pay the full destination cost; the
//! operand is read either way.
//!
//! This module is purely data/logic; instructions call
//! [`format_i_cycles`] at the end of their execute step.

use crate::addressing::AddressingMode;

/// Fixed decode/dispatch cost shared by every two-operand instruction.
const BASE_CYCLES: u32 = 1;

/// Cycle count of every status-bit pseudo-instruction.
pub(crate) const STATUS_BIT_CYCLES: u32 = 1;

/// Returns the cycle cost of an addressing mode in source position.
pub fn source_cycles(mode: AddressingMode) -> u32 {
    match mode {
        AddressingMode::Register => 0,
        AddressingMode::Immediate
        | AddressingMode::Indirect
        | AddressingMode::IndirectAutoIncrement => 1,
        AddressingMode::Indexed | AddressingMode::Absolute | AddressingMode::Symbolic => 2,
    }
}

/// Returns the cycle cost of an addressing mode in destination position.
///
/// # Panics
///
/// Panics for Immediate and IndirectAutoIncrement, which are not legal
/// destination modes in the two-operand format.
pub fn destination_cycles(mode: AddressingMode) -> u32 {
    match mode {
        AddressingMode::Register => 0,
        AddressingMode::Indirect => 2,
        AddressingMode::Indexed | AddressingMode::Absolute | AddressingMode::Symbolic => 3,
        AddressingMode::Immediate | AddressingMode::IndirectAutoIncrement => {
            panic!("{mode:?} has no destination cycle cost: illegal destination mode")
        }
    }
}

/// Returns the total cycle count of a two-operand instruction with the
/// given source and destination modes.
pub(crate) fn format_i_cycles(src: AddressingMode, dst: AddressingMode) -> u32 {
    BASE_CYCLES + source_cycles(src) + destination_cycles(dst)
}
