//! # Status-Bit Pseudo-Instructions
//!
//! This module implements the pseudo-instructions that directly modify a
//! single condition flag:
//! - SETC / CLRC: Set / clear the Carry flag
//! - SETZ / CLRZ: Set / clear the Zero flag
//! - SETN / CLRN: Set / clear the Negative flag
//!
//! Each takes no operands, consumes no extension words, executes in one
//! cycle, and leaves every other flag untouched. On the hardware these are
//! assembler aliases for BIS/BIC with a constant-generator source and the
//! status register as destination; modeling them as dedicated operations
//! keeps the status register out of the addressable-operand path.

use crate::cycles::STATUS_BIT_CYCLES;
use crate::registers::RegisterFile;

/// Executes SETC: sets the Carry flag.
pub(crate) fn execute_setc(regs: &mut RegisterFile) -> u32 {
    regs.set_carry(true);
    STATUS_BIT_CYCLES
}

/// Executes CLRC: clears the Carry flag.
pub(crate) fn execute_clrc(regs: &mut RegisterFile) -> u32 {
    regs.set_carry(false);
    STATUS_BIT_CYCLES
}

/// Executes SETZ: sets the Zero flag.
pub(crate) fn execute_setz(regs: &mut RegisterFile) -> u32 {
    regs.set_zero(true);
    STATUS_BIT_CYCLES
}

/// Executes CLRZ: clears the Zero flag.
pub(crate) fn execute_clrz(regs: &mut RegisterFile) -> u32 {
    regs.set_zero(false);
    STATUS_BIT_CYCLES
}

/// Executes SETN: sets the Negative flag.
pub(crate) fn execute_setn(regs: &mut RegisterFile) -> u32 {
    regs.set_negative(true);
    STATUS_BIT_CYCLES
}

/// Executes CLRN: clears the Negative flag.
pub(crate) fn execute_clrn(regs: &mut RegisterFile) -> u32 {
    regs.set_negative(false);
    STATUS_BIT_CYCLES
}
