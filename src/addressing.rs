//! # Addressing Modes and Operand Resolution
//!
//! This module defines the seven addressing modes supported by the
//! two-operand instruction format and the resolver that turns a
//! (register, mode) pair into a concrete operand location.
//!
//! Each mode determines whether the instruction consumes an extension word,
//! where the operand lives (a register, a memory address, or a synthesized
//! constant), and whether resolving it has a side effect (auto-increment).
//!
//! ## Constant Generator
//!
//! The hardware reuses two register encodings to synthesize small constants
//! without an extension word: CG1 (R3) yields 0, 2 or -1 depending on the
//! mode bits, and the status register (R2) yields 4 or 8 through the
//! indirect modes. That aliasing is handled entirely here, in a single
//! lookup keyed on (register, mode). The register file itself never
//! special-cases reads, and instructions never branch on it.

use crate::memory::MemoryBus;
use crate::registers::{Register, RegisterFile};

/// Addressing mode enumeration for two-operand instructions.
///
/// The addressing mode determines how the CPU interprets the operand's
/// register field and any extension word that follows the instruction word.
///
/// # Extension Words
///
/// - **0 words**: Register, Indirect, IndirectAutoIncrement
/// - **1 word**: Indexed, Immediate, Absolute, Symbolic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// Operand is the register itself.
    ///
    /// Example: `MOV R4, R5`
    Register,

    /// Operand is in memory at (register + signed extension-word offset).
    ///
    /// Example: `AND 6(R4), R5` (memory at R4 + 6)
    Indexed,

    /// Operand is in memory at the register's current value.
    ///
    /// Example: `AND @R4, R5`
    Indirect,

    /// Operand is in memory at the register's current value; the register
    /// is incremented by the operand width (1 for byte operations, 2 for
    /// word operations) after the access.
    ///
    /// Example: `AND @R4+, R5`
    IndirectAutoIncrement,

    /// Operand is the extension word itself. Source-only.
    ///
    /// Example: `AND #0x000F, R5`
    Immediate,

    /// Operand is in memory at the address given by the extension word.
    /// The register field carries a fixed constant-encoding register, not
    /// an address base.
    ///
    /// Example: `AND &0x0200, R5`
    Absolute,

    /// Operand is in memory at (program counter + signed extension-word
    /// offset).
    ///
    /// Example: `AND LABEL, R5` (assembled as an offset from the word
    /// following the instruction stream)
    Symbolic,
}

impl AddressingMode {
    /// Returns how many extension words this mode consumes (0 or 1).
    ///
    /// Fixed per mode; an instruction's total extension-word count is the
    /// sum over its two operands.
    pub fn extension_words(self) -> usize {
        match self {
            AddressingMode::Register
            | AddressingMode::Indirect
            | AddressingMode::IndirectAutoIncrement => 0,
            AddressingMode::Indexed
            | AddressingMode::Immediate
            | AddressingMode::Absolute
            | AddressingMode::Symbolic => 1,
        }
    }

    /// Returns true if this mode is legal in destination position.
    ///
    /// Immediate operands cannot be written at all, and the two-operand
    /// format cannot encode an auto-increment destination.
    pub fn valid_as_destination(self) -> bool {
        !matches!(
            self,
            AddressingMode::Immediate | AddressingMode::IndirectAutoIncrement
        )
    }
}

/// Whether an operand is being resolved in source or destination position.
///
/// The role decides destination-legality checking, constant-generator
/// interception (sources only), and which column of the cycle-cost table
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OperandRole {
    Source,
    Destination,
}

/// Cursor over the extension words supplied alongside an instruction.
///
/// Words are consumed strictly in source-then-destination order. Requesting
/// more words than were supplied is a caller contract violation and panics
/// with an index error.
pub(crate) struct ExtensionWords<'a> {
    words: &'a [u16],
    cursor: usize,
}

impl<'a> ExtensionWords<'a> {
    pub(crate) fn new(words: &'a [u16]) -> Self {
        Self { words, cursor: 0 }
    }

    /// Consumes and returns the next extension word.
    fn next(&mut self) -> u16 {
        let word = self.words[self.cursor];
        self.cursor += 1;
        word
    }
}

/// A resolved operand location.
///
/// The resolver collapses every addressing mode into one of three shapes;
/// instructions then read (and possibly write) the operand without caring
/// which mode produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// Operate on a register in the register file.
    Register(Register),
    /// Operate on memory at an effective address.
    Memory(u16),
    /// A synthesized read-only value (immediate or constant generator).
    Constant(u16),
}

impl Operand {
    /// Reads the operand at the given width.
    ///
    /// Byte reads return only the low 8 bits of the located value; word
    /// reads of memory are little-endian.
    pub(crate) fn read<M: MemoryBus>(self, regs: &RegisterFile, memory: &M, byte: bool) -> u16 {
        match self {
            Operand::Register(reg) => {
                let value = regs.read(reg);
                if byte {
                    value & 0x00FF
                } else {
                    value
                }
            }
            Operand::Memory(addr) => {
                if byte {
                    memory.read(addr) as u16
                } else {
                    memory.read_word(addr)
                }
            }
            Operand::Constant(value) => value,
        }
    }

    /// Writes the operand at the given width.
    ///
    /// Word writes replace the full 16 bits. Byte writes store a single
    /// memory byte, or merge into a register's low byte with the high byte
    /// preserved.
    ///
    /// # Panics
    ///
    /// Panics on constant operands; the resolver only produces constants
    /// in source position, so reaching this is a caller contract violation.
    pub(crate) fn write<M: MemoryBus>(
        self,
        regs: &mut RegisterFile,
        memory: &mut M,
        value: u16,
        byte: bool,
    ) {
        match self {
            Operand::Register(reg) => {
                let merged = if byte {
                    (regs.read(reg) & 0xFF00) | (value & 0x00FF)
                } else {
                    value
                };
                regs.write(reg, merged);
            }
            Operand::Memory(addr) => {
                if byte {
                    memory.write(addr, value as u8);
                } else {
                    memory.write_word(addr, value);
                }
            }
            Operand::Constant(_) => panic!("constant operands are read-only"),
        }
    }
}

/// Constant-generator lookup.
///
/// Returns the constant synthesized for this (register, mode) pair, or
/// `None` when the pair resolves normally. Only the zero-extension-word
/// modes participate, so extension-word accounting stays a pure function
/// of the mode.
fn constant_generator(reg: Register, mode: AddressingMode) -> Option<u16> {
    match (reg, mode) {
        (Register::CG1, AddressingMode::Register) => Some(0),
        (Register::CG1, AddressingMode::Indirect) => Some(2),
        (Register::CG1, AddressingMode::IndirectAutoIncrement) => Some(0xFFFF),
        (Register::SR, AddressingMode::Indirect) => Some(4),
        (Register::SR, AddressingMode::IndirectAutoIncrement) => Some(8),
        _ => None,
    }
}

/// Resolves a (register, mode) pair into an operand location.
///
/// Consumes the mode's extension words from `words` and applies any
/// auto-increment side effect. A constant-generator hit (source role only)
/// short-circuits both: the synthesized value consumes no extension word
/// and leaves R2/R3 untouched.
///
/// Offsets in the Indexed and Symbolic modes are two's-complement; the
/// wrapping add applies the sign.
///
/// # Panics
///
/// Panics when `mode` is illegal for `role`, or when `words` runs out.
pub(crate) fn resolve(
    regs: &mut RegisterFile,
    words: &mut ExtensionWords<'_>,
    reg: Register,
    mode: AddressingMode,
    byte: bool,
    role: OperandRole,
) -> Operand {
    if role == OperandRole::Destination && !mode.valid_as_destination() {
        panic!("{mode:?} is not a legal destination addressing mode");
    }

    if role == OperandRole::Source {
        if let Some(constant) = constant_generator(reg, mode) {
            let constant = if byte { constant & 0x00FF } else { constant };
            return Operand::Constant(constant);
        }
    }

    match mode {
        AddressingMode::Register => Operand::Register(reg),
        AddressingMode::Indirect => Operand::Memory(regs.read(reg)),
        AddressingMode::IndirectAutoIncrement => {
            let addr = regs.read(reg);
            let step = if byte { 1 } else { 2 };
            regs.write(reg, addr.wrapping_add(step));
            Operand::Memory(addr)
        }
        AddressingMode::Immediate => {
            let value = words.next();
            Operand::Constant(if byte { value & 0x00FF } else { value })
        }
        AddressingMode::Indexed => {
            let offset = words.next();
            Operand::Memory(regs.read(reg).wrapping_add(offset))
        }
        AddressingMode::Absolute => Operand::Memory(words.next()),
        AddressingMode::Symbolic => {
            let offset = words.next();
            Operand::Memory(regs.pc().wrapping_add(offset))
        }
    }
}
