//! # Instruction Contract
//!
//! This module defines the decoded-instruction values consumed by the
//! execution core: the closed [`Instruction`] union over the concrete
//! instruction kinds, the two-operand [`TwoOperand`] form, and the
//! zero-operand [`StatusBit`] pseudo-instructions.
//!
//! An instruction is an immutable value: the decoder constructs it once
//! from a fetched instruction word, a single [`Instruction::execute`] call
//! consumes it together with its extension words, and it is then
//! discarded. Dispatch is a single exhaustive match; there is no open
//! instruction registry.
//!
//! ## Rendering
//!
//! `Display` reproduces assembly syntax (`MNEMONIC[.B] <src>, <dst>`).
//! Extension words live outside the instruction value, so `Display` shows
//! `??` where an immediate, offset or address would go;
//! [`Instruction::to_assembly`] substitutes the real values when the words
//! are at hand.

use std::fmt;

use log::trace;

use crate::addressing::{AddressingMode, ExtensionWords, OperandRole};
use crate::instructions::{flags, logic};
use crate::memory::MemoryBus;
use crate::registers::{Register, RegisterFile};

/// Instruction format tag, fixed per opcode family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Two-operand instructions (Format I).
    I,
    /// Status-bit pseudo-instructions.
    Pseudo,
}

/// Two-operand logic-family opcode, the 4-bit value from the top of the
/// instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Opcode {
    /// Test bits: `src & dst`, destination unchanged.
    Bit = 0xB,
    /// Clear bits: `dst & !src`.
    Bic = 0xC,
    /// Set bits: `src | dst`.
    Bis = 0xD,
    /// Exclusive or: `src ^ dst`.
    Xor = 0xE,
    /// Logical and: `src & dst`.
    And = 0xF,
}

impl Opcode {
    /// Returns the 4-bit opcode field value.
    pub fn value(self) -> u16 {
        self as u16
    }

    /// Returns the base mnemonic, without any width suffix.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Bit => "BIT",
            Opcode::Bic => "BIC",
            Opcode::Bis => "BIS",
            Opcode::Xor => "XOR",
            Opcode::And => "AND",
        }
    }
}

/// A decoded two-operand (Format I) instruction.
///
/// Holds the raw instruction word plus the decoded fields: opcode, byte
/// flag, and the source/destination register-mode pairs.
///
/// # Examples
///
/// ```
/// use libmsp430::{AddressingMode, Opcode, Register, TwoOperand};
///
/// // AND R4, R5
/// let and = TwoOperand::new(
///     Opcode::And,
///     false,
///     Register::R4,
///     AddressingMode::Register,
///     Register::R5,
///     AddressingMode::Register,
/// );
/// assert_eq!(and.raw_word(), 0xF405);
/// assert_eq!(and.mnemonic(), "AND");
/// assert_eq!(and.extension_word_count(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoOperand {
    word: u16,
    opcode: Opcode,
    byte: bool,
    src: Register,
    src_mode: AddressingMode,
    dst: Register,
    dst_mode: AddressingMode,
}

impl TwoOperand {
    /// Creates a two-operand instruction, synthesizing its raw word from
    /// the Format I bit layout.
    ///
    /// # Panics
    ///
    /// Panics if `dst_mode` is not legal in destination position
    /// (Immediate, IndirectAutoIncrement).
    pub fn new(
        opcode: Opcode,
        byte: bool,
        src: Register,
        src_mode: AddressingMode,
        dst: Register,
        dst_mode: AddressingMode,
    ) -> Self {
        assert!(
            dst_mode.valid_as_destination(),
            "{dst_mode:?} is not a legal destination addressing mode"
        );
        let word = encode_format_i(opcode, byte, src, src_mode, dst, dst_mode);
        Self {
            word,
            opcode,
            byte,
            src,
            src_mode,
            dst,
            dst_mode,
        }
    }

    /// Returns the raw instruction word.
    pub fn raw_word(&self) -> u16 {
        self.word
    }

    /// Returns the format tag.
    pub fn format(&self) -> Format {
        Format::I
    }

    /// Returns the opcode.
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Returns true if this is a byte operation.
    pub fn is_byte_operation(&self) -> bool {
        self.byte
    }

    /// Returns the source register.
    pub fn source_register(&self) -> Register {
        self.src
    }

    /// Returns the source addressing mode.
    pub fn source_mode(&self) -> AddressingMode {
        self.src_mode
    }

    /// Returns the destination register.
    pub fn destination_register(&self) -> Register {
        self.dst
    }

    /// Returns the destination addressing mode.
    pub fn destination_mode(&self) -> AddressingMode {
        self.dst_mode
    }

    /// Returns the mnemonic, `.B`-suffixed for byte operations.
    pub fn mnemonic(&self) -> String {
        if self.byte {
            format!("{}.B", self.opcode.mnemonic())
        } else {
            self.opcode.mnemonic().to_string()
        }
    }

    /// Returns how many extension words this instruction consumes: the sum
    /// of the two operands' per-mode requirements.
    pub fn extension_word_count(&self) -> usize {
        self.src_mode.extension_words() + self.dst_mode.extension_words()
    }

    /// Renders the instruction with real extension-word values.
    pub fn to_assembly(&self, words: &[u16]) -> String {
        let mut cursor = words.iter().copied();
        let src_word = match self.src_mode.extension_words() {
            0 => None,
            _ => cursor.next(),
        };
        let dst_word = match self.dst_mode.extension_words() {
            0 => None,
            _ => cursor.next(),
        };
        format!(
            "{} {}, {}",
            self.mnemonic(),
            format_operand(self.src, self.src_mode, src_word),
            format_operand(self.dst, self.dst_mode, dst_word),
        )
    }

    /// Executes the instruction: resolve operands, compute, write back,
    /// update flags, and return the cycle count.
    pub fn execute<M: MemoryBus>(
        &self,
        regs: &mut RegisterFile,
        memory: &mut M,
        extension_words: &[u16],
    ) -> u32 {
        match self.opcode {
            Opcode::And => logic::execute_and(self, regs, memory, extension_words),
            Opcode::Bis => logic::execute_bis(self, regs, memory, extension_words),
            Opcode::Bic => logic::execute_bic(self, regs, memory, extension_words),
            Opcode::Bit => logic::execute_bit(self, regs, memory, extension_words),
            Opcode::Xor => logic::execute_xor(self, regs, memory, extension_words),
        }
    }

    /// Resolves both operands in source-then-destination order, reading
    /// their current values.
    ///
    /// Shared by every two-operand instruction; kept here so the operand
    /// protocol (extension-word order, role checking) exists in one place.
    pub(crate) fn resolve_operands<M: MemoryBus>(
        &self,
        regs: &mut RegisterFile,
        memory: &M,
        extension_words: &[u16],
    ) -> ResolvedOperands {
        let mut words = ExtensionWords::new(extension_words);
        let src = crate::addressing::resolve(
            regs,
            &mut words,
            self.src,
            self.src_mode,
            self.byte,
            OperandRole::Source,
        );
        let src_value = src.read(regs, memory, self.byte);
        let dst = crate::addressing::resolve(
            regs,
            &mut words,
            self.dst,
            self.dst_mode,
            self.byte,
            OperandRole::Destination,
        );
        let dst_value = dst.read(regs, memory, self.byte);
        ResolvedOperands {
            src_value,
            dst,
            dst_value,
        }
    }
}

impl fmt::Display for TwoOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_assembly(&[]))
    }
}

/// Both operands of a two-operand instruction, resolved and read.
pub(crate) struct ResolvedOperands {
    /// Source value at operand width.
    pub(crate) src_value: u16,
    /// Destination location, for the write-back.
    pub(crate) dst: crate::addressing::Operand,
    /// Destination value at operand width.
    pub(crate) dst_value: u16,
}

/// A status-bit pseudo-instruction.
///
/// Zero operands, zero extension words, fixed one cycle: each variant sets
/// or clears exactly one condition flag and leaves every other flag
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBit {
    /// Set the Carry flag.
    Setc,
    /// Clear the Carry flag.
    Clrc,
    /// Set the Zero flag.
    Setz,
    /// Clear the Zero flag.
    Clrz,
    /// Set the Negative flag.
    Setn,
    /// Clear the Negative flag.
    Clrn,
}

impl StatusBit {
    /// Returns the format tag.
    pub fn format(&self) -> Format {
        Format::Pseudo
    }

    /// Returns the mnemonic.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            StatusBit::Setc => "SETC",
            StatusBit::Clrc => "CLRC",
            StatusBit::Setz => "SETZ",
            StatusBit::Clrz => "CLRZ",
            StatusBit::Setn => "SETN",
            StatusBit::Clrn => "CLRN",
        }
    }

    /// Executes the pseudo-instruction against the register file and
    /// returns the cycle count.
    pub fn execute(&self, regs: &mut RegisterFile) -> u32 {
        match self {
            StatusBit::Setc => flags::execute_setc(regs),
            StatusBit::Clrc => flags::execute_clrc(regs),
            StatusBit::Setz => flags::execute_setz(regs),
            StatusBit::Clrz => flags::execute_clrz(regs),
            StatusBit::Setn => flags::execute_setn(regs),
            StatusBit::Clrn => flags::execute_clrn(regs),
        }
    }
}

impl fmt::Display for StatusBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction, ready to execute.
///
/// Closed union over the concrete instruction kinds. The decoder (an
/// external collaborator) constructs one of these per fetched instruction
/// word; `execute` consumes it against a register file, a memory bus, and
/// the instruction's extension words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// A two-operand (Format I) instruction.
    TwoOperand(TwoOperand),
    /// A status-bit pseudo-instruction.
    StatusBit(StatusBit),
}

impl Instruction {
    /// Returns the format tag.
    pub fn format(&self) -> Format {
        match self {
            Instruction::TwoOperand(i) => i.format(),
            Instruction::StatusBit(s) => s.format(),
        }
    }

    /// Returns the mnemonic, `.B`-suffixed for byte operations.
    pub fn mnemonic(&self) -> String {
        match self {
            Instruction::TwoOperand(i) => i.mnemonic(),
            Instruction::StatusBit(s) => s.mnemonic().to_string(),
        }
    }

    /// Returns true if this is a byte operation.
    pub fn is_byte_operation(&self) -> bool {
        match self {
            Instruction::TwoOperand(i) => i.is_byte_operation(),
            Instruction::StatusBit(_) => false,
        }
    }

    /// Returns how many extension words this instruction consumes.
    pub fn extension_word_count(&self) -> usize {
        match self {
            Instruction::TwoOperand(i) => i.extension_word_count(),
            Instruction::StatusBit(_) => 0,
        }
    }

    /// Renders the instruction with real extension-word values.
    pub fn to_assembly(&self, words: &[u16]) -> String {
        match self {
            Instruction::TwoOperand(i) => i.to_assembly(words),
            Instruction::StatusBit(s) => s.mnemonic().to_string(),
        }
    }

    /// Executes one instruction and returns the cycle count.
    ///
    /// Performs the full resolve → compute → write-back → flag-update →
    /// cost-lookup sequence. Mutations to `regs` and `memory` are the only
    /// side effects; identical inputs always produce identical outputs.
    ///
    /// # Panics
    ///
    /// Panics if `extension_words` does not hold exactly
    /// [`Instruction::extension_word_count`] words. The caller (decoder)
    /// owns that contract, and masking a mismatch would silently corrupt
    /// cycle-accurate traces.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmsp430::{
    ///     AddressingMode, FlatMemory, Instruction, Opcode, Register, RegisterFile, TwoOperand,
    /// };
    ///
    /// let mut regs = RegisterFile::new();
    /// let mut memory = FlatMemory::new();
    /// regs.write(Register::R4, 0xFF0F);
    /// regs.write(Register::R5, 0x0FF0);
    ///
    /// // AND R4, R5
    /// let and = Instruction::TwoOperand(TwoOperand::new(
    ///     Opcode::And,
    ///     false,
    ///     Register::R4,
    ///     AddressingMode::Register,
    ///     Register::R5,
    ///     AddressingMode::Register,
    /// ));
    /// let cycles = and.execute(&mut regs, &mut memory, &[]);
    ///
    /// assert_eq!(regs.read(Register::R5), 0x0F00);
    /// assert_eq!(cycles, 1);
    /// ```
    pub fn execute<M: MemoryBus>(
        &self,
        regs: &mut RegisterFile,
        memory: &mut M,
        extension_words: &[u16],
    ) -> u32 {
        let expected = self.extension_word_count();
        assert_eq!(
            extension_words.len(),
            expected,
            "{} requires {} extension word(s), got {}",
            self.mnemonic(),
            expected,
            extension_words.len()
        );

        let cycles = match self {
            Instruction::TwoOperand(i) => i.execute(regs, memory, extension_words),
            Instruction::StatusBit(s) => s.execute(regs),
        };
        trace!(
            "executed {} ({} cycles)",
            self.to_assembly(extension_words),
            cycles
        );
        cycles
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::TwoOperand(i) => write!(f, "{i}"),
            Instruction::StatusBit(s) => write!(f, "{s}"),
        }
    }
}

/// Synthesizes the Format I instruction word:
/// opcode[15:12] src[11:8] Ad[7] B/W[6] As[5:4] dst[3:0].
fn encode_format_i(
    opcode: Opcode,
    byte: bool,
    src: Register,
    src_mode: AddressingMode,
    dst: Register,
    dst_mode: AddressingMode,
) -> u16 {
    let (src_field, as_bits) = source_encoding(src, src_mode);
    let (dst_field, ad_bit) = destination_encoding(dst, dst_mode);
    (opcode.value() << 12)
        | (src_field << 8)
        | (ad_bit << 7)
        | ((byte as u16) << 6)
        | (as_bits << 4)
        | dst_field
}

/// Maps a source (register, mode) pair onto the register field and As
/// bits, applying the register aliases the hardware uses for the
/// extension-word modes.
fn source_encoding(reg: Register, mode: AddressingMode) -> (u16, u16) {
    match mode {
        AddressingMode::Register => (reg.index() as u16, 0b00),
        AddressingMode::Indexed => (reg.index() as u16, 0b01),
        AddressingMode::Indirect => (reg.index() as u16, 0b10),
        AddressingMode::IndirectAutoIncrement => (reg.index() as u16, 0b11),
        // Immediate is @PC+ on the instruction stream
        AddressingMode::Immediate => (Register::PC.index() as u16, 0b11),
        // Absolute is indexed off SR with the base suppressed
        AddressingMode::Absolute => (Register::SR.index() as u16, 0b01),
        // Symbolic is indexed off PC
        AddressingMode::Symbolic => (Register::PC.index() as u16, 0b01),
    }
}

/// Maps a destination (register, mode) pair onto the register field and
/// the single Ad bit.
fn destination_encoding(reg: Register, mode: AddressingMode) -> (u16, u16) {
    match mode {
        AddressingMode::Register => (reg.index() as u16, 0),
        AddressingMode::Indexed => (reg.index() as u16, 1),
        // @Rn destinations borrow the indexed encoding with a zero offset
        AddressingMode::Indirect => (reg.index() as u16, 1),
        AddressingMode::Absolute => (Register::SR.index() as u16, 1),
        AddressingMode::Symbolic => (Register::PC.index() as u16, 1),
        AddressingMode::Immediate | AddressingMode::IndirectAutoIncrement => {
            unreachable!("rejected by TwoOperand::new")
        }
    }
}

/// Formats one operand in assembly syntax. `word` carries the operand's
/// extension word when available; `??` stands in when it is not.
fn format_operand(reg: Register, mode: AddressingMode, word: Option<u16>) -> String {
    match mode {
        AddressingMode::Register => reg.to_string(),
        AddressingMode::Indirect => format!("@{reg}"),
        AddressingMode::IndirectAutoIncrement => format!("@{reg}+"),
        AddressingMode::Indexed => match word {
            Some(w) => format!("{}({reg})", w as i16),
            None => format!("??({reg})"),
        },
        AddressingMode::Immediate => match word {
            Some(w) => format!("#0x{w:04X}"),
            None => "#??".to_string(),
        },
        AddressingMode::Absolute => match word {
            Some(w) => format!("&0x{w:04X}"),
            None => "&??".to_string(),
        },
        AddressingMode::Symbolic => match word {
            Some(w) => format!("0x{w:04X}"),
            None => "??".to_string(),
        },
    }
}
