//! # MSP430 CPU Instruction-Execution Core
//!
//! A cycle-accurate execution core for the MSP430-class 16-bit
//! microcontroller instruction set, designed for determinism, clarity, and
//! embeddability.
//!
//! This crate provides the machinery shared by every two-operand
//! ("Format I") instruction: seven addressing modes with their
//! constant-generator special cases, byte/word operand resolution, and the
//! per-mode cycle-cost model, together with the two-operand logic family
//! (AND, BIS, BIC, BIT, XOR) and the status-bit pseudo-instructions
//! (SETC/CLRC, SETZ/CLRZ, SETN/CLRN).
//!
//! ## Quick Start
//!
//! ```rust
//! use libmsp430::{
//!     AddressingMode, FlatMemory, Instruction, Opcode, Register, RegisterFile, TwoOperand,
//! };
//!
//! let mut regs = RegisterFile::new();
//! let mut memory = FlatMemory::new();
//! regs.write(Register::R4, 0xFF0F);
//! regs.write(Register::R5, 0x0FF0);
//!
//! // AND R4, R5
//! let and = Instruction::TwoOperand(TwoOperand::new(
//!     Opcode::And,
//!     false,
//!     Register::R4,
//!     AddressingMode::Register,
//!     Register::R5,
//!     AddressingMode::Register,
//! ));
//!
//! let cycles = and.execute(&mut regs, &mut memory, &[]);
//! assert_eq!(regs.read(Register::R5), 0x0F00);
//! assert_eq!(cycles, 1);
//! ```
//!
//! ## Architecture
//!
//! The core follows a few principles:
//!
//! - **Modularity**: register file and memory are separate values passed
//!   into every execute call; memory sits behind the `MemoryBus` trait
//! - **Determinism**: identical (instruction, registers, memory, extension
//!   words) inputs always produce identical outputs, the property that
//!   makes cycle-accurate trace reproduction possible
//! - **Fail fast**: caller contract violations (wrong extension-word
//!   count, illegal destination modes) panic instead of silently
//!   producing wrong results
//! - **Closed dispatch**: instructions form an exhaustive enum, not an
//!   open registry
//!
//! The fetch-decode loop, interrupts, and peripherals belong to the
//! embedding emulator; this crate executes one decoded instruction at a
//! time.
//!
//! ## Modules
//!
//! - `registers` - Register enum, register file, status flags
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `addressing` - Addressing modes and operand resolution
//! - `instruction` - Decoded-instruction values and the execute contract
//! - `cycles` - Per-mode, per-role cycle-cost tables

pub mod addressing;
pub mod cycles;
pub mod instruction;
pub mod memory;
pub mod registers;

// Internal instruction implementations (not part of the public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use instruction::{Format, Instruction, Opcode, StatusBit, TwoOperand};
pub use memory::{FlatMemory, MemoryBus};
pub use registers::{Register, RegisterFile};
