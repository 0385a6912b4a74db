//! # Neo VM bytecode assembly
//!
//! This crate does not execute scripts. It provides what a transaction builder
//! needs to produce them:
//!
//! - **OpCode**: the complete instruction table with operand sizes and the
//!   fixed base execution prices used for fee modelling
//! - **ScriptBuilder**: emission of literal pushes and contract calls
//! - **Instruction decoding**: a bounds-checked walk over compiled bytecode
//! - **Integer codec**: minimal two's-complement encoding of big integers
//!
//! ## Example
//!
//! ```rust
//! use neo_vm::{OpCode, PushValue, ScriptBuilder};
//!
//! let mut builder = ScriptBuilder::new();
//! builder.emit_push(&PushValue::from(17)).unwrap();
//! builder.emit_opcode(OpCode::RET);
//! assert_eq!(builder.to_array().unwrap(), vec![0x00, 0x11, 0x40]);
//! ```

pub mod call_flags;
pub mod contract_parameter;
pub mod error;
pub mod instruction;
pub mod interop;
pub mod numeric;
pub mod op_code;
pub mod script_builder;

pub use call_flags::CallFlags;
pub use contract_parameter::ContractParameter;
pub use error::{VmError, VmResult};
pub use instruction::{Instruction, Instructions};
pub use op_code::{OpCode, OperandSize};
pub use script_builder::{PushValue, ScriptBuilder};
