//! Script builder module for the Neo Virtual Machine.
//!
//! Appends instructions to a growing buffer. Literal values go through
//! [`PushValue`], a closed set of pushable shapes, so every case is handled
//! at compile time.

use crate::contract_parameter::ContractParameter;
use crate::interop::SYSTEM_CONTRACT_CALL_ID;
use crate::numeric::{sign_extend, to_twos};
use crate::{CallFlags, OpCode, VmError, VmResult};
use neo_config::{MAX_ITEM_SIZE, MAX_SCRIPT_LENGTH};
use num_bigint::BigInt;

/// A value that can be pushed onto the evaluation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushValue {
    /// Absent value; pushed as `false`.
    Null,
    Bool(bool),
    Int(BigInt),
    Bytes(Vec<u8>),
    /// UTF-8 string, pushed as its bytes.
    Str(String),
    Array(Vec<PushValue>),
    Param(ContractParameter),
}

impl From<bool> for PushValue {
    fn from(value: bool) -> Self {
        PushValue::Bool(value)
    }
}

macro_rules! impl_push_int {
    ($($t:ty),*) => {
        $(impl From<$t> for PushValue {
            fn from(value: $t) -> Self {
                PushValue::Int(BigInt::from(value))
            }
        })*
    };
}

impl_push_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<BigInt> for PushValue {
    fn from(value: BigInt) -> Self {
        PushValue::Int(value)
    }
}

impl From<Vec<u8>> for PushValue {
    fn from(value: Vec<u8>) -> Self {
        PushValue::Bytes(value)
    }
}

impl From<&[u8]> for PushValue {
    fn from(value: &[u8]) -> Self {
        PushValue::Bytes(value.to_vec())
    }
}

impl From<&str> for PushValue {
    fn from(value: &str) -> Self {
        PushValue::Str(value.to_string())
    }
}

impl From<String> for PushValue {
    fn from(value: String) -> Self {
        PushValue::Str(value)
    }
}

impl From<Vec<PushValue>> for PushValue {
    fn from(value: Vec<PushValue>) -> Self {
        PushValue::Array(value)
    }
}

impl From<ContractParameter> for PushValue {
    fn from(value: ContractParameter) -> Self {
        PushValue::Param(value)
    }
}

impl<T: Into<PushValue>> From<Option<T>> for PushValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PushValue::Null, Into::into)
    }
}

/// Helps construct VM scripts programmatically.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Appends an opcode followed by its raw operand bytes.
    pub fn emit(&mut self, op: OpCode, operand: &[u8]) -> &mut Self {
        self.script.push(op as u8);
        self.script.extend_from_slice(operand);
        self
    }

    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Appends already-compiled bytecode.
    pub fn emit_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Appends already-compiled bytecode given as hex, with or without `0x`.
    pub fn emit_hex(&mut self, hex_script: &str) -> VmResult<&mut Self> {
        let trimmed = hex_script.strip_prefix("0x").unwrap_or(hex_script);
        let bytes = hex::decode(trimmed)?;
        Ok(self.emit_raw(&bytes))
    }

    pub fn emit_push(&mut self, value: &PushValue) -> VmResult<&mut Self> {
        match value {
            PushValue::Null => Ok(self.emit_push_bool(false)),
            PushValue::Bool(b) => Ok(self.emit_push_bool(*b)),
            PushValue::Int(n) => self.emit_push_int(n),
            PushValue::Bytes(bytes) => self.emit_push_bytes(bytes),
            PushValue::Str(s) => self.emit_push_bytes(s.as_bytes()),
            PushValue::Array(items) => {
                for item in items.iter().rev() {
                    self.emit_push(item)?;
                }
                self.emit_push_int(&BigInt::from(items.len()))?;
                Ok(self.emit_opcode(OpCode::PACK))
            }
            PushValue::Param(param) => self.emit_push_param(param),
        }
    }

    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        self.emit_opcode(if value { OpCode::PUSHT } else { OpCode::PUSHF })
    }

    /// Pushes an integer using the fast opcodes for `-1..=16` and otherwise the
    /// narrowest `PUSHINT*` that holds its minimal two's-complement form.
    pub fn emit_push_int(&mut self, value: &BigInt) -> VmResult<&mut Self> {
        if let Some(op) = i64::try_from(value).ok().and_then(OpCode::small_int) {
            return Ok(self.emit_opcode(op));
        }

        let bytes = to_twos(value);
        let (op, width) = match bytes.len() {
            0..=1 => (OpCode::PUSHINT8, 1),
            2 => (OpCode::PUSHINT16, 2),
            3..=4 => (OpCode::PUSHINT32, 4),
            5..=8 => (OpCode::PUSHINT64, 8),
            9..=16 => (OpCode::PUSHINT128, 16),
            17..=32 => (OpCode::PUSHINT256, 32),
            n => {
                return Err(VmError::invalid_operation_msg(format!(
                    "integer needs {n} bytes, more than PUSHINT256 holds"
                )))
            }
        };
        Ok(self.emit(op, &sign_extend(&bytes, width)))
    }

    /// Pushes a byte string with the narrowest `PUSHDATA*` length prefix.
    pub fn emit_push_bytes(&mut self, data: &[u8]) -> VmResult<&mut Self> {
        let len = data.len();
        if len > MAX_ITEM_SIZE {
            return Err(VmError::ItemTooLarge {
                size: len,
                max: MAX_ITEM_SIZE,
            });
        }
        if len <= u8::MAX as usize {
            self.emit(OpCode::PUSHDATA1, &[len as u8]);
        } else if len <= u16::MAX as usize {
            self.emit(OpCode::PUSHDATA2, &(len as u16).to_le_bytes());
        } else {
            self.emit(OpCode::PUSHDATA4, &(len as u32).to_le_bytes());
        }
        Ok(self.emit_raw(data))
    }

    fn emit_push_param(&mut self, param: &ContractParameter) -> VmResult<&mut Self> {
        match param {
            ContractParameter::Any => Ok(self.emit_opcode(OpCode::PUSHNULL)),
            ContractParameter::Boolean(b) => Ok(self.emit_push_bool(*b)),
            ContractParameter::Integer(n) => self.emit_push_int(n),
            ContractParameter::ByteArray(bytes) => self.emit_push_bytes(bytes),
            ContractParameter::String(s) => self.emit_push_bytes(s.as_bytes()),
            ContractParameter::Hash160(h) => self.emit_push_bytes(h),
            ContractParameter::Hash256(h) => self.emit_push_bytes(h),
            ContractParameter::PublicKey(k) => self.emit_push_bytes(k),
            ContractParameter::Signature(s) => self.emit_push_bytes(s),
            ContractParameter::Array(items) => {
                for item in items.iter().rev() {
                    self.emit_push_param(item)?;
                }
                self.emit_push_int(&BigInt::from(items.len()))?;
                Ok(self.emit_opcode(OpCode::PACK))
            }
            ContractParameter::Map(entries) => {
                if entries.is_empty() {
                    return Ok(self.emit_opcode(OpCode::NEWMAP));
                }
                for (key, value) in entries.iter().rev() {
                    self.emit_push_param(value)?;
                    self.emit_push_param(key)?;
                }
                self.emit_push_int(&BigInt::from(entries.len()))?;
                Ok(self.emit_opcode(OpCode::PACKMAP))
            }
        }
    }

    pub fn emit_syscall(&mut self, interop_id: u32) -> &mut Self {
        self.emit(OpCode::SYSCALL, &interop_id.to_le_bytes())
    }

    /// Emits a call to `operation` on the contract whose little-endian
    /// scripthash is `script_hash`, with all call flags.
    ///
    /// `System.Contract.Call` pops hash, operation, flags and then the
    /// argument array, so they are pushed in the reverse of that order.
    pub fn emit_contract_call(
        &mut self,
        script_hash: &[u8; 20],
        operation: &str,
        args: &[PushValue],
    ) -> VmResult<&mut Self> {
        self.emit_contract_call_with_flags(script_hash, operation, args, CallFlags::ALL)
    }

    pub fn emit_contract_call_with_flags(
        &mut self,
        script_hash: &[u8; 20],
        operation: &str,
        args: &[PushValue],
        flags: CallFlags,
    ) -> VmResult<&mut Self> {
        self.emit_push(&PushValue::Array(args.to_vec()))?;
        self.emit_push_int(&BigInt::from(flags.bits()))?;
        self.emit_push_bytes(operation.as_bytes())?;
        self.emit_push_bytes(script_hash)?;
        Ok(self.emit_syscall(SYSTEM_CONTRACT_CALL_ID))
    }

    /// Returns the script, failing if it exceeds the transaction script limit.
    pub fn to_array(&self) -> VmResult<Vec<u8>> {
        if self.script.len() > MAX_SCRIPT_LENGTH {
            return Err(VmError::ScriptTooLarge {
                size: self.script.len(),
                max: MAX_SCRIPT_LENGTH,
            });
        }
        Ok(self.script.clone())
    }

    pub fn into_bytes(self) -> VmResult<Vec<u8>> {
        self.to_array()
    }
}
