//! Script builder for NeoVM invocation scripts.

use crate::call_flags::CallFlags;
use crate::contract_parameter::ContractParameter;
use crate::error::{VmError, VmResult};
use crate::op_code::OpCode;
use neo_primitives::UInt160;
use num_bigint::{BigInt, Sign};
use sha2::{Digest, Sha256};

/// Interop name of the dynamic contract call syscall.
pub const SYSTEM_CONTRACT_CALL: &str = "System.Contract.Call";

/// Builds NeoVM scripts byte by byte.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Emits a raw opcode followed by an optional operand.
    pub fn emit(&mut self, op: OpCode, operand: &[u8]) -> &mut Self {
        self.script.push(op as u8);
        self.script.extend_from_slice(operand);
        self
    }

    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.emit(op, &[])
    }

    /// Pushes a byte string with the smallest PUSHDATA form that fits.
    pub fn emit_push(&mut self, data: &[u8]) -> VmResult<&mut Self> {
        let len = data.len();
        if len < 0x100 {
            self.script.push(OpCode::PUSHDATA1 as u8);
            self.script.push(len as u8);
        } else if len < 0x10000 {
            self.script.push(OpCode::PUSHDATA2 as u8);
            self.script.extend_from_slice(&(len as u16).to_le_bytes());
        } else if let Ok(len32) = u32::try_from(len) {
            self.script.push(OpCode::PUSHDATA4 as u8);
            self.script.extend_from_slice(&len32.to_le_bytes());
        } else {
            return Err(VmError::PayloadTooLarge(len));
        }
        self.script.extend_from_slice(data);
        Ok(self)
    }

    pub fn emit_push_string(&mut self, value: &str) -> VmResult<&mut Self> {
        self.emit_push(value.as_bytes())
    }

    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        self.emit_opcode(if value { OpCode::PUSHT } else { OpCode::PUSHF })
    }

    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        match value {
            -1 => self.emit_opcode(OpCode::PUSHM1),
            0..=16 => {
                self.script.push(OpCode::PUSH0 as u8 + value as u8);
                self
            }
            _ => {
                // Fits every i64 so the PUSHINT256 bound cannot trip.
                let bytes = BigInt::from(value).to_signed_bytes_le();
                let negative = value < 0;
                let (op, width) = pushint_width(bytes.len()).unwrap_or((OpCode::PUSHINT64, 8));
                let padded = pad_signed(&bytes, width, negative);
                self.emit(op, &padded)
            }
        }
    }

    /// Pushes an arbitrary integer using the narrowest PUSHINTn form.
    pub fn emit_push_bigint(&mut self, value: &BigInt) -> VmResult<&mut Self> {
        if *value >= BigInt::from(-1) && *value <= BigInt::from(16) {
            let small = i64::try_from(value).map_err(|_| VmError::IntegerTooLarge)?;
            return Ok(self.emit_push_int(small));
        }

        let bytes = value.to_signed_bytes_le();
        let negative = matches!(value.sign(), Sign::Minus);
        let (op, width) = pushint_width(bytes.len()).ok_or(VmError::IntegerTooLarge)?;
        let padded = pad_signed(&bytes, width, negative);
        Ok(self.emit(op, &padded))
    }

    /// Emits a SYSCALL for the interop service `api`.
    pub fn emit_syscall(&mut self, api: &str) -> VmResult<&mut Self> {
        if api.len() > 252 {
            return Err(VmError::SyscallNameTooLong(api.len()));
        }
        let hash = Self::hash_syscall(api);
        Ok(self.emit(OpCode::SYSCALL, &hash.to_le_bytes()))
    }

    /// Interop hash: first four bytes of SHA-256 over the ASCII name.
    pub fn hash_syscall(api: &str) -> u32 {
        let digest = Sha256::digest(api.as_bytes());
        u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
    }

    /// Pushes a contract parameter onto the evaluation stack.
    pub fn emit_push_parameter(&mut self, parameter: &ContractParameter) -> VmResult<&mut Self> {
        match parameter {
            ContractParameter::Any => Ok(self.emit_opcode(OpCode::PUSHNULL)),
            ContractParameter::Boolean(value) => Ok(self.emit_push_bool(*value)),
            ContractParameter::Integer(value) => self.emit_push_bigint(value),
            ContractParameter::ByteArray(bytes) => self.emit_push(bytes),
            ContractParameter::String(value) => self.emit_push_string(value),
            ContractParameter::Hash160(hash) => self.emit_push(hash.as_bytes()),
            ContractParameter::Array(items) => self.emit_pack(items),
        }
    }

    fn emit_pack(&mut self, items: &[ContractParameter]) -> VmResult<&mut Self> {
        if items.is_empty() {
            return Ok(self.emit_opcode(OpCode::NEWARRAY0));
        }
        for item in items.iter().rev() {
            self.emit_push_parameter(item)?;
        }
        self.emit_push_int(items.len() as i64);
        Ok(self.emit_opcode(OpCode::PACK))
    }

    /// Emits a `System.Contract.Call` of `method` on `contract` with `args`.
    pub fn emit_dynamic_call(
        &mut self,
        contract: &UInt160,
        method: &str,
        flags: CallFlags,
        args: &[ContractParameter],
    ) -> VmResult<&mut Self> {
        self.emit_pack(args)?;
        self.emit_push_int(i64::from(flags.bits()));
        self.emit_push_string(method)?;
        self.emit_push(contract.as_bytes())?;
        self.emit_syscall(SYSTEM_CONTRACT_CALL)
    }

    /// Convenience for a single call with [`CallFlags::ALL`].
    pub fn create_contract_call(
        contract: &UInt160,
        method: &str,
        args: &[ContractParameter],
    ) -> VmResult<Vec<u8>> {
        let mut builder = Self::new();
        builder.emit_dynamic_call(contract, method, CallFlags::ALL, args)?;
        Ok(builder.to_array())
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }
}

fn pushint_width(len: usize) -> Option<(OpCode, usize)> {
    match len {
        0..=1 => Some((OpCode::PUSHINT8, 1)),
        2 => Some((OpCode::PUSHINT16, 2)),
        3..=4 => Some((OpCode::PUSHINT32, 4)),
        5..=8 => Some((OpCode::PUSHINT64, 8)),
        9..=16 => Some((OpCode::PUSHINT128, 16)),
        17..=32 => Some((OpCode::PUSHINT256, 32)),
        _ => None,
    }
}

fn pad_signed(bytes: &[u8], width: usize, negative: bool) -> Vec<u8> {
    let mut padded = bytes.to_vec();
    padded.resize(width, if negative { 0xFF } else { 0x00 });
    padded
}
