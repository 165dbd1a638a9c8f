//! Single-signature account contracts.

use neo_crypto::{Crypto, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use neo_primitives::UInt160;
use neo_vm::{OpCode, ScriptBuilder};

pub const CHECK_SIG: &str = "System.Crypto.CheckSig";

/// `PUSHDATA1 <pubkey> SYSCALL System.Crypto.CheckSig`
pub fn signature_redeem_script(public_key: &[u8; PUBLIC_KEY_SIZE]) -> Vec<u8> {
    let mut script = Vec::with_capacity(40);
    script.push(OpCode::PUSHDATA1 as u8);
    script.push(PUBLIC_KEY_SIZE as u8);
    script.extend_from_slice(public_key);
    script.push(OpCode::SYSCALL as u8);
    script.extend_from_slice(&ScriptBuilder::hash_syscall(CHECK_SIG).to_le_bytes());
    script
}

/// `PUSHDATA1 <signature>`
pub fn signature_invocation_script(signature: &[u8; SIGNATURE_SIZE]) -> Vec<u8> {
    let mut script = Vec::with_capacity(2 + SIGNATURE_SIZE);
    script.push(OpCode::PUSHDATA1 as u8);
    script.push(SIGNATURE_SIZE as u8);
    script.extend_from_slice(signature);
    script
}

pub fn to_script_hash(script: &[u8]) -> UInt160 {
    UInt160::from(Crypto::hash160(script))
}

pub fn is_signature_contract(script: &[u8]) -> bool {
    script.len() == 40
        && script[0] == OpCode::PUSHDATA1 as u8
        && script[1] == PUBLIC_KEY_SIZE as u8
        && script[35] == OpCode::SYSCALL as u8
        && script[36..40] == ScriptBuilder::hash_syscall(CHECK_SIG).to_le_bytes()
}
