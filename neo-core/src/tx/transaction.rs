use std::mem;

use neo_crypto::Crypto;
use neo_primitives::{UInt160, UInt256};

use crate::error::{CoreError, CoreResult};
use crate::io::{var_bytes_size, var_int_size, BinEncoder, BinaryWriter};
use crate::tx::{Signer, Witness};

/// A Neo N3 transaction.
///
/// Fees are in datoshi (1 GAS = 10^8 datoshi). Attributes are always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    version: u8,
    nonce: u32,
    system_fee: i64,
    network_fee: i64,
    valid_until_block: u32,
    signers: Vec<Signer>,
    script: Vec<u8>,
    witnesses: Vec<Witness>,
}

impl Transaction {
    /// The maximum size of a transaction.
    pub const MAX_TRANSACTION_SIZE: usize = 102400;

    /// The size of a transaction header.
    pub const HEADER_SIZE: usize = mem::size_of::<u8>() // Version
        + mem::size_of::<u32>() // Nonce
        + mem::size_of::<i64>() // SystemFee
        + mem::size_of::<i64>() // NetworkFee
        + mem::size_of::<u32>(); // ValidUntilBlock

    /// Creates an unsigned transaction with zero fees.
    pub fn new(
        nonce: u32,
        valid_until_block: u32,
        signers: Vec<Signer>,
        script: Vec<u8>,
    ) -> CoreResult<Self> {
        if signers.is_empty() {
            return Err(CoreError::NoSigners);
        }
        if script.is_empty() {
            return Err(CoreError::EmptyScript);
        }
        Ok(Self {
            version: 0,
            nonce,
            system_fee: 0,
            network_fee: 0,
            valid_until_block,
            signers,
            script,
            witnesses: Vec::new(),
        })
    }

    pub fn random_nonce() -> u32 {
        rand::random()
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    pub fn system_fee(&self) -> i64 {
        self.system_fee
    }

    pub fn network_fee(&self) -> i64 {
        self.network_fee
    }

    pub fn set_system_fee(&mut self, fee: i64) {
        self.system_fee = fee;
    }

    pub fn set_network_fee(&mut self, fee: i64) {
        self.network_fee = fee;
    }

    pub fn valid_until_block(&self) -> u32 {
        self.valid_until_block
    }

    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    /// The sender is the first signer, regardless of its scope.
    pub fn sender(&self) -> Option<UInt160> {
        self.signers.first().map(|signer| signer.account)
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    pub fn add_witness(&mut self, witness: Witness) {
        self.witnesses.push(witness);
    }

    /// Writes everything covered by the transaction hash.
    pub fn serialize_unsigned(&self, w: &mut BinaryWriter<'_>) {
        w.write_u8(self.version);
        w.write_u32(self.nonce);
        w.write_i64(self.system_fee);
        w.write_i64(self.network_fee);
        w.write_u32(self.valid_until_block);
        self.signers.as_slice().encode_bin(w);
        // attributes
        w.write_var_int(0);
        w.write_var_bytes(&self.script);
    }

    pub fn get_hash_data(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.unsigned_size());
        self.serialize_unsigned(&mut BinaryWriter::new(&mut buffer));
        buffer
    }

    pub fn unsigned_size(&self) -> usize {
        Self::HEADER_SIZE
            + self.signers.as_slice().bin_size()
            + var_int_size(0)
            + var_bytes_size(self.script.len())
    }

    pub fn hash(&self) -> UInt256 {
        UInt256::from(Crypto::sha256(&self.get_hash_data()))
    }

    /// Network magic followed by the transaction hash, the message each witness signs.
    pub fn get_sign_data(&self, network: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity(4 + 32);
        data.extend_from_slice(&network.to_le_bytes());
        data.extend_from_slice(&self.hash().to_array());
        data
    }

    /// Full encoding including witnesses; requires one witness per signer.
    pub fn to_array(&self) -> CoreResult<Vec<u8>> {
        if self.witnesses.len() != self.signers.len() {
            return Err(CoreError::WitnessCountMismatch {
                signers: self.signers.len(),
                witnesses: self.witnesses.len(),
            });
        }
        let size = self.bin_size();
        if size > Self::MAX_TRANSACTION_SIZE {
            return Err(CoreError::TooLarge {
                size,
                max: Self::MAX_TRANSACTION_SIZE,
            });
        }
        Ok(self.to_bin())
    }
}

impl BinEncoder for Transaction {
    fn encode_bin(&self, w: &mut BinaryWriter<'_>) {
        self.serialize_unsigned(w);
        self.witnesses.as_slice().encode_bin(w);
    }

    fn bin_size(&self) -> usize {
        self.unsigned_size() + self.witnesses.as_slice().bin_size()
    }
}
