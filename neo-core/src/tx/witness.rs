use crate::io::{var_bytes_size, BinEncoder, BinaryWriter};

/// Invocation and verification scripts proving a signer authorized the transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Witness {
    pub invocation_script: Vec<u8>,
    pub verification_script: Vec<u8>,
}

impl Witness {
    pub fn new(invocation: Vec<u8>, verification: Vec<u8>) -> Self {
        Self {
            invocation_script: invocation,
            verification_script: verification,
        }
    }
}

impl BinEncoder for Witness {
    fn encode_bin(&self, w: &mut BinaryWriter<'_>) {
        w.write_var_bytes(&self.invocation_script);
        w.write_var_bytes(&self.verification_script);
    }

    fn bin_size(&self) -> usize {
        var_bytes_size(self.invocation_script.len()) + var_bytes_size(self.verification_script.len())
    }
}
