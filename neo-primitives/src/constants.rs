//! Protocol constants shared across the workspace.

/// Size of a script hash in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Size of a transaction hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Default address version byte for Neo N3 (addresses start with 'N').
pub const ADDRESS_VERSION: u8 = 0x35;

/// Length of a base58-decoded address: version + script hash + checksum.
pub const ADDRESS_PAYLOAD_SIZE: usize = 1 + ADDRESS_SIZE + 4;
