//! Binary encoding helpers for the N3 wire format.

pub mod binary_writer;

pub use binary_writer::BinaryWriter;

/// Types with a canonical N3 binary encoding.
pub trait BinEncoder {
    fn encode_bin(&self, w: &mut BinaryWriter<'_>);

    fn bin_size(&self) -> usize;

    fn to_bin(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.bin_size());
        self.encode_bin(&mut BinaryWriter::new(&mut buffer));
        buffer
    }
}

/// Encoded length of a var-int prefix for `value`.
pub const fn var_int_size(value: u64) -> usize {
    if value < 0xFD {
        1
    } else if value <= 0xFFFF {
        3
    } else if value <= 0xFFFF_FFFF {
        5
    } else {
        9
    }
}

pub const fn var_bytes_size(len: usize) -> usize {
    var_int_size(len as u64) + len
}

impl<T: BinEncoder> BinEncoder for [T] {
    fn encode_bin(&self, w: &mut BinaryWriter<'_>) {
        w.write_var_int(self.len() as u64);
        for item in self {
            item.encode_bin(w);
        }
    }

    fn bin_size(&self) -> usize {
        var_int_size(self.len() as u64) + self.iter().map(BinEncoder::bin_size).sum::<usize>()
    }
}

impl BinEncoder for neo_primitives::UInt160 {
    fn encode_bin(&self, w: &mut BinaryWriter<'_>) {
        w.write_bytes(self.as_bytes());
    }

    fn bin_size(&self) -> usize {
        neo_primitives::UINT160_SIZE
    }
}
