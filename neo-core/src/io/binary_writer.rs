/// A binary writer appending little-endian values to a byte buffer.
///
/// # Examples
///
/// ```rust
/// use neo_core::io::BinaryWriter;
/// let mut buffer = Vec::new();
/// let mut writer = BinaryWriter::new(&mut buffer);
///
/// writer.write_u32(42);
/// writer.write_var_bytes(b"Neo");
///
/// assert_eq!(buffer, [42, 0, 0, 0, 3, 78, 101, 111]);
/// ```
pub struct BinaryWriter<'a> {
    inner: &'a mut Vec<u8>,
}

impl<'a> BinaryWriter<'a> {
    pub fn new(inner: &'a mut Vec<u8>) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> &'a mut Vec<u8> {
        self.inner
    }

    pub fn get_ref(&self) -> &Vec<u8> {
        self.inner
    }

    pub fn write_u8(&mut self, value: u8) {
        self.inner.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bytes(&mut self, buffer: &[u8]) {
        self.inner.extend_from_slice(buffer);
    }

    /// Writes a Neo var-int: one byte below `0xFD`, else a marker and 2/4/8 bytes.
    pub fn write_var_int(&mut self, value: u64) {
        if value < 0xFD {
            self.write_u8(value as u8);
        } else if value <= 0xFFFF {
            self.write_u8(0xFD);
            self.write_u16(value as u16);
        } else if value <= 0xFFFF_FFFF {
            self.write_u8(0xFE);
            self.write_u32(value as u32);
        } else {
            self.write_u8(0xFF);
            self.write_u64(value);
        }
    }

    pub fn write_var_bytes(&mut self, value: &[u8]) {
        self.write_var_int(value.len() as u64);
        self.write_bytes(value);
    }
}
