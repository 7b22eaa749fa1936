//! Bounds-checked byte access: a sequential cursor for the segment stream and
//! random-access endian reads for TIFF blocks. Everything above this module
//! goes through these helpers instead of indexing buffers directly.

/// TIFF byte order, declared by the "II"/"MM" field of the TIFF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    #[inline]
    pub fn read_u16(self, data: &[u8], offset: usize) -> Option<u16> {
        let bytes: [u8; 2] = data.get(offset..offset + 2)?.try_into().ok()?;
        Some(match self {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn read_u32(self, data: &[u8], offset: usize) -> Option<u32> {
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
        Some(match self {
            Endian::Little => u32::from_le_bytes(bytes),
            Endian::Big => u32::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn read_i32(self, data: &[u8], offset: usize) -> Option<i32> {
        self.read_u32(data, offset).map(|v| v as i32)
    }

    #[inline]
    pub fn read_u64(self, data: &[u8], offset: usize) -> Option<u64> {
        let bytes: [u8; 8] = data.get(offset..offset + 8)?.try_into().ok()?;
        Some(match self {
            Endian::Little => u64::from_le_bytes(bytes),
            Endian::Big => u64::from_be_bytes(bytes),
        })
    }
}

/// Owns a read position over a borrowed byte buffer. All reads are
/// bounds-checked; a `None` means the buffer ran out.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position, for error reporting.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Bytes left between the read position and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    pub fn read_u8(&mut self) -> Option<u8> {
        let v = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(v)
    }

    /// The segment stream is big-endian throughout.
    #[inline]
    pub fn read_u16_be(&mut self) -> Option<u16> {
        let bytes: [u8; 2] = self.data.get(self.pos..self.pos + 2)?.try_into().ok()?;
        self.pos += 2;
        Some(u16::from_be_bytes(bytes))
    }

    /// Take the next `n` bytes as a slice, advancing the cursor.
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let slice = self.data.get(self.pos..self.pos + n)?;
        self.pos += n;
        Some(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endian_reads() {
        let data = [0x12, 0x34, 0x56, 0x78];
        assert_eq!(Endian::Big.read_u16(&data, 0), Some(0x1234));
        assert_eq!(Endian::Little.read_u16(&data, 0), Some(0x3412));
        assert_eq!(Endian::Big.read_u32(&data, 0), Some(0x1234_5678));
        assert_eq!(Endian::Little.read_u32(&data, 0), Some(0x7856_3412));
        assert_eq!(Endian::Big.read_u16(&data, 3), None);
        assert_eq!(Endian::Big.read_u32(&data, 1), None);
    }

    #[test]
    fn cursor_stops_at_end() {
        let mut c = ByteCursor::new(&[0xFF, 0xD8, 0x01]);
        assert_eq!(c.read_u16_be(), Some(0xFFD8));
        assert_eq!(c.read_u8(), Some(0x01));
        assert_eq!(c.read_u8(), None);
        assert_eq!(c.pos(), 3);
    }

    #[test]
    fn take_is_bounds_checked() {
        let mut c = ByteCursor::new(&[1, 2, 3, 4]);
        assert_eq!(c.take(3), Some(&[1u8, 2, 3][..]));
        assert_eq!(c.take(2), None);
        assert_eq!(c.take(1), Some(&[4u8][..]));
    }
}
