// libesam-rs/libesam/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::Truncated {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a big-endian u16 at given index, with bounds checking.
///
/// This is the single big-endian primitive of the crate: the frame length
/// and every wider integer field are decoded through it.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok((u16::from(data[idx]) << 8) | u16::from(data[idx + 1]))
}

/// Read a big-endian u32 at given index as two big-endian u16 halves.
pub fn be_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    let hi = be_u16_at(data, idx)?;
    let lo = be_u16_at(data, idx + 2)?;
    Ok((u32::from(hi) << 16) | u32::from(lo))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Forward-only cursor over a payload. Each read advances by the width of
/// the field it consumed.
#[derive(Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let s = slice_at(self.data, self.pos, len)?;
        self.pos += len;
        Ok(s)
    }

    pub fn u8(&mut self) -> Result<u8> {
        let b = byte_at(self.data, self.pos)?;
        self.pos += 1;
        Ok(b)
    }

    pub fn be_u16(&mut self) -> Result<u16> {
        let v = be_u16_at(self.data, self.pos)?;
        self.pos += 2;
        Ok(v)
    }

    pub fn be_u32(&mut self) -> Result<u32> {
        let v = be_u32_at(self.data, self.pos)?;
        self.pos += 4;
        Ok(v)
    }

    /// Take `len` bytes and render them as lowercase hex.
    pub fn hex(&mut self, len: usize) -> Result<String> {
        self.take(len).map(crate::utils::bytes_to_hex)
    }
}
