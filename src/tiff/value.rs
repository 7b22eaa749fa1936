//! Typed decoding of a located directory entry into a `TagValue`.

use std::fmt;

use crate::cursor::Endian;
use crate::error::LookupError;

use super::{
    IfdEntry, TYPE_FLOAT32, TYPE_FLOAT64, TYPE_SBYTE, TYPE_SLONG, TYPE_SRATIONAL, TYPE_SSHORT,
    TYPE_UBYTE, TYPE_ULONG, TYPE_URATIONAL, TYPE_USHORT,
};

/// A decoded TIFF value. Closed over the wire field types; created on
/// demand, never mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TagValue {
    UByte(u8),
    SByte(i8),
    UShort(u16),
    SShort(i16),
    ULong(u32),
    SLong(i32),
    Ascii(String),
    /// Unsigned rational: (numerator, denominator). A zero denominator is
    /// representable; `ratio` reports it.
    URational(u32, u32),
    /// Signed rational: (numerator, denominator).
    SRational(i32, i32),
    Float(f32),
    Double(f64),
    Undefined(Vec<u8>),
}

impl TagValue {
    /// Widen any unsigned integer variant to u32.
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            TagValue::UByte(v) => Some(v as u32),
            TagValue::UShort(v) => Some(v as u32),
            TagValue::ULong(v) => Some(v),
            _ => None,
        }
    }

    /// Quotient of a rational variant. Zero denominators are an explicit
    /// error; the format does not forbid them.
    pub fn ratio(&self) -> Result<f64, LookupError> {
        match *self {
            TagValue::URational(_, 0) | TagValue::SRational(_, 0) => {
                Err(LookupError::DivisionByZero)
            }
            TagValue::URational(num, den) => Ok(num as f64 / den as f64),
            TagValue::SRational(num, den) => Ok(num as f64 / den as f64),
            _ => Err(LookupError::DivisionByZero),
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::UByte(v) => write!(f, "{v}"),
            TagValue::SByte(v) => write!(f, "{v}"),
            TagValue::UShort(v) => write!(f, "{v}"),
            TagValue::SShort(v) => write!(f, "{v}"),
            TagValue::ULong(v) => write!(f, "{v}"),
            TagValue::SLong(v) => write!(f, "{v}"),
            TagValue::Ascii(s) => write!(f, "{s}"),
            TagValue::URational(n, d) => write!(f, "{n}/{d}"),
            TagValue::SRational(n, d) => write!(f, "{n}/{d}"),
            TagValue::Float(v) => write!(f, "{v}"),
            TagValue::Double(v) => write!(f, "{v}"),
            TagValue::Undefined(b) => write!(f, "[{} bytes]", b.len()),
        }
    }
}

/// Decode one directory entry against the TIFF block it was found in.
///
/// Byte/short/long widths live inline in `value_or_offset` and never
/// dereference it as an offset. Rationals and doubles are out-of-line:
/// 8 bytes at `value_or_offset` relative to the TIFF header base. Every
/// multi-byte read respects the directory's declared byte order, Float32
/// included.
///
/// ASCII and UNDEFINED entries report `UnsupportedType`; callers skip the
/// field rather than aborting.
pub fn decode_entry(
    entry: IfdEntry,
    tiff: &[u8],
    endian: Endian,
) -> Result<TagValue, LookupError> {
    let out_of_line = |width: usize| -> Result<usize, LookupError> {
        let offset = entry.value_or_offset as u32 as usize;
        if offset + width > tiff.len() {
            return Err(LookupError::OffsetOutOfRange {
                offset,
                len: tiff.len(),
            });
        }
        Ok(offset)
    };

    match entry.type_id {
        TYPE_UBYTE => Ok(TagValue::UByte(entry.value_or_offset as u8)),
        TYPE_SBYTE => Ok(TagValue::SByte(entry.value_or_offset as i8)),
        TYPE_USHORT => Ok(TagValue::UShort(entry.value_or_offset as u16)),
        TYPE_SSHORT => Ok(TagValue::SShort(entry.value_or_offset as i16)),
        TYPE_ULONG => Ok(TagValue::ULong(entry.value_or_offset as u32)),
        TYPE_SLONG => Ok(TagValue::SLong(entry.value_or_offset)),
        TYPE_FLOAT32 => Ok(TagValue::Float(f32::from_bits(
            entry.value_or_offset as u32,
        ))),
        TYPE_URATIONAL => {
            let offset = out_of_line(8)?;
            // read_u32 cannot fail after the bounds check above
            let num = endian.read_u32(tiff, offset).unwrap_or(0);
            let den = endian.read_u32(tiff, offset + 4).unwrap_or(0);
            Ok(TagValue::URational(num, den))
        }
        TYPE_SRATIONAL => {
            let offset = out_of_line(8)?;
            let num = endian.read_i32(tiff, offset).unwrap_or(0);
            let den = endian.read_i32(tiff, offset + 4).unwrap_or(0);
            Ok(TagValue::SRational(num, den))
        }
        TYPE_FLOAT64 => {
            let offset = out_of_line(8)?;
            let bits = endian.read_u64(tiff, offset).unwrap_or(0);
            Ok(TagValue::Double(f64::from_bits(bits)))
        }
        other => Err(LookupError::UnsupportedType { type_id: other }),
    }
}
