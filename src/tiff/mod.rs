//! TIFF structures embedded in the EXIF application segment: header, IFD
//! entries, field types. Operates on slices; offsets are relative to the
//! TIFF header base, never the file.

mod resolver;
mod value;

pub use resolver::ExifSection;
pub use value::{decode_entry, TagValue};

use crate::cursor::Endian;
use crate::error::ScanError;

/// Little-endian byte order marker ("II").
pub const TIFF_LITTLE: u16 = 0x4949;
/// Big-endian byte order marker ("MM").
pub const TIFF_BIG: u16 = 0x4D4D;
/// TIFF magic number, follows the byte order marker.
pub const TIFF_MAGIC: u16 = 0x002A;

/// Size of the TIFF header (byte order + magic + IFD0 offset).
pub const TIFF_HEADER_LEN: usize = 8;
/// Size of one IFD entry.
pub const IFD_ENTRY_LEN: usize = 12;

/// Pointer tag in the primary directory to the EXIF sub-directory.
pub const TAG_EXIF_IFD: u16 = 0x8769;
/// Pointer tag in the primary directory to the GPS sub-directory.
pub const TAG_GPS_IFD: u16 = 0x8825;
/// Pointer tag in the EXIF sub-directory to the Interop sub-directory.
pub const TAG_INTEROP_IFD: u16 = 0xA005;

/// TIFF field types.
pub const TYPE_UBYTE: u16 = 1;
pub const TYPE_ASCII: u16 = 2;
pub const TYPE_USHORT: u16 = 3;
pub const TYPE_ULONG: u16 = 4;
pub const TYPE_URATIONAL: u16 = 5;
pub const TYPE_SBYTE: u16 = 6;
pub const TYPE_UNDEFINED: u16 = 7;
pub const TYPE_SSHORT: u16 = 8;
pub const TYPE_SLONG: u16 = 9;
pub const TYPE_SRATIONAL: u16 = 10;
pub const TYPE_FLOAT32: u16 = 11;
pub const TYPE_FLOAT64: u16 = 12;

/// Size in bytes of one value of a given TIFF field type.
#[inline]
pub fn type_size(type_id: u16) -> Option<usize> {
    match type_id {
        TYPE_UBYTE | TYPE_ASCII | TYPE_SBYTE | TYPE_UNDEFINED => Some(1),
        TYPE_USHORT | TYPE_SSHORT => Some(2),
        TYPE_ULONG | TYPE_SLONG | TYPE_FLOAT32 => Some(4),
        TYPE_URATIONAL | TYPE_SRATIONAL | TYPE_FLOAT64 => Some(8),
        _ => None,
    }
}

/// Which directory an entry was found in. Determines which tags are
/// interpreted as pointers to another directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfdKind {
    Primary,
    Exif,
    Gps,
    Interop,
}

/// The three pointer pairs the standard defines. Anything else is data.
#[inline]
pub fn pointer_target(kind: IfdKind, tag: u16) -> Option<IfdKind> {
    match (kind, tag) {
        (IfdKind::Primary, TAG_EXIF_IFD) => Some(IfdKind::Exif),
        (IfdKind::Primary, TAG_GPS_IFD) => Some(IfdKind::Gps),
        (IfdKind::Exif, TAG_INTEROP_IFD) => Some(IfdKind::Interop),
        _ => None,
    }
}

/// One 12-byte directory entry. `value_or_offset` holds the value inline
/// when `count * type_size(type_id) <= 4`, otherwise a byte offset relative
/// to the TIFF header base.
#[derive(Debug, Clone, Copy)]
pub struct IfdEntry {
    pub tag: u16,
    pub type_id: u16,
    pub count: i32,
    pub value_or_offset: i32,
}

/// Read one IFD entry at `offset` into the TIFF block.
pub fn read_ifd_entry(endian: Endian, tiff: &[u8], offset: usize) -> Option<IfdEntry> {
    if tiff.len().saturating_sub(offset) < IFD_ENTRY_LEN {
        return None;
    }
    Some(IfdEntry {
        tag: endian.read_u16(tiff, offset)?,
        type_id: endian.read_u16(tiff, offset + 2)?,
        count: endian.read_i32(tiff, offset + 4)?,
        value_or_offset: endian.read_i32(tiff, offset + 8)?,
    })
}

/// Parse the 8-byte TIFF header: byte order, magic, IFD0 offset. The byte
/// order field is symmetric; the magic and offset are read in the declared
/// order.
pub fn read_tiff_header(tiff: &[u8]) -> Result<(Endian, u32), ScanError> {
    let bo = Endian::Big
        .read_u16(tiff, 0)
        .ok_or(ScanError::BadByteOrder { found: 0 })?;
    let endian = match bo {
        TIFF_LITTLE => Endian::Little,
        TIFF_BIG => Endian::Big,
        _ => return Err(ScanError::BadByteOrder { found: bo }),
    };
    let magic = endian
        .read_u16(tiff, 2)
        .ok_or(ScanError::BadTiffMagic { found: 0 })?;
    if magic != TIFF_MAGIC {
        return Err(ScanError::BadTiffMagic { found: magic });
    }
    let ifd0 = endian
        .read_u32(tiff, 4)
        .ok_or(ScanError::BadTiffMagic { found: magic })?;
    Ok((endian, ifd0))
}
