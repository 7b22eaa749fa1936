//! Lazy tag resolution over the EXIF directory graph: primary directory,
//! EXIF, GPS and Interop sub-directories.

use std::collections::HashSet;

use log::trace;

use crate::cursor::Endian;
use crate::error::{LookupError, ScanError};

use super::{
    decode_entry, pointer_target, read_ifd_entry, read_tiff_header, IfdKind, TagValue,
    IFD_ENTRY_LEN,
};

/// Offset of the TIFF header inside the stored segment block: 4 bytes of
/// marker + length prefix, then the 6-byte "Exif\0\0" identifier.
const TIFF_BASE: usize = 10;

/// An APP1 EXIF segment. The TIFF header is parsed once at scan time; tag
/// lookups traverse the directory chain on demand and never flatten it.
#[derive(Debug, Clone)]
pub struct ExifSection {
    block: Vec<u8>,
    endian: Endian,
    ifd0_offset: u32,
}

impl ExifSection {
    /// Parse the TIFF header of a reconstructed APP1 block. The scanner has
    /// already verified the "Exif\0\0" identifier.
    pub fn parse(block: Vec<u8>) -> Result<Self, ScanError> {
        let tiff = block.get(TIFF_BASE..).unwrap_or(&[]);
        let (endian, ifd0_offset) = read_tiff_header(tiff)?;
        Ok(Self {
            block,
            endian,
            ifd0_offset,
        })
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn ifd0_offset(&self) -> u32 {
        self.ifd0_offset
    }

    /// Find `tag` in the reachable directory graph and decode its value.
    ///
    /// Worklist traversal seeded with the primary directory; the EXIF, GPS
    /// and Interop sub-directories are only entered through their pointer
    /// tags, so a tag that resolves in the primary directory never touches
    /// them. First match wins. A visited-offset set bounds the walk on
    /// malformed input that forms a cycle.
    pub fn read_value(&self, tag: u16) -> Result<TagValue, LookupError> {
        let tiff = &self.block[TIFF_BASE..];
        let mut worklist: Vec<(u32, IfdKind)> = vec![(self.ifd0_offset, IfdKind::Primary)];
        let mut visited: HashSet<u32> = HashSet::new();

        while let Some((dir_offset, kind)) = worklist.pop() {
            if !visited.insert(dir_offset) {
                continue;
            }
            let offset = dir_offset as usize;
            let entry_count =
                self.endian
                    .read_u16(tiff, offset)
                    .ok_or(LookupError::OffsetOutOfRange {
                        offset,
                        len: tiff.len(),
                    })?;
            trace!("IFD {kind:?} at {offset}: {entry_count} entries");

            for i in 0..entry_count as usize {
                let entry_offset = offset + 2 + i * IFD_ENTRY_LEN;
                let entry = read_ifd_entry(self.endian, tiff, entry_offset).ok_or(
                    LookupError::OffsetOutOfRange {
                        offset: entry_offset,
                        len: tiff.len(),
                    },
                )?;
                if entry.tag == tag {
                    return decode_entry(entry, tiff, self.endian);
                }
                if let Some(target) = pointer_target(kind, entry.tag) {
                    worklist.push((entry.value_or_offset as u32, target));
                }
            }
        }
        Err(LookupError::TagNotFound { tag })
    }
}
