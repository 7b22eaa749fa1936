//! Single-pass segment scanner: walks the marker stream, frames each
//! payload, and hands it to the decoder its marker selects.

use log::debug;

use crate::cursor::ByteCursor;
use crate::error::ScanError;
use crate::image::{MetadataImage, RawSection, Section, SofSection};
use crate::iptc::{IptcSection, IPTC_ID};
use crate::tiff::ExifSection;

use super::{lookup, PayloadKind, SegmentKind, SOI};

const JFIF_ID: &[u8] = b"JFIF\0";
const JFXX_ID: &[u8] = b"JFXX\0";
const EXIF_ID: &[u8] = b"Exif\0\0";
const XMP_ID: &[u8] = b"http";
const ICC_ID: &[u8] = b"ICC_PROFILE\0";

/// Identifier check against the payload, which starts at block offset 4.
fn has_id(block: &[u8], id: &[u8]) -> bool {
    block.get(4..4 + id.len()) == Some(id)
}

/// Scan a complete in-memory JPEG buffer into its metadata sections.
///
/// Strictly sequential and single-pass: terminates at the first "end"
/// marker (SOS or EOI), or cleanly when the buffer runs out between
/// segments. Structural errors abort the whole scan.
pub fn scan(buffer: &[u8]) -> Result<MetadataImage, ScanError> {
    let mut cursor = ByteCursor::new(buffer);
    let soi = cursor.read_u16_be().ok_or(ScanError::NotJpeg { found: 0 })?;
    if soi != SOI {
        return Err(ScanError::NotJpeg { found: soi });
    }

    let mut image = MetadataImage::default();
    loop {
        let marker_offset = cursor.pos();
        let Some(hi) = cursor.read_u8() else { break };
        if hi != 0xFF {
            let low = cursor.read_u8().unwrap_or(0);
            return Err(ScanError::InvalidMarker {
                marker: (hi as u16) << 8 | low as u16,
                offset: marker_offset,
            });
        }
        // 0xFF fill bytes may pad the stream before the marker byte proper.
        let Some(mut low) = cursor.read_u8() else { break };
        while low == 0xFF {
            match cursor.read_u8() {
                Some(b) => low = b,
                None => return Ok(image),
            }
        }
        let marker = 0xFF00 | low as u16;

        let spec = lookup(marker).ok_or(ScanError::UnknownMarker {
            marker,
            offset: marker_offset,
        })?;
        match spec.kind {
            SegmentKind::Begin => continue,
            SegmentKind::End => break,
            SegmentKind::Read => {}
        }

        // The length field counts itself but not the marker.
        let length_offset = cursor.pos();
        let remaining = cursor.remaining();
        let declared = cursor.read_u16_be().ok_or(ScanError::TruncatedSegment {
            marker,
            offset: length_offset,
            declared: 0,
            remaining,
        })?;
        let payload_len = declared.checked_sub(2).ok_or(ScanError::TruncatedSegment {
            marker,
            offset: length_offset,
            declared,
            remaining,
        })?;
        let remaining = cursor.remaining();
        let payload =
            cursor
                .take(payload_len as usize)
                .ok_or(ScanError::TruncatedSegment {
                    marker,
                    offset: length_offset,
                    declared,
                    remaining,
                })?;

        // Reconstruct the block with marker and length inline, the framing
        // every section decoder expects.
        let mut block = Vec::with_capacity(4 + payload.len());
        block.extend_from_slice(&marker.to_be_bytes());
        block.extend_from_slice(&declared.to_be_bytes());
        block.extend_from_slice(payload);

        let (name, section) = decode_block(marker, spec.name, spec.payload, block)?;
        debug!("registering section {name} ({payload_len} payload bytes)");
        image.register(name, section);
    }
    Ok(image)
}

/// Decode one framed block per its marker's payload kind.
fn decode_block(
    marker: u16,
    name: &'static str,
    payload: PayloadKind,
    block: Vec<u8>,
) -> Result<(String, Section), ScanError> {
    match payload {
        PayloadKind::Jfif => {
            if !has_id(&block, JFIF_ID) && !has_id(&block, JFXX_ID) {
                return Err(ScanError::WrongIdentifier {
                    segment: "APP0",
                    expected: "'JFIF' or 'JFXX'",
                });
            }
            Ok((name.to_string(), Section::Raw(RawSection::new(block))))
        }
        PayloadKind::App1 => {
            if has_id(&block, EXIF_ID) {
                let exif = ExifSection::parse(block)?;
                Ok(("EXIF".to_string(), Section::Exif(exif)))
            } else if has_id(&block, XMP_ID) {
                Ok(("XMP".to_string(), Section::Raw(RawSection::new(block))))
            } else {
                Err(ScanError::WrongIdentifier {
                    segment: "APP1",
                    expected: "'Exif' or an XMP namespace URI",
                })
            }
        }
        PayloadKind::Icc => {
            if !has_id(&block, ICC_ID) {
                return Err(ScanError::WrongIdentifier {
                    segment: "APP2",
                    expected: "'ICC_PROFILE'",
                });
            }
            Ok((name.to_string(), Section::Raw(RawSection::new(block))))
        }
        PayloadKind::Iptc => {
            if !has_id(&block, IPTC_ID) {
                return Err(ScanError::WrongIdentifier {
                    segment: "APP13",
                    expected: "'Photoshop 3.0'",
                });
            }
            Ok((name.to_string(), Section::Iptc(IptcSection::new(block))))
        }
        PayloadKind::Sof => Ok((
            name.to_string(),
            Section::Sof(SofSection::new(marker, block)),
        )),
        PayloadKind::Comment | PayloadKind::Ignore => {
            Ok((name.to_string(), Section::Raw(RawSection::new(block))))
        }
    }
}
