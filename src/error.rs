//! Error types: structural scan failures and per-tag lookup misses.

use thiserror::Error;

/// Structural failure while scanning the segment stream or parsing a TIFF
/// header. Any of these aborts the whole parse; a desynchronized stream
/// cannot be resumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The buffer does not start with the SOI marker 0xFFD8.
    #[error("not a JPEG: expected SOI marker 0xFFD8, found {found:#06x}")]
    NotJpeg { found: u16 },

    /// A 2-byte value at a marker position did not begin with 0xFF.
    #[error("invalid section marker {marker:#06x} at offset {offset}")]
    InvalidMarker { marker: u16, offset: usize },

    /// Marker starts with 0xFF but is not in the dispatch table.
    #[error("unknown section marker {marker:#06x} at offset {offset}")]
    UnknownMarker { marker: u16, offset: usize },

    /// A segment declared more payload bytes than remain in the buffer.
    #[error(
        "truncated segment {marker:#06x} at offset {offset}: declared length {declared}, {remaining} bytes remain"
    )]
    TruncatedSegment {
        marker: u16,
        offset: usize,
        declared: u16,
        remaining: usize,
    },

    /// An APP segment payload does not carry the identifier its marker requires.
    #[error("{segment} segment has wrong identifier, expected {expected}")]
    WrongIdentifier {
        segment: &'static str,
        expected: &'static str,
    },

    /// TIFF header byte-order field is neither "II" nor "MM".
    #[error("TIFF header byte order {found:#06x} is neither 'II' (0x4949) nor 'MM' (0x4d4d)")]
    BadByteOrder { found: u16 },

    /// TIFF header magic is not 0x002A.
    #[error("TIFF header magic {found:#06x} does not match 0x002a")]
    BadTiffMagic { found: u16 },
}

/// Per-tag failure of a single `read_value` call. Never aborts a parse or a
/// sibling lookup; `SectionNotFound` and `TagNotFound` are ordinary misses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The image has no section registered under the given name.
    #[error("image has no '{0}' metadata section")]
    SectionNotFound(String),

    /// The tag is absent from every directory reachable in this section.
    #[error("tag {tag:#06x} not found")]
    TagNotFound { tag: u16 },

    /// The entry's TIFF field type has no decoder (ASCII, UNDEFINED, or an
    /// unrecognized id). The field is skippable at the call site.
    #[error("unsupported TIFF field type {type_id}")]
    UnsupportedType { type_id: u16 },

    /// A directory or out-of-line value offset points past the end of the block.
    #[error("offset {offset} out of range for block of {len} bytes")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// A rational value with a zero denominator was asked for its quotient.
    #[error("rational value has zero denominator")]
    DivisionByZero,
}
