//! # jpegmeta
//!
//! Metadata extraction for JPEG files: EXIF/TIFF tag directories, GPS,
//! frame headers, JFIF, ICC, XMP, IPTC and comment segments.
//!
//! Built for **batch processing**: slice-based parsing of in-memory
//! buffers, no intermediate tag tables. The scanner makes a single pass
//! over the marker stream and stops at the entropy-coded image data; tag
//! values are resolved lazily from the stored segment blocks, so a scan
//! that never asks for a tag never walks a TIFF directory.
//!
//! ## Example
//!
//! ```no_run
//! use jpegmeta::{scan, tags};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = scan(&bytes).unwrap();
//! if let Ok(width) = image.read_value("EXIF", tags::TAG_PIXEL_X_DIMENSION) {
//!     println!("width: {width}");
//! }
//! println!("{:?}", image.basic_info());
//! ```
//!
//! ## Error model
//!
//! Structural problems with the segment stream ([`ScanError`]) abort the
//! scan; problems local to one tag ([`LookupError`], e.g. a directory
//! offset past the buffer) fail only that lookup. A damaged EXIF
//! directory therefore never hides the sections that did parse.

mod cursor;
mod error;
mod image;
mod iptc;
pub mod jpeg;
pub mod tags;
pub mod tiff;

pub use cursor::Endian;
pub use error::{LookupError, ScanError};
pub use image::{
    BasicInfo, MetadataImage, RawSection, Section, SofSection, SOF0_HEIGHT, SOF0_PRECISION,
    SOF0_WIDTH,
};
pub use iptc::IptcSection;
pub use jpeg::scan;
pub use tiff::{ExifSection, TagValue};

/// Whether a buffer starts with the JPEG SOI marker.
/// Cheap content sniff for routing files without trusting extensions.
#[inline]
pub fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0xFF && data[1] == 0xD8
}
