//! Decoded image metadata: the name-indexed section map and the per-section
//! `read_value` capability.

use indexmap::IndexMap;

use crate::error::LookupError;
use crate::iptc::IptcSection;
use crate::tags;
use crate::tiff::{ExifSection, TagValue};

// SOF0 pseudo-tags: byte offsets into the reconstructed frame header block
// (4-byte marker/length prefix, then precision, height, width).
pub const SOF0_PRECISION: u16 = 0x0004;
pub const SOF0_HEIGHT: u16 = 0x0005;
pub const SOF0_WIDTH: u16 = 0x0007;

/// A SOFn frame header segment. Only SOF0 (baseline) exposes values; the
/// dimensions are framed as pseudo-tags so every section answers the same
/// `read_value` query.
#[derive(Debug, Clone)]
pub struct SofSection {
    marker: u16,
    block: Vec<u8>,
}

impl SofSection {
    pub fn new(marker: u16, block: Vec<u8>) -> Self {
        Self { marker, block }
    }

    pub fn marker(&self) -> u16 {
        self.marker
    }

    pub fn read_value(&self, tag: u16) -> Result<TagValue, LookupError> {
        if self.marker & 0x0F != 0 {
            return Err(LookupError::TagNotFound { tag });
        }
        match tag {
            SOF0_PRECISION => {
                let v = *self
                    .block
                    .get(SOF0_PRECISION as usize)
                    .ok_or(LookupError::TagNotFound { tag })?;
                Ok(TagValue::ULong(v as u32))
            }
            SOF0_HEIGHT | SOF0_WIDTH => {
                let at = tag as usize;
                let bytes: [u8; 2] = self
                    .block
                    .get(at..at + 2)
                    .and_then(|s| s.try_into().ok())
                    .ok_or(LookupError::TagNotFound { tag })?;
                Ok(TagValue::ULong(u16::from_be_bytes(bytes) as u32))
            }
            _ => Err(LookupError::TagNotFound { tag }),
        }
    }
}

/// A recognized segment kept as an opaque block (JFIF, ICC, XMP, comments,
/// tables). Holds no tag directory; every lookup is a miss.
#[derive(Debug, Clone)]
pub struct RawSection {
    block: Vec<u8>,
}

impl RawSection {
    pub fn new(block: Vec<u8>) -> Self {
        Self { block }
    }

    /// Full reconstructed block, marker and length prefix included.
    pub fn block(&self) -> &[u8] {
        &self.block
    }

    /// Payload interpreted as text, for COM segments.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.block.get(4..).unwrap_or(&[])).into_owned()
    }
}

/// One decoded metadata section. A closed set; the JPEG standard fixes which
/// markers carry which payloads, so dispatch is a match rather than a trait
/// object.
#[derive(Debug, Clone)]
pub enum Section {
    Exif(ExifSection),
    Sof(SofSection),
    Iptc(IptcSection),
    Raw(RawSection),
}

impl Section {
    /// Resolve a tag within this section to a typed value.
    pub fn read_value(&self, tag: u16) -> Result<TagValue, LookupError> {
        match self {
            Section::Exif(exif) => exif.read_value(tag),
            Section::Sof(sof) => sof.read_value(tag),
            Section::Iptc(iptc) => iptc.read_value(tag),
            Section::Raw(_) => Err(LookupError::TagNotFound { tag }),
        }
    }
}

/// The most commonly asked-for fields, composed from several `read_value`
/// calls. String fields stay `None` when the stored type has no decoder
/// (character-set transcoding is out of scope).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BasicInfo {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
}

/// All metadata sections decoded from one JPEG buffer, keyed by section
/// name. Built once per parse and read-only afterward; if two segments
/// decode to the same name the later one wins.
#[derive(Debug, Clone, Default)]
pub struct MetadataImage {
    sections: IndexMap<String, Section>,
}

impl MetadataImage {
    pub(crate) fn register(&mut self, name: String, section: Section) {
        self.sections.insert(name, section);
    }

    /// Section names in the order they appeared in the stream.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Resolve `tag` within the named section. A missing section, a missing
    /// tag, and a malformed directory are distinguishable results.
    pub fn read_value(&self, section_name: &str, tag: u16) -> Result<TagValue, LookupError> {
        let section = self
            .sections
            .get(section_name)
            .ok_or_else(|| LookupError::SectionNotFound(section_name.to_string()))?;
        section.read_value(tag)
    }

    /// Dimensions from EXIF pixel dimensions, falling back to the SOF0
    /// frame header; title/description/keywords best-effort from the EXIF
    /// directory.
    pub fn basic_info(&self) -> BasicInfo {
        let dimension = |exif_tag: u16, sof_tag: u16| -> Option<u32> {
            self.read_value("EXIF", exif_tag)
                .ok()
                .and_then(|v| v.as_u32())
                .or_else(|| {
                    self.read_value("SOF0", sof_tag)
                        .ok()
                        .and_then(|v| v.as_u32())
                })
        };
        let text = |tag: u16| -> Option<String> {
            match self.read_value("EXIF", tag) {
                Ok(TagValue::Ascii(s)) => Some(s),
                _ => None,
            }
        };

        BasicInfo {
            width: dimension(tags::TAG_PIXEL_X_DIMENSION, SOF0_WIDTH),
            height: dimension(tags::TAG_PIXEL_Y_DIMENSION, SOF0_HEIGHT),
            title: text(tags::TAG_XP_TITLE),
            description: text(tags::TAG_IMAGE_DESCRIPTION),
            keywords: text(tags::TAG_XP_KEYWORDS)
                .map(|s| s.split(';').map(str::trim).map(String::from).collect())
                .unwrap_or_default(),
        }
    }
}
