//! APP13 Photoshop/IPTC segment. The scanner validates the "Photoshop 3.0"
//! identifier and keeps the resource-block data opaque; IPTC dataset parsing
//! is intentionally not implemented, so every tag lookup is a miss.

use crate::error::LookupError;
use crate::tiff::TagValue;

/// Identifier at the start of an APP13 payload.
pub const IPTC_ID: &[u8] = b"Photoshop 3.0\0";

/// Offset of the first resource block in the reconstructed segment block:
/// 4-byte marker/length prefix plus the 14-byte identifier.
const RESOURCE_BASE: usize = 18;

#[derive(Debug, Clone)]
pub struct IptcSection {
    block: Vec<u8>,
}

impl IptcSection {
    pub fn new(block: Vec<u8>) -> Self {
        Self { block }
    }

    /// Full reconstructed block, marker and length prefix included.
    pub fn block(&self) -> &[u8] {
        &self.block
    }

    /// Whether the first resource block carries a Photoshop signature
    /// ("8BIM", or "8BPS" from old Photoshop versions).
    pub fn has_resource_signature(&self) -> bool {
        matches!(
            self.block.get(RESOURCE_BASE..RESOURCE_BASE + 4),
            Some(b"8BIM") | Some(b"8BPS")
        )
    }

    /// Datasets are not parsed; every lookup reports the tag as absent.
    pub fn read_value(&self, tag: u16) -> Result<TagValue, LookupError> {
        Err(LookupError::TagNotFound { tag })
    }
}
