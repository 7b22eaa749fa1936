//! JPEG segment stream: marker constants and the static dispatch table that
//! tells the scanner how to treat each marker.

mod scanner;

pub use scanner::scan;

// Structural markers.
pub const SOI: u16 = 0xFFD8;
pub const EOI: u16 = 0xFFD9;
pub const SOS: u16 = 0xFFDA;

// Application segments.
pub const APP0: u16 = 0xFFE0; // "JFIF\0" or "JFXX\0"
pub const APP1: u16 = 0xFFE1; // "Exif\0\0" or "http://ns.adobe.com/xap/1.0/\0"
pub const APP2: u16 = 0xFFE2; // "ICC_PROFILE\0"
pub const APP3: u16 = 0xFFE3; // "META\0\0" or "Meta\0\0"
pub const APP13: u16 = 0xFFED; // "Photoshop 3.0\0"

// Frame headers. SOF4/SOF8/SOF12 are DHT/JPG/DAC, not frames.
pub const SOF0: u16 = 0xFFC0;
pub const SOF1: u16 = 0xFFC1;
pub const SOF2: u16 = 0xFFC2;
pub const SOF3: u16 = 0xFFC3;
pub const SOF5: u16 = 0xFFC5;
pub const SOF6: u16 = 0xFFC6;
pub const SOF7: u16 = 0xFFC7;
pub const SOF9: u16 = 0xFFC9;
pub const SOF10: u16 = 0xFFCA;
pub const SOF11: u16 = 0xFFCB;
pub const SOF13: u16 = 0xFFCD;
pub const SOF14: u16 = 0xFFCE;
pub const SOF15: u16 = 0xFFCF;

// Tables and misc segments, kept only so their length is consumed correctly.
pub const DHT: u16 = 0xFFC4;
pub const JPG: u16 = 0xFFC8;
pub const DAC: u16 = 0xFFCC;
pub const DQT: u16 = 0xFFDB;
pub const DNL: u16 = 0xFFDC;
pub const DRI: u16 = 0xFFDD;
pub const DHP: u16 = 0xFFDE;
pub const EXP: u16 = 0xFFDF;
pub const JPG0: u16 = 0xFFF0;
pub const JPG13: u16 = 0xFFFD;
pub const COM: u16 = 0xFFFE;

pub const RST0: u16 = 0xFFD0;
pub const RST7: u16 = 0xFFD7;
pub const TEM: u16 = 0xFF01;

/// How the scanner treats a marker: no payload (`Begin`), terminate the scan
/// (`End`), or read a length-prefixed payload (`Read`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Begin,
    End,
    Read,
}

/// Which decoder a `Read` segment's payload is handed to. A closed set; the
/// JPEG standard fixes the markers, so no runtime registration is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// APP0, JFIF/JFXX identifier required, block kept opaque.
    Jfif,
    /// APP1, either an EXIF TIFF block or an XMP packet.
    App1,
    /// APP2, ICC_PROFILE identifier required, block kept opaque.
    Icc,
    /// APP13, Photoshop 3.0 identifier required, dataset parsing stubbed.
    Iptc,
    /// SOFn frame header; SOF0 exposes dimensions as pseudo-tags.
    Sof,
    /// COM free-text comment.
    Comment,
    /// Recognized marker with no decoder; payload is stored raw.
    Ignore,
}

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct SegmentSpec {
    pub name: &'static str,
    pub kind: SegmentKind,
    pub payload: PayloadKind,
}

const fn spec(name: &'static str, kind: SegmentKind, payload: PayloadKind) -> SegmentSpec {
    SegmentSpec {
        name,
        kind,
        payload,
    }
}

/// Static marker dispatch. Returns `None` for markers outside the standard's
/// fixed set; the scanner turns that into `ScanError::UnknownMarker`.
pub fn lookup(marker: u16) -> Option<SegmentSpec> {
    use PayloadKind::*;
    use SegmentKind::*;

    Some(match marker {
        SOI => spec("SOI", Begin, Ignore),
        EOI => spec("EOI", End, Ignore),
        SOS => spec("SOS", End, Ignore),

        APP0 => spec("JFIF", Read, Jfif),
        APP1 => spec("EXIF", Read, App1),
        APP2 => spec("ICC", Read, Icc),
        APP3 => spec("META", Read, Ignore),
        APP13 => spec("IPTC", Read, Iptc),

        SOF0 => spec("SOF0", Read, Sof),
        SOF1 => spec("SOF1", Read, Sof),
        SOF2 => spec("SOF2", Read, Sof),
        SOF3 => spec("SOF3", Read, Sof),
        SOF5 => spec("SOF5", Read, Sof),
        SOF6 => spec("SOF6", Read, Sof),
        SOF7 => spec("SOF7", Read, Sof),
        SOF9 => spec("SOF9", Read, Sof),
        SOF10 => spec("SOF10", Read, Sof),
        SOF11 => spec("SOF11", Read, Sof),
        SOF13 => spec("SOF13", Read, Sof),
        SOF14 => spec("SOF14", Read, Sof),
        SOF15 => spec("SOF15", Read, Sof),

        DHT => spec("DHT", Read, Ignore),
        DAC => spec("DAC", Read, Ignore),
        DQT => spec("DQT", Read, Ignore),
        DNL => spec("DNL", Read, Ignore),
        DRI => spec("DRI", Read, Ignore),
        DHP => spec("DHP", Read, Ignore),
        EXP => spec("EXP", Read, Ignore),
        JPG => spec("JPG", Read, Ignore),
        JPG0 => spec("JPG0", Read, Ignore),
        JPG13 => spec("JPG13", Read, Ignore),
        COM => spec("COM", Read, Comment),

        RST0 => spec("RST0", Read, Ignore),
        0xFFD1 => spec("RST1", Read, Ignore),
        0xFFD2 => spec("RST2", Read, Ignore),
        0xFFD3 => spec("RST3", Read, Ignore),
        0xFFD4 => spec("RST4", Read, Ignore),
        0xFFD5 => spec("RST5", Read, Ignore),
        0xFFD6 => spec("RST6", Read, Ignore),
        RST7 => spec("RST7", Read, Ignore),
        TEM => spec("TEM", Read, Ignore),

        _ => return None,
    })
}
