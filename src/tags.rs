//! Well-known tag IDs, tag-name tables, and human-readable labels for
//! enumerated EXIF values. Read-only data, no lifecycle.

/// Tags referenced by name elsewhere in the crate.
pub const TAG_IMAGE_WIDTH: u16 = 0x0100;
pub const TAG_IMAGE_HEIGHT: u16 = 0x0101;
pub const TAG_IMAGE_DESCRIPTION: u16 = 0x010E;
pub const TAG_ORIENTATION: u16 = 0x0112;
pub const TAG_DATE_TIME: u16 = 0x0132;
pub const TAG_PIXEL_X_DIMENSION: u16 = 0xA002;
pub const TAG_PIXEL_Y_DIMENSION: u16 = 0xA003;
pub const TAG_XP_TITLE: u16 = 0x9C9B;
pub const TAG_XP_KEYWORDS: u16 = 0x9C9E;

/// Which directory a well-known tag is defined in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    Primary,
    Exif,
    Gps,
}

/// Static description of a well-known tag.
#[derive(Debug, Clone, Copy)]
pub struct TagDescr {
    pub category: TagCategory,
    pub id: u16,
    pub name: &'static str,
}

const fn tag(category: TagCategory, id: u16, name: &'static str) -> TagDescr {
    TagDescr { category, id, name }
}

use TagCategory::{Exif, Gps, Primary};

/// Well-known tags of the primary, EXIF and GPS directories, plus the
/// non-standard but ubiquitous Windows XP* tags.
pub static TAG_DESCRIPTIONS: &[TagDescr] = &[
    // primary tags
    tag(Primary, 0x0100, "ImageWidth"),
    tag(Primary, 0x0101, "ImageLength"),
    tag(Primary, 0x0102, "BitsPerSample"),
    tag(Primary, 0x0103, "Compression"),
    tag(Primary, 0x0106, "PhotometricInterpretation"),
    tag(Primary, 0x010E, "ImageDescription"),
    tag(Primary, 0x010F, "Make"),
    tag(Primary, 0x0110, "Model"),
    tag(Primary, 0x0111, "StripOffsets"),
    tag(Primary, 0x0112, "Orientation"),
    tag(Primary, 0x0115, "SamplesPerPixel"),
    tag(Primary, 0x0116, "RowsPerStrip"),
    tag(Primary, 0x0117, "StripByteCounts"),
    tag(Primary, 0x011A, "XResolution"),
    tag(Primary, 0x011B, "YResolution"),
    tag(Primary, 0x011C, "PlanarConfiguration"),
    tag(Primary, 0x0128, "ResolutionUnit"),
    tag(Primary, 0x012D, "TransferFunction"),
    tag(Primary, 0x0131, "Software"),
    tag(Primary, 0x0132, "DateTime"),
    tag(Primary, 0x013B, "Artist"),
    tag(Primary, 0x013E, "WhitePoint"),
    tag(Primary, 0x013F, "PrimaryChromaticities"),
    tag(Primary, 0x0201, "JPEGInterchangeFormat"),
    tag(Primary, 0x0202, "JPEGInterchangeFormatLength"),
    tag(Primary, 0x0211, "YCbCrCoefficients"),
    tag(Primary, 0x0212, "YCbCrSubSampling"),
    tag(Primary, 0x0213, "YCbCrPositioning"),
    tag(Primary, 0x0214, "ReferenceBlackWhite"),
    tag(Primary, 0x8298, "Copyright"),
    // EXIF tags
    tag(Exif, 0x829A, "ExposureTime"),
    tag(Exif, 0x829D, "FNumber"),
    tag(Exif, 0x8822, "ExposureProgram"),
    tag(Exif, 0x8824, "SpectralSensitivity"),
    tag(Exif, 0x8827, "PhotographicSensitivity"),
    tag(Exif, 0x8828, "OECF"),
    tag(Exif, 0x8830, "SensitivityType"),
    tag(Exif, 0x8831, "StandardOutputSensitivity"),
    tag(Exif, 0x8832, "RecommendedExposureIndex"),
    tag(Exif, 0x8833, "ISOSpeed"),
    tag(Exif, 0x8834, "ISOSpeedLatitudeyyy"),
    tag(Exif, 0x8835, "ISOSpeedLatitudezzz"),
    tag(Exif, 0x9000, "ExifVersion"),
    tag(Exif, 0x9003, "DateTimeOriginal"),
    tag(Exif, 0x9004, "DateTimeDigitized"),
    tag(Exif, 0x9101, "ComponentsConfiguration"),
    tag(Exif, 0x9102, "CompressedBitsPerPixel"),
    tag(Exif, 0x9201, "ShutterSpeedValue"),
    tag(Exif, 0x9202, "ApertureValue"),
    tag(Exif, 0x9203, "BrightnessValue"),
    tag(Exif, 0x9204, "ExposureBiasValue"),
    tag(Exif, 0x9205, "MaxApertureValue"),
    tag(Exif, 0x9206, "SubjectDistance"),
    tag(Exif, 0x9207, "MeteringMode"),
    tag(Exif, 0x9208, "LightSource"),
    tag(Exif, 0x9209, "Flash"),
    tag(Exif, 0x920A, "FocalLength"),
    tag(Exif, 0x9214, "SubjectArea"),
    tag(Exif, 0x927C, "MakerNote"),
    tag(Exif, 0x9286, "UserComment"),
    tag(Exif, 0x9290, "SubsecTime"),
    tag(Exif, 0x9291, "SubsecTimeOriginal"),
    tag(Exif, 0x9292, "SubsecTimeDigitized"),
    tag(Exif, 0xA000, "FlashpixVersion"),
    tag(Exif, 0xA001, "ColorSpace"),
    tag(Exif, 0xA002, "PixelXDimension"),
    tag(Exif, 0xA003, "PixelYDimension"),
    tag(Exif, 0xA004, "RelatedSoundFile"),
    tag(Exif, 0xA20B, "FlashEnergy"),
    tag(Exif, 0xA20C, "SpatialFrequencyResponse"),
    tag(Exif, 0xA20E, "FocalPlaneXResolution"),
    tag(Exif, 0xA20F, "FocalPlaneYResolution"),
    tag(Exif, 0xA210, "FocalPlaneResolutionUnit"),
    tag(Exif, 0xA214, "SubjectLocation"),
    tag(Exif, 0xA215, "ExposureIndex"),
    tag(Exif, 0xA217, "SensingMethod"),
    tag(Exif, 0xA300, "FileSource"),
    tag(Exif, 0xA301, "SceneType"),
    tag(Exif, 0xA302, "CFAPattern"),
    tag(Exif, 0xA401, "CustomRendered"),
    tag(Exif, 0xA402, "ExposureMode"),
    tag(Exif, 0xA403, "WhiteBalance"),
    tag(Exif, 0xA404, "DigitalZoomRatio"),
    tag(Exif, 0xA405, "FocalLengthIn35mmFilm"),
    tag(Exif, 0xA406, "SceneCaptureType"),
    tag(Exif, 0xA407, "GainControl"),
    tag(Exif, 0xA408, "Contrast"),
    tag(Exif, 0xA409, "Saturation"),
    tag(Exif, 0xA40A, "Sharpness"),
    tag(Exif, 0xA40B, "DeviceSettingDescription"),
    tag(Exif, 0xA40C, "SubjectDistanceRange"),
    tag(Exif, 0xA420, "ImageUniqueID"),
    tag(Exif, 0xA430, "CameraOwnerName"),
    tag(Exif, 0xA431, "BodySerialNumber"),
    tag(Exif, 0xA432, "LensSpecification"),
    tag(Exif, 0xA433, "LensMake"),
    tag(Exif, 0xA434, "LensModel"),
    tag(Exif, 0xA435, "LensSerialNumber"),
    // GPS tags
    tag(Gps, 0x00, "GPSVersionID"),
    tag(Gps, 0x01, "GPSLatitudeRef"),
    tag(Gps, 0x02, "GPSLatitude"),
    tag(Gps, 0x03, "GPSLongitudeRef"),
    tag(Gps, 0x04, "GPSLongitude"),
    tag(Gps, 0x05, "GPSAltitudeRef"),
    tag(Gps, 0x06, "GPSAltitude"),
    tag(Gps, 0x07, "GPSTimestamp"),
    tag(Gps, 0x08, "GPSSatellites"),
    tag(Gps, 0x09, "GPSStatus"),
    tag(Gps, 0x0A, "GPSMeasureMode"),
    tag(Gps, 0x0B, "GPSDOP"),
    tag(Gps, 0x0C, "GPSSpeedRef"),
    tag(Gps, 0x0D, "GPSSpeed"),
    tag(Gps, 0x0E, "GPSTrackRef"),
    tag(Gps, 0x0F, "GPSTrack"),
    tag(Gps, 0x10, "GPSImgDirectionRef"),
    tag(Gps, 0x11, "GPSImgDirection"),
    tag(Gps, 0x12, "GPSMapDatum"),
    tag(Gps, 0x13, "GPSDestLatitudeRef"),
    tag(Gps, 0x14, "GPSDestLatitude"),
    tag(Gps, 0x15, "GPSDestLongitudeRef"),
    tag(Gps, 0x16, "GPSDestLongitude"),
    tag(Gps, 0x17, "GPSDestBearingRef"),
    tag(Gps, 0x18, "GPSDestBearing"),
    tag(Gps, 0x19, "GPSDestDistanceRef"),
    tag(Gps, 0x1A, "GPSDestDistance"),
    tag(Gps, 0x1B, "GPSProcessingMethod"),
    tag(Gps, 0x1C, "GPSAreaInformation"),
    tag(Gps, 0x1D, "GPSDateStamp"),
    tag(Gps, 0x1E, "GPSDifferential"),
    tag(Gps, 0x1F, "GPSHPositioningError"),
    // Microsoft Windows metadata. Non-standard, but ubiquitous
    tag(Primary, 0x9C9B, "XPTitle"),
    tag(Primary, 0x9C9C, "XPComment"),
    tag(Primary, 0x9C9D, "XPAuthor"),
    tag(Primary, 0x9C9E, "XPKeywords"),
    tag(Primary, 0x9C9F, "XPSubject"),
];

/// Name of a well-known tag, first match across categories.
pub fn tag_name(id: u16) -> Option<&'static str> {
    TAG_DESCRIPTIONS
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.name)
}

/// Tag ID for a well-known tag name (exact match).
pub fn tag_id(name: &str) -> Option<u16> {
    TAG_DESCRIPTIONS
        .iter()
        .find(|d| d.name == name)
        .map(|d| d.id)
}

/// Human-readable label for an enumerated EXIF value, keyed by the tag the
/// value was read from. `None` when the tag is not enumerated or the value
/// is outside the defined set.
pub fn enum_label(tag_id: u16, value: u32) -> Option<&'static str> {
    let label = match tag_id {
        // ExposureProgram
        0x8822 => match value {
            0 => "Not defined",
            1 => "Manual",
            2 => "Normal program",
            3 => "Aperture priority",
            4 => "Shutter priority",
            5 => "Creative program",
            6 => "Action program",
            7 => "Portrait mode",
            8 => "Landscape mode",
            _ => return None,
        },
        // MeteringMode
        0x9207 => match value {
            0 => "Unknown",
            1 => "Average",
            2 => "CenterWeightedAverage",
            3 => "Spot",
            4 => "MultiSpot",
            5 => "Pattern",
            6 => "Partial",
            255 => "Other",
            _ => return None,
        },
        // LightSource
        0x9208 => match value {
            0 => "Unknown",
            1 => "Daylight",
            2 => "Fluorescent",
            3 => "Tungsten (incandescent light)",
            4 => "Flash",
            9 => "Fine weather",
            10 => "Cloudy weather",
            11 => "Shade",
            12 => "Daylight fluorescent (D 5700 - 7100K)",
            13 => "Day white fluorescent (N 4600 - 5400K)",
            14 => "Cool white fluorescent (W 3900 - 4500K)",
            15 => "White fluorescent (WW 3200 - 3700K)",
            17 => "Standard light A",
            18 => "Standard light B",
            19 => "Standard light C",
            20 => "D55",
            21 => "D65",
            22 => "D75",
            23 => "D50",
            24 => "ISO studio tungsten",
            255 => "Other",
            _ => return None,
        },
        // Flash
        0x9209 => match value {
            0x0000 => "Flash did not fire",
            0x0001 => "Flash fired",
            0x0005 => "Strobe return light not detected",
            0x0007 => "Strobe return light detected",
            0x0009 => "Flash fired, compulsory flash mode",
            0x000D => "Flash fired, compulsory flash mode, return light not detected",
            0x000F => "Flash fired, compulsory flash mode, return light detected",
            0x0010 => "Flash did not fire, compulsory flash mode",
            0x0018 => "Flash did not fire, auto mode",
            0x0019 => "Flash fired, auto mode",
            0x001D => "Flash fired, auto mode, return light not detected",
            0x001F => "Flash fired, auto mode, return light detected",
            0x0020 => "No flash function",
            0x0041 => "Flash fired, red-eye reduction mode",
            0x0045 => "Flash fired, red-eye reduction mode, return light not detected",
            0x0047 => "Flash fired, red-eye reduction mode, return light detected",
            0x0049 => "Flash fired, compulsory flash mode, red-eye reduction mode",
            0x004D => {
                "Flash fired, compulsory flash mode, red-eye reduction mode, return light not detected"
            }
            0x004F => {
                "Flash fired, compulsory flash mode, red-eye reduction mode, return light detected"
            }
            0x0059 => "Flash fired, auto mode, red-eye reduction mode",
            0x005D => "Flash fired, auto mode, return light not detected, red-eye reduction mode",
            0x005F => "Flash fired, auto mode, return light detected, red-eye reduction mode",
            _ => return None,
        },
        // SensingMethod
        0xA217 => match value {
            1 => "Not defined",
            2 => "One-chip color area sensor",
            3 => "Two-chip color area sensor",
            4 => "Three-chip color area sensor",
            5 => "Color sequential area sensor",
            7 => "Trilinear sensor",
            8 => "Color sequential linear sensor",
            _ => return None,
        },
        // FileSource
        0xA300 => match value {
            3 => "DSC",
            _ => return None,
        },
        // SceneType
        0xA301 => match value {
            1 => "Directly photographed",
            _ => return None,
        },
        // CustomRendered
        0xA401 => match value {
            0 => "Normal process",
            1 => "Custom process",
            _ => return None,
        },
        // WhiteBalance
        0xA403 => match value {
            0 => "Auto white balance",
            1 => "Manual white balance",
            _ => return None,
        },
        // SceneCaptureType
        0xA406 => match value {
            0 => "Standard",
            1 => "Landscape",
            2 => "Portrait",
            3 => "Night scene",
            _ => return None,
        },
        // GainControl
        0xA407 => match value {
            0 => "None",
            1 => "Low gain up",
            2 => "High gain up",
            3 => "Low gain down",
            4 => "High gain down",
            _ => return None,
        },
        // Contrast
        0xA408 => match value {
            0 => "Normal",
            1 => "Soft",
            2 => "Hard",
            _ => return None,
        },
        // Saturation
        0xA409 => match value {
            0 => "Normal",
            1 => "Low saturation",
            2 => "High saturation",
            _ => return None,
        },
        // Sharpness
        0xA40A => match value {
            0 => "Normal",
            1 => "Soft",
            2 => "Hard",
            _ => return None,
        },
        // SubjectDistanceRange
        0xA40C => match value {
            0 => "Unknown",
            1 => "Macro",
            2 => "Close view",
            3 => "Distant view",
            _ => return None,
        },
        // ComponentsConfiguration, per component value
        0x9101 => match value {
            1 => "Y",
            2 => "Cb",
            3 => "Cr",
            4 => "R",
            5 => "G",
            6 => "B",
            _ => return None,
        },
        _ => return None,
    };
    Some(label)
}
