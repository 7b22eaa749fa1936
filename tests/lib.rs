//! Facade tests: content sniffing, section registry, basic info
//! composition, and the tag-name/label tables.

use jpegmeta::tiff::{TYPE_ULONG, TYPE_USHORT};
use jpegmeta::{is_jpeg, scan, tags, LookupError, Section};

fn put_segment(v: &mut Vec<u8>, marker: u16, payload: &[u8]) {
    v.extend_from_slice(&marker.to_be_bytes());
    v.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    v.extend_from_slice(payload);
}

fn put_entry_le(v: &mut Vec<u8>, tag: u16, typ: u16, count: u32, val: u32) {
    v.extend_from_slice(&tag.to_le_bytes());
    v.extend_from_slice(&typ.to_le_bytes());
    v.extend_from_slice(&count.to_le_bytes());
    v.extend_from_slice(&val.to_le_bytes());
}

/// APP1 EXIF payload with a little-endian IFD0 holding the given entries.
fn exif_payload(entries: &[(u16, u16, u32, u32)]) -> Vec<u8> {
    let mut p = b"Exif\0\0".to_vec();
    p.extend_from_slice(&[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]);
    p.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for &(tag, typ, count, val) in entries {
        put_entry_le(&mut p, tag, typ, count, val);
    }
    p.extend_from_slice(&0u32.to_le_bytes());
    p
}

#[test]
fn sniffs_jpeg_magic() {
    assert!(is_jpeg(&[0xFF, 0xD8, 0xFF, 0xE0]));
    assert!(!is_jpeg(&[0x49, 0x49, 0x2A, 0x00]));
    assert!(!is_jpeg(&[0xFF]));
}

#[test]
fn basic_info_prefers_exif_dimensions() {
    let mut v = vec![0xFF, 0xD8];
    let payload = exif_payload(&[
        (tags::TAG_PIXEL_X_DIMENSION, TYPE_ULONG, 1, 4032),
        (tags::TAG_PIXEL_Y_DIMENSION, TYPE_ULONG, 1, 3024),
    ]);
    put_segment(&mut v, 0xFFE1, &payload);
    // SOF0 disagrees; EXIF wins
    put_segment(&mut v, 0xFFC0, &[8, 0x01, 0x00, 0x02, 0x00, 3]);
    v.extend_from_slice(&[0xFF, 0xD9]);
    let info = scan(&v).unwrap().basic_info();
    assert_eq!(info.width, Some(4032));
    assert_eq!(info.height, Some(3024));
}

#[test]
fn basic_info_falls_back_to_frame_header() {
    let mut v = vec![0xFF, 0xD8];
    put_segment(&mut v, 0xFFC0, &[8, 0x01, 0x00, 0x02, 0x00, 3]);
    v.extend_from_slice(&[0xFF, 0xD9]);
    let info = scan(&v).unwrap().basic_info();
    assert_eq!(info.width, Some(512));
    assert_eq!(info.height, Some(256));
}

#[test]
fn basic_info_empty_without_metadata() {
    let info = scan(&[0xFF, 0xD8, 0xFF, 0xD9]).unwrap().basic_info();
    assert_eq!(info.width, None);
    assert_eq!(info.height, None);
    assert!(info.title.is_none());
    assert!(info.keywords.is_empty());
}

#[test]
fn missing_section_is_distinguishable_from_missing_tag() {
    let mut v = vec![0xFF, 0xD8];
    let payload = exif_payload(&[(0x0100, TYPE_USHORT, 1, 640)]);
    put_segment(&mut v, 0xFFE1, &payload);
    v.extend_from_slice(&[0xFF, 0xD9]);
    let image = scan(&v).unwrap();
    assert_eq!(
        image.read_value("IPTC", 0x0100),
        Err(LookupError::SectionNotFound("IPTC".to_string()))
    );
    assert_eq!(
        image.read_value("EXIF", 0x0111),
        Err(LookupError::TagNotFound { tag: 0x0111 })
    );
}

#[test]
fn xmp_app1_registers_under_its_own_name() {
    let mut v = vec![0xFF, 0xD8];
    put_segment(&mut v, 0xFFE1, b"http://ns.adobe.com/xap/1.0/\0<x:xmpmeta/>");
    v.extend_from_slice(&[0xFF, 0xD9]);
    let image = scan(&v).unwrap();
    assert!(image.section("XMP").is_some());
    assert!(image.section("EXIF").is_none());
}

#[test]
fn iptc_section_keeps_resource_data_opaque() {
    let mut v = vec![0xFF, 0xD8];
    let mut payload = b"Photoshop 3.0\0".to_vec();
    payload.extend_from_slice(b"8BIM\x04\x04\0\0\0\0\0\x04asdf");
    put_segment(&mut v, 0xFFED, &payload);
    v.extend_from_slice(&[0xFF, 0xD9]);
    let image = scan(&v).unwrap();
    let Some(Section::Iptc(iptc)) = image.section("IPTC") else {
        panic!("IPTC section missing");
    };
    assert!(iptc.has_resource_signature());
    assert_eq!(
        image.read_value("IPTC", 0x0404),
        Err(LookupError::TagNotFound { tag: 0x0404 })
    );
}

#[test]
fn tag_names_round_trip() {
    assert_eq!(tags::tag_name(0x0100), Some("ImageWidth"));
    assert_eq!(tags::tag_name(0xA435), Some("LensSerialNumber"));
    assert_eq!(tags::tag_name(0x001F), Some("GPSHPositioningError"));
    assert_eq!(tags::tag_name(0xBEEF), None);
    assert_eq!(tags::tag_id("PixelXDimension"), Some(0xA002));
    assert_eq!(tags::tag_id("NoSuchTag"), None);
}

#[test]
fn enum_labels() {
    assert_eq!(tags::enum_label(0x8822, 3), Some("Aperture priority"));
    assert_eq!(tags::enum_label(0x9209, 0x19), Some("Flash fired, auto mode"));
    assert_eq!(tags::enum_label(0xA403, 1), Some("Manual white balance"));
    // value outside the defined set
    assert_eq!(tags::enum_label(0x8822, 99), None);
    // tag that is not enumerated
    assert_eq!(tags::enum_label(0x0100, 1), None);
}
