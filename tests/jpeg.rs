//! Segment scanner tests: marker framing, dispatch, and structural errors.

use jpegmeta::{scan, ScanError, Section, SOF0_HEIGHT, SOF0_PRECISION, SOF0_WIDTH};

/// Append one length-prefixed segment: marker, declared length, payload.
fn put_segment(v: &mut Vec<u8>, marker: u16, payload: &[u8]) {
    v.extend_from_slice(&marker.to_be_bytes());
    v.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    v.extend_from_slice(payload);
}

#[test]
fn rejects_buffer_without_soi() {
    let err = scan(&[0x12, 0x34, 0x56]).unwrap_err();
    assert_eq!(err, ScanError::NotJpeg { found: 0x1234 });
}

#[test]
fn rejects_empty_buffer() {
    assert!(matches!(scan(&[]), Err(ScanError::NotJpeg { .. })));
}

#[test]
fn minimal_soi_eoi() {
    let image = scan(&[0xFF, 0xD8, 0xFF, 0xD9]).unwrap();
    assert_eq!(image.section_names().count(), 0);
}

#[test]
fn eof_between_segments_is_a_clean_end() {
    // SOI and then nothing: the stream simply stops.
    let image = scan(&[0xFF, 0xD8]).unwrap();
    assert_eq!(image.section_names().count(), 0);
}

#[test]
fn invalid_marker_reports_position() {
    let err = scan(&[0xFF, 0xD8, 0x12, 0x34]).unwrap_err();
    assert_eq!(
        err,
        ScanError::InvalidMarker {
            marker: 0x1234,
            offset: 2
        }
    );
}

#[test]
fn unknown_marker_aborts() {
    // APP5 has no dispatch entry.
    let mut v = vec![0xFF, 0xD8];
    put_segment(&mut v, 0xFFE5, &[0, 0]);
    let err = scan(&v).unwrap_err();
    assert_eq!(
        err,
        ScanError::UnknownMarker {
            marker: 0xFFE5,
            offset: 2
        }
    );
}

#[test]
fn truncated_segment_declared_vs_remaining() {
    // COM declares 10 bytes of length but only 4 payload bytes follow.
    let v = vec![0xFF, 0xD8, 0xFF, 0xFE, 0x00, 0x0A, 0x01, 0x02, 0x03, 0x04];
    let err = scan(&v).unwrap_err();
    assert_eq!(
        err,
        ScanError::TruncatedSegment {
            marker: 0xFFFE,
            offset: 4,
            declared: 10,
            remaining: 4
        }
    );
}

#[test]
fn app0_requires_jfif_identifier() {
    let mut v = vec![0xFF, 0xD8];
    put_segment(&mut v, 0xFFE0, b"JUNK\0\x01\x02\0\0\x00\x01\x00\x01\0\0");
    let err = scan(&v).unwrap_err();
    assert!(matches!(
        err,
        ScanError::WrongIdentifier { segment: "APP0", .. }
    ));
}

#[test]
fn app0_jfif_registers_a_section() {
    let mut v = vec![0xFF, 0xD8];
    put_segment(&mut v, 0xFFE0, b"JFIF\0\x01\x02\0\0\x00\x01\x00\x01\0\0");
    v.extend_from_slice(&[0xFF, 0xD9]);
    let image = scan(&v).unwrap();
    assert!(image.section("JFIF").is_some());
}

#[test]
fn comment_section_text() {
    let mut v = vec![0xFF, 0xD8];
    put_segment(&mut v, 0xFFFE, b"shot on a potato");
    v.extend_from_slice(&[0xFF, 0xD9]);
    let image = scan(&v).unwrap();
    let Some(Section::Raw(com)) = image.section("COM") else {
        panic!("COM section missing");
    };
    assert_eq!(com.text(), "shot on a potato");
}

#[test]
fn fill_bytes_before_marker_are_skipped() {
    let mut v = vec![0xFF, 0xD8, 0xFF, 0xFF, 0xFF];
    // the last 0xFF above doubles as the marker's high byte
    v.extend_from_slice(&[0xFE, 0x00, 0x04, b'h', b'i']);
    v.extend_from_slice(&[0xFF, 0xD9]);
    let image = scan(&v).unwrap();
    let Some(Section::Raw(com)) = image.section("COM") else {
        panic!("COM section missing");
    };
    assert_eq!(com.text(), "hi");
}

#[test]
fn ignored_segment_length_is_consumed_exactly() {
    // A DQT whose payload starts with 0xFF 0xFE; mis-framing would read it
    // as a COM marker and desynchronize everything after it.
    let mut v = vec![0xFF, 0xD8];
    put_segment(&mut v, 0xFFDB, &[0xFF, 0xFE, 0x00, 0x09, 1, 2, 3]);
    put_segment(&mut v, 0xFFFE, b"after");
    v.extend_from_slice(&[0xFF, 0xD9]);
    let image = scan(&v).unwrap();
    assert!(image.section("DQT").is_some());
    let Some(Section::Raw(com)) = image.section("COM") else {
        panic!("COM section missing");
    };
    assert_eq!(com.text(), "after");
}

#[test]
fn sof0_dimensions_as_pseudo_tags() {
    let mut v = vec![0xFF, 0xD8];
    // precision 8, height 256, width 512, 3 components (truncated fixture)
    put_segment(&mut v, 0xFFC0, &[8, 0x01, 0x00, 0x02, 0x00, 3]);
    v.extend_from_slice(&[0xFF, 0xD9]);
    let image = scan(&v).unwrap();
    assert_eq!(
        image.read_value("SOF0", SOF0_PRECISION).unwrap().as_u32(),
        Some(8)
    );
    assert_eq!(
        image.read_value("SOF0", SOF0_HEIGHT).unwrap().as_u32(),
        Some(256)
    );
    assert_eq!(
        image.read_value("SOF0", SOF0_WIDTH).unwrap().as_u32(),
        Some(512)
    );
}

#[test]
fn progressive_sof_exposes_no_pseudo_tags() {
    let mut v = vec![0xFF, 0xD8];
    put_segment(&mut v, 0xFFC2, &[8, 0x01, 0x00, 0x02, 0x00, 3]);
    v.extend_from_slice(&[0xFF, 0xD9]);
    let image = scan(&v).unwrap();
    assert!(image.section("SOF2").is_some());
    assert!(image.read_value("SOF2", SOF0_WIDTH).is_err());
}

#[test]
fn scan_stops_at_sos() {
    let mut v = vec![0xFF, 0xD8];
    put_segment(&mut v, 0xFFFE, b"before");
    v.extend_from_slice(&[0xFF, 0xDA]);
    // entropy-coded garbage that would be invalid markers
    v.extend_from_slice(&[0x00, 0x12, 0x99, 0xFF, 0x00]);
    let image = scan(&v).unwrap();
    assert!(image.section("COM").is_some());
}

#[test]
fn later_segment_with_same_name_wins() {
    let mut v = vec![0xFF, 0xD8];
    put_segment(&mut v, 0xFFFE, b"first");
    put_segment(&mut v, 0xFFFE, b"second");
    v.extend_from_slice(&[0xFF, 0xD9]);
    let image = scan(&v).unwrap();
    assert_eq!(image.section_names().count(), 1);
    let Some(Section::Raw(com)) = image.section("COM") else {
        panic!("COM section missing");
    };
    assert_eq!(com.text(), "second");
}

#[test]
fn sections_keep_stream_order() {
    let mut v = vec![0xFF, 0xD8];
    put_segment(&mut v, 0xFFE0, b"JFIF\0\x01\x02\0\0\x00\x01\x00\x01\0\0");
    put_segment(&mut v, 0xFFDB, &[0; 65]);
    put_segment(&mut v, 0xFFC0, &[8, 0x01, 0x00, 0x02, 0x00, 3]);
    put_segment(&mut v, 0xFFFE, b"c");
    v.extend_from_slice(&[0xFF, 0xD9]);
    let image = scan(&v).unwrap();
    let names: Vec<&str> = image.section_names().collect();
    assert_eq!(names, vec!["JFIF", "DQT", "SOF0", "COM"]);
}
