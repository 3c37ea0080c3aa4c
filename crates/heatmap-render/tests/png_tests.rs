//! Tests for the PNG encoder.

use std::io::Read;

use heatmap_core::{Heatmap, Stamp};
use heatmap_render::png::{encode_rgba, PngError};
use heatmap_render::{render_default, ColorScheme};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Decompress the IDAT payload back into filtered scanlines.
fn inflate_idat(png: &[u8]) -> Vec<u8> {
    // Fixed layout: signature (8) + IHDR chunk (25) put IDAT at 33.
    assert_eq!(&png[37..41], b"IDAT");
    let idat_len = read_u32(png, 33) as usize;
    let compressed = &png[41..41 + idat_len];

    let mut raw = Vec::new();
    flate2::read::ZlibDecoder::new(compressed)
        .read_to_end(&mut raw)
        .unwrap();
    raw
}

#[test]
fn test_signature_and_chunk_sequence() {
    let png = encode_rgba(&[0u8; 2 * 2 * 4], 2, 2).unwrap();

    assert_eq!(&png[0..8], &PNG_SIGNATURE);
    assert_eq!(read_u32(&png, 8), 13, "IHDR data is 13 bytes");
    assert_eq!(&png[12..16], b"IHDR");
    assert_eq!(&png[37..41], b"IDAT");
    assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
}

#[test]
fn test_ihdr_dimensions_and_format() {
    let png = encode_rgba(&[0u8; 5 * 3 * 4], 5, 3).unwrap();

    assert_eq!(read_u32(&png, 16), 5, "IHDR width");
    assert_eq!(read_u32(&png, 20), 3, "IHDR height");
    // Depth 8, color type 6, deflate, filter 0, no interlace.
    assert_eq!(&png[24..29], &[8, 6, 0, 0, 0]);
}

#[test]
fn test_size_mismatch_is_rejected() {
    let err = encode_rgba(&[0u8; 10], 2, 2).unwrap_err();
    assert!(matches!(
        err,
        PngError::SizeMismatch {
            got: 10,
            width: 2,
            height: 2
        }
    ));
}

#[test]
fn test_scanlines_round_trip_through_idat() {
    let pixels: Vec<u8> = (0..2 * 2 * 4).map(|i| i as u8 * 3).collect();
    let png = encode_rgba(&pixels, 2, 2).unwrap();

    let raw = inflate_idat(&png);
    // Two scanlines, each a filter byte plus 2 RGBA pixels.
    assert_eq!(raw.len(), 2 * (1 + 2 * 4));
    assert_eq!(raw[0], 0, "first scanline uses filter 0");
    assert_eq!(raw[9], 0, "second scanline uses filter 0");
    assert_eq!(&raw[1..9], &pixels[0..8]);
    assert_eq!(&raw[10..18], &pixels[8..16]);
}

#[test]
fn test_encode_rendered_buffer() {
    let mut map = Heatmap::new(3, 3).unwrap();
    let stamp = Stamp::from_data(3, 3, vec![0.0, 0.5, 0.0, 0.5, 1.0, 0.5, 0.0, 0.5, 0.0]).unwrap();
    map.add_point_with_stamp(1, 1, &stamp);

    let pixels = render_default(&map);
    let png = encode_rgba(&pixels, map.width(), map.height()).unwrap();

    let raw = inflate_idat(&png);
    assert_eq!(raw.len(), 3 * (1 + 3 * 4));
    // Center pixel of the middle scanline is full white.
    let mid_row = &raw[raw.len() / 3..2 * raw.len() / 3];
    assert_eq!(&mid_row[5..9], &[255, 255, 255, 255]);
}

#[test]
fn test_encode_empty_render_is_transparent() {
    let map = Heatmap::new(4, 4).unwrap();
    let pixels = heatmap_render::render_with_scheme(&map, &ColorScheme::black_to_white());
    let png = encode_rgba(&pixels, 4, 4).unwrap();

    let raw = inflate_idat(&png);
    assert!(
        raw.iter().all(|&b| b == 0),
        "filter bytes and pixels are all zero"
    );
}
