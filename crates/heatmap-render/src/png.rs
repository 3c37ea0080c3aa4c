//! Minimal PNG encoding for rendered RGBA buffers.
//!
//! Emits 8-bit truecolor-with-alpha PNGs (color type 6) with
//! filter-0 scanlines, compressed with `flate2` and checksummed with
//! `crc32fast`. The renderer only guarantees byte layout; this module
//! is the output collaborator that turns it into a file format.

use std::io::Write;

use thiserror::Error;

/// PNG encoding errors.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("pixel buffer length {got} does not match {width}x{height} RGBA")]
    SizeMismatch {
        got: usize,
        width: usize,
        height: usize,
    },

    #[error("IDAT compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Encode RGBA pixels as a PNG byte stream.
pub fn encode_rgba(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, PngError> {
    if pixels.len() != width * height * 4 {
        return Err(PngError::SizeMismatch {
            got: pixels.len(),
            width,
            height,
        });
    }

    let mut png = Vec::new();
    png.extend_from_slice(&SIGNATURE);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr.extend_from_slice(&(height as u32).to_be_bytes());
    // 8-bit depth, color type 6 (RGBA), deflate, filter method 0,
    // no interlace.
    ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);
    write_chunk(&mut png, b"IHDR", &ihdr);

    let idat = compress_scanlines(pixels, width)?;
    write_chunk(&mut png, b"IDAT", &idat);

    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

/// Prefix each scanline with filter type 0, then zlib-compress.
fn compress_scanlines(pixels: &[u8], width: usize) -> Result<Vec<u8>, std::io::Error> {
    let stride = width * 4;
    let mut raw = Vec::with_capacity(pixels.len() + pixels.len() / stride);
    for row in pixels.chunks_exact(stride) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&raw)?;
    encoder.finish()
}

fn write_chunk(png: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(kind);
    png.extend_from_slice(data);

    let mut crc = crc32fast::Hasher::new();
    crc.update(kind);
    crc.update(data);
    png.extend_from_slice(&crc.finalize().to_be_bytes());
}
