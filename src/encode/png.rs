//! Minimal PNG writer: 8-bit RGBA, no interlace, filter type 0 on every row,
//! a single zlib-compressed `IDAT`. No ancillary chunks, so identical pixels
//! always produce identical bytes.

use std::io::Write as _;

use flate2::{Compression, Crc, write::ZlibEncoder};

use crate::{
    foundation::error::{BackgroundError, BackgroundResult},
    render::Surface,
};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], payload: &[u8]) -> BackgroundResult<()> {
    let len = u32::try_from(payload.len()).map_err(|_| {
        BackgroundError::encode(format!(
            "{} chunk payload of {} bytes exceeds u32",
            String::from_utf8_lossy(kind),
            payload.len()
        ))
    })?;

    let mut crc = Crc::new();
    crc.update(kind);
    crc.update(payload);

    out.reserve(12 + payload.len());
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(payload);
    out.extend_from_slice(&crc.sum().to_be_bytes());
    Ok(())
}

fn ihdr_payload(width: u32, height: u32) -> [u8; 13] {
    let mut p = [0u8; 13];
    p[0..4].copy_from_slice(&width.to_be_bytes());
    p[4..8].copy_from_slice(&height.to_be_bytes());
    p[8] = BIT_DEPTH;
    p[9] = COLOR_TYPE_RGBA;
    // compression, filter method, interlace: all 0
    p
}

/// Raw scanline stream: each row prefixed with its filter byte.
fn scanlines(surface: &Surface) -> Vec<u8> {
    let mut raw = Vec::with_capacity(surface.data().len() + surface.height() as usize);
    for row in surface.rows() {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }
    raw
}

fn deflate(raw: &[u8]) -> BackgroundResult<Vec<u8>> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::best());
    let zlib_err = |e: std::io::Error| BackgroundError::encode(format!("zlib: {e}"));
    enc.write_all(raw).map_err(zlib_err)?;
    enc.finish().map_err(zlib_err)
}

/// Serialize `surface` into a complete PNG byte stream.
#[tracing::instrument(skip(surface), fields(width = surface.width(), height = surface.height()))]
pub fn encode_png(surface: &Surface) -> BackgroundResult<Vec<u8>> {
    let raw = scanlines(surface);
    let idat = deflate(&raw)?;
    tracing::debug!(raw = raw.len(), compressed = idat.len(), "deflated scanlines");

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + idat.len() + 3 * 12 + 13);
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(
        &mut out,
        b"IHDR",
        &ihdr_payload(surface.width(), surface.height()),
    )?;
    write_chunk(&mut out, b"IDAT", &idat)?;
    write_chunk(&mut out, b"IEND", &[])?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
