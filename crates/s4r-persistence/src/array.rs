//! Array-payload encoding (§4.4): a `u32` sequence as little-endian bytes,
//! DEFLATE-compressed. Used for `traffic_load_<step>` snapshots.

use std::io::{Read, Write};

use flate2::write::DeflateEncoder;
use flate2::read::DeflateDecoder;
use flate2::Compression;

use crate::error::{PersistenceError, PersistenceResult};

/// Encode `values` as little-endian `u32`s, then DEFLATE-compress.
pub fn encode_array(values: &[u32]) -> PersistenceResult<Vec<u8>> {
    let mut raw = Vec::with_capacity(values.len() * 4);
    for v in values {
        raw.extend_from_slice(&v.to_le_bytes());
    }

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&raw)?;
    Ok(encoder.finish()?)
}

/// Decode a DEFLATE-compressed little-endian `u32` sequence previously
/// produced by [`encode_array`].
///
/// Fails with [`PersistenceError::Corrupt`] if the decompressed payload's
/// length isn't a multiple of 4 bytes.
pub fn decode_array(bytes: &[u8]) -> PersistenceResult<Vec<u32>> {
    let mut decoder = DeflateDecoder::new(bytes);
    let mut raw = Vec::new();
    decoder.read_to_end(&mut raw)?;

    if raw.len() % 4 != 0 {
        return Err(PersistenceError::Corrupt(format!(
            "array payload is {} bytes, not a multiple of 4",
            raw.len()
        )));
    }

    Ok(raw
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}
