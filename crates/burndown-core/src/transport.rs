//! Transport Codec
//!
//! `CompactState` -> JSON -> gzip -> URL-safe base64 without padding, and
//! back. The token can be dropped into a query string as is.

use std::io::{Read, Write};

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::compact::CompactState;
use crate::error::{CodecError, CodecResult};

/// Inflated payloads larger than this are rejected.
pub const MAX_INFLATED_BYTES: u64 = 1024 * 1024;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Encode the wire form into a share token.
pub fn encode_token(state: &CompactState) -> CodecResult<String> {
    let json = serde_json::to_string(state).map_err(|e| CodecError::Encode(e.to_string()))?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(json.as_bytes())
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    let compressed = encoder
        .finish()
        .map_err(|e| CodecError::Encode(e.to_string()))?;

    let token = URL_SAFE_NO_PAD.encode(compressed);
    log::debug!("encoded {} bytes of share data into a {}-char token", json.len(), token.len());
    Ok(token)
}

/// Decode a share token into the wire form.
///
/// Every failure (bad base64, corrupt or oversized stream, invalid JSON,
/// wrong structure) is reported as [`CodecError::Decode`].
pub fn decode_token(token: &str) -> CodecResult<CompactState> {
    let compressed = decode_base64(token)?;
    let json = inflate(&compressed)?;
    serde_json::from_str(&json).map_err(|e| decode_error("structure", e))
}

fn decode_base64(token: &str) -> CodecResult<Vec<u8>> {
    let mut base64 = token.trim().replace('-', "+").replace('_', "/");
    while base64.len() % 4 != 0 {
        base64.push('=');
    }
    STANDARD.decode(base64).map_err(|e| decode_error("base64", e))
}

/// Inflate a gzip stream, or a zlib stream when the gzip header is missing.
fn inflate(compressed: &[u8]) -> CodecResult<String> {
    let reader: Box<dyn Read + '_> = if compressed.starts_with(&GZIP_MAGIC) {
        Box::new(GzDecoder::new(compressed))
    } else {
        Box::new(ZlibDecoder::new(compressed))
    };

    let mut json = String::new();
    reader
        .take(MAX_INFLATED_BYTES + 1)
        .read_to_string(&mut json)
        .map_err(|e| decode_error("inflate", e))?;

    if json.len() as u64 > MAX_INFLATED_BYTES {
        return Err(CodecError::Decode(format!(
            "inflated data exceeds {} bytes",
            MAX_INFLATED_BYTES
        )));
    }
    Ok(json)
}

fn decode_error(stage: &str, err: impl std::fmt::Display) -> CodecError {
    log::warn!("share token rejected at {} stage: {}", stage, err);
    CodecError::Decode(format!("{}: {}", stage, err))
}
