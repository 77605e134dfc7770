// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelveil

//! Bit-plane codec: delimiter framing plus LSB embedding and extraction.
//!
//! The wire format is a framed message embedded one bit per sample:
//!
//! ```text
//! [N bytes ] payload (opaque; normally an encryption token)
//! [13 bytes] delimiter "#####END#####"
//! ```
//!
//! The frame is converted to bits MSB-first per byte and written into the
//! least significant bit of consecutive samples, in flat sample-major order.
//! Samples beyond the frame keep their original values. There is no length
//! prefix — the delimiter marks the payload boundary. That keeps the format
//! self-describing at the cost of an O(n) scan on extraction, which is free
//! in practice since the carrier must be read in full anyway.
//!
//! The codec never frames plaintext directly: callers embed ciphertext, which
//! is pseudorandom, so an accidental delimiter collision inside the payload
//! is a cryptographic non-event.

use crate::pixels::PixelBuffer;
use crate::stego::capacity::payload_capacity;
use crate::stego::error::StegoError;

/// Payload boundary marker. Must match exactly between embed and extract;
/// changing it is a breaking format change.
pub const DELIMITER: &[u8; 13] = b"#####END#####";

/// Convert bytes to a bit vector (MSB first within each byte).
pub(crate) fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
/// An incomplete trailing group of fewer than 8 bits is discarded — it can
/// never contain a full delimiter byte.
pub(crate) fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks_exact(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}

/// Embed a payload into the carrier's LSB plane.
///
/// Frames the payload with [`DELIMITER`], then overwrites exactly one bit
/// (the LSB) of each of the first `frame_bits` samples. All other bits and
/// all trailing samples are untouched. The input carrier is not mutated;
/// a new buffer of identical shape is returned.
///
/// An empty payload is legal — the delimiter alone is embedded.
///
/// # Errors
/// [`StegoError::CapacityExceeded`] if the framed payload has more bits than
/// the carrier has samples. The error reports the carrier's maximum payload
/// size in bytes.
pub fn embed(carrier: &PixelBuffer, payload: &[u8]) -> Result<PixelBuffer, StegoError> {
    // Bit-level check: covers payloads over capacity and carriers too small
    // to hold even the bare delimiter (where capacity saturates to 0).
    let frame_len = payload.len() + DELIMITER.len();
    if frame_len * 8 > carrier.sample_count() {
        return Err(StegoError::CapacityExceeded {
            capacity: payload_capacity(carrier),
        });
    }

    let mut frame = Vec::with_capacity(frame_len);
    frame.extend_from_slice(payload);
    frame.extend_from_slice(DELIMITER);

    let bits = bytes_to_bits(&frame);

    let mut stego = carrier.clone();
    let samples = stego.samples_mut();
    for (sample, bit) in samples.iter_mut().zip(&bits) {
        *sample = (*sample & 0xFE) | bit;
    }

    Ok(stego)
}

/// Extract a payload from the carrier's LSB plane.
///
/// Reads the LSB of every sample in embed order, regroups the bits into
/// bytes, and scans for the first occurrence of [`DELIMITER`]. Everything
/// strictly before it is the payload.
///
/// # Errors
/// [`StegoError::NoHiddenData`] if the delimiter is not found — nothing was
/// embedded, or the carrier was altered since embedding.
pub fn extract(carrier: &PixelBuffer) -> Result<Vec<u8>, StegoError> {
    let bits: Vec<u8> = carrier.samples().iter().map(|&s| s & 1).collect();
    let raw = bits_to_bytes(&bits);

    let end = raw
        .windows(DELIMITER.len())
        .position(|w| w == DELIMITER)
        .ok_or(StegoError::NoHiddenData)?;

    Ok(raw[..end].to_vec())
}
