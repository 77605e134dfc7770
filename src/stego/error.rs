// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelveil

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from buffer validation through
//! embedding, extraction, decryption, and metadata handling. Every failure
//! is terminal for its call and surfaced to the caller as a distinct,
//! inspectable condition — the core performs no logging and no retries.

use core::fmt;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// The payload plus delimiter exceeds the carrier's sample capacity.
    /// `capacity` is the maximum payload size (in bytes) this carrier
    /// supports, so the caller can shrink the message without guessing.
    CapacityExceeded {
        /// Maximum payload size in bytes for the offending carrier.
        capacity: usize,
    },
    /// The delimiter was not found in the carrier's LSB plane — nothing was
    /// ever embedded, or the carrier was altered (e.g. re-encoded lossily).
    NoHiddenData,
    /// The ciphertext integrity check failed: wrong password, corrupted
    /// data, or bytes that were never produced by `encrypt`. These cases
    /// are cryptographically indistinguishable.
    AuthenticationFailed,
    /// The ciphertext is not structurally well-formed (too short, unknown
    /// version byte).
    MalformedCiphertext,
    /// The sample vector's length does not match the declared dimensions.
    ShapeMismatch {
        /// `width * height * channels`.
        expected: usize,
        /// Actual sample count supplied.
        actual: usize,
    },
    /// The metadata record is semantically invalid (wrong KDF identifier,
    /// zero iteration count, salt of the wrong length or encoding).
    InvalidMetadata(&'static str),
    /// The metadata record could not be parsed or serialized as JSON.
    Json(serde_json::Error),
    /// Reading or writing the metadata file failed.
    Io(std::io::Error),
    /// The decrypted payload is not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "payload too large for this image (capacity: {capacity} bytes)")
            }
            Self::NoHiddenData => write!(f, "no hidden data found"),
            Self::AuthenticationFailed => {
                write!(f, "decryption failed (wrong password or corrupted data)")
            }
            Self::MalformedCiphertext => write!(f, "ciphertext is malformed"),
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "sample count {actual} does not match dimensions (expected {expected})")
            }
            Self::InvalidMetadata(reason) => write!(f, "invalid metadata: {reason}"),
            Self::Json(e) => write!(f, "metadata JSON error: {e}"),
            Self::Io(e) => write!(f, "metadata I/O error: {e}"),
            Self::InvalidUtf8 => write!(f, "decrypted payload is not valid UTF-8"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StegoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<std::io::Error> for StegoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
