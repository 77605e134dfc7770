// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelveil

//! # pixelveil
//!
//! LSB image steganography engine with password-based authenticated
//! encryption. Hides an encrypted message in the least-significant bits of
//! a lossless raster image's pixel data and recovers it given the correct
//! password.
//!
//! Three independent pieces, wired together by the pipeline:
//!
//! - **Bit-plane codec** (`stego::codec`): frames an opaque payload with a
//!   public delimiter and writes it one bit per sample into the LSB plane.
//! - **Crypto** (`stego::crypto`): PBKDF2-HMAC-SHA256 key derivation plus
//!   AES-256-GCM-SIV authenticated tokens. The salt and iteration count are
//!   persisted in a small JSON metadata record (`stego::metadata`).
//! - **Steganalysis heuristic** (`analysis`): a coarse `mean + stddev` score
//!   over the grayscale LSB plane.
//!
//! The crate is format-agnostic: it operates on decoded uint8 samples
//! ([`PixelBuffer`]) and leaves image file decode/encode to the caller. The
//! carrier must stay lossless end to end — any re-encoding that perturbs
//! pixel values (lossy JPEG, resizing) destroys the hidden payload.
//!
//! # Quick start
//!
//! ```rust
//! use pixelveil::{hide_message, reveal_message, PixelBuffer};
//!
//! // Any lossless-decoded image works; here, a synthetic gray carrier.
//! let cover = PixelBuffer::new(100, 100, 1, vec![0x7Eu8; 10_000]).unwrap();
//!
//! let (stego, metadata) = hide_message(&cover, "meet at dawn", "correct horse").unwrap();
//! // Persist `metadata` (JSON) next to the losslessly re-encoded `stego` image.
//!
//! let message = reveal_message(&stego, "correct horse", &metadata).unwrap();
//! assert_eq!(message, "meet at dawn");
//! ```

pub mod analysis;
pub mod pixels;
pub mod stego;

pub use analysis::{classify, lsb_anomaly_score, Thresholds, Verdict};
pub use pixels::PixelBuffer;
pub use stego::capacity::payload_capacity;
pub use stego::codec::{embed, extract, DELIMITER};
pub use stego::crypto::{
    decrypt, derive_key, encrypt, KeyMaterial, Salt, DEFAULT_ITERATIONS, KDF_ID, KEY_LEN,
    NONCE_LEN, SALT_LEN,
};
pub use stego::metadata::Metadata;
pub use stego::{hide_message, hide_message_with_iterations, reveal_message, StegoError};
