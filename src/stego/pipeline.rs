// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelveil

//! High-level hide/reveal pipeline.
//!
//! Wires the codec and the crypto layer together for the common case of a
//! UTF-8 text message:
//!
//! 1. generate a fresh salt
//! 2. derive the key (PBKDF2-HMAC-SHA256)
//! 3. encrypt the message into an authenticated token
//! 4. embed the token into the carrier's LSB plane
//! 5. hand back the stego image plus the metadata record to persist
//!
//! and the inverse on reveal. Only ciphertext ever reaches the codec — the
//! delimiter never has to be searched for inside plaintext.
//!
//! Key material is derived, used for the single encrypt/decrypt call, and
//! dropped (zeroed) before these functions return.

use crate::pixels::PixelBuffer;
use crate::stego::codec;
use crate::stego::crypto::{self, Salt, DEFAULT_ITERATIONS};
use crate::stego::error::StegoError;
use crate::stego::metadata::Metadata;

/// Encrypt a message under `password` and hide it in `cover`.
///
/// Uses [`DEFAULT_ITERATIONS`] for key derivation. Returns the stego image
/// and the metadata record the caller must persist alongside it — without
/// that record the message cannot be recovered later.
///
/// # Errors
/// [`StegoError::CapacityExceeded`] if the encrypted message does not fit
/// in the carrier. Note the token adds a fixed overhead (29 bytes) on top
/// of the message length.
pub fn hide_message(
    cover: &PixelBuffer,
    message: &str,
    password: &str,
) -> Result<(PixelBuffer, Metadata), StegoError> {
    hide_message_with_iterations(cover, message, password, DEFAULT_ITERATIONS)
}

/// [`hide_message`] with an explicit PBKDF2 iteration count.
///
/// The count is recorded in the returned metadata; reveal re-derives with
/// whatever the record says, so the two never have to be kept in sync
/// manually.
pub fn hide_message_with_iterations(
    cover: &PixelBuffer,
    message: &str,
    password: &str,
    iterations: u32,
) -> Result<(PixelBuffer, Metadata), StegoError> {
    // 1. Fresh salt per embed operation; durable via metadata.
    let salt = Salt::generate();
    let metadata = Metadata::new(&salt, iterations);
    metadata.validate()?;

    // 2-3. Derive key and encrypt. The key is ephemeral and zeroed on drop.
    let key = crypto::derive_key(password, &salt, iterations);
    let token = crypto::encrypt(message.as_bytes(), &key);

    // 4. Embed the ciphertext token.
    let stego = codec::embed(cover, &token)?;

    Ok((stego, metadata))
}

/// Recover and decrypt a message hidden by [`hide_message`].
///
/// `metadata` is the record produced at hide time; its salt and iteration
/// count are used verbatim for key re-derivation.
///
/// # Errors
/// - [`StegoError::InvalidMetadata`] if the record fails validation.
/// - [`StegoError::NoHiddenData`] if the carrier holds no embedded frame.
/// - [`StegoError::MalformedCiphertext`] if the extracted payload is not a
///   structurally valid token.
/// - [`StegoError::AuthenticationFailed`] on a wrong password or tampered
///   data — the two are indistinguishable by design.
/// - [`StegoError::InvalidUtf8`] if the decrypted payload is not UTF-8.
pub fn reveal_message(
    stego: &PixelBuffer,
    password: &str,
    metadata: &Metadata,
) -> Result<String, StegoError> {
    metadata.validate()?;
    let salt = metadata.salt()?;

    let token = codec::extract(stego)?;

    let key = crypto::derive_key(password, &salt, metadata.iterations);
    let plaintext = crypto::decrypt(&token, &key)?;

    String::from_utf8(plaintext).map_err(|_| StegoError::InvalidUtf8)
}
