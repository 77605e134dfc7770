// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelveil

//! Cryptographic primitives for payload encryption.
//!
//! Key derivation is PBKDF2-HMAC-SHA256: the iteration count and salt that
//! went into `derive_key` must be reproduced byte-for-byte to get the same
//! key back. They are carried in the external metadata record, whose `kdf`
//! field pins the `"PBKDF2-HMAC-SHA256"` identifier. A mismatched count or
//! salt silently produces a *different* key, never an error — the caller
//! only finds out at decrypt time via [`StegoError::AuthenticationFailed`].
//!
//! Encryption is AES-256-GCM-SIV, chosen for its nonce-misuse resistance:
//! the nonce is randomly generated and travels inside the token, so an RNG
//! failure degrades gracefully instead of catastrophically. The token layout:
//!
//! ```text
//! [1 byte ] version (0x01)
//! [12 bytes] nonce
//! [N bytes ] ciphertext + 16-byte authentication tag
//! ```
//!
//! Key material is [`Zeroizing`]: derived, used for exactly one encrypt or
//! decrypt call, then wiped when it leaves scope. It is never persisted,
//! logged, or cached.

use aes_gcm_siv::aead::Aead;
use aes_gcm_siv::{Aes256GcmSiv, KeyInit, Nonce};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::stego::error::StegoError;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;
/// Derived key length in bytes.
pub const KEY_LEN: usize = 32;
/// AES-GCM-SIV nonce length in bytes.
pub const NONCE_LEN: usize = 12;
/// AES-GCM-SIV authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Token format version byte.
const TOKEN_VERSION: u8 = 0x01;
/// Smallest structurally valid token: version + nonce + tag.
const MIN_TOKEN_LEN: usize = 1 + NONCE_LEN + TAG_LEN;

/// KDF identifier recorded in metadata. Fixed by the metadata interface;
/// changing the KDF means changing this string and breaking old records.
pub const KDF_ID: &str = "PBKDF2-HMAC-SHA256";

/// Default PBKDF2 iteration count for new embeddings.
pub const DEFAULT_ITERATIONS: u32 = 390_000;

/// Derived symmetric key, wiped on drop.
pub type KeyMaterial = Zeroizing<[u8; KEY_LEN]>;

/// A 16-byte key-derivation salt.
///
/// Generated fresh per embed operation and persisted (base64-url-encoded)
/// in the metadata record. The salt is not secret — only the password is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    /// Generate a fresh random salt from the operating system CSPRNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a salt from a caller-supplied CSPRNG.
    ///
    /// Exists so tests can use a seeded generator; production callers should
    /// use [`Salt::generate`].
    pub fn generate_with(rng: &mut (impl RngCore + CryptoRng)) -> Self {
        let mut bytes = [0u8; SALT_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Wrap existing salt bytes (e.g. recovered from metadata).
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw salt bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }

    /// Base64-url encoding, the form stored in the metadata record.
    pub fn to_base64(&self) -> String {
        URL_SAFE.encode(self.0)
    }

    /// Decode a base64-url salt from a metadata record.
    ///
    /// # Errors
    /// [`StegoError::InvalidMetadata`] if the string is not valid base64-url
    /// or does not decode to exactly 16 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self, StegoError> {
        let decoded = URL_SAFE
            .decode(encoded)
            .map_err(|_| StegoError::InvalidMetadata("salt is not valid base64-url"))?;
        let bytes: [u8; SALT_LEN] = decoded
            .try_into()
            .map_err(|_| StegoError::InvalidMetadata("salt must decode to 16 bytes"))?;
        Ok(Self(bytes))
    }
}

/// Derive a 32-byte key from a password using PBKDF2-HMAC-SHA256.
///
/// Deterministic: the same (password, salt, iterations) triple always yields
/// the same key. `iterations` must be at least 1; the metadata layer rejects
/// zero before it can reach this function.
pub fn derive_key(password: &str, salt: &Salt, iterations: u32) -> KeyMaterial {
    debug_assert!(iterations >= 1, "iteration count must be >= 1");
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut *key);
    key
}

/// Encrypt plaintext into an authenticated token.
///
/// A fresh random nonce is generated per call, so encrypting the same
/// plaintext twice under the same key yields different tokens. The result
/// carries the version byte, the nonce, and the ciphertext with its
/// 16-byte authentication tag.
pub fn encrypt(plaintext: &[u8], key: &KeyMaterial) -> Vec<u8> {
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);

    let cipher = Aes256GcmSiv::new_from_slice(&**key).expect("valid key length");
    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .expect("AES-GCM-SIV encrypt should not fail");

    let mut token = Vec::with_capacity(1 + NONCE_LEN + ciphertext.len());
    token.push(TOKEN_VERSION);
    token.extend_from_slice(&nonce_bytes);
    token.extend_from_slice(&ciphertext);
    token
}

/// Decrypt an authenticated token.
///
/// # Errors
/// - [`StegoError::MalformedCiphertext`] if the token is too short or has an
///   unknown version byte.
/// - [`StegoError::AuthenticationFailed`] if the tag check fails — wrong
///   password, corrupted data, or bytes never produced by [`encrypt`]. No
///   partially decrypted or unauthenticated plaintext is ever returned.
pub fn decrypt(token: &[u8], key: &KeyMaterial) -> Result<Vec<u8>, StegoError> {
    if token.len() < MIN_TOKEN_LEN || token[0] != TOKEN_VERSION {
        return Err(StegoError::MalformedCiphertext);
    }

    let nonce = Nonce::from_slice(&token[1..1 + NONCE_LEN]);
    let ciphertext = &token[1 + NONCE_LEN..];

    let cipher = Aes256GcmSiv::new_from_slice(&**key).expect("valid key length");
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| StegoError::AuthenticationFailed)
}
