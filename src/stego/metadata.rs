// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelveil

//! Durable key-derivation metadata.
//!
//! The stego image alone is not enough to recover the message: re-deriving
//! the key needs the salt and iteration count that went into PBKDF2. Those
//! travel in a small JSON record persisted *alongside* the image:
//!
//! ```json
//! {
//!   "salt": "q2zT1Zb8...",
//!   "iterations": 390000,
//!   "kdf": "PBKDF2-HMAC-SHA256"
//! }
//! ```
//!
//! The record is created at embed time, read at extract time, never mutated.
//! Its fields feed `derive_key` verbatim — the `kdf` string is a format
//! identifier, not a knob.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::stego::crypto::{Salt, KDF_ID};
use crate::stego::error::StegoError;

/// The `{salt, iterations, kdf}` record required to re-derive the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Base64-url-encoded 16-byte salt.
    pub salt: String,
    /// PBKDF2 iteration count (must be >= 1).
    pub iterations: u32,
    /// KDF identifier; always `"PBKDF2-HMAC-SHA256"`.
    pub kdf: String,
}

impl Metadata {
    /// Build a record for a freshly generated salt.
    pub fn new(salt: &Salt, iterations: u32) -> Self {
        Self {
            salt: salt.to_base64(),
            iterations,
            kdf: KDF_ID.to_string(),
        }
    }

    /// Decode the salt field.
    ///
    /// # Errors
    /// [`StegoError::InvalidMetadata`] if the salt is not valid base64-url
    /// or has the wrong length.
    pub fn salt(&self) -> Result<Salt, StegoError> {
        Salt::from_base64(&self.salt)
    }

    /// Check the record is usable for key re-derivation.
    ///
    /// # Errors
    /// [`StegoError::InvalidMetadata`] if the KDF identifier is not
    /// [`KDF_ID`], the iteration count is zero, or the salt does not decode.
    pub fn validate(&self) -> Result<(), StegoError> {
        if self.kdf != KDF_ID {
            return Err(StegoError::InvalidMetadata("unsupported kdf identifier"));
        }
        if self.iterations == 0 {
            return Err(StegoError::InvalidMetadata("iteration count must be >= 1"));
        }
        self.salt()?;
        Ok(())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, StegoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a JSON record.
    pub fn from_json(json: &str) -> Result<Self, StegoError> {
        let meta: Self = serde_json::from_str(json)?;
        meta.validate()?;
        Ok(meta)
    }

    /// Write the record to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StegoError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read and validate a record from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StegoError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::crypto::SALT_LEN;

    fn sample() -> Metadata {
        Metadata::new(&Salt::from_bytes([0xAB; SALT_LEN]), 390_000)
    }

    #[test]
    fn json_roundtrip() {
        let meta = sample();
        let json = meta.to_json().unwrap();
        assert_eq!(Metadata::from_json(&json).unwrap(), meta);
    }

    #[test]
    fn fields_are_verbatim() {
        let meta = sample();
        let json = meta.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kdf"], "PBKDF2-HMAC-SHA256");
        assert_eq!(value["iterations"], 390_000);
        // base64-url of sixteen 0xAB bytes.
        assert_eq!(value["salt"], "q6urq6urq6urq6urq6urqw==");
    }

    #[test]
    fn salt_roundtrips_through_record() {
        let salt = Salt::from_bytes([3u8; SALT_LEN]);
        let meta = Metadata::new(&salt, 1);
        assert_eq!(meta.salt().unwrap(), salt);
    }

    #[test]
    fn wrong_kdf_rejected() {
        let mut meta = sample();
        meta.kdf = "Argon2id".to_string();
        assert!(matches!(
            meta.validate(),
            Err(StegoError::InvalidMetadata("unsupported kdf identifier"))
        ));
    }

    #[test]
    fn zero_iterations_rejected() {
        let mut meta = sample();
        meta.iterations = 0;
        assert!(matches!(meta.validate(), Err(StegoError::InvalidMetadata(_))));
    }

    #[test]
    fn garbage_salt_rejected() {
        let mut meta = sample();
        meta.salt = "***".to_string();
        assert!(matches!(meta.validate(), Err(StegoError::InvalidMetadata(_))));
    }

    #[test]
    fn missing_field_is_json_error() {
        let json = r#"{"salt": "q6urq6urq6urq6urq6urqw==", "iterations": 1000}"#;
        assert!(matches!(Metadata::from_json(json), Err(StegoError::Json(_))));
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stego_meta.json");
        let meta = sample();
        meta.save(&path).unwrap();
        assert_eq!(Metadata::load(&path).unwrap(), meta);
    }
}
