// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelveil

//! Steganographic embedding, extraction, and payload protection.
//!
//! The layer is split the same way its data flows:
//!
//! - [`codec`] — delimiter framing and the LSB bit-plane walk
//! - [`capacity`] — exact payload capacity reporting
//! - [`crypto`] — PBKDF2-HMAC-SHA256 key derivation and AES-256-GCM-SIV
//!   token encryption
//! - [`metadata`] — the durable `{salt, iterations, kdf}` record
//! - [`pipeline`] — `hide_message` / `reveal_message` wiring it together
//!
//! Everything is synchronous and stateless across calls; the only ambient
//! state is the OS CSPRNG used for salt and nonce generation.

pub mod capacity;
pub mod codec;
pub mod crypto;
pub mod error;
pub mod metadata;
mod pipeline;

pub use error::StegoError;
pub use pipeline::{hide_message, hide_message_with_iterations, reveal_message};
