// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelveil

//! Carrier capacity reporting.
//!
//! Capacity is exact, not estimated: one bit per sample, eight bits per
//! payload byte, minus the fixed delimiter. The codec reports this number
//! directly so callers never have to recompute it — it is also the figure
//! carried inside [`StegoError::CapacityExceeded`](crate::stego::error::StegoError).

use crate::pixels::PixelBuffer;
use crate::stego::codec::DELIMITER;

/// Maximum payload size in bytes that can be embedded in the given carrier.
///
/// `floor(sample_count / 8) - delimiter_len`, saturating at zero for
/// carriers too small to hold even the delimiter.
pub fn payload_capacity(carrier: &PixelBuffer) -> usize {
    (carrier.sample_count() / 8).saturating_sub(DELIMITER.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(samples: usize) -> PixelBuffer {
        PixelBuffer::new(samples as u32, 1, 1, vec![0u8; samples]).unwrap()
    }

    #[test]
    fn capacity_formula() {
        // 1024 samples → 128 bytes raw → minus 13 delimiter bytes.
        assert_eq!(payload_capacity(&buf(1024)), 115);
    }

    #[test]
    fn rounds_down_partial_bytes() {
        assert_eq!(payload_capacity(&buf(1031)), 115);
        assert_eq!(payload_capacity(&buf(1032)), 116);
    }

    #[test]
    fn tiny_carrier_saturates_to_zero() {
        assert_eq!(payload_capacity(&buf(0)), 0);
        assert_eq!(payload_capacity(&buf(8)), 0);
        assert_eq!(payload_capacity(&buf(13 * 8 - 1)), 0);
        // Exactly the delimiter fits → capacity 0, but embed of b"" succeeds.
        assert_eq!(payload_capacity(&buf(13 * 8)), 0);
        assert_eq!(payload_capacity(&buf(14 * 8)), 1);
    }
}
