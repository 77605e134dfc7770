// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelveil

//! Statistical LSB steganalysis heuristic.
//!
//! Computes a suspicion score for an image's LSB plane. A natural photo's
//! LSBs are biased and low-variance; embedding pseudorandom ciphertext pushes
//! the plane toward mean ≈ 0.5 and maximal variance, raising the score:
//!
//! ```text
//! score = mean(lsb_plane) + stddev(lsb_plane)
//! ```
//!
//! computed over a single-channel (grayscale) reduction of the carrier.
//!
//! This is a coarse, unauthenticated heuristic. It carries **no detection
//! guarantee and no false-positive bound** — a clean image with naturally
//! noisy LSBs will score high, and an attacker who shapes the embedded bits
//! can score low. The thresholds in [`Thresholds`] are calibration policy,
//! not protocol: recalibrating them breaks nothing.

use crate::pixels::PixelBuffer;

/// Score thresholds for [`classify`]. Calibration constants, not protocol —
/// tune per deployment without any compatibility impact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Scores at or above this are "possible" embedding.
    pub possible: f64,
    /// Scores at or above this are "likely tampered".
    pub likely: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            possible: 0.5,
            likely: 0.8,
        }
    }
}

/// Coarse verdict derived from an anomaly score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Score below the `possible` threshold.
    LikelyClean,
    /// Score between the two thresholds.
    Possible,
    /// Score at or above the `likely` threshold.
    LikelyTampered,
}

/// Compute the LSB anomaly score for a carrier. Higher = more suspicious.
///
/// The carrier is reduced to a single grayscale channel first (Rec.601 luma
/// for 3+ channels, channel 0 otherwise), then the mean and population
/// standard deviation of its LSB plane are summed. Returns 0.0 for an empty
/// buffer.
pub fn lsb_anomaly_score(carrier: &PixelBuffer) -> f64 {
    let gray = grayscale(carrier);
    if gray.is_empty() {
        return 0.0;
    }

    // Bits are 0/1, so mean(b^2) == mean(b) and variance = p * (1 - p).
    let ones = gray.iter().filter(|&&v| v & 1 == 1).count();
    let p = ones as f64 / gray.len() as f64;
    let stddev = (p * (1.0 - p)).sqrt();

    p + stddev
}

/// Map a score to a verdict using the given thresholds.
pub fn classify(score: f64, thresholds: &Thresholds) -> Verdict {
    if score >= thresholds.likely {
        Verdict::LikelyTampered
    } else if score >= thresholds.possible {
        Verdict::Possible
    } else {
        Verdict::LikelyClean
    }
}

/// Reduce a carrier to one grayscale value per pixel.
///
/// For 3 or more channels the first three are treated as RGB and combined
/// with integer Rec.601 weights (the same reduction OpenCV's grayscale load
/// applies). For 1-2 channels (gray, gray+alpha) channel 0 is used directly.
fn grayscale(carrier: &PixelBuffer) -> Vec<u8> {
    let channels = carrier.channels() as usize;
    let samples = carrier.samples();

    if channels <= 1 {
        return samples.to_vec();
    }

    samples
        .chunks_exact(channels)
        .map(|px| {
            if channels >= 3 {
                let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
                ((r * 299 + g * 587 + b * 114) / 1000) as u8
            } else {
                px[0]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_buffer(samples: Vec<u8>) -> PixelBuffer {
        let n = samples.len() as u32;
        PixelBuffer::new(n, 1, 1, samples).unwrap()
    }

    #[test]
    fn flat_image_scores_zero() {
        let buf = gray_buffer(vec![0x80; 4096]);
        assert_eq!(lsb_anomaly_score(&buf), 0.0);
    }

    #[test]
    fn all_ones_lsb_plane() {
        // mean = 1.0, stddev = 0.0
        let buf = gray_buffer(vec![0x81; 4096]);
        let score = lsb_anomaly_score(&buf);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn balanced_random_plane_scores_near_one() {
        // Alternating 0/1 LSBs: mean = 0.5, stddev = 0.5.
        let samples: Vec<u8> = (0..4096).map(|i| 0x40 | (i & 1) as u8).collect();
        let score = lsb_anomaly_score(&gray_buffer(samples));
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn quarter_ones_score() {
        // p = 0.25 → score = 0.25 + sqrt(0.1875)
        let samples: Vec<u8> = (0..4000).map(|i| (i % 4 == 0) as u8).collect();
        let score = lsb_anomaly_score(&gray_buffer(samples));
        let expected = 0.25 + (0.25f64 * 0.75).sqrt();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_buffer_scores_zero() {
        let buf = PixelBuffer::new(0, 0, 1, vec![]).unwrap();
        assert_eq!(lsb_anomaly_score(&buf), 0.0);
    }

    #[test]
    fn rgb_reduction_uses_luma() {
        // Pure red pixels: luma = 255*299/1000 = 76 (even → LSB 0).
        // Pure green pixels: luma = 255*587/1000 = 149 (odd → LSB 1).
        let red = PixelBuffer::new(64, 1, 3, [255u8, 0, 0].repeat(64)).unwrap();
        let green = PixelBuffer::new(64, 1, 3, [0u8, 255, 0].repeat(64)).unwrap();
        assert_eq!(lsb_anomaly_score(&red), 0.0);
        assert!((lsb_anomaly_score(&green) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn gray_alpha_uses_first_channel() {
        // Channel 0 even everywhere, alpha odd everywhere — alpha must not
        // leak into the score.
        let buf = PixelBuffer::new(32, 1, 2, [0x10u8, 0xFF].repeat(32)).unwrap();
        assert_eq!(lsb_anomaly_score(&buf), 0.0);
    }

    #[test]
    fn default_thresholds_classify() {
        let t = Thresholds::default();
        assert_eq!(classify(0.2, &t), Verdict::LikelyClean);
        assert_eq!(classify(0.5, &t), Verdict::Possible);
        assert_eq!(classify(0.65, &t), Verdict::Possible);
        assert_eq!(classify(0.8, &t), Verdict::LikelyTampered);
        assert_eq!(classify(1.4, &t), Verdict::LikelyTampered);
    }

    #[test]
    fn custom_thresholds_respected() {
        let strict = Thresholds {
            possible: 0.1,
            likely: 0.3,
        };
        assert_eq!(classify(0.2, &strict), Verdict::Possible);
        assert_eq!(classify(0.35, &strict), Verdict::LikelyTampered);
    }
}
