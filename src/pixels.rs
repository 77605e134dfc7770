// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixelveil

//! Raster pixel buffer — the carrier type for embedding and analysis.
//!
//! [`PixelBuffer`] is a flat, sample-major sequence of uint8 values with
//! known dimensions and channel count. It is deliberately format-agnostic:
//! decoding PNG/BMP/TIFF bytes into samples (and re-encoding the stego
//! result losslessly) is the caller's job. The codec and the steganalysis
//! heuristic only ever see the decoded sample sequence.
//!
//! Sample order is row-major, channels interleaved per pixel — the order
//! every mainstream decoder produces. The embedding format depends on this
//! order being stable between embed and extract.

use crate::stego::error::StegoError;

/// A decoded raster image: flat uint8 samples plus shape information.
///
/// Owned exclusively by whichever operation currently holds it; `embed`
/// returns a new buffer rather than mutating its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer, validating that the sample count matches the shape.
    ///
    /// # Errors
    /// [`StegoError::ShapeMismatch`] if `samples.len()` is not
    /// `width * height * channels`.
    pub fn new(
        width: u32,
        height: u32,
        channels: u8,
        samples: Vec<u8>,
    ) -> Result<Self, StegoError> {
        let expected = width as usize * height as usize * channels as usize;
        if samples.len() != expected {
            return Err(StegoError::ShapeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of interleaved channels per pixel (1 = grayscale, 3 = RGB, ...).
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Flat sample data, row-major with interleaved channels.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Total number of uint8 samples (`width * height * channels`).
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Consume the buffer, returning the raw samples for re-encoding.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Internal: mutable access for the codec's LSB writes.
    pub(crate) fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_shape_accepted() {
        let buf = PixelBuffer::new(4, 2, 3, vec![0u8; 24]).unwrap();
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.channels(), 3);
        assert_eq!(buf.sample_count(), 24);
    }

    #[test]
    fn shape_mismatch_rejected() {
        match PixelBuffer::new(4, 2, 3, vec![0u8; 23]) {
            Err(StegoError::ShapeMismatch { expected, actual }) => {
                assert_eq!(expected, 24);
                assert_eq!(actual, 23);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn zero_sized_image_is_valid() {
        let buf = PixelBuffer::new(0, 0, 3, vec![]).unwrap();
        assert_eq!(buf.sample_count(), 0);
    }

    #[test]
    fn into_samples_returns_data() {
        let data = vec![1u8, 2, 3, 4, 5, 6];
        let buf = PixelBuffer::new(2, 1, 3, data.clone()).unwrap();
        assert_eq!(buf.into_samples(), data);
    }
}
