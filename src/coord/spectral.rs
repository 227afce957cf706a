// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mapping between spectral pixels (channels) and frequencies.

use super::CoordinateError;

#[derive(Debug, Clone, PartialEq)]
pub enum SpectralCoordinate {
    /// Frequencies change linearly with pixel.
    Linear {
        /// \[Hz\]
        reference_freq: f64,
        reference_pixel: f64,
        /// \[Hz\]
        increment: f64,
    },

    /// An explicit frequency \[Hz\] for each channel.
    Tabular(Vec<f64>),
}

impl SpectralCoordinate {
    /// Get the frequency \[Hz\] of a spectral pixel.
    pub fn to_world(&self, pixel: f64) -> Result<f64, CoordinateError> {
        let freq = match self {
            SpectralCoordinate::Linear {
                reference_freq,
                reference_pixel,
                increment,
            } => reference_freq + (pixel - reference_pixel) * increment,

            SpectralCoordinate::Tabular(freqs) => {
                let index = pixel as usize;
                if pixel < 0.0 || pixel.fract() != 0.0 || index >= freqs.len() {
                    return Err(CoordinateError::NotInFrequencyTable {
                        pixel,
                        num_channels: freqs.len(),
                    });
                }
                freqs[index]
            }
        };

        if !freq.is_finite() || freq <= 0.0 {
            return Err(CoordinateError::InvalidFrequency { pixel, freq });
        }
        Ok(freq)
    }
}
