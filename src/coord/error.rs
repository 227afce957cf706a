// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Direction (RA {ra}°, Dec {dec}°) is on the far side of the projection and has no pixel coordinates")]
    FarSide { ra: f64, dec: f64 },

    #[error("Pixel ({0}, {1}) is outside of the projection")]
    OutsideProjection(f64, f64),

    #[error("Spectral pixel {pixel} converts to an invalid frequency ({freq} Hz)")]
    InvalidFrequency { pixel: f64, freq: f64 },

    #[error("Spectral pixel {pixel} is not a channel of the frequency table (which has {num_channels} channels)")]
    NotInFrequencyTable { pixel: f64, num_channels: usize },

    #[error("A {kind} coordinate has {expected} pixel axes, but {got} image axes were supplied")]
    WrongNumberOfAxes {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Image pixel axis {0} is already used by another coordinate")]
    AxisAlreadyUsed(usize),
}
