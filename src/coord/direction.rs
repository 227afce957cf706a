// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Orthographic (SIN) projection between sky directions and pixels.

use std::f64::consts::TAU;

use marlu::{RADec, LMN};

use super::CoordinateError;

/// A pair of image axes describing sky position. The first pixel axis follows
/// the direction cosine l (right ascension), the second follows m
/// (declination).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionCoordinate {
    /// The direction at the tangent point of the projection.
    reference: RADec,
    /// The (zero-indexed) pixel coordinates of the tangent point.
    reference_pixel: [f64; 2],
    /// The size of a pixel along each axis \[radians\]. The first axis is
    /// conventionally negative (right ascension increases to the left).
    increment: [f64; 2],
}

impl DirectionCoordinate {
    pub fn new(reference: RADec, reference_pixel: [f64; 2], increment: [f64; 2]) -> Self {
        Self {
            reference,
            reference_pixel,
            increment,
        }
    }

    pub fn reference(&self) -> RADec {
        self.reference
    }

    pub fn reference_pixel(&self) -> [f64; 2] {
        self.reference_pixel
    }

    /// Pixel sizes \[radians\].
    pub fn increment(&self) -> [f64; 2] {
        self.increment
    }

    /// Convert a sky direction into (fractional) pixel coordinates. Directions
    /// more than 90° from the tangent point can't be projected.
    pub fn to_pixel(&self, radec: RADec) -> Result<[f64; 2], CoordinateError> {
        let LMN { l, m, n } = radec.to_lmn(self.reference);
        if n < 0.0 {
            return Err(CoordinateError::FarSide {
                ra: radec.ra.to_degrees(),
                dec: radec.dec.to_degrees(),
            });
        }
        Ok([
            self.reference_pixel[0] + l / self.increment[0],
            self.reference_pixel[1] + m / self.increment[1],
        ])
    }

    /// Convert (fractional) pixel coordinates into a sky direction.
    pub fn to_world(&self, pixel: [f64; 2]) -> Result<RADec, CoordinateError> {
        let l = (pixel[0] - self.reference_pixel[0]) * self.increment[0];
        let m = (pixel[1] - self.reference_pixel[1]) * self.increment[1];
        let r2 = l * l + m * m;
        if r2 > 1.0 {
            return Err(CoordinateError::OutsideProjection(pixel[0], pixel[1]));
        }
        let n = (1.0 - r2).sqrt();

        let (s_dec0, c_dec0) = self.reference.dec.sin_cos();
        let dec = (m * c_dec0 + n * s_dec0).asin();
        let ra = self.reference.ra + l.atan2(n * c_dec0 - m * s_dec0);
        Ok(RADec::from_radians(ra.rem_euclid(TAU), dec))
    }
}
