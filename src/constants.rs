// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Rendering is done in double
precision before converting to the precision of the target image.
 */

pub use std::f64::consts::{FRAC_PI_2, LN_2, PI, SQRT_2, TAU};

/// The ratio between a Gaussian's full width at half maximum and its standard
/// deviation (2 sqrt(2 ln 2)).
pub const FWHM_TO_SIGMA: f64 = 2.354_820_045_030_949_3;

/// Gaussians with minor axes smaller than this many pixels are rendered as
/// a line integral along their major axis rather than with a 2D quadrature.
pub const NARROW_GAUSSIAN_THRESHOLD: f64 = 1e-3;

/// The largest sub-pixel step used when integrating a Gaussian over a pixel
/// with Simpson's rule.
pub const MAX_QUADRATURE_STEP: f64 = 1.0 / 32.0;

/// The quadrature step is chosen as a power-of-two fraction of the smallest
/// Gaussian sigma divided by this value.
pub const QUADRATURE_SIGMA_DIVISOR: f64 = 5.0;

/// Position angles within this many radians of a multiple of pi/2 are
/// considered to be exactly vertical or horizontal.
pub const POSITION_ANGLE_TOLERANCE: f64 = 1e-6;

/// The spectral curvature used in the second Taylor term. No curvature model
/// is available, so this is always zero.
pub const TAYLOR_CURVATURE: f64 = 0.0;
