// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integrate elliptical Gaussians over image pixels.
//!
//! Pixel (x, y) covers [x - 0.5, x + 0.5) × [y - 0.5, y + 0.5). With a
//! position angle of zero, the major axis is parallel to the y axis; the
//! position angle rotates it towards -x.

use std::ops::RangeInclusive;

use ndarray::{Array2, Axis};
use rayon::prelude::*;

use crate::constants::*;

/// The shape of a Gaussian in pixel coordinates. All integrals are for a
/// Gaussian with unit total flux unless a flux is supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GaussianFootprint {
    /// The (fractional) pixel position of the centre.
    pub(crate) centre: [f64; 2],
    /// FWHM of the major axis \[pixels\]
    pub(crate) major: f64,
    /// FWHM of the minor axis \[pixels\]
    pub(crate) minor: f64,
    /// \[radians\]
    pub(crate) pa: f64,
}

impl GaussianFootprint {
    /// The axes may be supplied in either order; the larger is used as the
    /// major axis. Both must be finite and non-negative.
    pub(crate) fn new(centre: [f64; 2], axis_a: f64, axis_b: f64, pa: f64) -> GaussianFootprint {
        debug_assert!(
            axis_a.is_finite() && axis_b.is_finite() && axis_a >= 0.0 && axis_b >= 0.0,
            "invalid Gaussian axes {axis_a} and {axis_b}"
        );
        GaussianFootprint {
            centre,
            major: axis_a.max(axis_b),
            minor: axis_a.min(axis_b),
            pa,
        }
    }

    /// The peak value of a Gaussian with this shape and the given total flux.
    pub(crate) fn height(&self, flux: f64) -> f64 {
        flux * 4.0 * LN_2 / (PI * self.major * self.minor)
    }

    /// The value of the Gaussian (with the given total flux) at a point.
    pub(crate) fn value_at(&self, flux: f64, x: f64, y: f64) -> f64 {
        let (s_pa, c_pa) = self.pa.sin_cos();
        let dx = x - self.centre[0];
        let dy = y - self.centre[1];
        let along_major = -dx * s_pa + dy * c_pa;
        let along_minor = dx * c_pa + dy * s_pa;
        let exponent = -4.0
            * LN_2
            * (along_major * along_major / (self.major * self.major)
                + along_minor * along_minor / (self.minor * self.minor));
        self.height(flux) * exponent.exp()
    }

    /// The value of the Gaussian at a distance along its major axis.
    fn major_axis_profile(&self, flux: f64, r: f64) -> f64 {
        let shape = (-4.0 * LN_2 * r * r / (self.major * self.major)).exp();
        // A zero-width minor axis has an infinite height.
        if shape == 0.0 {
            0.0
        } else {
            self.height(flux) * shape
        }
    }

    /// Walk out from the centre along the major axis until the Gaussian drops
    /// below `epsilon` or the spatial limit is passed. The returned radius
    /// \[pixels\] is the half-width of the window that needs rendering.
    pub(crate) fn find_cutoff(&self, flux: f64, spatial_limit: usize, epsilon: f64) -> usize {
        let mut cutoff = 0;
        while cutoff <= spatial_limit
            && self.major_axis_profile(flux, cutoff as f64).abs() >= epsilon
        {
            cutoff += 1;
        }
        cutoff
    }

    /// The fraction of the Gaussian's flux inside a pixel.
    pub(crate) fn pixel_flux(&self, x: usize, y: usize) -> f64 {
        let (x, y) = (x as f64, y as f64);
        if self.minor < NARROW_GAUSSIAN_THRESHOLD {
            self.line_integral(x, y)
        } else {
            self.simpson_integral(x, y)
        }
    }

    /// Treat the Gaussian as a 1D profile along a line through the centre
    /// parallel to the major axis, and integrate the part of the line inside
    /// the pixel.
    ///
    /// The line is clipped against the pixel by its entry and exit distances
    /// from the centre, so lines through pixel corners are handled the same
    /// as any other. A line lying exactly on a pixel edge belongs to the pixel
    /// above or to the right of it.
    fn line_integral(&self, x: f64, y: f64) -> f64 {
        let [x0, y0] = self.centre;
        let (s_pa, c_pa) = self.pa.sin_cos();
        // Unit vector along the major axis.
        let direction = [-s_pa, c_pa];

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        for ((centre, dir), pixel) in [x0, y0].into_iter().zip(direction).zip([x, y]) {
            let (lo, hi) = (pixel - 0.5, pixel + 0.5);
            if dir.abs() < POSITION_ANGLE_TOLERANCE {
                // Parallel to this pair of pixel edges.
                if !(lo..hi).contains(&centre) {
                    return 0.0;
                }
            } else {
                let t0 = (lo - centre) / dir;
                let t1 = (hi - centre) / dir;
                t_min = t_min.max(t0.min(t1));
                t_max = t_max.min(t0.max(t1));
            }
        }
        if t_max <= t_min {
            return 0.0;
        }

        // Distances along the major axis in units of sigma.
        let sigma = self.major / FWHM_TO_SIGMA;
        let (z_min, z_max) = (t_min / sigma, t_max / sigma);
        0.5 * (libm::erf(z_max / SQRT_2) - libm::erf(z_min / SQRT_2))
    }

    /// Composite Simpson's rule over the pixel in both dimensions.
    fn simpson_integral(&self, x: f64, y: f64) -> f64 {
        let sigma_min = self.major.min(self.minor) / FWHM_TO_SIGMA;
        let (step, num_steps) = quadrature_step(sigma_min);
        let weight = |k: usize| -> f64 {
            if k == 0 || k == num_steps {
                1.0
            } else if k % 2 == 1 {
                4.0
            } else {
                2.0
            }
        };

        let mut sum = 0.0;
        for i in 0..=num_steps {
            let x_pos = x - 0.5 + i as f64 * step;
            let x_weight = weight(i);
            for j in 0..=num_steps {
                let y_pos = y - 0.5 + j as f64 * step;
                sum += self.value_at(1.0, x_pos, y_pos) * x_weight * weight(j);
            }
        }
        sum * step * step / 9.0
    }

    /// Integrate the Gaussian over every pixel of a window. The returned array
    /// is indexed relative to the start of each range.
    pub(crate) fn integrate_window(
        &self,
        xs: RangeInclusive<usize>,
        ys: RangeInclusive<usize>,
    ) -> Array2<f64> {
        let (x_start, y_start) = (*xs.start(), *ys.start());
        let mut fluxes = Array2::zeros((xs.count(), ys.count()));
        fluxes
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(i, mut column)| {
                column
                    .iter_mut()
                    .enumerate()
                    .for_each(|(j, flux)| *flux = self.pixel_flux(x_start + i, y_start + j));
            });
        fluxes
    }
}

/// The sub-pixel step and number of steps used to integrate a Gaussian over a
/// pixel. The step is the largest power of two no bigger than a fifth of the
/// smallest sigma, capped at 1/32 of a pixel.
pub(crate) fn quadrature_step(sigma_min: f64) -> (f64, usize) {
    let step = (sigma_min / QUADRATURE_SIGMA_DIVISOR)
        .log2()
        .floor()
        .exp2()
        .min(MAX_QUADRATURE_STEP);
    (step, (1.0 / step).round() as usize)
}

/// The inclusive range of pixels within `cutoff` of a (truncated) centre,
/// clipped to an axis of length `len`. The centre must be inside the axis.
pub(crate) fn window(centre: f64, cutoff: usize, len: usize) -> RangeInclusive<usize> {
    let centre = centre as usize;
    centre.saturating_sub(cutoff)..=(centre + cutoff).min(len.saturating_sub(1))
}
