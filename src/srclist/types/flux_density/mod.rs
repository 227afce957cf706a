// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flux density structures.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::coord::StokesParameter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
/// At a frequency, four flux densities for each Stokes parameter.
// When serialising/deserialising, ignore Stokes Q U V if they are zero.
pub struct FluxDensity {
    /// The frequency that these flux densities apply to \[Hz\]
    pub freq: f64,

    /// The flux density of Stokes I \[Jy\]
    pub i: f64,

    /// The flux density of Stokes Q \[Jy\]
    #[serde(default)]
    #[serde(skip_serializing_if = "is_zero")]
    pub q: f64,

    /// The flux density of Stokes U \[Jy\]
    #[serde(default)]
    #[serde(skip_serializing_if = "is_zero")]
    pub u: f64,

    /// The flux density of Stokes V \[Jy\]
    #[serde(default)]
    #[serde(skip_serializing_if = "is_zero")]
    pub v: f64,
}

impl FluxDensity {
    /// Get the flux density \[Jy\] of a single Stokes parameter.
    pub fn stokes(&self, pol: StokesParameter) -> f64 {
        match pol {
            StokesParameter::I => self.i,
            StokesParameter::Q => self.q,
            StokesParameter::U => self.u,
            StokesParameter::V => self.v,
        }
    }

    /// Do any of the Stokes flux densities contain NaNs?
    pub(crate) fn has_nans(&self) -> bool {
        self.i.is_nan() || self.q.is_nan() || self.u.is_nan() || self.v.is_nan()
    }
}

/// This is only used for serialisation
// https://stackoverflow.com/questions/53900612/how-do-i-avoid-generating-json-when-serializing-a-value-that-is-null-or-a-defaul
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(num: &f64) -> bool {
    num.abs() < f64::EPSILON
}

impl std::ops::Mul<f64> for FluxDensity {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        FluxDensity {
            freq: self.freq,
            i: self.i * rhs,
            q: self.q * rhs,
            u: self.u * rhs,
            v: self.v * rhs,
        }
    }
}

/// The spectral model of a component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluxDensityType {
    /// The same flux densities at all frequencies.
    Constant {
        /// Flux density (the frequency is only informative)
        fd: FluxDensity,
    },

    /// $S_\nu = a \nu^{\alpha}$
    PowerLaw {
        /// Spectral index (alpha)
        si: f64,
        /// Flux density (a)
        fd: FluxDensity,
    },

    /// Similar to a power law. See Callingham et al. 2017, section 4.1.
    ///
    /// S_\nu = a \nu^{\alpha} e^{q(\ln{\nu})^2}
    ///
    /// These can be read from source lists, but the curvature can't be
    /// expressed by Taylor-term images, so they are not rendered.
    CurvedPowerLaw {
        /// Spectral index (alpha)
        si: f64,
        /// Flux density (a)
        fd: FluxDensity,
        /// Spectral curvature (q)
        q: f64,
    },
}

impl FluxDensityType {
    /// The flux densities at the reference frequency.
    pub fn reference(&self) -> &FluxDensity {
        match self {
            FluxDensityType::Constant { fd }
            | FluxDensityType::PowerLaw { fd, .. }
            | FluxDensityType::CurvedPowerLaw { fd, .. } => fd,
        }
    }

    /// The spectral index of this spectral model, if it has one.
    pub fn spectral_index(&self) -> Option<f64> {
        match self {
            FluxDensityType::Constant { .. } => None,
            FluxDensityType::PowerLaw { si, .. } | FluxDensityType::CurvedPowerLaw { si, .. } => {
                Some(*si)
            }
        }
    }
}

/// Given a spectral index, determine the flux-density ratio of two frequencies.
pub(crate) fn calc_flux_ratio(desired_freq_hz: f64, cat_freq_hz: f64, spec_index: f64) -> f64 {
    (desired_freq_hz / cat_freq_hz).powf(spec_index)
}

#[cfg(test)]
impl approx::AbsDiffEq for FluxDensity {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.freq, &other.freq, epsilon)
            && f64::abs_diff_eq(&self.i, &other.i, epsilon)
            && f64::abs_diff_eq(&self.q, &other.q, epsilon)
            && f64::abs_diff_eq(&self.u, &other.u, epsilon)
            && f64::abs_diff_eq(&self.v, &other.v, epsilon)
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for FluxDensityType {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self, other) {
            (FluxDensityType::Constant { fd }, FluxDensityType::Constant { fd: fd2 }) => {
                fd.abs_diff_eq(fd2, epsilon)
            }

            (
                FluxDensityType::PowerLaw { si, fd },
                FluxDensityType::PowerLaw { si: si2, fd: fd2 },
            ) => si.abs_diff_eq(si2, epsilon) && fd.abs_diff_eq(fd2, epsilon),

            (
                FluxDensityType::CurvedPowerLaw { si, fd, q },
                FluxDensityType::CurvedPowerLaw {
                    si: si2,
                    fd: fd2,
                    q: q2,
                },
            ) => {
                si.abs_diff_eq(si2, epsilon)
                    && fd.abs_diff_eq(fd2, epsilon)
                    && q.abs_diff_eq(q2, epsilon)
            }

            _ => false,
        }
    }
}
