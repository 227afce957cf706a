// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Evaluate component flux densities at image channels.

use super::ImagerError;
use crate::{
    constants::TAYLOR_CURVATURE,
    srclist::{calc_flux_ratio, FluxDensity, FluxDensityType, SourceComponent},
};

/// A term of the Taylor expansion of a wideband image about its reference
/// frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaylorTerm {
    /// I(v0)
    Zeroth,
    /// I(v0) * alpha
    First,
    /// I(v0) * (0.5 * alpha * (alpha - 1) + beta)
    Second,
}

impl TaylorTerm {
    /// The factor that flux densities are multiplied by for this term, given a
    /// spectral index.
    pub fn factor(self, alpha: f64) -> f64 {
        match self {
            TaylorTerm::Zeroth => 1.0,
            TaylorTerm::First => alpha,
            TaylorTerm::Second => 0.5 * alpha * (alpha - 1.0) + TAYLOR_CURVATURE,
        }
    }
}

impl TryFrom<u32> for TaylorTerm {
    type Error = ImagerError;

    fn try_from(term: u32) -> Result<Self, Self::Error> {
        match term {
            0 => Ok(TaylorTerm::Zeroth),
            1 => Ok(TaylorTerm::First),
            2 => Ok(TaylorTerm::Second),
            _ => Err(ImagerError::UnsupportedTaylorTerm(term)),
        }
    }
}

/// Get the flux densities of a component at a frequency \[Hz\], transformed
/// for a Taylor term. Components without a spectral index have an alpha of 0.
pub fn scaled_flux(
    comp: &SourceComponent,
    freq_hz: f64,
    term: TaylorTerm,
) -> Result<FluxDensity, ImagerError> {
    if let FluxDensityType::CurvedPowerLaw { .. } = comp.flux_type {
        return Err(ImagerError::UnsupportedSpectralModel("curved power law"));
    }

    let reference = comp.flux_type.reference();
    let alpha = comp.flux_type.spectral_index().unwrap_or(0.0);
    let mut fd = *reference * calc_flux_ratio(freq_hz, reference.freq, alpha);
    fd.freq = freq_hz;

    Ok(fd * term.factor(alpha))
}
