// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all imaging-related errors.

use thiserror::Error;

use crate::coord::{CoordinateError, StokesType};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImagerError {
    #[error("Only Taylor terms 0, 1 and 2 are supported, but {0} was requested")]
    UnsupportedTaylorTerm(u32),

    #[error("The image must have exactly one direction coordinate, but it has {0}")]
    DirectionCoordinateCount(usize),

    #[error("The direction coordinate must be attached to 2 image axes, but it is attached to {0}")]
    DirectionAxisCount(usize),

    #[error("The image has no spectral axis")]
    MissingSpectralAxis,

    #[error("Polarisation {0} is not supported; only Stokes I, Q, U and V planes can be imaged")]
    UnsupportedPolarisation(StokesType),

    #[error("The Stokes coordinate describes {planes} planes, but the polarisation axis has length {axis_len}")]
    StokesAxisLength { planes: usize, axis_len: usize },

    #[error("The image has {ndim} axes, but its direction, spectral and polarisation coordinates describe {num_roles}")]
    UncoveredAxes { ndim: usize, num_roles: usize },

    #[error("Couldn't determine the frequency of channel {chan}: {source}")]
    ChannelFrequency {
        chan: usize,
        source: CoordinateError,
    },

    #[error("The {0} spectral model is not supported")]
    UnsupportedSpectralModel(&'static str),

    #[error("Gaussian components can only be imaged onto pixels of equal size, but the pixel sizes are {0}° and {1}°")]
    UnequalPixelScale(f64, f64),

    #[error("{0} components are not supported")]
    UnsupportedShape(&'static str),

    #[error("Gaussian component has invalid axes (major {major}\", minor {minor}\")")]
    InvalidGaussian { major: f64, minor: f64 },

    #[error("{0}")]
    Coordinate(#[from] CoordinateError),
}
