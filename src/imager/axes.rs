// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Work out which image axes hold which quantities.

use super::ImagerError;
use crate::coord::{Coordinate, CoordinateSystem, DirectionCoordinate, StokesParameter};

/// The image axis of each quantity that components are rendered along. The
/// direction axes are mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRoles {
    /// The image axis of the first direction pixel axis (right ascension).
    lon: usize,
    /// The image axis of the second direction pixel axis (declination).
    lat: usize,
    spectral: Option<usize>,
    stokes: Option<usize>,
}

impl AxisRoles {
    /// Find the roles of an image's axes from its coordinate system. Every
    /// image axis must have a role.
    pub fn new(coords: &CoordinateSystem, shape: &[usize]) -> Result<AxisRoles, ImagerError> {
        let num_directions = coords
            .iter()
            .filter(|(coord, _)| matches!(coord, Coordinate::Direction(_)))
            .count();
        let (lon, lat) = match coords.direction() {
            Some((_, axes)) if num_directions == 1 => match axes.as_slice() {
                &[lon, lat] => (lon, lat),
                axes => return Err(ImagerError::DirectionAxisCount(axes.len())),
            },
            _ => return Err(ImagerError::DirectionCoordinateCount(num_directions)),
        };

        let roles = AxisRoles {
            lon,
            lat,
            spectral: coords.spectral().map(|(_, axis)| axis),
            stokes: coords.stokes().map(|(_, axis)| axis),
        };
        let num_roles = roles.num_axes();
        let in_range = [Some(lon), Some(lat), roles.spectral, roles.stokes]
            .into_iter()
            .flatten()
            .all(|axis| axis < shape.len());
        if shape.len() != num_roles || !in_range {
            return Err(ImagerError::UncoveredAxes {
                ndim: shape.len(),
                num_roles,
            });
        }

        Ok(roles)
    }

    pub fn lon(&self) -> usize {
        self.lon
    }

    pub fn lat(&self) -> usize {
        self.lat
    }

    pub fn spectral(&self) -> Option<usize> {
        self.spectral
    }

    pub fn stokes(&self) -> Option<usize> {
        self.stokes
    }

    /// The number of image axes with a role.
    pub fn num_axes(&self) -> usize {
        2 + usize::from(self.spectral.is_some()) + usize::from(self.stokes.is_some())
    }

    /// Build an image position from per-role indices. Indices for absent
    /// roles are ignored.
    pub fn position(&self, lon: usize, lat: usize, chan: usize, pol: usize) -> Vec<usize> {
        let mut pos = vec![0; self.num_axes()];
        pos[self.lon] = lon;
        pos[self.lat] = lat;
        if let Some(axis) = self.spectral {
            pos[axis] = chan;
        }
        if let Some(axis) = self.stokes {
            pos[axis] = pol;
        }
        pos
    }
}

/// Everything about an image needed to render components onto it, derived
/// once per imaging call.
#[derive(Debug, Clone)]
pub(super) struct ImageAxes {
    pub(super) roles: AxisRoles,
    pub(super) direction: DirectionCoordinate,
    /// The frequency of each channel \[Hz\].
    pub(super) freqs: Vec<f64>,
    /// The Stokes parameter of each polarisation plane.
    pub(super) pols: Vec<StokesParameter>,
    pub(super) lon_len: usize,
    pub(super) lat_len: usize,
}

impl ImageAxes {
    pub(super) fn new(coords: &CoordinateSystem, shape: &[usize]) -> Result<ImageAxes, ImagerError> {
        let roles = AxisRoles::new(coords, shape)?;
        let (direction, _) = coords
            .direction()
            .ok_or(ImagerError::DirectionCoordinateCount(0))?;

        let pols = match coords.stokes() {
            Some((types, axis)) => {
                let pols = types
                    .iter()
                    .map(|&t| StokesParameter::try_from(t).map_err(ImagerError::UnsupportedPolarisation))
                    .collect::<Result<Vec<_>, _>>()?;
                if pols.len() != shape[axis] {
                    return Err(ImagerError::StokesAxisLength {
                        planes: pols.len(),
                        axis_len: shape[axis],
                    });
                }
                pols
            }
            // Without a polarisation axis, only Stokes I is imaged.
            None => vec![StokesParameter::I],
        };

        let (spectral, spectral_axis) = coords.spectral().ok_or(ImagerError::MissingSpectralAxis)?;
        let freqs = (0..shape[spectral_axis])
            .map(|chan| {
                spectral
                    .to_world(chan as f64)
                    .map_err(|source| ImagerError::ChannelFrequency { chan, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ImageAxes {
            roles,
            direction: *direction,
            freqs,
            pols,
            lon_len: shape[roles.lon],
            lat_len: shape[roles.lat],
        })
    }

    /// Components are not rendered further than this many pixels from their
    /// centres.
    pub(super) fn spatial_limit(&self) -> usize {
        self.lon_len.max(self.lat_len)
    }

    /// Is this (fractional) pixel position inside the image?
    pub(super) fn contains(&self, pixel: [f64; 2]) -> bool {
        let [lon, lat] = pixel;
        lon >= 0.0
            && lon <= self.lon_len as f64 - 1.0
            && lat >= 0.0
            && lat <= self.lat_len as f64 - 1.0
    }
}
