// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A collection of coordinates, each attached to one or more image pixel axes.

use super::{CoordinateError, DirectionCoordinate, SpectralCoordinate, StokesType};

#[derive(Debug, Clone, PartialEq)]
pub enum Coordinate {
    Direction(DirectionCoordinate),
    Spectral(SpectralCoordinate),
    /// The polarisation of each plane of a Stokes axis.
    Stokes(Vec<StokesType>),
}

impl Coordinate {
    /// How many pixel axes does this coordinate describe?
    pub fn num_pixel_axes(&self) -> usize {
        match self {
            Coordinate::Direction(_) => 2,
            Coordinate::Spectral(_) | Coordinate::Stokes(_) => 1,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Coordinate::Direction(_) => "direction",
            Coordinate::Spectral(_) => "spectral",
            Coordinate::Stokes(_) => "Stokes",
        }
    }
}

/// The coordinates of an image. Each pixel axis of each coordinate is either
/// attached to an image axis or has been removed from the image (e.g. a
/// direction coordinate with only one of its axes present).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateSystem {
    coordinates: Vec<Coordinate>,
    pixel_axes: Vec<Vec<Option<usize>>>,
}

impl CoordinateSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a coordinate, attaching its pixel axes to the next unused image
    /// axes.
    pub fn add_coordinate(&mut self, coord: Coordinate) {
        let first = self
            .pixel_axes
            .iter()
            .flatten()
            .flatten()
            .max()
            .map_or(0, |&a| a + 1);
        let axes = (first..first + coord.num_pixel_axes()).map(Some).collect();
        self.coordinates.push(coord);
        self.pixel_axes.push(axes);
    }

    /// Add a coordinate, explicitly specifying the image axis of each of its
    /// pixel axes. `None` means that the pixel axis is not in the image.
    pub fn add_coordinate_with_axes(
        &mut self,
        coord: Coordinate,
        axes: Vec<Option<usize>>,
    ) -> Result<(), CoordinateError> {
        if axes.len() != coord.num_pixel_axes() {
            return Err(CoordinateError::WrongNumberOfAxes {
                kind: coord.kind(),
                expected: coord.num_pixel_axes(),
                got: axes.len(),
            });
        }
        for &axis in axes.iter().flatten() {
            if self.pixel_axes.iter().flatten().any(|&a| a == Some(axis)) {
                return Err(CoordinateError::AxisAlreadyUsed(axis));
            }
        }
        self.coordinates.push(coord);
        self.pixel_axes.push(axes);
        Ok(())
    }

    /// The number of image axes described by this coordinate system.
    pub fn num_pixel_axes(&self) -> usize {
        self.pixel_axes.iter().flatten().flatten().count()
    }

    /// Iterate over the coordinates and the image axes attached to them.
    pub fn iter(&self) -> impl Iterator<Item = (&Coordinate, &[Option<usize>])> {
        self.coordinates
            .iter()
            .zip(self.pixel_axes.iter().map(|a| a.as_slice()))
    }

    /// The first direction coordinate and the image axes that it is attached
    /// to (removed axes are not included).
    pub fn direction(&self) -> Option<(&DirectionCoordinate, Vec<usize>)> {
        self.iter().find_map(|(coord, axes)| match coord {
            Coordinate::Direction(d) => Some((d, axes.iter().flatten().copied().collect())),
            _ => None,
        })
    }

    /// The first spectral coordinate attached to an image axis.
    pub fn spectral(&self) -> Option<(&SpectralCoordinate, usize)> {
        self.iter().find_map(|(coord, axes)| match (coord, axes) {
            (Coordinate::Spectral(s), [Some(axis)]) => Some((s, *axis)),
            _ => None,
        })
    }

    /// The first Stokes coordinate attached to an image axis.
    pub fn stokes(&self) -> Option<(&[StokesType], usize)> {
        self.iter().find_map(|(coord, axes)| match (coord, axes) {
            (Coordinate::Stokes(s), [Some(axis)]) => Some((s.as_slice(), *axis)),
            _ => None,
        })
    }
}
