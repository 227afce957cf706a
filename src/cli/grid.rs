// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Describe an image grid with a TOML file.
//!
//! The image axes are always (RA, Dec, [Stokes], frequency).

use std::{path::Path, str::FromStr};

use marlu::RADec;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    coord::{Coordinate, CoordinateSystem, DirectionCoordinate, SpectralCoordinate, StokesType},
    image::{ArrayImage, ImageElement},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(super) enum Precision {
    Single,
    #[default]
    Double,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct GridConfig {
    /// The precision of the image pixels.
    #[serde(default)]
    pub(super) precision: Precision,

    /// The Stokes parameters of each polarisation plane. Without these, the
    /// image has no polarisation axis.
    #[serde(default)]
    pub(super) stokes: Option<Vec<String>>,

    pub(super) direction: DirectionConfig,

    pub(super) spectral: SpectralConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct DirectionConfig {
    /// Right ascension of the image's tangent point \[degrees\]
    pub(super) ra: f64,
    /// Declination of the image's tangent point \[degrees\]
    pub(super) dec: f64,
    /// The size of a pixel on both axes \[degrees\]
    pub(super) pixel_size: f64,
    pub(super) num_pixels: [usize; 2],
    /// The (zero-indexed) pixel of the tangent point. Default: the centre
    /// pixel.
    #[serde(default)]
    pub(super) reference_pixel: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct SpectralConfig {
    /// The frequency of the first channel \[Hz\]
    pub(super) freq: f64,
    /// \[Hz\]
    pub(super) freq_res: f64,
    pub(super) num_channels: usize,
}

impl FromStr for GridConfig {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl GridConfig {
    pub(super) fn read<P: AsRef<Path>>(file: P) -> Result<GridConfig, GridError> {
        std::fs::read_to_string(file)?.parse()
    }

    /// The Stokes types of the polarisation planes, if there's a polarisation
    /// axis.
    pub(super) fn stokes_types(&self) -> Result<Option<Vec<StokesType>>, GridError> {
        match &self.stokes {
            None => Ok(None),
            Some(stokes) if stokes.is_empty() => Err(GridError::EmptyAxis),
            Some(stokes) => stokes
                .iter()
                .map(|s| StokesType::from_str(s).map_err(|_| GridError::InvalidStokes(s.clone())))
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
        }
    }

    /// The shape of the described image.
    pub(super) fn shape(&self) -> Result<Vec<usize>, GridError> {
        let mut shape = self.direction.num_pixels.to_vec();
        if let Some(stokes) = self.stokes_types()? {
            shape.push(stokes.len());
        }
        shape.push(self.spectral.num_channels);
        Ok(shape)
    }

    pub(super) fn coordinate_system(&self) -> Result<CoordinateSystem, GridError> {
        let DirectionConfig {
            ra,
            dec,
            pixel_size,
            num_pixels,
            reference_pixel,
        } = self.direction;
        if num_pixels.contains(&0) || self.spectral.num_channels == 0 {
            return Err(GridError::EmptyAxis);
        }
        if !(pixel_size.is_finite() && pixel_size > 0.0) {
            return Err(GridError::InvalidPixelSize(pixel_size));
        }
        if !(self.spectral.freq.is_finite() && self.spectral.freq > 0.0) {
            return Err(GridError::InvalidFrequency(self.spectral.freq));
        }

        let reference_pixel = reference_pixel
            .unwrap_or_else(|| [(num_pixels[0] / 2) as f64, (num_pixels[1] / 2) as f64]);
        let pixel_size = pixel_size.to_radians();
        let mut coords = CoordinateSystem::new();
        coords.add_coordinate(Coordinate::Direction(DirectionCoordinate::new(
            RADec::from_degrees(ra, dec),
            reference_pixel,
            // RA increases to the left.
            [-pixel_size, pixel_size],
        )));
        if let Some(stokes) = self.stokes_types()? {
            coords.add_coordinate(Coordinate::Stokes(stokes));
        }
        coords.add_coordinate(Coordinate::Spectral(SpectralCoordinate::Linear {
            reference_freq: self.spectral.freq,
            reference_pixel: 0.0,
            increment: self.spectral.freq_res,
        }));
        Ok(coords)
    }

    /// Make an empty image described by this grid.
    pub(super) fn make_image<T: ImageElement>(&self) -> Result<ArrayImage<T>, GridError> {
        let coords = self.coordinate_system()?;
        Ok(ArrayImage::zeros(&self.shape()?, coords))
    }
}

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Couldn't parse the grid file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("'{0}' is not a recognised polarisation")]
    InvalidStokes(String),

    #[error("Every image axis must have at least one pixel")]
    EmptyAxis,

    #[error("The pixel size must be a positive number of degrees, but got {0}")]
    InvalidPixelSize(f64),

    #[error("The first channel frequency must be a positive number of Hz, but got {0}")]
    InvalidFrequency(f64),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}
