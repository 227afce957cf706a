// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Coordinate systems of images: the mapping between image pixels and world
//! quantities (sky direction, frequency, polarisation).

mod direction;
mod error;
mod spectral;
mod stokes;
mod system;

pub use direction::DirectionCoordinate;
pub use error::CoordinateError;
pub use spectral::SpectralCoordinate;
pub use stokes::{StokesParameter, StokesType};
pub use system::{Coordinate, CoordinateSystem};
