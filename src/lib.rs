// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Render sky-model source components (points and elliptical Gaussians) onto
multi-dimensional image grids (direction × frequency × polarisation).

The entry point is [`project`], which adds the flux of each component of a
[`SourceList`] into every pixel of a [`SkyImage`] that it touches.
 */

pub mod cli;
pub mod constants;
pub mod coord;
pub mod image;
pub mod imager;
pub mod srclist;

// Re-exports.
pub use cli::{ComponentImager, ImagerCliError};
pub use coord::{
    Coordinate, CoordinateError, CoordinateSystem, DirectionCoordinate, SpectralCoordinate,
    StokesType,
};
pub use image::{ArrayImage, ImageElement, SkyImage};
pub use imager::{project, project_components, AxisRoles, ImagerError, TaylorTerm};
pub use srclist::{
    read::read_source_list_file, ComponentType, FluxDensity, FluxDensityType,
    ReadSourceListError, Source, SourceComponent, SourceList,
};
