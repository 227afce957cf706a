// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for sky-model source lists.
//!
//! Source lists are YAML or JSON maps of source names to lists of components.
//! Positions are written in degrees, Gaussian axes in arcseconds and position
//! angles in degrees; in memory, everything is in radians.

pub mod read;
mod types;

mod error;

pub use error::*;
pub use types::*;
