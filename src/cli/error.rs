// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all component-imager-related errors. This should be the
//! *only* error enum that is publicly visible from the binary.

use thiserror::Error;

use super::grid::GridError;
use crate::{imager::ImagerError, srclist::ReadSourceListError};

#[derive(Error, Debug)]
pub enum ImagerCliError {
    /// Generic error surrounding source lists.
    #[error("{0}\n\nSource lists are YAML or JSON maps of source names to lists of components.")]
    Srclist(String),

    /// An error related to the grid description file.
    #[error("{0}\n\nSee the documentation of the grid TOML file for the expected keys.")]
    Grid(String),

    /// An error encountered while rendering components.
    #[error("{0}")]
    Imaging(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

impl From<ReadSourceListError> for ImagerCliError {
    fn from(e: ReadSourceListError) -> Self {
        let s = e.to_string();
        match e {
            ReadSourceListError::IO(_) => Self::Generic(s),
            _ => Self::Srclist(s),
        }
    }
}

impl From<GridError> for ImagerCliError {
    fn from(e: GridError) -> Self {
        let s = e.to_string();
        match e {
            GridError::IO(_) => Self::Generic(s),
            _ => Self::Grid(s),
        }
    }
}

impl From<ImagerError> for ImagerCliError {
    fn from(e: ImagerError) -> Self {
        Self::Imaging(e.to_string())
    }
}

impl From<std::io::Error> for ImagerCliError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<serde_json::Error> for ImagerCliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
