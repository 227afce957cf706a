// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors associated with reading in a source list.
#[derive(Error, Debug)]
pub enum ReadSourceListError {
    #[error(
        "Source list error: Attempted to use RA {0}°, but this is out of range (0° <= RA < 360°)"
    )]
    InvalidRa(f64),

    #[error(
        "Source list error: Attempted to use Dec {0}°, but this is out of range (-90° <= Dec <= 90°)"
    )]
    InvalidDec(f64),

    #[error("Source {source_name}: A component contains NaNs for its flux densities. This is not allowed.")]
    NaNsInComponent { source_name: String },

    #[error("Source {source_name}: A component has non-finite or negative Gaussian/disk axes")]
    InvalidAxes { source_name: String },

    #[error("Source {0} has no components")]
    EmptySource(String),

    #[error("The size of the source list was 0")]
    NoSources,

    #[error("Could not deserialise the contents as yaml or json.\n\nyaml error: {yaml_err}\n\njson error: {json_err}")]
    FailedToDeserialise { yaml_err: String, json_err: String },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
