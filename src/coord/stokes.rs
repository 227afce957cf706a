// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Polarisation types of the planes on a Stokes axis.

use serde::{Deserialize, Serialize};

/// The polarisation of a plane on an image's Stokes axis.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum StokesType {
    I,
    Q,
    U,
    V,
    RR,
    LL,
    RL,
    LR,
    XX,
    YY,
    XY,
    YX,
}

/// The Stokes parameters that source-list flux densities are specified in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum StokesParameter {
    I,
    Q,
    U,
    V,
}

impl TryFrom<StokesType> for StokesParameter {
    type Error = StokesType;

    /// Only I, Q, U and V are Stokes parameters; correlation products are
    /// handed back as the error.
    fn try_from(value: StokesType) -> Result<Self, Self::Error> {
        match value {
            StokesType::I => Ok(StokesParameter::I),
            StokesType::Q => Ok(StokesParameter::Q),
            StokesType::U => Ok(StokesParameter::U),
            StokesType::V => Ok(StokesParameter::V),
            other => Err(other),
        }
    }
}
