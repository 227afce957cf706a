// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sky-model component types.

#[cfg(test)]
mod tests;

use marlu::RADec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::FluxDensityType;

/// Information on a source's component.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceComponent {
    /// Coordinates struct associated with the component.
    pub radec: RADec,

    /// The type of component.
    pub comp_type: ComponentType,

    /// The flux densities associated with this component.
    pub flux_type: FluxDensityType,
}

/// Source component types.
///
/// Disks can be described in source lists, but cannot be rendered onto an
/// image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Point,

    Gaussian {
        /// Major axis size (FWHM) \[radians\]
        #[serde(serialize_with = "radians_to_arcsecs")]
        #[serde(deserialize_with = "arcsecs_to_radians")]
        maj: f64,

        /// Minor axis size (FWHM) \[radians\]
        #[serde(serialize_with = "radians_to_arcsecs")]
        #[serde(deserialize_with = "arcsecs_to_radians")]
        min: f64,

        /// Position angle \[radians\]
        #[serde(serialize_with = "radians_to_degrees")]
        #[serde(deserialize_with = "degrees_to_radians")]
        pa: f64,
    },

    Disk {
        /// Major axis size \[radians\]
        #[serde(serialize_with = "radians_to_arcsecs")]
        #[serde(deserialize_with = "arcsecs_to_radians")]
        maj: f64,

        /// Minor axis size \[radians\]
        #[serde(serialize_with = "radians_to_arcsecs")]
        #[serde(deserialize_with = "arcsecs_to_radians")]
        min: f64,

        /// Position angle \[radians\]
        #[serde(serialize_with = "radians_to_degrees")]
        #[serde(deserialize_with = "degrees_to_radians")]
        pa: f64,
    },
}

fn radians_to_arcsecs<S: Serializer>(num: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(num.to_degrees() * 3600.0)
}

fn radians_to_degrees<S: Serializer>(num: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(num.to_degrees())
}

fn arcsecs_to_radians<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let num: f64 = Deserialize::deserialize(d)?;
    Ok(num.to_radians() / 3600.0)
}

fn degrees_to_radians<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let num: f64 = Deserialize::deserialize(d)?;
    Ok(num.to_radians())
}

impl ComponentType {
    /// Are the axes of this component (if it has any) finite and
    /// non-negative?
    pub(crate) fn has_valid_axes(&self) -> bool {
        match self {
            ComponentType::Point => true,
            ComponentType::Gaussian { maj, min, pa } | ComponentType::Disk { maj, min, pa } => {
                maj.is_finite() && min.is_finite() && pa.is_finite() && *maj >= 0.0 && *min >= 0.0
            }
        }
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for SourceComponent {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.radec.abs_diff_eq(&other.radec, epsilon)
            && self.comp_type.abs_diff_eq(&other.comp_type, epsilon)
            && self.flux_type.abs_diff_eq(&other.flux_type, epsilon)
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for ComponentType {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self, other) {
            (ComponentType::Point, ComponentType::Point) => true,

            (
                ComponentType::Gaussian { maj, min, pa },
                ComponentType::Gaussian {
                    maj: maj2,
                    min: min2,
                    pa: pa2,
                },
            )
            | (
                ComponentType::Disk { maj, min, pa },
                ComponentType::Disk {
                    maj: maj2,
                    min: min2,
                    pa: pa2,
                },
            ) => {
                f64::abs_diff_eq(maj, maj2, epsilon)
                    && f64::abs_diff_eq(min, min2, epsilon)
                    && f64::abs_diff_eq(pa, pa2, epsilon)
            }

            _ => false,
        }
    }
}
