// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code surrounding the [`IndexMap`] used to contain all sky-model sources and
//! their components.


use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;

use super::*;

/// A [`IndexMap`] of source names for keys and [`Source`] structs for values.
///
/// By making [`SourceList`] a new type (specifically, an anonymous struct),
/// useful methods can be put onto it.
#[derive(Debug, Clone, Default)]
pub struct SourceList(IndexMap<String, Source>);

impl SourceList {
    /// Create an empty [`SourceList`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over every component of every source, in source-list order.
    pub fn components(&self) -> impl Iterator<Item = &SourceComponent> {
        self.values().flat_map(|src| src.components.iter())
    }

    /// Get counts of each of the component types and flux-density types.
    pub fn get_counts(&self) -> ComponentCounts {
        let mut counts = ComponentCounts::default();
        for c in self.components() {
            match c.comp_type {
                ComponentType::Point => counts.num_points += 1,
                ComponentType::Gaussian { .. } => counts.num_gaussians += 1,
                ComponentType::Disk { .. } => counts.num_disks += 1,
            }
            match c.flux_type {
                FluxDensityType::Constant { .. } => counts.num_constants += 1,
                FluxDensityType::PowerLaw { .. } => counts.num_power_laws += 1,
                FluxDensityType::CurvedPowerLaw { .. } => counts.num_curved_power_laws += 1,
            }
        }
        counts
    }
}

impl From<IndexMap<String, Source>> for SourceList {
    fn from(sl: IndexMap<String, Source>) -> Self {
        Self(sl)
    }
}

impl<const N: usize> From<[(String, Source); N]> for SourceList {
    fn from(value: [(String, Source); N]) -> Self {
        Self(IndexMap::from(value))
    }
}

impl Deref for SourceList {
    type Target = IndexMap<String, Source>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SourceList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(String, Source)> for SourceList {
    fn from_iter<I: IntoIterator<Item = (String, Source)>>(iter: I) -> Self {
        let mut c = Self::new();
        for i in iter {
            c.insert(i.0, i.1);
        }
        c
    }
}

impl IntoIterator for SourceList {
    type Item = (String, Source);
    type IntoIter = indexmap::map::IntoIter<String, Source>;

    fn into_iter(self) -> indexmap::map::IntoIter<String, Source> {
        self.0.into_iter()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComponentCounts {
    pub num_points: usize,
    pub num_gaussians: usize,
    pub num_disks: usize,
    pub num_constants: usize,
    pub num_power_laws: usize,
    pub num_curved_power_laws: usize,
}
