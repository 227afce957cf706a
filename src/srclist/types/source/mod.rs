// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structures to describe sky-model sources and their components.

use vec1::Vec1;

use super::SourceComponent;

/// A collection of components. There is always at least one.
#[derive(Clone, Debug, PartialEq)]
pub struct Source {
    /// The components associated with the source.
    pub components: Vec1<SourceComponent>,
}

#[cfg(test)]
impl approx::AbsDiffEq for Source {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.components.len() == other.components.len()
            && self
                .components
                .iter()
                .zip(other.components.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
