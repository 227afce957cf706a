// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Images that sky-model components can be rendered onto.


use std::fmt::Debug;
use std::ops::AddAssign;

use ndarray::{ArrayD, IxDyn};
use num_traits::Float;

use crate::coord::CoordinateSystem;

/// The types of image pixels that can be rendered onto. All rendering is done
/// in double precision; values are converted just before they are added to an
/// image.
pub trait ImageElement: Float + AddAssign + Debug + Send + Sync + 'static {
    /// The machine epsilon of this type, expressed as an `f64`. Gaussian
    /// tails fainter than this are not rendered.
    const EPSILON: f64;

    fn from_f64(value: f64) -> Self;
}

impl ImageElement for f32 {
    const EPSILON: f64 = f32::EPSILON as f64;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl ImageElement for f64 {
    const EPSILON: f64 = f64::EPSILON;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// A multi-dimensional image with a coordinate system.
pub trait SkyImage {
    type Elem: ImageElement;

    /// The coordinate system describing this image's axes.
    fn coordinates(&self) -> &CoordinateSystem;

    /// The length of each of the image's axes.
    fn shape(&self) -> &[usize];

    /// Get the value of a pixel, if the position is inside the image.
    fn get(&self, pos: &[usize]) -> Option<Self::Elem>;

    /// Get a mutable reference to a pixel, if the position is inside the
    /// image.
    fn get_mut(&mut self, pos: &[usize]) -> Option<&mut Self::Elem>;

    /// Add a value to a pixel. Positions outside of the image are ignored.
    fn add_at(&mut self, pos: &[usize], value: Self::Elem) {
        match self.get_mut(pos) {
            Some(pixel) => *pixel += value,
            None => debug_assert!(false, "position {pos:?} is outside of the image"),
        }
    }
}

/// An image backed by an [`ndarray`] array.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayImage<T> {
    data: ArrayD<T>,
    coords: CoordinateSystem,
}

impl<T: ImageElement> ArrayImage<T> {
    pub fn new(data: ArrayD<T>, coords: CoordinateSystem) -> Self {
        Self { data, coords }
    }

    /// Make an image full of zeros.
    pub fn zeros(shape: &[usize], coords: CoordinateSystem) -> Self {
        Self {
            data: ArrayD::zeros(IxDyn(shape)),
            coords,
        }
    }

    pub fn data(&self) -> &ArrayD<T> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut ArrayD<T> {
        &mut self.data
    }

    pub fn into_data(self) -> ArrayD<T> {
        self.data
    }
}

impl<T: ImageElement> SkyImage for ArrayImage<T> {
    type Elem = T;

    fn coordinates(&self) -> &CoordinateSystem {
        &self.coords
    }

    fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    fn get(&self, pos: &[usize]) -> Option<T> {
        self.data.get(pos).copied()
    }

    fn get_mut(&mut self, pos: &[usize]) -> Option<&mut T> {
        self.data.get_mut(pos)
    }
}
