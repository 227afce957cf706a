// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code to render sky-model components onto images.

Imaging happens in two phases. First, everything that can fail is worked out:
the roles of the image axes, channel frequencies, component flux densities and
pixel positions. Only then are pixels written, so an error never leaves an image
partially updated.
 */

mod axes;
mod error;
mod flux;
mod gaussian;

pub use axes::AxisRoles;
pub use error::ImagerError;
pub use flux::{scaled_flux, TaylorTerm};

use itertools::iproduct;
use log::{debug, trace};
use ndarray::Array2;

use crate::{
    image::{ImageElement, SkyImage},
    srclist::{ComponentType, SourceComponent, SourceList},
};
use axes::ImageAxes;
use gaussian::{window, GaussianFootprint};

/// Add the flux of every component in a source list to an image. The flux of
/// each Gaussian is integrated over each pixel; points are added to the
/// nearest pixel. Components outside the image are ignored.
///
/// `taylor_term` selects which Taylor term of the components' spectra is
/// imaged (0, 1 or 2).
///
/// On error, the image is unchanged.
pub fn project<I: SkyImage>(
    image: &mut I,
    source_list: &SourceList,
    taylor_term: u32,
) -> Result<(), ImagerError> {
    project_components(image, source_list.components(), taylor_term)
}

/// The same as [`project`], but for any collection of components.
pub fn project_components<'a, I, C>(
    image: &mut I,
    components: C,
    taylor_term: u32,
) -> Result<(), ImagerError>
where
    I: SkyImage,
    C: IntoIterator<Item = &'a SourceComponent>,
{
    let mut components = components.into_iter().peekable();
    if components.peek().is_none() {
        debug!("No components to image");
        return Ok(());
    }

    let term = TaylorTerm::try_from(taylor_term)?;
    let axes = ImageAxes::new(image.coordinates(), image.shape())?;

    let mut num_components = 0;
    let mut prepared = vec![];
    for comp in components {
        num_components += 1;
        if let Some(p) = prepare_component(comp, &axes, term)? {
            prepared.push(p);
        }
    }
    debug!(
        "Imaging {} of {num_components} components (Taylor term {taylor_term}) onto {} channels and {} polarisations",
        prepared.len(),
        axes.freqs.len(),
        axes.pols.len()
    );

    for p in &prepared {
        match &p.footprint {
            Footprint::Point { lon, lat } => add_point(image, &axes, *lon, *lat, &p.fluxes),
            Footprint::Gaussian(gaussian) => add_gaussian(image, &axes, gaussian, &p.fluxes),
        }
    }

    Ok(())
}

/// Where a component lands on an image.
#[derive(Debug, Clone, Copy)]
enum Footprint {
    Point { lon: usize, lat: usize },
    Gaussian(GaussianFootprint),
}

/// A component that is ready to be added to an image.
#[derive(Debug, Clone)]
struct PreparedComponent {
    footprint: Footprint,
    /// The flux density \[Jy\] of each channel and polarisation.
    fluxes: Array2<f64>,
}

/// Do all of the fallible work of imaging a component. `None` is returned if
/// the component is outside of the image.
fn prepare_component(
    comp: &SourceComponent,
    axes: &ImageAxes,
    term: TaylorTerm,
) -> Result<Option<PreparedComponent>, ImagerError> {
    let mut fluxes = Array2::zeros((axes.freqs.len(), axes.pols.len()));
    for (mut chan_fluxes, &freq) in fluxes.outer_iter_mut().zip(axes.freqs.iter()) {
        let fd = scaled_flux(comp, freq, term)?;
        chan_fluxes
            .iter_mut()
            .zip(axes.pols.iter())
            .for_each(|(flux, &pol)| *flux = fd.stokes(pol));
    }

    let footprint = match comp.comp_type {
        ComponentType::Point => {
            let pixel = axes.direction.to_pixel(comp.radec)?;
            let [lon, lat] = pixel.map(f64::round);
            if !axes.contains([lon, lat]) {
                trace!("Point component at {pixel:?} is outside of the image");
                return Ok(None);
            }
            Footprint::Point {
                lon: lon as usize,
                lat: lat as usize,
            }
        }

        ComponentType::Gaussian { maj, min, pa } => {
            let axes_valid = maj.is_finite() && min.is_finite() && maj >= 0.0 && min >= 0.0;
            if !(axes_valid && maj.max(min) > 0.0 && pa.is_finite()) {
                return Err(ImagerError::InvalidGaussian {
                    major: maj.to_degrees() * 3600.0,
                    minor: min.to_degrees() * 3600.0,
                });
            }
            let (major, minor) = (maj.max(min), maj.min(min));

            let pixel = axes.direction.to_pixel(comp.radec)?;
            if !axes.contains(pixel) {
                trace!("Gaussian component at {pixel:?} is outside of the image");
                return Ok(None);
            }

            let [lon_inc, lat_inc] = axes.direction.increment().map(f64::abs);
            if lon_inc != lat_inc {
                return Err(ImagerError::UnequalPixelScale(
                    lon_inc.to_degrees(),
                    lat_inc.to_degrees(),
                ));
            }
            Footprint::Gaussian(GaussianFootprint::new(
                pixel,
                major / lat_inc,
                minor / lat_inc,
                pa,
            ))
        }

        ComponentType::Disk { .. } => return Err(ImagerError::UnsupportedShape("Disk")),
    };

    Ok(Some(PreparedComponent { footprint, fluxes }))
}

fn add_point<I: SkyImage>(
    image: &mut I,
    axes: &ImageAxes,
    lon: usize,
    lat: usize,
    fluxes: &Array2<f64>,
) {
    for ((chan, pol), &flux) in fluxes.indexed_iter() {
        let pos = axes.roles.position(lon, lat, chan, pol);
        image.add_at(&pos, <I::Elem as ImageElement>::from_f64(flux));
    }
}

/// Add a Gaussian to every channel and polarisation of an image. The unit-flux
/// integral of each pixel is computed once over the largest window needed by
/// any plane, then scaled by each plane's flux.
fn add_gaussian<I: SkyImage>(
    image: &mut I,
    axes: &ImageAxes,
    gaussian: &GaussianFootprint,
    fluxes: &Array2<f64>,
) {
    let spatial_limit = axes.spatial_limit();
    let epsilon = <I::Elem as ImageElement>::EPSILON;
    let cutoffs = fluxes.mapv(|flux| gaussian.find_cutoff(flux, spatial_limit, epsilon));
    let max_cutoff = match cutoffs.iter().max() {
        Some(&c) => c,
        None => return,
    };

    let [lon_centre, lat_centre] = gaussian.centre;
    let lon_window = window(lon_centre, max_cutoff, axes.lon_len);
    let lat_window = window(lat_centre, max_cutoff, axes.lat_len);
    let (lon_start, lat_start) = (*lon_window.start(), *lat_window.start());
    let unit_fluxes = gaussian.integrate_window(lon_window, lat_window);
    trace!(
        "Gaussian at {:?} has a cutoff of {max_cutoff} pixels",
        gaussian.centre
    );

    for ((chan, pol), &flux) in fluxes.indexed_iter() {
        if flux == 0.0 {
            continue;
        }
        let cutoff = cutoffs[(chan, pol)];
        for (lon, lat) in iproduct!(
            window(lon_centre, cutoff, axes.lon_len),
            window(lat_centre, cutoff, axes.lat_len)
        ) {
            let unit_flux = unit_fluxes[(lon - lon_start, lat - lat_start)];
            let pos = axes.roles.position(lon, lat, chan, pol);
            image.add_at(&pos, <I::Elem as ImageElement>::from_f64(flux * unit_flux));
        }
    }
}
