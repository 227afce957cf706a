// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;
use marlu::RADec;

use component_imager::{
    project_components, ArrayImage, ComponentType, Coordinate, CoordinateSystem,
    DirectionCoordinate, FluxDensity, FluxDensityType, SkyImage, SourceComponent,
    SpectralCoordinate,
};

const NUM_PIXELS: usize = 128;
const NUM_CHANNELS: usize = 4;

fn make_image() -> ArrayImage<f32> {
    let pixel_size = 0.01_f64.to_radians();
    let centre = (NUM_PIXELS / 2) as f64;
    let mut coords = CoordinateSystem::new();
    coords.add_coordinate(Coordinate::Direction(DirectionCoordinate::new(
        RADec::from_degrees(0.0, -27.0),
        [centre, centre],
        [-pixel_size, pixel_size],
    )));
    coords.add_coordinate(Coordinate::Spectral(SpectralCoordinate::Linear {
        reference_freq: 150e6,
        reference_pixel: 0.0,
        increment: 1e6,
    }));
    ArrayImage::zeros(&[NUM_PIXELS, NUM_PIXELS, NUM_CHANNELS], coords)
}

/// A grid of components across the image, alternating between points and
/// Gaussians.
fn make_components(image: &ArrayImage<f32>) -> Vec<SourceComponent> {
    let pixel_size = 0.01_f64.to_radians();
    let (direction, _) = image.coordinates().direction().unwrap();
    (0..8)
        .flat_map(|i| (0..8).map(move |j| (i, j)))
        .map(|(i, j)| {
            let pixel = [8.0 + 16.0 * i as f64 + 0.3, 8.0 + 16.0 * j as f64 - 0.2];
            let comp_type = if (i + j) % 2 == 0 {
                ComponentType::Point
            } else {
                ComponentType::Gaussian {
                    maj: 3.0 * pixel_size,
                    min: 1.5 * pixel_size,
                    pa: (10.0 * (i + j) as f64).to_radians(),
                }
            };
            SourceComponent {
                radec: direction.to_world(pixel).unwrap(),
                comp_type,
                flux_type: FluxDensityType::PowerLaw {
                    si: -0.7,
                    fd: FluxDensity {
                        freq: 150e6,
                        i: 1.0,
                        ..Default::default()
                    },
                },
            }
        })
        .collect()
}

fn imaging(c: &mut Criterion) {
    let image = make_image();
    let comps = make_components(&image);

    c.bench_function(
        &format!(
            "imaging {} components onto {NUM_PIXELS}x{NUM_PIXELS}x{NUM_CHANNELS}",
            comps.len()
        ),
        |b| {
            b.iter_batched_ref(
                || image.clone(),
                |image| project_components(image, &comps, 0).unwrap(),
                BatchSize::LargeInput,
            )
        },
    );
}

criterion_group!(benches, imaging);
criterion_main!(benches);
