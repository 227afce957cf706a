// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use indoc::indoc;

use super::*;

#[test]
fn gaussian_units_are_converted_when_deserialising() {
    let yaml = indoc! {"
        gaussian:
          maj: 36.0
          min: 18.0
          pa: 90.0
    "};
    let comp_type: ComponentType = serde_yaml::with::singleton_map::deserialize(
        serde_yaml::Deserializer::from_str(yaml),
    )
    .unwrap();
    match comp_type {
        ComponentType::Gaussian { maj, min, pa } => {
            assert_abs_diff_eq!(maj, (0.01_f64).to_radians(), epsilon = 1e-15);
            assert_abs_diff_eq!(min, (0.005_f64).to_radians(), epsilon = 1e-15);
            assert_abs_diff_eq!(pa, std::f64::consts::FRAC_PI_2, epsilon = 1e-15);
        }
        _ => panic!("Expected a Gaussian"),
    }
}

#[test]
fn point_deserialises_from_a_plain_string() {
    let comp_type: ComponentType = serde_yaml::with::singleton_map::deserialize(
        serde_yaml::Deserializer::from_str("point"),
    )
    .unwrap();
    assert_eq!(comp_type, ComponentType::Point);
}

#[test]
fn axes_validation() {
    assert!(ComponentType::Point.has_valid_axes());
    assert!(ComponentType::Gaussian {
        maj: 1.0,
        min: 0.0,
        pa: 0.3,
    }
    .has_valid_axes());
    assert!(!ComponentType::Gaussian {
        maj: 1.0,
        min: -0.1,
        pa: 0.3,
    }
    .has_valid_axes());
    assert!(!ComponentType::Disk {
        maj: f64::INFINITY,
        min: 0.1,
        pa: 0.3,
    }
    .has_valid_axes());
}
