// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn calc_freq_ratio_1() {
    let desired_freq = 160.0;
    let cat_freq = 150.0;
    let spec_index = -0.6;
    let ratio = calc_flux_ratio(desired_freq, cat_freq, spec_index);
    let expected = 0.9620170425907598;
    assert_abs_diff_eq!(ratio, expected, epsilon = 1e-10);
}

#[test]
fn calc_freq_ratio_2() {
    let desired_freq = 140.0;
    let cat_freq = 150.0;
    let spec_index = -0.6;
    let ratio = calc_flux_ratio(desired_freq, cat_freq, spec_index);
    let expected = 1.0422644718599143;
    assert_abs_diff_eq!(ratio, expected, epsilon = 1e-10);
}

#[test]
fn stokes_selection() {
    let fd = FluxDensity {
        freq: 150e6,
        i: 1.0,
        q: 2.0,
        u: 3.0,
        v: 4.0,
    };
    assert_abs_diff_eq!(fd.stokes(StokesParameter::I), 1.0);
    assert_abs_diff_eq!(fd.stokes(StokesParameter::Q), 2.0);
    assert_abs_diff_eq!(fd.stokes(StokesParameter::U), 3.0);
    assert_abs_diff_eq!(fd.stokes(StokesParameter::V), 4.0);
}

#[test]
fn scaling_keeps_frequency() {
    let fd = FluxDensity {
        freq: 150e6,
        i: 1.0,
        q: -0.5,
        ..Default::default()
    } * 2.0;
    assert_abs_diff_eq!(
        fd,
        FluxDensity {
            freq: 150e6,
            i: 2.0,
            q: -1.0,
            ..Default::default()
        }
    );
}

#[test]
fn spectral_index_of_each_model() {
    let fd = FluxDensity {
        freq: 150e6,
        i: 1.0,
        ..Default::default()
    };
    assert!(FluxDensityType::Constant { fd }.spectral_index().is_none());
    assert_eq!(
        FluxDensityType::PowerLaw { si: -0.7, fd }.spectral_index(),
        Some(-0.7)
    );
    let curved = FluxDensityType::CurvedPowerLaw {
        si: -0.8,
        fd,
        q: 0.03,
    };
    assert_eq!(curved.spectral_index(), Some(-0.8));
    assert_abs_diff_eq!(*curved.reference(), fd);
}

#[test]
fn nans_are_detected() {
    let mut fd = FluxDensity {
        freq: 150e6,
        i: 1.0,
        ..Default::default()
    };
    assert!(!fd.has_nans());
    fd.u = f64::NAN;
    assert!(fd.has_nans());
}
