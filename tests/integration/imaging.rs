// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests against the component-imager binary.

use approx::assert_abs_diff_eq;
use indoc::indoc;
use tempfile::TempDir;

use super::*;

const GRID: &str = indoc! {r#"
    precision = "double"
    stokes = ["I", "Q"]

    [direction]
    ra = 60.0
    dec = -27.0
    pixel_size = 0.01
    num_pixels = [41, 41]

    [spectral]
    freq = 150e6
    freq_res = 1e6
    num_channels = 2
"#};

const SOURCE_LIST: &str = indoc! {"
    bright:
    - ra: 60.0
      dec: -27.0
      comp_type: point
      flux_type:
        constant:
          fd:
            freq: 150000000.0
            i: 2.0
            q: 1.0
    extended:
    - ra: 60.0
      dec: -27.05
      comp_type:
        gaussian:
          maj: 72.0
          min: 36.0
          pa: 0.0
      flux_type:
        constant:
          fd:
            freq: 150000000.0
            i: 3.0
"};

const SHAPE: [usize; 4] = [41, 41, 2, 2];

fn flat_index(pos: [usize; 4]) -> usize {
    pos.iter()
        .zip(SHAPE.iter())
        .fold(0, |acc, (&p, &len)| acc * len + p)
}

#[test]
fn test_image_source_list() {
    let tmp_dir = TempDir::new().unwrap();
    let grid = write_file_in_dir("grid.toml", tmp_dir.path(), GRID);
    let srclist = write_file_in_dir("srclist.yaml", tmp_dir.path(), SOURCE_LIST);
    let output = tmp_dir.path().join("image.json");

    let cmd = component_imager()
        .args([
            "--source-list",
            &format!("{}", srclist.display()),
            "--grid",
            &format!("{}", grid.display()),
            "--output",
            &format!("{}", output.display()),
        ])
        .ok();
    let succeeded = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(succeeded, "{stderr}");
    assert!(stdout.contains("Total Stokes I flux density"), "{stdout}");
    assert!(stdout.contains("Total Stokes Q flux density"), "{stdout}");

    let image: serde_json::Value =
        serde_json::from_reader(File::open(&output).unwrap()).unwrap();
    let shape: Vec<usize> = serde_json::from_value(image["shape"].clone()).unwrap();
    assert_eq!(shape, SHAPE);
    let data: Vec<f64> = serde_json::from_value(image["data"].clone()).unwrap();
    assert_eq!(data.len(), SHAPE.iter().product::<usize>());

    // The point is at the reference pixel.
    for chan in 0..2 {
        assert_abs_diff_eq!(data[flat_index([20, 20, 0, chan])], 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(data[flat_index([20, 20, 1, chan])], 1.0, epsilon = 1e-6);
    }

    // Each channel's Stokes I plane holds the flux of both components.
    let stokes_i_total: f64 = (0..41)
        .flat_map(|x| (0..41).map(move |y| (x, y)))
        .map(|(x, y)| data[flat_index([x, y, 0, 1])])
        .sum();
    assert_abs_diff_eq!(stokes_i_total, 5.0, epsilon = 5e-3);
}

#[test]
fn test_image_source_list_single_precision() {
    let tmp_dir = TempDir::new().unwrap();
    let grid = write_file_in_dir(
        "grid.toml",
        tmp_dir.path(),
        &GRID.replace("double", "single"),
    );
    let srclist = write_file_in_dir("srclist.yaml", tmp_dir.path(), SOURCE_LIST);
    let output = tmp_dir.path().join("image.json");

    let cmd = component_imager()
        .args([
            "-s",
            &format!("{}", srclist.display()),
            "-g",
            &format!("{}", grid.display()),
            "-o",
            &format!("{}", output.display()),
            "-t",
            "1",
        ])
        .ok();
    let succeeded = cmd.is_ok();
    let (_, stderr) = get_cmd_output(cmd);
    assert!(succeeded, "{stderr}");

    // Constant spectra have no flux in the first Taylor term.
    let image: serde_json::Value =
        serde_json::from_reader(File::open(&output).unwrap()).unwrap();
    let data: Vec<f64> = serde_json::from_value(image["data"].clone()).unwrap();
    assert!(data.iter().all(|&v| v == 0.0));
}

#[test]
fn test_disks_are_rejected() {
    let tmp_dir = TempDir::new().unwrap();
    let grid = write_file_in_dir("grid.toml", tmp_dir.path(), GRID);
    let srclist = write_file_in_dir(
        "srclist.yaml",
        tmp_dir.path(),
        &SOURCE_LIST.replace("gaussian:", "disk:"),
    );
    let output = tmp_dir.path().join("image.json");

    let cmd = component_imager()
        .args([
            "-s",
            &format!("{}", srclist.display()),
            "-g",
            &format!("{}", grid.display()),
            "-o",
            &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Disk components are not supported"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn test_bad_taylor_term() {
    let tmp_dir = TempDir::new().unwrap();
    let grid = write_file_in_dir("grid.toml", tmp_dir.path(), GRID);
    let srclist = write_file_in_dir("srclist.yaml", tmp_dir.path(), SOURCE_LIST);

    let cmd = component_imager()
        .args([
            "-s",
            &format!("{}", srclist.display()),
            "-g",
            &format!("{}", grid.display()),
            "-t",
            "3",
            "-o",
            &format!("{}", tmp_dir.path().join("image.json").display()),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Only Taylor terms 0, 1 and 2"), "{stderr}");
}
