// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code.
//!
//! Only 3 things should be public in this module: `ComponentImager`,
//! `ComponentImager::run`, and `ImagerCliError`.

mod error;
mod grid;

pub use error::ImagerCliError;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::{AppSettings, Parser};
use log::{debug, info};
use ndarray::Axis;
use serde::Serialize;

use crate::{
    image::{ArrayImage, ImageElement, SkyImage},
    imager::project,
    srclist::{read::read_source_list_file, SourceList},
};
use grid::{GridConfig, Precision};

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

const DEFAULT_OUTPUT_FILENAME: &str = "component_image.json";

#[derive(Debug, Parser)]
#[clap(
    version,
    author,
    about = "Render the point and Gaussian components of a sky-model source list onto an image grid"
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(infer_long_args = true)]
pub struct ComponentImager {
    /// Path to the sky-model source list (YAML or JSON).
    #[clap(short, long, parse(from_str), help_heading = "INPUT FILES")]
    source_list: PathBuf,

    /// Path to a TOML file describing the image grid.
    #[clap(short, long, parse(from_str), help_heading = "INPUT FILES")]
    grid: PathBuf,

    /// The Taylor term of the source spectra to image (0, 1 or 2).
    #[clap(short, long, default_value = "0", help_heading = "IMAGING")]
    taylor_term: u32,

    /// Path to the output JSON image.
    #[clap(short, long, parse(from_str), help_heading = "OUTPUT FILES")]
    #[clap(default_value = DEFAULT_OUTPUT_FILENAME)]
    output: PathBuf,

    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,
}

impl ComponentImager {
    pub fn run(self) -> Result<(), ImagerCliError> {
        setup_logging(self.verbosity).expect("Failed to initialise logging.");
        info!("component-imager {}", env!("CARGO_PKG_VERSION"));
        display_build_info();

        let grid = GridConfig::read(&self.grid)?;
        debug!("Grid: {grid:?}");
        let source_list = read_source_list_file(&self.source_list)?;
        let counts = source_list.get_counts();
        info!(
            "Read {} sources from {}: {} points, {} Gaussians, {} disks",
            source_list.len(),
            self.source_list.display(),
            counts.num_points,
            counts.num_gaussians,
            counts.num_disks
        );
        debug!(
            "{} constant, {} power-law and {} curved power-law spectra",
            counts.num_constants, counts.num_power_laws, counts.num_curved_power_laws
        );

        match grid.precision {
            Precision::Single => {
                render::<f32>(&grid, &source_list, self.taylor_term, &self.output)?
            }
            Precision::Double => {
                render::<f64>(&grid, &source_list, self.taylor_term, &self.output)?
            }
        }

        info!("component-imager complete.");
        Ok(())
    }
}

/// Image a source list onto a new image and write it out.
fn render<T: ImageElement + Serialize>(
    grid: &GridConfig,
    source_list: &SourceList,
    taylor_term: u32,
    output: &Path,
) -> Result<(), ImagerCliError> {
    let mut image: ArrayImage<T> = grid.make_image()?;
    info!(
        "Imaging Taylor term {taylor_term} onto a {:?} grid",
        image.shape()
    );
    project(&mut image, source_list, taylor_term)?;

    let stokes = grid.stokes_types()?;
    match (stokes, image.coordinates().stokes()) {
        (Some(stokes), Some((_, axis))) => {
            for (pol, plane) in stokes.iter().zip(image.data().axis_iter(Axis(axis))) {
                info!("Total Stokes {pol} flux density: {} Jy", total(plane.iter()));
            }
        }
        _ => info!("Total Stokes I flux density: {} Jy", total(image.data().iter())),
    }

    write_image(&image, output)?;
    info!("Wrote {}", output.display());
    Ok(())
}

fn total<'a, T: ImageElement>(values: impl Iterator<Item = &'a T>) -> f64 {
    values.map(|v| v.to_f64().unwrap_or_default()).sum()
}

/// The image as written to disk; the data are in row-major order.
#[derive(Serialize)]
struct ImageFile<'a, T> {
    shape: &'a [usize],
    data: Vec<T>,
}

fn write_image<T: ImageElement + Serialize>(
    image: &ArrayImage<T>,
    output: &Path,
) -> Result<(), ImagerCliError> {
    let image_file = ImageFile {
        shape: image.shape(),
        data: image.data().iter().copied().collect(),
    };
    let mut f = BufWriter::new(File::create(output)?);
    serde_json::to_writer(&mut f, &image_file)?;
    f.flush()?;
    Ok(())
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write info-level log lines of how this executable was compiled.
fn display_build_info() {
    info!("Compiled {}", BUILT_TIME_UTC);
    info!("   with compiler {}", RUSTC_VERSION);
    info!("");
}
