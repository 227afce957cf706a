// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for reading sky-model source list files.


use std::{fs::File, io::BufReader, path::Path};

use indexmap::IndexMap;
use log::debug;
use marlu::RADec;
use serde::Deserialize;
use vec1::Vec1;

use super::{
    ComponentType, FluxDensityType, ReadSourceListError, Source, SourceComponent, SourceList,
};

/// The on-disk layout of a source list. Positions are in degrees.
type TmpSourceList = IndexMap<String, Vec<TmpComponent>>;

#[derive(Clone, Debug, Deserialize)]
struct TmpComponent {
    /// \[degrees\]
    ra: f64,
    /// \[degrees\]
    dec: f64,
    comp_type: ComponentType,
    flux_type: FluxDensityType,
}

/// Given the path to a sky-model source list file, return a [`SourceList`].
/// Files ending in ".yaml" or ".yml" are read as YAML, ".json" as JSON;
/// anything else is attempted as both.
pub fn read_source_list_file<P: AsRef<Path>>(path: P) -> Result<SourceList, ReadSourceListError> {
    fn inner(path: &Path) -> Result<SourceList, ReadSourceListError> {
        debug!("Attempting to read source list {}", path.display());

        let ext = path
            .extension()
            .and_then(|os_str| os_str.to_str())
            .map(|s| s.to_lowercase());
        match ext.as_deref() {
            Some("yaml" | "yml") => {
                debug!("Read as yaml");
                let mut f = BufReader::new(File::open(path)?);
                source_list_from_yaml(&mut f)
            }

            Some("json") => {
                debug!("Read as json");
                let mut f = BufReader::new(File::open(path)?);
                source_list_from_json(&mut f)
            }

            _ => {
                let mut f = BufReader::new(File::open(path)?);
                let json_err = match source_list_from_json(&mut f) {
                    Ok(sl) => return Ok(sl),
                    Err(e @ ReadSourceListError::Json(_)) => e.to_string(),
                    Err(e) => return Err(e),
                };
                // Even a failed attempt to read the file alters the buffer.
                // Open it again.
                let mut f = BufReader::new(File::open(path)?);
                let yaml_err = match source_list_from_yaml(&mut f) {
                    Ok(sl) => return Ok(sl),
                    Err(e @ ReadSourceListError::Yaml(_)) => e.to_string(),
                    Err(e) => return Err(e),
                };
                Err(ReadSourceListError::FailedToDeserialise { yaml_err, json_err })
            }
        }
    }
    inner(path.as_ref())
}

/// Convert a yaml file to a [`SourceList`].
pub fn source_list_from_yaml<T: std::io::BufRead>(
    buf: &mut T,
) -> Result<SourceList, ReadSourceListError> {
    let tmp_sl: TmpSourceList = serde_yaml::with::singleton_map_recursive::deserialize(
        serde_yaml::Deserializer::from_reader(buf),
    )?;
    convert_tmp_source_list(tmp_sl)
}

/// Convert a json file to a [`SourceList`].
pub fn source_list_from_json<T: std::io::BufRead>(
    buf: &mut T,
) -> Result<SourceList, ReadSourceListError> {
    let tmp_sl: TmpSourceList = serde_json::from_reader(buf)?;
    convert_tmp_source_list(tmp_sl)
}

/// Complain if we spot something wrong, and convert degrees to radians.
fn convert_tmp_source_list(tmp_sl: TmpSourceList) -> Result<SourceList, ReadSourceListError> {
    if tmp_sl.is_empty() {
        return Err(ReadSourceListError::NoSources);
    }

    let mut sl = SourceList::new();
    for (source_name, tmp_comps) in tmp_sl {
        let mut comps = Vec::with_capacity(tmp_comps.len());
        for tmp_comp in tmp_comps {
            let TmpComponent {
                ra,
                dec,
                comp_type,
                flux_type,
            } = tmp_comp;
            if !(0.0..360.0).contains(&ra) {
                return Err(ReadSourceListError::InvalidRa(ra));
            }
            if !(-90.0..=90.0).contains(&dec) {
                return Err(ReadSourceListError::InvalidDec(dec));
            }
            if flux_type.reference().has_nans() {
                return Err(ReadSourceListError::NaNsInComponent { source_name });
            }
            if !comp_type.has_valid_axes() {
                return Err(ReadSourceListError::InvalidAxes { source_name });
            }

            comps.push(SourceComponent {
                radec: RADec::from_degrees(ra, dec),
                comp_type,
                flux_type,
            });
        }

        let components = Vec1::try_from_vec(comps)
            .map_err(|_| ReadSourceListError::EmptySource(source_name.clone()))?;
        sl.insert(source_name, Source { components });
    }

    debug!("Read {} sources", sl.len());
    Ok(sl)
}
