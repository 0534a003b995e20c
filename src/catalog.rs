// Copyright 2021 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! The MAGICC7 emissions variable catalog.
//!
//! Each row names a base variable (e.g. `CO2I`, `HFC4310`) together with its
//! emissions unit and which legacy file layouts carry it. Only the ordered
//! base names feed the name mappings; the applicability flags are exposed for
//! readers and writers of SCEN and PRN files.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::result::Result as StdResult;

use serde::{Deserialize, Deserializer, de};
use tracing::info;

use crate::common::Result;

const BUILTIN_CATALOG: &str = include_str!("../data/magicc_emissions_units.csv");

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VariableCatalogEntry {
    pub magicc_variable: String,
    #[serde(default)]
    pub emissions_unit: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub part_of_scenfile_with_emissions_code_0: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub part_of_scenfile_with_emissions_code_1: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub part_of_prnfile: bool,
}

impl VariableCatalogEntry {
    pub fn new(magicc_variable: &str) -> Self {
        VariableCatalogEntry {
            magicc_variable: magicc_variable.to_owned(),
            emissions_unit: String::new(),
            part_of_scenfile_with_emissions_code_0: false,
            part_of_scenfile_with_emissions_code_1: false,
            part_of_prnfile: false,
        }
    }
}

// the data package spells booleans the Python way
fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> StdResult<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(de::Error::custom(format!(
            "expected True or False, found '{other}'"
        ))),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableCatalog {
    entries: Vec<VariableCatalogEntry>,
}

impl VariableCatalog {
    /// The emissions catalog shipped with this crate.
    pub fn builtin() -> Result<Self> {
        Self::from_reader(BUILTIN_CATALOG.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading variable catalog");
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for result in rdr.deserialize() {
            let entry: VariableCatalogEntry = result?;
            entries.push(entry);
        }

        Ok(VariableCatalog { entries })
    }

    /// A catalog carrying only base names, with every flag unset.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = names
            .into_iter()
            .map(|name| VariableCatalogEntry::new(name.as_ref()))
            .collect();
        VariableCatalog { entries }
    }

    pub fn entries(&self) -> &[VariableCatalogEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.magicc_variable.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, magicc_variable: &str) -> Option<&VariableCatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.magicc_variable == magicc_variable)
    }

    pub fn emissions_unit(&self, magicc_variable: &str) -> Option<&str> {
        self.get(magicc_variable).map(|e| e.emissions_unit.as_str())
    }

    /// The emissions included in a SCEN file written with the given
    /// emissions code (MAGICC only understands codes 0 and 1).
    pub fn part_of_scenfile_with_emissions_code(&self, code: u8) -> Result<Vec<&str>> {
        let included: fn(&VariableCatalogEntry) -> bool = match code {
            0 => |e: &VariableCatalogEntry| e.part_of_scenfile_with_emissions_code_0,
            1 => |e: &VariableCatalogEntry| e.part_of_scenfile_with_emissions_code_1,
            _ => {
                return crate::catalog_err!(
                    UnknownEmissionsCode,
                    format!("SCEN emissions code {code}")
                );
            }
        };
        Ok(self
            .entries
            .iter()
            .filter(|e| included(e))
            .map(|e| e.magicc_variable.as_str())
            .collect())
    }

    /// The emissions included in a `.prn` file.
    pub fn part_of_prnfile(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.part_of_prnfile)
            .map(|e| e.magicc_variable.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ErrorCode, ErrorKind};

    #[test]
    fn test_builtin_catalog() {
        let catalog = VariableCatalog::builtin().unwrap();
        assert_eq!(39, catalog.len());
        assert_eq!(Some("CO2I"), catalog.names().next());
        assert_eq!(Some("Gt C / yr"), catalog.emissions_unit("CO2B"));
        assert!(catalog.get("NMVOC").is_some());
        assert!(catalog.get("SOLAR").is_none());
    }

    #[test]
    fn test_scenfile_codes() {
        let catalog = VariableCatalog::builtin().unwrap();
        let code_0 = catalog.part_of_scenfile_with_emissions_code(0).unwrap();
        let code_1 = catalog.part_of_scenfile_with_emissions_code(1).unwrap();
        assert_eq!(20, code_0.len());
        assert_eq!(23, code_1.len());
        assert!(!code_0.contains(&"BC"));
        assert!(code_1.contains(&"BC"));
        assert_eq!(&["CO2I", "CO2B", "CH4"], &code_0[..3]);

        let err = catalog.part_of_scenfile_with_emissions_code(2).unwrap_err();
        assert_eq!(ErrorCode::UnknownEmissionsCode, err.code);
    }

    #[test]
    fn test_prnfile() {
        let catalog = VariableCatalog::builtin().unwrap();
        let prn = catalog.part_of_prnfile();
        assert_eq!(16, prn.len());
        assert_eq!("CFC11", prn[0]);
        assert!(!prn.contains(&"CO2I"));
    }

    #[test]
    fn test_flags_parse_leniently() {
        let csv = "magicc_variable,part_of_prnfile\nCFC11, true \nCO2I,0\nCH4,\n";
        let catalog = VariableCatalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(vec!["CFC11"], catalog.part_of_prnfile());
        assert_eq!(Some(""), catalog.emissions_unit("CH4"));
    }

    #[test]
    fn test_bad_flag_is_parse_error() {
        let csv = "magicc_variable,part_of_prnfile\nCFC11,maybe\n";
        let err = VariableCatalog::from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(ErrorKind::Catalog, err.kind);
        assert_eq!(ErrorCode::CatalogParse, err.code);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = VariableCatalog::from_path("/nonexistent/catalog.csv").unwrap_err();
        assert_eq!(ErrorCode::Io, err.code);
    }

    #[test]
    fn test_from_names() {
        let catalog = VariableCatalog::from_names(["OC", "NMVOC"]);
        assert_eq!(vec!["OC", "NMVOC"], catalog.names().collect::<Vec<_>>());
        assert!(catalog.part_of_prnfile().is_empty());
    }
}
