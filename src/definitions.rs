// Copyright 2021 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Every name mapping, built once.
//!
//! `Definitions` owns the forward and inverse table for each mapping along
//! with the compiled replacement rules, so converting names never rebuilds
//! anything. A `Definitions` is immutable after construction and can be shared
//! freely between threads.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use tracing::debug;

use crate::catalog::VariableCatalog;
use crate::common::{DATA_HIERARCHY_SEPARATOR, Direction, Error, ErrorCode, ErrorKind, Result};
use crate::dictionary::ReplacementDictionary;
use crate::legacy::magicc6_to_magicc7_variable_mapping;
use crate::regions::magicc_region_to_openscm_region_mapping;
use crate::replace::{Replace, Replacer};
use crate::variables::magicc7_to_openscm_variable_mapping;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mapping {
    /// MAGICC region <-> OpenSCM region
    Region,
    /// MAGICC7 variable <-> OpenSCM variable
    Magicc7Variables,
    /// MAGICC6 variable <-> MAGICC7 variable
    Magicc6Variables,
}

impl Mapping {
    pub const ALL: [Mapping; 3] = [
        Mapping::Region,
        Mapping::Magicc7Variables,
        Mapping::Magicc6Variables,
    ];
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Mapping::Region => "region",
            Mapping::Magicc7Variables => "magicc7",
            Mapping::Magicc6Variables => "magicc6",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Mapping {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "region" => Ok(Mapping::Region),
            "magicc7" => Ok(Mapping::Magicc7Variables),
            "magicc6" => Ok(Mapping::Magicc6Variables),
            _ => Err(Error::new(
                ErrorKind::Mapping,
                ErrorCode::UnknownMapping,
                Some(s.to_owned()),
            )),
        }
    }
}

#[derive(Clone, Debug)]
struct Tables {
    forward: Replacer,
    inverse: Replacer,
}

impl Tables {
    fn new(forward: ReplacementDictionary) -> Self {
        let inverse = forward.inverted();
        Tables {
            forward: Replacer::new(forward),
            inverse: Replacer::new(inverse),
        }
    }

    fn get(&self, direction: Direction) -> &Replacer {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Inverse => &self.inverse,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Definitions {
    separator: String,
    regions: Tables,
    magicc7_variables: Tables,
    magicc6_variables: Tables,
}

impl Definitions {
    pub fn new(catalog: &VariableCatalog) -> Result<Self> {
        Self::with_separator(catalog, DATA_HIERARCHY_SEPARATOR)
    }

    /// Build every table using `separator` between hierarchy levels. Any
    /// catalog inconsistency aborts construction.
    pub fn with_separator(catalog: &VariableCatalog, separator: &str) -> Result<Self> {
        if separator.is_empty() {
            return crate::mapping_err!(BadSeparator, "hierarchy separator is empty".to_owned());
        }

        let regions = magicc_region_to_openscm_region_mapping(separator, Direction::Forward);
        let magicc7_variables =
            magicc7_to_openscm_variable_mapping(catalog, separator, Direction::Forward)?;
        let magicc6_variables = magicc6_to_magicc7_variable_mapping(Direction::Forward);

        debug!(
            separator,
            catalog = catalog.len(),
            "built name definitions"
        );

        Ok(Definitions {
            separator: separator.to_owned(),
            regions: Tables::new(regions),
            magicc7_variables: Tables::new(magicc7_variables),
            magicc6_variables: Tables::new(magicc6_variables),
        })
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    fn tables(&self, mapping: Mapping) -> &Tables {
        match mapping {
            Mapping::Region => &self.regions,
            Mapping::Magicc7Variables => &self.magicc7_variables,
            Mapping::Magicc6Variables => &self.magicc6_variables,
        }
    }

    pub fn replacer(&self, mapping: Mapping, direction: Direction) -> &Replacer {
        self.tables(mapping).get(direction)
    }

    pub fn dictionary(&self, mapping: Mapping, direction: Direction) -> &ReplacementDictionary {
        self.replacer(mapping, direction).rules()
    }

    /// Rewrite a name, or a list of names, with one of the mappings.
    /// Names the mapping doesn't know are returned unchanged.
    pub fn convert<I: Replace + ?Sized>(
        &self,
        input: &I,
        mapping: Mapping,
        direction: Direction,
    ) -> I::Output {
        self.replacer(mapping, direction).replace(input)
    }
}

lazy_static! {
    static ref BUILTIN: Result<Definitions> =
        VariableCatalog::builtin().and_then(|catalog| Definitions::new(&catalog));
}

/// Definitions built from the bundled catalog with the default separator.
///
/// Built on first use and shared, read-only, for the life of the process.
pub fn builtin() -> Result<&'static Definitions> {
    BUILTIN.as_ref().map_err(Clone::clone)
}
