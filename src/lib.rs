// Copyright 2021 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Name translation between MAGICC6, MAGICC7 and OpenSCM.
//!
//! MAGICC writes regions as `NH-OCEAN` and variables as `CO2I_EMIS`, MAGICC6
//! spells the same gases `FossilCO2` or `HFC-43-10`, and OpenSCM uses
//! hierarchical names such as `World|Northern Hemisphere|Ocean` and
//! `Emissions|CO2|MAGICC Fossil and Industrial`. This crate builds the
//! tables between those conventions and applies them to names without
//! partially rewriting one token that happens to contain another.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod common;
pub mod definitions;
pub mod dictionary;
pub mod legacy;
pub mod regions;
pub mod replace;
pub mod variables;

#[cfg(test)]
mod replace_proptest;

pub use self::catalog::{VariableCatalog, VariableCatalogEntry};
pub use self::common::{
    DATA_HIERARCHY_SEPARATOR, Direction, Error, ErrorCode, ErrorKind, Result,
};
pub use self::definitions::{Definitions, Mapping, builtin};
pub use self::dictionary::ReplacementDictionary;
pub use self::legacy::{magicc6_to_magicc7_variable_mapping, magicc7_variable};
pub use self::regions::{magicc_region_to_openscm_region_mapping, openscm_region};
pub use self::replace::{Replace, Replacer, apply};
pub use self::variables::{magicc7_to_openscm_variable_mapping, openscm_variable};
