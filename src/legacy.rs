// Copyright 2021 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! MAGICC6 variable spellings to MAGICC7 variable codes.

use tracing::debug;

use crate::common::Direction;
use crate::dictionary::ReplacementDictionary;

/// Variable names as they appear in MAGICC6 files. Several spellings collapse
/// onto one MAGICC7 code; the first one listed is what the inverse produces,
/// e.g. `HFC4310` maps back to `HFC43-10`, not `HFC-43-10`.
pub const MAGICC6_VARIABLES: &[&str] = &[
    "FossilCO2",
    "OtherCO2",
    "SOx",
    "NOx",
    "HFC43-10",
    "HFC-43-10",
    "HFC134a",
    "HFC143a",
    "HFC227ea",
    "HFC245fa",
    "CFC-11",
    "CFC-12",
    "CFC-113",
    "CFC-114",
    "CFC-115",
    "CCl4",
    "CH3CCl3",
    "HCFC-22",
    "HFC-23",
    "HFC-32",
    "HFC-125",
    "HFC-134a",
    "HFC-143a",
    "HCFC-141b",
    "HCFC-142b",
    "HFC-227ea",
    "HFC-245ca",
    "Halon 1211",
    "Halon 1202",
    "Halon 1301",
    "Halon 2402",
    "Halon1211",
    "Halon1202",
    "Halon1301",
    "Halon2402",
    "CH3Br",
    "CH3Cl",
];

// names the generic normalisation gets wrong
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("FossilCO2", "CO2I"),
    ("OtherCO2", "CO2B"),
    ("HFC-245ca", "HFC245FA"),
];

/// The MAGICC7 code for a single MAGICC6 name: special cases first, then
/// hyphens and spaces are dropped and the result uppercased.
pub fn magicc7_variable(magicc6_variable: &str) -> String {
    if let Some((_, special)) = SPECIAL_CASES
        .iter()
        .find(|(name, _)| *name == magicc6_variable)
    {
        return (*special).to_owned();
    }

    magicc6_variable
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect::<String>()
        .to_uppercase()
}

/// MAGICC6 variable -> MAGICC7 variable, or the reverse for
/// `Direction::Inverse` (first listed spelling wins).
pub fn magicc6_to_magicc7_variable_mapping(direction: Direction) -> ReplacementDictionary {
    let forward: ReplacementDictionary = MAGICC6_VARIABLES
        .iter()
        .map(|&name| (name, magicc7_variable(name)))
        .collect();

    let mapping = match direction {
        Direction::Forward => forward,
        Direction::Inverse => forward.inverted(),
    };
    debug!(?direction, entries = mapping.len(), "built MAGICC6 variable mapping");
    mapping
}
