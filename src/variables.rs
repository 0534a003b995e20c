// Copyright 2021 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! MAGICC7 variable codes to OpenSCM variable names.
//!
//! A MAGICC7 code is a base variable plus a quantity suffix, e.g. `CO2I_EMIS`.
//! The OpenSCM name puts the quantity first and spells the variable the way
//! the rest of the community does: `Emissions|CO2|MAGICC Fossil and Industrial`.

use std::collections::HashSet;

use lazy_static::lazy_static;
use tracing::debug;

use crate::catalog::VariableCatalog;
use crate::common::{Direction, Result, join_hierarchy};
use crate::dictionary::ReplacementDictionary;
use crate::replace::Replacer;
use crate::{catalog_err, mapping_err};

/// MAGICC7 suffix and the OpenSCM quantity it denotes, in table order.
pub const MAGICC7_SUFFIXES: &[(&str, &str)] = &[
    ("_EMIS", "Emissions"),
    ("_CONC", "Atmospheric Concentrations"),
    ("_RF", "Radiative Forcing"),
    ("_OT", "Optical Thickness"),
];

/// Forcing agents that are not emissions but share the suffix scheme.
pub const SYNTHETIC_VARIABLES: &[&str] = &["SOLAR", "VOLCANIC"];

const FOSSIL_AND_INDUSTRIAL: &str = "MAGICC Fossil and Industrial";
const AFOLU: &str = "MAGICC AFOLU";

// their trailing B is part of the gas name, not an AFOLU marker
const TRAILING_LETTER_EXCEPTIONS: &[&str] = &["HCFC141B", "HCFC142B"];

const CASE_ADJUSTMENTS: &[(&str, &str)] = &[
    ("SOX", "SOx"),
    ("NOX", "NOx"),
    ("HFC134A", "HFC134a"),
    ("HFC143A", "HFC143a"),
    ("HFC152A", "HFC152a"),
    ("HFC227EA", "HFC227ea"),
    ("HFC236FA", "HFC236fa"),
    ("HFC245FA", "HFC245fa"),
    ("HFC365MFC", "HFC365mfc"),
    ("HCFC141B", "HCFC141b"),
    ("HCFC142B", "HCFC142b"),
    ("CH3CCL3", "CH3CCl3"),
    ("CCL4", "CCl4"),
    ("CH3CL", "CH3Cl"),
    ("CH2CL2", "CH2Cl2"),
    ("CHCL3", "CHCl3"),
    ("CH3BR", "CH3Br"),
    ("HALON1211", "Halon1211"),
    ("HALON1301", "Halon1301"),
    ("HALON2402", "Halon2402"),
    ("HALON1202", "Halon1202"),
    ("SOLAR", "Solar"),
    ("VOLCANIC", "Volcanic"),
];

const SURFACE_TEMP: (&str, &str) = ("SURFACE_TEMP", "Surface Temperature");
const AGGREGATED_OCEAN_HEAT_CONTENT: &str = "Aggregated Ocean Heat Content";
const OCEAN_TEMPERATURE: &str = "Ocean Temperature";
const OCEAN_TEMP_LAYERS: u32 = 998;

lazy_static! {
    static ref CASE_ADJUSTER: Replacer = Replacer::new(CASE_ADJUSTMENTS.iter().copied().collect());
}

/// The OpenSCM name for a single MAGICC7 variable code.
///
/// Fails with `UnknownSuffix` if the code does not end in one of
/// [`MAGICC7_SUFFIXES`].
pub fn openscm_variable(magicc7_variable: &str, sep: &str) -> Result<String> {
    let found = MAGICC7_SUFFIXES.iter().find_map(|(suffix, quantity)| {
        magicc7_variable
            .strip_suffix(suffix)
            .map(|variable| (variable, *quantity))
    });
    let (variable, quantity) = match found {
        Some(found) => found,
        None => return mapping_err!(UnknownSuffix, magicc7_variable.to_owned()),
    };

    let is_exception = TRAILING_LETTER_EXCEPTIONS.contains(&variable.to_uppercase().as_str());
    let variable = if is_exception {
        variable.to_owned()
    } else if let Some(base) = variable.strip_suffix('I') {
        join_hierarchy(&[base, FOSSIL_AND_INDUSTRIAL], sep)
    } else if let Some(base) = variable.strip_suffix('B') {
        join_hierarchy(&[base, AFOLU], sep)
    } else {
        variable.to_owned()
    };
    let variable = CASE_ADJUSTER.replace_str(&variable);

    Ok(join_hierarchy(&[quantity, &variable], sep))
}

fn check_base_variables<'a>(names: &[&'a str], sep: &str) -> Result<()> {
    let mut seen: HashSet<&'a str> = HashSet::with_capacity(names.len());
    for &name in names.iter() {
        if name.is_empty() || name.contains('_') || name.contains(sep) {
            return catalog_err!(
                BadCatalogEntry,
                format!("'{name}' can't be combined with a MAGICC7 suffix")
            );
        }
        if !seen.insert(name) {
            return catalog_err!(DuplicateVariable, name.to_owned());
        }
    }
    Ok(())
}

fn fixed_entries(sep: &str) -> Vec<(String, String)> {
    let mut entries = vec![(SURFACE_TEMP.0.to_owned(), SURFACE_TEMP.1.to_owned())];
    for depth in 1..=3 {
        entries.push((
            format!("HEATCONTENT_AGGREG_DEPTH{depth}"),
            join_hierarchy(&[AGGREGATED_OCEAN_HEAT_CONTENT, &format!("Depth {depth}")], sep),
        ));
    }
    entries.push((
        "HEATCONTENT_AGGREG_TOTAL".to_owned(),
        AGGREGATED_OCEAN_HEAT_CONTENT.to_owned(),
    ));
    for layer in 1..=OCEAN_TEMP_LAYERS {
        entries.push((
            format!("OCEAN_TEMP_LAYER_{layer:03}"),
            join_hierarchy(&[OCEAN_TEMPERATURE, &format!("Layer {layer}")], sep),
        ));
    }
    entries
}

/// MAGICC7 variable -> OpenSCM variable for every catalog variable (plus
/// [`SYNTHETIC_VARIABLES`]) and suffix, followed by the temperature and ocean
/// heat content outputs. `Direction::Inverse` gives the reverse table.
///
/// Any inconsistency between the catalog and the suffix scheme is an error;
/// no partial table is returned.
pub fn magicc7_to_openscm_variable_mapping(
    catalog: &VariableCatalog,
    sep: &str,
    direction: Direction,
) -> Result<ReplacementDictionary> {
    let base_variables: Vec<&str> = catalog
        .names()
        .chain(SYNTHETIC_VARIABLES.iter().copied())
        .collect();
    check_base_variables(&base_variables, sep)?;

    let mut forward = ReplacementDictionary::new();
    for base in base_variables.iter() {
        for (suffix, _) in MAGICC7_SUFFIXES.iter() {
            let magicc7_variable = format!("{base}{suffix}");
            let openscm_variable = openscm_variable(&magicc7_variable, sep)?;
            forward.insert(magicc7_variable, openscm_variable);
        }
    }

    for (magicc7_variable, openscm_variable) in fixed_entries(sep) {
        if forward.contains_key(&magicc7_variable) {
            return catalog_err!(DuplicateVariable, magicc7_variable);
        }
        forward.insert(magicc7_variable, openscm_variable);
    }

    let mapping = match direction {
        Direction::Forward => forward,
        Direction::Inverse => forward.inverted(),
    };
    debug!(?direction, entries = mapping.len(), "built MAGICC7 variable mapping");
    Ok(mapping)
}
