// Copyright 2021 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Property-based tests for name conversion using proptest.
//!
//! These tests verify that:
//! 1. Names no table knows about come back unchanged
//! 2. Converting a list is the same as converting each element
//! 3. Codes that win their inverse slot survive a forward/inverse round trip

use proptest::prelude::*;

use crate::common::Direction;
use crate::definitions::{Mapping, builtin};
use crate::regions::{MAGICC_REGIONS, magicc_region_to_openscm_region_mapping};
use crate::replace::apply;
use crate::variables::MAGICC7_SUFFIXES;

// every key in every builtin table has an uppercase letter or a digit
fn unmapped_name_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{0,24}".prop_map(|s| s.to_string())
}

fn mapping_strategy() -> impl Strategy<Value = Mapping> {
    prop::sample::select(Mapping::ALL.to_vec())
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Inverse)]
}

fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(MAGICC_REGIONS.to_vec()).prop_map(|s| s.to_string()),
        prop::sample::select(vec!["CO2I_EMIS", "SOX_RF", "NMVOC_EMIS", "OC_CONC"])
            .prop_map(|s| s.to_string()),
        prop::sample::select(vec!["HFC-43-10", "Halon 1211", "CFC-113", "FossilCO2"])
            .prop_map(|s| s.to_string()),
        "[A-Z0-9_|-]{1,12}".prop_map(|s| s.to_string()),
    ]
}

fn first_listed_regions() -> Vec<&'static str> {
    let inverse = magicc_region_to_openscm_region_mapping("|", Direction::Inverse);
    MAGICC_REGIONS
        .iter()
        .copied()
        .filter(|region| inverse.values().any(|v| v == *region))
        .collect()
}

proptest! {
    #[test]
    fn unmapped_names_pass_through(
        name in unmapped_name_strategy(),
        mapping in mapping_strategy(),
        direction in direction_strategy(),
    ) {
        let defs = builtin().unwrap();
        prop_assert_eq!(&name, &defs.convert(name.as_str(), mapping, direction));
    }

    #[test]
    fn list_conversion_is_elementwise(
        names in prop::collection::vec(token_strategy(), 0..8),
        mapping in mapping_strategy(),
        direction in direction_strategy(),
    ) {
        let defs = builtin().unwrap();
        let before = names.clone();
        let converted = defs.convert(&names, mapping, direction);
        prop_assert_eq!(names.len(), converted.len());
        for (name, out) in names.iter().zip(converted.iter()) {
            prop_assert_eq!(&defs.convert(name.as_str(), mapping, direction), out);
        }
        prop_assert_eq!(before, names);
    }

    #[test]
    fn region_round_trip(region in prop::sample::select(first_listed_regions())) {
        let defs = builtin().unwrap();
        let openscm = defs.convert(region, Mapping::Region, Direction::Forward);
        prop_assert_eq!(region, defs.convert(openscm.as_str(), Mapping::Region, Direction::Inverse));
    }

    #[test]
    fn variable_round_trip(
        base in prop::sample::select(
            crate::catalog::VariableCatalog::builtin()
                .unwrap()
                .names()
                .map(|s| s.to_owned())
                .collect::<Vec<_>>()
        ),
        suffix in prop::sample::select(MAGICC7_SUFFIXES.iter().map(|(s, _)| *s).collect::<Vec<_>>()),
    ) {
        let defs = builtin().unwrap();
        let magicc7 = format!("{base}{suffix}");
        let openscm = defs.convert(magicc7.as_str(), Mapping::Magicc7Variables, Direction::Forward);
        prop_assert_ne!(&magicc7, &openscm);
        let back = defs.convert(openscm.as_str(), Mapping::Magicc7Variables, Direction::Inverse);
        prop_assert_eq!(magicc7, back);
    }

    #[test]
    fn apply_matches_definitions(
        name in token_strategy(),
        direction in direction_strategy(),
    ) {
        let defs = builtin().unwrap();
        let forward = defs.dictionary(Mapping::Magicc6Variables, Direction::Forward);
        prop_assert_eq!(
            apply(name.as_str(), forward, direction),
            defs.convert(name.as_str(), Mapping::Magicc6Variables, direction)
        );
    }
}
