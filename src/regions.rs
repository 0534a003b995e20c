// Copyright 2021 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use tracing::debug;

use crate::common::{Direction, join_hierarchy};
use crate::dictionary::ReplacementDictionary;

const WORLD: &str = "World";

/// Every region code MAGICC knows about. Where two codes produce the same
/// OpenSCM region the one listed first is used for the inverse, so
/// `World|Northern Hemisphere|Land` maps back to `NHLAND` rather than
/// `NH-LAND`, and `World` maps back to `WORLD` (MAGICC never reads `GLOBAL`).
pub const MAGICC_REGIONS: &[&str] = &[
    "WORLD", "GLOBAL", "OECD90", "ALM", "REF", "ASIA", "R5ASIA", "R5OECD", "R5REF", "R5MAF",
    "R5LAM", "R6OECD90", "R6REF", "R6LAM", "R6MAF", "R6ASIA", "NHOCEAN", "SHOCEAN", "NHLAND",
    "SHLAND", "NH-OCEAN", "SH-OCEAN", "NH-LAND", "SH-LAND", "SH", "NH", "BUNKERS",
];

/// The OpenSCM region for a single MAGICC region code.
pub fn openscm_region(magicc_region: &str, sep: &str) -> String {
    if magicc_region == "WORLD" || magicc_region == "GLOBAL" {
        return WORLD.to_owned();
    }
    if magicc_region == "BUNKERS" {
        return join_hierarchy(&[WORLD, "Bunkers"], sep);
    }
    if magicc_region.starts_with("NH") || magicc_region.starts_with("SH") {
        let region = magicc_region.replace('-', "");
        let hemisphere = if region.contains("NH") {
            "Northern Hemisphere"
        } else {
            "Southern Hemisphere"
        };
        if region == "NH" || region == "SH" {
            return join_hierarchy(&[WORLD, hemisphere], sep);
        }

        let land_ocean = if region.contains("LAND") {
            "Land"
        } else {
            "Ocean"
        };
        return join_hierarchy(&[WORLD, hemisphere, land_ocean], sep);
    }

    join_hierarchy(&[WORLD, magicc_region], sep)
}

/// MAGICC region -> OpenSCM region, or the reverse for `Direction::Inverse`.
///
/// The inverse is not a pure inverse: `GLOBAL`, `NH-OCEAN` and the other
/// duplicate spellings only appear in the forward table.
pub fn magicc_region_to_openscm_region_mapping(
    sep: &str,
    direction: Direction,
) -> ReplacementDictionary {
    let forward: ReplacementDictionary = MAGICC_REGIONS
        .iter()
        .map(|&region| (region, openscm_region(region, sep)))
        .collect();

    let mapping = match direction {
        Direction::Forward => forward,
        Direction::Inverse => forward.inverted(),
    };
    debug!(?direction, entries = mapping.len(), "built region mapping");
    mapping
}
