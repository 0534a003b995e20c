// Copyright 2021 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Literal, order-dependent string replacement that avoids partially
//! rewriting a longer token when a shorter rule key is a substring of it.
//!
//! The classic failure is a table containing both `OC -> oc` and
//! `NMVOC -> nmvoc`: naively applying `OC` first turns `NMVOC` into `NMVoc`,
//! and the `NMVOC` rule never fires. Before any rule is applied we record
//! every such containment (an "edge case"), and a rule whose key is the short
//! side of an edge case is skipped for a given string while the longer key is
//! still present in it.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::common::Direction;
use crate::dictionary::ReplacementDictionary;

/// A dictionary compiled together with its edge cases, ready to be applied
/// to any number of inputs.
#[derive(Clone, Debug)]
pub struct Replacer {
    rules: ReplacementDictionary,
    // longer key -> shorter key contained in it
    edge_cases: HashMap<String, String>,
    edge_values: HashSet<String>,
}

impl Replacer {
    pub fn new(rules: ReplacementDictionary) -> Self {
        let edge_cases = find_edge_cases(&rules);
        let edge_values = edge_cases.values().cloned().collect();
        debug!(
            rules = rules.len(),
            edge_cases = edge_cases.len(),
            "compiled replacement rules"
        );
        Replacer {
            rules,
            edge_cases,
            edge_values,
        }
    }

    pub fn rules(&self) -> &ReplacementDictionary {
        &self.rules
    }

    pub fn edge_cases(&self) -> &HashMap<String, String> {
        &self.edge_cases
    }

    /// Apply every rule, in order, to `input`.
    pub fn replace_str(&self, input: &str) -> String {
        let mut current = input.to_owned();
        for (old, new) in self.rules.iter() {
            if let Some(replaced) = self.careful_replacement(&current, old, new) {
                current = replaced;
            }
        }
        current
    }

    pub fn replace<I: Replace + ?Sized>(&self, input: &I) -> I::Output {
        input.replace_with(self)
    }

    // None when the rule leaves `input` as it is
    fn careful_replacement(&self, input: &str, old: &str, new: &str) -> Option<String> {
        if !input.contains(old) {
            return None;
        }
        if self.edge_values.contains(old) && self.would_clobber(input, old) {
            return None;
        }
        Some(input.replace(old, new))
    }

    fn would_clobber(&self, input: &str, old: &str) -> bool {
        self.edge_cases.iter().any(|(full, sub)| {
            input.contains(full.as_str())
                && old.contains(sub.as_str())
                && !old.contains(full.as_str())
        })
    }
}

impl From<ReplacementDictionary> for Replacer {
    fn from(rules: ReplacementDictionary) -> Self {
        Replacer::new(rules)
    }
}

/// For every key `r` and every key `k` at or after `r`'s position, record
/// `k -> r` when `r` is a proper substring of `k`. A later `r` overwrites an
/// earlier one for the same `k`.
pub fn find_edge_cases(rules: &ReplacementDictionary) -> HashMap<String, String> {
    let keys: Vec<&str> = rules.keys().collect();
    let mut edge_cases = HashMap::new();
    for (j, r) in keys.iter().enumerate() {
        for k in keys[j..].iter() {
            if k.contains(r) && r != k {
                edge_cases.insert((*k).to_owned(), (*r).to_owned());
            }
        }
    }
    edge_cases
}

/// Inputs that can be rewritten by a [`Replacer`]: a single string maps to a
/// string, a list of strings maps to a list of the same length and order.
pub trait Replace {
    type Output;

    fn replace_with(&self, replacer: &Replacer) -> Self::Output;
}

impl Replace for str {
    type Output = String;

    fn replace_with(&self, replacer: &Replacer) -> String {
        replacer.replace_str(self)
    }
}

impl Replace for String {
    type Output = String;

    fn replace_with(&self, replacer: &Replacer) -> String {
        replacer.replace_str(self)
    }
}

impl<S: AsRef<str>> Replace for [S] {
    type Output = Vec<String>;

    fn replace_with(&self, replacer: &Replacer) -> Vec<String> {
        self.iter().map(|s| replacer.replace_str(s.as_ref())).collect()
    }
}

impl<S: AsRef<str>> Replace for Vec<S> {
    type Output = Vec<String>;

    fn replace_with(&self, replacer: &Replacer) -> Vec<String> {
        self.as_slice().replace_with(replacer)
    }
}

/// Rewrite `input` using `dictionary`, or its first-wins inverse.
///
/// This compiles the dictionary on every call; hold on to a [`Replacer`]
/// (or use [`crate::Definitions`]) when converting repeatedly.
pub fn apply<I: Replace + ?Sized>(
    input: &I,
    dictionary: &ReplacementDictionary,
    direction: Direction,
) -> I::Output {
    let rules = match direction {
        Direction::Forward => dictionary.clone(),
        Direction::Inverse => dictionary.inverted(),
    };
    Replacer::new(rules).replace(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(pairs: &[(&str, &str)]) -> ReplacementDictionary {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_substring_key_is_not_partially_replaced() {
        let rules = dict(&[("OC", "oc"), ("NMVOC", "nmvoc")]);
        assert_eq!("nmvoc", apply("NMVOC", &rules, Direction::Forward));
        assert_eq!("oc", apply("OC", &rules, Direction::Forward));
    }

    #[test]
    fn test_edge_cases_found() {
        let rules = dict(&[("OC", "oc"), ("NMVOC", "nmvoc"), ("BC", "bc")]);
        let edge_cases = find_edge_cases(&rules);
        assert_eq!(1, edge_cases.len());
        assert_eq!(Some(&"OC".to_owned()), edge_cases.get("NMVOC"));
    }

    #[test]
    fn test_edge_cases_only_look_forward() {
        // the longer key comes first, so there is nothing to guard against:
        // it is replaced before the shorter key is ever tried
        let rules = dict(&[("NMVOC", "nmvoc"), ("OC", "oc")]);
        assert!(find_edge_cases(&rules).is_empty());
        assert_eq!("nmvoc", apply("NMVOC", &rules, Direction::Forward));
    }

    #[test]
    fn test_later_substring_overwrites_edge_case() {
        let rules = dict(&[("L1", "a"), ("L10", "b"), ("L100", "c")]);
        let edge_cases = find_edge_cases(&rules);
        assert_eq!(Some(&"L1".to_owned()), edge_cases.get("L10"));
        assert_eq!(Some(&"L10".to_owned()), edge_cases.get("L100"));

        assert_eq!("a", apply("L1", &rules, Direction::Forward));
        assert_eq!("b", apply("L10", &rules, Direction::Forward));
        assert_eq!("c", apply("L100", &rules, Direction::Forward));
    }

    #[test]
    fn test_all_occurrences_replaced() {
        let rules = dict(&[("SOX", "SOx")]);
        assert_eq!(
            "SOx and SOx",
            apply("SOX and SOX", &rules, Direction::Forward)
        );
    }

    #[test]
    fn test_unknown_token_unchanged() {
        let rules = dict(&[("OC", "oc"), ("NMVOC", "nmvoc")]);
        assert_eq!(
            "UNKNOWN_TOKEN",
            apply("UNKNOWN_TOKEN", &rules, Direction::Forward)
        );
        assert_eq!(
            "UNKNOWN_TOKEN",
            apply("UNKNOWN_TOKEN", &rules, Direction::Inverse)
        );
    }

    #[test]
    fn test_inverse() {
        let rules = dict(&[("WORLD", "World"), ("GLOBAL", "World"), ("NH", "World|NH")]);
        assert_eq!("WORLD", apply("World", &rules, Direction::Inverse));
        assert_eq!("NH", apply("World|NH", &rules, Direction::Inverse));
    }

    #[test]
    fn test_list_keeps_shape() {
        let rules = dict(&[("A", "a"), ("B", "b")]);
        let input = vec!["A".to_owned(), "B".to_owned(), "C".to_owned()];
        let output = apply(&input, &rules, Direction::Forward);
        assert_eq!(vec!["a", "b", "C"], output);
        assert_eq!(vec!["A", "B", "C"], input);

        let empty: [&str; 0] = [];
        assert!(apply(&empty[..], &rules, Direction::Forward).is_empty());
    }

    #[test]
    fn test_replacer_reusable() {
        let replacer = Replacer::from(dict(&[("OC", "oc"), ("NMVOC", "nmvoc")]));
        assert_eq!("nmvoc", replacer.replace("NMVOC"));
        assert_eq!(vec!["oc", "nmvoc"], replacer.replace(&["OC", "NMVOC"][..]));
        assert_eq!(2, replacer.rules().len());
        assert_eq!(1, replacer.edge_cases().len());
    }
}
