// Copyright 2021 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Ordered old -> new name tables.
//!
//! Order is part of the contract: rules are applied in insertion order, edge
//! cases are detected by position, and when several keys share a value the
//! first one inserted is the one that survives inversion.

use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplacementDictionary {
    entries: Vec<(String, String)>,
    offsets: HashMap<String, usize>,
}

impl ReplacementDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule. Re-inserting an existing key replaces its value but
    /// keeps the key's original position; the previous value is returned.
    pub(crate) fn insert(&mut self, old: String, new: String) -> Option<String> {
        if let Some(&off) = self.offsets.get(&old) {
            return Some(std::mem::replace(&mut self.entries[off].1, new));
        }
        self.offsets.insert(old.clone(), self.entries.len());
        self.entries.push((old, new));
        None
    }

    pub fn get(&self, old: &str) -> Option<&str> {
        self.offsets
            .get(old)
            .map(|&off| self.entries[off].1.as_str())
    }

    pub fn contains_key(&self, old: &str) -> bool {
        self.offsets.contains_key(old)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    /// Swap keys and values. When several keys map to the same value only
    /// the first of them (in insertion order) is kept, so the inverse of a
    /// collapsing table is lossy but deterministic.
    pub fn inverted(&self) -> ReplacementDictionary {
        let mut inverse = ReplacementDictionary::new();
        for (old, new) in self.entries.iter() {
            if inverse.contains_key(new) {
                continue;
            }
            inverse.insert(new.clone(), old.clone());
        }
        inverse
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplacementDictionary {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dict = ReplacementDictionary::new();
        for (old, new) in iter {
            dict.insert(old.into(), new.into());
        }
        dict
    }
}
