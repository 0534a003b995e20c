// Copyright 2021 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fmt;
use std::{error, result};

/// String used to separate levels in OpenSCM data hierarchies, shared with pyam.
pub const DATA_HIERARCHY_SEPARATOR: &str = "|";

/// Which way a mapping is applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

impl Direction {
    pub fn is_inverse(self) -> bool {
        self == Direction::Inverse
    }
}

impl From<bool> for Direction {
    fn from(inverse: bool) -> Self {
        if inverse {
            Direction::Inverse
        } else {
            Direction::Forward
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoError, // will never be produced
    UnknownSuffix,
    BadCatalogEntry,
    DuplicateVariable,
    CatalogParse,
    Io,
    UnknownEmissionsCode,
    UnknownMapping,
    BadSeparator,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorCode::*;
        let name = match self {
            NoError => "no_error",
            UnknownSuffix => "unknown_suffix",
            BadCatalogEntry => "bad_catalog_entry",
            DuplicateVariable => "duplicate_variable",
            CatalogParse => "catalog_parse",
            Io => "io",
            UnknownEmissionsCode => "unknown_emissions_code",
            UnknownMapping => "unknown_mapping",
            BadSeparator => "bad_separator",
        };

        write!(f, "{name}")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Catalog,
    Mapping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    pub details: Option<String>,
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        let code = if err.is_io_error() {
            ErrorCode::Io
        } else {
            ErrorCode::CatalogParse
        };
        Error {
            kind: ErrorKind::Catalog,
            code,
            details: Some(err.to_string()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Catalog,
            code: ErrorCode::Io,
            details: Some(err.to_string()),
        }
    }
}

impl Error {
    pub fn new(kind: ErrorKind, code: ErrorCode, details: Option<String>) -> Self {
        Error {
            kind,
            code,
            details,
        }
    }

    pub fn get_details(&self) -> Option<String> {
        self.details.clone()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Catalog => "CatalogError",
            ErrorKind::Mapping => "MappingError",
        };
        match self.details {
            Some(ref details) => write!(f, "{}{{{}: {}}}", kind, self.code, details),
            None => write!(f, "{}{{{}}}", kind, self.code),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

#[macro_export]
macro_rules! catalog_err(
    ($code:tt, $str:expr) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Catalog, ErrorCode::$code, Some($str)))
    }}
);

#[macro_export]
macro_rules! mapping_err(
    ($code:tt, $str:expr) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Mapping, ErrorCode::$code, Some($str)))
    }}
);

/// Joins hierarchy levels with `sep`, e.g. `["World", "Bunkers"]` -> `World|Bunkers`.
pub fn join_hierarchy(parts: &[&str], sep: &str) -> String {
    parts.join(sep)
}

#[test]
fn test_error_display() {
    let err = Error::new(
        ErrorKind::Mapping,
        ErrorCode::UnknownSuffix,
        Some("CO2I_FOO".to_owned()),
    );
    assert_eq!("MappingError{unknown_suffix: CO2I_FOO}", err.to_string());

    let err = Error::new(ErrorKind::Catalog, ErrorCode::Io, None);
    assert_eq!("CatalogError{io}", err.to_string());
}

#[test]
fn test_direction_from_bool() {
    assert_eq!(Direction::Inverse, Direction::from(true));
    assert_eq!(Direction::Forward, Direction::from(false));
    assert_eq!(Direction::Forward, Direction::default());
    assert!(Direction::Inverse.is_inverse());
}

#[test]
fn test_join_hierarchy() {
    assert_eq!("World|Bunkers", join_hierarchy(&["World", "Bunkers"], "|"));
    assert_eq!("World::Bunkers", join_hierarchy(&["World", "Bunkers"], "::"));
    assert_eq!("World", join_hierarchy(&["World"], "|"));
}
