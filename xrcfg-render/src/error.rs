//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::{warn, warn_span};

// Rendering errors.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    UnknownEntityType(String),
    MissingAncestorContext(&'static str, &'static str),
    InvalidAttributeValue(&'static str, String, AttrError),
}

// Reason why a desired-state attribute was rejected.
#[derive(Debug, Eq, PartialEq)]
pub enum AttrError {
    Unknown,
    Missing,
    WrongType(&'static str),
    OutOfRange(i64, i64, i64),
    InvalidChoice(String, &'static [&'static str]),
    InvalidPrefix(String),
    InvalidState(String),
}

// ===== impl Error =====

impl Error {
    pub fn log(&self) {
        match self {
            Error::UnknownEntityType(name) => {
                warn!(%name, "{}", self);
            }
            Error::MissingAncestorContext(entity, ancestor) => {
                warn_span!("entity", name = %entity).in_scope(|| {
                    warn!(%ancestor, "{}", self);
                });
            }
            Error::InvalidAttributeValue(entity, attr, error) => {
                warn_span!("entity", name = %entity).in_scope(|| {
                    warn!(%attr, %error, "{}", self);
                });
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownEntityType(name) => {
                write!(f, "unknown entity type: {name}")
            }
            Error::MissingAncestorContext(entity, ancestor) => {
                write!(
                    f,
                    "can't build context path for {entity}: {ancestor} not found in configuration"
                )
            }
            Error::InvalidAttributeValue(entity, attr, error) => {
                write!(f, "invalid value for {entity} attribute {attr}: {error}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidAttributeValue(_, _, error) => Some(error),
            _ => None,
        }
    }
}

// ===== impl AttrError =====

impl std::fmt::Display for AttrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrError::Unknown => write!(f, "unsupported attribute"),
            AttrError::Missing => write!(f, "missing required attribute"),
            AttrError::WrongType(expected) => {
                write!(f, "expected {expected}")
            }
            AttrError::OutOfRange(value, min, max) => {
                write!(f, "{value} is out of range ({min}..={max})")
            }
            AttrError::InvalidChoice(value, choices) => {
                write!(f, "'{value}' is not one of {}", choices.join(", "))
            }
            AttrError::InvalidPrefix(value) => {
                write!(f, "'{value}' is not a valid IP prefix")
            }
            AttrError::InvalidState(value) => {
                write!(f, "'{value}' is not one of present, absent")
            }
        }
    }
}

impl std::error::Error for AttrError {}
