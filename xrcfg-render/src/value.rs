//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;

use enum_as_inner::EnumAsInner;
use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::error::{AttrError, Error};
use crate::registry::Registry;
use crate::schema::{Attr, AttrKind};

const STATE_KEY: &str = "state";

// Life-cycle state of a desired-state entity.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Present,
    Absent,
}

// Attribute value.
#[derive(Clone, Debug, EnumAsInner, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<Instance>),
    Nested(Box<Instance>),
}

// Desired-state entity, validated against its schema.
//
// Instances are only created through `Instance::from_json` and can't be
// modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    entity: &'static str,
    state: State,
    values: BTreeMap<&'static str, Value>,
}

// ===== impl State =====

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Present => write!(f, "present"),
            State::Absent => write!(f, "absent"),
        }
    }
}

// ===== impl Value =====

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Str(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::List(entries) => write!(f, "[{} entries]", entries.len()),
            Value::Nested(instance) => write!(f, "{{{}}}", instance.entity),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::Str(value.to_owned())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Value {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

// ===== impl Instance =====

impl Instance {
    // Builds an instance of the given entity type out of caller-supplied JSON
    // data, validating every attribute against the entity schema.
    //
    // Schema defaults are filled in. Attributes set to `null` are treated as
    // unset. Required attributes other than the identifier are only enforced
    // for entities that are meant to be present.
    pub fn from_json(
        registry: &Registry,
        entity: &str,
        data: &Json,
    ) -> Result<Instance, Error> {
        let def = registry.get(entity)?;
        let object = data.as_object().ok_or_else(|| {
            Error::InvalidAttributeValue(
                def.name,
                def.name.to_owned(),
                AttrError::WrongType("an object"),
            )
        })?;

        let state = match object.get(STATE_KEY) {
            None | Some(Json::Null) => State::default(),
            Some(value) => State::deserialize(value).map_err(|_| {
                Error::InvalidAttributeValue(
                    def.name,
                    STATE_KEY.to_owned(),
                    AttrError::InvalidState(
                        value
                            .as_str()
                            .map(str::to_owned)
                            .unwrap_or_else(|| value.to_string()),
                    ),
                )
            })?,
        };

        let mut values = BTreeMap::new();
        for (name, data) in object {
            if name == STATE_KEY || data.is_null() {
                continue;
            }
            let attr = def.schema.attr(name).ok_or_else(|| {
                Error::InvalidAttributeValue(
                    def.name,
                    name.clone(),
                    AttrError::Unknown,
                )
            })?;
            let value = parse_value(registry, def.name, attr, data)?;
            values.insert(attr.name, value);
        }

        for attr in def.schema.attrs() {
            if values.contains_key(attr.name) {
                continue;
            }
            if let Some(default) = &attr.default {
                values.insert(attr.name, default.clone());
                continue;
            }
            let required = def.schema.is_identifier(attr.name)
                || (attr.required && state == State::Present);
            if required {
                return Err(Error::InvalidAttributeValue(
                    def.name,
                    attr.name.to_owned(),
                    AttrError::Missing,
                ));
            }
        }

        let instance = Instance {
            entity: def.name,
            state,
            values,
        };
        if let Some(validate) = def.validate {
            validate(&instance).map_err(|(attr, error)| {
                Error::InvalidAttributeValue(def.name, attr.to_owned(), error)
            })?;
        }

        Ok(instance)
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn get(&self, attr: &str) -> Option<&Value> {
        self.values.get(attr)
    }

    pub fn get_str(&self, attr: &str) -> Option<&str> {
        self.get(attr)
            .and_then(Value::as_str)
            .map(String::as_str)
    }

    pub fn get_int(&self, attr: &str) -> Option<i64> {
        self.get(attr).and_then(Value::as_int).copied()
    }

    pub fn contains(&self, attr: &str) -> bool {
        self.values.contains_key(attr)
    }
}

// ===== helper functions =====

fn parse_value(
    registry: &Registry,
    entity: &'static str,
    attr: &Attr,
    data: &Json,
) -> Result<Value, Error> {
    let invalid = |error| {
        Error::InvalidAttributeValue(entity, attr.name.to_owned(), error)
    };
    let wrong_type = || invalid(AttrError::WrongType(attr.kind.describe()));

    match attr.kind {
        AttrKind::Str => match data {
            Json::String(value) => Ok(Value::Str(value.clone())),
            Json::Number(value) => Ok(Value::Str(value.to_string())),
            _ => Err(wrong_type()),
        },
        AttrKind::Int { min, max } => {
            let value = match data {
                Json::Number(value) => value.as_i64(),
                Json::String(value) => value.trim().parse::<i64>().ok(),
                _ => None,
            }
            .ok_or_else(wrong_type)?;
            if value < min || value > max {
                return Err(invalid(AttrError::OutOfRange(value, min, max)));
            }
            Ok(Value::Int(value))
        }
        AttrKind::Bool => {
            let value = match data {
                Json::Bool(value) => Some(*value),
                Json::String(value) => {
                    match value.to_ascii_lowercase().as_str() {
                        "yes" | "on" | "true" => Some(true),
                        "no" | "off" | "false" => Some(false),
                        _ => None,
                    }
                }
                _ => None,
            }
            .ok_or_else(wrong_type)?;
            Ok(Value::Bool(value))
        }
        AttrKind::Choice(choices) => {
            let value = data.as_str().ok_or_else(wrong_type)?;
            if !choices.contains(&value) {
                return Err(invalid(AttrError::InvalidChoice(
                    value.to_owned(),
                    choices,
                )));
            }
            Ok(Value::Str(value.to_owned()))
        }
        AttrKind::Prefix => {
            let value = data.as_str().ok_or_else(wrong_type)?;
            if value.parse::<IpNetwork>().is_err() {
                return Err(invalid(AttrError::InvalidPrefix(value.to_owned())));
            }
            Ok(Value::Str(value.to_owned()))
        }
        AttrKind::List(child) => {
            let entries = data.as_array().ok_or_else(wrong_type)?;
            entries
                .iter()
                .map(|entry| Instance::from_json(registry, child, entry))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List)
        }
        AttrKind::Nested(child) => {
            if !data.is_object() {
                return Err(wrong_type());
            }
            let instance = Instance::from_json(registry, child, data)?;
            Ok(Value::Nested(Box::new(instance)))
        }
    }
}

// ===== unit tests =====
