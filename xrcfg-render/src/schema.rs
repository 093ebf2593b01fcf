//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use crate::value::Value;

// Attribute value kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttrKind {
    Str,
    Int { min: i64, max: i64 },
    Bool,
    Choice(&'static [&'static str]),
    Prefix,
    List(&'static str),
    Nested(&'static str),
}

// Attribute declaration.
#[derive(Clone, Debug)]
pub struct Attr {
    pub name: &'static str,
    pub kind: AttrKind,
    pub required: bool,
    pub default: Option<Value>,
    pub no_log: bool,
}

// Ordered set of attribute declarations of an entity type.
#[derive(Debug, Default)]
pub struct Schema {
    attrs: Vec<Attr>,
    identifier: Vec<&'static str>,
}

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

// ===== impl AttrKind =====

impl AttrKind {
    pub const UINT8: AttrKind = AttrKind::Int { min: 0, max: 255 };
    pub const UINT16: AttrKind = AttrKind::Int { min: 0, max: 65535 };
    pub const UINT32: AttrKind = AttrKind::Int {
        min: 0,
        max: 4294967295,
    };

    // Returns the name of the entity type this attribute instantiates, if
    // any.
    pub fn entity(&self) -> Option<&'static str> {
        match self {
            AttrKind::List(entity) | AttrKind::Nested(entity) => Some(entity),
            _ => None,
        }
    }

    pub(crate) fn describe(&self) -> &'static str {
        match self {
            AttrKind::Str => "a string",
            AttrKind::Int { .. } => "an integer",
            AttrKind::Bool => "a boolean",
            AttrKind::Choice(..) => "a string",
            AttrKind::Prefix => "an IP prefix",
            AttrKind::List(..) => "a list of objects",
            AttrKind::Nested(..) => "an object",
        }
    }
}

// ===== impl Attr =====

impl Attr {
    pub fn new(name: &'static str, kind: AttrKind) -> Attr {
        Attr {
            name,
            kind,
            required: false,
            default: None,
            no_log: false,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Attr {
        self.required = true;
        self
    }

    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Attr {
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn no_log(mut self) -> Attr {
        self.no_log = true;
        self
    }
}

// ===== impl Schema =====

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    // Attribute declarations in declaration order.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&Attr> {
        self.attrs.iter().find(|attr| attr.name == name)
    }

    pub fn identifier(&self) -> &[&'static str] {
        &self.identifier
    }

    pub fn is_identifier(&self, name: &str) -> bool {
        self.identifier.contains(&name)
    }
}

// ===== impl SchemaBuilder =====

impl SchemaBuilder {
    #[must_use]
    pub fn attr(mut self, attr: Attr) -> Self {
        self.schema.attrs.push(attr);
        self
    }

    #[must_use]
    pub fn identifier(mut self, names: &[&'static str]) -> Self {
        self.schema.identifier = names.to_vec();
        self
    }

    #[must_use]
    pub fn build(self) -> Schema {
        self.schema
    }
}
