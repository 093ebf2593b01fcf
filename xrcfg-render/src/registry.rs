//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::HashMap;

use crate::error::{AttrError, Error};
use crate::render::Scope;
use crate::schema::{AttrKind, Schema};
use crate::section::Section;
use crate::value::{Instance, Value};

// How an entity is laid out in the configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityKind {
    // Opens a nested context holding subcommands.
    Block,
    // Single command line inside the parent context.
    Line,
}

// Ancestor context an entity needs when rendered on its own.
#[derive(Clone, Copy, Debug)]
pub struct Ancestor {
    pub name: &'static str,
    pub lookup: AncestorLookup,
}

pub struct EntityDef {
    pub name: &'static str,
    pub kind: EntityKind,
    pub schema: Schema,
    pub context: ContextFn,
    pub ancestor: Option<Ancestor>,
    pub leading: Option<&'static str>,
    pub renderers: HashMap<&'static str, AttrRenderer>,
    pub validate: Option<ValidationCallback>,
    pub lookup: Option<LineLookup>,
}

pub struct Registry(HashMap<&'static str, EntityDef>);

pub struct RegistryBuilder {
    entity: Option<&'static str>,
    registry: Registry,
}

//
// Useful type definition(s).
//

// Builds the context line of an entity (or the whole command line, for line
// entities).
pub type ContextFn = fn(&Instance) -> String;

// Finds the ancestor context line in a configuration snapshot.
pub type AncestorLookup = fn(&Section) -> Option<String>;

// Renders a scalar attribute, returning `None` when the command is already in
// effect.
pub type AttrRenderer = fn(&Value, Scope<'_>) -> Option<String>;

// Checks whether a line entity is in effect in the given scope, for lines
// that can't be matched verbatim.
pub type LineLookup = fn(&Instance, &Section) -> bool;

// Checks constraints spanning more than one attribute of a newly built
// instance.
pub type ValidationCallback =
    fn(&Instance) -> Result<(), (&'static str, AttrError)>;

// ===== impl EntityDef =====

impl EntityDef {
    fn new(name: &'static str, kind: EntityKind, context: ContextFn) -> Self {
        EntityDef {
            name,
            kind,
            schema: Schema::default(),
            context,
            ancestor: None,
            leading: None,
            renderers: HashMap::new(),
            validate: None,
            lookup: None,
        }
    }

    pub fn renderer_for(&self, attr: &str) -> Option<&AttrRenderer> {
        self.renderers.get(attr)
    }
}

impl std::fmt::Debug for EntityDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityDef")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("schema", &self.schema)
            .field("ancestor", &self.ancestor.map(|ancestor| ancestor.name))
            .field("leading", &self.leading)
            .field("renderers", &self.renderers.keys())
            .finish()
    }
}

// ===== impl Registry =====

impl Registry {
    pub fn get(&self, entity: &str) -> Result<&EntityDef, Error> {
        self.0
            .get(entity)
            .ok_or_else(|| Error::UnknownEntityType(entity.to_owned()))
    }

    pub fn schema_for(&self, entity: &str) -> Result<&Schema, Error> {
        self.get(entity).map(|def| &def.schema)
    }

    pub fn renderer_for(
        &self,
        entity: &str,
        attr: &str,
    ) -> Result<Option<&AttrRenderer>, Error> {
        self.get(entity).map(|def| def.renderer_for(attr))
    }

    pub fn entities(&self) -> Vec<&'static str> {
        let mut entities = self.0.keys().copied().collect::<Vec<_>>();
        entities.sort_unstable();
        entities
    }

    // Cross-checks entity definitions against their schemas.
    fn check(&self) -> Result<(), String> {
        for def in self.0.values() {
            for name in def.schema.identifier() {
                if def.schema.attr(name).is_none() {
                    return Err(format!(
                        "{}: identifier {name} is not a declared attribute",
                        def.name
                    ));
                }
            }
            if def.lookup.is_some() && def.kind != EntityKind::Line {
                return Err(format!(
                    "{}: line lookup for a block entity",
                    def.name
                ));
            }
            if let Some(name) = def.leading {
                if !def.renderers.contains_key(name) {
                    return Err(format!(
                        "{}: leading attribute {name} has no renderer",
                        def.name
                    ));
                }
            }
            for name in def.renderers.keys() {
                match def.schema.attr(name).map(|attr| attr.kind) {
                    None => {
                        return Err(format!(
                            "{}: renderer for undeclared attribute {name}",
                            def.name
                        ));
                    }
                    Some(AttrKind::List(..) | AttrKind::Nested(..)) => {
                        return Err(format!(
                            "{}: renderer for entity attribute {name}",
                            def.name
                        ));
                    }
                    Some(_) => (),
                }
            }
            for attr in def.schema.attrs() {
                let Some(child) = attr.kind.entity() else {
                    continue;
                };
                if !self.0.contains_key(child) {
                    return Err(format!(
                        "{}: attribute {} refers to unknown entity {child}",
                        def.name, attr.name
                    ));
                }
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Registry({:?})", self.entities())
    }
}

// ===== impl RegistryBuilder =====

impl RegistryBuilder {
    #[must_use]
    fn entity(
        mut self,
        name: &'static str,
        kind: EntityKind,
        context: ContextFn,
    ) -> Self {
        self.registry
            .0
            .insert(name, EntityDef::new(name, kind, context));
        self.entity = Some(name);
        self
    }

    fn current(&mut self) -> &mut EntityDef {
        let name = self.entity.expect("no entity selected");
        self.registry.0.get_mut(name).unwrap()
    }

    #[must_use]
    pub fn block(self, name: &'static str, context: ContextFn) -> Self {
        self.entity(name, EntityKind::Block, context)
    }

    #[must_use]
    pub fn line(self, name: &'static str, context: ContextFn) -> Self {
        self.entity(name, EntityKind::Line, context)
    }

    #[must_use]
    pub fn schema(mut self, schema: Schema) -> Self {
        self.current().schema = schema;
        self
    }

    #[must_use]
    pub fn ancestor(
        mut self,
        name: &'static str,
        lookup: AncestorLookup,
    ) -> Self {
        self.current().ancestor = Some(Ancestor { name, lookup });
        self
    }

    #[must_use]
    pub fn leading(mut self, attr: &'static str) -> Self {
        self.current().leading = Some(attr);
        self
    }

    #[must_use]
    pub fn renderer(mut self, attr: &'static str, cb: AttrRenderer) -> Self {
        self.current().renderers.insert(attr, cb);
        self
    }

    #[must_use]
    pub fn validate(mut self, cb: ValidationCallback) -> Self {
        self.current().validate = Some(cb);
        self
    }

    #[must_use]
    pub fn lookup(mut self, cb: LineLookup) -> Self {
        self.current().lookup = Some(cb);
        self
    }

    // Builds the registry.
    //
    // Panics if an entity definition is inconsistent with its schema, since
    // the registry is a static table.
    #[must_use]
    pub fn build(self) -> Registry {
        if let Err(error) = self.registry.check() {
            panic!("invalid entity registry: {error}");
        }
        self.registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        RegistryBuilder {
            entity: None,
            registry: Registry(HashMap::new()),
        }
    }
}

// ===== unit tests =====
