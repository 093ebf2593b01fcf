//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use derive_new::new;

use crate::command::{self, Command};
use crate::debug::Debug;
use crate::error::Error;
use crate::registry::{EntityDef, EntityKind, Registry};
use crate::schema::{Attr, AttrKind};
use crate::section::Section;
use crate::value::{Instance, State, Value};

// Rendering context.
//
// `config` is the configuration snapshot the context path is resolved
// against, or `None` when the device configuration wasn't fetched. `parents`
// is the context path leading to the entity being rendered. Nested entities
// are scoped relative to `parent_scope`, the already resolved scope of the
// enclosing entity.
#[derive(Clone, Debug, new)]
pub struct RenderCxt<'a> {
    pub registry: &'a Registry,
    pub config: Option<&'a Section>,
    #[new(default)]
    pub parents: Vec<String>,
    #[new(default)]
    parent_scope: Option<Scope<'a>>,
}

// View of the configuration scoped to an entity's context.
#[derive(Clone, Copy, Debug)]
pub enum Scope<'a> {
    // Configuration wasn't supplied.
    Unknown,
    // The context doesn't exist in the configuration.
    Missing,
    // The context exists.
    Found(&'a Section),
}

// ===== impl RenderCxt =====

impl<'a> RenderCxt<'a> {
    // Sets an explicit context path, bypassing ancestor lookups.
    #[must_use]
    pub fn with_parents(mut self, parents: Vec<String>) -> Self {
        self.parents = parents;
        self
    }

    // Returns the context of entities nested in the given scope.
    fn child<'b>(
        &self,
        parents: Vec<String>,
        scope: Scope<'b>,
    ) -> RenderCxt<'b>
    where
        'a: 'b,
    {
        RenderCxt {
            registry: self.registry,
            config: self.config,
            parents,
            parent_scope: Some(scope),
        }
    }

    // Resolves the scope of the given context path.
    fn section(&self, path: &[String]) -> Option<Option<Section>> {
        match self.parent_scope {
            // Only the last path element is relative to the parent scope.
            Some(scope) => scope.child(path.last()?),
            None => self.config.map(|config| config.extract(path)),
        }
    }
}

// ===== impl Scope =====

impl<'a> Scope<'a> {
    fn new(section: &'a Option<Option<Section>>) -> Self {
        match section {
            None => Scope::Unknown,
            Some(None) => Scope::Missing,
            Some(Some(section)) => Scope::Found(section),
        }
    }

    fn child(&self, context: &str) -> Option<Option<Section>> {
        match self {
            Scope::Unknown => None,
            Scope::Missing => Some(None),
            Scope::Found(section) => Some(section.child(context)),
        }
    }

    pub fn exists(&self) -> bool {
        matches!(self, Scope::Found(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Scope::Unknown)
    }

    // Checks whether the given command is already in effect.
    pub fn contains(&self, command: &str) -> bool {
        match self {
            Scope::Found(section) => section.contains(command),
            _ => false,
        }
    }

    // Returns the given command unless it's already in effect.
    pub fn missing(&self, command: String) -> Option<String> {
        if self.contains(&command) {
            Debug::CommandExists(&command).log();
            return None;
        }
        Some(command)
    }
}

// ===== global functions =====

// Renders the commands needed to converge the given entity.
pub fn render(
    cxt: &RenderCxt<'_>,
    instance: &Instance,
) -> Result<Vec<Command>, Error> {
    let def = cxt.registry.get(instance.entity())?;
    let context = (def.context)(instance);
    Debug::EntityRender(def.name, &context, instance.state()).log();

    let Some(parents) = resolve_parents(cxt, def, instance, &context)? else {
        return Ok(vec![]);
    };

    match def.kind {
        EntityKind::Block => render_block(cxt, def, instance, context, parents),
        EntityKind::Line => render_line(cxt, def, instance, context, parents),
    }
}

// Renders the given entity and flattens the result into CLI lines.
pub fn render_lines(
    cxt: &RenderCxt<'_>,
    instance: &Instance,
) -> Result<Vec<String>, Error> {
    render(cxt, instance).map(|commands| command::flatten(&commands))
}

// ===== helper functions =====

// Builds the context path leading to the entity.
//
// Returns `None` when the entity is meant to be absent and its ancestor
// context doesn't exist, in which case there's nothing to remove.
fn resolve_parents(
    cxt: &RenderCxt<'_>,
    def: &EntityDef,
    instance: &Instance,
    context: &str,
) -> Result<Option<Vec<String>>, Error> {
    if !cxt.parents.is_empty() {
        return Ok(Some(cxt.parents.clone()));
    }
    let (Some(config), Some(ancestor)) = (cxt.config, &def.ancestor) else {
        return Ok(Some(vec![]));
    };

    if let Some(line) = (ancestor.lookup)(config) {
        Debug::AncestorResolved(ancestor.name, &line).log();
        return Ok(Some(vec![line]));
    }

    // The supplied configuration might have been scoped already.
    if config.contains(context) {
        Debug::AncestorScoped(ancestor.name).log();
        return Ok(Some(vec![]));
    }

    match instance.state() {
        State::Present => {
            Err(Error::MissingAncestorContext(def.name, ancestor.name))
        }
        State::Absent => Ok(None),
    }
}

fn render_block(
    cxt: &RenderCxt<'_>,
    def: &EntityDef,
    instance: &Instance,
    context: String,
    parents: Vec<String>,
) -> Result<Vec<Command>, Error> {
    let mut path = parents;
    path.push(context.clone());
    let section = cxt.section(&path);
    let scope = Scope::new(&section);
    if let Scope::Missing = scope {
        Debug::SectionMissing(&path).log();
    }

    if instance.state() == State::Absent {
        let commands = if scope.exists() || scope.is_unknown() {
            vec![Command::Line(format!("no {context}"))]
        } else {
            vec![]
        };
        return Ok(commands);
    }

    let cxt = cxt.child(path, scope);
    let mut body = vec![];
    for attr in attrs_in_order(def) {
        let Some(value) = instance.get(attr.name) else {
            continue;
        };
        render_attr(&cxt, def, attr, value, scope, &mut body)?;
    }

    Ok(Command::assemble(context, body, scope.exists())
        .into_iter()
        .collect())
}

fn render_line(
    cxt: &RenderCxt<'_>,
    def: &EntityDef,
    instance: &Instance,
    line: String,
    parents: Vec<String>,
) -> Result<Vec<Command>, Error> {
    // Line entities live in the scope of their parent.
    let section;
    let scope = match cxt.parent_scope {
        Some(scope) => scope,
        None => {
            section = cxt.config.map(|config| config.extract(&parents));
            Scope::new(&section)
        }
    };

    let command = match instance.state() {
        State::Present => scope.missing(line),
        State::Absent => {
            let exists = match (scope, def.lookup) {
                (Scope::Found(section), Some(lookup)) => {
                    lookup(instance, section)
                }
                _ => scope.contains(&line),
            };
            (exists || scope.is_unknown()).then(|| format!("no {line}"))
        }
    };
    Ok(command.map(Command::Line).into_iter().collect())
}

fn render_attr(
    cxt: &RenderCxt<'_>,
    def: &EntityDef,
    attr: &Attr,
    value: &Value,
    scope: Scope<'_>,
    body: &mut Vec<Command>,
) -> Result<(), Error> {
    match (attr.kind, value) {
        (AttrKind::List(_), Value::List(entries)) => {
            for entry in entries {
                body.extend(render(cxt, entry)?);
            }
        }
        (AttrKind::Nested(_), Value::Nested(entry)) => {
            body.extend(render(cxt, entry)?);
        }
        _ => {
            // Identifier and context-only attributes have no renderer.
            let Some(renderer) = def.renderer_for(attr.name) else {
                return Ok(());
            };
            Debug::AttrRender(attr.name, value, attr.no_log).log();
            if let Some(command) = renderer(value, scope) {
                body.push(Command::Line(command));
            }
        }
    }

    Ok(())
}

// Returns the entity's attributes in rendering order: the leading attribute
// first, then all others in declaration order.
fn attrs_in_order(def: &EntityDef) -> impl Iterator<Item = &Attr> {
    let leading = def.leading.and_then(|name| def.schema.attr(name));
    leading.into_iter().chain(
        def.schema
            .attrs()
            .iter()
            .filter(move |attr| Some(attr.name) != def.leading),
    )
}

// ===== unit tests =====
