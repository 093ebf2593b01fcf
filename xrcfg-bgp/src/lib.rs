//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! IOS-XR BGP configuration entities.
//!
//! Desired-state BGP configuration (router, address-families, neighbors and
//! their nested objects) is turned into the ordered list of IOS-XR commands
//! that converges a device's running configuration.

pub mod af;
pub mod configuration;
pub mod neighbor;
pub mod network;
pub mod redistribute;
pub mod router;
pub mod timer;

use tracing::debug_span;
use xrcfg_render::command::{self, Command};
use xrcfg_render::render::{self, RenderCxt};
use xrcfg_render::{Error, Instance, Section};

pub use crate::configuration::REGISTRY;

// Builds a desired-state instance of the given BGP entity type.
pub fn instance(
    entity: &str,
    data: &serde_json::Value,
) -> Result<Instance, Error> {
    Instance::from_json(&REGISTRY, entity, data)
}

// Renders the commands converging the given entity, looking up the enclosing
// BGP AS number in the supplied configuration when one is needed.
pub fn render(
    instance: &Instance,
    config: Option<&str>,
) -> Result<Vec<String>, Error> {
    render_commands(instance, config, None)
        .map(|commands| command::flatten(&commands))
}

// Same as `render`, but with an explicit enclosing BGP AS number.
pub fn render_under(
    instance: &Instance,
    config: Option<&str>,
    bgp_as: u32,
) -> Result<Vec<String>, Error> {
    render_commands(instance, config, Some(bgp_as))
        .map(|commands| command::flatten(&commands))
}

// Renders the commands converging the given entity as a command tree.
pub fn render_commands(
    instance: &Instance,
    config: Option<&str>,
    bgp_as: Option<u32>,
) -> Result<Vec<Command>, Error> {
    let span = debug_span!("bgp", entity = %instance.entity());
    let _span_guard = span.enter();

    let def = REGISTRY.get(instance.entity())?;
    let config = config.map(Section::parse);
    let mut cxt = RenderCxt::new(&REGISTRY, config.as_ref());
    if let Some(bgp_as) = bgp_as {
        if def.ancestor.is_some() {
            cxt = cxt.with_parents(vec![router::context(bgp_as)]);
        }
    }

    render::render(&cxt, instance)
}
