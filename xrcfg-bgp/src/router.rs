//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::sync::LazyLock as Lazy;

use regex::Regex;
use xrcfg_render::{Instance, Scope, Section, Value};

pub const ENTITY: &str = "router";

// Name of the ancestor context other BGP entities are nested in.
pub const ANCESTOR: &str = "router bgp";

// AS numbers are accepted in both asplain and asdot notation.
static ROUTER_BGP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^router bgp (\d+(?:\.\d+)?)$").unwrap()
});

// ===== global functions =====

pub fn context(bgp_as: impl std::fmt::Display) -> String {
    format!("router bgp {bgp_as}")
}

pub(crate) fn instance_context(instance: &Instance) -> String {
    context(instance.get_int("bgp_as").unwrap_or_default())
}

// Returns the AS number of the BGP instance configured at the top level of
// the given configuration.
pub fn find_bgp_as(config: &Section) -> Option<String> {
    config.children().find_map(|line| {
        ROUTER_BGP_RE
            .captures(line)
            .map(|captures| captures[1].to_owned())
    })
}

pub(crate) fn find_router_context(config: &Section) -> Option<String> {
    find_bgp_as(config).map(context)
}

pub(crate) fn render_router_id(
    value: &Value,
    scope: Scope<'_>,
) -> Option<String> {
    scope.missing(format!("bgp router-id {value}"))
}

pub(crate) fn render_log_neighbor_changes(
    value: &Value,
    scope: Scope<'_>,
) -> Option<String> {
    let command = match *value.as_bool()? {
        true => "bgp log neighbor changes detail",
        false => "bgp log neighbor changes disable",
    };
    scope.missing(command.to_owned())
}

// ===== unit tests =====
