//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use xrcfg_render::{Instance, Scope, Value};

pub const ENTITY: &str = "neighbor";

// ===== global functions =====

pub(crate) fn context(instance: &Instance) -> String {
    format!("neighbor {}", instance.get_str("neighbor").unwrap_or_default())
}

pub(crate) fn render_remote_as(
    value: &Value,
    scope: Scope<'_>,
) -> Option<String> {
    scope.missing(format!("remote-as {value}"))
}

pub(crate) fn render_update_source(
    value: &Value,
    scope: Scope<'_>,
) -> Option<String> {
    // Interface names are written without spaces ("Loopback 0").
    let interface = value.as_str()?.replace(' ', "");
    scope.missing(format!("update-source {interface}"))
}

pub(crate) fn render_password(
    value: &Value,
    scope: Scope<'_>,
) -> Option<String> {
    scope.missing(format!("password {value}"))
}

pub(crate) fn render_enabled(
    value: &Value,
    scope: Scope<'_>,
) -> Option<String> {
    match *value.as_bool()? {
        // "no shutdown" never shows up in the running configuration.
        true => (scope.is_unknown() || scope.contains("shutdown"))
            .then(|| "no shutdown".to_owned()),
        false => scope.missing("shutdown".to_owned()),
    }
}

pub(crate) fn render_description(
    value: &Value,
    scope: Scope<'_>,
) -> Option<String> {
    scope.missing(format!("description {value}"))
}

pub(crate) fn render_ebgp_multihop(
    value: &Value,
    scope: Scope<'_>,
) -> Option<String> {
    scope.missing(format!("ebgp-multihop {value}"))
}

pub(crate) fn render_tcp_mss(
    value: &Value,
    scope: Scope<'_>,
) -> Option<String> {
    scope.missing(format!("tcp mss {value}"))
}

pub(crate) fn render_advertisement_interval(
    value: &Value,
    scope: Scope<'_>,
) -> Option<String> {
    scope.missing(format!("advertisement-interval {value}"))
}

pub(crate) fn render_use_neighbor_group(
    value: &Value,
    scope: Scope<'_>,
) -> Option<String> {
    scope.missing(format!("use neighbor-group {value}"))
}
