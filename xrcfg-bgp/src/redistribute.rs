//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use xrcfg_render::Instance;

pub const ENTITY: &str = "redistribute";

pub const PROTOCOLS: &[&str] = &[
    "application",
    "connected",
    "eigrp",
    "isis",
    "lisp",
    "mobile",
    "ospf",
    "ospfv3",
    "rip",
    "static",
    "subscriber",
];

// ===== global functions =====

pub(crate) fn context(instance: &Instance) -> String {
    let mut line = format!(
        "redistribute {}",
        instance.get_str("protocol").unwrap_or_default()
    );
    if let Some(id) = instance.get_str("id") {
        line.push_str(&format!(" {id}"));
    }
    if let Some(metric) = instance.get_int("metric") {
        line.push_str(&format!(" metric {metric}"));
    }
    if let Some(route_map) = instance.get_str("route_map") {
        line.push_str(&format!(" route-policy {route_map}"));
    }
    line
}
