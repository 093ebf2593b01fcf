//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ipnetwork::IpNetwork;
use xrcfg_render::Instance;
use xrcfg_render::error::AttrError;

pub const ENTITY: &str = "network";

// ===== global functions =====

pub(crate) fn validate(
    instance: &Instance,
) -> Result<(), (&'static str, AttrError)> {
    prefix(instance).map(|_| ()).map_err(|error| ("masklen", error))
}

pub(crate) fn context(instance: &Instance) -> String {
    let prefix = prefix(instance).unwrap_or_else(|_| {
        instance.get_str("prefix").unwrap_or_default().to_owned()
    });
    let mut line = format!("network {prefix}");
    if let Some(route_map) = instance.get_str("route_map") {
        line.push_str(" route-policy ");
        line.push_str(route_map);
    }
    line
}

// ===== helper functions =====

// Returns the advertised prefix, with the separately supplied mask length
// appended.
fn prefix(instance: &Instance) -> Result<String, AttrError> {
    let prefix = instance.get_str("prefix").unwrap_or_default();
    let Some(masklen) = instance.get_int("masklen") else {
        return Ok(prefix.to_owned());
    };

    let invalid = || AttrError::InvalidPrefix(format!("{prefix}/{masklen}"));
    if prefix.contains('/') {
        return Err(invalid());
    }
    let network = prefix.parse::<IpNetwork>().map_err(|_| invalid())?;
    let masklen = u8::try_from(masklen).map_err(|_| invalid())?;
    IpNetwork::new(network.ip(), masklen).map_err(|_| invalid())?;
    Ok(format!("{prefix}/{masklen}"))
}

// ===== unit tests =====
