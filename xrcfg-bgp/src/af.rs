//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use xrcfg_render::Instance;

pub const ENTITY: &str = "address_family";

pub const NAMES: &[&str] = &["ipv4", "ipv6"];
pub const CASTS: &[&str] =
    &["flowspec", "labeled-unicast", "multicast", "unicast"];
pub const DFLT_CAST: &str = "unicast";

// ===== global functions =====

pub(crate) fn context(instance: &Instance) -> String {
    let name = instance.get_str("name").unwrap_or_default();
    match instance.get_str("cast") {
        Some(cast) => format!("address-family {name} {cast}"),
        None => format!("address-family {name}"),
    }
}
