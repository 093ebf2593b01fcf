//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::sync::LazyLock as Lazy;

use xrcfg_render::{Attr, AttrKind, Registry, RegistryBuilder, Schema};

use crate::{af, neighbor, network, redistribute, router, timer};

pub static REGISTRY: Lazy<Registry> = Lazy::new(load_registry);

// ===== callbacks =====

fn load_registry() -> Registry {
    RegistryBuilder::default()
        .block(router::ENTITY, router::instance_context)
        .schema(
            Schema::builder()
                .attr(
                    Attr::new(
                        "bgp_as",
                        AttrKind::Int {
                            min: 1,
                            max: 4294967295,
                        },
                    )
                    .required(),
                )
                .attr(Attr::new("router_id", AttrKind::Str))
                .attr(Attr::new("log_neighbor_changes", AttrKind::Bool))
                .attr(Attr::new("address_family", AttrKind::List(af::ENTITY)))
                .attr(Attr::new("neighbors", AttrKind::List(neighbor::ENTITY)))
                .identifier(&["bgp_as"])
                .build(),
        )
        .renderer("router_id", router::render_router_id)
        .renderer("log_neighbor_changes", router::render_log_neighbor_changes)
        .block(af::ENTITY, af::context)
        .ancestor(router::ANCESTOR, router::find_router_context)
        .schema(
            Schema::builder()
                .attr(Attr::new("name", AttrKind::Choice(af::NAMES)).required())
                .attr(
                    Attr::new("cast", AttrKind::Choice(af::CASTS))
                        .default(af::DFLT_CAST),
                )
                .attr(Attr::new("networks", AttrKind::List(network::ENTITY)))
                .attr(Attr::new(
                    "redistribute",
                    AttrKind::List(redistribute::ENTITY),
                ))
                .identifier(&["name"])
                .build(),
        )
        .block(neighbor::ENTITY, neighbor::context)
        .ancestor(router::ANCESTOR, router::find_router_context)
        .leading("remote_as")
        .schema(
            Schema::builder()
                .attr(Attr::new("neighbor", AttrKind::Str).required())
                .attr(Attr::new("remote_as", AttrKind::UINT32).required())
                .attr(Attr::new("update_source", AttrKind::Str))
                .attr(Attr::new("password", AttrKind::Str).no_log())
                .attr(Attr::new("enabled", AttrKind::Bool))
                .attr(Attr::new("description", AttrKind::Str))
                .attr(Attr::new(
                    "ebgp_multihop",
                    AttrKind::Int { min: 1, max: 255 },
                ))
                .attr(Attr::new(
                    "tcp_mss",
                    AttrKind::Int {
                        min: 68,
                        max: 10000,
                    },
                ))
                .attr(Attr::new(
                    "advertisement_interval",
                    AttrKind::Int { min: 0, max: 600 },
                ))
                .attr(Attr::new("timers", AttrKind::Nested(timer::ENTITY)))
                .attr(Attr::new("use_neighbor_group", AttrKind::Str))
                .identifier(&["neighbor"])
                .build(),
        )
        .renderer("remote_as", neighbor::render_remote_as)
        .renderer("update_source", neighbor::render_update_source)
        .renderer("password", neighbor::render_password)
        .renderer("enabled", neighbor::render_enabled)
        .renderer("description", neighbor::render_description)
        .renderer("ebgp_multihop", neighbor::render_ebgp_multihop)
        .renderer("tcp_mss", neighbor::render_tcp_mss)
        .renderer(
            "advertisement_interval",
            neighbor::render_advertisement_interval,
        )
        .renderer("use_neighbor_group", neighbor::render_use_neighbor_group)
        .line(network::ENTITY, network::context)
        .schema(
            Schema::builder()
                .attr(Attr::new("prefix", AttrKind::Prefix).required())
                .attr(Attr::new("masklen", AttrKind::Int { min: 0, max: 128 }))
                .attr(Attr::new("route_map", AttrKind::Str))
                .identifier(&["prefix"])
                .build(),
        )
        .validate(network::validate)
        .line(redistribute::ENTITY, redistribute::context)
        .schema(
            Schema::builder()
                .attr(
                    Attr::new("protocol", AttrKind::Choice(redistribute::PROTOCOLS))
                        .required(),
                )
                .attr(Attr::new("id", AttrKind::Str))
                .attr(Attr::new("metric", AttrKind::UINT32))
                .attr(Attr::new("route_map", AttrKind::Str))
                .identifier(&["protocol"])
                .build(),
        )
        .line(timer::ENTITY, timer::context)
        .lookup(timer::lookup)
        .schema(
            Schema::builder()
                .attr(Attr::new("keepalive", AttrKind::UINT16).required())
                .attr(Attr::new("holdtime", AttrKind::UINT16).required())
                .attr(Attr::new("min_neighbor_holdtime", AttrKind::UINT16))
                .build(),
        )
        .build()
}

// ===== unit tests =====
