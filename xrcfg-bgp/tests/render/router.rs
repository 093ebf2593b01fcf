//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde_json::json;
use xrcfg_render::command::Tree;

use super::{RUNNING, assert_converges, instance, render};

fn router() -> serde_json::Value {
    json!({
        "bgp_as": 65000,
        "router_id": "1.1.1.1",
        "log_neighbor_changes": true,
        "address_family": [{
            "name": "ipv4",
            "networks": [
                {"prefix": "10.0.0.0/24"},
                {"prefix": "10.9.0.0/16"},
            ],
        }],
        "neighbors": [
            {"neighbor": "10.1.1.1", "remote_as": 65001},
            {"neighbor": "10.4.4.4", "remote_as": 65004},
        ],
    })
}

#[test]
fn test_router_update() {
    assert_eq!(
        render("router", router(), Some(RUNNING)).unwrap(),
        vec![
            "router bgp 65000",
            "bgp log neighbor changes detail",
            "address-family ipv4 unicast",
            "network 10.9.0.0/16",
            "exit",
            "neighbor 10.4.4.4",
            "remote-as 65004",
            "exit",
            "exit"
        ]
    );
}

#[test]
fn test_router_new() {
    let data = json!({
        "bgp_as": 65100,
        "router_id": "2.2.2.2",
        "log_neighbor_changes": false,
        "address_family": [{"name": "ipv4"}],
    });
    assert_eq!(
        render("router", data, Some(RUNNING)).unwrap(),
        vec![
            "router bgp 65100",
            "bgp router-id 2.2.2.2",
            "bgp log neighbor changes disable",
            "address-family ipv4 unicast",
            "exit",
            "exit"
        ]
    );

    let data = json!({"bgp_as": 65100});
    assert_eq!(
        render("router", data, None).unwrap(),
        vec!["router bgp 65100", "exit"]
    );
}

#[test]
fn test_router_absent() {
    let data = json!({"bgp_as": 65000, "state": "absent"});
    assert_eq!(
        render("router", data, Some(RUNNING)).unwrap(),
        vec!["no router bgp 65000"]
    );

    let data = json!({"bgp_as": 65100, "state": "absent"});
    assert!(render("router", data, Some(RUNNING)).unwrap().is_empty());
}

#[test]
fn test_router_nested_absent() {
    let data = json!({
        "bgp_as": 65000,
        "neighbors": [
            {"neighbor": "10.2.2.2", "state": "absent"},
            {"neighbor": "10.5.5.5", "state": "absent"},
        ],
    });
    assert_eq!(
        render("router", data, Some(RUNNING)).unwrap(),
        vec!["router bgp 65000", "no neighbor 10.2.2.2", "exit"]
    );
}

#[test]
fn test_router_tree() {
    let router = instance("router", router());
    let commands =
        xrcfg_bgp::render_commands(&router, Some(RUNNING), None).unwrap();
    assert_eq!(
        Tree(&commands).to_string(),
        "\
router bgp 65000
 bgp log neighbor changes detail
 address-family ipv4 unicast
  network 10.9.0.0/16
 exit
 neighbor 10.4.4.4
  remote-as 65004
 exit
exit
"
    );
}

#[test]
fn test_router_converges() {
    assert_converges("router", router(), RUNNING);
    assert_converges("router", router(), "hostname r1\n");
}
