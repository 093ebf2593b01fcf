//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde_json::json;
use xrcfg_render::Error;
use xrcfg_render::error::AttrError;

use super::{RUNNING, assert_converges, instance, render};

#[test]
fn test_neighbor_absent() {
    let data = json!({"neighbor": "10.1.1.1", "state": "absent"});
    assert_eq!(
        render("neighbor", data.clone(), Some(RUNNING)).unwrap(),
        vec!["no neighbor 10.1.1.1"]
    );
    assert!(
        render("neighbor", data.clone(), Some("router bgp 65000\n"))
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        render("neighbor", data, None).unwrap(),
        vec!["no neighbor 10.1.1.1"]
    );
}

#[test]
fn test_neighbor_new() {
    let data = json!({
        "neighbor": "10.3.3.3",
        "description": "edge",
        "update_source": "Loopback 0",
        "password": "s3cr3t",
        "enabled": true,
        "remote_as": 65003,
    });
    assert_eq!(
        render("neighbor", data, Some(RUNNING)).unwrap(),
        vec![
            "neighbor 10.3.3.3",
            "remote-as 65003",
            "update-source Loopback0",
            "password s3cr3t",
            "description edge",
            "exit"
        ]
    );
}

#[test]
fn test_neighbor_enabled() {
    let data = json!({"neighbor": "10.2.2.2", "remote_as": 65002, "enabled": true});
    assert_eq!(
        render("neighbor", data.clone(), Some(RUNNING)).unwrap(),
        vec!["neighbor 10.2.2.2", "no shutdown", "exit"]
    );
    assert_eq!(
        render("neighbor", data, None).unwrap(),
        vec!["neighbor 10.2.2.2", "remote-as 65002", "no shutdown", "exit"]
    );

    let data = json!({"neighbor": "10.1.1.1", "remote_as": 65001, "enabled": false});
    assert_eq!(
        render("neighbor", data, Some(RUNNING)).unwrap(),
        vec!["neighbor 10.1.1.1", "shutdown", "exit"]
    );
}

#[test]
fn test_neighbor_idempotent() {
    let data = json!({
        "neighbor": "10.1.1.1",
        "remote_as": 65001,
        "description": "core",
        "timers": {"keepalive": 10, "holdtime": 30},
    });
    assert!(render("neighbor", data, Some(RUNNING)).unwrap().is_empty());
}

#[test]
fn test_neighbor_update() {
    let data = json!({
        "neighbor": "10.1.1.1",
        "remote_as": 65001,
        "description": "core",
        "ebgp_multihop": 2,
        "tcp_mss": 1400,
        "advertisement_interval": 0,
        "timers": {"keepalive": 10, "holdtime": 40},
        "use_neighbor_group": "IBGP",
    });
    assert_eq!(
        render("neighbor", data, Some(RUNNING)).unwrap(),
        vec![
            "neighbor 10.1.1.1",
            "ebgp-multihop 2",
            "tcp mss 1400",
            "advertisement-interval 0",
            "timers 10 40",
            "use neighbor-group IBGP",
            "exit"
        ]
    );
}

#[test]
fn test_neighbor_isolation() {
    // "description core" exists under a sibling neighbor only.
    let data = json!({
        "neighbor": "10.2.2.2",
        "remote_as": 65002,
        "enabled": false,
        "description": "core",
    });
    assert_eq!(
        render("neighbor", data, Some(RUNNING)).unwrap(),
        vec!["neighbor 10.2.2.2", "description core", "exit"]
    );

    let data = json!({
        "neighbor": "10.2.2.2",
        "remote_as": 65002,
        "timers": {"keepalive": 10, "holdtime": 30},
    });
    assert_eq!(
        render("neighbor", data, Some(RUNNING)).unwrap(),
        vec!["neighbor 10.2.2.2", "timers 10 30", "exit"]
    );
}

#[test]
fn test_neighbor_render_under() {
    let neighbor =
        instance("neighbor", json!({"neighbor": "10.1.1.1", "remote_as": 1}));
    assert_eq!(
        xrcfg_bgp::render_under(&neighbor, Some("hostname r1\n"), 65000)
            .unwrap(),
        vec!["neighbor 10.1.1.1", "remote-as 1", "exit"]
    );
    assert_eq!(
        xrcfg_bgp::render_under(&neighbor, Some(RUNNING), 65000).unwrap(),
        vec!["neighbor 10.1.1.1", "remote-as 1", "exit"]
    );
}

#[test]
fn test_neighbor_missing_ancestor() {
    let data = json!({"neighbor": "10.1.1.1", "remote_as": 65001});
    assert_eq!(
        render("neighbor", data, Some("hostname r1\n")).unwrap_err(),
        Error::MissingAncestorContext("neighbor", "router bgp")
    );
}

#[test]
fn test_neighbor_invalid() {
    let data = json!({"neighbor": "10.1.1.1"});
    assert_eq!(
        render("neighbor", data, Some(RUNNING)).unwrap_err(),
        Error::InvalidAttributeValue(
            "neighbor",
            "remote_as".to_owned(),
            AttrError::Missing
        )
    );

    let data = json!({"neighbor": "10.1.1.1", "remote_as": 1, "ebgp_multihop": 0});
    assert_eq!(
        render("neighbor", data, Some(RUNNING)).unwrap_err(),
        Error::InvalidAttributeValue(
            "neighbor",
            "ebgp_multihop".to_owned(),
            AttrError::OutOfRange(0, 1, 255)
        )
    );

    let data = json!({"neighbor": "10.1.1.1", "remote_as": 1, "weight": 10});
    assert_eq!(
        render("neighbor", data, Some(RUNNING)).unwrap_err(),
        Error::InvalidAttributeValue(
            "neighbor",
            "weight".to_owned(),
            AttrError::Unknown
        )
    );

    let data = json!({"neighbor": "10.1.1.1", "remote_as": 1, "timers": 30});
    assert_eq!(
        render("neighbor", data, Some(RUNNING)).unwrap_err(),
        Error::InvalidAttributeValue(
            "neighbor",
            "timers".to_owned(),
            AttrError::WrongType("an object")
        )
    );
}

#[test]
fn test_neighbor_converges() {
    assert_converges(
        "neighbor",
        json!({
            "neighbor": "10.4.4.4",
            "remote_as": 65004,
            "update_source": "Loopback 0",
            "enabled": true,
            "timers": {"keepalive": 5, "holdtime": 15, "min_neighbor_holdtime": 3},
        }),
        RUNNING,
    );
    assert_converges(
        "neighbor",
        json!({"neighbor": "10.2.2.2", "remote_as": 65002, "enabled": true}),
        RUNNING,
    );
    assert_converges(
        "neighbor",
        json!({"neighbor": "10.1.1.1", "state": "absent"}),
        RUNNING,
    );
}
