//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde_json::json;

use super::render;

// Address-family configuration, already scoped.
const AF: &str =
    " network 10.0.0.0/24\n network 10.1.0.0/16 route-policy RP-LOCAL\n";

#[test]
fn test_network_present() {
    let data = json!({"prefix": "10.0.0.0/24"});
    assert!(render("network", data, Some(AF)).unwrap().is_empty());

    let data = json!({"prefix": "10.1.0.0", "masklen": 16, "route_map": "RP-LOCAL"});
    assert!(render("network", data, Some(AF)).unwrap().is_empty());

    // The route-policy is part of the command line.
    let data = json!({"prefix": "10.0.0.0/24", "route_map": "RP-LOCAL"});
    assert_eq!(
        render("network", data, Some(AF)).unwrap(),
        vec!["network 10.0.0.0/24 route-policy RP-LOCAL"]
    );
}

#[test]
fn test_network_absent() {
    let data = json!({"prefix": "10.0.0.0/24", "state": "absent"});
    assert_eq!(
        render("network", data.clone(), Some(AF)).unwrap(),
        vec!["no network 10.0.0.0/24"]
    );
    assert_eq!(
        render("network", data, None).unwrap(),
        vec!["no network 10.0.0.0/24"]
    );

    let data = json!({"prefix": "10.2.0.0/16", "state": "absent"});
    assert!(render("network", data, Some(AF)).unwrap().is_empty());
}

#[test]
fn test_network_whitespace() {
    let config = "  network   10.0.0.0/24 \n";
    let data = json!({"prefix": "10.0.0.0/24"});
    assert!(render("network", data, Some(config)).unwrap().is_empty());
}
