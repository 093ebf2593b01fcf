//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod neighbor;
mod network;
mod router;

use xrcfg_bgp::{REGISTRY, router as bgp_router};
use xrcfg_render::command::Command;
use xrcfg_render::{Error, Instance, Section};

// Running configuration shared by most test cases.
const RUNNING: &str = "\
hostname r1
router bgp 65000
 bgp router-id 1.1.1.1
 address-family ipv4 unicast
  network 10.0.0.0/24
  redistribute connected
 !
 neighbor 10.1.1.1
  remote-as 65001
  description core
  timers 10 30
 !
 neighbor 10.2.2.2
  remote-as 65002
  shutdown
 !
!
";

// Configuration tree node, used to apply rendered commands to a running
// configuration.
#[derive(Debug)]
struct Node {
    text: String,
    children: Vec<Node>,
}

//
// Helper functions.
//

fn instance(entity: &str, data: serde_json::Value) -> Instance {
    xrcfg_bgp::instance(entity, &data).unwrap()
}

fn render(
    entity: &str,
    data: serde_json::Value,
    config: Option<&str>,
) -> Result<Vec<String>, Error> {
    let instance = xrcfg_bgp::instance(entity, &data)?;
    xrcfg_bgp::render(&instance, config)
}

// Renders the given entity, applies the resulting commands to the
// configuration and checks that rendering it again yields nothing to do.
fn assert_converges(entity: &str, data: serde_json::Value, config: &str) {
    let instance = instance(entity, data);
    let commands =
        xrcfg_bgp::render_commands(&instance, Some(config), None).unwrap();
    assert!(!commands.is_empty(), "nothing to converge");

    let parents: Vec<String> = match REGISTRY.get(entity).unwrap().ancestor {
        Some(_) => bgp_router::find_bgp_as(&Section::parse(config))
            .map(bgp_router::context)
            .into_iter()
            .collect(),
        None => vec![],
    };
    let converged = apply(config, &parents, &commands);
    assert_eq!(
        xrcfg_bgp::render(&instance, Some(&converged)).unwrap(),
        Vec::<String>::new(),
        "configuration didn't converge:\n{}",
        diff(config, &converged)
    );
}

fn diff(before: &str, after: &str) -> String {
    similar::TextDiff::from_lines(before, after)
        .iter_all_changes()
        .map(|change| {
            let sign = match change.tag() {
                similar::ChangeTag::Delete => "-",
                similar::ChangeTag::Insert => "+",
                similar::ChangeTag::Equal => " ",
            };
            format!("{sign}{change}")
        })
        .collect()
}

// Applies rendered commands under the given context path of a configuration.
fn apply(config: &str, parents: &[String], commands: &[Command]) -> String {
    let lines = config
        .lines()
        .filter(|line| !line.trim().is_empty() && line.trim() != "!")
        .map(|line| {
            let indent = line.len() - line.trim_start().len();
            (indent, line.trim().to_owned())
        })
        .collect::<Vec<_>>();
    let mut nodes = parse_nodes(&lines);

    let mut scope = &mut nodes;
    for parent in parents {
        scope = &mut child_node(scope, parent).children;
    }
    apply_commands(scope, commands);

    let mut config = String::new();
    dump_nodes(&nodes, 0, &mut config);
    config
}

fn parse_nodes(lines: &[(usize, String)]) -> Vec<Node> {
    let mut nodes = vec![];
    let mut start = 0;
    while start < lines.len() {
        let (indent, text) = &lines[start];
        let end = lines[start + 1..]
            .iter()
            .position(|(child_indent, _)| child_indent <= indent)
            .map(|pos| start + 1 + pos)
            .unwrap_or(lines.len());
        nodes.push(Node {
            text: text.clone(),
            children: parse_nodes(&lines[start + 1..end]),
        });
        start = end;
    }
    nodes
}

fn child_node<'a>(nodes: &'a mut Vec<Node>, text: &str) -> &'a mut Node {
    let pos = match nodes.iter().position(|node| node.text == text) {
        Some(pos) => pos,
        None => {
            nodes.push(Node {
                text: text.to_owned(),
                children: vec![],
            });
            nodes.len() - 1
        }
    };
    &mut nodes[pos]
}

fn apply_commands(nodes: &mut Vec<Node>, commands: &[Command]) {
    for command in commands {
        match command {
            Command::Line(line) => {
                let negated = line.strip_prefix("no ");
                if let Some(negated) = negated {
                    if nodes.iter().any(|node| node.text == negated) {
                        nodes.retain(|node| node.text != negated);
                        continue;
                    }
                }
                child_node(nodes, line);
            }
            Command::Block(block) => {
                let node = child_node(nodes, &block.context);
                apply_commands(&mut node.children, &block.body);
            }
        }
    }
}

fn dump_nodes(nodes: &[Node], depth: usize, output: &mut String) {
    for node in nodes {
        output.push_str(&format!("{:depth$}{}\n", "", node.text));
        dump_nodes(&node.children, depth + 1, output);
    }
}
