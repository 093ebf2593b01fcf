//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::Serialize;

pub const EXIT: &str = "exit";

// Rendered configuration command.
//
// A block opens a nested configuration context, holds its subcommands and is
// closed with `exit` once flattened.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Serialize)]
#[serde(untagged)]
pub enum Command {
    Line(String),
    Block(Block),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Serialize)]
pub struct Block {
    pub context: String,
    pub body: Vec<Command>,
}

// Indented preview of a command list.
#[derive(Debug)]
pub struct Tree<'a>(pub &'a [Command]);

// ===== impl Command =====

impl Command {
    // Wraps the subcommands of an entity into its context block.
    //
    // An entity with no pending subcommands is still materialized as an empty
    // block if its context doesn't exist yet.
    pub fn assemble(
        context: String,
        body: Vec<Command>,
        exists: bool,
    ) -> Option<Command> {
        if !body.is_empty() || !exists {
            Some(Command::Block(Block { context, body }))
        } else {
            None
        }
    }

    fn flatten_into(&self, lines: &mut Vec<String>) {
        match self {
            Command::Line(line) => lines.push(line.clone()),
            Command::Block(block) => {
                lines.push(block.context.clone());
                for command in &block.body {
                    command.flatten_into(lines);
                }
                lines.push(EXIT.to_owned());
            }
        }
    }

    fn fmt_indented(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        depth: usize,
    ) -> std::fmt::Result {
        match self {
            Command::Line(line) => writeln!(f, "{:depth$}{line}", ""),
            Command::Block(block) => {
                writeln!(f, "{:depth$}{}", "", block.context)?;
                for command in &block.body {
                    command.fmt_indented(f, depth + 1)?;
                }
                writeln!(f, "{:depth$}{EXIT}", "")
            }
        }
    }
}

// ===== impl Tree =====

impl std::fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for command in self.0 {
            command.fmt_indented(f, 0)?;
        }
        Ok(())
    }
}

// ===== global functions =====

// Flattens rendered commands into ordered CLI lines.
pub fn flatten(commands: &[Command]) -> Vec<String> {
    let mut lines = vec![];
    for command in commands {
        command.flatten_into(&mut lines);
    }
    lines
}

// ===== unit tests =====
