//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use itertools::Itertools;

// Indentation-structured block of configuration text.
//
// Lines are stored whitespace-normalized, along with their original
// indentation. Blank lines, comments, `!` markers and explicit `exit`/`end`
// terminators are not command lines and are dropped while parsing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Section {
    lines: Vec<Line>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Line {
    indent: usize,
    text: String,
}

// ===== impl Section =====

impl Section {
    pub fn parse(text: &str) -> Section {
        let lines = text
            .lines()
            .filter_map(|line| {
                let text = normalize(line);
                if text.is_empty()
                    || text.starts_with('!')
                    || text == "exit"
                    || text == "end"
                {
                    return None;
                }
                let indent =
                    line.chars().take_while(|c| c.is_whitespace()).count();
                Some(Line { indent, text })
            })
            .collect();
        Section { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // Returns all command lines of the section, nested ones included.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|line| line.text.as_str())
    }

    // Returns the command lines at the top level of the section.
    pub fn children(&self) -> impl Iterator<Item = &str> + '_ {
        let base = self.base_indent();
        self.lines
            .iter()
            .filter(move |line| line.indent == base)
            .map(|line| line.text.as_str())
    }

    // Checks whether the given command is present at the top level of the
    // section.
    pub fn contains(&self, command: &str) -> bool {
        let command = normalize(command);
        self.children().any(|line| line == command)
    }

    // Returns the block nested under the first top-level line matching the
    // given context.
    pub fn child(&self, context: &str) -> Option<Section> {
        let context = normalize(context);
        let base = self.base_indent();
        let start = self
            .lines
            .iter()
            .position(|line| line.indent == base && line.text == context)?;
        let lines = self.lines[start + 1..]
            .iter()
            .take_while(|line| line.indent > base)
            .cloned()
            .collect();
        Some(Section { lines })
    }

    // Narrows the section down to the given context path.
    //
    // Returns `None` if any element of the path doesn't exist.
    pub fn extract<S: AsRef<str>>(&self, path: &[S]) -> Option<Section> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self.clone());
        };
        let mut section = self.child(first.as_ref())?;
        for context in rest {
            section = section.child(context.as_ref())?;
        }
        Some(section)
    }

    fn base_indent(&self) -> usize {
        self.lines.iter().map(|line| line.indent).min().unwrap_or(0)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let base = self.base_indent();
        for line in &self.lines {
            writeln!(f, "{:width$}{}", "", line.text, width = line.indent - base)?;
        }
        Ok(())
    }
}

// ===== global functions =====

// Returns the block of configuration text scoped to the given context path,
// or `None` if the context doesn't exist.
pub fn extract_section<S: AsRef<str>>(
    config: &str,
    path: &[S],
) -> Option<Section> {
    Section::parse(config).extract(path)
}

// Collapses runs of whitespace between command tokens.
pub fn normalize(line: &str) -> String {
    line.split_whitespace().join(" ")
}

// ===== unit tests =====
