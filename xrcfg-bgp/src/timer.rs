//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use itertools::Itertools;
use xrcfg_render::{Instance, Section};

pub const ENTITY: &str = "timer";

const KEYWORD: &str = "timers";

// ===== global functions =====

// Timer values are optional for absent timers, in which case the bare
// `timers` keyword is negated.
pub(crate) fn context(instance: &Instance) -> String {
    let values = ["keepalive", "holdtime", "min_neighbor_holdtime"]
        .into_iter()
        .map_while(|attr| instance.get_int(attr))
        .join(" ");
    if values.is_empty() {
        return KEYWORD.to_owned();
    }
    format!("{KEYWORD} {values}")
}

// Without values, any configured timers line matches.
pub(crate) fn lookup(instance: &Instance, section: &Section) -> bool {
    let line = context(instance);
    if line != KEYWORD {
        return section.contains(&line);
    }
    section
        .children()
        .any(|child| child.split_whitespace().next() == Some(KEYWORD))
}
