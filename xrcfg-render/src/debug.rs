//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::{debug, debug_span};

use crate::value::{State, Value};

// Renderer debug messages.
#[derive(Debug)]
pub enum Debug<'a> {
    EntityRender(&'a str, &'a str, State),
    AncestorResolved(&'a str, &'a str),
    AncestorScoped(&'a str),
    SectionMissing(&'a [String]),
    AttrRender(&'a str, &'a Value, bool),
    CommandExists(&'a str),
}

// ===== impl Debug =====

impl Debug<'_> {
    // Log debug message using the tracing API.
    pub(crate) fn log(&self) {
        match self {
            Debug::EntityRender(entity, context, state) => {
                debug_span!("entity", name = %entity).in_scope(|| {
                    debug!(%context, ?state, "{}", self);
                });
            }
            Debug::AncestorResolved(ancestor, line) => {
                // Parent span(s): entity
                debug!(%ancestor, %line, "{}", self);
            }
            Debug::AncestorScoped(ancestor) => {
                // Parent span(s): entity
                debug!(%ancestor, "{}", self);
            }
            Debug::SectionMissing(path) => {
                // Parent span(s): entity
                let path = path.join(" / ");
                debug!(%path, "{}", self);
            }
            Debug::AttrRender(attr, value, no_log) => {
                // Parent span(s): entity
                debug_span!("attribute", name = %attr).in_scope(|| {
                    if *no_log {
                        debug!(value = "********", "{}", self);
                    } else {
                        debug!(%value, "{}", self);
                    }
                });
            }
            Debug::CommandExists(command) => {
                // Parent span(s): entity
                debug!(%command, "{}", self);
            }
        }
    }
}

impl std::fmt::Display for Debug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Debug::EntityRender(..) => {
                write!(f, "rendering entity")
            }
            Debug::AncestorResolved(..) => {
                write!(f, "ancestor context found in configuration")
            }
            Debug::AncestorScoped(..) => {
                write!(f, "configuration is already scoped to the ancestor")
            }
            Debug::SectionMissing(..) => {
                write!(f, "context not present in configuration")
            }
            Debug::AttrRender(..) => {
                write!(f, "rendering attribute")
            }
            Debug::CommandExists(..) => {
                write!(f, "command already present")
            }
        }
    }
}
