//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Schema-driven rendering of CLI configuration commands.
//!
//! Given a desired-state [`Instance`] and the text of the device's current
//! configuration, the renderer walks the entity tree and produces the ordered
//! list of commands needed to converge the device, skipping every command
//! that is already in effect.

mod debug;

pub mod command;
pub mod error;
pub mod registry;
pub mod render;
pub mod schema;
pub mod section;
pub mod value;

pub use command::Command;
pub use error::Error;
pub use registry::{EntityKind, Registry, RegistryBuilder};
pub use render::{RenderCxt, Scope};
pub use schema::{Attr, AttrKind, Schema};
pub use section::{Section, extract_section};
pub use value::{Instance, State, Value};
