// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC-Bridge Model - Object graphs and reference resolution
//!
//! This crate provides the two object graphs that the translator converts
//! between, and the machinery they share:
//!
//! - [`Model`] - domain object graph, pointers held by [`Handle`]
//! - [`Workspace`] - schema-constrained text graph, pointers held by name
//! - [`ReferenceIndex`] - two-way pointer index behind both graphs
//! - [`SchemaProvider`] - field layouts and allowed reference targets
//! - [`ObjectGraph`] - read access used by the translation engines
//!
//! # Example
//!
//! ```ignore
//! use hvac_bridge_model::{fields::idf::refrigeration_case, ObjectGraph, ObjectType, Workspace};
//!
//! let mut ws = Workspace::new();
//! let schedule = ws.create_object(ObjectType::ScheduleConstant, "Always On");
//! let case = ws.create_object(ObjectType::RefrigerationCase, "Case 1");
//! ws.set_pointer(case, refrigeration_case::AVAILABILITY_SCHEDULE_NAME, schedule)?;
//!
//! // Renaming rewrites the referencing field
//! ws.rename(schedule, "On")?;
//! assert_eq!(ws.get(case).unwrap().get_str(1), Some("On"));
//! ```

pub mod error;
pub mod fields;
pub mod model;
pub mod names;
pub mod record;
pub mod reference;
pub mod resolver;
pub mod schedule;
pub mod schema;
mod store;
pub mod types;
pub mod workspace;

// Re-export all public types
pub use error::*;
pub use model::*;
pub use names::*;
pub use record::*;
pub use reference::*;
pub use resolver::*;
pub use schedule::*;
pub use schema::*;
pub use types::*;
pub use workspace::*;
