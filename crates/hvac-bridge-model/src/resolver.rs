// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object lookup and reference resolution shared by both graph layers

use crate::{
    error::{GraphError, Result},
    Handle, ObjectType, ReferenceIndex, SchemaProvider, SchemaRecord,
};
use rustc_hash::FxHashMap;

/// Read access to an object graph
///
/// Implemented by [`crate::Model`] and [`crate::Workspace`]; the translation
/// engines walk their source graph through this trait only.
///
/// # Example
///
/// ```ignore
/// use hvac_bridge_model::{ObjectGraph, Model, fields::os::refrigeration_case};
///
/// fn availability(model: &Model, case: Handle) -> Option<&str> {
///     model
///         .get_target(case, refrigeration_case::AVAILABILITY_SCHEDULE)
///         .and_then(|schedule| schedule.name())
/// }
/// ```
pub trait ObjectGraph {
    /// Schema the graph validates against
    fn schema(&self) -> &dyn SchemaProvider;

    /// Get object by handle, `None` for stale handles
    fn get(&self, handle: Handle) -> Option<&SchemaRecord>;

    /// All handles in insertion order
    fn handles(&self) -> &[Handle];

    /// The graph's pointer edges
    fn references(&self) -> &ReferenceIndex;

    /// Case-insensitive name lookup
    fn handle_by_name(&self, name: &str) -> Option<Handle>;

    /// Number of objects
    fn len(&self) -> usize {
        self.handles().len()
    }

    fn is_empty(&self) -> bool {
        self.handles().is_empty()
    }

    /// All objects in insertion order
    fn objects(&self) -> Vec<&SchemaRecord> {
        self.handles().iter().filter_map(|&h| self.get(h)).collect()
    }

    /// Objects of one type in insertion order
    fn objects_by_type(&self, object_type: &ObjectType) -> Vec<&SchemaRecord> {
        self.handles()
            .iter()
            .filter_map(|&h| self.get(h))
            .filter(|record| record.object_type() == object_type)
            .collect()
    }

    /// Object a pointer field refers to
    fn get_target(&self, source: Handle, field: usize) -> Option<&SchemaRecord> {
        self.get(self.references().target(source, field)?)
    }

    /// Every `(source, field)` pointing at `target`, optionally filtered by
    /// source type
    fn get_sources(
        &self,
        target: Handle,
        type_filter: Option<&ObjectType>,
    ) -> Vec<(Handle, usize)> {
        self.references()
            .sources(target)
            .iter()
            .filter(|(source, _)| match type_filter {
                Some(wanted) => self
                    .get(*source)
                    .is_some_and(|record| record.object_type() == wanted),
                None => true,
            })
            .copied()
            .collect()
    }

    /// Look up an object by name
    fn find_by_name(&self, name: &str) -> Option<&SchemaRecord> {
        self.get(self.handle_by_name(name)?)
    }
}

/// Extension helpers built on [`ObjectGraph`]
pub trait ObjectGraphExt: ObjectGraph {
    /// Get object or fail with `ObjectNotFound`
    fn try_get(&self, handle: Handle) -> Result<&SchemaRecord> {
        self.get(handle).ok_or(GraphError::ObjectNotFound(handle))
    }

    /// Resolve a name or fail with `NameNotFound`
    fn resolve_by_name(&self, name: &str) -> Result<Handle> {
        self.handle_by_name(name)
            .ok_or_else(|| GraphError::name_not_found(name))
    }

    /// Distinct objects pointing at `target`, in first-reference order
    fn source_objects(
        &self,
        target: Handle,
        type_filter: Option<&ObjectType>,
    ) -> Vec<&SchemaRecord> {
        let mut seen = Vec::new();
        for (source, _) in self.get_sources(target, type_filter) {
            if !seen.contains(&source) {
                seen.push(source);
            }
        }
        seen.into_iter().filter_map(|h| self.get(h)).collect()
    }

    /// Number of objects of one type
    fn count_by_type(&self, object_type: &ObjectType) -> usize {
        self.handles()
            .iter()
            .filter_map(|&h| self.get(h))
            .filter(|record| record.object_type() == object_type)
            .count()
    }

    /// Object counts keyed by type
    fn type_counts(&self) -> FxHashMap<ObjectType, usize> {
        let mut counts = FxHashMap::default();
        for record in self.objects() {
            *counts.entry(record.object_type().clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl<T: ObjectGraph + ?Sized> ObjectGraphExt for T {}
