// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-run state shared by both translation directions

use crate::options::ProgressCallback;
use hvac_bridge_model::{Handle, ObjectGraph, ObjectType};
use rustc_hash::FxHashMap;

/// Source handle to target handle, one entry per translated source object
///
/// Entries are inserted as soon as a target exists, before its references
/// are followed, so a cycle back to the object finds it here.
#[derive(Debug, Default, Clone)]
pub struct TranslationMap {
    map: FxHashMap<Handle, Handle>,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source: Handle) -> Option<Handle> {
        self.map.get(&source).copied()
    }

    pub fn contains(&self, source: Handle) -> bool {
        self.map.contains_key(&source)
    }

    /// Register a target, returning the one that ends up mapped
    ///
    /// An existing entry is never replaced.
    pub fn insert(&mut self, source: Handle, target: Handle) -> Handle {
        *self.map.entry(source).or_insert(target)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Handle, Handle)> + '_ {
        self.map.iter().map(|(&s, &t)| (s, t))
    }
}

/// Progress reporting for one run
pub(crate) struct Progress<'a> {
    callback: Option<&'a ProgressCallback>,
    phase: &'static str,
    total: usize,
    done: usize,
}

impl<'a> Progress<'a> {
    pub(crate) fn new(callback: Option<&'a ProgressCallback>, phase: &'static str, total: usize) -> Self {
        Self {
            callback,
            phase,
            total,
            done: 0,
        }
    }

    pub(crate) fn step(&mut self) {
        self.done += 1;
        if let Some(cb) = self.callback {
            let fraction = if self.total == 0 {
                1.0
            } else {
                (self.done as f32 / self.total as f32).min(1.0)
            };
            cb(self.phase, fraction);
        }
    }
}

/// Top-level visit order for a graph
///
/// Objects of the listed types come first, type by type; everything else
/// follows in insertion order.
pub(crate) fn visit_order<G: ObjectGraph + ?Sized>(
    graph: &G,
    priority: &[ObjectType],
    sort_by_name: bool,
) -> Vec<Handle> {
    let mut order = Vec::with_capacity(graph.len());
    for object_type in priority {
        let mut objects = graph.objects_by_type(object_type);
        if sort_by_name {
            objects.sort_by_cached_key(|record| record.name().unwrap_or_default().to_lowercase());
        }
        order.extend(objects.into_iter().map(|record| record.handle()));
    }
    order.extend(
        graph
            .objects()
            .into_iter()
            .filter(|record| !priority.contains(record.object_type()))
            .map(|record| record.handle()),
    );
    order
}
