// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Two-way reference index
//!
//! Stores every pointer edge `(source, field) -> target` together with its
//! inverse `target -> [(source, field)]`. The two maps are kept mutual
//! inverses by every operation; type checks live in the owning graph.

use crate::Handle;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Pointer edges of one graph
#[derive(Debug, Default, Clone)]
pub struct ReferenceIndex {
    /// source -> field -> target
    forward: FxHashMap<Handle, BTreeMap<usize, Handle>>,
    /// target -> (source, field) in insertion order
    inverse: FxHashMap<Handle, Vec<(Handle, usize)>>,
}

impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.forward.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Record or overwrite one edge, returning the previous target
    pub fn set(&mut self, source: Handle, field: usize, target: Handle) -> Option<Handle> {
        let previous = self.forward.entry(source).or_default().insert(field, target);
        if previous == Some(target) {
            return previous;
        }
        if let Some(old) = previous {
            self.unlink(old, source, field);
        }
        self.inverse.entry(target).or_default().push((source, field));
        previous
    }

    /// Remove one edge, returning its target
    pub fn clear(&mut self, source: Handle, field: usize) -> Option<Handle> {
        let fields = self.forward.get_mut(&source)?;
        let target = fields.remove(&field)?;
        if fields.is_empty() {
            self.forward.remove(&source);
        }
        self.unlink(target, source, field);
        Some(target)
    }

    /// Remove every edge of `source` at or after `first_field`
    pub fn clear_from(&mut self, source: Handle, first_field: usize) -> Vec<(usize, Handle)> {
        let Some(fields) = self.forward.get_mut(&source) else {
            return Vec::new();
        };
        let removed = fields.split_off(&first_field);
        if fields.is_empty() {
            self.forward.remove(&source);
        }
        for (&field, &target) in &removed {
            self.unlink(target, source, field);
        }
        removed.into_iter().collect()
    }

    /// Forward lookup
    pub fn target(&self, source: Handle, field: usize) -> Option<Handle> {
        self.forward.get(&source)?.get(&field).copied()
    }

    /// All outgoing edges of `source`, ordered by field
    pub fn targets(&self, source: Handle) -> Vec<(usize, Handle)> {
        self.forward
            .get(&source)
            .map(|fields| fields.iter().map(|(&f, &t)| (f, t)).collect())
            .unwrap_or_default()
    }

    /// All incoming edges of `target`, in insertion order
    pub fn sources(&self, target: Handle) -> &[(Handle, usize)] {
        self.inverse.get(&target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drop every edge into or out of `handle`
    ///
    /// Returns the incoming edges that were removed so the caller can blank
    /// any stored names.
    pub fn remove_object(&mut self, handle: Handle) -> Vec<(Handle, usize)> {
        self.clear_from(handle, 0);
        let incoming = self.inverse.remove(&handle).unwrap_or_default();
        for &(source, field) in &incoming {
            if let Some(fields) = self.forward.get_mut(&source) {
                fields.remove(&field);
                if fields.is_empty() {
                    self.forward.remove(&source);
                }
            }
        }
        incoming
    }

    /// Verify that forward and inverse maps mirror each other
    pub fn is_consistent(&self) -> bool {
        let forward_ok = self.forward.iter().all(|(&source, fields)| {
            !fields.is_empty()
                && fields.iter().all(|(&field, target)| {
                    self.sources(*target)
                        .iter()
                        .filter(|&&edge| edge == (source, field))
                        .count()
                        == 1
                })
        });
        let inverse_ok = self.inverse.iter().all(|(&target, edges)| {
            !edges.is_empty()
                && edges
                    .iter()
                    .all(|&(source, field)| self.target(source, field) == Some(target))
        });
        forward_ok && inverse_ok
    }

    fn unlink(&mut self, target: Handle, source: Handle, field: usize) {
        if let Some(edges) = self.inverse.get_mut(&target) {
            edges.retain(|&edge| edge != (source, field));
            if edges.is_empty() {
                self.inverse.remove(&target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_lookup() {
        let mut index = ReferenceIndex::new();
        let (a, b, c) = (Handle::next(), Handle::next(), Handle::next());

        assert_eq!(index.set(a, 1, c), None);
        assert_eq!(index.set(b, 3, c), None);
        assert_eq!(index.target(a, 1), Some(c));
        assert_eq!(index.sources(c), &[(a, 1), (b, 3)]);
        assert_eq!(index.len(), 2);
        assert!(index.is_consistent());
    }

    #[test]
    fn test_overwrite_moves_inverse_entry() {
        let mut index = ReferenceIndex::new();
        let (a, b, c) = (Handle::next(), Handle::next(), Handle::next());

        index.set(a, 1, b);
        assert_eq!(index.set(a, 1, c), Some(b));
        assert!(index.sources(b).is_empty());
        assert_eq!(index.sources(c), &[(a, 1)]);

        // Same target again is a no-op
        assert_eq!(index.set(a, 1, c), Some(c));
        assert_eq!(index.sources(c).len(), 1);
        assert!(index.is_consistent());
    }

    #[test]
    fn test_clear() {
        let mut index = ReferenceIndex::new();
        let (a, b) = (Handle::next(), Handle::next());
        index.set(a, 2, b);
        assert_eq!(index.clear(a, 2), Some(b));
        assert_eq!(index.clear(a, 2), None);
        assert!(index.is_empty());
        assert!(index.is_consistent());
    }

    #[test]
    fn test_clear_from_drops_trailing_fields() {
        let mut index = ReferenceIndex::new();
        let (list, x, y, z) = (Handle::next(), Handle::next(), Handle::next(), Handle::next());
        index.set(list, 1, x);
        index.set(list, 2, y);
        index.set(list, 3, z);

        let removed = index.clear_from(list, 2);
        assert_eq!(removed, vec![(2, y), (3, z)]);
        assert_eq!(index.targets(list), vec![(1, x)]);
        assert!(index.sources(z).is_empty());
        assert!(index.is_consistent());
    }

    #[test]
    fn test_remove_object_excises_both_directions() {
        let mut index = ReferenceIndex::new();
        let (a, b, c) = (Handle::next(), Handle::next(), Handle::next());
        index.set(a, 1, b);
        index.set(b, 1, c);
        index.set(c, 4, b);

        let incoming = index.remove_object(b);
        assert_eq!(incoming, vec![(a, 1), (c, 4)]);
        assert_eq!(index.target(a, 1), None);
        assert!(index.sources(c).is_empty());
        assert!(index.is_empty());
        assert!(index.is_consistent());
    }

    #[test]
    fn test_stale_handles_are_empty() {
        let index = ReferenceIndex::new();
        let stale = Handle::next();
        assert!(index.sources(stale).is_empty());
        assert!(index.targets(stale).is_empty());
        assert_eq!(index.target(stale, 0), None);
    }
}
