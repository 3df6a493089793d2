// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Case-insensitive name table

use crate::{
    error::{GraphError, Result},
    Handle,
};
use rustc_hash::FxHashMap;

/// Unique, case-insensitive name registry for one graph
#[derive(Debug, Default, Clone)]
pub struct NameTable {
    by_key: FxHashMap<String, Handle>,
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Look up the owner of a name
    pub fn get(&self, name: &str) -> Option<Handle> {
        self.by_key.get(&key(name)).copied()
    }

    /// True if `name` is taken by an object other than `except`
    pub fn is_taken(&self, name: &str, except: Option<Handle>) -> bool {
        match self.get(name) {
            Some(owner) => Some(owner) != except,
            None => false,
        }
    }

    /// Claim a name for `handle`
    pub fn insert(&mut self, name: &str, handle: Handle) -> Result<()> {
        if let Some(existing) = self.get(name) {
            if existing != handle {
                return Err(GraphError::NameConflict {
                    name: name.to_string(),
                    existing,
                });
            }
        }
        self.by_key.insert(key(name), handle);
        Ok(())
    }

    /// Release a name if `handle` owns it
    pub fn remove(&mut self, name: &str, handle: Handle) {
        let k = key(name);
        if self.by_key.get(&k) == Some(&handle) {
            self.by_key.remove(&k);
        }
    }

    /// First free name of the form `base`, `base 1`, `base 2`, ...
    pub fn next_available(&self, base: &str) -> String {
        if !self.by_key.contains_key(&key(base)) {
            return base.to_string();
        }
        self.numbered(base)
    }

    /// First free name of the form `base 1`, `base 2`, ...
    pub fn numbered(&self, base: &str) -> String {
        let mut n = 1usize;
        loop {
            let candidate = format!("{} {}", base, n);
            if !self.by_key.contains_key(&key(&candidate)) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// True if `name` is `base` or one of its numbered variants (`base 3`)
pub fn is_variant_of(name: &str, base: &str) -> bool {
    let (name, base) = (key(name), key(base));
    match name.strip_prefix(&base) {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix(' ')
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit())),
        None => false,
    }
}
