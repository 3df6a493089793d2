// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model-layer object graph
//!
//! Pointer fields are held by handle in the reference index only; the record
//! slot of a pointer field always stays empty.

use crate::{
    error::{GraphError, Result},
    fields::os::model_object_list,
    store::ObjectStore,
    BuiltinSchema, FieldValue, Handle, ObjectGraph, ObjectType, ReferenceIndex, SchemaProvider,
    SchemaRecord,
};
use std::sync::Arc;

/// In-memory domain object graph
pub struct Model {
    store: ObjectStore,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Create an empty model over the built-in schema
    pub fn new() -> Self {
        Self::with_schema(Arc::new(BuiltinSchema))
    }

    /// Create an empty model over a custom schema
    pub fn with_schema(schema: Arc<dyn SchemaProvider>) -> Self {
        Self {
            store: ObjectStore::new(schema),
        }
    }

    /// Create a defaulted object of the given type
    ///
    /// An empty `name` yields a generated default.
    pub fn create_object(&mut self, object_type: ObjectType, name: &str) -> Handle {
        let record = SchemaRecord::from_schema(self.store.schema.as_ref(), object_type);
        let record = if name.is_empty() { record } else { record.with_name(name) };
        self.store.insert(record)
    }

    /// Add a prepared record
    ///
    /// Text in pointer slots is taken as the name of an existing object and
    /// turned into a handle edge; unresolvable names are dropped with a
    /// warning.
    pub fn add_object(&mut self, mut record: SchemaRecord) -> Handle {
        let object_type = record.object_type().clone();
        let mut pending = Vec::new();
        for index in 0..record.len() {
            if !self.store.schema.is_pointer_field(&object_type, index) {
                continue;
            }
            if let Some(name) = record.get_str(index) {
                pending.push((index, name.to_string()));
            }
            let _ = record.set(index, FieldValue::Empty);
        }

        let handle = self.store.insert(record);
        for (index, name) in pending {
            let result = self
                .store
                .names
                .get(&name)
                .ok_or_else(|| GraphError::name_not_found(&name))
                .and_then(|target| self.set_pointer(handle, index, target));
            if let Err(e) = result {
                log::warn!("Dropping reference '{}' in field {}: {}", name, index, e);
            }
        }
        handle
    }

    /// Remove an object and every reference to or from it
    pub fn remove_object(&mut self, handle: Handle) -> Option<SchemaRecord> {
        self.store.remove(handle).map(|(record, _)| record)
    }

    /// Rename an object
    ///
    /// Fails with `NameConflict` when another object already uses the name.
    pub fn rename(&mut self, handle: Handle, new_name: &str) -> Result<()> {
        self.store.rename(handle, new_name).map(|_| ())
    }

    /// Point `field` of `source` at `target`
    pub fn set_pointer(&mut self, source: Handle, field: usize, target: Handle) -> Result<()> {
        self.store.check_pointer(source, field, target)?;
        self.store.references.set(source, field, target);
        Ok(())
    }

    /// Clear a pointer field, returning the previous target
    pub fn clear_pointer(&mut self, source: Handle, field: usize) -> Option<Handle> {
        self.store.references.clear(source, field)
    }

    /// Typed field setter
    ///
    /// Name fields rename, pointer fields resolve text as a name, everything
    /// else is validated against the schema.
    pub fn set_field(&mut self, handle: Handle, index: usize, value: FieldValue) -> Result<()> {
        let record = self.store.try_get(handle)?;
        let object_type = record.object_type().clone();
        if index >= record.len() {
            return Err(GraphError::out_of_range(&object_type, index, record.len()));
        }
        if record.layout().name_field == Some(index) {
            let name = value.to_string();
            return self.rename(handle, &name);
        }
        if self.store.schema.is_pointer_field(&object_type, index) {
            return match value.as_str() {
                Some(name) => {
                    let target = self
                        .store
                        .names
                        .get(name)
                        .ok_or_else(|| GraphError::name_not_found(name))?;
                    self.set_pointer(handle, index, target)
                }
                None => {
                    self.clear_pointer(handle, index);
                    Ok(())
                }
            };
        }
        self.store.check_scalar(&object_type, index, &value)?;
        self.store.try_get_mut(handle)?.set(index, value)
    }

    /// Append an extensible group
    ///
    /// Text in pointer slots is resolved as a name before anything is
    /// written.
    pub fn push_group(&mut self, handle: Handle, mut values: Vec<FieldValue>) -> Result<usize> {
        let record = self.store.try_get(handle)?;
        let object_type = record.object_type().clone();
        let start = record.len();
        let mut pending = Vec::new();
        for (offset, value) in values.iter_mut().enumerate() {
            let index = start + offset;
            if self.store.schema.is_pointer_field(&object_type, index) {
                if let Some(name) = value.as_str() {
                    let target = self
                        .store
                        .names
                        .get(name)
                        .ok_or_else(|| GraphError::name_not_found(name))?;
                    self.store.check_target(&object_type, index, target)?;
                    pending.push((index, target));
                }
                *value = FieldValue::Empty;
            } else {
                self.store.check_scalar(&object_type, index, value)?;
            }
        }
        let group = self.store.try_get_mut(handle)?.push_group(values)?;
        for (index, target) in pending {
            self.store.references.set(handle, index, target);
        }
        Ok(group)
    }

    /// Append `member` to a model object list
    pub fn append_to_list(&mut self, list: Handle, member: Handle) -> Result<usize> {
        let record = self.store.try_get(list)?;
        let object_type = record.object_type().clone();
        let field = record.len() + model_object_list::MODEL_OBJECT;
        self.store.check_target(&object_type, field, member)?;
        let group = self
            .store
            .try_get_mut(list)?
            .push_group(vec![FieldValue::Empty])?;
        self.store.references.set(list, field, member);
        Ok(group)
    }

    /// Members of a model object list, in list order
    ///
    /// Slots whose member was removed are skipped.
    pub fn list_members(&self, list: Handle) -> Vec<Handle> {
        let Some(record) = self.store.get(list) else {
            return Vec::new();
        };
        (0..record.num_groups())
            .filter_map(|g| {
                let field = record.group_field_index(g, model_object_list::MODEL_OBJECT);
                self.store.references.target(list, field)
            })
            .collect()
    }

    /// Drop every extensible group of an object, with its references
    pub fn clear_groups(&mut self, handle: Handle) -> Result<()> {
        let fixed = self.store.try_get(handle)?.layout().fields;
        self.store.references.clear_from(handle, fixed);
        self.store.try_get_mut(handle)?.clear_groups();
        Ok(())
    }

    pub(crate) fn store(&self) -> &ObjectStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut ObjectStore {
        &mut self.store
    }
}

impl ObjectGraph for Model {
    fn schema(&self) -> &dyn SchemaProvider {
        self.store.schema.as_ref()
    }

    fn get(&self, handle: Handle) -> Option<&SchemaRecord> {
        self.store.get(handle)
    }

    fn handles(&self) -> &[Handle] {
        self.store.order()
    }

    fn references(&self) -> &ReferenceIndex {
        &self.store.references
    }

    fn handle_by_name(&self, name: &str) -> Option<Handle> {
        self.store.names.get(name)
    }
}
