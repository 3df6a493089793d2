// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Record storage shared by the model and workspace graphs

use crate::{
    error::{GraphError, Result},
    FieldValue, Handle, NameTable, ObjectType, ReferenceIndex, SchemaProvider, SchemaRecord,
};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Records, names and pointer edges of one graph
pub(crate) struct ObjectStore {
    pub(crate) schema: Arc<dyn SchemaProvider>,
    objects: FxHashMap<Handle, SchemaRecord>,
    order: Vec<Handle>,
    pub(crate) names: NameTable,
    pub(crate) references: ReferenceIndex,
}

impl ObjectStore {
    pub(crate) fn new(schema: Arc<dyn SchemaProvider>) -> Self {
        Self {
            schema,
            objects: FxHashMap::default(),
            order: Vec::new(),
            names: NameTable::new(),
            references: ReferenceIndex::new(),
        }
    }

    pub(crate) fn get(&self, handle: Handle) -> Option<&SchemaRecord> {
        self.objects.get(&handle)
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut SchemaRecord> {
        self.objects.get_mut(&handle)
    }

    pub(crate) fn try_get(&self, handle: Handle) -> Result<&SchemaRecord> {
        self.get(handle).ok_or(GraphError::ObjectNotFound(handle))
    }

    pub(crate) fn try_get_mut(&mut self, handle: Handle) -> Result<&mut SchemaRecord> {
        self.objects
            .get_mut(&handle)
            .ok_or(GraphError::ObjectNotFound(handle))
    }

    pub(crate) fn order(&self) -> &[Handle] {
        &self.order
    }

    /// Insert a record, making its name and handle unique
    ///
    /// A colliding name is suffixed (`X` becomes `X 1`), an empty one is
    /// replaced by a numbered default. A record whose handle is already held,
    /// such as a clone of a stored record, is given a fresh one.
    pub(crate) fn insert(&mut self, mut record: SchemaRecord) -> Handle {
        let mut handle = record.handle();
        if self.objects.contains_key(&handle) {
            let fresh = record.reissue_handle();
            log::debug!("Handle {} is taken, using {}", handle, fresh);
            handle = fresh;
        }
        if let Some(index) = record.layout().name_field {
            let name = match record.name() {
                Some(name) if !self.names.is_taken(name, Some(handle)) => name.to_string(),
                Some(name) => {
                    let unique = self.names.next_available(name);
                    log::debug!("Name '{}' is taken, using '{}'", name, unique);
                    unique
                }
                None => self
                    .names
                    .numbered(&record.object_type().default_name_base()),
            };
            // Cannot fail: the name was checked above
            let _ = record.set(index, FieldValue::Text(name.clone()));
            let _ = self.names.insert(&name, handle);
        }
        self.order.push(handle);
        self.objects.insert(handle, record);
        handle
    }

    /// Remove a record and every edge touching it
    ///
    /// Returns the record and the incoming edges that were dropped.
    pub(crate) fn remove(&mut self, handle: Handle) -> Option<(SchemaRecord, Vec<(Handle, usize)>)> {
        let record = self.objects.remove(&handle)?;
        self.order.retain(|&h| h != handle);
        if let Some(name) = record.name() {
            self.names.remove(name, handle);
        }
        let incoming = self.references.remove_object(handle);
        Some((record, incoming))
    }

    /// Change a name, returning the old one
    ///
    /// Nothing is mutated on failure.
    pub(crate) fn rename(&mut self, handle: Handle, new_name: &str) -> Result<Option<String>> {
        let record = self.try_get(handle)?;
        let index = record
            .layout()
            .name_field
            .ok_or_else(|| GraphError::NoNameField(record.object_type().clone()))?;
        if new_name.trim().is_empty() {
            return Err(GraphError::invalid_value(
                record.object_type(),
                index,
                "names cannot be empty",
            ));
        }
        if let Some(existing) = self.names.get(new_name).filter(|&h| h != handle) {
            return Err(GraphError::NameConflict {
                name: new_name.to_string(),
                existing,
            });
        }
        let old = record.name().map(str::to_string);
        if let Some(old_name) = &old {
            self.names.remove(old_name, handle);
        }
        self.names.insert(new_name, handle)?;
        self.try_get_mut(handle)?
            .set(index, FieldValue::Text(new_name.to_string()))?;
        Ok(old)
    }

    /// Check that `target` may be stored in field `index` of a `source_type`
    /// record
    pub(crate) fn check_target(
        &self,
        source_type: &ObjectType,
        index: usize,
        target: Handle,
    ) -> Result<&SchemaRecord> {
        if !self.schema.is_pointer_field(source_type, index) {
            return Err(GraphError::NotAPointerField {
                object_type: source_type.clone(),
                index,
            });
        }
        let target_record = self.try_get(target)?;
        if !self
            .schema
            .can_be_target(source_type, index, target_record.object_type())
        {
            return Err(GraphError::IncompatibleTarget {
                object_type: source_type.clone(),
                index,
                target_type: target_record.object_type().clone(),
            });
        }
        Ok(target_record)
    }

    /// Full pointer check for an existing field of an existing record
    pub(crate) fn check_pointer(
        &self,
        source: Handle,
        index: usize,
        target: Handle,
    ) -> Result<&SchemaRecord> {
        let record = self.try_get(source)?;
        if index >= record.len() {
            return Err(GraphError::out_of_range(
                record.object_type(),
                index,
                record.len(),
            ));
        }
        self.check_target(record.object_type(), index, target)
    }

    /// Validate a scalar against the field definition
    pub(crate) fn check_scalar(
        &self,
        object_type: &ObjectType,
        index: usize,
        value: &FieldValue,
    ) -> Result<()> {
        match self.schema.field(object_type, index) {
            Some(field) => field
                .check(value)
                .map_err(|msg| GraphError::invalid_value(object_type, index, msg)),
            None => Ok(()),
        }
    }
}
