// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schema records
//!
//! A record is an object type tag plus a flat field vector. Extensible groups
//! follow the fixed fields: group `g`, offset `o` lives at
//! `layout.fields + g * layout.group_width + o`.

use crate::{
    error::{GraphError, Result},
    FieldValue, Handle, ObjectType, RecordLayout, SchemaProvider,
};
use serde::{Deserialize, Serialize};

/// One object in a graph
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SchemaRecord {
    handle: Handle,
    object_type: ObjectType,
    layout: RecordLayout,
    fields: Vec<FieldValue>,
}

impl SchemaRecord {
    /// Create an empty record with a fresh handle
    pub fn new(object_type: ObjectType, layout: RecordLayout) -> Self {
        Self {
            handle: Handle::next(),
            object_type,
            layout,
            fields: vec![FieldValue::Empty; layout.fields],
        }
    }

    /// Create an empty record shaped by the schema
    pub fn from_schema(schema: &dyn SchemaProvider, object_type: ObjectType) -> Self {
        let layout = schema.layout(&object_type);
        Self::new(object_type, layout)
    }

    /// Create a record of unknown shape holding raw values
    pub fn free_form(object_type: ObjectType, values: Vec<FieldValue>) -> Self {
        Self {
            handle: Handle::next(),
            object_type,
            layout: RecordLayout::free_form(values.len()),
            fields: values,
        }
    }

    /// Builder-style name assignment for records not yet in a graph
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        if let Some(index) = self.layout.name_field {
            self.fields[index] = FieldValue::Text(name.into());
        }
        self
    }

    /// Builder-style field assignment for records not yet in a graph
    ///
    /// Out-of-range indices are ignored.
    pub fn with_field(mut self, index: usize, value: impl Into<FieldValue>) -> Self {
        if let Some(slot) = self.fields.get_mut(index) {
            *slot = value.into();
        }
        self
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Give the record a fresh handle, returning it
    pub(crate) fn reissue_handle(&mut self) -> Handle {
        self.handle = Handle::next();
        self.handle
    }

    pub fn object_type(&self) -> &ObjectType {
        &self.object_type
    }

    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    /// All field values, fixed fields first
    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Current name, `None` when unnamed or the type has no name field
    pub fn name(&self) -> Option<&str> {
        self.layout
            .name_field
            .and_then(|index| self.fields.get(index))
            .and_then(FieldValue::as_str)
    }

    /// Short description used in log messages
    pub fn brief_description(&self) -> String {
        match self.name() {
            Some(name) => format!("Object of type '{}' named '{}'", self.object_type, name),
            None => format!("Unnamed object of type '{}'", self.object_type),
        }
    }

    /// Get field value by index
    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        self.fields.get(index)
    }

    /// Get text field, `None` when defaulted
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(FieldValue::as_str)
    }

    /// Get numeric field as float
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(FieldValue::as_f64)
    }

    /// Get numeric field as integer
    pub fn get_i64(&self, index: usize) -> Option<i64> {
        self.get(index).and_then(FieldValue::as_i64)
    }

    pub fn is_empty_field(&self, index: usize) -> bool {
        self.get(index).map_or(true, FieldValue::is_empty)
    }

    pub fn is_autosized(&self, index: usize) -> bool {
        self.get(index).is_some_and(FieldValue::is_autosize)
    }

    pub fn is_autocalculated(&self, index: usize) -> bool {
        self.get(index).is_some_and(FieldValue::is_autocalculate)
    }

    /// Overwrite a field
    ///
    /// Raw write: graph-held records go through the graph setters so that
    /// names and references stay consistent.
    pub fn set(&mut self, index: usize, value: FieldValue) -> Result<()> {
        let len = self.fields.len();
        match self.fields.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GraphError::out_of_range(&self.object_type, index, len)),
        }
    }

    // ========================================================================
    // Extensible groups
    // ========================================================================

    /// Number of complete extensible groups
    pub fn num_groups(&self) -> usize {
        if self.layout.group_width == 0 {
            return 0;
        }
        self.fields.len().saturating_sub(self.layout.fields) / self.layout.group_width
    }

    /// Flat index of a group field
    pub fn group_field_index(&self, group: usize, offset: usize) -> usize {
        self.layout.fields + group * self.layout.group_width + offset
    }

    /// Values of one group
    pub fn group(&self, group: usize) -> Option<&[FieldValue]> {
        if group >= self.num_groups() {
            return None;
        }
        let start = self.group_field_index(group, 0);
        self.fields.get(start..start + self.layout.group_width)
    }

    /// Iterate over all groups in order
    pub fn groups(&self) -> impl Iterator<Item = &[FieldValue]> {
        (0..self.num_groups()).filter_map(move |g| self.group(g))
    }

    /// Append a group, returning its index
    pub fn push_group(&mut self, values: Vec<FieldValue>) -> Result<usize> {
        if self.layout.group_width == 0 || values.len() != self.layout.group_width {
            return Err(GraphError::GroupWidthMismatch {
                object_type: self.object_type.clone(),
                expected: self.layout.group_width,
                actual: values.len(),
            });
        }
        let group = self.num_groups();
        self.fields.extend(values);
        Ok(group)
    }

    /// Drop every extensible group
    pub fn clear_groups(&mut self) {
        self.fields.truncate(self.layout.fields);
    }
}
