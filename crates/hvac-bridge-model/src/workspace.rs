// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Workspace (IDF) object graph
//!
//! Pointer fields hold the target's current name as text. Every resolved
//! pointer is mirrored in the reference index, which drives the rename
//! cascade: renaming an object rewrites the text of every field pointing at
//! it.

use crate::{
    error::{GraphError, Result},
    store::ObjectStore,
    BuiltinSchema, FieldValue, Handle, ObjectGraph, ObjectType, ReferenceIndex, SchemaProvider,
    SchemaRecord,
};
use std::sync::Arc;

/// Schema-constrained text object graph
pub struct Workspace {
    store: ObjectStore,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create an empty workspace over the built-in schema
    pub fn new() -> Self {
        Self::with_schema(Arc::new(BuiltinSchema))
    }

    /// Create an empty workspace over a custom schema
    pub fn with_schema(schema: Arc<dyn SchemaProvider>) -> Self {
        Self {
            store: ObjectStore::new(schema),
        }
    }

    /// Create a defaulted object of the given type
    pub fn create_object(&mut self, object_type: ObjectType, name: &str) -> Handle {
        let record = SchemaRecord::from_schema(self.store.schema.as_ref(), object_type);
        let record = if name.is_empty() { record } else { record.with_name(name) };
        self.store.insert(record)
    }

    /// Add one prepared record
    ///
    /// Returns the handle the record is stored under, which is fresh when
    /// the record's own handle is already in use.
    pub fn add_object(&mut self, record: SchemaRecord) -> Handle {
        let handle = self.store.insert(record);
        self.link_pointer_text(handle);
        handle
    }

    /// Add a batch of records
    ///
    /// All records are inserted before pointers are resolved, so records in
    /// the batch may refer to each other in any order. Unresolvable pointer
    /// text is kept but produces no edge.
    pub fn add_objects(&mut self, records: Vec<SchemaRecord>) -> Vec<Handle> {
        let handles: Vec<Handle> = records
            .into_iter()
            .map(|record| self.store.insert(record))
            .collect();
        for &handle in &handles {
            self.link_pointer_text(handle);
        }
        handles
    }

    /// Record edges for the names already written in pointer fields
    fn link_pointer_text(&mut self, handle: Handle) {
        let pending: Vec<(usize, String)> = match self.store.get(handle) {
            Some(record) => (0..record.len())
                .filter(|&i| self.store.schema.is_pointer_field(record.object_type(), i))
                .filter_map(|i| record.get_str(i).map(|name| (i, name.to_string())))
                .collect(),
            None => return,
        };
        for (index, name) in pending {
            if let Err(e) = self.set_pointer_by_name(handle, index, &name) {
                log::warn!("Unresolved reference '{}' in field {} of {}: {}", name, index, handle, e);
            }
        }
    }

    /// Remove an object
    ///
    /// Fields that pointed at it are blanked.
    pub fn remove_object(&mut self, handle: Handle) -> Option<SchemaRecord> {
        let (record, incoming) = self.store.remove(handle)?;
        for (source, field) in incoming {
            if let Some(source_record) = self.store.get_mut(source) {
                let _ = source_record.set(field, FieldValue::Empty);
            }
        }
        Some(record)
    }

    /// Rename an object and rewrite every field that points at it
    pub fn rename(&mut self, handle: Handle, new_name: &str) -> Result<()> {
        self.store.rename(handle, new_name)?;
        let sources = self.store.references.sources(handle).to_vec();
        for (source, field) in sources {
            if let Some(record) = self.store.get_mut(source) {
                record.set(field, FieldValue::Text(new_name.to_string()))?;
            }
        }
        Ok(())
    }

    /// Point `field` of `source` at `target`, storing the target's name
    pub fn set_pointer(&mut self, source: Handle, field: usize, target: Handle) -> Result<()> {
        let target_record = self.store.check_pointer(source, field, target)?;
        let name = target_record
            .name()
            .ok_or_else(|| GraphError::NoNameField(target_record.object_type().clone()))?
            .to_string();
        self.store.try_get_mut(source)?.set(field, FieldValue::Text(name))?;
        self.store.references.set(source, field, target);
        Ok(())
    }

    /// Point `field` of `source` at the object called `name`
    pub fn set_pointer_by_name(&mut self, source: Handle, field: usize, name: &str) -> Result<()> {
        let target = self
            .store
            .names
            .get(name)
            .ok_or_else(|| GraphError::name_not_found(name))?;
        self.set_pointer(source, field, target)
    }

    /// Blank a pointer field, returning the previous target
    ///
    /// Fields that are not pointer fields are left untouched.
    pub fn clear_pointer(&mut self, source: Handle, field: usize) -> Option<Handle> {
        let schema = self.store.schema.clone();
        let record = self.store.get_mut(source)?;
        if !schema.is_pointer_field(record.object_type(), field) {
            return None;
        }
        let _ = record.set(field, FieldValue::Empty);
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
                Some(name) => self.set_pointer_by_name(handle, index, name),
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
    /// Pointer slots must name existing objects; nothing is written if any of
    /// them fails to resolve.
    pub fn push_group(&mut self, handle: Handle, values: Vec<FieldValue>) -> Result<usize> {
        let record = self.store.try_get(handle)?;
        let object_type = record.object_type().clone();
        let start = record.len();
        let mut pending = Vec::new();
        for (offset, value) in values.iter().enumerate() {
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
            } else {
                self.store.check_scalar(&object_type, index, value)?;
            }
        }

        let group = self.store.try_get_mut(handle)?.push_group(values)?;
        for (index, target) in pending {
            self.set_pointer(handle, index, target)?;
        }
        Ok(group)
    }

    /// Drop every extensible group of an object, with its references
    pub fn clear_groups(&mut self, handle: Handle) -> Result<()> {
        let fixed = self.store.try_get(handle)?.layout().fields;
        self.store.references.clear_from(handle, fixed);
        self.store.try_get_mut(handle)?.clear_groups();
        Ok(())
    }
}

impl ObjectGraph for Workspace {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::idf::{
        refrigeration_case, refrigeration_compressor, refrigeration_compressor_list,
        schedule_constant,
    };
    use crate::ObjectGraphExt;

    fn schedule(ws: &mut Workspace, name: &str) -> Handle {
        ws.create_object(ObjectType::ScheduleConstant, name)
    }

    #[test]
    fn test_rename_cascade() {
        let mut ws = Workspace::new();
        let x = schedule(&mut ws, "X");
        let y = ws.create_object(ObjectType::RefrigerationCase, "Y");
        let z = ws.create_object(ObjectType::RefrigerationCase, "Z");
        ws.set_pointer(y, refrigeration_case::AVAILABILITY_SCHEDULE_NAME, x)
            .unwrap();
        ws.set_pointer(z, refrigeration_case::AVAILABILITY_SCHEDULE_NAME, x)
            .unwrap();

        ws.rename(x, "X2").unwrap();

        for case in [y, z] {
            assert_eq!(
                ws.get(case)
                    .unwrap()
                    .get_str(refrigeration_case::AVAILABILITY_SCHEDULE_NAME),
                Some("X2")
            );
        }
        assert_eq!(
            ws.get_sources(x, None),
            vec![
                (y, refrigeration_case::AVAILABILITY_SCHEDULE_NAME),
                (z, refrigeration_case::AVAILABILITY_SCHEDULE_NAME)
            ]
        );
        assert!(ws.references().is_consistent());
    }

    #[test]
    fn test_rename_conflict_leaves_graph_untouched() {
        let mut ws = Workspace::new();
        let x = schedule(&mut ws, "X");
        schedule(&mut ws, "Other");
        let y = ws.create_object(ObjectType::RefrigerationCase, "Y");
        ws.set_pointer(y, refrigeration_case::AVAILABILITY_SCHEDULE_NAME, x)
            .unwrap();

        let err = ws.rename(x, "OTHER").unwrap_err();
        assert!(matches!(err, GraphError::NameConflict { .. }));
        assert_eq!(ws.get(x).unwrap().name(), Some("X"));
        assert_eq!(
            ws.get(y)
                .unwrap()
                .get_str(refrigeration_case::AVAILABILITY_SCHEDULE_NAME),
            Some("X")
        );
        assert_eq!(ws.handle_by_name("x"), Some(x));
    }

    #[test]
    fn test_set_pointer_writes_current_name() {
        let mut ws = Workspace::new();
        let limits = ws.create_object(ObjectType::ScheduleTypeLimits, "Fraction");
        let s = schedule(&mut ws, "S");
        ws.set_pointer_by_name(s, schedule_constant::SCHEDULE_TYPE_LIMITS_NAME, "FRACTION")
            .unwrap();
        assert_eq!(
            ws.get(s)
                .unwrap()
                .get_str(schedule_constant::SCHEDULE_TYPE_LIMITS_NAME),
            Some("Fraction")
        );
        assert_eq!(
            ws.get_target(s, schedule_constant::SCHEDULE_TYPE_LIMITS_NAME)
                .unwrap()
                .handle(),
            limits
        );
        assert!(ws
            .set_pointer_by_name(s, schedule_constant::SCHEDULE_TYPE_LIMITS_NAME, "Missing")
            .is_err());
    }

    #[test]
    fn test_incompatible_pointer_is_rejected() {
        let mut ws = Workspace::new();
        let s = schedule(&mut ws, "S");
        let case = ws.create_object(ObjectType::RefrigerationCase, "Case");
        let err = ws
            .set_pointer(s, schedule_constant::SCHEDULE_TYPE_LIMITS_NAME, case)
            .unwrap_err();
        assert!(matches!(err, GraphError::IncompatibleTarget { .. }));
        assert!(ws
            .get(s)
            .unwrap()
            .is_empty_field(schedule_constant::SCHEDULE_TYPE_LIMITS_NAME));
    }

    #[test]
    fn test_add_objects_resolves_forward_references() {
        let mut ws = Workspace::new();
        let compressor = SchemaRecord::from_schema(&BuiltinSchema, ObjectType::RefrigerationCompressor)
            .with_name("Comp")
            .with_field(refrigeration_compressor::POWER_CURVE_NAME, "Power")
            .with_field(refrigeration_compressor::CAPACITY_CURVE_NAME, "Nowhere");
        let curve = SchemaRecord::from_schema(&BuiltinSchema, ObjectType::CurveCubic).with_name("power");
        let handles = ws.add_objects(vec![compressor, curve]);

        let target = ws
            .get_target(handles[0], refrigeration_compressor::POWER_CURVE_NAME)
            .unwrap();
        assert_eq!(target.handle(), handles[1]);
        assert_eq!(
            ws.get(handles[0])
                .unwrap()
                .get_str(refrigeration_compressor::POWER_CURVE_NAME),
            Some("power")
        );
        // Unresolved text survives without an edge
        assert!(ws
            .get_target(handles[0], refrigeration_compressor::CAPACITY_CURVE_NAME)
            .is_none());
        assert_eq!(
            ws.get(handles[0])
                .unwrap()
                .get_str(refrigeration_compressor::CAPACITY_CURVE_NAME),
            Some("Nowhere")
        );
    }

    #[test]
    fn test_push_group_and_remove_blanks_names() {
        let mut ws = Workspace::new();
        let list = ws.create_object(ObjectType::RefrigerationCompressorList, "List");
        let a = ws.create_object(ObjectType::RefrigerationCompressor, "A");
        let b = ws.create_object(ObjectType::RefrigerationCompressor, "B");
        ws.push_group(list, vec!["A".into()]).unwrap();
        ws.push_group(list, vec!["b".into()]).unwrap();
        assert!(ws.push_group(list, vec!["C".into()]).is_err());
        assert_eq!(ws.get(list).unwrap().num_groups(), 2);

        let second = ws
            .get(list)
            .unwrap()
            .group_field_index(1, refrigeration_compressor_list::COMPRESSOR_NAME);
        assert_eq!(ws.get_target(list, second).unwrap().handle(), b);

        ws.remove_object(a);
        assert!(ws.get(list).unwrap().is_empty_field(1));
        assert_eq!(ws.source_objects(b, None).len(), 1);
        assert!(ws.references().is_consistent());
    }

    #[test]
    fn test_unnamed_objects_get_defaults() {
        let mut ws = Workspace::new();
        let a = ws.create_object(ObjectType::RefrigerationCompressorList, "");
        let v = ws.create_object(ObjectType::Version, "");
        assert_eq!(
            ws.get(a).unwrap().name(),
            Some("Refrigeration CompressorList 1")
        );
        assert_eq!(ws.get(v).unwrap().name(), None);
        assert_eq!(ws.len(), 2);
    }

    #[test]
    fn test_added_clone_gets_a_fresh_handle() {
        let mut ws = Workspace::new();
        let record = SchemaRecord::from_schema(ws.schema(), ObjectType::ScheduleConstant)
            .with_name("Half")
            .with_field(schedule_constant::HOURLY_VALUE, 0.5);
        let a = ws.add_object(record.clone());
        let b = ws.add_object(record.with_field(schedule_constant::HOURLY_VALUE, 0.9));

        assert_ne!(a, b);
        assert_eq!(ws.handles(), &[a, b]);
        assert_eq!(ws.get(a).unwrap().get_f64(schedule_constant::HOURLY_VALUE), Some(0.5));
        let second = ws.get(b).unwrap();
        assert_eq!(second.handle(), b);
        assert_eq!(second.name(), Some("Half 1"));
        assert_eq!(second.get_f64(schedule_constant::HOURLY_VALUE), Some(0.9));
    }

    #[test]
    fn test_clear_pointer_leaves_scalars_alone() {
        let mut ws = Workspace::new();
        let curve = ws.create_object(ObjectType::CurveCubic, "Curve");
        let c = ws.create_object(ObjectType::RefrigerationCompressor, "C");
        ws.set_pointer(c, refrigeration_compressor::POWER_CURVE_NAME, curve)
            .unwrap();
        ws.set_field(c, refrigeration_compressor::RATED_SUPERHEAT, FieldValue::Real(5.0))
            .unwrap();

        assert_eq!(ws.clear_pointer(c, refrigeration_compressor::RATED_SUPERHEAT), None);
        assert_eq!(
            ws.get(c).unwrap().get_f64(refrigeration_compressor::RATED_SUPERHEAT),
            Some(5.0)
        );

        assert_eq!(
            ws.clear_pointer(c, refrigeration_compressor::POWER_CURVE_NAME),
            Some(curve)
        );
        assert!(ws
            .get(c)
            .unwrap()
            .is_empty_field(refrigeration_compressor::POWER_CURVE_NAME));
        assert!(ws.get_sources(curve, None).is_empty());
    }
}
