// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ForwardContext;
use crate::error::Result;
use hvac_bridge_model::{
    fields::idf::catchall, FieldValue, Handle, ObjectGraph, ObjectType, SchemaRecord,
};

/// Preserve an object with no dedicated translation as raw text
///
/// Field 0 carries the source type name, every source field follows as one
/// group. Pointer fields pull in the referenced object and are written as
/// the name of its translation.
pub(super) fn translate_catchall(ctx: &mut ForwardContext<'_>, object: &SchemaRecord) -> Result<Handle> {
    let target = ctx.create_and_register(object, ObjectType::Catchall);
    ctx.set_value(
        target,
        catchall::OBJECT_TYPE_NAME,
        FieldValue::Text(object.object_type().name().to_string()),
    );

    let model = ctx.model;
    for (index, value) in object.fields().iter().enumerate() {
        let raw = match model.references().target(object.handle(), index) {
            Some(referenced) => {
                let translated = ctx
                    .translate_and_map(referenced)
                    .map(|handle| ctx.target_name(handle))
                    .filter(|name| !name.is_empty());
                // Unnamed translations (another Catchall) keep the source name
                translated
                    .or_else(|| model.get(referenced).and_then(SchemaRecord::name).map(str::to_string))
                    .map(FieldValue::Text)
                    .unwrap_or_default()
            }
            None if value.is_empty() => FieldValue::Empty,
            None => FieldValue::Text(value.to_string()),
        };
        ctx.push_group(target, vec![raw]);
    }
    Ok(target)
}

/// Carry a model `Catchall` over unchanged, type name and raw groups alike
pub(super) fn copy_catchall(ctx: &mut ForwardContext<'_>, object: &SchemaRecord) -> Result<Handle> {
    let target = ctx.create_and_register(object, ObjectType::Catchall);
    if let Some(type_name) = object.get(catchall::OBJECT_TYPE_NAME) {
        ctx.set_value(target, catchall::OBJECT_TYPE_NAME, type_name.clone());
    }
    for group in object.groups() {
        ctx.push_group(target, group.to_vec());
    }
    Ok(target)
}
