// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw-text preservation in both directions of the reverse walk

use super::ReverseContext;
use crate::error::{Result, TranslateError};
use hvac_bridge_model::{
    fields::idf::catchall, FieldValue, Handle, ObjectGraph, ObjectType, SchemaRecord,
};

/// Keep a workspace object with no model counterpart as a model `Catchall`
pub(super) fn translate_catchall(ctx: &mut ReverseContext<'_>, object: &SchemaRecord) -> Result<Handle> {
    let target = ctx.create_and_register(object, ObjectType::Catchall);
    ctx.set_value(
        target,
        catchall::OBJECT_TYPE_NAME,
        FieldValue::Text(object.object_type().name().to_string()),
    );

    let workspace = ctx.workspace;
    for (index, value) in object.fields().iter().enumerate() {
        let raw = if value.is_empty() {
            FieldValue::Empty
        } else {
            FieldValue::Text(value.to_string())
        };
        ctx.model.push_group(target, vec![raw])?;
        if let Some(referenced) = workspace.references().target(object.handle(), index) {
            // Referenced objects still need a model counterpart
            ctx.translate_and_map(referenced);
        }
    }
    Ok(target)
}

/// Rebuild the model object a forward `Catchall` was written for
///
/// Raw text is re-parsed, so numbers and sentinels come back typed. A type
/// the schema knows stays a `Catchall` with the same type name and raw
/// groups, since its fields cannot be trusted to match the layout.
pub(super) fn restore_catchall(ctx: &mut ReverseContext<'_>, object: &SchemaRecord) -> Result<Handle> {
    let type_name = object
        .get_str(catchall::OBJECT_TYPE_NAME)
        .ok_or_else(|| TranslateError::missing("object type name"))?;
    let object_type = ObjectType::parse(type_name);

    if ctx.model.schema().object_schema(&object_type).is_some() {
        let target = ctx.create_and_register(object, ObjectType::Catchall);
        ctx.set_value(
            target,
            catchall::OBJECT_TYPE_NAME,
            FieldValue::Text(type_name.to_string()),
        );
        for group in object.groups() {
            ctx.model.push_group(target, group.to_vec())?;
        }
        return Ok(target);
    }

    let values: Vec<FieldValue> = object
        .groups()
        .map(|group| match group[catchall::RAW_FIELD].as_str() {
            Some(text) => FieldValue::parse_text(text),
            None => group[catchall::RAW_FIELD].clone(),
        })
        .collect();
    let target = ctx.model.add_object(SchemaRecord::free_form(object_type, values));
    Ok(ctx.map.insert(object.handle(), target))
}

#[cfg(test)]
mod tests {
    use crate::{ForwardTranslator, ReverseTranslator, TranslatorOptions};
    use hvac_bridge_model::{
        fields::idf::catchall, FieldValue, Model, ObjectGraph, ObjectType, SchemaRecord, Workspace,
    };

    #[test]
    fn test_unknown_model_object_survives_round_trip() {
        let mut model = Model::new();
        let mystery = ObjectType::Unknown("OS:Coil:Mystery".into());
        model.add_object(SchemaRecord::free_form(
            mystery.clone(),
            vec!["Mystery 1".into(), FieldValue::Integer(7), FieldValue::Empty],
        ));

        let ws = ForwardTranslator::with_options(TranslatorOptions::new().with_version_object(false))
            .translate_model(&model);
        let mut reverse = ReverseTranslator::new();
        let back = reverse.translate_workspace(&ws);

        let restored = back.objects_by_type(&mystery);
        assert_eq!(restored.len(), 1);
        assert_eq!(
            restored[0].fields(),
            &[
                FieldValue::from("Mystery 1"),
                FieldValue::Integer(7),
                FieldValue::Empty
            ]
        );
        assert!(reverse.warnings().is_empty());
    }

    #[test]
    fn test_known_type_keeps_its_type_name() {
        let mut ws = Workspace::new();
        let record = SchemaRecord::from_schema(ws.schema(), ObjectType::Catchall)
            .with_field(catchall::OBJECT_TYPE_NAME, "Curve:Cubic");
        let handle = ws.add_object(record);
        ws.push_group(handle, vec!["Odd Curve".into()]).unwrap();
        ws.push_group(handle, vec!["0.5".into()]).unwrap();

        let mut reverse = ReverseTranslator::new();
        let model = reverse.translate_workspace(&ws);
        let kept = model.objects_by_type(&ObjectType::Catchall);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get_str(catchall::OBJECT_TYPE_NAME), Some("Curve:Cubic"));
        let groups: Vec<&[FieldValue]> = kept[0].groups().collect();
        assert_eq!(
            groups,
            vec![&[FieldValue::from("Odd Curve")][..], &[FieldValue::from("0.5")][..]]
        );

        // And back again without another layer of wrapping
        let ws = ForwardTranslator::with_options(TranslatorOptions::new().with_version_object(false))
            .translate_model(&model);
        let again = ws.objects_by_type(&ObjectType::Catchall);
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].get_str(catchall::OBJECT_TYPE_NAME), Some("Curve:Cubic"));
        assert_eq!(again[0].num_groups(), 2);
    }
}
