// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ReverseContext;
use crate::error::Result;
use hvac_bridge_model::{
    fields::{idf, os},
    Handle, ObjectType, SchemaRecord,
};

pub(super) fn translate_surface(ctx: &mut ReverseContext<'_>, object: &SchemaRecord) -> Result<Handle> {
    use idf::building_surface_detailed as from;
    use os::surface as to;

    let target = ctx.create_and_register(object, ObjectType::OsSurface);
    ctx.copy_fields(
        object,
        target,
        &[
            (from::SURFACE_TYPE, to::SURFACE_TYPE),
            (from::OUTSIDE_BOUNDARY_CONDITION, to::OUTSIDE_BOUNDARY_CONDITION),
            (from::SUN_EXPOSURE, to::SUN_EXPOSURE),
            (from::WIND_EXPOSURE, to::WIND_EXPOSURE),
        ],
    );

    if let Some(adjacent) = ctx.translate_reference(object, from::OUTSIDE_BOUNDARY_CONDITION_OBJECT) {
        ctx.set_pointer(target, to::OUTSIDE_BOUNDARY_CONDITION_OBJECT, adjacent);
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use crate::ReverseTranslator;
    use hvac_bridge_model::{
        fields::{idf, os},
        ObjectGraph, ObjectType, SchemaRecord, Workspace,
    };

    #[test]
    fn test_matched_surfaces_in_one_batch() {
        use idf::building_surface_detailed as s;
        let mut ws = Workspace::new();
        let wall = |name: &str, other: &str| {
            SchemaRecord::from_schema(ws.schema(), ObjectType::BuildingSurfaceDetailed)
                .with_name(name)
                .with_field(s::SURFACE_TYPE, "Wall")
                .with_field(s::OUTSIDE_BOUNDARY_CONDITION, "Surface")
                .with_field(s::OUTSIDE_BOUNDARY_CONDITION_OBJECT, other)
        };
        let records = vec![wall("North", "South"), wall("South", "North")];
        ws.add_objects(records);

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        assert!(translator.warnings().is_empty());

        let north = model.find_by_name("North").unwrap();
        let south = model.find_by_name("South").unwrap();
        assert_eq!(north.object_type(), &ObjectType::OsSurface);
        let field = os::surface::OUTSIDE_BOUNDARY_CONDITION_OBJECT;
        assert_eq!(
            model.get_target(north.handle(), field).map(|r| r.handle()),
            Some(south.handle())
        );
        assert_eq!(
            model.get_target(south.handle(), field).map(|r| r.handle()),
            Some(north.handle())
        );
        // Model pointer slots hold no text
        assert!(north.is_empty_field(field));
    }
}
