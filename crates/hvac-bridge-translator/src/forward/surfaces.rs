// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ForwardContext;
use crate::error::Result;
use hvac_bridge_model::{
    fields::{idf, os},
    Handle, ObjectType, SchemaRecord,
};

/// Surfaces may point at each other through their boundary condition object
pub(super) fn translate_surface(ctx: &mut ForwardContext<'_>, object: &SchemaRecord) -> Result<Handle> {
    use idf::building_surface_detailed as to;
    use os::surface as from;

    let target = ctx.create_and_register(object, ObjectType::BuildingSurfaceDetailed);
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
