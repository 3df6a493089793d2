// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ReverseContext;
use crate::error::Result;
use hvac_bridge_model::{
    fields::{idf, os},
    Handle, ObjectType, SchemaRecord,
};

pub(super) fn translate_schedule_type_limits(
    ctx: &mut ReverseContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::schedule_type_limits as from;
    use os::schedule_type_limits as to;

    let target = ctx.create_and_register(object, ObjectType::OsScheduleTypeLimits);
    ctx.copy_fields(
        object,
        target,
        &[
            (from::LOWER_LIMIT_VALUE, to::LOWER_LIMIT_VALUE),
            (from::UPPER_LIMIT_VALUE, to::UPPER_LIMIT_VALUE),
            (from::NUMERIC_TYPE, to::NUMERIC_TYPE),
            (from::UNIT_TYPE, to::UNIT_TYPE),
        ],
    );
    Ok(target)
}

pub(super) fn translate_schedule_constant(
    ctx: &mut ReverseContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::schedule_constant as from;
    use os::schedule_constant as to;

    let target = ctx.create_and_register(object, ObjectType::OsScheduleConstant);
    ctx.copy_fields(object, target, &[(from::HOURLY_VALUE, to::VALUE)]);

    if let Some(limits) = ctx.translate_reference(object, from::SCHEDULE_TYPE_LIMITS_NAME) {
        ctx.set_pointer(target, to::SCHEDULE_TYPE_LIMITS_NAME, limits);
    }
    Ok(target)
}
