// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ReverseContext;
use crate::error::Result;
use hvac_bridge_model::{
    fields::{idf, os},
    Handle, ObjectType, SchemaRecord,
};

pub(super) fn translate_curve_quadratic(
    ctx: &mut ReverseContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::curve_quadratic as from;
    use os::curve_quadratic as to;

    let target = ctx.create_and_register(object, ObjectType::OsCurveQuadratic);
    ctx.copy_fields(
        object,
        target,
        &[
            (from::COEFFICIENT1_CONSTANT, to::COEFFICIENT1_CONSTANT),
            (from::COEFFICIENT2_X, to::COEFFICIENT2_X),
            (from::COEFFICIENT3_X2, to::COEFFICIENT3_X2),
            (from::MINIMUM_VALUE_OF_X, to::MINIMUM_VALUE_OF_X),
            (from::MAXIMUM_VALUE_OF_X, to::MAXIMUM_VALUE_OF_X),
        ],
    );
    Ok(target)
}

pub(super) fn translate_curve_cubic(
    ctx: &mut ReverseContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::curve_cubic as from;
    use os::curve_cubic as to;

    let target = ctx.create_and_register(object, ObjectType::OsCurveCubic);
    ctx.copy_fields(
        object,
        target,
        &[
            (from::COEFFICIENT1_CONSTANT, to::COEFFICIENT1_CONSTANT),
            (from::COEFFICIENT2_X, to::COEFFICIENT2_X),
            (from::COEFFICIENT3_X2, to::COEFFICIENT3_X2),
            (from::COEFFICIENT4_X3, to::COEFFICIENT4_X3),
            (from::MINIMUM_VALUE_OF_X, to::MINIMUM_VALUE_OF_X),
            (from::MAXIMUM_VALUE_OF_X, to::MAXIMUM_VALUE_OF_X),
        ],
    );
    Ok(target)
}
