// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Refrigeration compressors, cases and systems
//!
//! A model system holds its compressors and cases in two object lists. The
//! workspace system has one pointer per relation, so each non-empty list
//! becomes a synthetic `Refrigeration:CompressorList` or
//! `Refrigeration:CaseAndWalkInList`.

use super::ForwardContext;
use crate::{
    aggregate::{self, CASE_AND_WALKIN_LIST, COMPRESSOR_LIST},
    error::{Result, TranslateError},
};
use hvac_bridge_model::{
    fields::{idf, os},
    Handle, ObjectType, SchemaRecord,
};

pub(super) fn translate_compressor(
    ctx: &mut ForwardContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::refrigeration_compressor as to;
    use os::refrigeration_compressor as from;

    let power_curve = ctx.require_reference(object, from::POWER_CURVE, "power curve")?;
    let capacity_curve = ctx.require_reference(object, from::CAPACITY_CURVE, "capacity curve")?;

    let target = ctx.create_and_register(object, ObjectType::RefrigerationCompressor);
    ctx.copy_fields(
        object,
        target,
        &[
            (from::RATED_SUPERHEAT, to::RATED_SUPERHEAT),
            (from::RATED_RETURN_GAS_TEMPERATURE, to::RATED_RETURN_GAS_TEMPERATURE),
        ],
    );
    ctx.copy_or_default(object, from::END_USE_SUBCATEGORY, target, to::END_USE_SUBCATEGORY);

    let power = ctx
        .translate_and_map(power_curve)
        .ok_or_else(|| TranslateError::missing("power curve"))?;
    ctx.set_pointer(target, to::POWER_CURVE_NAME, power);

    let capacity = ctx
        .translate_and_map(capacity_curve)
        .ok_or_else(|| TranslateError::missing("capacity curve"))?;
    ctx.set_pointer(target, to::CAPACITY_CURVE_NAME, capacity);

    Ok(target)
}

pub(super) fn translate_case(ctx: &mut ForwardContext<'_>, object: &SchemaRecord) -> Result<Handle> {
    use idf::refrigeration_case as to;
    use os::refrigeration_case as from;

    let target = ctx.create_and_register(object, ObjectType::RefrigerationCase);
    ctx.copy_fields(
        object,
        target,
        &[
            (
                from::RATED_TOTAL_COOLING_CAPACITY_PER_UNIT_LENGTH,
                to::RATED_TOTAL_COOLING_CAPACITY_PER_UNIT_LENGTH,
            ),
            (from::CASE_LENGTH, to::CASE_LENGTH),
            (from::CASE_OPERATING_TEMPERATURE, to::CASE_OPERATING_TEMPERATURE),
        ],
    );

    if let Some(schedule) = ctx.translate_reference(object, from::AVAILABILITY_SCHEDULE) {
        ctx.set_pointer(target, to::AVAILABILITY_SCHEDULE_NAME, schedule);
    }
    Ok(target)
}

pub(super) fn translate_system(ctx: &mut ForwardContext<'_>, object: &SchemaRecord) -> Result<Handle> {
    use idf::refrigeration_system as to;
    use os::refrigeration_system as from;

    let compressors = ctx.list_members(object, from::COMPRESSOR_LIST);
    if compressors.is_empty() {
        return Err(TranslateError::missing("compressor"));
    }
    let cases = ctx.list_members(object, from::CASE_AND_WALKIN_LIST);

    let target = ctx.create_and_register(object, ObjectType::RefrigerationSystem);
    ctx.copy_or_default(
        object,
        from::MINIMUM_CONDENSING_TEMPERATURE,
        target,
        to::MINIMUM_CONDENSING_TEMPERATURE,
    );
    ctx.copy_or_default(object, from::WORKING_FLUID_TYPE, target, to::WORKING_FLUID_TYPE);
    ctx.copy_or_default(
        object,
        from::SUCTION_TEMPERATURE_CONTROL_TYPE,
        target,
        to::SUCTION_TEMPERATURE_CONTROL_TYPE,
    );

    if let Some(list) = aggregate::synthesize(ctx, target, &CASE_AND_WALKIN_LIST, &cases) {
        ctx.set_pointer(target, to::CASE_OR_WALKIN_OR_LIST_NAME, list);
    }
    let list = aggregate::synthesize(ctx, target, &COMPRESSOR_LIST, &compressors)
        .ok_or_else(|| TranslateError::missing("compressor"))?;
    ctx.set_pointer(target, to::COMPRESSOR_OR_COMPRESSOR_LIST_NAME, list);
    Ok(target)
}
