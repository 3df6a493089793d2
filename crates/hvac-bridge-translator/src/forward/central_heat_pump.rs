// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Central heat pump systems
//!
//! Model modules are standalone objects gathered in a list. The workspace
//! system instead carries one inline extensible group per module, so modules
//! never produce objects of their own.

use super::ForwardContext;
use crate::error::{Result, TranslateError};
use hvac_bridge_model::{
    fields::{idf, os},
    FieldValue, Handle, ObjectGraph, ObjectType, SchemaRecord,
};

pub(super) fn translate_chiller_heater_performance(
    ctx: &mut ForwardContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::chiller_heater_performance as to;
    use os::chiller_heater_performance as from;

    let curve = ctx.require_reference(object, from::COOLING_MODE_CAPACITY_CURVE, "cooling capacity curve")?;

    let target = ctx.create_and_register(object, ObjectType::ChillerHeaterPerformanceElectricEir);
    ctx.copy_fields(
        object,
        target,
        &[
            (
                from::REFERENCE_COOLING_MODE_EVAPORATOR_CAPACITY,
                to::REFERENCE_COOLING_MODE_EVAPORATOR_CAPACITY,
            ),
            (from::REFERENCE_COOLING_MODE_COP, to::REFERENCE_COOLING_MODE_COP),
            (from::DESIGN_HOT_WATER_FLOW_RATE, to::DESIGN_HOT_WATER_FLOW_RATE),
        ],
    );

    let curve = ctx
        .translate_and_map(curve)
        .ok_or_else(|| TranslateError::missing("cooling capacity curve"))?;
    ctx.set_pointer(target, to::COOLING_MODE_CAPACITY_CURVE_NAME, curve);
    Ok(target)
}

pub(super) fn translate_central_heat_pump_system(
    ctx: &mut ForwardContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::central_heat_pump_system as to;
    use os::central_heat_pump_system as from;

    let modules = ctx.list_members(object, from::MODULE_LIST);

    let target = ctx.create_and_register(object, ObjectType::CentralHeatPumpSystem);
    ctx.copy_or_default(object, from::CONTROL_METHOD, target, to::CONTROL_METHOD);
    ctx.copy_or_default(object, from::ANCILLARY_POWER, target, to::ANCILLARY_POWER);

    if let Some(schedule) = ctx.translate_reference(object, from::ANCILLARY_OPERATION_SCHEDULE) {
        ctx.set_pointer(target, to::ANCILLARY_OPERATION_SCHEDULE_NAME, schedule);
    }

    for module in modules {
        if let Some(group) = module_group(ctx, module) {
            ctx.push_group(target, group);
        }
    }
    Ok(target)
}

/// Inline group values for one module
///
/// A module without a translatable performance component is skipped with a
/// warning. The group is written by name, so the workspace resolves each
/// pointer slot on insertion.
fn module_group(ctx: &mut ForwardContext<'_>, module: Handle) -> Option<Vec<FieldValue>> {
    use os::central_heat_pump_system_module as from;

    let model = ctx.model;
    let record = model.get(module)?;

    let Some(performance) = ctx.translate_reference(record, from::PERFORMANCE_COMPONENT) else {
        ctx.log.warn(
            Some(record),
            "Module skipped: no translatable performance component",
        );
        return None;
    };
    let performance_type = ctx
        .workspace
        .get(performance)
        .map(|r| r.object_type().name().to_string())
        .unwrap_or_default();

    let schedule = ctx
        .translate_reference(record, from::CONTROL_SCHEDULE)
        .map(|s| FieldValue::Text(ctx.target_name(s)))
        .unwrap_or_default();

    let count = match record.get(from::NUMBER_OF_MODULES) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => FieldValue::Integer(1),
    };

    Some(vec![
        FieldValue::Text(performance_type),
        FieldValue::Text(ctx.target_name(performance)),
        schedule,
        count,
    ])
}
