// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Central heat pump systems
//!
//! Each inline group of the workspace system becomes a standalone module
//! object, collected in a `"<system> Module List"`. The control schedule of
//! a group is assigned to the module built from that group.

use super::ReverseContext;
use crate::error::{Result, TranslateError};
use hvac_bridge_model::{
    fields::{idf, os},
    FieldValue, Handle, ObjectType, SchemaRecord,
};

pub(super) fn translate_chiller_heater_performance(
    ctx: &mut ReverseContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::chiller_heater_performance as from;
    use os::chiller_heater_performance as to;

    let curve = ctx.require_reference(object, from::COOLING_MODE_CAPACITY_CURVE_NAME, "cooling capacity curve")?;

    let target = ctx.create_and_register(object, ObjectType::OsChillerHeaterPerformanceElectricEir);
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
    ctx.set_pointer(target, to::COOLING_MODE_CAPACITY_CURVE, curve);
    Ok(target)
}

pub(super) fn translate_central_heat_pump_system(
    ctx: &mut ReverseContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::central_heat_pump_system as from;
    use os::central_heat_pump_system as to;

    let target = ctx.create_and_register(object, ObjectType::OsCentralHeatPumpSystem);
    ctx.copy_fields(
        object,
        target,
        &[
            (from::CONTROL_METHOD, to::CONTROL_METHOD),
            (from::ANCILLARY_POWER, to::ANCILLARY_POWER),
        ],
    );
    if let Some(schedule) = ctx.translate_reference(object, from::ANCILLARY_OPERATION_SCHEDULE_NAME) {
        ctx.set_schedule(target, to::ANCILLARY_OPERATION_SCHEDULE, schedule, "Ancillary Operation");
    }

    let list_name = format!("{} Module List", ctx.target_name(target));
    let list = ctx.create_unmapped(ObjectType::OsModelObjectList, &list_name);
    ctx.set_pointer(target, to::MODULE_LIST, list);

    for group in 0..object.num_groups() {
        if let Some(module) = translate_module(ctx, object, group) {
            ctx.append_to_list(list, module);
        }
    }
    Ok(target)
}

/// Build the module object for one inline group
fn translate_module(ctx: &mut ReverseContext<'_>, object: &SchemaRecord, group: usize) -> Option<Handle> {
    use idf::central_heat_pump_system as from;
    use os::central_heat_pump_system_module as to;

    let performance_field = object.group_field_index(group, from::PERFORMANCE_COMPONENT_NAME);
    let Some(performance) = ctx.translate_reference(object, performance_field) else {
        ctx.log.warn(
            Some(object),
            format!("Module {} skipped: no translatable performance component", group + 1),
        );
        return None;
    };

    let module = ctx.create_unmapped(ObjectType::OsCentralHeatPumpSystemModule, "");
    ctx.set_pointer(module, to::PERFORMANCE_COMPONENT, performance);

    let schedule_field = object.group_field_index(group, from::CONTROL_SCHEDULE_NAME);
    if let Some(schedule) = ctx.translate_reference(object, schedule_field) {
        ctx.set_schedule(module, to::CONTROL_SCHEDULE, schedule, "Chiller Heater Modules Control");
    }

    let count_field = object.group_field_index(group, from::NUMBER_OF_MODULES);
    let count = match object.get(count_field) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => FieldValue::Integer(1),
    };
    ctx.set_value(module, to::NUMBER_OF_MODULES, count);
    Some(module)
}

#[cfg(test)]
mod tests {
    use crate::ReverseTranslator;
    use hvac_bridge_model::{
        fields::{idf, os},
        FieldValue, Handle, Model, ObjectGraph, ObjectGraphExt, ObjectType, Workspace,
    };

    fn workspace() -> Workspace {
        let mut ws = Workspace::new();
        let curve = ws.create_object(ObjectType::CurveQuadratic, "Curve");
        let perf = ws.create_object(ObjectType::ChillerHeaterPerformanceElectricEir, "Perf");
        ws.set_field(
            perf,
            idf::chiller_heater_performance::REFERENCE_COOLING_MODE_EVAPORATOR_CAPACITY,
            FieldValue::Autosize,
        )
        .unwrap();
        ws.set_pointer(perf, idf::chiller_heater_performance::COOLING_MODE_CAPACITY_CURVE_NAME, curve)
            .unwrap();
        ws.create_object(ObjectType::ScheduleConstant, "Modules On");

        let chp = ws.create_object(ObjectType::CentralHeatPumpSystem, "CHP");
        ws.push_group(
            chp,
            vec![
                "ChillerHeaterPerformance:Electric:EIR".into(),
                "Perf".into(),
                "Modules On".into(),
                FieldValue::Integer(3),
            ],
        )
        .unwrap();
        ws.push_group(
            chp,
            vec![
                "ChillerHeaterPerformance:Electric:EIR".into(),
                "Perf".into(),
                FieldValue::Empty,
                FieldValue::Empty,
            ],
        )
        .unwrap();
        ws
    }

    fn modules(model: &Model) -> Vec<Handle> {
        let chp = model.find_by_name("CHP").unwrap();
        let list = model
            .get_target(chp.handle(), os::central_heat_pump_system::MODULE_LIST)
            .unwrap();
        assert_eq!(list.name(), Some("CHP Module List"));
        model.list_members(list.handle())
    }

    #[test]
    fn test_groups_become_modules() {
        let ws = workspace();
        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        assert!(translator.warnings().is_empty());

        let modules = modules(&model);
        assert_eq!(modules.len(), 2);
        use os::central_heat_pump_system_module as m;
        let first = model.get(modules[0]).unwrap();
        assert_eq!(first.get_i64(m::NUMBER_OF_MODULES), Some(3));
        assert_eq!(
            model
                .get_target(first.handle(), m::PERFORMANCE_COMPONENT)
                .and_then(|r| r.name()),
            Some("Perf")
        );
        let second = model.get(modules[1]).unwrap();
        assert_eq!(second.get_i64(m::NUMBER_OF_MODULES), Some(1));
        assert!(model.get_target(second.handle(), m::CONTROL_SCHEDULE).is_none());

        // Both modules share the one performance object
        assert_eq!(
            model.count_by_type(&ObjectType::OsChillerHeaterPerformanceElectricEir),
            1
        );
    }

    #[test]
    fn test_control_schedule_lands_on_its_module() {
        let ws = workspace();
        let model = ReverseTranslator::new().translate_workspace(&ws);

        let modules = modules(&model);
        let first = model.get(modules[0]).unwrap();
        let schedule = model
            .get_target(
                first.handle(),
                os::central_heat_pump_system_module::CONTROL_SCHEDULE,
            )
            .unwrap();
        assert_eq!(schedule.name(), Some("Modules On"));

        let chp = model.find_by_name("CHP").unwrap();
        assert!(model
            .get_target(chp.handle(), os::central_heat_pump_system::ANCILLARY_OPERATION_SCHEDULE)
            .is_none());
    }
}
