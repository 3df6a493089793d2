// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Refrigeration compressors, cases and systems
//!
//! A workspace system points at either a single member or a list object for
//! each relation. The model system always gets both of its object lists,
//! rebuilt from whichever form was used.

use super::ReverseContext;
use crate::{
    aggregate::{aggregate_name, group_targets, AggregateKind, CASE_AND_WALKIN_LIST, COMPRESSOR_LIST},
    error::{Result, TranslateError},
};
use hvac_bridge_model::{
    fields::{idf, os},
    Handle, ObjectGraph, ObjectType, SchemaRecord,
};

pub(super) fn translate_compressor(
    ctx: &mut ReverseContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::refrigeration_compressor as from;
    use os::refrigeration_compressor as to;

    let power_curve = ctx.require_reference(object, from::POWER_CURVE_NAME, "power curve")?;
    let capacity_curve = ctx.require_reference(object, from::CAPACITY_CURVE_NAME, "capacity curve")?;

    let target = ctx.create_and_register(object, ObjectType::OsRefrigerationCompressor);
    ctx.copy_fields(
        object,
        target,
        &[
            (from::RATED_SUPERHEAT, to::RATED_SUPERHEAT),
            (from::RATED_RETURN_GAS_TEMPERATURE, to::RATED_RETURN_GAS_TEMPERATURE),
            (from::END_USE_SUBCATEGORY, to::END_USE_SUBCATEGORY),
        ],
    );

    let power = ctx
        .translate_and_map(power_curve)
        .ok_or_else(|| TranslateError::missing("power curve"))?;
    ctx.set_pointer(target, to::POWER_CURVE, power);

    let capacity = ctx
        .translate_and_map(capacity_curve)
        .ok_or_else(|| TranslateError::missing("capacity curve"))?;
    ctx.set_pointer(target, to::CAPACITY_CURVE, capacity);

    Ok(target)
}

pub(super) fn translate_case(ctx: &mut ReverseContext<'_>, object: &SchemaRecord) -> Result<Handle> {
    use idf::refrigeration_case as from;
    use os::refrigeration_case as to;

    let target = ctx.create_and_register(object, ObjectType::OsRefrigerationCase);
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

    if let Some(schedule) = ctx.translate_reference(object, from::AVAILABILITY_SCHEDULE_NAME) {
        ctx.set_schedule(target, to::AVAILABILITY_SCHEDULE, schedule, "Availability");
    }
    Ok(target)
}

pub(super) fn translate_system(ctx: &mut ReverseContext<'_>, object: &SchemaRecord) -> Result<Handle> {
    use idf::refrigeration_system as from;
    use os::refrigeration_system as to;

    let compressor_ref =
        ctx.require_reference(object, from::COMPRESSOR_OR_COMPRESSOR_LIST_NAME, "compressor")?;
    let case_ref = match ctx.source_reference(object, from::CASE_OR_WALKIN_OR_LIST_NAME) {
        Ok(referenced) => referenced,
        Err(e) => {
            ctx.log.error(Some(object), e.to_string());
            None
        }
    };

    let target = ctx.create_and_register(object, ObjectType::OsRefrigerationSystem);
    ctx.copy_fields(
        object,
        target,
        &[
            (from::MINIMUM_CONDENSING_TEMPERATURE, to::MINIMUM_CONDENSING_TEMPERATURE),
            (from::WORKING_FLUID_TYPE, to::WORKING_FLUID_TYPE),
            (from::SUCTION_TEMPERATURE_CONTROL_TYPE, to::SUCTION_TEMPERATURE_CONTROL_TYPE),
        ],
    );

    let name = ctx.target_name(target);
    let case_list = ctx.create_unmapped(
        ObjectType::OsModelObjectList,
        &aggregate_name(&name, &CASE_AND_WALKIN_LIST),
    );
    let compressor_list = ctx.create_unmapped(
        ObjectType::OsModelObjectList,
        &aggregate_name(&name, &COMPRESSOR_LIST),
    );
    ctx.set_pointer(target, to::CASE_AND_WALKIN_LIST, case_list);
    ctx.set_pointer(target, to::COMPRESSOR_LIST, compressor_list);

    if let Some(case_ref) = case_ref {
        let cases = expand_members(
            ctx,
            case_ref,
            &CASE_AND_WALKIN_LIST,
            idf::refrigeration_case_and_walkin_list::CASE_OR_WALKIN_NAME,
        );
        fill_list(ctx, case_list, &cases);
    }
    let compressors = expand_members(
        ctx,
        compressor_ref,
        &COMPRESSOR_LIST,
        idf::refrigeration_compressor_list::COMPRESSOR_NAME,
    );
    fill_list(ctx, compressor_list, &compressors);

    Ok(target)
}

/// Members behind a field that names either one member or a list of them
///
/// A referenced list is marked consumed; it has no model counterpart of its
/// own.
fn expand_members(
    ctx: &mut ReverseContext<'_>,
    referenced: Handle,
    kind: &AggregateKind,
    offset: usize,
) -> Vec<Handle> {
    let workspace = ctx.workspace;
    let Some(record) = workspace.get(referenced) else {
        return Vec::new();
    };
    if record.object_type() != &kind.object_type {
        return vec![referenced];
    }

    ctx.consumed.insert(referenced);
    let mut members = Vec::new();
    for (group, target) in group_targets(workspace, record, offset).into_iter().enumerate() {
        match target {
            Some(member) => members.push(member),
            None => {
                let field = record.group_field_index(group, offset);
                if let Some(name) = record.get_str(field) {
                    ctx.log.error(
                        Some(record),
                        TranslateError::unresolved("list entry", name).to_string(),
                    );
                }
            }
        }
    }
    members
}

fn fill_list(ctx: &mut ReverseContext<'_>, list: Handle, members: &[Handle]) {
    for &member in members {
        match ctx.translate_and_map(member) {
            Some(target) => ctx.append_to_list(list, target),
            None => {
                let workspace = ctx.workspace;
                let list_name = ctx.target_name(list);
                ctx.log.warn(
                    workspace.get(member),
                    format!("Left out of '{}': translation failed", list_name),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ReverseTranslator;
    use hvac_bridge_model::{
        fields::{idf, os},
        FieldValue, Handle, Model, ObjectGraph, ObjectGraphExt, ObjectType, Workspace,
    };

    fn compressor(ws: &mut Workspace, name: &str, curve: Handle) -> Handle {
        use idf::refrigeration_compressor as c;
        let h = ws.create_object(ObjectType::RefrigerationCompressor, name);
        ws.set_pointer(h, c::POWER_CURVE_NAME, curve).unwrap();
        ws.set_pointer(h, c::CAPACITY_CURVE_NAME, curve).unwrap();
        h
    }

    fn rack(ws: &mut Workspace, compressors: &[&str]) -> Handle {
        use idf::refrigeration_system as s;
        let curve = ws.create_object(ObjectType::CurveCubic, "Curve");
        let handles: Vec<Handle> = compressors
            .iter()
            .map(|name| compressor(ws, name, curve))
            .collect();
        let system = ws.create_object(ObjectType::RefrigerationSystem, "Rack");
        if let [single] = handles.as_slice() {
            ws.set_pointer(system, s::COMPRESSOR_OR_COMPRESSOR_LIST_NAME, *single)
                .unwrap();
        } else {
            let list = ws.create_object(ObjectType::RefrigerationCompressorList, "Rack Compressors");
            for name in compressors {
                ws.push_group(list, vec![FieldValue::from(*name)]).unwrap();
            }
            ws.set_pointer(system, s::COMPRESSOR_OR_COMPRESSOR_LIST_NAME, list)
                .unwrap();
        }
        system
    }

    fn members(model: &Model, system: &str, field: usize) -> Vec<String> {
        let system = model.find_by_name(system).unwrap();
        let list = model.get_target(system.handle(), field).unwrap();
        model
            .list_members(list.handle())
            .into_iter()
            .filter_map(|h| model.get(h).and_then(|r| r.name()).map(str::to_string))
            .collect()
    }

    #[test]
    fn test_compressor_list_is_rebuilt() {
        let mut ws = Workspace::new();
        rack(&mut ws, &["C2", "C1"]);

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        assert!(translator.errors().is_empty());
        assert!(translator.untranslated_idf_objects().is_empty());

        assert_eq!(
            members(&model, "Rack", os::refrigeration_system::COMPRESSOR_LIST),
            vec!["C2", "C1"]
        );
        assert!(model.find_by_name("Rack Compressor List").is_some());
        // An empty case list is still created
        let cases = model.find_by_name("Rack Case and Walkin List").unwrap();
        assert_eq!(cases.num_groups(), 0);
        assert_eq!(model.count_by_type(&ObjectType::OsModelObjectList), 2);
    }

    #[test]
    fn test_single_compressor_is_accepted() {
        let mut ws = Workspace::new();
        rack(&mut ws, &["Solo"]);

        let model = ReverseTranslator::new().translate_workspace(&ws);
        assert_eq!(
            members(&model, "Rack", os::refrigeration_system::COMPRESSOR_LIST),
            vec!["Solo"]
        );
    }

    #[test]
    fn test_system_without_compressor_fails() {
        let mut ws = Workspace::new();
        ws.create_object(ObjectType::RefrigerationSystem, "Rack");

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        assert!(model.is_empty());
        assert_eq!(translator.errors().len(), 1);
        assert!(translator.errors()[0].message.contains("compressor"));
    }

    #[test]
    fn test_case_schedule_gets_limits() {
        let mut ws = Workspace::new();
        let schedule = ws.create_object(ObjectType::ScheduleConstant, "Always On");
        ws.set_field(schedule, idf::schedule_constant::HOURLY_VALUE, 1.0.into())
            .unwrap();
        let case = ws.create_object(ObjectType::RefrigerationCase, "Case");
        ws.set_pointer(case, idf::refrigeration_case::AVAILABILITY_SCHEDULE_NAME, schedule)
            .unwrap();

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        assert!(translator.warnings().is_empty());

        let case = model.find_by_name("Case").unwrap();
        let schedule = model
            .get_target(case.handle(), os::refrigeration_case::AVAILABILITY_SCHEDULE)
            .unwrap();
        let limits = model
            .get_target(schedule.handle(), os::schedule_constant::SCHEDULE_TYPE_LIMITS_NAME)
            .unwrap();
        assert_eq!(limits.name(), Some("OnOff"));
    }

    #[test]
    fn test_incompatible_schedule_is_left_unset() {
        use idf::schedule_type_limits as l;
        let mut ws = Workspace::new();
        let limits = ws.create_object(ObjectType::ScheduleTypeLimits, "Temperature");
        ws.set_field(limits, l::LOWER_LIMIT_VALUE, (-60.0).into()).unwrap();
        ws.set_field(limits, l::UPPER_LIMIT_VALUE, 200.0.into()).unwrap();
        ws.set_field(limits, l::UNIT_TYPE, "Temperature".into()).unwrap();
        let schedule = ws.create_object(ObjectType::ScheduleConstant, "Setpoint");
        ws.set_pointer(schedule, idf::schedule_constant::SCHEDULE_TYPE_LIMITS_NAME, limits)
            .unwrap();
        let case = ws.create_object(ObjectType::RefrigerationCase, "Case");
        ws.set_pointer(case, idf::refrigeration_case::AVAILABILITY_SCHEDULE_NAME, schedule)
            .unwrap();

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        assert_eq!(translator.warnings().len(), 1);
        let case = model.find_by_name("Case").unwrap();
        assert!(model
            .get_target(case.handle(), os::refrigeration_case::AVAILABILITY_SCHEDULE)
            .is_none());
        // The schedule itself still translates
        assert!(model.find_by_name("Setpoint").is_some());
    }
}
