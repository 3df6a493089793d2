// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedules and schedule type limits

use super::ForwardContext;
use crate::error::Result;
use hvac_bridge_model::{
    fields::{idf, os},
    Handle, ObjectType, SchemaRecord,
};

pub(super) fn translate_schedule_type_limits(
    ctx: &mut ForwardContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::schedule_type_limits as to;
    use os::schedule_type_limits as from;

    let target = ctx.create_and_register(object, ObjectType::ScheduleTypeLimits);
    ctx.copy_fields(
        object,
        target,
        &[
            (from::LOWER_LIMIT_VALUE, to::LOWER_LIMIT_VALUE),
            (from::UPPER_LIMIT_VALUE, to::UPPER_LIMIT_VALUE),
            (from::NUMERIC_TYPE, to::NUMERIC_TYPE),
        ],
    );
    ctx.copy_or_default(object, from::UNIT_TYPE, target, to::UNIT_TYPE);
    Ok(target)
}

pub(super) fn translate_schedule_constant(
    ctx: &mut ForwardContext<'_>,
    object: &SchemaRecord,
) -> Result<Handle> {
    use idf::schedule_constant as to;
    use os::schedule_constant as from;

    let target = ctx.create_and_register(object, ObjectType::ScheduleConstant);
    ctx.copy_fields(object, target, &[(from::VALUE, to::HOURLY_VALUE)]);

    if let Some(limits) = ctx.translate_reference(object, from::SCHEDULE_TYPE_LIMITS_NAME) {
        ctx.set_pointer(target, to::SCHEDULE_TYPE_LIMITS_NAME, limits);
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use crate::ForwardTranslator;
    use hvac_bridge_model::{
        fields::{idf, os},
        FieldValue, Model, ObjectGraph, ObjectType,
    };

    #[test]
    fn test_schedule_with_limits() {
        let mut model = Model::new();
        let limits = model.create_object(ObjectType::OsScheduleTypeLimits, "Fraction");
        model
            .set_field(limits, os::schedule_type_limits::UPPER_LIMIT_VALUE, 1.0.into())
            .unwrap();
        let schedule = model.create_object(ObjectType::OsScheduleConstant, "Half");
        model
            .set_field(schedule, os::schedule_constant::VALUE, 0.5.into())
            .unwrap();
        model
            .set_pointer(schedule, os::schedule_constant::SCHEDULE_TYPE_LIMITS_NAME, limits)
            .unwrap();

        let ws = ForwardTranslator::new().translate_model(&model);
        let schedule = ws.find_by_name("Half").unwrap();
        assert_eq!(schedule.object_type(), &ObjectType::ScheduleConstant);
        assert_eq!(schedule.get_f64(idf::schedule_constant::HOURLY_VALUE), Some(0.5));
        assert_eq!(
            schedule.get_str(idf::schedule_constant::SCHEDULE_TYPE_LIMITS_NAME),
            Some("Fraction")
        );

        let limits = ws.find_by_name("Fraction").unwrap();
        assert_eq!(
            limits.get(idf::schedule_type_limits::UPPER_LIMIT_VALUE),
            Some(&FieldValue::Real(1.0))
        );
        // Defaulted unit type is written out
        assert_eq!(
            limits.get_str(idf::schedule_type_limits::UNIT_TYPE),
            Some("Dimensionless")
        );
    }

    #[test]
    fn test_schedule_without_limits_leaves_field_empty() {
        let mut model = Model::new();
        model.create_object(ObjectType::OsScheduleConstant, "Bare");

        let ws = ForwardTranslator::new().translate_model(&model);
        let schedule = ws.find_by_name("Bare").unwrap();
        assert!(schedule.is_empty_field(idf::schedule_constant::SCHEDULE_TYPE_LIMITS_NAME));
        assert!(schedule.is_empty_field(idf::schedule_constant::HOURLY_VALUE));
    }
}
