// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule type registry
//!
//! Each schedule-consuming field is registered with the kind of values it
//! expects. Typed schedule setters check a schedule's type limits against
//! that entry, or assign matching limits when the schedule has none.

use crate::{
    error::{GraphError, Result},
    fields::os::{schedule_constant, schedule_type_limits},
    names::is_variant_of,
    FieldValue, Handle, Model, ObjectGraph, ObjectType, SchemaRecord,
};

/// Expected values of one schedule-consuming field
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleType {
    pub class: ObjectType,
    pub display_name: &'static str,
    pub is_continuous: bool,
    pub unit_type: &'static str,
    pub lower_limit: Option<f64>,
    pub upper_limit: Option<f64>,
}

static REGISTRY: [ScheduleType; 3] = [
    ScheduleType {
        class: ObjectType::OsRefrigerationCase,
        display_name: "Availability",
        is_continuous: false,
        unit_type: "Availability",
        lower_limit: Some(0.0),
        upper_limit: Some(1.0),
    },
    ScheduleType {
        class: ObjectType::OsCentralHeatPumpSystem,
        display_name: "Ancillary Operation",
        is_continuous: false,
        unit_type: "Availability",
        lower_limit: Some(0.0),
        upper_limit: Some(1.0),
    },
    ScheduleType {
        class: ObjectType::OsCentralHeatPumpSystemModule,
        display_name: "Chiller Heater Modules Control",
        is_continuous: false,
        unit_type: "Availability",
        lower_limit: Some(0.0),
        upper_limit: Some(1.0),
    },
];

/// Registered schedule type for a class and schedule display name
pub fn schedule_type(class: &ObjectType, display_name: &str) -> Option<&'static ScheduleType> {
    REGISTRY
        .iter()
        .find(|entry| &entry.class == class && entry.display_name == display_name)
}

/// Unit types that carry no physical unit compare equal
fn unit_key(unit_type: &str) -> String {
    match unit_type.to_lowercase().as_str() {
        "" | "dimensionless" | "availability" | "controlmode" => "dimensionless".to_string(),
        other => other.to_string(),
    }
}

impl ScheduleType {
    /// Name given to type limits created for this schedule type
    pub fn default_limits_name(&self) -> String {
        let unit_bounded = self.lower_limit == Some(0.0) && self.upper_limit == Some(1.0);
        match self.unit_type {
            "" if self.is_continuous && unit_bounded => "Fractional".to_string(),
            "" if self.is_continuous => "Dimensionless".to_string(),
            "" if unit_bounded => "Binary".to_string(),
            "" => "Integer".to_string(),
            "Availability" => "OnOff".to_string(),
            other => other.to_string(),
        }
    }

    /// Check a `OS:ScheduleTypeLimits` record against this schedule type
    ///
    /// Limits must sit inside the required range. When `stringent`, a bound
    /// the schedule type leaves open must also be open on the candidate.
    pub fn is_compatible(&self, limits: &SchemaRecord, stringent: bool) -> bool {
        let unit = limits
            .get_str(schedule_type_limits::UNIT_TYPE)
            .unwrap_or("Dimensionless");
        if unit_key(unit) != unit_key(self.unit_type) {
            return false;
        }

        let lower = limits.get_f64(schedule_type_limits::LOWER_LIMIT_VALUE);
        match self.lower_limit {
            Some(required) if lower.map_or(true, |value| value < required) => return false,
            None if stringent && lower.is_some() => return false,
            _ => {}
        }

        let upper = limits.get_f64(schedule_type_limits::UPPER_LIMIT_VALUE);
        match self.upper_limit {
            Some(required) if upper.map_or(true, |value| value > required) => return false,
            None if stringent && upper.is_some() => return false,
            _ => {}
        }
        true
    }
}

impl Model {
    /// Point a schedule field at `schedule` after a capability check
    ///
    /// `display_name` selects the registry entry for the source's class. A
    /// schedule without type limits receives a compatible limits object.
    pub fn set_schedule(
        &mut self,
        source: Handle,
        field: usize,
        schedule: Handle,
        display_name: &str,
    ) -> Result<()> {
        let class = self.store().try_get(source)?.object_type().clone();
        let entry = schedule_type(&class, display_name).ok_or_else(|| {
            GraphError::invalid_value(
                &class,
                field,
                format!("no '{}' schedule is registered", display_name),
            )
        })?;
        let schedule_record = self.store().check_pointer(source, field, schedule)?;
        let schedule_name = schedule_record.name().unwrap_or_default().to_string();

        match self.get_target(schedule, schedule_constant::SCHEDULE_TYPE_LIMITS_NAME) {
            Some(limits) => {
                if !entry.is_compatible(limits, false) {
                    return Err(GraphError::IncompatibleSchedule {
                        schedule: schedule_name,
                        class,
                        display_name: display_name.to_string(),
                    });
                }
            }
            None => {
                let limits = self.get_or_create_schedule_type_limits(entry);
                self.set_pointer(schedule, schedule_constant::SCHEDULE_TYPE_LIMITS_NAME, limits)?;
            }
        }
        self.set_pointer(source, field, schedule)
    }

    /// Reuse a compatible limits object with the canonical name, or create one
    ///
    /// Suffixed variants (`OnOff 1`) count as canonical, since the name is
    /// suffixed when an unrelated object already holds it.
    pub fn get_or_create_schedule_type_limits(&mut self, entry: &ScheduleType) -> Handle {
        let name = entry.default_limits_name();
        let existing = self
            .objects_by_type(&ObjectType::OsScheduleTypeLimits)
            .into_iter()
            .filter(|limits| limits.name().is_some_and(|n| is_variant_of(n, &name)))
            .find(|limits| entry.is_compatible(limits, true))
            .map(SchemaRecord::handle);
        if let Some(existing) = existing {
            return existing;
        }

        let numeric_type = if entry.is_continuous { "Continuous" } else { "Discrete" };
        let mut record =
            SchemaRecord::from_schema(self.store().schema.as_ref(), ObjectType::OsScheduleTypeLimits)
                .with_name(name)
                .with_field(schedule_type_limits::NUMERIC_TYPE, numeric_type);
        if let Some(lower) = entry.lower_limit {
            record = record.with_field(schedule_type_limits::LOWER_LIMIT_VALUE, lower);
        }
        if let Some(upper) = entry.upper_limit {
            record = record.with_field(schedule_type_limits::UPPER_LIMIT_VALUE, upper);
        }
        if !entry.unit_type.is_empty() {
            record = record.with_field(
                schedule_type_limits::UNIT_TYPE,
                FieldValue::from(entry.unit_type),
            );
        }
        log::debug!("Creating schedule type limits '{}'", entry.default_limits_name());
        self.store_mut().insert(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::os::{refrigeration_case, surface};
    use crate::ObjectGraphExt;

    fn limits(model: &mut Model, name: &str, lower: f64, upper: f64, unit: &str) -> Handle {
        let h = model.create_object(ObjectType::OsScheduleTypeLimits, name);
        model
            .set_field(h, schedule_type_limits::LOWER_LIMIT_VALUE, lower.into())
            .unwrap();
        model
            .set_field(h, schedule_type_limits::UPPER_LIMIT_VALUE, upper.into())
            .unwrap();
        model
            .set_field(h, schedule_type_limits::UNIT_TYPE, unit.into())
            .unwrap();
        h
    }

    #[test]
    fn test_registry_lookup() {
        let entry = schedule_type(&ObjectType::OsRefrigerationCase, "Availability").unwrap();
        assert_eq!(entry.default_limits_name(), "OnOff");
        assert!(schedule_type(&ObjectType::OsRefrigerationCase, "Lighting").is_none());
        assert!(schedule_type(&ObjectType::OsSurface, "Availability").is_none());
    }

    #[test]
    fn test_compatible_limits_are_accepted() {
        let mut model = Model::new();
        let on_off = limits(&mut model, "On Off", 0.0, 1.0, "Availability");
        let schedule = model.create_object(ObjectType::OsScheduleConstant, "Always On");
        model.set_pointer(schedule, schedule_constant::SCHEDULE_TYPE_LIMITS_NAME, on_off).unwrap();
        let case = model.create_object(ObjectType::OsRefrigerationCase, "Case");

        model
            .set_schedule(case, refrigeration_case::AVAILABILITY_SCHEDULE, schedule, "Availability")
            .unwrap();
        assert_eq!(
            model.references().target(case, refrigeration_case::AVAILABILITY_SCHEDULE),
            Some(schedule)
        );
    }

    #[test]
    fn test_incompatible_limits_are_rejected() {
        let mut model = Model::new();
        let temperature = limits(&mut model, "Temperature", -60.0, 200.0, "Temperature");
        let wide = limits(&mut model, "Wide", 0.0, 5.0, "Dimensionless");
        let case = model.create_object(ObjectType::OsRefrigerationCase, "Case");

        for limits in [temperature, wide] {
            let schedule = model.create_object(ObjectType::OsScheduleConstant, "");
            model
                .set_pointer(schedule, schedule_constant::SCHEDULE_TYPE_LIMITS_NAME, limits)
                .unwrap();
            let err = model
                .set_schedule(case, refrigeration_case::AVAILABILITY_SCHEDULE, schedule, "Availability")
                .unwrap_err();
            assert!(matches!(err, GraphError::IncompatibleSchedule { .. }));
        }
        assert!(model
            .get_target(case, refrigeration_case::AVAILABILITY_SCHEDULE)
            .is_none());
    }

    #[test]
    fn test_missing_limits_are_assigned_once() {
        let mut model = Model::new();
        let case = model.create_object(ObjectType::OsRefrigerationCase, "Case");
        let a = model.create_object(ObjectType::OsScheduleConstant, "A");
        let b = model.create_object(ObjectType::OsScheduleConstant, "B");

        model
            .set_schedule(case, refrigeration_case::AVAILABILITY_SCHEDULE, a, "Availability")
            .unwrap();
        model
            .set_schedule(case, refrigeration_case::AVAILABILITY_SCHEDULE, b, "Availability")
            .unwrap();

        assert_eq!(model.count_by_type(&ObjectType::OsScheduleTypeLimits), 1);
        let on_off = model.find_by_name("OnOff").unwrap();
        assert_eq!(on_off.get_str(schedule_type_limits::NUMERIC_TYPE), Some("Discrete"));
        assert_eq!(
            model.references().target(a, schedule_constant::SCHEDULE_TYPE_LIMITS_NAME),
            Some(on_off.handle())
        );
    }

    #[test]
    fn test_unregistered_field_is_an_error() {
        let mut model = Model::new();
        let wall = model.create_object(ObjectType::OsSurface, "Wall");
        let schedule = model.create_object(ObjectType::OsScheduleConstant, "S");
        let err = model
            .set_schedule(wall, surface::OUTSIDE_BOUNDARY_CONDITION_OBJECT, schedule, "Availability")
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidValue { .. }));
    }

    #[test]
    fn test_suffixed_limits_are_reused() {
        let mut model = Model::new();
        // An unrelated object already holds the canonical name
        limits(&mut model, "OnOff", -60.0, 200.0, "Temperature");
        let case = model.create_object(ObjectType::OsRefrigerationCase, "Case");

        for name in ["A", "B", "C"] {
            let schedule = model.create_object(ObjectType::OsScheduleConstant, name);
            model
                .set_schedule(case, refrigeration_case::AVAILABILITY_SCHEDULE, schedule, "Availability")
                .unwrap();
        }

        assert_eq!(model.count_by_type(&ObjectType::OsScheduleTypeLimits), 2);
        let assigned = model.find_by_name("OnOff 1").unwrap().handle();
        for name in ["A", "B", "C"] {
            let schedule = model.find_by_name(name).unwrap().handle();
            assert_eq!(
                model.references().target(schedule, schedule_constant::SCHEDULE_TYPE_LIMITS_NAME),
                Some(assigned)
            );
        }
    }
}
