// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schema definitions
//!
//! The full data dictionary is an external collaborator reached through
//! [`SchemaProvider`]. [`BuiltinSchema`] covers the object types this
//! workspace translates.

use crate::{FieldValue, ObjectType};
use serde::{Deserialize, Serialize};

/// What a field holds
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FieldKind {
    /// Free text
    Alpha,
    /// One of a fixed set of keys (case-insensitive)
    Choice(&'static [&'static str]),
    Real,
    /// Real that may hold the `Autosize` sentinel
    Autosizable,
    /// Real that may hold the `Autocalculate` sentinel
    Autocalculatable,
    Integer,
    /// Reference to an object of one of the listed types
    Pointer(&'static [ObjectType]),
    /// Reference to an object of any type
    AnyPointer,
}

/// One field definition
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<&'static str>,
}

impl FieldSchema {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self.kind, FieldKind::Pointer(_) | FieldKind::AnyPointer)
    }

    /// Check whether an object of `target_type` may be referenced from here
    pub fn can_point_to(&self, target_type: &ObjectType) -> bool {
        match self.kind {
            FieldKind::Pointer(allowed) => allowed.contains(target_type),
            FieldKind::AnyPointer => true,
            _ => false,
        }
    }

    /// Default value, or `Empty` when the field has none
    pub fn default_value(&self) -> FieldValue {
        self.default.map(FieldValue::parse_text).unwrap_or_default()
    }

    /// Validate a scalar value against the field kind
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        if value.is_empty() {
            return Ok(());
        }
        let ok = match self.kind {
            FieldKind::Alpha => matches!(
                value,
                FieldValue::Text(_) | FieldValue::Real(_) | FieldValue::Integer(_)
            ),
            FieldKind::Choice(keys) => value
                .as_str()
                .is_some_and(|s| keys.iter().any(|k| k.eq_ignore_ascii_case(s))),
            FieldKind::Real => value.is_numeric(),
            FieldKind::Autosizable => value.is_numeric() || value.is_autosize(),
            FieldKind::Autocalculatable => value.is_numeric() || value.is_autocalculate(),
            FieldKind::Integer => value.as_i64().is_some(),
            FieldKind::Pointer(_) | FieldKind::AnyPointer => value.as_str().is_some(),
        };
        if ok {
            Ok(())
        } else {
            Err(format!("'{}' does not accept {:?}", self.name, value))
        }
    }
}

/// Shape of a record: fixed fields, then repeated groups
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct RecordLayout {
    /// Number of fixed (non-extensible) fields
    pub fields: usize,
    /// Width of one extensible group, 0 when the type has none
    pub group_width: usize,
    /// Index of the name field
    pub name_field: Option<usize>,
}

impl RecordLayout {
    /// Layout for a record whose type the schema does not know
    pub fn free_form(fields: usize) -> Self {
        Self {
            fields,
            group_width: 0,
            name_field: None,
        }
    }
}

/// Full definition of one object type
#[derive(Clone, Debug)]
pub struct ObjectSchema {
    pub object_type: ObjectType,
    pub name_field: Option<usize>,
    pub fields: &'static [FieldSchema],
    pub extensible: &'static [FieldSchema],
}

impl ObjectSchema {
    pub fn layout(&self) -> RecordLayout {
        RecordLayout {
            fields: self.fields.len(),
            group_width: self.extensible.len(),
            name_field: self.name_field,
        }
    }

    /// Field definition at a flat index, resolving extensible groups
    pub fn field(&self, index: usize) -> Option<&FieldSchema> {
        if index < self.fields.len() {
            return self.fields.get(index);
        }
        if self.extensible.is_empty() {
            return None;
        }
        self.extensible
            .get((index - self.fields.len()) % self.extensible.len())
    }
}

/// Schema lookup collaborator
///
/// Implementations must be cheap to query; graphs consult the provider on
/// every pointer write.
pub trait SchemaProvider: Send + Sync {
    /// Definition for an object type, `None` when unknown
    fn object_schema(&self, object_type: &ObjectType) -> Option<&ObjectSchema>;

    /// Record layout for an object type
    fn layout(&self, object_type: &ObjectType) -> RecordLayout {
        self.object_schema(object_type)
            .map(ObjectSchema::layout)
            .unwrap_or_default()
    }

    /// Field definition at a flat index
    fn field(&self, object_type: &ObjectType, index: usize) -> Option<&FieldSchema> {
        self.object_schema(object_type)?.field(index)
    }

    /// True if the field holds references
    fn is_pointer_field(&self, object_type: &ObjectType, index: usize) -> bool {
        self.field(object_type, index)
            .is_some_and(FieldSchema::is_pointer)
    }

    /// True if `target_type` is in the field's allowed reference lists
    fn can_be_target(&self, object_type: &ObjectType, index: usize, target_type: &ObjectType) -> bool {
        self.field(object_type, index)
            .is_some_and(|f| f.can_point_to(target_type))
    }
}

// ============================================================================
// Built-in definitions
// ============================================================================

const fn alpha(name: &'static str) -> FieldSchema {
    FieldSchema::new(name, FieldKind::Alpha)
}

const fn real(name: &'static str) -> FieldSchema {
    FieldSchema::new(name, FieldKind::Real)
}

const fn integer(name: &'static str) -> FieldSchema {
    FieldSchema::new(name, FieldKind::Integer)
}

const fn autosizable(name: &'static str) -> FieldSchema {
    FieldSchema::new(name, FieldKind::Autosizable)
}

const fn choice(name: &'static str, keys: &'static [&'static str]) -> FieldSchema {
    FieldSchema::new(name, FieldKind::Choice(keys))
}

const fn pointer(name: &'static str, targets: &'static [ObjectType]) -> FieldSchema {
    FieldSchema::new(name, FieldKind::Pointer(targets))
}

const NAME: FieldSchema = alpha("Name").required();
const NUMERIC_TYPES: &[&str] = &["Continuous", "Discrete"];
const SURFACE_TYPES: &[&str] = &["Floor", "Wall", "RoofCeiling", "Roof", "Ceiling"];
const BOUNDARY_CONDITIONS: &[&str] = &["Adiabatic", "Surface", "Outdoors", "Ground"];
const EXPOSURES: &[&str] = &["SunExposed", "NoSun", "WindExposed", "NoWind"];
const SUCTION_CONTROL: &[&str] = &["FixedSuctionTemperature", "FloatSuctionTemperature"];
const CONTROL_METHODS: &[&str] = &["SmartMixing"];

const OS_SCHEDULES: &[ObjectType] = &[ObjectType::OsScheduleConstant];
const OS_LIMITS: &[ObjectType] = &[ObjectType::OsScheduleTypeLimits];
const OS_CURVES: &[ObjectType] = &[ObjectType::OsCurveQuadratic, ObjectType::OsCurveCubic];
const OS_LISTS: &[ObjectType] = &[ObjectType::OsModelObjectList];
const OS_CHILLER_HEATERS: &[ObjectType] = &[ObjectType::OsChillerHeaterPerformanceElectricEir];
const OS_SURFACES: &[ObjectType] = &[ObjectType::OsSurface];

const IDF_SCHEDULES: &[ObjectType] = &[ObjectType::ScheduleConstant];
const IDF_LIMITS: &[ObjectType] = &[ObjectType::ScheduleTypeLimits];
const IDF_CURVES: &[ObjectType] = &[ObjectType::CurveQuadratic, ObjectType::CurveCubic];
const IDF_COMPRESSORS: &[ObjectType] = &[ObjectType::RefrigerationCompressor];
const IDF_CASES: &[ObjectType] = &[ObjectType::RefrigerationCase];
const IDF_CASES_OR_LIST: &[ObjectType] = &[
    ObjectType::RefrigerationCase,
    ObjectType::RefrigerationCaseAndWalkInList,
];
const IDF_COMPRESSORS_OR_LIST: &[ObjectType] = &[
    ObjectType::RefrigerationCompressor,
    ObjectType::RefrigerationCompressorList,
];
const IDF_CHILLER_HEATERS: &[ObjectType] = &[ObjectType::ChillerHeaterPerformanceElectricEir];
const IDF_SURFACES: &[ObjectType] = &[ObjectType::BuildingSurfaceDetailed];

static OS_SCHEDULE_TYPE_LIMITS: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsScheduleTypeLimits,
    name_field: Some(0),
    fields: &[
        NAME,
        real("Lower Limit Value"),
        real("Upper Limit Value"),
        choice("Numeric Type", NUMERIC_TYPES),
        alpha("Unit Type").with_default("Dimensionless"),
    ],
    extensible: &[],
};

static OS_SCHEDULE_CONSTANT: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsScheduleConstant,
    name_field: Some(0),
    fields: &[
        NAME,
        pointer("Schedule Type Limits Name", OS_LIMITS),
        real("Value").required(),
    ],
    extensible: &[],
};

static OS_CURVE_QUADRATIC: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsCurveQuadratic,
    name_field: Some(0),
    fields: &[
        NAME,
        real("Coefficient1 Constant").required(),
        real("Coefficient2 x").required(),
        real("Coefficient3 x**2").required(),
        real("Minimum Value of x"),
        real("Maximum Value of x"),
    ],
    extensible: &[],
};

static OS_CURVE_CUBIC: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsCurveCubic,
    name_field: Some(0),
    fields: &[
        NAME,
        real("Coefficient1 Constant").required(),
        real("Coefficient2 x").required(),
        real("Coefficient3 x**2").required(),
        real("Coefficient4 x**3").required(),
        real("Minimum Value of x"),
        real("Maximum Value of x"),
    ],
    extensible: &[],
};

static OS_MODEL_OBJECT_LIST: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsModelObjectList,
    name_field: Some(0),
    fields: &[NAME],
    extensible: &[FieldSchema::new("Model Object", FieldKind::AnyPointer)],
};

static OS_REFRIGERATION_COMPRESSOR: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsRefrigerationCompressor,
    name_field: Some(0),
    fields: &[
        NAME,
        pointer("Refrigeration Compressor Power Curve", OS_CURVES).required(),
        pointer("Refrigeration Compressor Capacity Curve", OS_CURVES).required(),
        real("Rated Superheat"),
        real("Rated Return Gas Temperature"),
        alpha("End-Use Subcategory").with_default("General"),
    ],
    extensible: &[],
};

static OS_REFRIGERATION_CASE: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsRefrigerationCase,
    name_field: Some(0),
    fields: &[
        NAME,
        pointer("Availability Schedule", OS_SCHEDULES),
        real("Rated Total Cooling Capacity per Unit Length").with_default("1900"),
        real("Case Length").with_default("3"),
        real("Case Operating Temperature").with_default("-1"),
    ],
    extensible: &[],
};

static OS_REFRIGERATION_SYSTEM: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsRefrigerationSystem,
    name_field: Some(0),
    fields: &[
        NAME,
        pointer("Refrigerated Case and Walkin List", OS_LISTS).required(),
        pointer("Compressor List", OS_LISTS).required(),
        real("Minimum Condensing Temperature").with_default("21"),
        alpha("Refrigeration System Working Fluid Type").with_default("R404a"),
        choice("Suction Temperature Control Type", SUCTION_CONTROL)
            .with_default("FixedSuctionTemperature"),
    ],
    extensible: &[],
};

static OS_CHILLER_HEATER_PERFORMANCE: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsChillerHeaterPerformanceElectricEir,
    name_field: Some(0),
    fields: &[
        NAME,
        autosizable("Reference Cooling Mode Evaporator Capacity").required(),
        real("Reference Cooling Mode COP").required(),
        pointer("Cooling Mode Cooling Capacity Function of Temperature Curve", OS_CURVES)
            .required(),
        autosizable("Design Hot Water Flow Rate"),
    ],
    extensible: &[],
};

static OS_CENTRAL_HEAT_PUMP_SYSTEM_MODULE: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsCentralHeatPumpSystemModule,
    name_field: Some(0),
    fields: &[
        NAME,
        pointer("Chiller Heater Modules Performance Component", OS_CHILLER_HEATERS).required(),
        pointer("Chiller Heater Modules Control Schedule", OS_SCHEDULES),
        integer("Number of Chiller Heater Modules").with_default("1"),
    ],
    extensible: &[],
};

static OS_CENTRAL_HEAT_PUMP_SYSTEM: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsCentralHeatPumpSystem,
    name_field: Some(0),
    fields: &[
        NAME,
        choice("Control Method", CONTROL_METHODS).with_default("SmartMixing"),
        real("Ancillary Power").with_default("0"),
        pointer("Ancillary Operation Schedule", OS_SCHEDULES),
        pointer("Chiller Heater Module List", OS_LISTS).required(),
    ],
    extensible: &[],
};

static OS_SURFACE: ObjectSchema = ObjectSchema {
    object_type: ObjectType::OsSurface,
    name_field: Some(0),
    fields: &[
        NAME,
        choice("Surface Type", SURFACE_TYPES),
        choice("Outside Boundary Condition", BOUNDARY_CONDITIONS),
        pointer("Outside Boundary Condition Object", OS_SURFACES),
        choice("Sun Exposure", EXPOSURES),
        choice("Wind Exposure", EXPOSURES),
    ],
    extensible: &[],
};

static VERSION: ObjectSchema = ObjectSchema {
    object_type: ObjectType::Version,
    name_field: None,
    fields: &[alpha("Version Identifier").required()],
    extensible: &[],
};

static SCHEDULE_TYPE_LIMITS: ObjectSchema = ObjectSchema {
    object_type: ObjectType::ScheduleTypeLimits,
    name_field: Some(0),
    fields: &[
        NAME,
        real("Lower Limit Value"),
        real("Upper Limit Value"),
        choice("Numeric Type", NUMERIC_TYPES),
        alpha("Unit Type").with_default("Dimensionless"),
    ],
    extensible: &[],
};

static SCHEDULE_CONSTANT: ObjectSchema = ObjectSchema {
    object_type: ObjectType::ScheduleConstant,
    name_field: Some(0),
    fields: &[
        NAME,
        pointer("Schedule Type Limits Name", IDF_LIMITS),
        real("Hourly Value"),
    ],
    extensible: &[],
};

static CURVE_QUADRATIC: ObjectSchema = ObjectSchema {
    object_type: ObjectType::CurveQuadratic,
    name_field: Some(0),
    fields: &[
        NAME,
        real("Coefficient1 Constant").required(),
        real("Coefficient2 x").required(),
        real("Coefficient3 x**2").required(),
        real("Minimum Value of x"),
        real("Maximum Value of x"),
    ],
    extensible: &[],
};

static CURVE_CUBIC: ObjectSchema = ObjectSchema {
    object_type: ObjectType::CurveCubic,
    name_field: Some(0),
    fields: &[
        NAME,
        real("Coefficient1 Constant").required(),
        real("Coefficient2 x").required(),
        real("Coefficient3 x**2").required(),
        real("Coefficient4 x**3").required(),
        real("Minimum Value of x"),
        real("Maximum Value of x"),
    ],
    extensible: &[],
};

static REFRIGERATION_COMPRESSOR: ObjectSchema = ObjectSchema {
    object_type: ObjectType::RefrigerationCompressor,
    name_field: Some(0),
    fields: &[
        NAME,
        pointer("Refrigeration Compressor Power Curve Name", IDF_CURVES).required(),
        pointer("Refrigeration Compressor Capacity Curve Name", IDF_CURVES).required(),
        real("Rated Superheat"),
        real("Rated Return Gas Temperature"),
        alpha("End-Use Subcategory").with_default("General"),
    ],
    extensible: &[],
};

static REFRIGERATION_COMPRESSOR_LIST: ObjectSchema = ObjectSchema {
    object_type: ObjectType::RefrigerationCompressorList,
    name_field: Some(0),
    fields: &[NAME],
    extensible: &[pointer("Refrigeration Compressor Name", IDF_COMPRESSORS)],
};

static REFRIGERATION_CASE: ObjectSchema = ObjectSchema {
    object_type: ObjectType::RefrigerationCase,
    name_field: Some(0),
    fields: &[
        NAME,
        pointer("Availability Schedule Name", IDF_SCHEDULES),
        real("Rated Total Cooling Capacity per Unit Length").with_default("1900"),
        real("Case Length").with_default("3"),
        real("Case Operating Temperature").with_default("-1"),
    ],
    extensible: &[],
};

static REFRIGERATION_CASE_AND_WALKIN_LIST: ObjectSchema = ObjectSchema {
    object_type: ObjectType::RefrigerationCaseAndWalkInList,
    name_field: Some(0),
    fields: &[NAME],
    extensible: &[pointer("Case or WalkIn Name", IDF_CASES)],
};

static REFRIGERATION_SYSTEM: ObjectSchema = ObjectSchema {
    object_type: ObjectType::RefrigerationSystem,
    name_field: Some(0),
    fields: &[
        NAME,
        pointer(
            "Refrigerated Case or Walkin or CaseAndWalkInList Name",
            IDF_CASES_OR_LIST,
        ),
        pointer("Compressor or CompressorList Name", IDF_COMPRESSORS_OR_LIST).required(),
        real("Minimum Condensing Temperature").required(),
        alpha("Refrigeration System Working Fluid Type").required(),
        choice("Suction Temperature Control Type", SUCTION_CONTROL)
            .with_default("FixedSuctionTemperature"),
    ],
    extensible: &[],
};

static CHILLER_HEATER_PERFORMANCE: ObjectSchema = ObjectSchema {
    object_type: ObjectType::ChillerHeaterPerformanceElectricEir,
    name_field: Some(0),
    fields: &[
        NAME,
        autosizable("Reference Cooling Mode Evaporator Capacity").required(),
        real("Reference Cooling Mode COP").required(),
        pointer(
            "Cooling Mode Cooling Capacity Function of Temperature Curve Name",
            IDF_CURVES,
        )
        .required(),
        autosizable("Design Hot Water Flow Rate"),
    ],
    extensible: &[],
};

static CENTRAL_HEAT_PUMP_SYSTEM: ObjectSchema = ObjectSchema {
    object_type: ObjectType::CentralHeatPumpSystem,
    name_field: Some(0),
    fields: &[
        NAME,
        choice("Control Method", CONTROL_METHODS).with_default("SmartMixing"),
        real("Ancillary Power").with_default("0"),
        pointer("Ancillary Operation Schedule Name", IDF_SCHEDULES),
    ],
    extensible: &[
        alpha("Chiller Heater Modules Performance Component Object Type"),
        pointer(
            "Chiller Heater Modules Performance Component Name",
            IDF_CHILLER_HEATERS,
        ),
        pointer("Chiller Heater Modules Control Schedule Name", IDF_SCHEDULES),
        integer("Number of Chiller Heater Modules").with_default("1"),
    ],
};

static BUILDING_SURFACE_DETAILED: ObjectSchema = ObjectSchema {
    object_type: ObjectType::BuildingSurfaceDetailed,
    name_field: Some(0),
    fields: &[
        NAME,
        choice("Surface Type", SURFACE_TYPES).required(),
        choice("Outside Boundary Condition", BOUNDARY_CONDITIONS).required(),
        pointer("Outside Boundary Condition Object", IDF_SURFACES),
        choice("Sun Exposure", EXPOSURES),
        choice("Wind Exposure", EXPOSURES),
    ],
    extensible: &[],
};

static CATCHALL: ObjectSchema = ObjectSchema {
    object_type: ObjectType::Catchall,
    name_field: None,
    fields: &[alpha("Object Type Name").required()],
    extensible: &[alpha("Field")],
};

/// Schema for the built-in object types
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinSchema;

impl SchemaProvider for BuiltinSchema {
    fn object_schema(&self, object_type: &ObjectType) -> Option<&ObjectSchema> {
        let schema = match object_type {
            ObjectType::OsScheduleTypeLimits => &OS_SCHEDULE_TYPE_LIMITS,
            ObjectType::OsScheduleConstant => &OS_SCHEDULE_CONSTANT,
            ObjectType::OsCurveQuadratic => &OS_CURVE_QUADRATIC,
            ObjectType::OsCurveCubic => &OS_CURVE_CUBIC,
            ObjectType::OsModelObjectList => &OS_MODEL_OBJECT_LIST,
            ObjectType::OsRefrigerationCompressor => &OS_REFRIGERATION_COMPRESSOR,
            ObjectType::OsRefrigerationCase => &OS_REFRIGERATION_CASE,
            ObjectType::OsRefrigerationSystem => &OS_REFRIGERATION_SYSTEM,
            ObjectType::OsChillerHeaterPerformanceElectricEir => &OS_CHILLER_HEATER_PERFORMANCE,
            ObjectType::OsCentralHeatPumpSystemModule => &OS_CENTRAL_HEAT_PUMP_SYSTEM_MODULE,
            ObjectType::OsCentralHeatPumpSystem => &OS_CENTRAL_HEAT_PUMP_SYSTEM,
            ObjectType::OsSurface => &OS_SURFACE,
            ObjectType::Version => &VERSION,
            ObjectType::ScheduleTypeLimits => &SCHEDULE_TYPE_LIMITS,
            ObjectType::ScheduleConstant => &SCHEDULE_CONSTANT,
            ObjectType::CurveQuadratic => &CURVE_QUADRATIC,
            ObjectType::CurveCubic => &CURVE_CUBIC,
            ObjectType::RefrigerationCompressor => &REFRIGERATION_COMPRESSOR,
            ObjectType::RefrigerationCompressorList => &REFRIGERATION_COMPRESSOR_LIST,
            ObjectType::RefrigerationCase => &REFRIGERATION_CASE,
            ObjectType::RefrigerationCaseAndWalkInList => &REFRIGERATION_CASE_AND_WALKIN_LIST,
            ObjectType::RefrigerationSystem => &REFRIGERATION_SYSTEM,
            ObjectType::ChillerHeaterPerformanceElectricEir => &CHILLER_HEATER_PERFORMANCE,
            ObjectType::CentralHeatPumpSystem => &CENTRAL_HEAT_PUMP_SYSTEM,
            ObjectType::BuildingSurfaceDetailed => &BUILDING_SURFACE_DETAILED,
            ObjectType::Catchall => &CATCHALL,
            ObjectType::Unknown(_) => return None,
        };
        Some(schema)
    }
}
