// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for object graph representation
//!
//! This module defines the identity, type tags and field values shared by the
//! model layer and the workspace (IDF) layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Process-unique object identity
///
/// Allocated once when a record is created and never reused, so handles stay
/// valid keys even after the object they named has been removed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Handle(u64);

impl Handle {
    /// Allocate a fresh handle
    pub fn next() -> Self {
        Handle(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl From<Handle> for u64 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

/// Object type tag
///
/// Model-layer types carry the `OS:` prefix, workspace-layer types use the
/// simulation engine's names. Unknown types keep their original spelling.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ObjectType {
    // ========================================================================
    // Model layer
    // ========================================================================
    OsScheduleTypeLimits,
    OsScheduleConstant,
    OsCurveQuadratic,
    OsCurveCubic,
    OsModelObjectList,
    OsRefrigerationCompressor,
    OsRefrigerationCase,
    OsRefrigerationSystem,
    OsChillerHeaterPerformanceElectricEir,
    OsCentralHeatPumpSystemModule,
    OsCentralHeatPumpSystem,
    OsSurface,

    // ========================================================================
    // Workspace layer
    // ========================================================================
    Version,
    ScheduleTypeLimits,
    ScheduleConstant,
    CurveQuadratic,
    CurveCubic,
    RefrigerationCompressor,
    RefrigerationCompressorList,
    RefrigerationCase,
    RefrigerationCaseAndWalkInList,
    RefrigerationSystem,
    ChillerHeaterPerformanceElectricEir,
    CentralHeatPumpSystem,
    BuildingSurfaceDetailed,

    /// Fallback record for types without a translation
    Catchall,

    /// Unknown type (stores the original name)
    Unknown(String),
}

impl ObjectType {
    /// Parse an object type name (case-insensitive)
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "OS:SCHEDULETYPELIMITS" => Self::OsScheduleTypeLimits,
            "OS:SCHEDULE:CONSTANT" => Self::OsScheduleConstant,
            "OS:CURVE:QUADRATIC" => Self::OsCurveQuadratic,
            "OS:CURVE:CUBIC" => Self::OsCurveCubic,
            "OS:MODELOBJECTLIST" => Self::OsModelObjectList,
            "OS:REFRIGERATION:COMPRESSOR" => Self::OsRefrigerationCompressor,
            "OS:REFRIGERATION:CASE" => Self::OsRefrigerationCase,
            "OS:REFRIGERATION:SYSTEM" => Self::OsRefrigerationSystem,
            "OS:CHILLERHEATERPERFORMANCE:ELECTRIC:EIR" => {
                Self::OsChillerHeaterPerformanceElectricEir
            }
            "OS:CENTRALHEATPUMPSYSTEM:MODULE" => Self::OsCentralHeatPumpSystemModule,
            "OS:CENTRALHEATPUMPSYSTEM" => Self::OsCentralHeatPumpSystem,
            "OS:SURFACE" => Self::OsSurface,

            "VERSION" => Self::Version,
            "SCHEDULETYPELIMITS" => Self::ScheduleTypeLimits,
            "SCHEDULE:CONSTANT" => Self::ScheduleConstant,
            "CURVE:QUADRATIC" => Self::CurveQuadratic,
            "CURVE:CUBIC" => Self::CurveCubic,
            "REFRIGERATION:COMPRESSOR" => Self::RefrigerationCompressor,
            "REFRIGERATION:COMPRESSORLIST" => Self::RefrigerationCompressorList,
            "REFRIGERATION:CASE" => Self::RefrigerationCase,
            "REFRIGERATION:CASEANDWALKINLIST" => Self::RefrigerationCaseAndWalkInList,
            "REFRIGERATION:SYSTEM" => Self::RefrigerationSystem,
            "CHILLERHEATERPERFORMANCE:ELECTRIC:EIR" => Self::ChillerHeaterPerformanceElectricEir,
            "CENTRALHEATPUMPSYSTEM" => Self::CentralHeatPumpSystem,
            "BUILDINGSURFACE:DETAILED" => Self::BuildingSurfaceDetailed,

            "CATCHALL" => Self::Catchall,
            _ => Self::Unknown(s.to_string()),
        }
    }

    /// Canonical type name
    pub fn name(&self) -> &str {
        match self {
            Self::OsScheduleTypeLimits => "OS:ScheduleTypeLimits",
            Self::OsScheduleConstant => "OS:Schedule:Constant",
            Self::OsCurveQuadratic => "OS:Curve:Quadratic",
            Self::OsCurveCubic => "OS:Curve:Cubic",
            Self::OsModelObjectList => "OS:ModelObjectList",
            Self::OsRefrigerationCompressor => "OS:Refrigeration:Compressor",
            Self::OsRefrigerationCase => "OS:Refrigeration:Case",
            Self::OsRefrigerationSystem => "OS:Refrigeration:System",
            Self::OsChillerHeaterPerformanceElectricEir => {
                "OS:ChillerHeaterPerformance:Electric:EIR"
            }
            Self::OsCentralHeatPumpSystemModule => "OS:CentralHeatPumpSystem:Module",
            Self::OsCentralHeatPumpSystem => "OS:CentralHeatPumpSystem",
            Self::OsSurface => "OS:Surface",

            Self::Version => "Version",
            Self::ScheduleTypeLimits => "ScheduleTypeLimits",
            Self::ScheduleConstant => "Schedule:Constant",
            Self::CurveQuadratic => "Curve:Quadratic",
            Self::CurveCubic => "Curve:Cubic",
            Self::RefrigerationCompressor => "Refrigeration:Compressor",
            Self::RefrigerationCompressorList => "Refrigeration:CompressorList",
            Self::RefrigerationCase => "Refrigeration:Case",
            Self::RefrigerationCaseAndWalkInList => "Refrigeration:CaseAndWalkInList",
            Self::RefrigerationSystem => "Refrigeration:System",
            Self::ChillerHeaterPerformanceElectricEir => "ChillerHeaterPerformance:Electric:EIR",
            Self::CentralHeatPumpSystem => "CentralHeatPumpSystem",
            Self::BuildingSurfaceDetailed => "BuildingSurface:Detailed",

            Self::Catchall => "Catchall",
            Self::Unknown(s) => s,
        }
    }

    /// True for types that live in the model layer
    pub fn is_model_type(&self) -> bool {
        self.name()
            .get(..3)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("OS:"))
    }

    /// Base used for generated default names
    ///
    /// `OS:Curve:Quadratic` becomes `Curve Quadratic`.
    pub fn default_name_base(&self) -> String {
        let name = self.name();
        let stripped = if self.is_model_type() { &name[3..] } else { name };
        stripped.replace(':', " ")
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObjectType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// A single field value
///
/// Reals may carry the `Autosize` or `Autocalculate` sentinel in place of a
/// number. `Empty` means the field is defaulted.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    Real(f64),
    Integer(i64),
    Autosize,
    Autocalculate,
}

impl FieldValue {
    /// Interpret raw field text
    ///
    /// Sentinels match case-insensitively, numbers are parsed with
    /// `lexical-core`, anything else stays text.
    pub fn parse_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Empty;
        }
        if trimmed.eq_ignore_ascii_case("autosize") {
            return FieldValue::Autosize;
        }
        if trimmed.eq_ignore_ascii_case("autocalculate") {
            return FieldValue::Autocalculate;
        }
        if let Ok(i) = lexical_core::parse::<i64>(trimmed.as_bytes()) {
            return FieldValue::Integer(i);
        }
        if let Ok(f) = lexical_core::parse::<f64>(trimmed.as_bytes()) {
            return FieldValue::Real(f);
        }
        FieldValue::Text(trimmed.to_string())
    }

    /// True for a defaulted field
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Try to get as text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Try to get as float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Real(f) => Some(*f),
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Text(s) => lexical_core::parse::<f64>(s.trim().as_bytes()).ok(),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            FieldValue::Real(f) if f.fract() == 0.0 => Some(*f as i64),
            FieldValue::Text(s) => lexical_core::parse::<i64>(s.trim().as_bytes()).ok(),
            _ => None,
        }
    }

    pub fn is_autosize(&self) -> bool {
        matches!(self, FieldValue::Autosize)
    }

    pub fn is_autocalculate(&self) -> bool {
        matches!(self, FieldValue::Autocalculate)
    }

    /// True if the value is a number (sentinels excluded)
    pub fn is_numeric(&self) -> bool {
        self.as_f64().is_some()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Empty => Ok(()),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Real(v) => write!(f, "{}", v),
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Autosize => f.write_str("Autosize"),
            FieldValue::Autocalculate => f.write_str("Autocalculate"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Real(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let a = Handle::next();
        let b = Handle::next();
        assert_ne!(a, b);
        assert!(b.raw() > a.raw());
    }

    #[test]
    fn test_object_type_parse_is_case_insensitive() {
        assert_eq!(
            ObjectType::parse("os:refrigeration:system"),
            ObjectType::OsRefrigerationSystem
        );
        assert_eq!(
            ObjectType::parse("BuildingSurface:Detailed"),
            ObjectType::BuildingSurfaceDetailed
        );
        assert_eq!(
            ObjectType::parse("OS:Foo:Bar"),
            ObjectType::Unknown("OS:Foo:Bar".to_string())
        );
    }

    #[test]
    fn test_object_type_layers() {
        assert!(ObjectType::OsSurface.is_model_type());
        assert!(!ObjectType::BuildingSurfaceDetailed.is_model_type());
        assert!(ObjectType::Unknown("os:Thing".into()).is_model_type());
        assert_eq!(
            ObjectType::OsCurveQuadratic.default_name_base(),
            "Curve Quadratic"
        );
        assert_eq!(
            ObjectType::RefrigerationCompressorList.default_name_base(),
            "Refrigeration CompressorList"
        );
    }

    #[test]
    fn test_field_value_parse_text() {
        assert_eq!(FieldValue::parse_text("  "), FieldValue::Empty);
        assert_eq!(FieldValue::parse_text("AutoSize"), FieldValue::Autosize);
        assert_eq!(
            FieldValue::parse_text("autocalculate"),
            FieldValue::Autocalculate
        );
        assert_eq!(FieldValue::parse_text("42"), FieldValue::Integer(42));
        assert_eq!(FieldValue::parse_text("-1.5"), FieldValue::Real(-1.5));
        assert_eq!(
            FieldValue::parse_text("Continuous"),
            FieldValue::Text("Continuous".into())
        );
    }

    #[test]
    fn test_field_value_accessors() {
        assert_eq!(FieldValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(FieldValue::Text("2.5".into()).as_f64(), Some(2.5));
        assert_eq!(FieldValue::Real(4.0).as_i64(), Some(4));
        assert_eq!(FieldValue::Real(4.5).as_i64(), None);
        assert_eq!(FieldValue::Autosize.as_f64(), None);
        assert!(FieldValue::Text(String::new()).is_empty());
        assert_eq!(FieldValue::Autosize.to_string(), "Autosize");
    }
}
