// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reverse translation: workspace to model graph
//!
//! Mirrors the forward walk. Pointers are followed through the workspace's
//! reference index, never by re-resolving field text, and the plural
//! relations the workspace flattens are rebuilt as model object lists.

mod catchall;
mod central_heat_pump;
mod curves;
mod refrigeration;
mod schedules;
mod surfaces;

use crate::{
    context::{visit_order, Progress, TranslationMap},
    error::{Result, TranslateError},
    messages::{LogMessage, TranslationLog},
    options::{ProgressCallback, TranslatorOptions},
};
use hvac_bridge_model::{
    FieldValue, Handle, Model, ObjectGraph, ObjectType, SchemaRecord, Workspace,
};
use rustc_hash::FxHashSet;

/// Top-level visit order; types not listed follow in insertion order
const TRANSLATION_ORDER: &[ObjectType] = &[
    ObjectType::ScheduleTypeLimits,
    ObjectType::ScheduleConstant,
    ObjectType::CurveQuadratic,
    ObjectType::CurveCubic,
    ObjectType::BuildingSurfaceDetailed,
    ObjectType::RefrigerationSystem,
    ObjectType::CentralHeatPumpSystem,
    ObjectType::RefrigerationCompressor,
    ObjectType::RefrigerationCase,
    ObjectType::ChillerHeaterPerformanceElectricEir,
    ObjectType::RefrigerationCompressorList,
    ObjectType::RefrigerationCaseAndWalkInList,
];

/// Translates a [`Workspace`] back into a [`Model`]
#[derive(Default)]
pub struct ReverseTranslator {
    options: TranslatorOptions,
    progress: Option<ProgressCallback>,
    log: TranslationLog,
    untranslated: Vec<Handle>,
}

impl ReverseTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TranslatorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Set progress callback
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    /// Translate a whole workspace
    pub fn translate_workspace(&mut self, workspace: &Workspace) -> Model {
        let order = visit_order(workspace, TRANSLATION_ORDER, self.options.sort_by_name);
        let mut ctx = ReverseContext::new(
            workspace,
            &self.options,
            Progress::new(self.progress.as_ref(), "Translating workspace", order.len()),
        );

        for handle in order {
            ctx.translate_and_map(handle);
            ctx.progress.step();
        }

        self.untranslated = workspace
            .handles()
            .iter()
            .copied()
            .filter(|&h| !ctx.map.contains(h) && !ctx.consumed.contains(&h))
            .collect();
        log::debug!(
            "Reverse translation produced {} objects from {}, {} left untranslated",
            ctx.model.len(),
            workspace.len(),
            self.untranslated.len()
        );
        self.log = ctx.log;
        ctx.model
    }

    /// Workspace objects from the last run that produced nothing
    ///
    /// Lists folded into their parent system are not included.
    pub fn untranslated_idf_objects(&self) -> &[Handle] {
        &self.untranslated
    }

    /// Messages from the last run
    pub fn log(&self) -> &TranslationLog {
        &self.log
    }

    pub fn warnings(&self) -> Vec<&LogMessage> {
        self.log.warnings()
    }

    pub fn errors(&self) -> Vec<&LogMessage> {
        self.log.errors()
    }
}

/// State of one reverse run
pub(crate) struct ReverseContext<'a> {
    pub(crate) workspace: &'a Workspace,
    pub(crate) model: Model,
    pub(crate) map: TranslationMap,
    pub(crate) log: TranslationLog,
    /// Workspace objects absorbed into a parent's translation
    pub(crate) consumed: FxHashSet<Handle>,
    options: &'a TranslatorOptions,
    progress: Progress<'a>,
}

impl<'a> ReverseContext<'a> {
    pub(crate) fn new(
        workspace: &'a Workspace,
        options: &'a TranslatorOptions,
        progress: Progress<'a>,
    ) -> Self {
        Self {
            workspace,
            model: Model::new(),
            map: TranslationMap::new(),
            log: TranslationLog::new(),
            consumed: FxHashSet::default(),
            options,
            progress,
        }
    }

    /// Translate a workspace object, reusing an earlier result
    pub(crate) fn translate_and_map(&mut self, handle: Handle) -> Option<Handle> {
        if let Some(target) = self.map.get(handle) {
            return Some(target);
        }
        let workspace = self.workspace;
        let Some(object) = workspace.get(handle) else {
            self.log
                .error(None, format!("Cannot translate stale handle {}", handle));
            return None;
        };
        log::trace!("Translating {}", object.brief_description());

        match self.dispatch(object) {
            Ok(Some(target)) => Some(self.map.insert(handle, target)),
            Ok(None) => None,
            Err(e) => {
                self.log.error(Some(object), e.to_string());
                None
            }
        }
    }

    fn dispatch(&mut self, object: &SchemaRecord) -> Result<Option<Handle>> {
        match object.object_type() {
            ObjectType::ScheduleTypeLimits => {
                schedules::translate_schedule_type_limits(self, object).map(Some)
            }
            ObjectType::ScheduleConstant => {
                schedules::translate_schedule_constant(self, object).map(Some)
            }
            ObjectType::CurveQuadratic => curves::translate_curve_quadratic(self, object).map(Some),
            ObjectType::CurveCubic => curves::translate_curve_cubic(self, object).map(Some),
            ObjectType::RefrigerationCompressor => {
                refrigeration::translate_compressor(self, object).map(Some)
            }
            ObjectType::RefrigerationCase => refrigeration::translate_case(self, object).map(Some),
            ObjectType::RefrigerationSystem => {
                refrigeration::translate_system(self, object).map(Some)
            }
            ObjectType::ChillerHeaterPerformanceElectricEir => {
                central_heat_pump::translate_chiller_heater_performance(self, object).map(Some)
            }
            ObjectType::CentralHeatPumpSystem => {
                central_heat_pump::translate_central_heat_pump_system(self, object).map(Some)
            }
            ObjectType::BuildingSurfaceDetailed => surfaces::translate_surface(self, object).map(Some),
            ObjectType::Catchall => catchall::restore_catchall(self, object).map(Some),
            ObjectType::Version => {
                self.log.info(Some(object), "Version has no model counterpart");
                Ok(None)
            }
            // Rebuilt by the system that points at them
            ObjectType::RefrigerationCompressorList | ObjectType::RefrigerationCaseAndWalkInList => {
                Ok(None)
            }
            _ if self.options.preserve_unknown_objects => {
                self.log.warn(
                    Some(object),
                    format!("No translation for '{}', writing Catchall", object.object_type()),
                );
                catchall::translate_catchall(self, object).map(Some)
            }
            _ => {
                self.log.warn(
                    Some(object),
                    format!("No translation for '{}', skipped", object.object_type()),
                );
                Ok(None)
            }
        }
    }

    // ========================================================================
    // Helpers for per-type functions
    // ========================================================================

    /// Create the model object for `source`, name it and register it
    pub(crate) fn create_and_register(&mut self, source: &SchemaRecord, object_type: ObjectType) -> Handle {
        let name = source.name().unwrap_or_default();
        let target = self.model.create_object(object_type, name);
        self.map.insert(source.handle(), target)
    }

    /// Create a model object with no workspace counterpart
    pub(crate) fn create_unmapped(&mut self, object_type: ObjectType, name: &str) -> Handle {
        self.model.create_object(object_type, name)
    }

    /// Current name of a model object
    pub(crate) fn target_name(&self, handle: Handle) -> String {
        self.model
            .get(handle)
            .and_then(SchemaRecord::name)
            .unwrap_or_default()
            .to_string()
    }

    /// Schema name of a field, for messages
    fn field_label(&self, source: &SchemaRecord, field: usize) -> String {
        self.workspace
            .schema()
            .field(source.object_type(), field)
            .map(|f| f.name.to_string())
            .unwrap_or_else(|| format!("field {}", field))
    }

    /// Workspace object a pointer field refers to
    ///
    /// Text with no matching edge means the name never resolved.
    pub(crate) fn source_reference(&self, source: &SchemaRecord, field: usize) -> Result<Option<Handle>> {
        if let Some(target) = self.workspace.references().target(source.handle(), field) {
            return Ok(Some(target));
        }
        match source.get_str(field) {
            Some(name) => Err(TranslateError::unresolved(self.field_label(source, field), name)),
            None => Ok(None),
        }
    }

    /// Referenced workspace object, or an error naming what is missing
    pub(crate) fn require_reference(&self, source: &SchemaRecord, field: usize, label: &str) -> Result<Handle> {
        self.source_reference(source, field)?
            .ok_or_else(|| TranslateError::missing(label))
    }

    /// Translate the object an optional pointer field refers to
    ///
    /// Unresolved text is logged and treated as unset.
    pub(crate) fn translate_reference(&mut self, source: &SchemaRecord, field: usize) -> Option<Handle> {
        match self.source_reference(source, field) {
            Ok(referenced) => self.translate_and_map(referenced?),
            Err(e) => {
                self.log.error(Some(source), e.to_string());
                None
            }
        }
    }

    /// Write a pointer, logging a rejected write against the target object
    pub(crate) fn set_pointer(&mut self, target: Handle, field: usize, to: Handle) {
        if let Err(e) = self.model.set_pointer(target, field, to) {
            self.log.error(self.model.get(target), e.to_string());
        }
    }

    /// Assign a schedule through the capability check
    ///
    /// A rejected schedule leaves the field unset and the run continues.
    pub(crate) fn set_schedule(&mut self, target: Handle, field: usize, schedule: Handle, display_name: &str) {
        if let Err(e) = self.model.set_schedule(target, field, schedule, display_name) {
            self.log.warn(self.model.get(target), e.to_string());
        }
    }

    /// Write a scalar, logging a rejected write against the target object
    pub(crate) fn set_value(&mut self, target: Handle, field: usize, value: FieldValue) {
        if let Err(e) = self.model.set_field(target, field, value) {
            self.log.warn(self.model.get(target), e.to_string());
        }
    }

    /// Copy scalar fields 1:1, skipping empty ones
    pub(crate) fn copy_fields(&mut self, source: &SchemaRecord, target: Handle, pairs: &[(usize, usize)]) {
        for &(from, to) in pairs {
            match source.get(from) {
                Some(value) if !value.is_empty() => self.set_value(target, to, value.clone()),
                _ => {}
            }
        }
    }

    /// Append to a model object list, logging a rejected member
    pub(crate) fn append_to_list(&mut self, list: Handle, member: Handle) {
        if let Err(e) = self.model.append_to_list(list, member) {
            self.log.error(self.model.get(list), e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvac_bridge_model::{fields::idf, ObjectGraphExt};

    #[test]
    fn test_version_is_untranslated() {
        let mut ws = Workspace::new();
        let version = ws.create_object(ObjectType::Version, "");
        ws.set_field(version, idf::version::VERSION_IDENTIFIER, "23.2".into())
            .unwrap();
        ws.create_object(ObjectType::CurveQuadratic, "Curve");

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        assert_eq!(model.len(), 1);
        assert_eq!(translator.untranslated_idf_objects(), &[version]);
        assert!(translator.errors().is_empty());
        let messages = translator.log().messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, crate::LogLevel::Info);
    }

    #[test]
    fn test_unknown_idf_type_is_preserved() {
        let mut ws = Workspace::new();
        ws.add_object(SchemaRecord::free_form(
            ObjectType::Unknown("Coil:Cooling:Mystery".into()),
            vec!["Mystery".into(), FieldValue::Real(3.0)],
        ));

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        let catchall = model.objects_by_type(&ObjectType::Catchall);
        assert_eq!(catchall.len(), 1);
        assert_eq!(
            catchall[0].get_str(idf::catchall::OBJECT_TYPE_NAME),
            Some("Coil:Cooling:Mystery")
        );
        assert_eq!(catchall[0].num_groups(), 2);
        assert_eq!(translator.warnings().len(), 1);

        let mut skipping =
            ReverseTranslator::with_options(TranslatorOptions::new().with_unknown_objects(false));
        let model = skipping.translate_workspace(&ws);
        assert!(model.is_empty());
        assert_eq!(skipping.untranslated_idf_objects().len(), 1);
    }

    #[test]
    fn test_unresolved_name_is_reported() {
        let mut ws = Workspace::new();
        let schedule = SchemaRecord::from_schema(ws.schema(), ObjectType::ScheduleConstant)
            .with_name("Sched")
            .with_field(idf::schedule_constant::SCHEDULE_TYPE_LIMITS_NAME, "Nowhere");
        ws.add_object(schedule);

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        assert_eq!(model.count_by_type(&ObjectType::OsScheduleConstant), 1);
        let errors = translator.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Nowhere"));
        assert_eq!(errors[0].object.as_deref(), Some("Object of type 'Schedule:Constant' named 'Sched'"));
    }
}
