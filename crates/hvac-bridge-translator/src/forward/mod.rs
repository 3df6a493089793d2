// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Forward translation: model graph to workspace
//!
//! The walk is depth-first and memoized by model handle. Each per-type
//! function creates its target through [`ForwardContext::create_and_register`]
//! before following references, which is what makes reference cycles safe.

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
    fields::idf::version, FieldValue, Handle, Model, ObjectGraph, ObjectType, SchemaRecord,
    Workspace,
};

/// Top-level visit order; types not listed follow in insertion order
const TRANSLATION_ORDER: &[ObjectType] = &[
    ObjectType::OsScheduleTypeLimits,
    ObjectType::OsScheduleConstant,
    ObjectType::OsCurveQuadratic,
    ObjectType::OsCurveCubic,
    ObjectType::OsSurface,
    ObjectType::OsRefrigerationSystem,
    ObjectType::OsCentralHeatPumpSystem,
    ObjectType::OsRefrigerationCompressor,
    ObjectType::OsRefrigerationCase,
    ObjectType::OsChillerHeaterPerformanceElectricEir,
    ObjectType::OsCentralHeatPumpSystemModule,
    ObjectType::OsModelObjectList,
];

/// Translates a [`Model`] into a [`Workspace`]
///
/// # Example
///
/// ```ignore
/// use hvac_bridge_translator::{ForwardTranslator, TranslatorOptions};
///
/// let mut translator = ForwardTranslator::with_options(
///     TranslatorOptions::new().with_version_object(false),
/// );
/// let workspace = translator.translate_model(&model);
/// for warning in translator.warnings() {
///     eprintln!("{}", warning);
/// }
/// ```
#[derive(Default)]
pub struct ForwardTranslator {
    options: TranslatorOptions,
    progress: Option<ProgressCallback>,
    log: TranslationLog,
}

impl ForwardTranslator {
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

    /// Translate a whole model
    ///
    /// Individual object failures are logged and never abort the run.
    pub fn translate_model(&mut self, model: &Model) -> Workspace {
        let order = visit_order(model, TRANSLATION_ORDER, self.options.sort_by_name);
        let mut ctx = ForwardContext::new(
            model,
            &self.options,
            Progress::new(self.progress.as_ref(), "Translating model", order.len()),
        );

        if self.options.emit_version_object {
            ctx.emit_version();
        }
        for handle in order {
            ctx.translate_and_map(handle);
            ctx.progress.step();
        }

        log::debug!(
            "Forward translation produced {} objects from {}",
            ctx.workspace.len(),
            model.len()
        );
        self.log = ctx.log;
        ctx.workspace
    }

    /// Translate one object and everything it references
    pub fn translate_model_object(&mut self, model: &Model, handle: Handle) -> Workspace {
        let mut ctx = ForwardContext::new(
            model,
            &self.options,
            Progress::new(self.progress.as_ref(), "Translating object", 1),
        );
        if ctx.translate_and_map(handle).is_none() {
            ctx.log.warn(model.get(handle), "Object did not translate");
        }
        ctx.progress.step();
        self.log = ctx.log;
        ctx.workspace
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

/// State of one forward run
pub(crate) struct ForwardContext<'a> {
    pub(crate) model: &'a Model,
    pub(crate) workspace: Workspace,
    pub(crate) map: TranslationMap,
    pub(crate) log: TranslationLog,
    options: &'a TranslatorOptions,
    progress: Progress<'a>,
}

impl<'a> ForwardContext<'a> {
    pub(crate) fn new(model: &'a Model, options: &'a TranslatorOptions, progress: Progress<'a>) -> Self {
        Self {
            model,
            workspace: Workspace::new(),
            map: TranslationMap::new(),
            log: TranslationLog::new(),
            options,
            progress,
        }
    }

    fn emit_version(&mut self) {
        let handle = self.workspace.create_object(ObjectType::Version, "");
        let identifier = FieldValue::Text(self.options.version_identifier.clone());
        self.set_value(handle, version::VERSION_IDENTIFIER, identifier);
    }

    /// Translate a model object, reusing an earlier result for the same handle
    pub(crate) fn translate_and_map(&mut self, handle: Handle) -> Option<Handle> {
        if let Some(target) = self.map.get(handle) {
            return Some(target);
        }
        let model = self.model;
        let Some(object) = model.get(handle) else {
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

    /// Per-type translation, one arm per supported model type
    fn dispatch(&mut self, object: &SchemaRecord) -> Result<Option<Handle>> {
        match object.object_type() {
            ObjectType::OsScheduleTypeLimits => {
                schedules::translate_schedule_type_limits(self, object).map(Some)
            }
            ObjectType::OsScheduleConstant => {
                schedules::translate_schedule_constant(self, object).map(Some)
            }
            ObjectType::OsCurveQuadratic => curves::translate_curve_quadratic(self, object).map(Some),
            ObjectType::OsCurveCubic => curves::translate_curve_cubic(self, object).map(Some),
            ObjectType::OsRefrigerationCompressor => {
                refrigeration::translate_compressor(self, object).map(Some)
            }
            ObjectType::OsRefrigerationCase => refrigeration::translate_case(self, object).map(Some),
            ObjectType::OsRefrigerationSystem => {
                refrigeration::translate_system(self, object).map(Some)
            }
            ObjectType::OsChillerHeaterPerformanceElectricEir => {
                central_heat_pump::translate_chiller_heater_performance(self, object).map(Some)
            }
            ObjectType::OsCentralHeatPumpSystem => {
                central_heat_pump::translate_central_heat_pump_system(self, object).map(Some)
            }
            ObjectType::OsSurface => surfaces::translate_surface(self, object).map(Some),
            ObjectType::Catchall => catchall::copy_catchall(self, object).map(Some),
            // Folded into the parent that owns them
            ObjectType::OsModelObjectList | ObjectType::OsCentralHeatPumpSystemModule => Ok(None),
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

    /// Create the target for `source`, name it and register it in the map
    pub(crate) fn create_and_register(&mut self, source: &SchemaRecord, object_type: ObjectType) -> Handle {
        let name = source.name().unwrap_or_default();
        let target = self.workspace.create_object(object_type, name);
        self.map.insert(source.handle(), target)
    }

    /// Create a target with no source counterpart
    pub(crate) fn create_unmapped(&mut self, object_type: ObjectType, name: &str) -> Handle {
        self.workspace.create_object(object_type, name)
    }

    /// Current name of a workspace object
    pub(crate) fn target_name(&self, handle: Handle) -> String {
        self.workspace
            .get(handle)
            .and_then(SchemaRecord::name)
            .unwrap_or_default()
            .to_string()
    }

    /// Model object a pointer field of `source` refers to
    pub(crate) fn source_reference(&self, source: &SchemaRecord, field: usize) -> Option<Handle> {
        self.model.references().target(source.handle(), field)
    }

    /// Referenced model object, or `MissingRequired`
    pub(crate) fn require_reference(&self, source: &SchemaRecord, field: usize, label: &str) -> Result<Handle> {
        self.source_reference(source, field)
            .ok_or_else(|| TranslateError::missing(label))
    }

    /// Translate the object an optional pointer field refers to
    pub(crate) fn translate_reference(&mut self, source: &SchemaRecord, field: usize) -> Option<Handle> {
        let referenced = self.source_reference(source, field)?;
        self.translate_and_map(referenced)
    }

    /// Members of the model object list a pointer field refers to
    pub(crate) fn list_members(&self, source: &SchemaRecord, field: usize) -> Vec<Handle> {
        self.source_reference(source, field)
            .map(|list| self.model.list_members(list))
            .unwrap_or_default()
    }

    /// Write a pointer, logging a rejected write against the target object
    pub(crate) fn set_pointer(&mut self, target: Handle, field: usize, to: Handle) {
        if let Err(e) = self.workspace.set_pointer(target, field, to) {
            self.log.error(self.workspace.get(target), e.to_string());
        }
    }

    /// Write a scalar, logging a rejected write against the target object
    pub(crate) fn set_value(&mut self, target: Handle, field: usize, value: FieldValue) {
        if let Err(e) = self.workspace.set_field(target, field, value) {
            self.log.warn(self.workspace.get(target), e.to_string());
        }
    }

    /// Copy scalar fields 1:1, skipping defaulted ones
    pub(crate) fn copy_fields(&mut self, source: &SchemaRecord, target: Handle, pairs: &[(usize, usize)]) {
        for &(from, to) in pairs {
            match source.get(from) {
                Some(value) if !value.is_empty() => self.set_value(target, to, value.clone()),
                _ => {}
            }
        }
    }

    /// Copy a scalar, filling in the source field's schema default when unset
    pub(crate) fn copy_or_default(&mut self, source: &SchemaRecord, from: usize, target: Handle, to: usize) {
        let value = match source.get(from) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => self
                .model
                .schema()
                .field(source.object_type(), from)
                .map(|field| field.default_value())
                .unwrap_or_default(),
        };
        if !value.is_empty() {
            self.set_value(target, to, value);
        }
    }

    /// Append an extensible group, logging a rejected write
    pub(crate) fn push_group(&mut self, target: Handle, values: Vec<FieldValue>) -> Option<usize> {
        match self.workspace.push_group(target, values) {
            Ok(group) => Some(group),
            Err(e) => {
                self.log.error(self.workspace.get(target), e.to_string());
                None
            }
        }
    }
}
