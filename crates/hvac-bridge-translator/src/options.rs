// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translator configuration

use serde::{Deserialize, Serialize};

/// Progress callback type: (phase, fraction 0.0..=1.0)
pub type ProgressCallback = Box<dyn Fn(&str, f32) + Send>;

/// Options shared by the forward and reverse translators
///
/// Build with the `with_*` methods or load from JSON; missing keys take
/// their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorOptions {
    /// Emit a `Version` object at the head of a forward translation
    pub emit_version_object: bool,
    /// Identifier written into the `Version` object
    pub version_identifier: String,
    /// Visit objects of one type in case-insensitive name order
    pub sort_by_name: bool,
    /// Translate unrecognized types to `Catchall` instead of skipping them
    pub preserve_unknown_objects: bool,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            emit_version_object: true,
            version_identifier: "23.2".to_string(),
            sort_by_name: true,
            preserve_unknown_objects: true,
        }
    }
}

impl TranslatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Enable/disable the leading `Version` object
    pub fn with_version_object(mut self, enabled: bool) -> Self {
        self.emit_version_object = enabled;
        self
    }

    pub fn with_version_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.version_identifier = identifier.into();
        self
    }

    /// Enable/disable name ordering within a type
    pub fn with_name_sorting(mut self, enabled: bool) -> Self {
        self.sort_by_name = enabled;
        self
    }

    /// Enable/disable the `Catchall` fallback
    pub fn with_unknown_objects(mut self, enabled: bool) -> Self {
        self.preserve_unknown_objects = enabled;
        self
    }
}
