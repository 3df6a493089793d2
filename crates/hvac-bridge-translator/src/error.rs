// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for translation

use hvac_bridge_model::GraphError;
use thiserror::Error;

/// Result type alias for per-object translation
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Reasons a single object fails to translate
///
/// These never abort a run: the engine logs them against the object and
/// carries on with the rest of the graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// A required reference is unset or its target did not translate
    #[error("Missing required {field}")]
    MissingRequired { field: String },

    /// Pointer text that names no object
    #[error("Cannot resolve {field} '{name}'")]
    UnresolvedReference { field: String, name: String },

    /// Graph setter rejected a write
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl TranslateError {
    /// Create a missing required sub-object error
    pub fn missing(field: impl Into<String>) -> Self {
        TranslateError::MissingRequired {
            field: field.into(),
        }
    }

    /// Create an unresolved reference error
    pub fn unresolved(field: impl Into<String>, name: impl Into<String>) -> Self {
        TranslateError::UnresolvedReference {
            field: field.into(),
            name: name.into(),
        }
    }
}
