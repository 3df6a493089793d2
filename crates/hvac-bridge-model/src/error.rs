// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for object graph operations

use crate::{Handle, ObjectType};
use thiserror::Error;

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph setters and lookups
///
/// Every failing operation leaves the graph untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Handle does not belong to the graph (never added, or removed)
    #[error("Object {0} not found")]
    ObjectNotFound(Handle),

    /// No object carries the requested name
    #[error("No object named '{0}'")]
    NameNotFound(String),

    /// Another object already uses the name (case-insensitive)
    #[error("Name '{name}' is already used by object {existing}")]
    NameConflict { name: String, existing: Handle },

    /// The object type has no name field
    #[error("Objects of type '{0}' cannot be named")]
    NoNameField(ObjectType),

    /// Field index past the end of the record
    #[error("Field {index} out of range for '{object_type}' ({len} fields)")]
    FieldOutOfRange {
        object_type: ObjectType,
        index: usize,
        len: usize,
    },

    /// Pointer operation on a field that does not hold references
    #[error("Field {index} of '{object_type}' is not a reference field")]
    NotAPointerField { object_type: ObjectType, index: usize },

    /// Target type is not in the field's allowed reference lists
    #[error(
        "Field {index} of '{object_type}' cannot point to an object of type '{target_type}'"
    )]
    IncompatibleTarget {
        object_type: ObjectType,
        index: usize,
        target_type: ObjectType,
    },

    /// Value rejected by the field definition
    #[error("Invalid value for field {index} of '{object_type}': {message}")]
    InvalidValue {
        object_type: ObjectType,
        index: usize,
        message: String,
    },

    /// Extensible group pushed with the wrong number of values
    #[error("Extensible group for '{object_type}' needs {expected} values, got {actual}")]
    GroupWidthMismatch {
        object_type: ObjectType,
        expected: usize,
        actual: usize,
    },

    /// Schedule does not satisfy the consuming field's schedule type
    #[error("Schedule '{schedule}' is not compatible with '{class}' schedule '{display_name}'")]
    IncompatibleSchedule {
        schedule: String,
        class: ObjectType,
        display_name: String,
    },
}

impl GraphError {
    /// Create a field range error
    pub fn out_of_range(object_type: &ObjectType, index: usize, len: usize) -> Self {
        GraphError::FieldOutOfRange {
            object_type: object_type.clone(),
            index,
            len,
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(object_type: &ObjectType, index: usize, msg: impl Into<String>) -> Self {
        GraphError::InvalidValue {
            object_type: object_type.clone(),
            index,
            message: msg.into(),
        }
    }

    /// Create a name lookup error
    pub fn name_not_found(name: impl Into<String>) -> Self {
        GraphError::NameNotFound(name.into())
    }
}
