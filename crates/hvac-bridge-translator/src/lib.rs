// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC-Bridge Translator - Model to workspace translation and back
//!
//! Two engines walk one object graph depth-first and build the other:
//!
//! - [`ForwardTranslator`] - [`Model`] to [`Workspace`], folding model
//!   object lists into synthetic list objects or inline groups
//! - [`ReverseTranslator`] - [`Workspace`] to [`Model`], rebuilding those
//!   lists
//!
//! Both memoize by source handle, register a target before following its
//! references, and log per-object failures instead of aborting.
//!
//! # Example
//!
//! ```ignore
//! use hvac_bridge_translator::{ForwardTranslator, ReverseTranslator};
//!
//! let mut forward = ForwardTranslator::new();
//! let workspace = forward.translate_model(&model);
//! println!("{}", forward.log().to_json()?);
//!
//! let model_again = ReverseTranslator::new().translate_workspace(&workspace);
//! ```

mod aggregate;
pub mod context;
pub mod error;
pub mod forward;
pub mod messages;
pub mod options;
pub mod reverse;

pub use context::TranslationMap;
pub use error::{Result, TranslateError};
pub use forward::ForwardTranslator;
pub use messages::{LogLevel, LogMessage, TranslationLog};
pub use options::{ProgressCallback, TranslatorOptions};
pub use reverse::ReverseTranslator;

pub use hvac_bridge_model::{Model, Workspace};

/// Translate a model with default options
pub fn translate_model(model: &Model) -> Workspace {
    ForwardTranslator::new().translate_model(model)
}

/// Translate a workspace with default options
pub fn translate_workspace(workspace: &Workspace) -> Model {
    ReverseTranslator::new().translate_workspace(workspace)
}
