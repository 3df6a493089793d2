// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-run translation log
//!
//! Every message is forwarded to the `log` facade and also kept so callers
//! can inspect a run's warnings and errors afterwards.

use hvac_bridge_model::SchemaRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// One collected message
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LogMessage {
    pub level: LogLevel,
    /// Brief description of the object the message concerns
    pub object: Option<String>,
    pub message: String,
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.object {
            Some(object) => write!(f, "{}: {}", object, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Messages collected during one translation
#[derive(Clone, Debug, Default)]
pub struct TranslationLog {
    messages: Vec<LogMessage>,
}

impl TranslationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, object: Option<&SchemaRecord>, message: impl Into<String>) {
        self.push(LogLevel::Info, object, message.into());
    }

    pub fn warn(&mut self, object: Option<&SchemaRecord>, message: impl Into<String>) {
        self.push(LogLevel::Warn, object, message.into());
    }

    pub fn error(&mut self, object: Option<&SchemaRecord>, message: impl Into<String>) {
        self.push(LogLevel::Error, object, message.into());
    }

    fn push(&mut self, level: LogLevel, object: Option<&SchemaRecord>, message: String) {
        let entry = LogMessage {
            level,
            object: object.map(SchemaRecord::brief_description),
            message,
        };
        match level {
            LogLevel::Info => log::info!("{}", entry),
            LogLevel::Warn => log::warn!("{}", entry),
            LogLevel::Error => log::error!("{}", entry),
        }
        self.messages.push(entry);
    }

    /// All messages in emission order
    pub fn messages(&self) -> &[LogMessage] {
        &self.messages
    }

    pub fn warnings(&self) -> Vec<&LogMessage> {
        self.by_level(LogLevel::Warn)
    }

    pub fn errors(&self) -> Vec<&LogMessage> {
        self.by_level(LogLevel::Error)
    }

    fn by_level(&self, level: LogLevel) -> Vec<&LogMessage> {
        self.messages.iter().filter(|m| m.level == level).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Serialize all messages as a JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.messages)
    }
}
