//! Load options and retrieval configuration

use crate::format::Format;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retrieval settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Remote fetch timeout in milliseconds; `None` blocks indefinitely
    pub timeout_ms: Option<u64>,
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            user_agent: concat!("foliaset/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Per-load options
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit format; inferred from the location suffix when absent
    pub format: Option<Format>,
    /// Namespace context for exported triples
    pub basens: Option<String>,
    pub config: LoaderConfig,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_basens<S: Into<String>>(mut self, basens: S) -> Self {
        self.basens = Some(basens.into());
        self
    }

    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }
}
