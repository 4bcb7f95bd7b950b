//! Extractor configuration, loaded from a TOML file.
//!
//! Configuration is an explicit value passed into [`SubjectExtractor::new`]
//! rather than process-wide state, so tests and embedders can vary it per
//! call.
//!
//! [`SubjectExtractor::new`]: crate::extract::SubjectExtractor::new

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options recognized by the indicator extractors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Regex describing the deployment's internal host naming convention
    /// (e.g. an asset-tag pattern). Unset or empty disables hostname
    /// extraction; there is no built-in default.
    pub host_pattern: Option<String>,

    /// Substring excluding matching domains from extraction, typically the
    /// deploying organization's own domain. Unset or empty applies no
    /// substring filtering.
    pub ignore_domain: Option<String>,

    /// Forwarded to the external enrichment branches: when set, providers
    /// report matches without raising findings. Not read by this crate.
    pub only_log_matches: bool,
}

impl ExtractorConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        Ok(config)
    }

    /// The hostname pattern, with empty strings treated as unset.
    pub fn host_pattern(&self) -> Option<&str> {
        self.host_pattern.as_deref().filter(|p| !p.is_empty())
    }

    /// The domain ignore substring, with empty strings treated as unset.
    pub fn ignore_domain(&self) -> Option<&str> {
        self.ignore_domain.as_deref().filter(|d| !d.is_empty())
    }
}
