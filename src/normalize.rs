//! Source payload shapes and conversion into the canonical [`Alert`].
//!
//! Each supported source posts a different JSON shape; detection is a cheap
//! field-presence test, conversion is a single exhaustive match so the
//! per-source field mappings stay colocated.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::alert::Alert;
use crate::error::{PipelineError, Result};

// ---------------------------------------------------------------------------
// SplunkAlert
// ---------------------------------------------------------------------------

/// The shape Splunk webhook alerts arrive in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SplunkAlert {
    pub message: String,
    pub correlation_id: String,
    pub search_name: String,
    pub timestamp: String,
    pub entity: String,
    pub source: String,
    pub event: String,
    pub results_link: String,
    pub app: String,
    pub owner: String,
}

// ---------------------------------------------------------------------------
// OpsGenieAlert
// ---------------------------------------------------------------------------

/// The shape OpsGenie Edge Connector actions arrive in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OpsGenieAlert {
    pub action: String,
    #[serde(rename = "integrationId")]
    pub integration_id: String,
    #[serde(rename = "integrationName")]
    pub integration_name: String,
    pub source: OpsGenieSource,
    pub alert: OpsGenieInner,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OpsGenieSource {
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OpsGenieInner {
    #[serde(rename = "alertId")]
    pub alert_id: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub details: OpsGenieDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OpsGenieDetails {
    #[serde(rename = "Results Link")]
    pub results_link: String,
    #[serde(rename = "Results Object")]
    pub results_object: String,
}

// ---------------------------------------------------------------------------
// SumoLogicAlert
// ---------------------------------------------------------------------------

/// The shape SumoLogic webhook connections arrive in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SumoLogicAlert {
    pub id: String,
    pub name: String,
    pub description: String,
    pub event_type: String,
    pub client: String,
    pub client_url: String,
    pub time_range: String,
    pub time_trigger: String,
    pub num_results: String,
    pub results: String,
}

// ---------------------------------------------------------------------------
// RawAlert
// ---------------------------------------------------------------------------

/// A detected inbound payload, one variant per known source shape.
#[derive(Debug, Clone)]
pub enum RawAlert {
    Splunk(SplunkAlert),
    OpsGenie(OpsGenieAlert),
    SumoLogic(SumoLogicAlert),
}

impl RawAlert {
    /// Detect which source produced `raw` and deserialize it.
    ///
    /// Detection keys: a `search_name` field marks Splunk, an
    /// `integrationName` field marks OpsGenie, `id` together with `results`
    /// marks SumoLogic. Anything else is rejected; the caller skips that
    /// message and carries on with the rest of its batch.
    pub fn detect(raw: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(raw).map_err(|_| PipelineError::UnrecognizedFormat)?;

        if value.get("search_name").is_some() {
            debug!("auto detected Splunk alert");
            return Ok(Self::Splunk(serde_json::from_value(value)?));
        }
        if value.get("integrationName").is_some() {
            debug!("auto detected OpsGenie alert");
            return Ok(Self::OpsGenie(serde_json::from_value(value)?));
        }
        if value.get("id").is_some() && value.get("results").is_some() {
            debug!("auto detected SumoLogic alert");
            return Ok(Self::SumoLogic(serde_json::from_value(value)?));
        }
        Err(PipelineError::UnrecognizedFormat)
    }

    /// Convert to the canonical form. Display metadata is copied verbatim;
    /// `subjects` and `results` start empty.
    pub fn normalize(self) -> Alert {
        match self {
            Self::Splunk(alert) => Alert {
                raw_message: alert.message,
                id: alert.correlation_id,
                name: alert.search_name,
                url: alert.results_link,
                timestamp: alert.timestamp,
                ..Alert::default()
            },
            Self::OpsGenie(alert) => Alert {
                raw_message: alert.alert.details.results_object,
                id: alert.alert.alert_id,
                name: alert.alert.message,
                timestamp: alert.alert.created_at,
                url: alert.alert.details.results_link,
                ..Alert::default()
            },
            Self::SumoLogic(alert) => Alert {
                raw_message: alert.results,
                id: alert.id,
                name: alert.name,
                timestamp: alert.time_trigger,
                url: alert.client_url,
                ..Alert::default()
            },
        }
    }
}
