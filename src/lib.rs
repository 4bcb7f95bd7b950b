//! # ioc-pipeline
//!
//! Alert normalization, indicator extraction and result aggregation for a
//! security alert enrichment pipeline.
//!
//! Inbound webhook payloads (Splunk, OpsGenie, SumoLogic) are converted into a
//! canonical [`Alert`], indicators of compromise (IPv4 addresses, public
//! domains, internal hostnames, URLs) are extracted from the alert body, and
//! the per-provider enrichment results produced by the external fan-out are
//! merged back into one record per alert, ready for a ticketing sink.
//!
//! The enrichment fan-out itself, the vendor lookup clients and the ticket
//! system wire clients are external collaborators; this crate only defines
//! the records they exchange and the seams they plug into.

pub mod aggregate;
pub mod alert;
pub mod config;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod safelink;
pub mod sink;

// Re-export key types at crate root for convenience.
pub use aggregate::combine_results_by_id;
pub use alert::{Alert, EnrichmentResult, Subject, SubjectKind};
pub use config::ExtractorConfig;
pub use error::{PipelineError, Result};
pub use extract::SubjectExtractor;
pub use normalize::RawAlert;
pub use pipeline::{process_batch, process_message};
pub use sink::TicketSink;
