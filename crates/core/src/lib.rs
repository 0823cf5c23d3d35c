//! telemachus-dash-core: Field registry and source trait.
//!
//! This crate contains the compiled-in channel registry, the `DataSource`
//! trait every telemetry source implements, and shared constants.

pub mod constants;
mod data_source;
pub mod registry;

pub use constants::{
    BAR_WIDTH, DEFAULT_DATALINK_PATH, DEFAULT_HOST, DEFAULT_POLL_INTERVAL, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT, LABEL_WIDTH, RESOURCE_NOT_INSTALLED,
};
pub use data_source::{BoxedDataSource, DataSource, SourceMetadata};
pub use registry::{lookup, FieldKey};

// Re-export types used in trait signatures for convenience
pub use telemachus_dash_types::{
    FetchError, FieldSpec, FieldType, TelemetrySnapshot, TelemetryValue,
};
