//! telemachus-dash-types: Shared data types for the telemetry dashboard.
//!
//! Pure data: field metadata, decoded snapshot values and the fetch error
//! taxonomy. No I/O lives here, so every other crate can depend on it.

pub mod error;
pub mod field;
pub mod snapshot;

pub use error::FetchError;
pub use field::{FieldSpec, FieldType};
pub use snapshot::{TelemetrySnapshot, TelemetryValue};
