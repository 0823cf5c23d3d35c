//! Data source trait and related types

use telemachus_dash_types::{FetchError, TelemetrySnapshot};

/// Metadata about a data source
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    /// Unique identifier for this source type
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of where this source gets its telemetry
    pub description: String,
}

/// Trait for all telemetry sources
///
/// A source produces one fresh snapshot per poll cycle and keeps no
/// decoded state between cycles.
pub trait DataSource: Send {
    /// Get metadata about this source
    fn metadata(&self) -> &SourceMetadata;

    /// Fetch and decode one snapshot
    fn poll(&mut self) -> Result<TelemetrySnapshot, FetchError>;
}

/// Type-erased data source for dynamic dispatch
pub type BoxedDataSource = Box<dyn DataSource>;
