//! telemachus-dash-sources: Telemetry source implementations.

mod demo;
pub mod telemachus;

pub use demo::DemoSource;
pub use telemachus::{decode_snapshot, DatalinkQuery, Endpoint, TelemachusSource};
