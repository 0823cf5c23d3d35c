//! Shared constants for the dashboard

use std::time::Duration;

/// Delay between the end of one poll cycle and the start of the next
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Upper bound on a single datalink request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(2000);

/// Default datalink endpoint
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_DATALINK_PATH: &str = "/telemachus/datalink";

/// Width of the right-aligned label column
pub const LABEL_WIDTH: usize = 20;

/// Number of cells in a resource bar
pub const BAR_WIDTH: usize = 40;

/// Resource amount reported for a resource the vessel does not carry
pub const RESOURCE_NOT_INSTALLED: f64 = -1.0;

/// Distance scaling thresholds (meters)
pub const METERS_PER_KM: f64 = 1_000.0;
pub const METERS_PER_MM: f64 = 1_000_000.0;
