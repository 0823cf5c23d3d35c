//! Synthetic telemetry source for running the panel without a simulator
//!
//! Produces a fully-populated snapshot from elapsed time: a short
//! countdown, then a gravity turn with slowly oscillating attitude and
//! draining propellant.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::time::Instant;
use telemachus_dash_core::{DataSource, FetchError, FieldKey, SourceMetadata, TelemetrySnapshot};

/// Seconds of countdown before liftoff
const COUNTDOWN_SECS: f64 = 10.0;

/// Period of the attitude wobble
const WOBBLE_PERIOD_SECS: f64 = 8.0;

const KEROSENE_CAPACITY: f64 = 2_880.0;
const LOX_CAPACITY: f64 = 3_520.0;
const CHARGE_CAPACITY: f64 = 150.0;

/// Demo data source
pub struct DemoSource {
    metadata: SourceMetadata,
    start_time: Instant,
    rng: StdRng,
}

impl DemoSource {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic jitter, for tests
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            metadata: SourceMetadata {
                id: "demo".to_string(),
                name: "Demo".to_string(),
                description: "Synthetic launch profile for demonstration".to_string(),
            },
            start_time: Instant::now(),
            rng,
        }
    }

    /// Snapshot for a given number of seconds since the source started
    pub fn snapshot_at(&mut self, elapsed: f64) -> TelemetrySnapshot {
        let mission_time = elapsed - COUNTDOWN_SECS;
        let flight = mission_time.max(0.0);
        let wobble = (elapsed / WOBBLE_PERIOD_SECS * TAU).sin();
        let jitter = self.rng.gen_range(-0.5..0.5);

        let altitude = 5.0 * flight * flight;
        let surface_velocity = 10.0 * flight;
        let density = 1.225 * (-altitude / 5_600.0).exp();

        let mut s = TelemetrySnapshot::with_capacity(FieldKey::ALL.len() + 11);
        let mut set = |key: FieldKey, value: f64| s.insert(key.as_str(), value);

        set(FieldKey::MissionTime, mission_time);
        set(FieldKey::Stage, if flight > 60.0 { 1.0 } else { 0.0 });
        set(FieldKey::Throttle, if flight > 0.0 { 0.75 + 0.25 * wobble } else { 0.0 });
        set(FieldKey::Heading, 90.0 + 2.0 * wobble);
        set(FieldKey::Pitch, (90.0 - flight * 0.5).max(0.0));
        set(FieldKey::Roll, 5.0 * wobble);
        set(FieldKey::AngleToPrograde, (3.0 * wobble).abs());
        set(FieldKey::SurfaceVelocity, surface_velocity);
        set(FieldKey::OrbitalVelocity, 174.5 + surface_velocity);
        set(FieldKey::GeeForce, if flight > 0.0 { 1.4 + 0.1 * wobble } else { 1.0 });
        set(FieldKey::Altitude, altitude + jitter);
        set(FieldKey::AtmosphericDensity, density);
        set(
            FieldKey::DynamicPressure,
            0.5 * density * surface_velocity * surface_velocity / 1_000.0,
        );
        set(FieldKey::Apoapsis, altitude * 1.6);
        set(FieldKey::Periapsis, -600_000.0 + altitude * 0.8);
        set(FieldKey::TimeToApoapsis, 120.0 - flight % 120.0);
        set(FieldKey::TimeToPeriapsis, -(flight % 300.0));
        set(FieldKey::Inclination, 0.1 + 0.01 * wobble);
        set(FieldKey::Eccentricity, (1.0 - flight / 600.0).clamp(0.01, 1.0));

        let burned = (flight * 8.0).min(KEROSENE_CAPACITY);
        set(FieldKey::Kerosene, KEROSENE_CAPACITY - burned);
        set(FieldKey::LiquidOxygen, LOX_CAPACITY - burned * LOX_CAPACITY / KEROSENE_CAPACITY);
        set(FieldKey::ElectricCharge, (CHARGE_CAPACITY - flight * 0.1 + jitter).max(0.0));
        // Carried as a resource slot but not installed on this vessel
        set(FieldKey::MonoPropellant, -1.0);

        for (key, capacity) in [
            (FieldKey::Kerosene, KEROSENE_CAPACITY),
            (FieldKey::LiquidOxygen, LOX_CAPACITY),
            (FieldKey::ElectricCharge, CHARGE_CAPACITY),
        ] {
            if let Some(max_key) = key.spec().max_key() {
                s.insert(max_key, capacity);
            }
        }

        s.insert(FieldKey::Sas.as_str(), true);
        s.insert(FieldKey::Rcs.as_str(), flight > 60.0);
        s.insert(FieldKey::Lights.as_str(), false);
        s.insert(FieldKey::Brakes.as_str(), flight <= 0.0);
        s.insert(FieldKey::Gear.as_str(), flight < 5.0);
        s.insert(FieldKey::VesselName.as_str(), "Demo Launcher");

        s
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for DemoSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn poll(&mut self) -> Result<TelemetrySnapshot, FetchError> {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        Ok(self.snapshot_at(elapsed))
    }
}
