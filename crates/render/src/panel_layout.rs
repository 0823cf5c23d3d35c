//! Fixed instrument panel layout
//!
//! The panel is a declarative list of rows. Row order and the blank
//! separators between groups are part of the output format: mission
//! clock, status flags, flight state, orbit, then propellant.

use crate::text_renderer::{
    render_distance, render_duration, render_orientation, render_percent, render_resource,
    render_scalar, render_toggle,
};
use std::fmt::{self, Write};
use telemachus_dash_core::{FieldKey, TelemetrySnapshot, LABEL_WIDTH};

/// Notice shown in place of the panel when the service cannot be reached
pub const NO_SIGNAL: &str = "no signal";

/// One row of the panel and the renderer that draws it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRow {
    Duration(FieldKey),
    Scalar(FieldKey),
    Distance(FieldKey),
    Percent(FieldKey),
    Resource(FieldKey),
    /// Indented line of on/off flags
    Toggles(&'static [FieldKey]),
    /// Heading, pitch, roll and angle to prograde
    Orientation,
    /// Group separator
    Blank,
}

const STATUS_FLAGS: &[FieldKey] = &[
    FieldKey::Sas,
    FieldKey::Rcs,
    FieldKey::Lights,
    FieldKey::Brakes,
    FieldKey::Gear,
];

/// Row order of the instrument panel
pub const PANEL_LAYOUT: &[PanelRow] = &[
    PanelRow::Duration(FieldKey::MissionTime),
    PanelRow::Blank,
    PanelRow::Scalar(FieldKey::Stage),
    PanelRow::Toggles(STATUS_FLAGS),
    PanelRow::Percent(FieldKey::Throttle),
    PanelRow::Orientation,
    PanelRow::Scalar(FieldKey::SurfaceVelocity),
    PanelRow::Scalar(FieldKey::OrbitalVelocity),
    PanelRow::Scalar(FieldKey::GeeForce),
    PanelRow::Distance(FieldKey::Altitude),
    PanelRow::Scalar(FieldKey::AtmosphericDensity),
    PanelRow::Scalar(FieldKey::DynamicPressure),
    PanelRow::Blank,
    PanelRow::Distance(FieldKey::Apoapsis),
    PanelRow::Distance(FieldKey::Periapsis),
    PanelRow::Duration(FieldKey::TimeToApoapsis),
    PanelRow::Duration(FieldKey::TimeToPeriapsis),
    PanelRow::Scalar(FieldKey::Inclination),
    PanelRow::Scalar(FieldKey::Eccentricity),
    PanelRow::Blank,
    PanelRow::Resource(FieldKey::ElectricCharge),
    PanelRow::Resource(FieldKey::Kerosene),
    PanelRow::Resource(FieldKey::LiquidOxygen),
    PanelRow::Resource(FieldKey::Hydrazine),
    PanelRow::Resource(FieldKey::Aerozine50),
    PanelRow::Resource(FieldKey::Nto),
    PanelRow::Resource(FieldKey::Mmh),
    PanelRow::Resource(FieldKey::Udmh),
    PanelRow::Resource(FieldKey::XenonGas),
    PanelRow::Resource(FieldKey::MonoPropellant),
    PanelRow::Resource(FieldKey::SolidFuel),
];

impl PanelRow {
    pub fn render<W: Write>(&self, out: &mut W, snapshot: &TelemetrySnapshot) -> fmt::Result {
        match *self {
            PanelRow::Duration(key) => render_duration(out, snapshot, key),
            PanelRow::Scalar(key) => render_scalar(out, snapshot, key),
            PanelRow::Distance(key) => render_distance(out, snapshot, key),
            PanelRow::Percent(key) => render_percent(out, snapshot, key),
            PanelRow::Resource(key) => render_resource(out, snapshot, key),
            PanelRow::Toggles(keys) => {
                write!(out, "{:width$}", "", width = LABEL_WIDTH)?;
                for &key in keys {
                    render_toggle(out, snapshot, key)?;
                }
                out.write_char('\n')
            }
            PanelRow::Orientation => render_orientation(out, snapshot),
            PanelRow::Blank => out.write_char('\n'),
        }
    }
}

/// Render the whole panel for one snapshot
pub fn render_panel<W: Write>(out: &mut W, snapshot: &TelemetrySnapshot) -> fmt::Result {
    for row in PANEL_LAYOUT {
        row.render(out, snapshot)?;
    }
    Ok(())
}

/// Render the whole panel into a new frame
pub fn panel_frame(snapshot: &TelemetrySnapshot) -> Result<String, fmt::Error> {
    let mut frame = String::with_capacity(2048);
    render_panel(&mut frame, snapshot)?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use telemachus_dash_core::TelemetryValue;

    fn full_snapshot() -> TelemetrySnapshot {
        let mut s = TelemetrySnapshot::new();
        s.insert("T", 3725.0);
        s.insert("St", 2.0);
        for key in ["SAS", "LGT"] {
            s.insert(key, true);
        }
        for key in ["RCS", "BRK", "GEAR"] {
            s.insert(key, false);
        }
        s.insert("Throt", 1.0);
        s.insert("H", 90.0);
        s.insert("P", 45.0);
        s.insert("R", 0.0);
        s.insert("ToPro", 1.5);
        s.insert("Vel", 250.0);
        s.insert("OVel", 2200.0);
        s.insert("G", 1.2);
        s.insert("Alt", 15000.0);
        s.insert("Atm", 0.3);
        s.insert("Q", 12.5);
        s.insert("Ap", 80000.0);
        s.insert("Pe", -500000.0);
        s.insert("TTAp", 60.0);
        s.insert("TTPe", -30.0);
        s.insert("Incl", 0.1);
        s.insert("Ecc", 0.9);
        for key in [
            "Elec", "Kero", "LOX", "Hydra", "Aero", "NTO", "MMH", "UDMH", "Xen", "Mono", "Solid",
        ] {
            s.insert(key, 10.0);
            s.insert(format!("{}max", key), 20.0);
        }
        s
    }

    #[test]
    fn full_panel_order_and_separators() {
        let frame = panel_frame(&full_snapshot()).unwrap();
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines.len(), 32);
        assert!(lines[0].trim_start().starts_with("Time  T+ 0d 1h 02m 05s"));
        assert_eq!(lines[1], "");
        assert!(lines[2].trim_start().starts_with("Stage"));
        assert_eq!(lines[3], format!("{}[SAS] RCS [LIGHT] BRK  GEAR ", " ".repeat(20)));
        assert!(lines[4].trim_start().starts_with("Throttle 100%"));
        assert!(lines[5].trim_start().starts_with("h p r"));
        assert!(lines[6].trim_start().starts_with("Ang to prograde"));
        assert!(lines[10].trim_start().starts_with("Radar altitude"));
        assert!(lines[10].ends_with("15.00 km"));
        assert!(lines[12].trim_start().starts_with("Q"));
        assert_eq!(lines[13], "");
        assert!(lines[14].trim_start().starts_with("Ap"));
        assert!(lines[15].ends_with("-500.00 km"));
        assert!(lines[17].contains("Time to Pe  T- "));
        assert!(lines[19].trim_start().starts_with("Eccentricity"));
        assert_eq!(lines[20], "");
        assert!(lines[21].trim_start().starts_with("Electric charge"));
        assert!(lines[31].trim_start().starts_with("Solid fuel"));
    }

    #[test]
    fn empty_snapshot_keeps_only_structure() {
        let frame = panel_frame(&TelemetrySnapshot::new()).unwrap();
        assert_eq!(frame, format!("\n{}\n\n\n", " ".repeat(20)));
    }

    #[test]
    fn missing_channels_drop_single_lines() {
        let mut s = full_snapshot();
        s.insert("Mono", -1.0);
        s.insert("H", TelemetryValue::Bool(true));
        let frame = panel_frame(&s).unwrap();
        assert!(!frame.contains("Monopropellant"));
        assert!(!frame.contains("h p r"));
        assert!(!frame.contains("Ang to prograde"));
        assert!(frame.contains("Solid fuel"));
        assert_eq!(frame.lines().count(), 29);
    }
}
