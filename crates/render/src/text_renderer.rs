//! Per-kind line renderers
//!
//! Each renderer reads its channel(s) out of a snapshot and writes one
//! fixed-width line. A missing channel, or one holding the wrong kind of
//! value, writes nothing.

use crate::bar_display::render_bar;
use std::fmt::{self, Write};
use telemachus_dash_core::constants::{METERS_PER_KM, METERS_PER_MM};
use telemachus_dash_core::{FieldKey, TelemetrySnapshot, LABEL_WIDTH, RESOURCE_NOT_INSTALLED};

/// Label used for the heading/pitch/roll line
pub const ORIENTATION_LABEL: &str = "h p r";

/// Days, hours, minutes and seconds shown by the duration renderer
///
/// Hours wrap at 60 and days wrap at 24, so neither field grows past two
/// digits on long missions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockParts {
    pub negative: bool,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl ClockParts {
    pub fn from_seconds(value: f64) -> Self {
        let negative = value < 0.0;
        let v = value.abs();
        Self {
            negative,
            seconds: (v % 60.0) as i64,
            minutes: ((v / 60.0) % 60.0) as i64,
            hours: ((v / 60.0 / 60.0) % 60.0) as i64,
            days: ((v / 60.0 / 60.0 / 24.0) % 24.0) as i64,
        }
    }

    /// `T+` for elapsed time, `T-` for a countdown
    pub fn prefix(&self) -> &'static str {
        if self.negative {
            "T-"
        } else {
            "T+"
        }
    }
}

impl fmt::Display for ClockParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}d {}h {:02}m {:02}s",
            self.prefix(),
            self.days,
            self.hours,
            self.minutes,
            self.seconds
        )
    }
}

/// Scale a distance in meters to m, km or Mm, keeping the sign
pub fn scale_distance(meters: f64) -> (f64, &'static str) {
    if meters.abs() > METERS_PER_MM {
        (meters / METERS_PER_MM, "Mm")
    } else if meters.abs() > METERS_PER_KM {
        (meters / METERS_PER_KM, "km")
    } else {
        (meters, "m")
    }
}

/// Degrees with a space-or-minus sign column, zero padded: `" 045.50"`
///
/// The sign follows the sign bit, so `-0.0` shows as `-000.00`.
fn signed_degrees(value: f64) -> String {
    let sign = if value.is_sign_negative() { '-' } else { ' ' };
    format!("{}{:06.2}", sign, value.abs())
}

fn label_line<W: Write>(out: &mut W, label: &str, value: &str, unit: &str) -> fmt::Result {
    if unit.is_empty() {
        writeln!(out, "{:>width$} {}", label, value, width = LABEL_WIDTH)
    } else {
        writeln!(out, "{:>width$} {} {}", label, value, unit, width = LABEL_WIDTH)
    }
}

/// Mission-clock style duration, e.g. `T- 0d 0h 02m 05s`
pub fn render_duration<W: Write>(
    out: &mut W,
    snapshot: &TelemetrySnapshot,
    key: FieldKey,
) -> fmt::Result {
    let Some(seconds) = snapshot.number(key.as_str()) else {
        return Ok(());
    };
    writeln!(
        out,
        "{:>width$}  {}",
        key.label(),
        ClockParts::from_seconds(seconds),
        width = LABEL_WIDTH
    )
}

/// Label, two-decimal value and unit
///
/// Only absence skips the line. A boolean or text value is passed through
/// as-is in the value column.
pub fn render_scalar<W: Write>(
    out: &mut W,
    snapshot: &TelemetrySnapshot,
    key: FieldKey,
) -> fmt::Result {
    let Some(value) = snapshot.get(key.as_str()) else {
        return Ok(());
    };
    let column = match value.as_f64() {
        Some(v) => format!("{:>10.2}", v),
        None => format!("{:>10}", value),
    };
    label_line(out, key.label(), &column, key.unit())
}

/// Distance auto-scaled to m, km or Mm
pub fn render_distance<W: Write>(
    out: &mut W,
    snapshot: &TelemetrySnapshot,
    key: FieldKey,
) -> fmt::Result {
    let Some(meters) = snapshot.number(key.as_str()) else {
        return Ok(());
    };
    let (value, unit) = scale_distance(meters);
    label_line(out, key.label(), &format!("{:>10.2}", value), unit)
}

/// A 0..1 fraction shown as a truncated whole percentage
pub fn render_percent<W: Write>(
    out: &mut W,
    snapshot: &TelemetrySnapshot,
    key: FieldKey,
) -> fmt::Result {
    let Some(fraction) = snapshot.number(key.as_str()) else {
        return Ok(());
    };
    writeln!(
        out,
        "{:>width$} {}%",
        key.label(),
        (fraction * 100.0) as i64,
        width = LABEL_WIDTH
    )
}

/// Resource amount, unit, fill percentage and a bar
///
/// Capacity comes from the channel's `max` counterpart when it has one,
/// and defaults to 1.0 otherwise. An amount of exactly -1 means the
/// resource is not installed and suppresses the line.
pub fn render_resource<W: Write>(
    out: &mut W,
    snapshot: &TelemetrySnapshot,
    key: FieldKey,
) -> fmt::Result {
    let Some(value) = snapshot.number(key.as_str()) else {
        return Ok(());
    };
    if value == RESOURCE_NOT_INSTALLED {
        return Ok(());
    }
    let max = resource_capacity(snapshot, key);
    write!(
        out,
        "{:>width$} {:>10.2} {:>3}  {:>6.2}%  ",
        key.label(),
        value,
        key.unit(),
        100.0 * (value / max),
        width = LABEL_WIDTH
    )?;
    render_bar(out, value, max)?;
    out.write_char('\n')
}

/// Capacity used for a resource's percentage and bar
pub fn resource_capacity(snapshot: &TelemetrySnapshot, key: FieldKey) -> f64 {
    key.spec()
        .max_key()
        .and_then(|max_key| snapshot.number(&max_key))
        .unwrap_or(1.0)
}

/// `[LABEL]` when on, ` LABEL ` when off, nothing when unknown
///
/// Toggles share one line, so no newline is written.
pub fn render_toggle<W: Write>(
    out: &mut W,
    snapshot: &TelemetrySnapshot,
    key: FieldKey,
) -> fmt::Result {
    match snapshot.boolean(key.as_str()) {
        Some(true) => write!(out, "[{}]", key.label()),
        Some(false) => write!(out, " {} ", key.label()),
        None => Ok(()),
    }
}

/// Heading/pitch/roll line followed by the angle to prograde
///
/// All four channels must be numeric, otherwise the whole group is
/// skipped.
pub fn render_orientation<W: Write>(out: &mut W, snapshot: &TelemetrySnapshot) -> fmt::Result {
    let reading = (
        snapshot.number(FieldKey::Heading.as_str()),
        snapshot.number(FieldKey::Pitch.as_str()),
        snapshot.number(FieldKey::Roll.as_str()),
        snapshot.number(FieldKey::AngleToPrograde.as_str()),
    );
    let (Some(heading), Some(pitch), Some(roll), Some(to_prograde)) = reading else {
        return Ok(());
    };
    writeln!(
        out,
        "{:>width$} {}° {}° {}°",
        ORIENTATION_LABEL,
        signed_degrees(heading),
        signed_degrees(pitch),
        signed_degrees(roll),
        width = LABEL_WIDTH
    )?;
    writeln!(
        out,
        "{:>width$} {}°",
        FieldKey::AngleToPrograde.label(),
        signed_degrees(to_prograde),
        width = LABEL_WIDTH
    )
}
