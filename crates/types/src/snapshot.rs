//! Dynamically-typed telemetry values decoded from one poll cycle

use std::collections::HashMap;
use std::fmt;

/// A single decoded channel value
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl TelemetryValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TelemetryValue::Number(v) => Some(*v),
            TelemetryValue::Bool(_) | TelemetryValue::Text(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TelemetryValue::Bool(b) => Some(*b),
            TelemetryValue::Number(_) | TelemetryValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TelemetryValue::Text(s) => Some(s),
            TelemetryValue::Number(_) | TelemetryValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for TelemetryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryValue::Number(v) => fmt::Display::fmt(v, f),
            TelemetryValue::Bool(b) => fmt::Display::fmt(b, f),
            TelemetryValue::Text(s) => fmt::Display::fmt(s.as_str(), f),
        }
    }
}

impl From<f64> for TelemetryValue {
    fn from(v: f64) -> Self {
        TelemetryValue::Number(v)
    }
}

impl From<bool> for TelemetryValue {
    fn from(b: bool) -> Self {
        TelemetryValue::Bool(b)
    }
}

impl From<&str> for TelemetryValue {
    fn from(s: &str) -> Self {
        TelemetryValue::Text(s.to_string())
    }
}

/// Decoded values for one poll cycle, keyed by field key (and `key + "max"`
/// for capacity counterparts)
///
/// A missing key means the vessel does not expose that channel. Renderers
/// treat a value of the wrong variant exactly like a missing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    values: HashMap<String, TelemetryValue>,
}

impl TelemetrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TelemetryValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&TelemetryValue> {
        self.values.get(key)
    }

    /// Numeric value for `key`, `None` if absent or not a number
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(TelemetryValue::as_f64)
    }

    /// Boolean value for `key`, `None` if absent or not a boolean
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(TelemetryValue::as_bool)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(TelemetryValue::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TelemetryValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<TelemetryValue>> FromIterator<(K, V)> for TelemetrySnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = TelemetrySnapshot::new();
        for (k, v) in iter {
            snapshot.insert(k, v);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_skip_on_variant_mismatch() {
        let snap: TelemetrySnapshot = [
            ("Alt", TelemetryValue::Number(1200.0)),
            ("SAS", TelemetryValue::Bool(true)),
            ("Name", TelemetryValue::from("Kerbal X")),
        ]
        .into_iter()
        .collect();

        assert_eq!(snap.number("Alt"), Some(1200.0));
        assert_eq!(snap.boolean("Alt"), None);
        assert_eq!(snap.number("SAS"), None);
        assert_eq!(snap.boolean("SAS"), Some(true));
        assert_eq!(snap.text("Name"), Some("Kerbal X"));
        assert_eq!(snap.number("Pe"), None);
        assert_eq!(snap.len(), 3);
    }

    #[test]
    fn display_passes_raw_value_through() {
        assert_eq!(TelemetryValue::Bool(false).to_string(), "false");
        assert_eq!(TelemetryValue::Number(2.5).to_string(), "2.5");
        assert_eq!(format!("{:>6}", TelemetryValue::from("ab")), "    ab");
    }
}
