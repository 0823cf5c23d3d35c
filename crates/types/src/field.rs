//! Field metadata describing the telemetry channels the dashboard requests

use serde::Serialize;

/// Type of value a channel is expected to carry on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    /// Numeric reading (altitude, velocity, resource amount...)
    Numerical,
    /// On/off state (action groups)
    Boolean,
    /// Free text (vessel name)
    Text,
}

/// Immutable description of a single telemetry channel
///
/// Entries are compiled into the registry and never change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Short identifier used as the query key and snapshot key
    pub key: &'static str,
    /// Locator the remote service resolves to a live value
    pub remote_path: &'static str,
    /// Locator for the capacity counterpart, empty when the channel has none
    pub remote_max_path: &'static str,
    /// Display name
    pub label: &'static str,
    /// Display suffix, may be empty
    pub unit: &'static str,
    /// Expected wire type
    pub field_type: FieldType,
}

impl FieldSpec {
    /// Whether the channel has a known capacity counterpart
    pub fn has_capacity(&self) -> bool {
        !self.remote_max_path.is_empty()
    }

    /// Snapshot key holding the capacity value, if any
    pub fn max_key(&self) -> Option<String> {
        self.has_capacity().then(|| format!("{}max", self.key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(max: &'static str) -> FieldSpec {
        FieldSpec {
            key: "Mono",
            remote_path: "r.resource[MonoPropellant]",
            remote_max_path: max,
            label: "Monopropellant",
            unit: "L",
            field_type: FieldType::Numerical,
        }
    }

    #[test]
    fn max_key_only_with_capacity_path() {
        assert_eq!(
            spec("r.resourceMax[MonoPropellant]").max_key().as_deref(),
            Some("Monomax")
        );
        assert_eq!(spec("").max_key(), None);
        assert!(!spec("").has_capacity());
    }
}
