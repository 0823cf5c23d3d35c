//! Response body decoding

use serde_json::{Map, Value};
use telemachus_dash_core::{lookup, FetchError, TelemetrySnapshot, TelemetryValue};

/// Decode a datalink response body into a snapshot
///
/// The body must be a JSON object. Numbers become `Number`, booleans
/// `Bool` and strings `Text`; `null`, arrays and nested objects are left
/// out as if the channel were missing. Unregistered keys are kept.
pub fn decode_snapshot(body: &[u8]) -> Result<TelemetrySnapshot, FetchError> {
    let raw: Map<String, Value> = serde_json::from_slice(body)?;
    let mut snapshot = TelemetrySnapshot::with_capacity(raw.len());

    for (key, value) in raw {
        if !is_registered(&key) {
            log::trace!("Reply carries unregistered channel {}", key);
        }
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) => snapshot.insert(key, v),
                None => log::trace!("Dropping out-of-range number for {}", key),
            },
            Value::Bool(b) => snapshot.insert(key, b),
            Value::String(s) => snapshot.insert(key, TelemetryValue::Text(s)),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                log::trace!("Ignoring non-scalar value for {}", key)
            }
        }
    }

    Ok(snapshot)
}

/// Whether `key` is a registered channel or the capacity counterpart of one
fn is_registered(key: &str) -> bool {
    if lookup(key).is_some() {
        return true;
    }
    key.strip_suffix("max")
        .and_then(lookup)
        .is_some_and(|field| field.has_capacity())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numbers_booleans_and_text() {
        let body = br#"{"Alt": 1500, "Ecc": 0.25, "SAS": true, "Name": "Kerbal X"}"#;
        let snap = decode_snapshot(body).unwrap();
        assert_eq!(snap.number("Alt"), Some(1500.0));
        assert_eq!(snap.number("Ecc"), Some(0.25));
        assert_eq!(snap.boolean("SAS"), Some(true));
        assert_eq!(snap.text("Name"), Some("Kerbal X"));
        assert_eq!(snap.len(), 4);
    }

    #[test]
    fn null_and_nested_values_are_absent() {
        let snap = decode_snapshot(br#"{"Pe": null, "St": [1, 2], "Q": {"a": 1}, "G": -1}"#).unwrap();
        assert!(!snap.contains("Pe"));
        assert!(!snap.contains("St"));
        assert!(!snap.contains("Q"));
        assert_eq!(snap.number("G"), Some(-1.0));
    }

    #[test]
    fn registered_channels_and_capacities() {
        assert!(is_registered("Alt"));
        assert!(is_registered("LOXmax"));
        assert!(!is_registered("Altmax"));
        assert!(!is_registered("Warp"));

        let snap = decode_snapshot(br#"{"Warp": 4, "Alt": 10}"#).unwrap();
        assert_eq!(snap.number("Warp"), Some(4.0));
        assert_eq!(snap.len(), 2);
    }

    #[test]
    fn empty_object_is_an_empty_snapshot() {
        assert!(decode_snapshot(b"{}").unwrap().is_empty());
    }

    #[test]
    fn malformed_or_wrong_shape_is_a_decode_error() {
        for body in [&b"not json"[..], b"[1, 2, 3]", b"42", b"{\"Alt\": 1", b""] {
            let err = decode_snapshot(body).unwrap_err();
            assert!(matches!(err, FetchError::Decode(_)), "{:?}", body);
            assert!(!err.is_no_signal());
        }
    }
}
