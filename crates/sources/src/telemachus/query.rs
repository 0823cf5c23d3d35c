//! Batched datalink request built from the field registry

use serde::{Deserialize, Serialize};
use telemachus_dash_core::constants::{DEFAULT_DATALINK_PATH, DEFAULT_HOST, DEFAULT_PORT};
use telemachus_dash_core::{registry, FieldSpec};

/// Where the telemetry service listens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    /// Datalink path, including the leading slash
    pub path: String,
}

impl Endpoint {
    /// `http://host:port/path`, without the query
    pub fn base_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_DATALINK_PATH.to_string(),
        }
    }
}

/// One `key=remotePath` pair per channel, plus `keymax=remoteMaxPath` for
/// channels with a capacity counterpart
///
/// Pairs are ordered by field key so the same registry always yields the
/// same request string. The service treats them as an unordered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatalinkQuery {
    pairs: Vec<(String, &'static str)>,
}

impl DatalinkQuery {
    pub fn from_fields(fields: &'static [FieldSpec]) -> Self {
        let mut sorted: Vec<&'static FieldSpec> = fields.iter().collect();
        sorted.sort_by_key(|f| f.key);

        let mut pairs = Vec::with_capacity(sorted.len() * 2);
        for field in sorted {
            pairs.push((field.key.to_string(), field.remote_path));
            if let Some(max_key) = field.max_key() {
                pairs.push((max_key, field.remote_max_path));
            }
        }
        Self { pairs }
    }

    /// Query for every registered channel
    pub fn from_registry() -> Self {
        Self::from_fields(registry::fields())
    }

    pub fn pairs(&self) -> &[(String, &'static str)] {
        &self.pairs
    }

    /// `k1=path1&k2=path2...`
    ///
    /// Remote paths go out verbatim; the service expects its bracketed
    /// locators (`r.resource[LqdOxygen]`) unescaped.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, path)| format!("{}={}", key, path))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full request URL for `endpoint`
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}?{}", endpoint.base_url(), self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use telemachus_dash_core::FieldType;

    static FIELDS: [FieldSpec; 2] = [
        FieldSpec {
            key: "Mono",
            remote_path: "r.resource[MonoPropellant]",
            remote_max_path: "r.resourceMax[MonoPropellant]",
            label: "Monopropellant",
            unit: "L",
            field_type: FieldType::Numerical,
        },
        FieldSpec {
            key: "Alt",
            remote_path: "v.altitude",
            remote_max_path: "",
            label: "Radar altitude",
            unit: "",
            field_type: FieldType::Numerical,
        },
    ];

    #[test]
    fn max_pairs_follow_their_field() {
        let query = DatalinkQuery::from_fields(&FIELDS);
        assert_eq!(
            query.to_query_string(),
            "Alt=v.altitude&Mono=r.resource[MonoPropellant]&Monomax=r.resourceMax[MonoPropellant]"
        );
    }

    #[test]
    fn registry_query_covers_every_channel() {
        let query = DatalinkQuery::from_registry();
        let fields = registry::fields();
        let with_max = fields.iter().filter(|f| f.has_capacity()).count();
        assert_eq!(query.pairs().len(), fields.len() + with_max);
        assert!(query.pairs().contains(&("T".to_string(), "v.missionTime")));
        assert!(query
            .pairs()
            .contains(&("Elecmax".to_string(), "r.resourceMax[ElectricCharge]")));
        assert!(!query.pairs().iter().any(|(k, _)| k == "Altmax"));
        assert_eq!(query, DatalinkQuery::from_registry());
    }

    #[test]
    fn url_uses_endpoint() {
        let endpoint = Endpoint {
            host: "10.0.0.5".to_string(),
            port: 8085,
            ..Endpoint::default()
        };
        let url = DatalinkQuery::from_fields(&FIELDS).url(&endpoint);
        assert!(url.starts_with("http://10.0.0.5:8085/telemachus/datalink?Alt=v.altitude&"));
        assert_eq!(Endpoint::default().base_url(), "http://localhost:80/telemachus/datalink");
    }
}
