use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use std::collections::BTreeMap;

/// Envelope shared by the index and greeting endpoints.
///
/// `endpoints` and `data` are left out of the JSON body when empty.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GenericResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub endpoints: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, Value>,
}

impl GenericResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, name: &str, path: &str) -> Self {
        self.endpoints.insert(name.to_string(), path.to_string());
        self
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    /// Healthy status stamped with the current local time, RFC 3339 at second precision.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn empty_maps_are_omitted() {
        let body = serde_json::to_value(GenericResponse::message("Hello, World!")).unwrap();
        assert_eq!(body, json!({ "message": "Hello, World!" }));
    }

    #[test]
    fn populated_maps_are_serialized() {
        let mut response = GenericResponse::message("hi").with_endpoint("health", "/health");
        response.data.insert("count".to_string(), json!(3));

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "hi",
                "endpoints": { "health": "/health" },
                "data": { "count": 3 }
            })
        );
    }

    #[test]
    fn endpoints_serialize_in_key_order() {
        let response = GenericResponse::message("x")
            .with_endpoint("hello", "/hello/{name}")
            .with_endpoint("health", "/health");

        let body = serde_json::to_string(&response).unwrap();
        assert_eq!(
            body,
            r#"{"message":"x","endpoints":{"health":"/health","hello":"/hello/{name}"}}"#
        );
    }

    #[test]
    fn healthy_timestamp_is_rfc3339_seconds() {
        let response = HealthResponse::healthy();
        assert_eq!(response.status, "healthy");

        let parsed = DateTime::parse_from_rfc3339(&response.timestamp);
        assert!(parsed.is_ok(), "timestamp should be RFC 3339: {}", response.timestamp);
        assert!(!response.timestamp.contains('.'), "no fractional seconds expected");
    }
}
