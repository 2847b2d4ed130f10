use serde::{Deserialize, Serialize};

/// Well-known name of the table search index. Filter requests that do not
/// name an index are routed here, on both the table and dashboard resources.
pub const TABLE_INDEX: &str = "table";

/// Public shape of a table search result.
///
/// Deserializing a raw backend document through this type is what applies the
/// field-selection contract: backend-internal fields are dropped, and only
/// the fields below reach the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTableResult {
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
    pub cluster: String,
    pub database: String,
    pub schema: String,
    #[serde(default)]
    pub column_names: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub last_updated_timestamp: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drops_backend_internal_fields() {
        let raw = json!({
            "name": "fact_rides",
            "key": "gold://cluster.core/fact_rides",
            "cluster": "cluster",
            "database": "gold",
            "schema": "core",
            "column_names": ["ride_id", "city"],
            "total_usage": 9000,
            "es_score": 1.25
        });

        let result: SearchTableResult = serde_json::from_value(raw).unwrap();
        let dumped = serde_json::to_value(&result).unwrap();

        assert_eq!(dumped["name"], "fact_rides");
        assert_eq!(dumped["column_names"], json!(["ride_id", "city"]));
        assert!(dumped.get("total_usage").is_none());
        assert!(dumped.get("es_score").is_none());
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let raw = json!({
            "name": "dim_users",
            "key": "gold://cluster.core/dim_users",
            "cluster": "cluster",
            "database": "gold",
            "schema": "core"
        });

        let result: SearchTableResult = serde_json::from_value(raw).unwrap();
        assert!(result.description.is_none());
        assert!(result.tags.is_empty());
        assert!(result.badges.is_empty());
        assert!(result.last_updated_timestamp.is_none());
    }
}
