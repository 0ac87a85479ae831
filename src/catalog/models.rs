use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One catalog entry as returned by `/catalog/search` or inside `/query` results.
///
/// Agent-generated SQL picks its own columns, so rows are read field by field:
/// a missing or mistyped column becomes `None` instead of failing the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiRecord {
    pub api_id: Option<i64>,
    pub api_name: Option<String>,
    pub category: Option<String>,
    pub auth_type: Option<String>,
    pub https_supported: Option<bool>,
    pub cors_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_tier: Option<String>,
}

impl ApiRecord {
    pub fn from_row(row: &Value) -> Self {
        ApiRecord {
            api_id: row.get("api_id").and_then(integer),
            api_name: row.get("api_name").and_then(text),
            // The agent joins the category table, which names the column `category_name`
            category: row
                .get("category")
                .and_then(text)
                .or_else(|| row.get("category_name").and_then(text)),
            auth_type: row.get("auth_type").and_then(text),
            https_supported: row.get("https_supported").and_then(flag),
            cors_supported: row.get("cors_supported").and_then(flag),
            description: row.get("description").and_then(text),
            base_url: row.get("base_url").and_then(text),
            pricing_tier: row.get("pricing_tier").and_then(text),
        }
    }
}

impl<'de> Deserialize<'de> for ApiRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let row = Value::deserialize(deserializer)?;
        Ok(ApiRecord::from_row(&row))
    }
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

// Optional filters accepted by `/catalog/search` next to `q`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors: Option<bool>,
}

impl SearchFilters {
    /// Query-string pairs for the filters that are actually set.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(category) = self.category.as_deref().filter(|c| !c.trim().is_empty()) {
            params.push(("category", category.to_string()));
        }
        if let Some(auth) = self.auth.as_deref().filter(|a| !a.trim().is_empty()) {
            params.push(("auth", auth.to_string()));
        }
        if let Some(https) = self.https {
            params.push(("https", https.to_string()));
        }
        if let Some(cors) = self.cors {
            params.push(("cors", cors.to_string()));
        }

        params
    }

    pub fn is_empty(&self) -> bool {
        self.to_params().is_empty()
    }
}

// Body of `POST /query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

// Response of `POST /query`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub sql: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<ApiRecord>>,
    #[serde(default)]
    pub clarification_needed: bool,
    #[serde(default)]
    pub clarification_question: Option<String>,
}

// Response of the backend's `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendHealth {
    #[serde(default)]
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_accepts_category_name_alias() {
        let record: ApiRecord = serde_json::from_value(json!({
            "api_id": 7,
            "api_name": "Cat Facts",
            "category_name": "Animals",
            "auth_type": "None",
            "https_supported": true,
            "cors_supported": null
        }))
        .unwrap();

        assert_eq!(record.api_id, Some(7));
        assert_eq!(record.category.as_deref(), Some("Animals"));
        assert_eq!(record.https_supported, Some(true));
        assert_eq!(record.cors_supported, None);
    }

    #[test]
    fn test_record_tolerates_missing_and_extra_columns() {
        let record: ApiRecord = serde_json::from_value(json!({
            "api_name": "WeatherAPI",
            "pricing_tier": "Free",
            "some_other_column": 42
        }))
        .unwrap();

        assert_eq!(record.api_name.as_deref(), Some("WeatherAPI"));
        assert_eq!(record.pricing_tier.as_deref(), Some("Free"));
        assert_eq!(record.api_id, None);
        assert_eq!(record.category, None);
    }

    #[test]
    fn test_record_prefers_category_over_category_name() {
        let record: ApiRecord = serde_json::from_value(json!({
            "api_id": 1,
            "api_name": "WeatherAPI",
            "category": "Weather",
            "category_name": "Climate"
        }))
        .unwrap();

        assert_eq!(record.category.as_deref(), Some("Weather"));
    }

    #[test]
    fn test_mistyped_columns_become_none() {
        let record: ApiRecord = serde_json::from_value(json!({
            "api_id": "abc",
            "api_name": ["not", "text"],
            "https_supported": "yes",
            "cors_supported": {"nested": true}
        }))
        .unwrap();

        assert_eq!(record.api_id, None);
        assert_eq!(record.api_name, None);
        assert_eq!(record.https_supported, Some(true));
        assert_eq!(record.cors_supported, None);
    }

    #[test]
    fn test_odd_row_does_not_fail_the_whole_response() {
        let response: QueryResponse = serde_json::from_value(json!({
            "sql": "SELECT a.*, c.category_name, c.category_name AS category FROM api_catalog.api a",
            "results": [
                {"api_id": 1, "api_name": "WeatherAPI", "category": "Weather", "category_name": "Weather"},
                {"api_id": "2", "api_name": "OpenMeteo", "https_supported": 1},
                "not even an object"
            ]
        }))
        .unwrap();

        let rows = response.results.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category.as_deref(), Some("Weather"));
        assert_eq!(rows[1].api_id, Some(2));
        assert_eq!(rows[1].https_supported, Some(true));
        assert_eq!(rows[2], ApiRecord::default());
    }

    #[test]
    fn test_query_response_defaults() {
        let response: QueryResponse = serde_json::from_value(json!({ "sql": "SELECT 1" })).unwrap();

        assert_eq!(response.sql.as_deref(), Some("SELECT 1"));
        assert!(response.results.is_none());
        assert!(response.error.is_none());
        assert!(!response.clarification_needed);
    }

    #[test]
    fn test_filters_only_emit_set_values() {
        let filters = SearchFilters {
            category: Some("Weather".to_string()),
            auth: Some("   ".to_string()),
            https: Some(true),
            cors: None,
        };

        assert_eq!(
            filters.to_params(),
            vec![("category", "Weather".to_string()), ("https", "true".to_string())]
        );
        assert!(SearchFilters::default().is_empty());
    }
}
