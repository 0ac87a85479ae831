use crate::catalog::SearchFilters;
use serde::Deserialize;

/// Query string of the keyword search, as sent by the page's form.
///
/// The tri-state selects submit an empty string for "any", so the flags are
/// taken as text and parsed leniently.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub auth: Option<String>,
    #[serde(default)]
    pub https: Option<String>,
    #[serde(default)]
    pub cors: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> String {
        self.q.clone().unwrap_or_default()
    }

    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            category: non_blank(&self.category),
            auth: non_blank(&self.auth),
            https: parse_flag(self.https.as_deref()),
            cors: parse_flag(self.cors.as_deref()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub query: String,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Some(true),
        "false" | "no" | "n" | "0" | "off" => Some(false),
        _ => None,
    }
}
