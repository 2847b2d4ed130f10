use serde::{Deserialize, Serialize};

/// Public shape of a dashboard search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDashboardResult {
    pub uri: String,
    pub name: String,
    pub group_name: String,
    #[serde(default)]
    pub group_url: Option<String>,
    #[serde(default)]
    pub cluster: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub last_successful_run_timestamp: Option<i64>,
}
