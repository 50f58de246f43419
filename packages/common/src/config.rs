use serde::Deserialize;

/// Connection settings for the wells backend.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL the resource paths are appended to. Default: "http://localhost:5096/api".
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. Default: 30.
    #[serde(default = "default_api_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:5096/api".into()
}
fn default_api_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_api_timeout_secs(),
        }
    }
}

/// Initial view settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    /// Site selected when the management view opens. Default: "Samaria".
    #[serde(default = "default_view_site")]
    pub default_site: String,
}

fn default_view_site() -> String {
    "Samaria".into()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_site: default_view_site(),
        }
    }
}
