//! Router options loadable from configuration files.

use serde::{Deserialize, Serialize};

/// Routing options as they appear in configuration.
///
/// ```json
/// { "channels": ["audit", "billing"], "resolution_required": true }
/// ```
///
/// Every field is optional. Apply with
/// [`RouterBuilder::from_config`](crate::RouterBuilder::from_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Static recipient list; when non-empty, routes every message to these names.
    pub channels: Vec<String>,
    /// Fail routing calls that resolve no channels.
    pub resolution_required: bool,
    /// Log send failures instead of returning them.
    pub ignore_send_failures: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid router config: {0}")]
    Json(#[from] serde_json::Error),
}

impl RouterConfig {
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }
}
