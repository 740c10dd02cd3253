//! Property search configuration.

use serde::{Deserialize, Serialize};

/// Settings that shape composed property-search queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Whether the city criterion matches case-insensitively (`ILIKE`
    /// instead of `LIKE`).
    #[serde(default = "default_true")]
    pub case_insensitive_city: bool,
    /// Result limit applied when the caller does not supply one.
    #[serde(default = "default_limit")]
    pub default_limit: i64,
    /// Hard upper bound on the result limit.
    #[serde(default = "default_max_limit")]
    pub max_limit: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_insensitive_city: true,
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_limit() -> i64 {
    10
}

fn default_max_limit() -> i64 {
    100
}
