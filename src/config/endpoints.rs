use serde::{Deserialize, Serialize};

/// Endpoints of the ratings API. Paths containing `{player}` are templates
/// expanded per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub summary_path: String,
    pub rating_path: String,
    pub tiers_path: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.rallyscore.app".to_string(),
            summary_path: "/v1/players/{player}/performance-summary".to_string(),
            rating_path: "/v1/players/{player}/rating".to_string(),
            tiers_path: "/v1/tiers".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl ApiConfig {
    pub fn summary_url(&self, player_id: &str) -> String {
        self.expand(&self.summary_path, player_id)
    }

    pub fn rating_url(&self, player_id: &str) -> String {
        self.expand(&self.rating_path, player_id)
    }

    pub fn tiers_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.tiers_path)
    }

    fn expand(&self, path: &str, player_id: &str) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            path.replace("{player}", player_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_player_template() {
        let api = ApiConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..ApiConfig::default()
        };

        assert_eq!(
            api.summary_url("p-42"),
            "http://localhost:9000/v1/players/p-42/performance-summary"
        );
        assert_eq!(api.tiers_url(), "http://localhost:9000/v1/tiers");
    }
}
