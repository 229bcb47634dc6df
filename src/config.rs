/// Match configuration parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Maximum number of rounds to play before stopping.
    pub max_rounds: u32,
    /// Strategy name for the White side.
    pub white_strategy: String,
    /// Strategy name for the Black side.
    pub black_strategy: String,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        AppConfig {
            max_rounds: std::env::var("DRAUGHTS_MAX_ROUNDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            white_strategy: std::env::var("DRAUGHTS_WHITE_STRATEGY")
                .unwrap_or_else(|_| "random".to_string()),
            black_strategy: std::env::var("DRAUGHTS_BLACK_STRATEGY")
                .unwrap_or_else(|_| "random".to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            max_rounds: 10,
            white_strategy: "random".to_string(),
            black_strategy: "random".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.white_strategy, "random");
        assert_eq!(config.black_strategy, "random");
    }

    #[test]
    fn from_env_defaults() {
        // Without setting env vars, should fall back to defaults
        let config = AppConfig::from_env();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.white_strategy, "random");
    }
}
