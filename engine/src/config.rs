use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Tunable knobs of the bot. The medium tier blends optimal search with
/// random play; the blend ratio is a product decision, so it lives in
/// config rather than in the code.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_medium_optimal_probability")]
    pub medium_optimal_probability: f64,
}

fn default_medium_optimal_probability() -> f64 {
    0.6
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            medium_optimal_probability: default_medium_optimal_probability(),
        }
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.medium_optimal_probability) {
            return Err(format!(
                "medium_optimal_probability must be within [0, 1], got {}",
                self.medium_optimal_probability
            ));
        }
        Ok(())
    }
}

impl BotConfig {
    /// Loads the config from a YAML file. A missing file yields the
    /// defaults; an unreadable or invalid file is an error.
    pub fn from_yaml_file(file_path: &str) -> Result<Self, String> {
        match std::fs::read_to_string(file_path) {
            Ok(content) => Self::from_yaml(&content),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(Self::default()),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }
}
