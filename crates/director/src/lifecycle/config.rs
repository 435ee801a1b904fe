//! Runtime configuration for the [`DirectorSystem`](super::DirectorSystem).

use serde::Deserialize;
use tracing::warn;

/// Environment variable overriding [`SystemConfig::buffer_size`].
pub const BUFFER_SIZE_ENV: &str = "DIRECTOR_BUFFER_SIZE";

fn default_buffer_size() -> usize {
    32
}

/// Settings used when spawning the store actors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SystemConfig {
    /// Capacity of each store's request channel.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

impl SystemConfig {
    /// Defaults overridden by `DIRECTOR_BUFFER_SIZE` when it holds a positive integer.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(BUFFER_SIZE_ENV) {
            match raw.parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(value = %raw, "Ignoring invalid {}", BUFFER_SIZE_ENV),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_uses_defaults() {
        let config: SystemConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SystemConfig::default());

        let config: SystemConfig = serde_json::from_str(r#"{ "buffer_size": 8 }"#).unwrap();
        assert_eq!(config.buffer_size, 8);
    }
}
