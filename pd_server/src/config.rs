//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated
//! configuration.

use prize_draw::RoomConfig;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Complete server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address.
    pub bind: SocketAddr,
    /// Directory the presentation layer is served from.
    pub static_dir: PathBuf,
    /// Room configuration.
    pub room: RoomConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `static_dir_override` - Optional static directory override (from CLI args)
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        static_dir_override: Option<PathBuf>,
    ) -> Self {
        let bind = bind_override
            .or_else(|| {
                std::env::var("SERVER_BIND")
                    .ok()
                    .and_then(|s| s.parse().ok())
            })
            .unwrap_or_else(|| {
                "127.0.0.1:3000"
                    .parse()
                    .expect("Default bind address is valid")
            });

        let static_dir = static_dir_override
            .or_else(|| std::env::var("STATIC_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("dist"));

        let room_defaults = RoomConfig::default();
        let room = RoomConfig {
            max_participants: parse_env_or("MAX_PARTICIPANTS", room_defaults.max_participants),
            total_prizes: parse_env_or("TOTAL_PRIZES", room_defaults.total_prizes),
            draw_delay_ms: parse_env_or("DRAW_DELAY_MS", room_defaults.draw_delay_ms),
        };

        ServerConfig {
            bind,
            static_dir,
            room,
        }
    }

    /// Validate configuration after loading.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room.max_participants == 0 {
            return Err(ConfigError::Invalid {
                var: "MAX_PARTICIPANTS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.room.total_prizes == 0 {
            return Err(ConfigError::Invalid {
                var: "TOTAL_PRIZES".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.room.draw_delay_ms == 0 {
            return Err(ConfigError::Invalid {
                var: "DRAW_DELAY_MS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback.
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_room_defaults() {
        let config = ServerConfig {
            bind: "127.0.0.1:3000".parse().unwrap(),
            static_dir: PathBuf::from("dist"),
            room: RoomConfig::default(),
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.room.max_participants, 15);
        assert_eq!(config.room.total_prizes, 15);
        assert_eq!(config.room.draw_delay_ms, 2000);
    }

    #[test]
    fn test_validation_rejects_zero_capacity() {
        let config = ServerConfig {
            bind: "127.0.0.1:3000".parse().unwrap(),
            static_dir: PathBuf::from("dist"),
            room: RoomConfig {
                max_participants: 0,
                ..Default::default()
            },
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("MAX_PARTICIPANTS"));
    }

    #[test]
    fn test_validation_rejects_zero_draw_delay() {
        let config = ServerConfig {
            bind: "127.0.0.1:3000".parse().unwrap(),
            static_dir: PathBuf::from("dist"),
            room: RoomConfig {
                draw_delay_ms: 0,
                ..Default::default()
            },
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("DRAW_DELAY_MS"));
    }
}
