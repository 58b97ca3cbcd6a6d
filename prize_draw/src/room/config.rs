//! Room configuration models.

use serde::{Deserialize, Serialize};
use tokio::time::Duration;

use crate::game::constants::{DRAW_DELAY_MS, MAX_PARTICIPANTS, TOTAL_PRIZES};

/// Room configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Participant capacity.
    pub max_participants: usize,

    /// Prizes per game; also the value restored on reset.
    pub total_prizes: u32,

    /// Delay between a draw request and the winner selection.
    pub draw_delay_ms: u64,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            max_participants: MAX_PARTICIPANTS,
            total_prizes: TOTAL_PRIZES,
            draw_delay_ms: DRAW_DELAY_MS,
        }
    }
}

impl RoomConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_participants == 0 {
            return Err("Participant capacity must be greater than 0".to_string());
        }

        if self.total_prizes == 0 {
            return Err("Prize count must be greater than 0".to_string());
        }

        if self.draw_delay_ms == 0 {
            return Err("Draw delay must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Draw delay as a [`Duration`].
    pub fn draw_delay(&self) -> Duration {
        Duration::from_millis(self.draw_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RoomConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_participants, 15);
        assert_eq!(config.total_prizes, 15);
        assert_eq!(config.draw_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let config = RoomConfig {
            max_participants: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_prizes_is_rejected() {
        let config = RoomConfig {
            total_prizes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_delay_is_rejected() {
        let config = RoomConfig {
            draw_delay_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
