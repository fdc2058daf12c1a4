//! Game configuration.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rule switches for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Also refuse castling through an attacked transit square. Off by
    /// default: only "not currently in check" is required, and the landing
    /// square is covered by the ordinary legality probe.
    pub strict_castling: bool,
}

impl GameConfig {
    /// Configuration with every optional rule enforced
    #[must_use]
    pub const fn strict() -> Self {
        GameConfig {
            strict_castling: true,
        }
    }

    /// Set an option by name, e.g. `("strict castling", "on")`.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let normalized = name.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "strict castling" => {
                self.strict_castling = parse_switch(value).ok_or_else(|| {
                    ConfigError::InvalidValue {
                        name: name.to_string(),
                        value: value.to_string(),
                    }
                })?;
                Ok(())
            }
            _ => Err(ConfigError::UnknownOption {
                name: name.to_string(),
            }),
        }
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Error type for option updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
