//! Login Configuration
//!
//! World layout and hand-off target, built once at startup and shared
//! read-only by every connection.

use std::net::{Ipv4Addr, SocketAddrV4};

use thiserror::Error;

/// Names shown in the world list, indexed by world id.
pub const DEFAULT_WORLD_NAMES: [&str; 15] = [
    "Scania", "Bera", "Broa", "Windia", "Khaini", "Bellocan", "Mardia", "Kradia", "Yellonde",
    "Demethos", "Elnido", "Kastia", "Judis", "Arkenia", "Plana",
];

/// World id reserved for the end-of-list marker.
pub const WORLD_LIST_END: u8 = 0xFF;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidVar {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },

    /// A value is outside its allowed range.
    #[error("{0}")]
    OutOfRange(String),
}

/// World/channel layout and channel-server address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    /// Number of worlds listed (ids `0..world_count`).
    pub world_count: u8,
    /// Channels per world (ids `0..channels_per_world`).
    pub channels_per_world: u8,
    /// Display names by world id; missing entries get a generated name.
    pub world_names: Vec<String>,
    /// Where selected characters are sent.
    pub channel_server: SocketAddrV4,
    /// Status byte sent with world info (0 = normal).
    pub world_status: u8,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            world_count: DEFAULT_WORLD_NAMES.len() as u8,
            channels_per_world: 20,
            world_names: DEFAULT_WORLD_NAMES.iter().map(|s| s.to_string()).collect(),
            channel_server: SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8686),
            world_status: 0,
        }
    }
}

impl LoginConfig {
    /// Create config from environment variables, falling back to defaults.
    ///
    /// - `LOGIN_WORLD_COUNT`
    /// - `LOGIN_CHANNELS_PER_WORLD`
    /// - `LOGIN_WORLD_NAMES` (comma separated)
    /// - `LOGIN_CHANNEL_SERVER` (`ip:port`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = parse_env::<u8>("LOGIN_WORLD_COUNT")? {
            config.world_count = v;
        }
        if let Some(v) = parse_env::<u8>("LOGIN_CHANNELS_PER_WORLD")? {
            config.channels_per_world = v;
        }
        if let Ok(names) = std::env::var("LOGIN_WORLD_NAMES") {
            config.world_names = names.split(',').map(|s| s.trim().to_string()).collect();
        }
        if let Some(v) = parse_env::<SocketAddrV4>("LOGIN_CHANNEL_SERVER")? {
            config.channel_server = v;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject layouts the protocol cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world_count == 0 || self.world_count == WORLD_LIST_END {
            return Err(ConfigError::OutOfRange(format!(
                "world_count must be in 1..=254, got {}",
                self.world_count
            )));
        }
        if self.channels_per_world == 0 {
            return Err(ConfigError::OutOfRange("channels_per_world must be at least 1".into()));
        }
        Ok(())
    }

    /// Whether `world_id` names a configured world.
    pub fn has_world(&self, world_id: u8) -> bool {
        world_id < self.world_count
    }

    /// Whether `channel_id` names a configured channel.
    pub fn has_channel(&self, channel_id: u8) -> bool {
        channel_id < self.channels_per_world
    }

    /// Display name of a world.
    pub fn world_name(&self, world_id: u8) -> String {
        self.world_names
            .get(world_id as usize)
            .filter(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("World {}", world_id))
    }
}

pub(crate) fn parse_env<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { var, value }),
        Err(_) => Ok(None),
    }
}
