use thiserror::Error;

use crate::core::types::{DoorId, RoomId};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid config value for `{field}`: {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("door {door:?} references out-of-range room {room:?}")]
    InvalidLayout { door: DoorId, room: RoomId },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
