use crate::consts::*;
use super::error::{ErrorKind, RoomResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seconds per round.
    pub duration: u32,
    /// One more hint letter every this many seconds.
    pub reveal_secs: u32,
    /// Points to each side for a guessed round.
    pub award: u32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            duration: ROUND_SECS,
            reveal_secs: REVEAL_SECS,
            award: AWARD,
        }
    }

    pub fn validate(self) -> RoomResult<Self> {
        if self.duration == 0 {
            return Err(ErrorKind::InvalidConfig("duration must be at least one second"));
        }
        if self.reveal_secs == 0 {
            return Err(ErrorKind::InvalidConfig("reveal interval must be at least one second"));
        }
        Ok(self)
    }
}
