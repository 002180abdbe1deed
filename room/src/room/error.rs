use protocol::{Role, Stage};
use thiserror::Error;

/// Why an operation was turned into a no-op. Only ever logged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("role is already {0}")]
    RoleLocked(Role),
    #[error("no role chosen yet")]
    NoRole,
    #[error("only the drawer sets the word")]
    NotDrawer,
    #[error("word is empty")]
    EmptyWord,
    #[error("the drawer has not set a word yet")]
    NoWordYet,
    #[error("not allowed while {0}")]
    WrongStage(Stage),
    #[error("guess form is disabled")]
    FormDisabled,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type RoomResult<T> = Result<T, ErrorKind>;
