use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unknown role `{0}`, expected `drawer` or `guesser`")]
    UnknownRole(String),
    #[error("`{0}` expects two integer coordinates")]
    BadPoint(String),
    #[error("`{0}` expects an argument")]
    MissingArgument(String),
}
