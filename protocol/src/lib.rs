pub mod request;
pub mod response;
pub mod error;
pub mod types;

pub use response::*;
pub use request::*;
pub use types::*;
pub use error::ParseError;

use serde::{Serialize, de::DeserializeOwned};

/// Every message crossing the host surface can travel as one line of JSON.
pub trait JsonMessage: Serialize + DeserializeOwned {
    fn from_json(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(line)
    }

    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }
}
