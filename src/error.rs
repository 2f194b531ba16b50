use thiserror::Error;

use crate::address::AddressField;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("address not found in address book")]
    NotFound,

    #[error("cannot delete `{0}` from an address")]
    Immutable(AddressField),

    #[error("invalid value for `{key}`: {message}")]
    InvalidConfig { key: &'static str, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
