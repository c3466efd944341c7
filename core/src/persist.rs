use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::*;

/// Encodes an engine or a whole session as an opaque text blob.
pub fn to_blob<T: Serialize>(value: &T) -> core::result::Result<String, PersistError> {
    Ok(serde_json::to_string(value)?)
}

/// Restores a value written by [`to_blob`]. Random state is reseeded from entropy.
pub fn from_blob<T: DeserializeOwned>(blob: &str) -> core::result::Result<T, PersistError> {
    Ok(serde_json::from_str(blob)?)
}
