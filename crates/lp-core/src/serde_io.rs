//! JSON and YAML helpers for configuration payloads.

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{ErrorInfo, LinkError};

fn config_error(code: &str, err: impl ToString) -> LinkError {
    LinkError::Config(ErrorInfo::new(code, err.to_string()))
}

/// Deserializes a value from a JSON string.
pub fn from_json_str<T: DeserializeOwned>(data: &str) -> Result<T, LinkError> {
    serde_json::from_str(data).map_err(|err| config_error("json-deserialize", err))
}

/// Serializes a value into pretty printed JSON.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String, LinkError> {
    serde_json::to_string_pretty(value).map_err(|err| config_error("json-serialize", err))
}

/// Deserializes a YAML payload into the requested type.
pub fn from_yaml_str<T: DeserializeOwned>(data: &str) -> Result<T, LinkError> {
    serde_yaml::from_str(data).map_err(|err| config_error("yaml-deserialize", err))
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, LinkError> {
    serde_yaml::to_string(value).map_err(|err| config_error("yaml-serialize", err))
}
