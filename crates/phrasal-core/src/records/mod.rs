//! Social-media records with a stable JSON contract.
//!
//! Every named field is always present in the serialized form (absent values
//! become `null`), and timestamps use the formats in [`timestamp`].

pub mod timestamp;
mod twitter;
mod youtube;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub use timestamp::Timestamp;
pub use twitter::{Tweet, TwitterUser};
pub use youtube::{
    YouTubeChannel, YouTubeComment, YouTubeCommentStats, YouTubeVideo, YouTubeVideoStats,
};

/// Key-value view over a record's named fields.
pub trait Record: Serialize + DeserializeOwned {
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::Serialization(serde::ser::Error::custom(format!(
                "record serialized to non-object: {other}"
            )))),
        }
    }

    /// Value of a single field, `None` if the record has no such key.
    fn get(&self, key: &str) -> Option<Value> {
        self.to_map().ok()?.remove(key)
    }

    fn from_map(map: Map<String, Value>) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
