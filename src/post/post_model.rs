use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A blog post exactly as the client submitted it.
///
/// Only `title` and `content` are expected, but the record is schema-less:
/// every field is kept with its original value and key order, and nothing
/// is filled in for fields the client left out.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Post(Map<String, Value>);

impl Post {
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn content(&self) -> Option<&str> {
        self.0.get("content").and_then(Value::as_str)
    }
}
