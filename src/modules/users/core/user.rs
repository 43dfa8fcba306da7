use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record, keyed by its caller-supplied `id`.
///
/// Decoding only accepts a JSON object. Missing fields become empty strings
/// and unknown fields are ignored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct UserFields {
    id: String,
    name: String,
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let fields = UserFields::deserialize(Value::Object(object)).map_err(de::Error::custom)?;
        Ok(Self {
            id: fields.id,
            name: fields.name,
        })
    }
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Rebinds the record to `id`, discarding whatever id it carried.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self
        }
    }
}
