use serde::Deserialize;
use serde_json::{Map, Value};

use crate::model::person::Person;

/// Partial update payload, any JSON object
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct UpdatePersonData(pub Map<String, Value>);

impl From<Map<String, Value>> for UpdatePersonData {
    fn from(fields: Map<String, Value>) -> Self {
        UpdatePersonData(fields)
    }
}

/// Merges the update over `previous`
///
/// Fields in the update win, `null` included. Existing fields keep their position, new ones are
/// appended after them.
pub fn apply_update(previous: &Person, update: UpdatePersonData) -> Person {
    let mut current = previous.clone();

    for (key, value) in update.0 {
        current.0.insert(key, value);
    }

    current
}
