use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::consts::EntityId;

/// A person record as stored in the collection.
///
/// No schema is applied: any JSON object is a person, fields keep the type and position they
/// were posted with. `id` and `name` only matter for lookups, and only when they are strings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(transparent)]
pub struct Person(pub Map<String, Value>);

impl Person {
    pub fn new(id: &str, name: &str, age: u64, gender: &str) -> Self {
        let mut fields = Map::new();

        fields.insert("id".to_string(), Value::from(id));
        fields.insert("name".to_string(), Value::from(name));
        fields.insert("age".to_string(), Value::from(age));
        fields.insert("gender".to_string(), Value::from(gender));

        Person(fields)
    }

    pub fn new_test() -> Self {
        Person::new("1", "Full Name", 30, "female")
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Strict comparison, a numeric `id` of 3 does not match the id "3"
    pub fn has_id(&self, id: &EntityId) -> bool {
        matches!(self.get("id"), Some(Value::String(value)) if *value == id.0)
    }

    /// Exact, case sensitive comparison
    pub fn has_name(&self, name: &str) -> bool {
        matches!(self.get("name"), Some(Value::String(value)) if value == name)
    }
}

impl From<Map<String, Value>> for Person {
    fn from(fields: Map<String, Value>) -> Self {
        Person(fields)
    }
}

/// Records the collection holds when the service starts
pub fn seed_people() -> Vec<Person> {
    vec![
        Person::new("1", "jeshaiah", 19, "male"),
        Person::new("2", "Chasya", 20, "female"),
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn person_from(payload: Value) -> Person {
        serde_json::from_value(payload).expect("payload should be an object")
    }

    #[test]
    fn serializes_fields_in_order() {
        let person = Person::new("1", "jeshaiah", 19, "male");

        assert_eq!(
            serde_json::to_string(&person).unwrap(),
            r#"{"id":"1","name":"jeshaiah","age":19,"gender":"male"}"#
        );
    }

    #[test]
    fn posted_object_is_kept_as_sent() {
        // Given payloads with odd types, nulls and unknown fields
        let payloads = [
            r#"{"id":3,"name":"Sam"}"#,
            r#"{"id":"3","age":"5"}"#,
            r#"{"id":"3","name":null}"#,
            r#"{"nickname":"sammy","tags":["a","b"],"age":5}"#,
            r#"{}"#,
        ];

        for payload in payloads {
            // When read as a person and written back out
            let person: Person = serde_json::from_str(payload).unwrap();

            // Then nothing is dropped, reordered or converted
            assert_eq!(serde_json::to_string(&person).unwrap(), payload);
        }
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(serde_json::from_value::<Person>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<Person>(json!("Sam")).is_err());
    }

    #[test]
    fn id_match_requires_a_string() {
        let id = EntityId::from("3");

        assert!(person_from(json!({ "id": "3" })).has_id(&id));
        assert!(!person_from(json!({ "id": 3 })).has_id(&id));
        assert!(!person_from(json!({ "id": null })).has_id(&id));
        assert!(!Person::default().has_id(&id));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let person = Person::new("1", "jeshaiah", 19, "male");

        assert!(person.has_name("jeshaiah"));
        assert!(!person.has_name("Jeshaiah"));
        assert!(!Person::default().has_name(""));
    }
}
