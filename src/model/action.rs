use crate::{
    consts::consts::EntityId,
    database::table::row::UpdatePersonData,
};

use super::person::Person;

#[derive(Clone, Debug)]
pub enum Action {
    /// Returns every person, in insertion order
    List,
    /// Returns the first person with this exact name, if any
    FindByName(String),
    /// Appends the person and returns the whole collection
    Add(Person),
    /// Merges the update over the first person with this id and returns the merged person
    Update(EntityId, UpdatePersonData),
    /// Removes the first person with this id and returns the whole collection
    Remove(EntityId),
}

impl Action {
    pub fn is_mutation(&self) -> bool {
        match self {
            Action::Add(_) | Action::Remove(_) | Action::Update(_, _) => true,
            Action::List | Action::FindByName(_) => false,
        }
    }

    /// Short description used when logging requests, payloads are left out
    pub fn log_format(&self) -> String {
        match self {
            Action::List => "List".to_string(),
            Action::FindByName(name) => format!("FindByName [name: {}]", name),
            Action::Add(_) => "Add".to_string(),
            Action::Update(id, _) => format!("Update [id: {}]", id),
            Action::Remove(id) => format!("Remove [id: {}]", id),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActionResult {
    /// Used for database status messages
    SuccessStatus(String),
    Single(Person),
    GetSingle(Option<Person>),
    List(Vec<Person>),
}

impl ActionResult {
    pub fn single(self) -> Option<Person> {
        match self {
            ActionResult::Single(p) => Some(p),
            _ => None,
        }
    }

    /// Outer option is the result type check, inner option is the lookup itself
    pub fn get_single(self) -> Option<Option<Person>> {
        match self {
            ActionResult::GetSingle(p) => Some(p),
            _ => None,
        }
    }

    pub fn list(self) -> Option<Vec<Person>> {
        match self {
            ActionResult::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn success_status(self) -> Option<String> {
        match self {
            ActionResult::SuccessStatus(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_writes_are_mutations() {
        assert!(Action::Add(Person::new_test()).is_mutation());
        assert!(Action::Remove(EntityId::from("1")).is_mutation());
        assert!(Action::Update(EntityId::from("1"), UpdatePersonData::default()).is_mutation());
        assert!(!Action::List.is_mutation());
        assert!(!Action::FindByName("jeshaiah".to_string()).is_mutation());
    }

    #[test]
    fn accessors_check_the_result_type() {
        let person = Person::new_test();

        assert_eq!(
            ActionResult::Single(person.clone()).single(),
            Some(person.clone())
        );
        assert_eq!(ActionResult::List(vec![person.clone()]).single(), None);
        assert_eq!(ActionResult::GetSingle(None).get_single(), Some(None));
        assert_eq!(ActionResult::Single(person).list(), None);
    }
}
