use thiserror::Error;

use crate::{
    consts::consts::EntityId,
    model::{
        action::{Action, ActionResult},
        person::Person,
    },
};

use super::row::apply_update;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplyErrors {
    // CRUD - UPDATE
    #[error("Cannot update, record does not exist: {0}")]
    CannotUpdateDoesNotExist(EntityId),

    // CRUD - DELETE
    #[error("Cannot delete, record does not exist: {0}")]
    CannotDeleteDoesNotExist(EntityId),
}

/// The collection, people are kept in insertion order
///
/// Nothing is unique: ids and names may repeat, lookups always resolve to the first match.
#[derive(Debug, Default)]
pub struct PersonTable {
    pub people: Vec<Person>,
}

impl PersonTable {
    pub fn new() -> Self {
        Self { people: Vec::new() }
    }

    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn position_by_id(&self, id: &EntityId) -> Option<usize> {
        self.people.iter().position(|person| person.has_id(id))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|person| person.has_name(name))
    }

    pub fn apply(&mut self, action: Action) -> Result<ActionResult, ApplyErrors> {
        let action_result = match action {
            Action::List => ActionResult::List(self.people.clone()),
            Action::FindByName(name) => ActionResult::GetSingle(self.find_by_name(&name).cloned()),
            Action::Add(person) => {
                // Stored as sent, no id generation or duplicate check
                self.people.push(person);

                ActionResult::List(self.people.clone())
            }
            Action::Update(id, update) => {
                let index = self
                    .position_by_id(&id)
                    .ok_or(ApplyErrors::CannotUpdateDoesNotExist(id))?;

                let current = apply_update(&self.people[index], update);

                self.people[index] = current.clone();

                ActionResult::Single(current)
            }
            Action::Remove(id) => {
                let index = self
                    .position_by_id(&id)
                    .ok_or(ApplyErrors::CannotDeleteDoesNotExist(id))?;

                self.people.remove(index);

                ActionResult::List(self.people.clone())
            }
        };

        Ok(action_result)
    }
}
