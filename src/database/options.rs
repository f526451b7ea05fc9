use crate::model::person::{seed_people, Person};

#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub seed: Vec<Person>,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DatabaseOptions {
    /// People the collection starts with, in order
    pub fn set_seed(mut self, seed: Vec<Person>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            seed: seed_people(),
        }
    }
}

#[cfg(test)]
impl DatabaseOptions {
    pub fn new_test() -> Self {
        DatabaseOptions::default().set_seed(vec![])
    }
}
