use std::fmt;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
/// Id taken from a request path, compared against the `id` field of stored records
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub String);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId(value.to_string())
    }
}

// Values
pub const DEFAULT_PORT: u16 = 3000;

pub const GREETING: &str = "I am responding to your HTTP GET request on the / path";

/// How long a caller waits for the database thread before giving up
pub const DATABASE_TIMEOUT_SECS: u64 = 2;
