use serde::{Deserialize, Serialize};

// User record served by the lookup endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub lastname: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            lastname: lastname.into(),
        }
    }
}
