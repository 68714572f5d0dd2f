//! Account data for the authenticated user.

use serde::{Deserialize, Serialize};

/// The signed-in user; empty strings denote "no authenticated user".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}
