use serde::{Deserialize, Serialize};

/// A namespace that owns repositories, a user or an organization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
}
