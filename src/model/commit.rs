use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One commit as the backend reports it: the first line of the message, the
/// rest of the message (empty when the message has no body), and the id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Commit {
    pub message_header: String,
    pub message_body: String,
    pub commit_id: String,
}

// Hash on the commit_id field so we can quickly look up
impl PartialEq for Commit {
    fn eq(&self, other: &Commit) -> bool {
        self.commit_id == other.commit_id
    }
}
impl Eq for Commit {}
impl Hash for Commit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.commit_id.hash(state);
    }
}
