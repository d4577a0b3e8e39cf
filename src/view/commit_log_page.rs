use serde::{Deserialize, Serialize};

use crate::model::Commit;

/// What the repository page renders: the revision being displayed, the
/// commits below it, and the pagination step for the next load.
///
/// The head commit of the fetched log is not in `commits`. The caller
/// rendered it on the previous load, so repeating it here would draw it
/// twice.
#[derive(Deserialize, Serialize, Debug)]
pub struct CommitLogPage {
    #[serde(rename = "ref")]
    pub revision: String,
    pub commits: Vec<Commit>,
    pub increment: i64,
}
