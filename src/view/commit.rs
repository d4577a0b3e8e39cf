use serde::{Deserialize, Serialize};

use crate::model::Commit;

/// Wire shape of `GET /api/<entity>/<repo>/commits`, most-recent-first.
#[derive(Deserialize, Serialize, Debug)]
pub struct CommitLogResponse {
    pub commits: Vec<Commit>,
}
