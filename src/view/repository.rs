use serde::{Deserialize, Serialize};

use crate::model::Repository;

/// Wire shape of `GET /api/entities/<entity>`.
#[derive(Deserialize, Serialize, Debug)]
pub struct RepositoriesResponse {
    pub repos: Vec<Repository>,
}
