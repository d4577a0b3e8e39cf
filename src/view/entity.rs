use serde::{Deserialize, Serialize};

use crate::model::Entity;

/// Wire shape of `GET /api/entities`.
#[derive(Deserialize, Serialize, Debug)]
pub struct EntitiesResponse {
    pub entities: Vec<Entity>,
}
