use crate::api;
use crate::config::RemoteConfig;
use crate::error::ForgeError;
use crate::model::Repository;

/// Load the data for an entity's repository list page.
pub async fn load(remote: &RemoteConfig, entity_name: &str) -> Result<Vec<Repository>, ForgeError> {
    api::client::repositories::list_for_entity(remote, entity_name).await
}
