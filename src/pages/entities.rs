use crate::api;
use crate::config::RemoteConfig;
use crate::error::ForgeError;
use crate::model::Entity;

/// Load the data for the entity index page. An empty forge is a legitimate
/// empty list, not an error.
pub async fn load(remote: &RemoteConfig) -> Result<Vec<Entity>, ForgeError> {
    api::client::entities::list(remote).await
}
