use crate::api;
use crate::api::client;
use crate::config::RemoteConfig;
use crate::error::ForgeError;
use crate::model::Entity;
use crate::view::EntitiesResponse;

/// List every entity the forge hosts.
pub async fn list(remote: &RemoteConfig) -> Result<Vec<Entity>, ForgeError> {
    let url = api::endpoint::url_from_remote(remote, "/entities");
    log::debug!("api::client::entities::list {}", url);

    let client = client::new()?;
    let res = client.get(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: Result<EntitiesResponse, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(response) => Ok(response.entities),
        Err(err) => Err(ForgeError::response_decode(&url, err, &body)),
    }
}
