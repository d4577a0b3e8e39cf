use crate::api;
use crate::api::client;
use crate::config::RemoteConfig;
use crate::error::ForgeError;
use crate::model::Repository;
use crate::view::RepositoriesResponse;

/// List the repositories owned by one entity.
pub async fn list_for_entity(
    remote: &RemoteConfig,
    entity_name: &str,
) -> Result<Vec<Repository>, ForgeError> {
    let uri = format!("/entities/{entity_name}");
    let url = api::endpoint::url_from_remote(remote, uri);
    log::debug!("api::client::repositories::list_for_entity {}", url);

    let client = client::new()?;
    let res = client.get(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: Result<RepositoriesResponse, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(response) => Ok(response.repos),
        Err(err) => Err(ForgeError::response_decode(&url, err, &body)),
    }
}
