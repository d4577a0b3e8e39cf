use crate::api;
use crate::api::client;
use crate::config::RemoteConfig;
use crate::error::ForgeError;
use crate::model::PageRequest;
use crate::view::CommitLogResponse;

/// Fetch the commit log for a repository page.
///
/// The backend route mirrors the page path, and the page's query string is
/// forwarded unmodified, so parameters this crate does not recognize still
/// reach the backend.
pub async fn commit_log(
    remote: &RemoteConfig,
    page: &PageRequest,
) -> Result<CommitLogResponse, ForgeError> {
    let url = commit_log_url(remote, page);
    log::debug!("api::client::commits::commit_log {}", url);

    let client = client::new()?;
    let res = client.get(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: Result<CommitLogResponse, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(log) => Ok(log),
        Err(err) => Err(ForgeError::response_decode(&url, err, &body)),
    }
}

fn commit_log_url(remote: &RemoteConfig, page: &PageRequest) -> String {
    let uri = format!("/{}/commits?{}", page.api_path(), page.query());
    api::endpoint::url_from_remote(remote, uri)
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::config::RemoteConfig;
    use crate::error::ForgeError;
    use crate::model::PageRequest;
    use crate::test;

    #[test]
    fn test_commit_log_url_with_empty_query() -> Result<(), ForgeError> {
        let remote = RemoteConfig::new();
        let page = PageRequest::parse("/e/r")?;
        let url = super::commit_log_url(&remote, &page);
        assert_eq!(url, "http://localhost:4000/api/e/r/commits?");
        Ok(())
    }

    #[tokio::test]
    async fn test_commit_log_fetches_and_decodes() -> Result<(), ForgeError> {
        test::init_test_env();
        let mut server = mockito::Server::new_async().await;
        let remote = RemoteConfig::from_url(&server.url())?;

        let mock = server
            .mock("GET", "/api/ox/forge/commits")
            .match_query(mockito::Matcher::Exact(String::from("increment=10")))
            .with_body(
                r#"{"commits": [
                    {"message_header": "Second", "message_body": "", "commit_id": "c2"},
                    {"message_header": "First", "message_body": "details", "commit_id": "c1"}
                ]}"#,
            )
            .create_async()
            .await;

        let page = PageRequest::parse("/ox/forge?increment=10")?;
        let log = api::client::commits::commit_log(&remote, &page).await?;
        mock.assert();

        assert_eq!(log.commits.len(), 2);
        assert_eq!(log.commits[0].commit_id, "c2");
        assert_eq!(log.commits[1].message_body, "details");
        Ok(())
    }

    #[tokio::test]
    async fn test_commit_log_forwards_unrecognized_params() -> Result<(), ForgeError> {
        let mut server = mockito::Server::new_async().await;
        let remote = RemoteConfig::from_url(&server.url())?;

        // byte-for-byte, order included
        let mock = server
            .mock("GET", "/api/ox/forge/commits")
            .match_query(mockito::Matcher::Exact(String::from(
                "rev=abc123&foo=bar",
            )))
            .with_body(r#"{"commits": []}"#)
            .create_async()
            .await;

        let page = PageRequest::parse("/ox/forge?rev=abc123&foo=bar")?;
        api::client::commits::commit_log(&remote, &page).await?;
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn test_commit_log_bad_status_is_an_error() -> Result<(), ForgeError> {
        let mut server = mockito::Server::new_async().await;
        let remote = RemoteConfig::from_url(&server.url())?;

        let _mock = server
            .mock("GET", "/api/ox/missing/commits")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let page = PageRequest::parse("/ox/missing")?;
        let result = api::client::commits::commit_log(&remote, &page).await;
        assert!(matches!(result, Err(ForgeError::RemoteResponse(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_commit_log_malformed_body_is_an_error() -> Result<(), ForgeError> {
        let mut server = mockito::Server::new_async().await;
        let remote = RemoteConfig::from_url(&server.url())?;

        let _mock = server
            .mock("GET", "/api/ox/forge/commits")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"something_else": true}"#)
            .create_async()
            .await;

        let page = PageRequest::parse("/ox/forge")?;
        let result = api::client::commits::commit_log(&remote, &page).await;
        assert!(result.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_commit_log_unreachable_backend_is_an_error() -> Result<(), ForgeError> {
        // nothing listens on port 1
        let remote = RemoteConfig::from_url("http://127.0.0.1:1")?;
        let page = PageRequest::parse("/ox/forge")?;
        let result = api::client::commits::commit_log(&remote, &page).await;
        assert!(matches!(result, Err(ForgeError::HTTP(_))));
        Ok(())
    }
}
