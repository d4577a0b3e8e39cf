use crate::config::RemoteConfig;
use crate::constants::API_NAMESPACE;

/// Compose a backend API URL from the configured remote and a URI suffix.
///
/// The suffix carries its own leading `/` and any query string, so
/// `url_from_remote(&remote, "/ox/forge/commits?rev=abc123")` becomes
/// `http://localhost:4000/api/ox/forge/commits?rev=abc123`.
pub fn url_from_remote(remote: &RemoteConfig, uri: impl AsRef<str>) -> String {
    format!(
        "{}/{}{}",
        remote.root_url(),
        API_NAMESPACE,
        uri.as_ref()
    )
}
