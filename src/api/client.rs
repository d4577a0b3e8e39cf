//! # API Client - HTTP plumbing shared by the per-resource modules
//!

use reqwest::{Client, ClientBuilder};
use std::time;

use crate::constants;
use crate::error::ForgeError;

pub mod commits;
pub mod entities;
pub mod repositories;

const VERSION: &str = crate::constants::FORGE_VERSION;
const USER_AGENT: &str = "Forge";

// TODO: pool clients per remote so sequential page loads reuse keep-alive
// connections.
pub fn new() -> Result<Client, ForgeError> {
    match builder()
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(ForgeError::HTTP(reqwest_err)),
    }
}

fn builder() -> ClientBuilder {
    Client::builder().user_agent(user_agent())
}

fn user_agent() -> String {
    format!("{USER_AGENT}/{VERSION}")
}

/// Performs an extra check to validate that the response is success before
/// handing back the body text.
pub async fn parse_json_body(url: &str, res: reqwest::Response) -> Result<String, ForgeError> {
    let status = res.status();
    let body = res.text().await?;

    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    if status.is_success() {
        Ok(body)
    } else {
        Err(ForgeError::remote_response(url, status))
    }
}
