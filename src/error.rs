//! Errors for the forge page-loading library
//!
//! Enumeration for all errors that can occur while loading page data
//!

use derive_more::{Display, Error};
use std::io;

use crate::model::RepoRoute;

pub mod string_error;

pub use crate::error::string_error::StringError;

pub const NO_HOME_DIR: &str = "Home directory not found";

#[derive(Debug, Display, Error)]
pub enum ForgeError {
    // Generic
    Basic(StringError),

    // Page routing
    InvalidPageRoute(Box<StringError>),

    // Commit log
    EmptyCommitLog(Box<StringError>),

    // Remote API
    RemoteResponse(Box<StringError>),

    // External library errors
    HTTP(reqwest::Error),
    IO(io::Error),
    JSON(serde_json::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    URL(url::ParseError),
}

impl ForgeError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        ForgeError::Basic(StringError::from(s.as_ref()))
    }

    pub fn invalid_page_route(path: impl AsRef<str>) -> Self {
        let err = format!(
            "Page path is not an entity/repository route: {:?}",
            path.as_ref()
        );
        ForgeError::InvalidPageRoute(Box::new(StringError::from(err)))
    }

    pub fn empty_commit_log(route: &RepoRoute) -> Self {
        let err = format!(
            "No commits found for repository {}/{}",
            route.entity, route.repo
        );
        ForgeError::EmptyCommitLog(Box::new(StringError::from(err)))
    }

    pub fn remote_response(url: impl AsRef<str>, status: reqwest::StatusCode) -> Self {
        let err = format!("Remote returned {} for {}", status, url.as_ref());
        ForgeError::RemoteResponse(Box::new(StringError::from(err)))
    }

    pub fn response_decode(url: impl AsRef<str>, err: serde_json::Error, body: &str) -> Self {
        let err = format!(
            "Could not deserialize response from [{}] [{err}]\n{body}",
            url.as_ref()
        );
        ForgeError::basic_str(err)
    }

    pub fn home_dir_not_found() -> Self {
        ForgeError::basic_str(NO_HOME_DIR)
    }
}

// if you do not want to call .map_err, implement the std::convert::From trait
impl From<io::Error> for ForgeError {
    fn from(error: io::Error) -> Self {
        ForgeError::IO(error)
    }
}

impl From<String> for ForgeError {
    fn from(error: String) -> Self {
        ForgeError::Basic(StringError::from(error))
    }
}

impl From<toml::ser::Error> for ForgeError {
    fn from(error: toml::ser::Error) -> Self {
        ForgeError::TomlSer(error)
    }
}

impl From<toml::de::Error> for ForgeError {
    fn from(error: toml::de::Error) -> Self {
        ForgeError::TomlDe(error)
    }
}

impl From<url::ParseError> for ForgeError {
    fn from(error: url::ParseError) -> Self {
        ForgeError::URL(error)
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(error: serde_json::Error) -> Self {
        ForgeError::JSON(error)
    }
}

impl From<reqwest::Error> for ForgeError {
    fn from(error: reqwest::Error) -> Self {
        ForgeError::HTTP(error)
    }
}
