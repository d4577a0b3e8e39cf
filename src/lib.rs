//! # libforge
//!
//! Page-data loading for the Forge web front-end.
//!
//! The Forge backend exposes a JSON API under `/api/`. This crate turns an
//! incoming page request (URL path + query string) into the backend call for
//! that route, decodes the response, and hands the rendering layer a typed
//! view model.
//!
//! Loading a repository's commit log page:
//!
//! ```
//! use libforge::config::RemoteConfig;
//! use libforge::model::PageRequest;
//! use libforge::pages;
//!
//! let remote = RemoteConfig::new();
//! let page = PageRequest::parse("/ox/forge?rev=abc123&increment=10")?;
//! let data = pages::repository::load(&remote, &page).await?;
//! println!("showing {} at {}", data.commits.len(), data.revision);
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod pages;
pub mod view;
