//! Configuration for the forge front-end, remote backend endpoint configuration
//!

pub mod remote_config;

pub use crate::config::remote_config::RemoteConfig;
