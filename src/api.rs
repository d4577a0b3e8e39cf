//! # API - functions for talking to the forge backend over HTTP
//!
//! Everything the page loaders fetch goes through here
//!

pub mod client;
pub mod endpoint;
