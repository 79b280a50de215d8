//! graphme Core Library
//!
//! Core functionality for graphme including:
//! - Access token loading from local disk
//! - Graph API `/me` request preparation
//! - Configuration management

pub mod config;
pub mod credentials;
pub mod graph;

pub use config::{Config, ConfigError, GlobalConfig, TokenSource};
pub use credentials::{
    default_token_path, load_access_token, load_access_token_from, AccessToken, CredentialError,
};
pub use graph::{GraphClient, GraphError, GRAPH_ME_URL};
