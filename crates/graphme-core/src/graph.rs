//! Graph API request builder
//!
//! Holds the access token alongside the `/me` endpoint and prepares the
//! request for it. Requests are only built here, never sent.

use reqwest::{Method, Request, Url};
use thiserror::Error;

use crate::credentials::AccessToken;

/// The Graph API resource queried on behalf of the token's owner
pub const GRAPH_ME_URL: &str = "https://graph.facebook.com/me";

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Invalid Graph API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Parsed form of [`GRAPH_ME_URL`]
pub fn me_url() -> Result<Url, GraphError> {
    Url::parse(GRAPH_ME_URL).map_err(|source| GraphError::InvalidUrl {
        url: GRAPH_ME_URL.to_string(),
        source,
    })
}

/// Client configuration for the Graph API.
///
/// Owns the access token for as long as the client lives.
#[derive(Debug, Clone)]
pub struct GraphClient {
    access_token: AccessToken,
}

impl GraphClient {
    /// Create a client for the `/me` endpoint
    pub fn new(access_token: AccessToken) -> Self {
        Self { access_token }
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Build the GET request for the base URL.
    ///
    /// No query parameters or headers are added; the token stays in the client.
    pub fn prepare_me_request(&self) -> Result<Request, GraphError> {
        let request = Request::new(Method::GET, me_url()?);

        tracing::debug!(method = %request.method(), url = %request.url(), "Prepared Graph API request");

        Ok(request)
    }
}
