use std::path::{Path, PathBuf};

use graphme_core::{AccessToken, Config, TokenSource};

pub mod endpoint;
pub mod request;
pub mod token;

/// Where commands look for the token and the config
pub struct Locations<'a> {
    pub token_file: Option<&'a Path>,
    pub config_file: &'a Path,
}

/// Resolve the token source and read the token from it
fn load_token(locations: &Locations<'_>) -> anyhow::Result<(PathBuf, AccessToken)> {
    match Config::resolve_token_source(locations.token_file, locations.config_file)? {
        TokenSource::Explicit(path) | TokenSource::Configured(path) => {
            let token = graphme_core::load_access_token_from(&path)?;
            Ok((path, token))
        }
        TokenSource::Default => {
            let path = graphme_core::default_token_path()?;
            let token = graphme_core::load_access_token()?;
            Ok((path, token))
        }
    }
}
