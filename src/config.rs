use crate::cli::{Cli, TokenTransport};
use crate::error::{BrowserError, Result};
use crate::oauth::split_scopes;
use std::time::Duration;
use url::Url;

/// OAuth app registration values.
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
}

/// Immutable application configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: OAuthCredentials,
    pub oauth_base_url: Url,
    pub api_base_url: Url,
    pub paginate: bool,
    pub max_pages: u32,
    pub timeout: Duration,
    pub token_transport: TokenTransport,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let credentials = OAuthCredentials {
            client_id: cli.client_id.clone(),
            client_secret: cli.client_secret.clone(),
            redirect_uri: cli.redirect_uri.clone(),
            scopes: split_scopes(&cli.scopes),
        };

        let config = AppConfig {
            credentials,
            oauth_base_url: parse_base_url("oauth base URL", &cli.oauth_base_url)?,
            api_base_url: parse_base_url("API base URL", &cli.api_base_url)?,
            paginate: !cli.no_paginate,
            max_pages: cli.max_pages,
            timeout: Duration::from_secs(cli.timeout_secs),
            token_transport: cli.token_transport,
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration pointing both GitHub hosts at `base`. Used by tests and local mocks.
    pub fn for_base_url(base: &str, credentials: OAuthCredentials) -> Result<Self> {
        let base = parse_base_url("base URL", base)?;
        Ok(AppConfig {
            credentials,
            oauth_base_url: base.clone(),
            api_base_url: base,
            paginate: true,
            max_pages: 100,
            timeout: Duration::from_secs(30),
            token_transport: TokenTransport::Query,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.credentials.client_id.trim().is_empty() {
            return Err(BrowserError::ConfigError("client id must not be empty".to_string()));
        }
        if self.max_pages == 0 {
            return Err(BrowserError::ConfigError("max pages must be at least 1".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(BrowserError::ConfigError("timeout must be at least 1 second".to_string()));
        }
        Url::parse(&self.credentials.redirect_uri).map_err(|e| {
            BrowserError::ConfigError(format!(
                "invalid redirect URI '{}': {}",
                self.credentials.redirect_uri, e
            ))
        })?;
        Ok(())
    }
}

fn parse_base_url(what: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| BrowserError::ConfigError(format!("invalid {} '{}': {}", what, raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(BrowserError::ConfigError(format!(
            "{} '{}' cannot be used as a base",
            what, raw
        )));
    }
    Ok(url)
}
