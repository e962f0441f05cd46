use clap::{Parser, ValueEnum};

/// How the access token is attached to GitHub REST calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenTransport {
    /// `access_token` query parameter
    Query,
    /// `Authorization: Bearer` header
    Header,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "github-repo-browser")]
#[command(about = "GitHub Repo Browser - Sign in with GitHub and list your repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// OAuth app client id
    #[arg(long, env = "GITHUB_CLIENT_ID")]
    pub client_id: String,

    /// OAuth app client secret
    #[arg(long, env = "GITHUB_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// Redirect URI registered for the OAuth app
    #[arg(long, env = "GITHUB_REDIRECT_URI", default_value = "http://localhost:8080/index")]
    pub redirect_uri: String,

    /// Comma-separated OAuth scopes
    #[arg(long, env = "GITHUB_SCOPES", default_value = "repo,read:user")]
    pub scopes: String,

    /// Address the web server binds to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// Base URL for the OAuth endpoints
    #[arg(long, env = "GITHUB_OAUTH_BASE_URL", default_value = "https://github.com")]
    pub oauth_base_url: String,

    /// Base URL for the REST API
    #[arg(long, env = "GITHUB_API_BASE_URL", default_value = "https://api.github.com")]
    pub api_base_url: String,

    /// Fetch only the first page of repositories
    #[arg(long, env = "GITHUB_NO_PAGINATE")]
    pub no_paginate: bool,

    /// Upper bound on repository pages fetched per request
    #[arg(long, env = "GITHUB_MAX_PAGES", default_value_t = 100)]
    pub max_pages: u32,

    /// Per-request timeout for GitHub calls, in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// How the access token is sent to the REST API
    #[arg(
        long,
        env = "GITHUB_TOKEN_TRANSPORT",
        value_enum,
        default_value_t = TokenTransport::Query
    )]
    pub token_transport: TokenTransport,
}
