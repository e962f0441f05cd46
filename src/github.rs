use crate::cli::TokenTransport;
use crate::config::{AppConfig, OAuthCredentials};
use crate::error::{BrowserError, Result};
use crate::types::{
    parse_flat_object, parse_repository_page, AccessToken, RawRepository, UserProfile,
};
use reqwest::{redirect, Client, StatusCode};
use tracing::{debug, info, instrument, warn};
use url::Url;

const TOKEN_PATH: &str = "/login/oauth/access_token";
const USER_PATH: &str = "/user";
const REPOS_PATH: &str = "/user/repos";
const PER_PAGE: u32 = 100;

const JSON_ACCEPT: &str = "application/json";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

pub struct GitHubClient {
    client: Client,
    credentials: OAuthCredentials,
    oauth_base: String,
    api_base: String,
    token_transport: TokenTransport,
    paginate: bool,
    max_pages: u32,
}

impl GitHubClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent("GitHub Repo Browser/0.1.0")
            .timeout(config.timeout)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(GitHubClient {
            client,
            credentials: config.credentials.clone(),
            oauth_base: base_string(&config.oauth_base_url),
            api_base: base_string(&config.api_base_url),
            token_transport: config.token_transport,
            paginate: config.paginate,
            max_pages: config.max_pages,
        })
    }

    /// Issue a GET and return the body of a 200 response.
    async fn get_ok(
        &self,
        what: &str,
        url: &str,
        accept: &str,
        mut query: Vec<(&'static str, String)>,
        token: Option<&AccessToken>,
    ) -> Result<String> {
        let mut request = self.client.get(url).header("Accept", accept);

        if let Some(token) = token {
            match self.token_transport {
                TokenTransport::Query => query.push(("access_token", token.as_str().to_string())),
                TokenTransport::Header => request = request.bearer_auth(token.as_str()),
            }
        }

        let response = request.query(&query).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.text().await?),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                warn!("{} returned status {}", what, status);
                Err(BrowserError::UpstreamError(format!(
                    "{} failed with status {}: {}",
                    what, status, error_text
                )))
            }
        }
    }

    /// Trade the one-time authorization code for an access token.
    #[instrument(skip_all, level = "debug")]
    pub async fn exchange_code_for_token(&self, code: &str) -> Result<AccessToken> {
        let url = format!("{}{}", self.oauth_base, TOKEN_PATH);
        let query = vec![
            ("client_id", self.credentials.client_id.clone()),
            ("client_secret", self.credentials.client_secret.clone()),
            ("code", code.to_string()),
        ];

        let body = self.get_ok("Access token request", &url, JSON_ACCEPT, query, None).await?;
        let mut fields = parse_flat_object(&body)?;

        match fields.remove("access_token") {
            Some(token) => {
                debug!("Exchanged authorization code for access token");
                Ok(AccessToken::new(token))
            }
            None => {
                let reason = match (fields.get("error"), fields.get("error_description")) {
                    (Some(error), Some(description)) => format!(" ({}: {})", error, description),
                    (Some(error), None) => format!(" ({})", error),
                    _ => String::new(),
                };
                Err(BrowserError::MissingFieldError(format!("access_token{}", reason)))
            }
        }
    }

    /// Fetch the authenticated user's profile.
    #[instrument(skip_all, level = "debug")]
    pub async fn fetch_user_profile(&self, token: &AccessToken) -> Result<UserProfile> {
        let url = format!("{}{}", self.api_base, USER_PATH);
        let body = self
            .get_ok("User info request", &url, GITHUB_ACCEPT, Vec::new(), Some(token))
            .await?;
        Ok(UserProfile::from_fields(parse_flat_object(&body)?))
    }

    /// Fetch one page of the user's repositories.
    ///
    /// With `None` no paging parameters are sent and GitHub's default page size applies.
    #[instrument(skip(self, token), level = "debug")]
    pub async fn fetch_repositories(
        &self,
        token: &AccessToken,
        page: Option<u32>,
    ) -> Result<Vec<RawRepository>> {
        let url = format!("{}{}", self.api_base, REPOS_PATH);
        let query = match page {
            Some(page) => vec![("per_page", PER_PAGE.to_string()), ("page", page.to_string())],
            None => Vec::new(),
        };

        let body = self
            .get_ok("User repos request", &url, GITHUB_ACCEPT, query, Some(token))
            .await?;
        parse_repository_page(&body)
    }

    /// Walk repository pages from 1 until GitHub returns an empty page.
    pub async fn fetch_all_repositories(&self, token: &AccessToken) -> Result<Vec<RawRepository>> {
        let mut repos = Vec::new();

        for page in 1..=self.max_pages {
            let batch = self.fetch_repositories(token, Some(page)).await?;
            if batch.is_empty() {
                info!("Fetched {} repositories across {} pages", repos.len(), page - 1);
                return Ok(repos);
            }
            debug!("Page {} returned {} repositories", page, batch.len());
            repos.extend(batch);
        }

        warn!("Stopped paginating after {} non-empty pages", self.max_pages);
        Err(BrowserError::PaginationLimitExceeded(self.max_pages))
    }

    /// Fetch repositories the way the listing page is configured to: all pages or just the first.
    pub async fn fetch_repositories_for_listing(
        &self,
        token: &AccessToken,
    ) -> Result<Vec<RawRepository>> {
        if self.paginate {
            self.fetch_all_repositories(token).await
        } else {
            self.fetch_repositories(token, None).await
        }
    }
}

fn base_string(url: &Url) -> String {
    url.as_str().trim_end_matches('/').to_string()
}
