#![allow(dead_code)]

use github_repo_browser::config::{AppConfig, OAuthCredentials};
use github_repo_browser::github::GitHubClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const CODE: &str = "one-time-code";
pub const TOKEN: &str = "gho_test_token";

pub fn test_credentials() -> OAuthCredentials {
    OAuthCredentials {
        client_id: CLIENT_ID.to_string(),
        client_secret: CLIENT_SECRET.to_string(),
        redirect_uri: "http://localhost:8080/index".to_string(),
        scopes: vec!["repo".to_string(), "read:user".to_string()],
    }
}

/// Configuration with both GitHub hosts pointed at the mock server.
pub fn config_for(server: &MockServer) -> AppConfig {
    AppConfig::for_base_url(&server.uri(), test_credentials()).expect("Failed to build config")
}

pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new(&config_for(server)).expect("Failed to create client")
}

/// `count` repositories named `repo-<start>` onwards, with the extra fields GitHub sends.
pub fn repo_page(start: usize, count: usize) -> Value {
    let repos: Vec<Value> = (start..start + count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("repo-{}", i),
                "full_name": format!("octocat/repo-{}", i),
                "html_url": format!("https://github.com/octocat/repo-{}", i),
                "url": format!("https://api.github.com/repos/octocat/repo-{}", i),
                "private": false,
                "owner": { "login": "octocat" }
            })
        })
        .collect();
    Value::Array(repos)
}

pub async fn mount_token_exchange(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/login/oauth/access_token"))
        .and(query_param("client_id", CLIENT_ID))
        .and(query_param("client_secret", CLIENT_SECRET))
        .and(query_param("code", CODE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "bearer",
            "scope": "repo,read:user"
        })))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_user_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(query_param("access_token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "site_admin": false,
            "plan": { "name": "free" }
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount one mock per page, each expected exactly once.
pub async fn mount_repo_pages(server: &MockServer, sizes: &[usize]) {
    let mut start = 0;
    for (idx, size) in sizes.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .and(query_param("access_token", TOKEN))
            .and(query_param("per_page", "100"))
            .and(query_param("page", (idx + 1).to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(repo_page(start, *size)))
            .expect(1)
            .mount(server)
            .await;
        start += size;
    }
}
