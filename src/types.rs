use crate::error::{BrowserError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// One repository object exactly as GitHub returned it.
pub type RawRepository = Map<String, Value>;

/// OAuth access token. Opaque to this service; never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Profile of the authenticated user, flattened to string values.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    fields: HashMap<String, String>,
}

impl UserProfile {
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        UserProfile { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn login(&self) -> Option<&str> {
        self.get("login")
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.get("avatar_url")
    }
}

/// Display shape of a repository: its name and web URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    pub name: String,
    pub url: String,
}

impl RepositorySummary {
    /// Project a raw repository onto `name` and `html_url`, dropping everything else.
    pub fn from_raw(raw: &RawRepository) -> Result<Self> {
        Ok(RepositorySummary {
            name: string_field(raw, "name")?,
            url: string_field(raw, "html_url")?,
        })
    }
}

/// Values rendered on the repository listing page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexView {
    pub username: String,
    pub avatar_url: String,
    pub repos: Vec<RepositorySummary>,
}

fn string_field(raw: &RawRepository, key: &str) -> Result<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| BrowserError::MissingFieldError(format!("repository field '{}'", key)))
}

/// Parse a JSON object body into a flat string map.
///
/// Strings are kept as-is, numbers and booleans are stringified, and
/// `null`, arrays and nested objects are dropped.
pub fn parse_flat_object(body: &str) -> Result<HashMap<String, String>> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Object(object) = value else {
        return Err(BrowserError::MalformedResponseError(
            "expected a JSON object".to_string(),
        ));
    };

    let fields = object
        .into_iter()
        .filter_map(|(key, value)| {
            let flat = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            };
            Some((key, flat))
        })
        .collect();

    Ok(fields)
}

/// Parse a JSON array body whose elements are all objects.
pub fn parse_repository_page(body: &str) -> Result<Vec<RawRepository>> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(items) = value else {
        return Err(BrowserError::MalformedResponseError(
            "expected a JSON array of repositories".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(repo) => Ok(repo),
            _ => Err(BrowserError::MalformedResponseError(format!(
                "repository entry {} is not an object",
                idx
            ))),
        })
        .collect()
}
