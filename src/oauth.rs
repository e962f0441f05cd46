use url::Url;

const AUTHORIZE_PATH: &str = "/login/oauth/authorize";

/// Split a comma-separated scope list, trimming whitespace and dropping empty entries.
pub fn split_scopes(scopes: &str) -> Vec<String> {
    scopes
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the GitHub authorize URL the browser is sent to.
///
/// Scopes go into a single space-separated `scope` parameter.
pub fn authorize_url(
    oauth_base: &Url,
    client_id: &str,
    redirect_uri: &str,
    scopes: &[String],
) -> Url {
    let mut url = oauth_base.clone();
    let path = format!("{}{}", oauth_base.path().trim_end_matches('/'), AUTHORIZE_PATH);
    url.set_path(&path);
    url.query_pairs_mut()
        .clear()
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("scope", &scopes.join(" "));
    url
}
