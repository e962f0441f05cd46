//! HTML for the two browser pages.

use crate::types::IndexView;
use html_escape::{encode_double_quoted_attribute, encode_text};
use url::Url;

/// Login page: a single link to GitHub's authorize URL.
pub fn login_page(authorize_url: &Url) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>GitHub Repo Browser</title></head>
<body>
    <h1>GitHub Repo Browser</h1>
    <p>Sign in to list your repositories.</p>
    <a href="{}">Sign in with GitHub</a>
</body>
</html>
"#,
        encode_double_quoted_attribute(authorize_url.as_str())
    )
}

/// Listing page: user header followed by one link per repository.
pub fn index_page(view: &IndexView) -> String {
    let items: String = view
        .repos
        .iter()
        .map(|repo| {
            format!(
                "        <li><a href=\"{}\">{}</a></li>\n",
                encode_double_quoted_attribute(&repo.url),
                encode_text(&repo.name)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{username} - GitHub Repo Browser</title></head>
<body>
    <img src="{avatar}" alt="{username_attr}" width="64" height="64">
    <h1>{username}</h1>
    <p>{count} repositories</p>
    <ul>
{items}    </ul>
</body>
</html>
"#,
        username = encode_text(&view.username),
        username_attr = encode_double_quoted_attribute(&view.username),
        avatar = encode_double_quoted_attribute(&view.avatar_url),
        count = view.repos.len(),
        items = items,
    )
}
