use crate::error::Result;
use crate::request::{request_data, request_url};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, Uri};
use axum::response::{Html, Redirect};
use returnurl_core::{RequestFields, TokenCache};
use tracing::{debug, warn};

const BACK_FALLBACK_FIELD: &str = "fallback";

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_header_safe(url: &str) -> bool {
    HeaderValue::from_str(url).is_ok()
}

/// Redirects to `url`, or to `home` when `url` cannot be a `Location` header.
fn redirect_or_home(url: String, home: &str) -> Redirect {
    if is_header_safe(&url) {
        Redirect::to(&url)
    } else {
        warn!(url = %url.escape_debug(), "Return url is not a valid location, redirecting home");
        Redirect::to(home)
    }
}

/// A page that links away with a token pointing back to itself.
pub async fn page_handler<C: TokenCache>(
    State(state): State<AppState<C>>,
    Path(name): Path<String>,
    uri: Uri,
) -> Result<Html<String>> {
    let token = state.service.encode(request_url(&uri)).await;
    state.service.set_label(&token, &name).await?;

    let key = escape_html(&state.service.config().request_key);
    let name = escape_html(&name);

    Ok(Html(format!(
        r#"<!doctype html>
<html>
<body>
<h1>{name}</h1>
<p><a href="/edit?{key}={token}">Edit something</a></p>
<p><a href="/back?{key}={token}&amp;{BACK_FALLBACK_FIELD}=/">Follow a link back</a></p>
</body>
</html>
"#
    )))
}

/// A form carrying the request token through to its submission.
pub async fn edit_form_handler<C: TokenCache>(
    State(state): State<AppState<C>>,
    uri: Uri,
) -> Html<String> {
    let request = request_data(&uri, None);
    let key = escape_html(&state.service.config().request_key);

    let (token, label) = match state.service.request_token(&request) {
        Some(token) => {
            let label = state.service.get_label(&token).await;
            (escape_html(token.as_str()), label)
        }
        None => (String::new(), None),
    };
    let returning_to = escape_html(label.as_deref().unwrap_or("home"));

    Html(format!(
        r#"<!doctype html>
<html>
<body>
<form method="post" action="/edit">
<input type="hidden" name="{key}" value="{token}">
<button type="submit">Save</button>
</form>
<p>Returning to: {returning_to}</p>
</body>
</html>
"#
    ))
}

pub async fn edit_submit_handler<C: TokenCache>(
    State(state): State<AppState<C>>,
    uri: Uri,
    body: Bytes,
) -> Redirect {
    let request = request_data(&uri, Some(&body));
    let url = state.service.resolve_url(&request, None).await;
    debug!(url = %url.escape_debug(), "redirecting after submit");
    redirect_or_home(url, &state.service.config().home_url)
}

/// Redirects to the token URL, else the `fallback` query field, else home.
///
/// A fallback that is not a valid header value is ignored.
pub async fn back_handler<C: TokenCache>(State(state): State<AppState<C>>, uri: Uri) -> Redirect {
    let request = request_data(&uri, None);
    let fallback = request
        .query(BACK_FALLBACK_FIELD)
        .and_then(|value| value.as_scalar().map(str::to_string))
        .filter(|url| is_header_safe(url));
    let url = state
        .service
        .resolve_url(&request, fallback.as_deref())
        .await;
    debug!(url = %url.escape_debug(), "redirecting back");
    redirect_or_home(url, &state.service.config().home_url)
}
