#[cfg(feature = "test-mode")]
use std::env;

use url::Url;

use super::SfError;
use super::client::SfClient;

/// `url` with the `api-key` value replaced by `***`.
pub(crate) fn redacted_url(url: &Url) -> Url {
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api-key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    if !pairs.is_empty() {
        out.query_pairs_mut().clear().extend_pairs(pairs);
    }
    out
}

/// Renders `url` with the `api-key` value masked, for errors and logs.
pub(crate) fn redact(url: &Url) -> String {
    redacted_url(url).to_string()
}

/// reqwest embeds the request URL, key included, in its errors.
fn transport_error(e: reqwest::Error, url: &Url) -> SfError {
    SfError::Http(e.with_url(redacted_url(url)))
}

/// Issues a GET and returns the body of a successful response.
/// Non-2xx statuses become the matching `SfError` variant.
pub(crate) async fn get_body(
    client: &SfClient,
    url: &Url,
    endpoint: &str,
    key: &str,
) -> Result<String, SfError> {
    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| transport_error(e, url))?;

    let status = resp.status();
    if !status.is_success() {
        let code = status.as_u16();
        let url_s = redact(url);
        return Err(match code {
            404 => SfError::NotFound { url: url_s },
            429 => SfError::RateLimited { url: url_s },
            500..=599 => SfError::ServerError {
                status: code,
                url: url_s,
            },
            _ => SfError::Status {
                status: code,
                url: url_s,
            },
        });
    }

    get_text(resp, endpoint, key, "json")
        .await
        .map_err(|e| transport_error(e, url))
}

/// Read the response body as text.
/// In `test-mode`, if `SF_RECORD=1`, the body is saved as a fixture via `fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("SF_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            eprintln!("SF_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(text)
}
