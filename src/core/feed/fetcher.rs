use reqwest::Url;
use serde::Deserialize;

/// Query parameter the relay reads the target URL from.
const RELAY_URL_PARAM: &str = "url";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
    #[error("invalid relay url: {0}")]
    InvalidRelayUrl(String),
    #[error("malformed relay envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct RelayEnvelope {
    contents: String,
}

/// Builds the relay request URL with the feed URL percent-encoded into the
/// `url` query parameter.
pub fn build_relay_url(relay_url: &str, feed_url: &str) -> Result<Url, FetchError> {
    Url::parse_with_params(relay_url, &[(RELAY_URL_PARAM, feed_url)])
        .map_err(|error| FetchError::InvalidRelayUrl(error.to_string()))
}

/// Fetches `feed_url` through the relay and returns the raw feed document
/// carried in the envelope's `contents` field. Single attempt, no retry.
pub async fn fetch_via_relay(
    client: &reqwest::Client,
    relay_url: &str,
    feed_url: &str,
) -> Result<String, FetchError> {
    let request_url = build_relay_url(relay_url, feed_url)?;
    let response = client.get(request_url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await?;
    let envelope: RelayEnvelope = serde_json::from_slice(&body)?;
    Ok(envelope.contents)
}
