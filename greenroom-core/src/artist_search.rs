use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Shared HTTP client for all search requests.
fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .user_agent("greenroom/1.0")
            .build()
            .expect("Failed to create HTTP client")
    })
}

/// One artist offered by the search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistHit {
    pub name: String,
    pub id: i64,
}

#[derive(Debug, Error)]
pub enum ArtistSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("search endpoint returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Wire envelope: `{"response": [[name, id], ...]}` with `null` (or a
/// missing key) meaning no results.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    response: Option<Vec<(String, i64)>>,
}

impl SearchEnvelope {
    fn into_hits(self) -> Vec<ArtistHit> {
        self.response
            .unwrap_or_default()
            .into_iter()
            .map(|(name, id)| ArtistHit { name, id })
            .collect()
    }
}

/// Query the search endpoint for artists matching `name`.
///
/// An empty hit list is an ordinary outcome, not an error.
pub async fn search_artists(
    search_url: &str,
    name: &str,
) -> Result<Vec<ArtistHit>, ArtistSearchError> {
    let url = format!("{}?name={}", search_url, urlencoding::encode(name));
    debug!("Artist search request: {}", url);

    let response = http_client()
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!("Artist search error response ({}): {}", status, body);
        return Err(ArtistSearchError::Status { status, body });
    }

    let envelope: SearchEnvelope = response.json().await?;
    let hits = envelope.into_hits();
    debug!("Artist search returned {} hit(s)", hits.len());
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_parses_name_id_pairs() {
        let envelope: SearchEnvelope =
            serde_json::from_str(r#"{"response": [["Night Parade", 3], ["The Hollow Suns", 7]]}"#)
                .unwrap();
        let hits = envelope.into_hits();
        assert_eq!(
            hits,
            vec![
                ArtistHit {
                    name: "Night Parade".to_string(),
                    id: 3
                },
                ArtistHit {
                    name: "The Hollow Suns".to_string(),
                    id: 7
                },
            ]
        );
    }

    #[test]
    fn envelope_treats_null_response_as_empty() {
        let envelope: SearchEnvelope = serde_json::from_str(r#"{"response": null}"#).unwrap();
        assert!(envelope.into_hits().is_empty());
    }

    #[test]
    fn envelope_treats_missing_response_as_empty() {
        let envelope: SearchEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_hits().is_empty());
    }

    #[test]
    fn envelope_rejects_malformed_pairs() {
        let result: Result<SearchEnvelope, _> =
            serde_json::from_str(r#"{"response": [["only-a-name"]]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn query_terms_are_percent_encoded() {
        let url = format!(
            "{}?name={}",
            "http://localhost/search",
            urlencoding::encode("sigur rós & co")
        );
        assert_eq!(
            url,
            "http://localhost/search?name=sigur%20r%C3%B3s%20%26%20co"
        );
    }
}
