//! the-odds-api.com v4 client.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::OddsFeed;
use crate::domain::EventQuotes;
use crate::error::Result;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.the-odds-api.com";

/// REST client for the-odds-api.com.
///
/// Fetches US-region head-to-head odds; the response shape deserializes
/// directly into [`EventQuotes`].
#[derive(Debug, Clone)]
pub struct TheOddsApiClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl TheOddsApiClient {
    /// Create a client against the production host.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against a custom host (tests, proxies).
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
        })
    }

    fn odds_url(&self, sport: &str) -> Result<Url> {
        let mut url = self.base_url.join(&format!("/v4/sports/{sport}/odds/"))?;
        url.query_pairs_mut()
            .append_pair("apiKey", &self.api_key)
            .append_pair("regions", "us")
            .append_pair("markets", "h2h");
        Ok(url)
    }
}

#[async_trait]
impl OddsFeed for TheOddsApiClient {
    async fn fetch_events(&self, sport: &str) -> Result<Vec<EventQuotes>> {
        let url = self.odds_url(sport)?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    fn name(&self) -> &'static str {
        "the-odds-api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odds_url_carries_key_and_market_params() {
        let client = TheOddsApiClient::new("test-key").unwrap();
        let url = client.odds_url("americanfootball_nfl").unwrap();

        assert_eq!(url.path(), "/v4/sports/americanfootball_nfl/odds/");
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&("apiKey".into(), "test-key".into())));
        assert!(query.contains(&("regions".into(), "us".into())));
        assert!(query.contains(&("markets".into(), "h2h".into())));
    }

    #[test]
    fn custom_base_url_is_respected() {
        let client = TheOddsApiClient::with_base_url("http://localhost:9999", "k").unwrap();
        let url = client.odds_url("basketball_nba").unwrap();
        assert!(url.as_str().starts_with("http://localhost:9999/v4/"));
    }
}
