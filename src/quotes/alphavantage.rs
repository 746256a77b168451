//! Alpha Vantage quote client
//!
//! Free-tier real-time quotes, 5 requests/minute. The response is a JSON
//! object that carries either a "Global Quote" payload, an "Error Message"
//! (unknown symbol) or a "Note" (rate limit); prices come back as
//! string-encoded decimals.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{QuoteError, QuoteSource};

const BASE_URL: &str = "https://www.alphavantage.co";

/// Global Quote response envelope
#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    #[allow(dead_code)]
    symbol: Option<String>,
    #[serde(rename = "05. price")]
    price: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "bestMatches")]
    best_matches: Option<Vec<SymbolMatch>>,
}

/// One match from the symbol search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolMatch {
    #[serde(rename = "1. symbol")]
    pub symbol: String,
    #[serde(rename = "2. name")]
    pub name: String,
    #[serde(rename = "4. region")]
    pub region: String,
    #[serde(rename = "8. currency")]
    pub currency: String,
}

/// Alpha Vantage API client
pub struct AlphaVantageClient {
    /// HTTP client
    client: Client,

    /// Base URL, overridable for tests
    base_url: String,

    /// API key
    api_key: String,
}

impl AlphaVantageClient {
    /// Create a new client with the production endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, QuoteError> {
        Self::with_base_url(BASE_URL, api_key)
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, QuoteError> {
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Search for symbols matching the given keywords
    pub async fn search(&self, keywords: &str) -> Result<Vec<SymbolMatch>, QuoteError> {
        let url = format!(
            "{}/query?function=SYMBOL_SEARCH&keywords={}&apikey={}",
            self.base_url, keywords, self.api_key
        );

        debug!("Searching symbols: {}", keywords);

        let response: SearchResponse = self.client.get(&url).send().await?.json().await?;
        Ok(response.best_matches.unwrap_or_default())
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageClient {
    async fn fetch_price(&self, ticker: &str) -> Result<f64, QuoteError> {
        let url = format!(
            "{}/query?function=GLOBAL_QUOTE&symbol={}&apikey={}",
            self.base_url, ticker, self.api_key
        );

        debug!("Fetching quote for {}", ticker);

        let response: GlobalQuoteResponse = self.client.get(&url).send().await?.json().await?;

        if response.error_message.is_some() {
            return Err(QuoteError::UnknownSymbol(ticker.to_string()));
        }

        if response.note.is_some() {
            return Err(QuoteError::RateLimited);
        }

        response
            .global_quote
            .and_then(|quote| quote.price)
            .and_then(|price| price.parse::<f64>().ok())
            .ok_or_else(|| QuoteError::MissingPrice(ticker.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_client(server: &MockServer) -> AlphaVantageClient {
        AlphaVantageClient::with_base_url(server.uri(), "test-key").unwrap()
    }

    #[tokio::test]
    async fn fetch_price_parses_global_quote() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "GLOBAL_QUOTE"))
            .and(query_param("symbol", "AAPL"))
            .and(query_param("apikey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Global Quote": {
                    "01. symbol": "AAPL",
                    "05. price": "180.7500"
                }
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let price = client.fetch_price("AAPL").await.unwrap();
        assert_eq!(price, 180.75);
    }

    #[tokio::test]
    async fn fetch_price_unknown_symbol() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Error Message": "Invalid API call."
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let err = client.fetch_price("NOPE").await.unwrap_err();
        assert!(matches!(err, QuoteError::UnknownSymbol(s) if s == "NOPE"));
    }

    #[tokio::test]
    async fn fetch_price_rate_limited() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let err = client.fetch_price("AAPL").await.unwrap_err();
        assert!(matches!(err, QuoteError::RateLimited));
    }

    #[tokio::test]
    async fn fetch_price_missing_quote_object() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let err = client.fetch_price("AAPL").await.unwrap_err();
        assert!(matches!(err, QuoteError::MissingPrice(s) if s == "AAPL"));
    }

    #[tokio::test]
    async fn fetch_price_unparsable_price() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Global Quote": {
                    "01. symbol": "AAPL",
                    "05. price": "not-a-number"
                }
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let err = client.fetch_price("AAPL").await.unwrap_err();
        assert!(matches!(err, QuoteError::MissingPrice(_)));
    }

    #[tokio::test]
    async fn search_returns_best_matches() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "SYMBOL_SEARCH"))
            .and(query_param("keywords", "apple"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "bestMatches": [
                    {
                        "1. symbol": "AAPL",
                        "2. name": "Apple Inc",
                        "3. type": "Equity",
                        "4. region": "United States",
                        "8. currency": "USD"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let matches = client.search("apple").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].symbol, "AAPL");
        assert_eq!(matches[0].name, "Apple Inc");
    }

    #[tokio::test]
    async fn search_without_matches_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        assert!(client.search("zzzz").await.unwrap().is_empty());
    }
}
