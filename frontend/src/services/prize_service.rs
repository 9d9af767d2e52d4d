use std::future::Future;

use gloo_net::http::Request;
use shared::error::PrizeLookupError;
use shared::shared_wheel_game::PrizeResponse;
use shared::wheel_session::PrizeClient;

/// Fetches the prize description over HTTP.
#[derive(Debug, Clone)]
pub struct GlooPrizeClient {
    url: String,
}

impl GlooPrizeClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn fetch(url: String) -> Result<String, PrizeLookupError> {
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| PrizeLookupError::new(format!("network error: {}", e)))?;

        if !response.ok() {
            return Err(PrizeLookupError::new(format!("status {}", response.status())));
        }

        response
            .json::<PrizeResponse>()
            .await
            .map_err(|e| PrizeLookupError::new(format!("error parsing prize response: {}", e)))?
            .into_prize()
    }
}

impl PrizeClient for GlooPrizeClient {
    fn fetch_prize(&self) -> impl Future<Output = Result<String, PrizeLookupError>> {
        Self::fetch(self.url.clone())
    }
}
