use std::sync::Arc;

use axum::{debug_handler, extract::State, routing::get, Json, Router};
use rand::seq::SliceRandom;
use shared::constants::{PRIZE_API_ENDPOINT, PRIZE_ENDPOINT};
use shared::shared_wheel_game::PrizeResponse;

use crate::error::Error;

#[derive(Clone)]
pub struct PrizeState {
    prizes: Arc<Vec<String>>,
}

impl PrizeState {
    pub fn new(prizes: Vec<String>) -> Self {
        Self {
            prizes: Arc::new(prizes),
        }
    }

    fn draw(&self) -> Option<&str> {
        self.prizes.choose(&mut rand::thread_rng()).map(String::as_str)
    }
}

pub fn create_router() -> Router<PrizeState> {
    Router::new()
        .route(PRIZE_ENDPOINT, get(get_prize))
        .route(PRIZE_API_ENDPOINT, get(get_prize))
}

#[debug_handler]
async fn get_prize(State(state): State<PrizeState>) -> Result<Json<PrizeResponse>, Error> {
    let prize = state.draw().ok_or_else(|| {
        tracing::warn!("prize requested but none are configured");
        Error::NoPrizes
    })?;

    tracing::info!("handing out prize {:?}", prize);
    Ok(Json(PrizeResponse {
        prize: prize.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app(prizes: &[&str]) -> Router {
        create_router().with_state(PrizeState::new(prizes.iter().map(|p| p.to_string()).collect()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_prize_from_configured_list() {
        let prizes = ["Free Coffee", "Gift Card"];
        for uri in [PRIZE_ENDPOINT, PRIZE_API_ENDPOINT] {
            let (status, body) = get_json(app(&prizes), uri).await;
            assert_eq!(status, StatusCode::OK);
            let prize = body["prize"].as_str().unwrap();
            assert!(prizes.contains(&prize));
        }
    }

    #[tokio::test]
    async fn test_no_prizes_is_unavailable() {
        let (status, body) = get_json(app(&[]), PRIZE_ENDPOINT).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "No prizes available");
    }

    #[tokio::test]
    async fn test_response_parses_as_prize() {
        let (_, body) = get_json(app(&["Mug"]), PRIZE_ENDPOINT).await;
        let response: PrizeResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.into_prize().unwrap(), "Mug");
    }
}
