use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use hotel_ai::concierge::{ChatPrompt, ChatTurn, ConciergeError};
use hotel_ai::error::AppError;
use hotel_ai::forecasting::{
    DemandForecast, PricingRecommendation, SentimentReading, TacticalInsight,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub(crate) fn app_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/forecast/demand", post(demand_endpoint))
        .route("/api/v1/forecast/pricing", post(pricing_endpoint))
        .route("/api/v1/reviews/sentiment", post(sentiment_endpoint))
        .route("/api/v1/insights", get(insights_endpoint))
        .route("/api/v1/concierge/chat", post(chat_endpoint))
}

/// Date/room-type pair shared by the demand and pricing endpoints. The
/// date stays a raw string here; validating it belongs to the scorer so
/// the parse failure reaches the caller unaltered.
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastRequest {
    pub(crate) date: String,
    pub(crate) room_type: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SentimentRequest {
    pub(crate) text: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChatContext {
    #[serde(default)]
    pub(crate) role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) history: Vec<ChatTurn>,
    #[serde(default)]
    pub(crate) user_context: ChatContext,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatResponse {
    pub(crate) reply: String,
    pub(crate) status: &'static str,
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn demand_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ForecastRequest>,
) -> Result<Json<DemandForecast>, AppError> {
    let forecast = state
        .engines
        .scorer
        .score(&payload.date, &payload.room_type)?;
    Ok(Json(forecast))
}

pub(crate) async fn pricing_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ForecastRequest>,
) -> Result<Json<PricingRecommendation>, AppError> {
    let recommendation = state
        .engines
        .pricing
        .recommend(&payload.date, &payload.room_type)?;
    Ok(Json(recommendation))
}

pub(crate) async fn sentiment_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SentimentRequest>,
) -> Json<SentimentReading> {
    Json(state.engines.sentiment.classify(&payload.text))
}

pub(crate) async fn insights_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<Vec<TacticalInsight>> {
    Json(state.engines.insights.sample(2))
}

pub(crate) async fn chat_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let gateway = state
        .concierge
        .clone()
        .ok_or(ConciergeError::NotConfigured)?;

    let prompt = ChatPrompt {
        message: payload.message,
        history: payload.history,
        role_context: payload.user_context.role,
    };

    let reply = tokio::task::spawn_blocking(move || gateway.chat(prompt))
        .await
        .map_err(|err| ConciergeError::Upstream(format!("chat task failed: {err}")))??;

    Ok(Json(ChatResponse {
        reply: reply.reply,
        status: "success",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::ForecastEngines;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let handle = PrometheusBuilder::new()
            .build_recorder()
            .handle();
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(handle),
            engines: Arc::new(ForecastEngines::standard()),
            concierge: None,
        }
    }

    fn router() -> Router {
        app_router().layer(Extension(test_state()))
    }

    async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let value = serde_json::from_slice(&bytes).expect("body is json");
        (status, value)
    }

    #[tokio::test]
    async fn demand_route_scores_valid_payloads() {
        let (status, body) = post_json(
            router(),
            "/api/v1/forecast/demand",
            json!({ "date": "2026-06-03", "room_type": "Standard" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2026-06-03");
        assert_eq!(body["demand_score"], 0.7);
        assert_eq!(body["level"], "Medium");
        assert_eq!(body["factors"], json!(["Peak Season"]));
    }

    #[tokio::test]
    async fn demand_route_rejects_malformed_dates() {
        let (status, body) = post_json(
            router(),
            "/api/v1/forecast/demand",
            json!({ "date": "06/03/2026", "room_type": "Standard" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().expect("error message present");
        assert!(message.contains("06/03/2026"));
    }

    #[tokio::test]
    async fn pricing_route_returns_the_ui_contract() {
        let (status, body) = post_json(
            router(),
            "/api/v1/forecast/pricing",
            json!({ "date": "2026-12-25", "room_type": "Presidential Suite" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommended_price"], 1800.0);
        assert_eq!(body["confidence"], 0.85);
        assert_eq!(
            body["reason"],
            "Based on High forecasted demand (100%). Factors: Peak Season, Weekend Surge, Event: Christmas Day"
        );
    }

    #[tokio::test]
    async fn sentiment_route_classifies_reviews() {
        let (status, body) = post_json(
            router(),
            "/api/v1/reviews/sentiment",
            json!({ "text": "the room was clean and the staff were friendly" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sentiment"], "Positive");
        assert_eq!(body["score"], 2.0);
    }

    #[tokio::test]
    async fn insights_route_returns_two_distinct_cards() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/insights")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let cards: Vec<serde_json::Value> = serde_json::from_slice(&bytes).expect("body is json");
        assert_eq!(cards.len(), 2);
        assert_ne!(cards[0]["id"], cards[1]["id"]);
    }

    #[tokio::test]
    async fn chat_route_reports_missing_gateway() {
        let (status, body) = post_json(
            router(),
            "/api/v1/concierge/chat",
            json!({ "message": "When is checkout?" }),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["error"]
            .as_str()
            .expect("error message present")
            .contains("not configured"));
    }

    #[tokio::test]
    async fn healthcheck_is_static() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
