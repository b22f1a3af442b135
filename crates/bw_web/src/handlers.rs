use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use crate::AppState;

/// Uncaught handler failures become a 500 with the standard envelope.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.0.to_string(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

type ApiResult = std::result::Result<Json<Value>, ApiError>;

pub async fn health(State(state): State<Arc<AppState>>) -> ApiResult {
    Ok(Json(json!({
        "success": true,
        "status": "healthy",
        "service": state.service,
        "version": state.version,
        "generator_configured": state.generator_configured,
        "timestamp": Utc::now().to_rfc3339(),
    })))
}

/// Demo pending-review entries for the dashboard.
pub async fn list_entries(State(_state): State<Arc<AppState>>) -> ApiResult {
    let now = Utc::now();
    let entries = demo_entries();
    let count = entries.len();

    Ok(Json(json!({
        "success": true,
        "entries": entries,
        "count": count,
        "timestamp": now.to_rfc3339(),
        "demo_mode": true,
    })))
}

/// Echo a status update back; the demo surface holds no state to mutate.
pub async fn update_entry(
    State(_state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> ApiResult {
    let update = body.map(|Json(value)| value).unwrap_or_else(|| json!({}));

    Ok(Json(json!({
        "success": true,
        "message": "Entry status updated",
        "updated_entry": update,
        "timestamp": Utc::now().to_rfc3339(),
    })))
}

/// Fixed synthetic dashboard numbers.
pub async fn analytics(State(_state): State<Arc<AppState>>) -> ApiResult {
    let now = Utc::now();

    Ok(Json(json!({
        "success": true,
        "analytics": {
            "total_entries": 23,
            "recent_entries": 7,
            "approval_rate": 84.2,
            "average_quality_score": 8.1,
            "pending_count": 2,
            "last_generated": now.to_rfc3339(),
            "performance_trend": "improving",
            "quality_distribution": {
                "high": 65,
                "medium": 25,
                "low": 10,
            },
            "topic_performance": [
                { "topic": "AI Ethics", "posts": 8, "avg_engagement": 45 },
                { "topic": "AI Bias", "posts": 6, "avg_engagement": 38 },
                { "topic": "Responsible AI", "posts": 9, "avg_engagement": 52 },
            ],
        },
        "timestamp": now.to_rfc3339(),
        "demo_mode": true,
    })))
}

fn demo_entries() -> Vec<Value> {
    let now = Utc::now();
    let hour_ago = now - Duration::hours(1);

    vec![
        json!({
            "id": format!("demo_{}", now.timestamp_millis()),
            "created_at": now.to_rfc3339(),
            "status": "pending_review",
            "research_context": {
                "trending_topics": ["AI governance", "responsible AI", "algorithmic fairness"],
                "news_articles_count": 5,
                "research_timestamp": now.to_rfc3339(),
            },
            "content_options": [
                {
                    "option_number": 1,
                    "content": "You don't need a computer science degree to make AI work \
                                for you. What's one area where AI could simplify your work? \
                                #ResponsibleAI #AIEthics",
                    "score": 8.7,
                    "voice_score": 8.4,
                    "recommended": true,
                    "character_count": 234,
                },
                {
                    "option_number": 2,
                    "content": "The real challenge in AI isn't the technology. It's ensuring \
                                fairness and transparency in every decision. How does your \
                                organization approach AI accountability? #ResponsibleAI #AIBias",
                    "score": 7.9,
                    "voice_score": 7.6,
                    "recommended": false,
                    "character_count": 267,
                },
            ],
            "pipeline_metadata": {
                "generation_time": 2.3,
                "research_sources": ["TechCrunch", "Wired", "BBC Technology"],
                "model_used": "gpt-4o-mini",
            },
        }),
        json!({
            "id": format!("demo_{}", hour_ago.timestamp_millis()),
            "created_at": hour_ago.to_rfc3339(),
            "status": "pending_review",
            "research_context": {
                "trending_topics": ["AI transparency", "machine learning", "AI regulation"],
                "news_articles_count": 3,
                "research_timestamp": hour_ago.to_rfc3339(),
            },
            "content_options": [
                {
                    "option_number": 1,
                    "content": "AI regulation is coming faster than most companies expected. \
                                What's your organization doing to prepare for AI governance \
                                requirements? #AIRegulation #AIGovernance",
                    "score": 8.2,
                    "voice_score": 8.0,
                    "recommended": true,
                    "character_count": 251,
                },
            ],
            "pipeline_metadata": {
                "generation_time": 1.8,
                "research_sources": ["O'Reilly Radar", "CNN"],
                "model_used": "gpt-4o-mini",
            },
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            service: "test API".to_string(),
            version: "0.1.0".to_string(),
            generator_configured: false,
        })
    }

    #[tokio::test]
    async fn health_reports_status_and_timestamp() {
        let Json(body) = health(State(state())).await.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["generator_configured"], false);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn entries_carry_a_count_and_envelope() {
        let Json(body) = list_entries(State(state())).await.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["demo_mode"], true);
        assert_eq!(body["count"], body["entries"].as_array().unwrap().len());
        for entry in body["entries"].as_array().unwrap() {
            assert_eq!(entry["status"], "pending_review");
            assert!(!entry["content_options"].as_array().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn update_echoes_the_posted_body() {
        let update = json!({"id": "demo_1", "status": "approved"});
        let Json(body) = update_entry(State(state()), Some(Json(update.clone())))
            .await
            .unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["updated_entry"], update);
    }

    #[tokio::test]
    async fn update_tolerates_a_missing_body() {
        let Json(body) = update_entry(State(state()), None).await.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["updated_entry"], json!({}));
    }

    #[tokio::test]
    async fn analytics_is_the_fixed_demo_payload() {
        let Json(body) = analytics(State(state())).await.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["analytics"]["total_entries"], 23);
        assert_eq!(
            body["analytics"]["topic_performance"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
    }

    #[test]
    fn api_error_renders_the_failure_envelope() {
        let response = ApiError(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
