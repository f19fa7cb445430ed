use axum::{
    extract::State,
    http::{header, HeaderMap},
    middleware,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::visitor_controller::VisitorController;
use crate::dto::visitor_dto::{RecordVisitRequest, VisitorStatsResponse};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_visitor_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/stats", get(visitor_stats))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/record", post(record_visit))
        .merge(protected)
}

/// IP du client: derrière un proxy, la vraie adresse arrive dans les
/// headers de forwarding.
fn client_ip(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = headers
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
    {
        return real_ip.trim().to_string();
    }

    "unknown".to_string()
}

/// Ne renvoie jamais d'erreur: le contrôleur avale tout échec
async fn record_visit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RecordVisitRequest>,
) -> Json<serde_json::Value> {
    let ip = client_ip(&headers);
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let response = VisitorController::new(&state)
        .record(ip, user_agent, request.page)
        .await;

    Json(response)
}

async fn visitor_stats(
    State(state): State<AppState>,
) -> Result<Json<VisitorStatsResponse>, AppError> {
    let response = VisitorController::new(&state).stats().await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));

        assert_eq!(client_ip(&headers), "203.0.113.7");
    }

    #[test]
    fn test_client_ip_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));

        assert_eq!(client_ip(&headers), "198.51.100.4");
    }

    #[test]
    fn test_client_ip_unknown_without_headers() {
        assert_eq!(client_ip(&HeaderMap::new()), "unknown");
    }
}
