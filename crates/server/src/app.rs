use axum::{
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use robo_advisor_core::{handle_json_with_context, DialogContext, DialogResponse, InterfaceError};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::health;

pub const CORRELATION_HEADER: &str = "x-correlation-id";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DialogErrorBody {
    pub error: String,
    pub correlation_id: String,
}

pub fn router() -> Router {
    Router::new().route("/dialog", post(dialog_hook)).route("/health", get(health::health))
}

pub async fn dialog_hook(
    headers: HeaderMap,
    Json(event): Json<Value>,
) -> Result<Json<DialogResponse>, (StatusCode, Json<DialogErrorBody>)> {
    let ctx = DialogContext::new(correlation_id(&headers));

    match handle_json_with_context(event, &ctx) {
        Ok(response) => {
            info!(
                event_name = "system.server.dialog_response",
                correlation_id = %ctx.correlation_id,
                dialog_action = response.action_type(),
                "dialog hook responded"
            );
            Ok(Json(response))
        }
        Err(error) => {
            let interface = error.into_interface(ctx.correlation_id);
            warn!(
                event_name = "system.server.dialog_error",
                correlation_id = %interface.correlation_id(),
                error = %interface,
                "dialog hook rejected event"
            );
            Err(error_response(interface))
        }
    }
}

fn error_response(interface: InterfaceError) -> (StatusCode, Json<DialogErrorBody>) {
    let status = match interface {
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    let body = DialogErrorBody {
        error: interface.user_message().to_string(),
        correlation_id: interface.correlation_id().to_string(),
    };
    (status, Json(body))
}

fn correlation_id(headers: &HeaderMap) -> String {
    headers
        .get(CORRELATION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::{router, CORRELATION_HEADER};

    async fn post_dialog(body: Value, correlation_id: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder()
            .method("POST")
            .uri("/dialog")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(correlation_id) = correlation_id {
            request = request.header(CORRELATION_HEADER, correlation_id);
        }
        let request = request.body(Body::from(body.to_string())).expect("request");

        let response = router().oneshot(request).await.expect("router response");
        let status = response.status();
        let bytes = response.into_body().collect().await.expect("body").to_bytes();
        let payload = serde_json::from_slice(&bytes).expect("json body");
        (status, payload)
    }

    fn advisor_event(intent_name: &str, source: &str, age: &str) -> Value {
        json!({
            "invocationSource": source,
            "sessionAttributes": {},
            "currentIntent": {
                "name": intent_name,
                "slots": {
                    "firstName": "Jo",
                    "age": age,
                    "investmentAmount": "10000",
                    "riskLevel": "high"
                }
            }
        })
    }

    #[tokio::test]
    async fn dialog_hook_returns_elicit_slot_for_invalid_age() {
        let (status, payload) =
            post_dialog(advisor_event("recommendPortfolio", "DialogCodeHook", "70"), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["dialogAction"]["type"], "ElicitSlot");
        assert_eq!(payload["dialogAction"]["slotToElicit"], "age");
    }

    #[tokio::test]
    async fn dialog_hook_returns_close_on_fulfillment() {
        let (status, payload) =
            post_dialog(advisor_event("recommendPortfolio", "FulfillmentCodeHook", "30"), None)
                .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["dialogAction"]["type"], "Close");
        assert_eq!(payload["dialogAction"]["fulfillmentState"], "Fulfilled");
    }

    #[tokio::test]
    async fn unsupported_intent_is_unprocessable_and_echoes_correlation_id() {
        let (status, payload) = post_dialog(
            advisor_event("orderFlowers", "DialogCodeHook", "30"),
            Some("corr-123"),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            payload,
            json!({
                "error": "The request could not be fulfilled. Check the intent name and slot values.",
                "correlation_id": "corr-123"
            })
        );
    }

    #[tokio::test]
    async fn out_of_range_risk_level_is_unprocessable() {
        let mut event = advisor_event("recommendPortfolio", "FulfillmentCodeHook", "30");
        event["currentIntent"]["slots"]["riskLevel"] = json!("yolo");

        let (status, payload) = post_dialog(event, Some("corr-456")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(payload["correlation_id"], "corr-456");
        assert_eq!(
            payload["error"],
            "The request could not be fulfilled. Check the intent name and slot values."
        );
    }

    #[tokio::test]
    async fn malformed_event_is_bad_request_with_generated_correlation_id() {
        let (status, payload) =
            post_dialog(json!({ "invocationSource": "DialogCodeHook" }), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let correlation_id = payload["correlation_id"].as_str().expect("correlation id");
        assert!(uuid::Uuid::parse_str(correlation_id).is_ok());
    }

    #[tokio::test]
    async fn health_route_is_served() {
        let request = Request::builder().uri("/health").body(Body::empty()).expect("request");
        let response = router().oneshot(request).await.expect("router response");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
