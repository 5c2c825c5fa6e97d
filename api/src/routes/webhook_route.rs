use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use tracing::{info, instrument, warn};

use crate::{
    core::app_state::AppState,
    dialogflow::{SessionPath, WebhookRequest, WebhookResponse},
    fulfillment::{self, messages},
    middleware_layer::request_id::REQUEST_ID_HEADER,
};

/// Fulfillment endpoint (`POST /webhook`).
///
/// Always answers HTTP 200 with a `WebhookResponse`: the platform expects
/// failures to be conversational, so even an unparseable body gets the
/// invalid-payload text.
#[instrument(
    name = "webhook_route",
    skip_all,
    fields(request_id = headers.get(REQUEST_ID_HEADER).and_then(|h| h.to_str().ok()))
)]
pub async fn webhook_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<WebhookRequest>, JsonRejection>,
) -> Json<WebhookResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected webhook payload");
            return Json(WebhookResponse::text(messages::INVALID_REQUEST));
        }
    };

    let session = request.session.as_deref().and_then(SessionPath::parse);
    info!(
        project = session.as_ref().and_then(|s| s.project.as_deref()).unwrap_or("-"),
        session = session.as_ref().and_then(|s| s.session.as_deref()).unwrap_or("-"),
        intent = request.intent_name().unwrap_or("-"),
        "webhook request"
    );

    let reply = fulfillment::fulfill(&state.catalog, &request, state.config.context_lifespan);
    info!(
        contexts = reply.output_contexts.len(),
        text_len = reply.fulfillment_text.len(),
        "webhook reply"
    );
    Json(reply)
}
