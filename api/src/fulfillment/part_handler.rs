//! One handler for every hardware category.
//!
//! Resolve the model (current parameters first, then the category's prior
//! context), look it up through the alias index, answer either the requested
//! detail or the full description and re-emit the details context.

use parts_catalog::{Catalog, PartRecord, render_detail};
use tracing::debug;

use super::Turn;
use crate::dialogflow::{DetailsContext, WebhookResponse, binding};
use crate::fulfillment::messages;

pub fn handle<R: PartRecord>(catalog: &Catalog<R>, turn: &Turn<'_>) -> WebhookResponse {
    let category = catalog.category();
    let b = binding(category);

    let raw_model = match turn.params.get(b.model_param) {
        Some(raw) => raw.to_string(),
        None => match DetailsContext::recall(turn.contexts, category) {
            Some(raw) => {
                debug!(target: "api::fulfillment", %category, model = %raw, "model taken from context");
                raw
            }
            None => return WebhookResponse::text(messages::missing_model(category)),
        },
    };
    let detail = turn.params.first_of(b.detail_params);

    let Some(hit) = catalog.lookup(&raw_model) else {
        debug!(target: "api::fulfillment", %category, model = %raw_model, "model not in catalog");
        return WebhookResponse::text(messages::not_found(category, &raw_model));
    };
    debug!(
        target: "api::fulfillment",
        %category,
        key = hit.key,
        detail = detail.unwrap_or("-"),
        "model resolved"
    );

    let text = match detail {
        Some(detail) => render_detail(hit.record, detail),
        None => hit.record.describe(),
    };

    let reply = WebhookResponse::text(text);
    match turn.session {
        Some(session) => reply.with_context(
            DetailsContext {
                category,
                session: session.path.clone(),
                raw_model,
                detail: detail.map(str::to_string),
                lifespan: turn.lifespan,
            }
            .to_wire(),
        ),
        None => reply,
    }
}
