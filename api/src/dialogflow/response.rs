use serde::{Deserialize, Serialize};

use super::OutboundContext;

/// Fulfillment reply: text for the user plus contexts to keep alive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,
    pub output_contexts: Vec<OutboundContext>,
}

impl WebhookResponse {
    /// Reply without output contexts.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            fulfillment_text: text.into(),
            output_contexts: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: OutboundContext) -> Self {
        self.output_contexts.push(context);
        self
    }
}
