use serde::Deserialize;
use serde_json::{Map, Value};

/// Fulfillment request body (`POST /webhook`).
///
/// Every member is optional on the wire; missing pieces are reported by
/// the accessors and turned into the invalid-payload reply upstream.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default)]
    pub response_id: Option<String>,
    /// `projects/{project}/agent/sessions/{session}` (or the environment variant).
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub query_result: Option<QueryResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub query_text: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentRef>,
    #[serde(default)]
    pub parameters: Option<Map<String, Value>>,
    /// Contexts active for this turn, as sent by the platform.
    #[serde(default)]
    pub output_contexts: Option<Vec<InboundContext>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRef {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A context the platform reports as active.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundContext {
    /// `None` when the platform sent no usable name; such a context never matches.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lifespan_count: Option<u32>,
    #[serde(default)]
    pub parameters: Option<Map<String, Value>>,
}

impl WebhookRequest {
    /// Intent display name exactly as sent, `None` when absent or blank.
    pub fn intent_name(&self) -> Option<&str> {
        self.query_result
            .as_ref()?
            .intent
            .as_ref()?
            .display_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
    }

    /// Raw parameter map, `None` when the platform sent none.
    pub fn parameters(&self) -> Option<&Map<String, Value>> {
        self.query_result.as_ref()?.parameters.as_ref()
    }

    pub fn input_contexts(&self) -> &[InboundContext] {
        self.query_result
            .as_ref()
            .and_then(|q| q.output_contexts.as_deref())
            .unwrap_or_default()
    }
}

impl InboundContext {
    /// True when the last path segment of `name` is `suffix`.
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.name
            .as_deref()
            .and_then(|name| name.rsplit('/').next())
            .is_some_and(|last| last == suffix)
    }
}
