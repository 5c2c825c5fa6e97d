use parts_catalog::{CompatibilityGuide, CompatibilityQuery};

use super::{Turn, messages};
use crate::dialogflow::WebhookResponse;

pub const FORM_FACTOR_PARAM: &str = "motherboard-form-factor";
pub const COMPARE_FORM_FACTOR_PARAM: &str = "compare-form-factor";
pub const SOCKET_PARAM: &str = "cpu-socket";
pub const COMPARE_SOCKET_PARAM: &str = "compare-socket";
pub const SUBJECT_PARAM: &str = "subject";

/// Compatibility answers never carry a context.
pub fn handle(guide: &CompatibilityGuide, turn: &Turn<'_>) -> WebhookResponse {
    let query = CompatibilityQuery {
        form_factor: turn.params.get(FORM_FACTOR_PARAM),
        compare_form_factor: turn.params.get(COMPARE_FORM_FACTOR_PARAM),
        socket: turn.params.get(SOCKET_PARAM),
        compare_socket: turn.params.get(COMPARE_SOCKET_PARAM),
        subject: turn.params.get(SUBJECT_PARAM),
    };
    WebhookResponse::text(
        guide
            .answer(&query)
            .unwrap_or_else(|| messages::COMPATIBILITY_GUIDANCE.to_string()),
    )
}
