//! Intent routing and the per-intent handlers.

pub mod build_handler;
pub mod compatibility_handler;
pub mod messages;
pub mod part_handler;

use parts_catalog::{Category, PartsCatalog};
use tracing::{debug, warn};

use crate::dialogflow::{
    InboundContext, Parameters, SessionPath, WebhookRequest, WebhookResponse, bindings,
};

pub const COMPATIBILITY_INTENT: &str = "Get_Compatibility_Details";
pub const BUILD_INTENT: &str = "Get_Build_Details";

/// Recognised intents; display names must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Part(Category),
    Compatibility,
    Build,
}

impl Intent {
    pub fn from_display_name(name: &str) -> Option<Self> {
        match name {
            COMPATIBILITY_INTENT => Some(Intent::Compatibility),
            BUILD_INTENT => Some(Intent::Build),
            other => bindings::by_intent(other).map(|b| Intent::Part(b.category)),
        }
    }
}

/// Everything a handler may read about the current turn.
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    pub params: &'a Parameters,
    pub contexts: &'a [InboundContext],
    /// `None` when the request carried no session; no context is emitted then.
    pub session: Option<&'a SessionPath>,
    pub lifespan: u32,
}

/// Answer one fulfillment request. Never fails: every problem is a reply text.
pub fn fulfill(catalog: &PartsCatalog, request: &WebhookRequest, lifespan: u32) -> WebhookResponse {
    let (Some(intent_name), Some(raw_params)) = (request.intent_name(), request.parameters()) else {
        warn!(target: "api::fulfillment", "request without intent display name or parameters");
        return WebhookResponse::text(messages::INVALID_REQUEST);
    };

    let Some(intent) = Intent::from_display_name(intent_name) else {
        warn!(target: "api::fulfillment", intent = intent_name, "unhandled intent");
        return WebhookResponse::text(messages::UNKNOWN_INTENT);
    };

    let params = Parameters::from_map(raw_params);
    let session = request.session.as_deref().and_then(SessionPath::parse);
    let turn = Turn {
        params: &params,
        contexts: request.input_contexts(),
        session: session.as_ref(),
        lifespan,
    };
    debug!(target: "api::fulfillment", ?intent, params = params.len(), "dispatching");

    dispatch(catalog, intent, &turn)
}

fn dispatch(catalog: &PartsCatalog, intent: Intent, turn: &Turn<'_>) -> WebhookResponse {
    match intent {
        Intent::Part(Category::Cpu) => part_handler::handle(&catalog.cpu, turn),
        Intent::Part(Category::Ram) => part_handler::handle(&catalog.ram, turn),
        Intent::Part(Category::Motherboard) => part_handler::handle(&catalog.motherboard, turn),
        Intent::Part(Category::Gpu) => part_handler::handle(&catalog.gpu, turn),
        Intent::Part(Category::CaseFan) => part_handler::handle(&catalog.case_fan, turn),
        Intent::Part(Category::CpuCooler) => part_handler::handle(&catalog.cpu_cooler, turn),
        Intent::Part(Category::Storage) => part_handler::handle(&catalog.storage, turn),
        Intent::Part(Category::Psu) => part_handler::handle(&catalog.psu, turn),
        Intent::Compatibility => compatibility_handler::handle(&catalog.compatibility, turn),
        Intent::Build => build_handler::handle(&catalog.builds, turn),
    }
}
