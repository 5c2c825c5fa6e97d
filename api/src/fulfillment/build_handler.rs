use parts_catalog::BuildCatalog;
use tracing::debug;

use super::{Turn, messages};
use crate::dialogflow::WebhookResponse;

pub const BUILD_TYPE_PARAM: &str = "build_type";

pub fn handle(builds: &BuildCatalog, turn: &Turn<'_>) -> WebhookResponse {
    let resolved = turn
        .params
        .get(BUILD_TYPE_PARAM)
        .and_then(|raw| builds.resolve(raw));

    match resolved {
        Some((tier, profile)) => {
            debug!(target: "api::fulfillment", tier, items = profile.components.len(), "build resolved");
            WebhookResponse::text(profile.render())
        }
        None => WebhookResponse::text(messages::UNKNOWN_BUILD),
    }
}
