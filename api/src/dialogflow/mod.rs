//! Wire types of the conversational platform's fulfillment webhook.

pub mod bindings;
pub mod context;
pub mod parameters;
pub mod request;
pub mod response;

pub use bindings::{CategoryBinding, binding};
pub use context::{DetailsContext, OutboundContext, SessionPath};
pub use parameters::Parameters;
pub use request::{InboundContext, WebhookRequest};
pub use response::WebhookResponse;
