pub const HEALTH_TEXT: &str = "Dialogflow Webhook Server is Running!";

/// Liveness probe (`GET /`).
pub async fn health_route() -> &'static str {
    HEALTH_TEXT
}
