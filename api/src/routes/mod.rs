pub mod health_route;
pub mod webhook_route;
