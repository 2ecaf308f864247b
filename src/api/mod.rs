//! HTTP API module: the violations page, health endpoint, and server lifecycle.

pub mod handlers;
pub mod routes;
pub mod server;

pub use handlers::AppState;
pub use routes::create_router;
pub use server::{bind, Server};
