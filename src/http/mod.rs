//! HTTP layer - Routes, handlers and server bootstrap

pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::router;
pub use server::serve;
pub use state::AppState;
