mod config;
mod errors;
mod handlers;
mod server;
mod state;

pub use config::ServerConfig;
pub use server::create_app;
pub use state::AppState;
