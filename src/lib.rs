pub mod api;
pub mod config;
pub mod errors;
pub mod loader;
pub mod messages;
pub mod models;
pub mod page;
pub mod schema;
pub mod session;
pub mod state;
pub mod tabs;

pub use api::ApiClient;
pub use config::{resolve_config, ClientConfig};
pub use page::{Page, Variant};
pub use state::ClientState;
