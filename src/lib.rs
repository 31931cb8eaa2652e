pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod source;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use source::{fetch_all_records, StoreConfig};
pub use state::AppState;
