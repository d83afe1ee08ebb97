pub mod app;
pub mod category;
pub mod dataset;
pub mod errors;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use dataset::AqiDataset;
pub use loader::{load_dataset, resolve_data_path};
pub use state::AppState;
