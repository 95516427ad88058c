pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod terminal;
pub mod ui;
pub mod wc;

pub use app::router;
pub use client::{ClientConfig, DisplayField, FileSource, ModeSelector, ResultDisplay, SubmissionClient};
pub use config::{resolve_base_url, ServiceConfig};
pub use errors::SubmitError;
pub use models::{AnalysisResult, Mode, SelectedFile, SubmissionOutcome};
pub use storage::{resolve_results_path, ResultStore};
