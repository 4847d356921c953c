pub mod config;
mod orchestrator;
mod types;

pub use config::AnalysisConfig;
pub use orchestrator::{process, process_bytes, process_with_config};
pub use types::{Analysis, PipelineStage};
