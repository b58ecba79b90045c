pub mod cli;
pub mod config;
pub mod generator;
pub mod llm;
pub mod logging;
pub mod outlet;
pub mod parser;
pub mod server;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use generator::{GenerationRequest, GenerationResponse, IdeaGenerator};
pub use parser::{derive_tags, parse_ideas, parse_ideas_with};
pub use types::IdeaRecord;
