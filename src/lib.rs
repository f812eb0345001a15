pub mod core;
pub mod jobs;
pub mod llm;
pub mod pipeline;
pub mod server;
pub mod state;
