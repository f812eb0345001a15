//! The chat inquiry: interpret, extract entities, retrieve one fact from the
//! `Job` table, synthesize a reply.

mod dispatcher;
mod entities;
mod greeting;
mod inquiry;
mod interpreter;
mod prompt;
mod synthesizer;

pub use dispatcher::{retrieve, RetrievalStrategy, CLARIFY_MESSAGE};
pub use entities::{extract_entities, ExtractedEntities};
pub use inquiry::JobInquiryPipeline;
pub use interpreter::QueryInterpreter;
pub use synthesizer::ResponseSynthesizer;
