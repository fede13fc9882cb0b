// Core of the symptom triage chat:
// - Recommendation client for the Gemini generateContent endpoint
// - Request/response data structures
// - Prompt template
// - Configuration loading
// - Transcript and chat session
// - Shared error types

pub mod client;
pub use client::RecommendationClient;

pub mod types;
pub use types::*;

pub mod config;
pub use config::{ConfigOverrides, TriageConfig};

pub mod errors;
pub use errors::*;

pub mod prompt;
pub use prompt::build_prompt;

pub mod transport;
pub use transport::{ReqwestTransport, Transport, TransportResponse};

pub mod transcript;
pub use transcript::{ChatMessage, Role, Transcript};

pub mod session;
pub use session::ChatSession;
