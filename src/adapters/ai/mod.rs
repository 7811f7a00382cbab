//! AI adapter module. Implements LlmPort for hosted summarization.
//!
//! Provides a Groq (OpenAI-compatible) adapter and a mock adapter for testing.

pub mod groq_adapter;
pub mod mock_adapter;

pub use groq_adapter::GroqAdapter;
pub use mock_adapter::MockLlmAdapter;
