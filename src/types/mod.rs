pub mod completion;
pub mod prompt;

pub use completion::{CompletionRequest, CompletionResponse, StopReason};
pub use prompt::{Prompt, AI_PROMPT, HUMAN_PROMPT};
