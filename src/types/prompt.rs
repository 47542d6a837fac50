/// Prefix the completions API expects before each human turn.
pub const HUMAN_PROMPT: &str = "\n\nHuman:";

/// Prefix the completions API expects before each assistant turn.
pub const AI_PROMPT: &str = "\n\nAssistant:";

/// A structured prompt containing a sequence of conversation turns.
///
/// `build` renders the turns into the `Human:`/`Assistant:` framing the
/// completions API expects, ending with an open assistant turn for the model
/// to complete. A raw, caller-framed string can still be passed straight to
/// `CompletionRequest` without going through this builder.
#[derive(Debug, Clone, Default)]
pub struct Prompt {
    turns: Vec<Turn>,
}

#[derive(Debug, Clone)]
enum Turn {
    Human(String),
    Assistant(String),
}

impl Prompt {
    /// Create a new empty prompt.
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Create a prompt with a single human turn.
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::Human(content.into())],
        }
    }

    /// Add a human turn.
    pub fn with_human(mut self, content: impl Into<String>) -> Self {
        self.turns.push(Turn::Human(content.into()));
        self
    }

    /// Add an assistant turn.
    pub fn with_assistant(mut self, content: impl Into<String>) -> Self {
        self.turns.push(Turn::Assistant(content.into()));
        self
    }

    /// Render the framed prompt string.
    pub fn build(&self) -> String {
        let mut out = String::new();
        for turn in &self.turns {
            match turn {
                Turn::Human(text) => {
                    out.push_str(HUMAN_PROMPT);
                    out.push(' ');
                    out.push_str(text);
                }
                Turn::Assistant(text) => {
                    out.push_str(AI_PROMPT);
                    out.push(' ');
                    out.push_str(text);
                }
            }
        }
        out.push_str(AI_PROMPT);
        out
    }
}

impl From<&str> for Prompt {
    fn from(s: &str) -> Self {
        Prompt::human(s)
    }
}

impl From<String> for Prompt {
    fn from(s: String) -> Self {
        Prompt::human(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_human_turn_framing() {
        let prompt = Prompt::human("Hello, Claude!");
        assert_eq!(prompt.build(), "\n\nHuman: Hello, Claude!\n\nAssistant:");
    }

    #[test]
    fn test_multi_turn_framing() {
        let prompt = Prompt::human("What is 2+2?")
            .with_assistant("4.")
            .with_human("And 3+3?");
        assert_eq!(
            prompt.build(),
            "\n\nHuman: What is 2+2?\n\nAssistant: 4.\n\nHuman: And 3+3?\n\nAssistant:"
        );
    }

    #[test]
    fn test_from_str() {
        let prompt: Prompt = "Hello".into();
        assert_eq!(prompt.build(), "\n\nHuman: Hello\n\nAssistant:");
    }
}
