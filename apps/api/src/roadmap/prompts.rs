// Prompts for the roadmap generation call.

/// Single-turn prompt sent to the model; `{content}` is replaced with the
/// extracted or pasted study material verbatim.
pub const ROADMAP_PROMPT_TEMPLATE: &str = "Generate a study roadmap and quizzes for:\n{content}";
