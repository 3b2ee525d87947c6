//! Roadmap generation — prompt build, LLM call, response parsing.
//!
//! The model is asked for JSON but is free to answer with prose, so parsing
//! degrades in stages: fenced ```json block first, then the whole response,
//! and finally a plain-text wrapper object. The request never hard-fails on
//! an unparseable answer.

use serde_json::{json, Value};

use crate::llm_client::{GeminiClient, LlmError};
use crate::roadmap::prompts::ROADMAP_PROMPT_TEMPLATE;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Generates a roadmap from study material. Transport and API errors from
/// the LLM call propagate; parse failures do not.
pub async fn generate_roadmap(client: &GeminiClient, content: &str) -> Result<Value, LlmError> {
    let prompt = ROADMAP_PROMPT_TEMPLATE.replace("{content}", content);
    let text = client.generate(&prompt).await?;
    Ok(parse_roadmap_response(&text))
}

/// Parses model output into a roadmap value.
///
/// If the text contains a ```json fence, the candidate is the substring
/// between the first opening marker and the next closing fence (or the rest
/// of the text when unclosed). Otherwise the whole text is the candidate.
/// The trimmed candidate is parsed as JSON; on failure the raw response is
/// wrapped as `{"roadmap_text": <text>, "format": "text"}`.
pub fn parse_roadmap_response(text: &str) -> Value {
    let candidate = match text.split_once(FENCE_OPEN) {
        Some((_, after)) => after
            .split_once(FENCE_CLOSE)
            .map(|(inner, _)| inner)
            .unwrap_or(after),
        None => text,
    };

    match serde_json::from_str(candidate.trim()) {
        Ok(value) => value,
        Err(_) => json!({ "roadmap_text": text, "format": "text" }),
    }
}
