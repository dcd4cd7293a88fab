use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::Mode;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateRequest {
    /// Capped at 100 chars, which keeps every fallback idea under the idea length cap.
    #[serde(default, alias = "topic")]
    #[validate(
        required(message = "Missing prompt"),
        length(max = 100, message = "Prompt must be at most 100 characters")
    )]
    pub prompt: Option<String>,
    /// Left untyped so a non-string mode degrades to blog instead of failing the request.
    #[serde(default)]
    pub mode: Option<serde_json::Value>,
}

impl GenerateRequest {
    /// Trims the topic. Blank topics count as missing.
    pub fn normalized(mut self) -> Self {
        self.prompt = self
            .prompt
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map(Mode::resolve)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub ideas: Vec<String>,
}
