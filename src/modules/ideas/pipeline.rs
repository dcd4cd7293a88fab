use std::sync::Arc;
use std::time::Duration;

use crate::modules::ideas::{
    fallback::fallback_ideas,
    model::{GenerationResult, IdeaSource, Mode},
    parser::parse_ideas,
    prompt::build_instruction,
};
use crate::services::llm::{LlmError, TextGenerator};

/// Topic + mode in, ideas out. Provider trouble of any kind ends in the fallback list.
pub struct IdeaPipeline {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl IdeaPipeline {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub async fn generate(&self, topic: &str, mode: Mode) -> GenerationResult {
        let instruction = build_instruction(topic, mode);

        let raw = match tokio::time::timeout(self.timeout, self.generator.generate(&instruction)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout),
        };

        match raw {
            Ok(text) => {
                let ideas = parse_ideas(&text);
                if ideas.is_empty() {
                    tracing::warn!(mode = mode.as_str(), "Provider reply had no usable ideas, using fallback");
                    return Self::fallback(topic, mode);
                }
                tracing::info!(mode = mode.as_str(), count = ideas.len(), "Parsed ideas from provider");
                GenerationResult {
                    ideas,
                    source: IdeaSource::Provider,
                }
            }
            Err(e) => {
                tracing::warn!(mode = mode.as_str(), error = %e, "Provider call failed, using fallback");
                Self::fallback(topic, mode)
            }
        }
    }

    fn fallback(topic: &str, mode: Mode) -> GenerationResult {
        GenerationResult {
            ideas: fallback_ideas(topic, mode),
            source: IdeaSource::Fallback,
        }
    }
}
