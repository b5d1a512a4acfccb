//! # NIETBot Agent
//!
//! Owns the loaded corpus and handbook and answers one message at a time.
//! Everything is read-only after [`Agent::new`], so a single `Arc<Agent>`
//! can serve any number of concurrent requests without locking.

use std::sync::Arc;

use nietbot_brain::{AnswerResolver, Detection, IntentDetector};
use nietbot_core::{ChatResult, NietBotConfig, Result};
use nietbot_knowledge::{Handbook, TrainingCorpus};

pub struct Agent {
    detector: IntentDetector,
    resolver: AnswerResolver,
    corpus: TrainingCorpus,
}

impl Agent {
    /// Load corpus and handbook from the configured paths.
    /// Any load or validation failure is returned; the caller must not serve.
    pub fn new(config: &NietBotConfig) -> Result<Self> {
        config.validate()?;
        let corpus = TrainingCorpus::load(&config.data.training_path())?;
        let handbook = Handbook::load(&config.data.handbook_path())?;
        let agent = Self::from_parts(
            corpus,
            handbook,
            config.matcher.threshold,
            &config.institution,
        );
        tracing::info!(
            "✅ Agent ready ({} examples, threshold {:.2})",
            agent.example_count(),
            agent.detector.threshold()
        );
        Ok(agent)
    }

    pub fn from_parts(
        corpus: TrainingCorpus,
        handbook: Handbook,
        threshold: f64,
        institution: &str,
    ) -> Self {
        Self {
            detector: IntentDetector::new(&corpus, threshold),
            resolver: AnswerResolver::new(Arc::new(handbook), institution),
            corpus,
        }
    }

    /// Answer one chat message.
    pub fn process_chat(&self, message: &str) -> ChatResult {
        let intent = self.detector.detect(message);
        let answer = self.resolver.resolve_answer(intent, &message.to_lowercase());
        ChatResult::new(answer, intent)
    }

    /// Detection details for a message, without rendering an answer.
    pub fn explain(&self, message: &str) -> Detection {
        self.detector.detect_detailed(message)
    }

    pub fn detector(&self) -> &IntentDetector {
        &self.detector
    }

    pub fn corpus(&self) -> &TrainingCorpus {
        &self.corpus
    }

    pub fn example_count(&self) -> usize {
        self.corpus.len()
    }
}
