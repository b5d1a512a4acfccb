//! Labeled example questions.

use nietbot_core::{IntentLabel, NietBotError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One labeled question from the training document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    pub question: String,
    pub intent: IntentLabel,
}

#[derive(Deserialize)]
struct RawExample {
    question: String,
    intent: String,
}

/// Ordered, non-empty sequence of training examples.
#[derive(Debug, Clone)]
pub struct TrainingCorpus {
    examples: Vec<TrainingExample>,
}

impl TrainingCorpus {
    /// Build a corpus from already-labeled examples.
    pub fn new(examples: Vec<TrainingExample>) -> Result<Self> {
        if examples.is_empty() {
            return Err(NietBotError::Corpus("training corpus is empty".into()));
        }
        Ok(Self { examples })
    }

    /// Parse a JSON array of `{"question", "intent"}` records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<RawExample> = serde_json::from_str(json)
            .map_err(|e| NietBotError::Corpus(format!("Failed to parse training questions: {e}")))?;

        let examples = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| {
                let intent = r.intent.parse::<IntentLabel>().map_err(|e| {
                    NietBotError::Corpus(format!("example #{i} ({:?}): {e}", r.question))
                })?;
                Ok(TrainingExample {
                    question: r.question,
                    intent,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(examples)
    }

    /// Load the corpus from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NietBotError::Corpus(format!("Failed to read {}: {e}", path.display()))
        })?;
        let corpus = Self::from_json_str(&content)?;
        tracing::info!(
            "📚 Training corpus loaded: {} examples from {}",
            corpus.len(),
            path.display()
        );
        Ok(corpus)
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Number of examples per intent, in vocabulary order.
    pub fn intent_counts(&self) -> BTreeMap<IntentLabel, usize> {
        let mut counts = BTreeMap::new();
        for ex in &self.examples {
            *counts.entry(ex.intent).or_insert(0) += 1;
        }
        counts
    }
}
