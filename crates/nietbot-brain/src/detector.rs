//! Intent detection by nearest training question.

use nietbot_core::IntentLabel;
use nietbot_knowledge::TrainingCorpus;

use crate::similarity;

/// Default minimum score for a match to count.
pub const DEFAULT_THRESHOLD: f64 = 0.45;

/// Outcome of one detection, kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// The label returned to the caller (after the threshold is applied).
    pub intent: IntentLabel,
    /// Normalized text of the best-scoring training question, if any scored above 0.
    pub best_match: Option<String>,
    pub score: f64,
}

struct Anchor {
    question: String,
    intent: IntentLabel,
}

/// Scores a query against every training question and picks the closest.
pub struct IntentDetector {
    anchors: Vec<Anchor>,
    threshold: f64,
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl IntentDetector {
    pub fn new(corpus: &TrainingCorpus, threshold: f64) -> Self {
        let anchors = corpus
            .examples()
            .iter()
            .map(|ex| Anchor {
                question: normalize(&ex.question),
                intent: ex.intent,
            })
            .collect();
        Self { anchors, threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Detect the intent of `query`. Never fails; low-confidence queries
    /// resolve to `general_query`.
    pub fn detect(&self, query: &str) -> IntentLabel {
        self.detect_detailed(query).intent
    }

    /// Like [`detect`](Self::detect) but also reports the best match and its score.
    pub fn detect_detailed(&self, query: &str) -> Detection {
        let query = normalize(query);
        let mut best: Option<&Anchor> = None;
        let mut best_score = 0.0;

        for anchor in &self.anchors {
            let score = similarity::ratio(&query, &anchor.question);
            // strict `>` keeps the first of equal maxima
            if score > best_score {
                best_score = score;
                best = Some(anchor);
            }
        }

        let intent = match best {
            Some(anchor) if best_score >= self.threshold => anchor.intent,
            _ => IntentLabel::GeneralQuery,
        };

        tracing::debug!(
            query = %query,
            best_match = best.map(|a| a.question.as_str()).unwrap_or(""),
            score = best_score,
            intent = %intent,
            "intent detected"
        );

        Detection {
            intent,
            best_match: best.map(|a| a.question.clone()),
            score: best_score,
        }
    }

    /// Distinct labels the corpus can produce, plus the fallback.
    pub fn intents(&self) -> Vec<IntentLabel> {
        let mut labels: Vec<IntentLabel> = self.anchors.iter().map(|a| a.intent).collect();
        labels.push(IntentLabel::GeneralQuery);
        labels.sort();
        labels.dedup();
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nietbot_knowledge::TrainingExample;

    const SHIPPED: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../data/niet_training_questions.json"
    ));

    fn shipped() -> IntentDetector {
        let corpus = TrainingCorpus::from_json_str(SHIPPED).unwrap();
        IntentDetector::new(&corpus, DEFAULT_THRESHOLD)
    }

    fn example(question: &str, intent: IntentLabel) -> TrainingExample {
        TrainingExample {
            question: question.into(),
            intent,
        }
    }

    #[test]
    fn test_exact_match_returns_its_intent() {
        let corpus = TrainingCorpus::from_json_str(SHIPPED).unwrap();
        let detector = IntentDetector::new(&corpus, DEFAULT_THRESHOLD);
        for ex in corpus.examples() {
            let d = detector.detect_detailed(&ex.question);
            assert!((d.score - 1.0).abs() < 1e-9, "{:?}", ex.question);
            // the first identical question wins, and the shipped corpus has no duplicates
            assert_eq!(d.intent, ex.intent, "{:?}", ex.question);
        }
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let detector = shipped();
        assert_eq!(
            detector.detect("   WHAT ARE THE HOSTEL RULES?  "),
            IntentLabel::HostelQuery
        );
    }

    #[test]
    fn test_empty_query_is_general() {
        let d = shipped().detect_detailed("");
        assert_eq!(d.intent, IntentLabel::GeneralQuery);
        assert_eq!(d.score, 0.0);
        assert!(d.best_match.is_none());
    }

    #[test]
    fn test_disjoint_query_is_general() {
        assert_eq!(shipped().detect("жжж"), IntentLabel::GeneralQuery);
    }

    #[test]
    fn test_near_match() {
        let d = shipped().detect_detailed("bus fee");
        assert_eq!(d.intent, IntentLabel::FeesQuery);
        assert_eq!(d.best_match.as_deref(), Some("what is the bus fee?"));
    }

    #[test]
    fn test_below_threshold_falls_back() {
        let corpus =
            TrainingCorpus::new(vec![example("library timings", IntentLabel::InfrastructureQuery)])
                .unwrap();
        let detector = IntentDetector::new(&corpus, DEFAULT_THRESHOLD);
        // "library" vs "library timings" => 14/22, above the threshold
        assert_eq!(detector.detect("library"), IntentLabel::InfrastructureQuery);

        let strict = IntentDetector::new(&corpus, 0.9);
        let d = strict.detect_detailed("library");
        assert_eq!(d.intent, IntentLabel::GeneralQuery);
        // the nominal best match is still reported
        assert_eq!(d.best_match.as_deref(), Some("library timings"));
    }

    #[test]
    fn test_first_maximum_wins() {
        let corpus = TrainingCorpus::new(vec![
            example("hostel", IntentLabel::HostelQuery),
            example("hostel", IntentLabel::FeesQuery),
        ])
        .unwrap();
        let detector = IntentDetector::new(&corpus, DEFAULT_THRESHOLD);
        assert_eq!(detector.detect("hostel"), IntentLabel::HostelQuery);
    }

    #[test]
    fn test_always_in_vocabulary() {
        let detector = shipped();
        let known = detector.intents();
        for q in ["", " ", "?", "fees", "hello there", "ЖЖЖ", "what about the gym", "🤖"] {
            let label = detector.detect(q);
            assert!(IntentLabel::ALL.contains(&label));
            assert!(known.contains(&label));
        }
    }

    #[test]
    fn test_intents_listing() {
        let intents = shipped().intents();
        assert_eq!(intents.len(), IntentLabel::ALL.len());
        assert!(intents.contains(&IntentLabel::GeneralQuery));
    }
}
