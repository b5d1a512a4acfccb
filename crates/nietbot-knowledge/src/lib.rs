//! # NIETBot Knowledge
//!
//! The two read-only documents the bot answers from:
//! - **Training corpus** — labeled example questions, used as similarity anchors
//! - **Handbook** — the nested knowledge record answers are rendered from
//!
//! Both are loaded and shape-checked once at startup. A document that does
//! not load is a fatal configuration error; nothing is re-read per request.

pub mod corpus;
pub mod handbook;

pub use corpus::{TrainingCorpus, TrainingExample};
pub use handbook::Handbook;
