//! # NIETBot Brain
//!
//! Two steps per question, no state between requests:
//!
//! ```text
//! "What is the bus fee?"
//!   ↓ IntentDetector (nearest training question, Ratcliff/Obershelp ratio)
//! fees_query
//!   ↓ AnswerResolver (keyword sub-branch "bus" → handbook.fee_structure.bus_fee)
//! "Bus Fees per year: ..."
//! ```

pub mod detector;
pub mod resolver;
pub mod similarity;

pub use detector::{Detection, IntentDetector};
pub use resolver::AnswerResolver;
