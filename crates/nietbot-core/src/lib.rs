//! # NIETBot Core
//!
//! Types shared by every NIETBot crate: the closed intent vocabulary,
//! the chat result returned to callers, configuration and the error type.

pub mod config;
pub mod error;
pub mod types;

pub use config::NietBotConfig;
pub use error::{NietBotError, Result};
pub use types::{Answer, ChatResult, IntentLabel};
