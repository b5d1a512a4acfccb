//! # NIETBot Gateway
//!
//! HTTP API in front of the chat agent.
//!
//! | method | path      | body                    | response                                 |
//! |--------|-----------|-------------------------|------------------------------------------|
//! | GET    | `/`       |                         | `{"message": "Backend is running fine ✅"}` |
//! | GET    | `/health` |                         | status, version, example count           |
//! | POST   | `/chat`   | `{"message": "..."}`    | `{"answer", "predicted_intent", "options"?}` |

pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
