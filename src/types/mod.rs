//! Data structures exchanged with the platform APIs.
//!
//! Field names mirror the platform's JSON exactly. Loosely shaped reporting
//! endpoints (stats, analytics breakdowns) are surfaced as
//! [`serde_json::Value`] by their services instead of brittle structs.

pub mod agents;
pub mod api_keys;
pub mod auth;
pub mod credits;
pub mod health;
pub mod notifications;
pub mod rag;
pub mod sessions;
pub mod stt;
pub mod tts;
pub mod usage;
pub mod users;
pub mod voices;

pub use agents::*;
pub use api_keys::*;
pub use auth::*;
pub use credits::*;
pub use health::*;
pub use notifications::*;
pub use rag::*;
pub use sessions::*;
pub use stt::*;
pub use tts::*;
pub use usage::*;
pub use users::*;
pub use voices::*;
