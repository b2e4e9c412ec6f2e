//! High-level platform API services.
//!
//! The primary SDK surface is exposed via service accessors on [`crate::Client`]:
//! `client.auth()`, `client.agents()`, `client.voices()`, and so on. Each
//! service is a thin façade that shapes a request and forwards it to the
//! client's transport core.

pub mod admin;
pub mod agents;
pub mod analytics;
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

pub use admin::*;
pub use agents::*;
pub use analytics::*;
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
