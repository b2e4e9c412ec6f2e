//! Opt-in transport wrappers. These sit beneath the client's auth protocol:
//! a replayed attempt is indistinguishable from the first attempt as far as
//! token handling is concerned.

pub mod retry;

pub use retry::{Retry, RetryConfig};
