mod async_client;

pub use async_client::{Client, ClientBuilder, DEFAULT_BASE_URL};
