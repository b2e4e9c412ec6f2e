use serde::Deserialize;

/// Platform capacity and liveness snapshot returned by `GET health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub memory_available_mb: f64,
    pub process_cpu_usage: f64,
    pub process_memory_mb: f64,
    pub active_workers: u64,
    pub pending_workers: u64,
    pub max_workers: u64,
    pub active_rooms: u64,
    pub uptime_seconds: f64,
    pub error_rate: f64,
    pub is_accepting_new_workers: bool,
}
