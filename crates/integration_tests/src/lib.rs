pub mod client;

pub use client::{ApiResponse, TestClient};

/// Test configuration constants
pub mod constants {
    /// Maximum number of retries when waiting for the API to be ready (in seconds)
    pub const API_READY_TIMEOUT_SECONDS: u32 = 30;

    /// Default base URL of the explorer under test, overridden by `API_URL`
    pub const DEFAULT_API_URL: &str = "http://localhost:8000";
}
