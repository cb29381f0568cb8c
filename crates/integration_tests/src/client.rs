use anyhow::{Context, Result};
use colored::Colorize;
use reqwest::{Client, Method, header::HeaderMap};
use serde_json::Value;
use std::time::Duration;

/// Default timeout for regular requests. Longer than the explorer's own
/// GraphQL timeout so a slow DefraDB still yields a rendered page.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Short timeout for health check connections (2 seconds)
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// HTTP client for making requests against a running explorer
#[derive(Clone)]
pub struct TestClient {
    base_url: String,
    client: Client,
    health_check_client: Client,
}

impl TestClient {
    /// Create a new test client
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(DEFAULT_REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            health_check_client: Client::builder()
                .timeout(HEALTH_CHECK_TIMEOUT)
                .build()
                .expect("Failed to create health check client"),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::GET, path).await
    }

    /// Make an OPTIONS request
    pub async fn options(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::OPTIONS, path).await
    }

    /// Make a GET request and parse JSON response
    pub async fn get_json(&self, path: &str) -> Result<(reqwest::StatusCode, Value)> {
        let response = self.get(path).await?;
        let json = response.json()?;
        Ok((response.status, json))
    }

    async fn request(&self, method: Method, path: &str) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .request(method.clone(), &url)
            .send()
            .await
            .context(format!("Failed to send {} request to {}", method, url))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(ApiResponse {
            status,
            headers,
            body,
            url,
        })
    }

    /// Wait for the explorer to be ready
    ///
    /// Uses a short timeout for health checks to fail fast when no server is running.
    pub async fn wait_for_ready(&self, max_retries: u32) -> Result<()> {
        println!("Waiting for explorer at {} ...", self.base_url.cyan());

        for i in 0..max_retries {
            let url = format!("{}/v1/health", self.base_url);

            match self.health_check_client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    println!(
                        "{} explorer is ready (took {} seconds)",
                        "ok:".green().bold(),
                        i + 1
                    );
                    return Ok(());
                }
                Ok(response) => {
                    println!(
                        "  Attempt {}/{}: Server returned status {}",
                        i + 1,
                        max_retries,
                        response.status()
                    );
                }
                Err(e) => {
                    let reason = if e.is_connect() {
                        "connection refused"
                    } else if e.is_timeout() {
                        "timeout"
                    } else {
                        "error"
                    };
                    println!("  Attempt {}/{}: {}", i + 1, max_retries, reason);
                }
            }

            if i + 1 < max_retries {
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }

        println!(
            "\n{} Make sure the server is running:",
            "hint:".cyan().bold()
        );
        println!("  cargo run --release --bin block-explorer\n");

        anyhow::bail!(
            "Explorer at {} did not become ready after {} attempts",
            self.base_url,
            max_retries
        )
    }
}

/// Response wrapper
#[derive(Debug)]
pub struct ApiResponse {
    pub status: reqwest::StatusCode,
    pub headers: HeaderMap,
    pub body: String,
    pub url: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Parse the response body as JSON
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body)
            .context(format!("Failed to parse JSON response from {}", self.url))
    }
}
