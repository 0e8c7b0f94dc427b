//! HTTP client for the remote arithmetic service

use std::time::Instant;
use async_trait::async_trait;
use tracing::debug;

use shared::{OperationForm, OperationReply};
use crate::config::CalculatorConfig;
use crate::error::{CalculatorError, CalculatorResult};
use crate::traits::ArithmeticService;
use crate::types::OperationRequest;

/// Real arithmetic service client posting form-encoded operands over HTTP
pub struct RealArithmeticClient {
    client: reqwest::Client,
    config: CalculatorConfig,
}

impl RealArithmeticClient {
    /// Create a client for the configured service
    pub fn new(config: CalculatorConfig) -> CalculatorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CalculatorError::Config {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ArithmeticService for RealArithmeticClient {
    async fn compute(&self, request: OperationRequest) -> CalculatorResult<f64> {
        let url = self.config.endpoint_url(request.kind);
        let form = OperationForm::new(request.num1, request.num2);
        let request_start = Instant::now();

        let response = self
            .client
            .post(url.clone())
            .form(&form)
            .send()
            .await
            .map_err(|e| CalculatorError::Transport { message: e.to_string() })?;

        let status = response.status();
        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = request_start.elapsed().as_millis() as u64,
            "Arithmetic service responded"
        );

        if !status.is_success() {
            return Err(CalculatorError::HttpStatus { status: status.as_u16() });
        }

        // A body that dies mid-read is still a transport problem
        let body = response
            .text()
            .await
            .map_err(|e| CalculatorError::Transport { message: e.to_string() })?;

        let reply = OperationReply::from_json(&body)?;
        Ok(reply.numeric_result()?)
    }
}
