//! Calculator trait definitions for dependency injection

use async_trait::async_trait;

use crate::error::CalculatorResult;
use crate::types::OperationRequest;

/// Remote arithmetic service performing the actual computation
#[mockall::automock]
#[async_trait]
pub trait ArithmeticService: Send + Sync {
    /// Send a validated request and return the numeric result.
    ///
    /// Fails with `Transport`/`HttpStatus` when the call does not complete
    /// successfully and with `ResponseFormat` when the body carries no
    /// numeric result.
    async fn compute(&self, request: OperationRequest) -> CalculatorResult<f64>;
}
