//! Calculator orchestrator with dependency injection
//!
//! Owns one [`ScreenState`] and drives the validate → call → settle lifecycle
//! of every arithmetic operation. Operand edits never validate and never
//! change the phase; a stale result or error stays visible until the next
//! operation or `clear_all`.
//!
//! The state lock is released while the remote call is in flight, so inputs
//! stay editable and overlapping operations are possible. Overlapping
//! operations are neither coalesced nor cancelled: whichever response settles
//! last decides what the screen shows.

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use shared::OperationKind;
use crate::core::{validate_operands, INVALID_INPUT_MESSAGE, SERVICE_FAILURE_MESSAGE};
use crate::error::CalculatorResult;
use crate::state::{create_shared_state, SharedScreenState};
use crate::traits::ArithmeticService;
use crate::types::{OperandField, OperationRequest, Phase, ScreenState};

/// Calculator screen orchestrator
pub struct Calculator<S>
where
    S: ArithmeticService,
{
    state: SharedScreenState,
    service: S,
}

impl<S> Calculator<S>
where
    S: ArithmeticService,
{
    /// Create a calculator with a freshly mounted screen state
    pub fn new(service: S) -> Self {
        Self {
            state: create_shared_state(ScreenState::new()),
            service,
        }
    }

    pub async fn set_num1_text(&self, text: impl Into<String>) {
        self.set_operand_text(OperandField::First, text).await;
    }

    pub async fn set_num2_text(&self, text: impl Into<String>) {
        self.set_operand_text(OperandField::Second, text).await;
    }

    /// Replace the raw text of one operand verbatim
    pub async fn set_operand_text(&self, field: OperandField, text: impl Into<String>) {
        let mut state = self.state.write().await;
        match field {
            OperandField::First => state.num1_text = text.into(),
            OperandField::Second => state.num2_text = text.into(),
        }
    }

    /// Validate both operands, updating the error line.
    ///
    /// Returns `true` and clears the error when every non-empty operand is a
    /// number or fraction. Otherwise shows the validation message, drops any
    /// displayed result and returns `false`.
    pub async fn validate_inputs(&self) -> bool {
        let mut state = self.state.write().await;
        Self::apply_validation(&mut state).is_ok()
    }

    /// Run one arithmetic operation to completion and return the settled phase
    pub async fn perform_operation(&self, kind: OperationKind) -> Phase {
        let operation_id = Uuid::new_v4();
        let span = info_span!("operation", %operation_id, %kind);

        async move {
            let (num1, num2) = {
                let mut state = self.state.write().await;
                match Self::apply_validation(&mut state) {
                    Ok(values) => values,
                    Err(err) => {
                        warn!(error_kind = err.kind(), error = %err, "Operands rejected");
                        return state.phase();
                    }
                }
            };

            let request = OperationRequest::new(kind, num1, num2);
            info!(num1, num2, "Sending operation to arithmetic service");

            let outcome = self.service.compute(request).await;

            let mut state = self.state.write().await;
            match outcome {
                Ok(value) => {
                    info!(result = value, "Operation settled");
                    state.settle_success(value);
                }
                Err(err) => {
                    warn!(error_kind = err.kind(), error = %err, "Arithmetic service call failed");
                    state.settle_failure(SERVICE_FAILURE_MESSAGE);
                }
            }
            state.phase()
        }
        .instrument(span)
        .await
    }

    pub async fn add(&self) -> Phase {
        self.perform_operation(OperationKind::Add).await
    }

    pub async fn subtract(&self) -> Phase {
        self.perform_operation(OperationKind::Subtract).await
    }

    /// Reset the screen to its initial state
    pub async fn clear_all(&self) {
        let mut state = self.state.write().await;
        *state = ScreenState::new();
    }

    /// Copy of the current screen state
    pub async fn snapshot(&self) -> ScreenState {
        self.state.read().await.clone()
    }

    pub async fn phase(&self) -> Phase {
        self.state.read().await.phase()
    }

    fn apply_validation(state: &mut ScreenState) -> CalculatorResult<(f64, f64)> {
        match validate_operands(&state.num1_text, &state.num2_text) {
            Ok(values) => {
                state.error_message.clear();
                Ok(values)
            }
            Err(err) => {
                state.settle_failure(INVALID_INPUT_MESSAGE);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;
    use crate::traits::MockArithmeticService;

    fn expecting(kind: OperationKind, num1: f64, num2: f64, result: f64) -> MockArithmeticService {
        let mut service = MockArithmeticService::new();
        service
            .expect_compute()
            .withf(move |req| req.kind == kind && req.num1 == num1 && req.num2 == num2)
            .times(1)
            .returning(move |_| Ok(result));
        service
    }

    fn never_called() -> MockArithmeticService {
        let mut service = MockArithmeticService::new();
        service.expect_compute().never();
        service
    }

    fn assert_exclusive(state: &ScreenState) {
        assert!(
            !(state.has_result && !state.error_message.is_empty()),
            "result and error shown together: {state:?}"
        );
    }

    #[tokio::test]
    async fn test_setters_store_text_verbatim() {
        let calculator = Calculator::new(never_called());
        calculator.set_num1_text(" 3/x ").await;
        calculator.set_num2_text("").await;

        let state = calculator.snapshot().await;
        assert_eq!(state.num1_text, " 3/x ");
        assert_eq!(state.num2_text, "");
        assert_eq!(state.error_message, "");
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_validate_inputs_accepts_empty_fields() {
        let calculator = Calculator::new(never_called());
        assert!(calculator.validate_inputs().await);
        assert_eq!(calculator.phase().await, Phase::Idle);
    }

    #[tokio::test]
    async fn test_validate_inputs_rejects_either_field() {
        for (num1, num2) in [("abc", "2"), ("2", "abc"), ("5/0", ""), ("", "1/2/3")] {
            let calculator = Calculator::new(never_called());
            calculator.set_num1_text(num1).await;
            calculator.set_num2_text(num2).await;

            assert!(!calculator.validate_inputs().await);
            let state = calculator.snapshot().await;
            assert_eq!(state.error_message, INVALID_INPUT_MESSAGE);
            assert!(!state.has_result);
        }
    }

    #[tokio::test]
    async fn test_validate_inputs_clears_previous_error() {
        let calculator = Calculator::new(never_called());
        calculator.set_num1_text("x").await;
        assert!(!calculator.validate_inputs().await);

        calculator.set_num1_text("4").await;
        assert!(calculator.validate_inputs().await);
        assert_eq!(calculator.snapshot().await.error_message, "");
    }

    #[tokio::test]
    async fn test_add_success() {
        let calculator = Calculator::new(expecting(OperationKind::Add, 2.0, 3.0, 5.0));
        calculator.set_num1_text("2").await;
        calculator.set_num2_text("3").await;

        assert_eq!(calculator.add().await, Phase::Settled);
        let state = calculator.snapshot().await;
        assert!(state.has_result);
        assert_eq!(state.result, 5.0);
        assert_eq!(state.error_message, "");
    }

    #[tokio::test]
    async fn test_fraction_operand_is_sent_as_decimal() {
        let calculator = Calculator::new(expecting(OperationKind::Add, 1.5, 0.0, 1.5));
        calculator.set_num1_text("3/2").await;
        calculator.set_num2_text("0").await;

        calculator.add().await;
        assert_eq!(calculator.snapshot().await.result, 1.5);
    }

    #[tokio::test]
    async fn test_subtract_success() {
        let calculator = Calculator::new(expecting(OperationKind::Subtract, 5.0, 4.0, 1.0));
        calculator.set_num1_text("5").await;
        calculator.set_num2_text("4").await;

        assert_eq!(calculator.subtract().await, Phase::Settled);
        assert_eq!(calculator.snapshot().await.result, 1.0);
    }

    #[tokio::test]
    async fn test_empty_operands_are_sent_as_zero() {
        let calculator = Calculator::new(expecting(OperationKind::Add, 0.0, 0.0, 0.0));
        assert_eq!(calculator.add().await, Phase::Settled);
        assert_eq!(calculator.snapshot().await.display_result().as_deref(), Some("= 0"));
    }

    #[tokio::test]
    async fn test_invalid_operand_never_reaches_service() {
        let calculator = Calculator::new(never_called());
        calculator.set_num1_text("2/0").await;
        calculator.set_num2_text("5").await;

        assert_eq!(calculator.add().await, Phase::Error);
        let state = calculator.snapshot().await;
        assert_eq!(state.error_message, INVALID_INPUT_MESSAGE);
        assert!(!state.has_result);
    }

    #[tokio::test]
    async fn test_service_failures_collapse_to_one_message() {
        let failures: Vec<fn() -> CalculatorError> = vec![
            || CalculatorError::Transport { message: "connection refused".to_string() },
            || CalculatorError::HttpStatus { status: 500 },
            || CalculatorError::ResponseFormat { message: "no result".to_string() },
        ];

        for failure in failures {
            let mut service = MockArithmeticService::new();
            service.expect_compute().times(1).returning(move |_| Err(failure()));

            let calculator = Calculator::new(service);
            calculator.set_num1_text("2").await;
            calculator.set_num2_text("3").await;

            assert_eq!(calculator.add().await, Phase::Error);
            let state = calculator.snapshot().await;
            assert_eq!(state.error_message, SERVICE_FAILURE_MESSAGE);
            assert!(!state.has_result);
            assert_eq!(state.result, 0.0);
        }
    }

    #[tokio::test]
    async fn test_failure_after_success_hides_result() {
        let mut service = MockArithmeticService::new();
        let mut seq = mockall::Sequence::new();
        service
            .expect_compute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(5.0));
        service
            .expect_compute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(CalculatorError::HttpStatus { status: 503 }));

        let calculator = Calculator::new(service);
        calculator.set_num1_text("2").await;
        calculator.set_num2_text("3").await;

        assert_eq!(calculator.add().await, Phase::Settled);
        assert_eq!(calculator.add().await, Phase::Error);

        let state = calculator.snapshot().await;
        assert_exclusive(&state);
        assert_eq!(state.result, 5.0);
        assert_eq!(state.display_result(), None);
    }

    #[tokio::test]
    async fn test_success_then_invalid_edit() {
        let calculator = Calculator::new(expecting(OperationKind::Add, 2.0, 3.0, 5.0));
        calculator.set_num1_text("2").await;
        calculator.set_num2_text("3").await;
        assert_eq!(calculator.add().await, Phase::Settled);

        calculator.set_num1_text("2/0").await;
        // Editing alone leaves the stale result on screen
        assert_eq!(calculator.phase().await, Phase::Settled);

        assert_eq!(calculator.add().await, Phase::Error);
        let state = calculator.snapshot().await;
        assert_eq!(state.error_message, INVALID_INPUT_MESSAGE);
        assert!(!state.has_result);
    }

    #[tokio::test]
    async fn test_success_after_error_clears_error() {
        let calculator = Calculator::new(expecting(OperationKind::Subtract, 1.0, 0.5, 0.5));
        calculator.set_num1_text("one").await;
        assert_eq!(calculator.subtract().await, Phase::Error);

        calculator.set_num1_text("1").await;
        calculator.set_num2_text("1/2").await;
        assert_eq!(calculator.subtract().await, Phase::Settled);
        assert_exclusive(&calculator.snapshot().await);
    }

    #[tokio::test]
    async fn test_clear_all_is_idempotent() {
        let calculator = Calculator::new(expecting(OperationKind::Add, 2.0, 3.0, 5.0));
        calculator.set_num1_text("2").await;
        calculator.set_num2_text("3").await;
        calculator.add().await;

        calculator.clear_all().await;
        let once = calculator.snapshot().await;
        calculator.clear_all().await;
        let twice = calculator.snapshot().await;

        assert_eq!(once, ScreenState::new());
        assert_eq!(once, twice);
        assert_eq!(twice.phase(), Phase::Idle);
    }
}
