//! Test helpers for calculator tests
//!
//! Builds calculators wired to a wiremock arithmetic service and provides the
//! common assertions on screen state.

use std::time::Duration;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use calculator::{Calculator, CalculatorConfig, RealArithmeticClient, ScreenState};

/// Common helper functions for calculator tests
pub struct TestHelpers;

impl TestHelpers {
    /// Calculator talking to the given mock server
    pub fn calculator_for(server: &MockServer) -> Calculator<RealArithmeticClient> {
        let config = CalculatorConfig::default()
            .with_base_url(&server.uri())
            .unwrap()
            .with_timeout_secs(2)
            .unwrap();
        Calculator::new(RealArithmeticClient::new(config).unwrap())
    }

    /// Mount a reply for one exact form body on one endpoint
    pub async fn mount_reply(
        server: &MockServer,
        endpoint: &str,
        form: &str,
        body: serde_json::Value,
        delay: Option<Duration>,
    ) {
        let mut template = ResponseTemplate::new(200).set_body_json(body);
        if let Some(delay) = delay {
            template = template.set_delay(delay);
        }

        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(body_string(form))
            .respond_with(template)
            .expect(1)
            .mount(server)
            .await;
    }

    /// Mount a catch-all expectation that no request arrives at all
    pub async fn expect_no_requests(server: &MockServer) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(server)
            .await;
    }

    /// Set both operands in one go
    pub async fn enter(calculator: &Calculator<RealArithmeticClient>, num1: &str, num2: &str) {
        calculator.set_num1_text(num1).await;
        calculator.set_num2_text(num2).await;
    }

    /// A result and an error are never shown together
    pub fn assert_exclusive(state: &ScreenState) {
        assert!(
            !(state.has_result && !state.error_message.is_empty()),
            "result and error shown together: {state:?}"
        );
    }
}
