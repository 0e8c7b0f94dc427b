//! Line-oriented rendering surface
//!
//! Reads user events one per line and forwards them into a [`Calculator`].
//! Operations run as spawned tasks so the session keeps reading edits while a
//! request is in flight; each task prints the screen once its operation
//! settles. Pressing add twice issues two requests.

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::debug;

use shared::OperationKind;
use crate::calculator_impl::Calculator;
use crate::error::{CalculatorError, CalculatorResult};
use crate::traits::ArithmeticService;
use crate::types::{OperandField, ScreenState};

pub const HELP: &str = "commands: 1 <text> | 2 <text> | add | sub | clear | show | help | quit";

/// User events understood by the session
#[derive(Debug, PartialEq)]
pub enum SurfaceCommand {
    /// Operand text with surrounding whitespace removed; use the library
    /// setters to store text verbatim
    SetOperand(OperandField, String),
    Operate(OperationKind),
    Clear,
    Show,
    Help,
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<SurfaceCommand, String> {
    let trimmed = line.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match head.to_lowercase().as_str() {
        "1" => Ok(SurfaceCommand::SetOperand(OperandField::First, rest.to_string())),
        "2" => Ok(SurfaceCommand::SetOperand(OperandField::Second, rest.to_string())),
        "clear" | "c" => Ok(SurfaceCommand::Clear),
        "show" | "" => Ok(SurfaceCommand::Show),
        "help" | "?" => Ok(SurfaceCommand::Help),
        "quit" | "exit" | "q" => Ok(SurfaceCommand::Quit),
        other => other
            .parse::<OperationKind>()
            .map(SurfaceCommand::Operate)
            .map_err(|_| format!("unknown command '{}' ({})", other, HELP)),
    }
}

/// Render the screen as text lines, or as one JSON object
pub fn render(state: &ScreenState, json: bool) -> CalculatorResult<String> {
    if json {
        return serde_json::to_string(state).map_err(|e| CalculatorError::Serialization {
            message: e.to_string(),
        });
    }

    let mut lines = vec![format!(
        "[{}] [{}]",
        state.operand_text(OperandField::First),
        state.operand_text(OperandField::Second)
    )];
    if let Some(error) = state.display_error() {
        lines.push(error.to_string());
    }
    if let Some(result) = state.display_result() {
        lines.push(result);
    }
    Ok(lines.join("\n"))
}

async fn write_line<W>(output: &Mutex<W>, text: &str) -> CalculatorResult<()>
where
    W: AsyncWrite + Unpin,
{
    let mut out = output.lock().await;
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

async fn show<S, W>(calculator: &Calculator<S>, output: &Mutex<W>, json: bool) -> CalculatorResult<()>
where
    S: ArithmeticService,
    W: AsyncWrite + Unpin,
{
    let rendered = render(&calculator.snapshot().await, json)?;
    write_line(output, &rendered).await
}

/// Run a session until input ends or the user quits.
///
/// Operations still in flight at that point are awaited before returning.
pub async fn run_session<S, R, W>(
    calculator: Arc<Calculator<S>>,
    input: R,
    output: Arc<Mutex<W>>,
    json: bool,
) -> CalculatorResult<()>
where
    S: ArithmeticService + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let mut lines = input.lines();
    let mut in_flight = JoinSet::new();

    write_line(&output, HELP).await?;
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(SurfaceCommand::SetOperand(field, text)) => {
                calculator.set_operand_text(field, text).await;
            }
            Ok(SurfaceCommand::Operate(kind)) => {
                let calculator = Arc::clone(&calculator);
                let output = Arc::clone(&output);
                in_flight.spawn(async move {
                    calculator.perform_operation(kind).await;
                    show(&calculator, &output, json).await
                });
            }
            Ok(SurfaceCommand::Clear) => {
                calculator.clear_all().await;
                show(&calculator, &output, json).await?;
            }
            Ok(SurfaceCommand::Show) => show(&calculator, &output, json).await?,
            Ok(SurfaceCommand::Help) => write_line(&output, HELP).await?,
            Ok(SurfaceCommand::Quit) => break,
            Err(message) => write_line(&output, &message).await?,
        }
    }

    debug!(pending = in_flight.len(), "Input closed, waiting for operations in flight");
    while let Some(done) = in_flight.join_next().await {
        done??;
    }
    Ok(())
}
