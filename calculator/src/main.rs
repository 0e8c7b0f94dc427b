//! Calculator binary entry point
//!
//! A terminal rendering surface: it forwards user events (operand edits, Add,
//! Subtract, Clear) into the calculator and prints the screen state back.

use std::sync::Arc;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tokio::sync::Mutex;

use calculator::session::{render, run_session};
use calculator::{
    Calculator, CalculatorConfig, CalculatorResult, OperationKind, Phase, RealArithmeticClient,
};
use shared::{logging, process_debug, process_error, process_info, process_warn, ProcessId};

#[derive(Parser)]
#[command(name = "calculator")]
#[command(about = "Add or subtract numbers and simple fractions using the arithmetic service")]
struct Args {
    /// Arithmetic service base URL (overrides CALCULATOR_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides CALCULATOR_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print the screen state as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Add two operands and exit
    Add {
        #[arg(default_value = "", allow_hyphen_values = true)]
        num1: String,
        #[arg(default_value = "", allow_hyphen_values = true)]
        num2: String,
    },
    /// Subtract the second operand from the first and exit
    Subtract {
        #[arg(default_value = "", allow_hyphen_values = true)]
        num1: String,
        #[arg(default_value = "", allow_hyphen_values = true)]
        num2: String,
    },
    /// Line-oriented session keeping one screen open
    Interactive,
}

fn load_config(args: &Args) -> CalculatorResult<CalculatorConfig> {
    let mut config = CalculatorConfig::from_env()?;
    if let Some(url) = &args.api_url {
        config = config.with_base_url(url)?;
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout_secs(secs)?;
    }
    if let Some(level) = &args.log_level {
        config = config.with_log_level(level.clone());
    }
    Ok(config)
}

async fn run_once(
    process_id: &ProcessId,
    calculator: &Calculator<RealArithmeticClient>,
    kind: OperationKind,
    num1: String,
    num2: String,
    json: bool,
) -> anyhow::Result<Phase> {
    calculator.set_num1_text(num1).await;
    calculator.set_num2_text(num2).await;
    let phase = calculator.perform_operation(kind).await;

    let state = calculator.snapshot().await;
    println!("{}", render(&state, json)?);
    if phase == Phase::Error {
        process_warn!(
            process_id,
            "{} did not produce a result: {}",
            kind,
            state.display_error().unwrap_or_default()
        );
    }
    Ok(phase)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let process_id = match args.command {
        None | Some(Command::Interactive) => ProcessId::init_interactive(),
        Some(_) => ProcessId::init_one_shot(),
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            logging::init_tracing_with_level(args.log_level.as_deref());
            logging::log_error(process_id, "loading configuration", &e);
            return Err(e.into());
        }
    };

    logging::init_tracing_with_level(Some(&config.log_level));
    process_debug!(process_id, "Arithmetic service at {}", config.base_url);

    let calculator = Arc::new(Calculator::new(RealArithmeticClient::new(config)?));

    match args.command.unwrap_or(Command::Interactive) {
        Command::Add { num1, num2 } => {
            let phase =
                run_once(process_id, &calculator, OperationKind::Add, num1, num2, args.json).await?;
            if phase == Phase::Error {
                std::process::exit(1);
            }
        }
        Command::Subtract { num1, num2 } => {
            let phase =
                run_once(process_id, &calculator, OperationKind::Subtract, num1, num2, args.json)
                    .await?;
            if phase == Phase::Error {
                std::process::exit(1);
            }
        }
        Command::Interactive => {
            logging::log_startup(process_id, "interactive calculator session");
            let input = BufReader::new(tokio::io::stdin());
            let output = Arc::new(Mutex::new(tokio::io::stdout()));

            if let Err(e) = run_session(calculator, input, output, args.json).await {
                process_error!(process_id, "Session ended abnormally: {}", e);
                return Err(e.into());
            }
            logging::log_shutdown(process_id, "input closed");
        }
    }

    process_info!(process_id, "Calculator finished");
    Ok(())
}
