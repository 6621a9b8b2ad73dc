//! CLI for the strictkit helpers.
//!
//! Global flags form a `ConfigOptions`; `wait` runs its delay through the
//! retrying runner under those options.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;
use strictkit_core::{ConfigOptions, Outcome, StrictkitError, StrictkitResult};
use strictkit_utils::{delay, example_function, is_not_empty, try_run_with_options, ValueHolder};

#[derive(Parser, Debug)]
#[command(name = "strictkit", version, about = "String, result and timer helpers")]
struct Cli {
    #[command(flatten)]
    options: OptionArgs,

    /// Print the resolved options as JSON before running the command.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct OptionArgs {
    /// Accepts `1`/`0`, `yes`/`no`, `on`/`off` and `true`/`false` from the env.
    #[arg(
        long,
        global = true,
        env = "STRICTKIT_DEBUG",
        action = ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    debug: bool,

    /// Per-attempt timeout in milliseconds; 0 disables it.
    #[arg(long, global = true, env = "STRICTKIT_TIMEOUT_MS", default_value_t = 1_000)]
    timeout: u64,

    #[arg(long, global = true, env = "STRICTKIT_RETRIES", default_value_t = 0)]
    retries: u32,
}

impl From<&OptionArgs> for ConfigOptions {
    fn from(args: &OptionArgs) -> Self {
        ConfigOptions::new(args.debug, args.timeout, args.retries)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Uppercase the input.
    Upper { input: String },

    /// Report whether the value has any non-whitespace character.
    Check { value: String },

    /// Sleep for the given number of milliseconds.
    Wait {
        #[arg(long)]
        ms: u64,
    },

    /// Print the JSON form of a success or failure outcome.
    Outcome {
        /// JSON payload of a successful outcome.
        #[arg(long, conflicts_with = "error", required_unless_present = "error")]
        data: Option<String>,

        /// Message of a failed outcome.
        #[arg(long)]
        error: Option<String>,
    },

    /// Store a value (optionally replacing it) and print it uppercased.
    Holder {
        initial: String,

        #[arg(long)]
        set: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = ConfigOptions::from(&cli.options);

    let default_filter = if options.debug() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout();
    match run(cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Executes one parsed command, writing its result to `out`.
async fn run<W: Write>(cli: Cli, out: &mut W) -> StrictkitResult<()> {
    let options = ConfigOptions::from(&cli.options);

    if cli.json {
        writeln!(out, "{}", serde_json::to_string(&options).map_err(json_error)?)?;
    }

    match cli.command {
        Commands::Upper { input } => {
            writeln!(out, "{}", example_function(&input))?;
        }
        Commands::Check { value } => {
            writeln!(out, "{}", is_not_empty(&value))?;
        }
        Commands::Wait { ms } => {
            let t0 = Instant::now();
            tracing::info!(ms, timeout_ms = options.timeout(), "waiting");

            let op = move || async move {
                delay(ms).await;
                Ok::<_, StrictkitError>(ms)
            };
            let result = try_run_with_options(&options, &op).await;

            tracing::info!(
                elapsed_ms = t0.elapsed().as_millis() as u64,
                success = result.is_ok(),
                "wait finished"
            );
            let outcome = match &result {
                Ok(waited) => Outcome::success(*waited),
                Err(e) => Outcome::failure(e.to_string()),
            };
            writeln!(out, "{}", serde_json::to_string(&outcome).map_err(json_error)?)?;
            result?;
        }
        Commands::Outcome { data, error } => {
            let outcome: Outcome<serde_json::Value> = match (data, error) {
                (Some(raw), _) => {
                    let value = serde_json::from_str(&raw).map_err(|e| {
                        StrictkitError::Serialization(format!("invalid --data JSON: {e}"))
                    })?;
                    Outcome::success(value)
                }
                (None, Some(message)) => Outcome::failure(message),
                (None, None) => {
                    return Err(StrictkitError::InvalidInput(
                        "one of --data or --error is required".into(),
                    ))
                }
            };
            writeln!(out, "{}", serde_json::to_string(&outcome).map_err(json_error)?)?;
        }
        Commands::Holder { initial, set } => {
            let mut holder = ValueHolder::new(initial);
            if let Some(next) = set {
                tracing::debug!(from = holder.raw(), to = %next, "replacing value");
                holder.set_value(next);
            }
            writeln!(out, "{}", holder.value())?;
        }
    }

    Ok(())
}

fn json_error(e: serde_json::Error) -> StrictkitError {
    StrictkitError::Serialization(e.to_string())
}
