//! CLI Adapter.

mod step_args;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::AppError;
use step_args::StepArgs;

#[derive(Parser)]
#[command(name = "twrun")]
#[command(version)]
#[command(
    about = "Compile TestWeaver build-step options into a command line and run it",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, launch TestWeaver and stream its output
    #[clap(visible_alias = "r")]
    Run {
        #[command(flatten)]
        step: StepArgs,
    },
    /// Print the generated shell command without running it
    #[clap(visible_alias = "c")]
    Compile {
        #[command(flatten)]
        step: StepArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Report every validation error in the step
    Check {
        #[command(flatten)]
        step: StepArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Run { step } => run_step(step).map(|_| 0),
        Commands::Compile { step, format } => run_compile(step, format).map(|_| 0),
        Commands::Check { step } => run_check(step),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run_step(step: StepArgs) -> Result<(), AppError> {
    let resolved = step.resolve()?;
    crate::app::api::run(&resolved.request, resolved.weaver_home)?;
    Ok(())
}

fn run_compile(step: StepArgs, format: OutputFormat) -> Result<(), AppError> {
    let resolved = step.resolve()?;
    let command = crate::app::api::compile(&resolved.request, resolved.weaver_home)?;
    match format {
        OutputFormat::Text => println!("{}", command.script()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&command)
                .map_err(|e| AppError::config_error(format!("Failed to serialize command: {}", e)))?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_check(step: StepArgs) -> Result<i32, AppError> {
    let resolved = step.resolve()?;
    let errors = crate::app::api::check(&resolved.request);
    if errors.is_empty() {
        println!("✅ Step configuration is valid");
        return Ok(0);
    }
    for error in errors.iter() {
        println!("{}", error);
    }
    Ok(1)
}
