mod commands;

use clap::{Parser, Subcommand};

use commands::{currencies, generate, inspect, validate};

#[derive(Debug, Parser)]
#[command(name = "payfield", version, about = "Payment-request field toolkit")]
struct Cli {
    /// Emit machine-readable JSON instead of operator output.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a field value and report the diagnostic.
    Validate(validate::ValidateArgs),
    /// Print the canonical form of a field value.
    Format(validate::FormatArgs),
    /// Generate a secure transaction ID or reference.
    #[command(subcommand)]
    Generate(generate::GenerateCommand),
    /// Classification, category, and character-count lookups.
    #[command(subcommand)]
    Inspect(inspect::InspectCommand),
    /// List known currencies or show one currency's metadata.
    Currencies(currencies::CurrenciesArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitCode {
    Success = 0,
    ValidationError = 1,
    UsageError = 2,
}

impl ExitCode {
    const fn as_i32(self) -> i32 {
        self as i32
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let valid = match &cli.command {
        Commands::Validate(args) => validate::run(args, cli.json)?,
        Commands::Format(args) => validate::run_format(args, cli.json)?,
        Commands::Generate(command) => generate::run(command, cli.json)?,
        Commands::Inspect(command) => inspect::run(command, cli.json)?,
        Commands::Currencies(args) => currencies::run(args, cli.json)?,
    };

    Ok(if valid {
        ExitCode::Success
    } else {
        ExitCode::ValidationError
    })
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(ExitCode::UsageError.as_i32());
        }
    }
}
