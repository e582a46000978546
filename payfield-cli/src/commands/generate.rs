use anyhow::ensure;
use clap::{Args, Subcommand, ValueEnum};
use payfield_core::generator;
use payfield_core::types::ReferenceFormat;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Alphanumeric12,
    Alphanumeric16,
    Numeric12,
    Timestamped,
    UuidShort,
}

impl From<FormatArg> for ReferenceFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Alphanumeric12 => ReferenceFormat::Alphanumeric12,
            FormatArg::Alphanumeric16 => ReferenceFormat::Alphanumeric16,
            FormatArg::Numeric12 => ReferenceFormat::Numeric12,
            FormatArg::Timestamped => ReferenceFormat::Timestamped,
            FormatArg::UuidShort => ReferenceFormat::UuidShort,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum GenerateCommand {
    /// Generate a secure transaction ID.
    Id(IdArgs),
    /// Generate a secure transaction reference.
    Reference(ReferenceArgs),
}

#[derive(Debug, Args)]
pub struct IdArgs {
    #[arg(long, default_value_t = generator::DEFAULT_ID_LENGTH)]
    pub length: usize,

    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReferenceArgs {
    #[arg(long, value_enum, default_value = "alphanumeric12")]
    pub format: FormatArg,

    #[arg(long)]
    pub prefix: Option<String>,
}

pub fn run(command: &GenerateCommand, json: bool) -> anyhow::Result<bool> {
    // Closed loop: a value is only shown once it re-validates.
    let (value, check) = match command {
        GenerateCommand::Id(args) => {
            let prefix_len = args.prefix.as_deref().map_or(
                generator::DEFAULT_ID_PREFIX.chars().count(),
                |prefix| prefix.chars().count(),
            );
            ensure!(
                args.length > prefix_len,
                "ID length must exceed prefix length"
            );
            let id = generator::generate_id(args.length, args.prefix.as_deref());
            let check = generator::validate_generated_id(&id);
            (id, check)
        }
        GenerateCommand::Reference(args) => {
            let reference =
                generator::generate_reference(args.format.into(), args.prefix.as_deref());
            let check = generator::validate_generated_reference(&reference);
            (reference, check)
        }
    };

    if json {
        println!("{}", json!({ "value": value, "check": check }));
    } else {
        println!("{value}");
    }
    Ok(check.is_valid)
}
