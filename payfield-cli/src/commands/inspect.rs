use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use payfield_core::{app_name, mcc, note, reference};
use serde_json::json;

#[derive(Debug, Subcommand)]
pub enum InspectCommand {
    /// Classify a transaction reference.
    Classify(ClassifyArgs),
    /// Resolve a merchant category code to its category.
    MccCategory(MccArgs),
    /// Character/word/line summary for a length-limited field.
    CharInfo(CharInfoArgs),
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    pub value: String,
}

#[derive(Debug, Args)]
pub struct MccArgs {
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextField {
    Note,
    AppName,
}

#[derive(Debug, Args)]
pub struct CharInfoArgs {
    #[arg(value_enum)]
    pub field: TextField,
    pub text: String,
}

pub fn run(command: &InspectCommand, json: bool) -> anyhow::Result<bool> {
    match command {
        InspectCommand::Classify(args) => {
            let canonical = reference::format(&args.value);
            let reference_type = reference::classify(&canonical);
            if json {
                println!(
                    "{}",
                    json!({
                        "referenceType": reference_type,
                        "description": reference_type.description(),
                    })
                );
            } else {
                println!("{}", reference_type.description());
            }
            Ok(true)
        }
        InspectCommand::MccCategory(args) => match mcc::category(&args.code) {
            Some(category) => {
                if json {
                    println!("{}", json!({ "code": args.code, "category": category }));
                } else {
                    println!("{category}");
                }
                Ok(true)
            }
            None => {
                if json {
                    println!("{}", json!({ "code": args.code, "category": null }));
                } else {
                    println!("{}", "no category (invalid code)".red());
                }
                Ok(false)
            }
        },
        InspectCommand::CharInfo(args) => {
            let info = match args.field {
                TextField::Note => note::character_info(&args.text),
                TextField::AppName => app_name::character_info(&args.text),
            };
            if json {
                println!("{}", serde_json::to_string(&info)?);
            } else {
                println!(
                    "{} chars, {} words, {} remaining{}",
                    info.character_count,
                    info.word_count,
                    info.remaining_chars,
                    if info.is_near_limit {
                        " (near limit)"
                    } else {
                        ""
                    }
                );
            }
            Ok(true)
        }
    }
}
