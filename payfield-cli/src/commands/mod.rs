pub mod currencies;
pub mod generate;
pub mod inspect;
pub mod validate;

use colored::Colorize;
use payfield_core::ValidationResult;

/// Prints a validation outcome and reports whether it was valid.
pub fn emit_result(result: &ValidationResult, json: bool) -> anyhow::Result<bool> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else if result.is_valid {
        match result.reference_type {
            Some(reference_type) => {
                println!("{} {}", "valid".green().bold(), reference_type.description())
            }
            None => println!("{}", "valid".green().bold()),
        }
    } else {
        let message = result.error_message.as_deref().unwrap_or("invalid");
        println!("{} {message}", "invalid".red().bold());
    }
    Ok(result.is_valid)
}
