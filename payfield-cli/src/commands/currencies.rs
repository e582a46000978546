use anyhow::bail;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Table};
use payfield_core::currency::{self, FallbackRegistry};

#[derive(Debug, Args)]
pub struct CurrenciesArgs {
    /// Show a single currency's metadata instead of the full listing.
    #[arg(long)]
    pub code: Option<String>,
}

pub fn run(args: &CurrenciesArgs, json: bool) -> anyhow::Result<bool> {
    let registry = FallbackRegistry;

    if let Some(code) = &args.code {
        let Some(info) = currency::currency_by_code(&registry, code) else {
            bail!("unknown currency code '{code}'");
        };
        if json {
            println!("{}", serde_json::to_string(&info)?);
        } else {
            println!("{}", info.display_name);
            println!("symbol: {}", info.symbol);
            println!("numeric code: {}", info.numeric_code);
            println!("fraction digits: {}", info.default_fraction_digits);
        }
        return Ok(true);
    }

    let currencies = currency::all_currencies(&registry);
    if json {
        println!("{}", serde_json::to_string(&currencies)?);
        return Ok(true);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Code", "Name", "Symbol", "Numeric", "Digits"]);
    for info in &currencies {
        table.add_row([
            info.code.clone(),
            info.name.clone(),
            info.symbol.clone(),
            info.numeric_code.to_string(),
            info.default_fraction_digits.to_string(),
        ]);
    }
    println!("{table}");
    Ok(true)
}
