use anyhow::bail;
use clap::{Args, ValueEnum};
use payfield_core::types::{Origin, ReferenceType};
use payfield_core::{amount, app_id, app_name, currency, mcc, name, note, reference, txid, vpa};
use serde_json::json;

use super::emit_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Vpa,
    Name,
    Mcc,
    TxId,
    Reference,
    Note,
    Amount,
    Currency,
    AppId,
    AppName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OriginArg {
    User,
    Generated,
}

impl From<OriginArg> for Origin {
    fn from(value: OriginArg) -> Self {
        match value {
            OriginArg::User => Origin::UserEntered,
            OriginArg::Generated => Origin::Generated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReferenceTypeArg {
    Upi,
    Bank,
    Imps,
    Neft,
    General,
}

impl From<ReferenceTypeArg> for ReferenceType {
    fn from(value: ReferenceTypeArg) -> Self {
        match value {
            ReferenceTypeArg::Upi => ReferenceType::Upi,
            ReferenceTypeArg::Bank => ReferenceType::Bank,
            ReferenceTypeArg::Imps => ReferenceType::Imps,
            ReferenceTypeArg::Neft => ReferenceType::Neft,
            ReferenceTypeArg::General => ReferenceType::General,
        }
    }
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(value_enum)]
    pub field: Field,
    pub value: String,

    /// Treat the note as mandatory.
    #[arg(long)]
    pub required: bool,

    /// Accept any Unicode letter in names.
    #[arg(long)]
    pub international: bool,

    /// Where the value came from (tx-id and reference fields).
    #[arg(long, value_enum, default_value = "user")]
    pub origin: OriginArg,

    /// Restrict accepted reference classifications.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub allowed_types: Option<Vec<ReferenceTypeArg>>,
}

pub fn run(args: &ValidateArgs, json: bool) -> anyhow::Result<bool> {
    let result = match args.field {
        Field::Vpa => vpa::validate(&args.value),
        Field::Name => name::validate(&args.value, args.international),
        Field::Mcc => mcc::validate(&args.value),
        Field::TxId => txid::validate_with_origin(&args.value, args.origin.into()),
        Field::Reference => match (&args.allowed_types, args.origin) {
            (Some(allowed), OriginArg::User) => {
                let allowed: Vec<ReferenceType> =
                    allowed.iter().map(|&arg| arg.into()).collect();
                reference::validate_with_types(&args.value, Some(&allowed))
            }
            _ => reference::validate_with_origin(&args.value, args.origin.into()),
        },
        Field::Note => note::validate(&args.value, args.required),
        Field::Amount => amount::validate(&args.value),
        Field::Currency => {
            currency::validate_code(&args.value, &currency::FallbackRegistry)
        }
        Field::AppId => app_id::validate(&args.value),
        Field::AppName => app_name::validate(&args.value),
    };

    emit_result(&result, json)
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    #[arg(value_enum)]
    pub field: Field,
    pub value: String,
}

pub fn run_format(args: &FormatArgs, json: bool) -> anyhow::Result<bool> {
    let formatted = match args.field {
        Field::Vpa => vpa::format(&args.value),
        Field::Name => name::format(&args.value),
        Field::Mcc => mcc::format(&args.value),
        Field::TxId => txid::format(&args.value),
        Field::Reference => reference::format(&args.value),
        Field::Note => note::format(&args.value),
        Field::AppName => app_name::format(&args.value),
        Field::Amount | Field::Currency | Field::AppId => {
            bail!("field has no canonical form")
        }
    };

    if json {
        println!("{}", json!({ "formatted": formatted }));
    } else {
        println!("{formatted}");
    }
    Ok(true)
}
