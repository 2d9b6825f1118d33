use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum AccrualError {
    #[error("invalid principal: {amount} (must be greater than zero)")]
    InvalidPrincipal {
        amount: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid date range: end date {end} must be after start date {start}")]
    InvalidDateRange {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("rate table {name} has no entries")]
    EmptyRateTable {
        name: String,
    },

    #[error("rate table {name} has more than one entry effective from {date}")]
    DuplicateEffectiveDate {
        name: String,
        date: NaiveDate,
    },

    #[error("rate table {name} has a negative rate {rate_percent}% effective from {date}")]
    NegativeRate {
        name: String,
        date: NaiveDate,
        rate_percent: rust_decimal::Decimal,
    },

    #[error("unknown rate table: {key}")]
    UnknownRateTable {
        key: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl AccrualError {
    pub(crate) fn invalid_principal(amount: Money) -> Self {
        AccrualError::InvalidPrincipal {
            amount: amount.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AccrualError>;
