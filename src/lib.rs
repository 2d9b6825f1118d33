pub mod calculators;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod types;

// re-export key types
pub use calculators::{
    InterestCalculator, InterestReport, ReportView, StatutoryInterestCalculator,
    TaxArrearsCalculator,
};
pub use config::{CalculatorConfig, RateTableSet};
pub use decimal::{Money, Rate};
pub use errors::{AccrualError, Result};
pub use interest::{compute_accrual, compute_accrual_from_input, RoundedInterest, RoundingPolicy};
pub use types::{
    AccrualPeriodResult, AccrualRequest, AccrualResult, RatePeriod, RateTable, RateTableKey,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
