use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;

use crate::calculators::{InterestCalculator, InterestReport};
use crate::config::CalculatorConfig;
use crate::decimal::Money;
use crate::errors::{AccrualError, Result};
use crate::interest::RoundingPolicy;
use crate::types::{RateTable, RateTableKey};

/// interest on overdue tax
///
/// Totals are rounded to whole currency units and not collected at all
/// below the de-minimis threshold.
#[derive(Debug, Clone)]
pub struct TaxArrearsCalculator {
    table: RateTable,
    policy: RoundingPolicy,
}

impl TaxArrearsCalculator {
    pub fn new(table: RateTable) -> Self {
        Self {
            table,
            policy: RoundingPolicy::tax_arrears(),
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Result<Self> {
        let table = config.rate_tables.get(RateTableKey::TaxArrears)?.clone();
        Ok(Self {
            table,
            policy: config.tax_arrears_policy(),
        })
    }

    /// override the rounding policy
    pub fn with_policy(mut self, policy: RoundingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// interest for tax due on `due_date` and paid on `payment_date`
    pub fn calculate(&self, principal: Money, due_date: NaiveDate, payment_date: NaiveDate) -> Result<InterestReport> {
        self.calculate_with(RateTableKey::TaxArrears, principal, due_date, payment_date)
    }

    /// interest for tax due on `due_date` and still unpaid today
    pub fn calculate_until_today(&self, principal: Money, due_date: NaiveDate, time: &SafeTimeProvider) -> Result<InterestReport> {
        self.calculate_with_clock(RateTableKey::TaxArrears, principal, due_date, time)
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }
}

impl InterestCalculator for TaxArrearsCalculator {
    fn rate_table(&self, key: RateTableKey) -> Result<&RateTable> {
        match key {
            RateTableKey::TaxArrears => Ok(&self.table),
            other => Err(AccrualError::UnknownRateTable {
                key: other.to_string(),
            }),
        }
    }

    fn rounding_policy(&self) -> RoundingPolicy {
        self.policy
    }
}
