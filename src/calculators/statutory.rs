use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;

use crate::calculators::{InterestCalculator, InterestReport};
use crate::config::CalculatorConfig;
use crate::decimal::Money;
use crate::errors::{AccrualError, Result};
use crate::interest::RoundingPolicy;
use crate::types::{RateTable, RateTableKey};

/// statutory delay interest, standard or for commercial transactions
#[derive(Debug, Clone)]
pub struct StatutoryInterestCalculator {
    standard: RateTable,
    commercial: RateTable,
}

impl StatutoryInterestCalculator {
    pub fn new(standard: RateTable, commercial: RateTable) -> Self {
        Self { standard, commercial }
    }

    pub fn from_config(config: &CalculatorConfig) -> Result<Self> {
        Ok(Self {
            standard: config.rate_tables.get(RateTableKey::Standard)?.clone(),
            commercial: config.rate_tables.get(RateTableKey::Commercial)?.clone(),
        })
    }

    /// interest on `principal` due on `due_date`, paid on `payment_date`
    pub fn calculate(
        &self,
        kind: RateTableKey,
        principal: Money,
        due_date: NaiveDate,
        payment_date: NaiveDate,
    ) -> Result<InterestReport> {
        self.calculate_with(kind, principal, due_date, payment_date)
    }

    /// same as [`Self::calculate`] with the table chosen by name
    pub fn calculate_by_name(
        &self,
        kind: &str,
        principal: Money,
        due_date: NaiveDate,
        payment_date: NaiveDate,
    ) -> Result<InterestReport> {
        self.calculate_with(kind.parse()?, principal, due_date, payment_date)
    }

    /// interest still accruing, up to today's date on the given clock
    pub fn calculate_until_today(
        &self,
        kind: RateTableKey,
        principal: Money,
        due_date: NaiveDate,
        time: &SafeTimeProvider,
    ) -> Result<InterestReport> {
        self.calculate_with_clock(kind, principal, due_date, time)
    }
}

impl InterestCalculator for StatutoryInterestCalculator {
    fn rate_table(&self, key: RateTableKey) -> Result<&RateTable> {
        match key {
            RateTableKey::Standard => Ok(&self.standard),
            RateTableKey::Commercial => Ok(&self.commercial),
            RateTableKey::TaxArrears => Err(AccrualError::UnknownRateTable {
                key: key.to_string(),
            }),
        }
    }

    fn rounding_policy(&self) -> RoundingPolicy {
        RoundingPolicy::RoundCents
    }
}
