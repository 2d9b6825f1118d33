use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{AccrualError, Result};

/// key of a bundled rate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTableKey {
    /// statutory delay interest
    Standard,
    /// statutory interest in commercial transactions
    Commercial,
    /// interest on tax arrears
    TaxArrears,
}

impl RateTableKey {
    pub const ALL: [RateTableKey; 3] = [
        RateTableKey::Standard,
        RateTableKey::Commercial,
        RateTableKey::TaxArrears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RateTableKey::Standard => "standard",
            RateTableKey::Commercial => "commercial",
            RateTableKey::TaxArrears => "tax_arrears",
        }
    }
}

impl fmt::Display for RateTableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateTableKey {
    type Err = AccrualError;

    fn from_str(s: &str) -> Result<Self> {
        RateTableKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| AccrualError::UnknownRateTable { key: s.to_string() })
    }
}

/// one rate change in an effective-dated rate table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePeriod {
    /// first date the rate applies
    pub effective_from: NaiveDate,
    /// annual rate in percent, e.g. 12.25
    pub annual_rate_percent: Decimal,
}

impl RatePeriod {
    pub fn new(effective_from: NaiveDate, annual_rate_percent: Decimal) -> Self {
        Self {
            effective_from,
            annual_rate_percent,
        }
    }

    pub fn rate(&self) -> Rate {
        Rate::from_percentage(self.annual_rate_percent)
    }
}

/// named, ordered sequence of rate periods
///
/// Entries are unique by `effective_from` and sorted ascending. Each entry
/// applies until the day before the next one takes effect; the last entry
/// applies indefinitely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateTable {
    name: String,
    periods: Vec<RatePeriod>,
}

impl RateTable {
    /// build a validated table, sorting the periods by effective date
    pub fn new(name: impl Into<String>, mut periods: Vec<RatePeriod>) -> Result<Self> {
        let name = name.into();

        if periods.is_empty() {
            return Err(AccrualError::EmptyRateTable { name });
        }

        periods.sort_by_key(|p| p.effective_from);

        for pair in periods.windows(2) {
            if pair[0].effective_from == pair[1].effective_from {
                return Err(AccrualError::DuplicateEffectiveDate {
                    name,
                    date: pair[1].effective_from,
                });
            }
        }

        if let Some(negative) = periods.iter().find(|p| p.annual_rate_percent < Decimal::ZERO) {
            return Err(AccrualError::NegativeRate {
                name,
                date: negative.effective_from,
                rate_percent: negative.annual_rate_percent,
            });
        }

        Ok(Self { name, periods })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn periods(&self) -> &[RatePeriod] {
        &self.periods
    }

    /// first date any rate in the table applies
    pub fn coverage_start(&self) -> NaiveDate {
        // non-empty by construction
        self.periods[0].effective_from
    }

    /// rate in force on the given date
    pub fn rate_on(&self, date: NaiveDate) -> Option<&RatePeriod> {
        self.periods.iter().rev().find(|p| p.effective_from <= date)
    }

    /// each period with its nominal last day, `None` for the open-ended last entry
    pub(crate) fn windows(&self) -> impl Iterator<Item = (&RatePeriod, Option<NaiveDate>)> + '_ {
        self.periods.iter().enumerate().map(move |(i, period)| {
            let nominal_end = self
                .periods
                .get(i + 1)
                .map(|next| next.effective_from - Duration::days(1));
            (period, nominal_end)
        })
    }
}

impl<'de> Deserialize<'de> for RateTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawRateTable {
            name: String,
            periods: Vec<RatePeriod>,
        }

        let raw = RawRateTable::deserialize(deserializer)?;
        RateTable::new(raw.name, raw.periods).map_err(serde::de::Error::custom)
    }
}

/// input of one accrual computation
#[derive(Debug, Clone, Copy)]
pub struct AccrualRequest<'a> {
    pub principal: Money,
    /// exclusive, interest starts the day after
    pub start_date: NaiveDate,
    /// inclusive
    pub end_date: NaiveDate,
    pub rate_table: &'a RateTable,
}

impl<'a> AccrualRequest<'a> {
    pub fn new(
        principal: Money,
        start_date: NaiveDate,
        end_date: NaiveDate,
        rate_table: &'a RateTable,
    ) -> Self {
        Self {
            principal,
            start_date,
            end_date,
            rate_table,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.principal.is_positive() && self.start_date < self.end_date
    }
}

/// one row of the accrual breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualPeriodResult {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub days_in_period: u32,
    pub rate_percent: Decimal,
    /// unrounded
    pub interest_for_period: Money,
}

impl fmt::Display for AccrualPeriodResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}: {} days at {}% = {}",
            self.period_start,
            self.period_end,
            self.days_in_period,
            self.rate_percent.normalize(),
            self.interest_for_period.round_dp(2),
        )
    }
}

/// result of one accrual computation, periods in ascending order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccrualResult {
    /// unrounded sum of all period interest
    pub total_interest: Money,
    pub periods: Vec<AccrualPeriodResult>,
}

impl AccrualResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn total_days(&self) -> u32 {
        self.periods.iter().map(|p| p.days_in_period).sum()
    }
}
