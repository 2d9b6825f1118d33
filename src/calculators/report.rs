//! serialization support for calculation results
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::interest::RoundedInterest;
use crate::types::{AccrualPeriodResult, AccrualResult, RateTableKey};

/// outcome of one calculator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestReport {
    pub table: RateTableKey,
    pub principal: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// raw engine output, unrounded
    pub accrual: AccrualResult,
    pub interest: RoundedInterest,
}

impl InterestReport {
    /// amount owed after rounding
    pub fn amount(&self) -> Money {
        self.interest.amount
    }

    /// principal plus interest owed
    pub fn total_due(&self) -> Money {
        self.principal + self.interest.amount
    }

    /// human-readable breakdown, newest period first
    pub fn breakdown(&self) -> Vec<String> {
        self.accrual
            .periods
            .iter()
            .rev()
            .map(AccrualPeriodResult::to_string)
            .collect()
    }

    pub fn view(&self) -> ReportView {
        ReportView {
            table: self.table,
            principal: self.principal,
            start_date: self.start_date,
            end_date: self.end_date,
            total_days: self.accrual.total_days(),
            interest: self.interest.amount,
            computed_interest: self.interest.unrounded.round_dp(2),
            below_de_minimis: self.interest.suppressed,
            total_due: self.total_due(),
            periods: self
                .accrual
                .periods
                .iter()
                .rev()
                .map(ReportPeriodView::from_period)
                .collect(),
        }
    }

    /// get json representation of the report
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.view()).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

/// serializable view of a report, periods listed newest first
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportView {
    pub table: RateTableKey,
    pub principal: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: u32,
    pub interest: Money,
    /// engine total at cents, before the policy applies
    pub computed_interest: Money,
    pub below_de_minimis: bool,
    pub total_due: Money,
    pub periods: Vec<ReportPeriodView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportPeriodView {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days: u32,
    pub rate_percent: Decimal,
    pub interest: Money,
}

impl ReportPeriodView {
    fn from_period(period: &AccrualPeriodResult) -> Self {
        ReportPeriodView {
            from: period.period_start,
            to: period.period_end,
            days: period.days_in_period,
            rate_percent: period.rate_percent,
            interest: period.interest_for_period.round_dp(2),
        }
    }
}
