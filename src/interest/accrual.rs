use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use crate::decimal::Money;
use crate::types::{AccrualPeriodResult, AccrualRequest, AccrualResult, RateTable};

/// date format accepted by the string entry point
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// compute simple interest over `(start_date, end_date]` across every rate
/// regime of the table that overlaps it
///
/// Invalid requests (non-positive principal, `start_date >= end_date`) and
/// principals too large to accrue on yield an empty result with zero
/// interest; this never fails.
pub fn compute_accrual(request: &AccrualRequest<'_>) -> AccrualResult {
    if !request.is_valid() {
        return AccrualResult::empty();
    }

    checked_accrual(request).unwrap_or_else(|| {
        warn!(
            table = request.rate_table.name(),
            principal = %request.principal,
            "interest overflows the decimal range, nothing accrued"
        );
        AccrualResult::empty()
    })
}

/// accrue a valid request, `None` when the arithmetic overflows
pub(crate) fn checked_accrual(request: &AccrualRequest<'_>) -> Option<AccrualResult> {
    let table = request.rate_table;
    let accrual_start = request.start_date + Duration::days(1);
    let end_date = request.end_date;

    warn_on_uncovered_days(table, accrual_start, end_date);

    let mut total_interest = Money::ZERO;
    let mut periods = Vec::new();

    for (period, nominal_end) in table.windows() {
        let effective_start = accrual_start.max(period.effective_from);
        let effective_end = nominal_end.map_or(end_date, |last| last.min(end_date));

        if effective_start > effective_end {
            continue;
        }

        let days = ((effective_end - effective_start).num_days() + 1) as u32;
        let interest = request.principal.apply_rate(period.rate(), days)?;

        total_interest = total_interest.checked_add(interest)?;
        periods.push(AccrualPeriodResult {
            period_start: effective_start,
            period_end: effective_end,
            days_in_period: days,
            rate_percent: period.annual_rate_percent,
            interest_for_period: interest,
        });
    }

    debug!(
        table = table.name(),
        principal = %request.principal,
        start = %request.start_date,
        end = %end_date,
        periods = periods.len(),
        total = %total_interest,
        "accrual computed"
    );

    Some(AccrualResult {
        total_interest,
        periods,
    })
}

/// same as [`compute_accrual`], taking raw user input
///
/// The principal is a decimal string and both dates are `YYYY-MM-DD`. Any
/// input that fails to parse yields an empty result.
pub fn compute_accrual_from_input(
    principal: &str,
    start_date: &str,
    end_date: &str,
    rate_table: &RateTable,
) -> AccrualResult {
    let parsed = (
        Money::from_str_exact(principal).ok(),
        parse_date(start_date),
        parse_date(end_date),
    );

    match parsed {
        (Some(principal), Some(start), Some(end)) => {
            compute_accrual(&AccrualRequest::new(principal, start, end, rate_table))
        }
        _ => AccrualResult::empty(),
    }
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// days before the table's first entry accrue nothing
fn warn_on_uncovered_days(table: &RateTable, accrual_start: NaiveDate, end_date: NaiveDate) {
    let coverage_start = table.coverage_start();
    if accrual_start >= coverage_start {
        return;
    }

    let uncovered_end = end_date.min(coverage_start - Duration::days(1));
    warn!(
        table = table.name(),
        from = %accrual_start,
        to = %uncovered_end,
        "rate table does not cover part of the accrual period, no interest accrued for it"
    );
}
