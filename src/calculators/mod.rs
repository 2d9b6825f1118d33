pub mod report;
pub mod statutory;
pub mod tax_arrears;

use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use tracing::debug;

use crate::decimal::Money;
use crate::errors::{AccrualError, Result};
use crate::interest::accrual::{checked_accrual, parse_date};
use crate::interest::{RoundingPolicy, DATE_FORMAT};
use crate::types::{AccrualRequest, RateTable, RateTableKey};

pub use report::{InterestReport, ReportPeriodView, ReportView};
pub use statutory::StatutoryInterestCalculator;
pub use tax_arrears::TaxArrearsCalculator;

/// check user input before it reaches the engine
pub fn validate_input(principal: Money, start_date: NaiveDate, end_date: NaiveDate) -> Result<()> {
    if !principal.is_positive() {
        return Err(AccrualError::invalid_principal(principal));
    }
    if end_date <= start_date {
        return Err(AccrualError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }
    Ok(())
}

/// parse and validate raw form input
pub fn parse_input(principal: &str, start_date: &str, end_date: &str) -> Result<(Money, NaiveDate, NaiveDate)> {
    let amount = Money::from_str_exact(principal).map_err(|_| AccrualError::InvalidPrincipal {
        amount: principal.to_string(),
    })?;
    let start = parse_date(start_date).ok_or_else(|| invalid_date(start_date))?;
    let end = parse_date(end_date).ok_or_else(|| invalid_date(end_date))?;

    validate_input(amount, start, end)?;
    Ok((amount, start, end))
}

fn invalid_date(input: &str) -> AccrualError {
    AccrualError::InvalidDate {
        message: format!("'{}' does not match {}", input, DATE_FORMAT),
    }
}

/// a calculator front-end over the accrual engine
pub trait InterestCalculator {
    fn rate_table(&self, key: RateTableKey) -> Result<&RateTable>;

    fn rounding_policy(&self) -> RoundingPolicy;

    /// validate, accrue against the selected table, then round
    fn calculate_with(
        &self,
        key: RateTableKey,
        principal: Money,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<InterestReport> {
        validate_input(principal, start_date, end_date)?;
        let table = self.rate_table(key)?;

        let request = AccrualRequest::new(principal, start_date, end_date, table);
        let accrual = checked_accrual(&request).ok_or_else(|| AccrualError::invalid_principal(principal))?;
        let interest = self.rounding_policy().apply(accrual.total_interest);

        debug!(
            table = %key,
            amount = %interest.amount,
            suppressed = interest.suppressed,
            "interest calculated"
        );

        Ok(InterestReport {
            table: key,
            principal,
            start_date,
            end_date,
            accrual,
            interest,
        })
    }

    /// accrue up to and including today's date on the given clock
    fn calculate_with_clock(
        &self,
        key: RateTableKey,
        principal: Money,
        start_date: NaiveDate,
        time: &SafeTimeProvider,
    ) -> Result<InterestReport> {
        let today = time.now().date_naive();
        self.calculate_with(key, principal, start_date, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_input() {
        assert!(validate_input(Money::from_major(100), date(2023, 1, 1), date(2023, 1, 2)).is_ok());

        assert!(matches!(
            validate_input(Money::ZERO, date(2023, 1, 1), date(2023, 1, 2)),
            Err(AccrualError::InvalidPrincipal { .. })
        ));
        assert!(matches!(
            validate_input(Money::from_major(100), date(2023, 1, 2), date(2023, 1, 2)),
            Err(AccrualError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_parse_input() {
        let (principal, start, end) = parse_input("1234.56", "2023-09-01", "2023-09-15").unwrap();
        assert_eq!(principal, Money::from_decimal(dec!(1234.56)));
        assert_eq!(start, date(2023, 9, 1));
        assert_eq!(end, date(2023, 9, 15));

        assert!(matches!(
            parse_input("12,5", "2023-09-01", "2023-09-15"),
            Err(AccrualError::InvalidPrincipal { .. })
        ));
        assert!(matches!(
            parse_input("100", "01.09.2023", "2023-09-15"),
            Err(AccrualError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_input("100", "2023-09-15", "2023-09-01"),
            Err(AccrualError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_principal_too_large_is_rejected() {
        let calc = TaxArrearsCalculator::from_config(&crate::CalculatorConfig::embedded().unwrap()).unwrap();

        let result = calc.calculate(Money::from_decimal(Decimal::MAX), date(2022, 10, 1), date(2022, 10, 31));

        assert!(matches!(result, Err(AccrualError::InvalidPrincipal { .. })));
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = parse_input("-3", "2023-09-01", "2023-09-15").unwrap_err();
        assert_eq!(err.to_string(), "invalid principal: -3 (must be greater than zero)");

        let err = parse_input("100", "2023-09-15", "2023-09-01").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid date range: end date 2023-09-01 must be after start date 2023-09-15"
        );
    }
}
