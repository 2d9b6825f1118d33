/// quick start - minimal example to get started
use statutory_interest_rs::chrono::NaiveDate;
use statutory_interest_rs::{compute_accrual, AccrualRequest, Money, RateTableKey, RateTableSet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tables = RateTableSet::embedded()?;
    let standard = tables.get(RateTableKey::Standard)?;

    // 5,000 due on 1 september, paid on 15 october
    let request = AccrualRequest::new(
        Money::from_major(5_000),
        NaiveDate::from_ymd_opt(2023, 9, 1).ok_or("bad date")?,
        NaiveDate::from_ymd_opt(2023, 10, 15).ok_or("bad date")?,
        standard,
    );

    let result = compute_accrual(&request);
    for period in &result.periods {
        println!("{}", period);
    }
    println!("total: {}", result.total_interest.round_dp(2));

    Ok(())
}
