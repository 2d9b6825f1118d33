/// statutory interest - standard vs commercial transaction rates
use statutory_interest_rs::chrono::NaiveDate;
use statutory_interest_rs::{CalculatorConfig, Money, RateTableKey, StatutoryInterestCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calculator = StatutoryInterestCalculator::from_config(&CalculatorConfig::embedded()?)?;

    let principal = Money::from_major(25_000);
    let due = NaiveDate::from_ymd_opt(2022, 3, 15).ok_or("bad date")?;
    let paid = NaiveDate::from_ymd_opt(2023, 12, 31).ok_or("bad date")?;

    for kind in [RateTableKey::Standard, RateTableKey::Commercial] {
        let report = calculator.calculate(kind, principal, due, paid)?;

        println!("=== {} ===", kind);
        for line in report.breakdown() {
            println!("  {}", line);
        }
        println!("  interest: {}", report.amount());
        println!("  total due: {}\n", report.total_due());
    }

    Ok(())
}
