/// tax arrears - whole-unit rounding and the de-minimis threshold
use statutory_interest_rs::chrono::{Duration, TimeZone, Utc};
use statutory_interest_rs::calculators::parse_input;
use statutory_interest_rs::{CalculatorConfig, Money, SafeTimeProvider, TaxArrearsCalculator, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::embedded()?;
    let calculator = TaxArrearsCalculator::from_config(&config)?;

    println!("=== tax arrears ===");
    println!("threshold: {}\n", config.tax_arrears_threshold());

    // input as it comes from a form
    let (principal, due, paid) = parse_input("10000", "2023-04-30", "2023-11-20")?;
    let report = calculator.calculate(principal, due, paid)?;
    println!("{}\n", report.json());

    // a small debt is not worth collecting
    let report = calculator.calculate(Money::from_major(500), due, paid)?;
    println!(
        "500 overdue: computed {}, owed {} (below threshold: {})\n",
        report.interest.unrounded.round_dp(2),
        report.amount(),
        report.interest.suppressed
    );

    // still unpaid, measured against a controllable clock
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let control = time.test_control().unwrap();
    control.advance(Duration::days(45));

    let report = calculator.calculate_until_today(principal, due, &time)?;
    println!("unpaid until {}: {}", report.end_date, report.amount());

    // bad input surfaces as a user-facing message
    if let Err(e) = parse_input("10000", "2023-11-20", "2023-04-30") {
        println!("rejected: {}", e);
    }

    Ok(())
}
