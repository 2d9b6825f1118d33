/// custom rate table - swap in reference data without touching code
use statutory_interest_rs::chrono::NaiveDate;
use statutory_interest_rs::{
    CalculatorConfig, Money, RateTable, RateTableKey, RateTableSet, StatutoryInterestCalculator,
};

const CSV: &str = "effective_from,annual_rate_percent
2022-09-08,12.25
2023-09-07,11.25
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut tables = RateTableSet::embedded()?;
    println!("bundled tables version {}", tables.version);

    let custom = RateTable::from_csv_reader("Statutory delay interest (test data)", CSV.as_bytes())?;
    tables.insert(RateTableKey::Standard, custom);

    let calculator = StatutoryInterestCalculator::from_config(&CalculatorConfig::new(tables))?;
    let report = calculator.calculate(
        RateTableKey::Standard,
        Money::from_major(5_000),
        NaiveDate::from_ymd_opt(2023, 9, 1).ok_or("bad date")?,
        NaiveDate::from_ymd_opt(2023, 9, 15).ok_or("bad date")?,
    )?;

    println!("{}", report.json());

    Ok(())
}
