use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use statutory_interest_rs::{
    compute_accrual, AccrualError, AccrualRequest, AccrualResult, CalculatorConfig, Money,
    RatePeriod, RateTable, RateTableKey, RateTableSet, StatutoryInterestCalculator,
    TaxArrearsCalculator,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixture_table() -> RateTable {
    RateTable::new(
        "standard",
        vec![
            RatePeriod::new(date(2022, 9, 8), dec!(12.25)),
            RatePeriod::new(date(2023, 9, 7), dec!(11.25)),
        ],
    )
    .unwrap()
}

fn commercial_fixture_table() -> RateTable {
    RateTable::new(
        "commercial",
        vec![
            RatePeriod::new(date(2022, 9, 8), dec!(16.75)),
            RatePeriod::new(date(2023, 9, 7), dec!(16.00)),
        ],
    )
    .unwrap()
}

/// start/end pairs hitting no, one and many boundaries of the bundled tables
fn sample_ranges() -> Vec<(NaiveDate, NaiveDate)> {
    let mut ranges = vec![
        (date(2022, 10, 1), date(2022, 10, 31)),
        (date(2023, 9, 1), date(2023, 9, 15)),
        (date(2023, 9, 6), date(2023, 9, 7)),
        (date(2020, 1, 1), date(2025, 12, 31)),
        (date(2023, 12, 31), date(2024, 12, 31)),
    ];

    let mut start = date(2016, 1, 1);
    while start < date(2025, 1, 1) {
        ranges.push((start, start + Duration::days(97)));
        start += Duration::days(61);
    }
    ranges
}

fn assert_well_formed(request: &AccrualRequest<'_>, result: &AccrualResult) {
    let sum: Money = result.periods.iter().map(|p| p.interest_for_period).sum();
    assert_eq!(result.total_interest, sum);

    let expected_days = (request.end_date - request.start_date).num_days() as u32;
    assert_eq!(result.total_days(), expected_days);

    assert_eq!(result.periods.first().unwrap().period_start, request.start_date + Duration::days(1));
    assert_eq!(result.periods.last().unwrap().period_end, request.end_date);

    for pair in result.periods.windows(2) {
        assert_eq!(pair[0].period_end + Duration::days(1), pair[1].period_start);
    }

    for period in &result.periods {
        assert!(period.days_in_period >= 1);
        assert_eq!(
            period.days_in_period as i64,
            (period.period_end - period.period_start).num_days() + 1
        );
        let in_force = request.rate_table.rate_on(period.period_start).unwrap();
        assert_eq!(period.rate_percent, in_force.annual_rate_percent);
    }
}

#[test]
fn scenario_single_rate_period() {
    let table = fixture_table();
    let result = compute_accrual(&AccrualRequest::new(
        Money::from_major(1_000),
        date(2022, 10, 1),
        date(2022, 10, 31),
        &table,
    ));

    assert_eq!(result.periods.len(), 1);
    assert_eq!(result.total_days(), 30);
    assert_eq!(result.total_interest.round_dp(2), Money::from_decimal(dec!(10.07)));
}

#[test]
fn scenario_boundary_crossing_period() {
    let table = fixture_table();
    let result = compute_accrual(&AccrualRequest::new(
        Money::from_major(5_000),
        date(2023, 9, 1),
        date(2023, 9, 15),
        &table,
    ));

    let spans: Vec<_> = result
        .periods
        .iter()
        .map(|p| (p.period_start, p.period_end, p.days_in_period, p.rate_percent))
        .collect();
    assert_eq!(
        spans,
        vec![
            (date(2023, 9, 2), date(2023, 9, 6), 5, dec!(12.25)),
            (date(2023, 9, 7), date(2023, 9, 15), 9, dec!(11.25)),
        ]
    );
    assert_eq!(result.total_interest.round_dp(2), Money::from_decimal(dec!(22.26)));
}

#[test]
fn scenario_inverted_range_is_empty() {
    let table = fixture_table();
    let result = compute_accrual(&AccrualRequest::new(
        Money::from_major(5_000),
        date(2023, 9, 15),
        date(2023, 9, 1),
        &table,
    ));

    assert!(result.total_interest.is_zero());
    assert!(result.periods.is_empty());
}

#[test]
fn scenario_zero_principal_is_empty() {
    let table = fixture_table();
    let result = compute_accrual(&AccrualRequest::new(
        Money::ZERO,
        date(2023, 9, 1),
        date(2023, 9, 15),
        &table,
    ));

    assert!(result.total_interest.is_zero());
    assert!(result.periods.is_empty());
}

#[test]
fn scenario_other_table_gives_other_result() {
    let standard = fixture_table();
    let commercial = commercial_fixture_table();

    let a = compute_accrual(&AccrualRequest::new(
        Money::from_major(5_000),
        date(2023, 9, 1),
        date(2023, 9, 15),
        &standard,
    ));
    let b = compute_accrual(&AccrualRequest::new(
        Money::from_major(5_000),
        date(2023, 9, 1),
        date(2023, 9, 15),
        &commercial,
    ));

    assert_ne!(a.total_interest, b.total_interest);
    assert_eq!(b.periods[0].rate_percent, dec!(16.75));
    // same windows, different rates
    assert_eq!(a.total_days(), b.total_days());
}

#[test]
fn results_are_well_formed_for_bundled_tables() {
    let set = RateTableSet::embedded().unwrap();
    let principal = Money::from_decimal(dec!(12345.67));

    for key in RateTableKey::ALL {
        let table = set.get(key).unwrap();
        for (start, end) in sample_ranges() {
            let request = AccrualRequest::new(principal, start, end, table);
            let result = compute_accrual(&request);
            assert_well_formed(&request, &result);
        }
    }
}

#[test]
fn computation_is_deterministic() {
    let table = fixture_table();
    let request = AccrualRequest::new(
        Money::from_decimal(dec!(777.77)),
        date(2022, 1, 1),
        date(2024, 6, 30),
        &table,
    );

    assert_eq!(compute_accrual(&request), compute_accrual(&request));
}

#[test]
fn interest_scales_linearly_with_principal() {
    let set = RateTableSet::embedded().unwrap();
    let table = set.get(RateTableKey::Standard).unwrap();
    let tolerance = dec!(0.000000000001);

    for (start, end) in sample_ranges() {
        let base = compute_accrual(&AccrualRequest::new(Money::from_major(1_000), start, end, table));
        let scaled = compute_accrual(&AccrualRequest::new(Money::from_major(7_000), start, end, table));

        let drift = (scaled.total_interest - base.total_interest * dec!(7)).as_decimal().abs();
        assert!(drift < tolerance, "{start}..{end} drifted by {drift}");
    }
}

#[test]
fn config_loads_from_file() {
    let path = std::env::temp_dir().join(format!("statutory-interest-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "rate_tables": {
                "version": "test",
                "tables": {
                    "standard": {"name": "s", "periods": [
                        {"effective_from": "2022-09-08", "annual_rate_percent": "12.25"},
                        {"effective_from": "2023-09-07", "annual_rate_percent": "11.25"}
                    ]},
                    "commercial": {"name": "c", "periods": [
                        {"effective_from": "2022-09-08", "annual_rate_percent": "16.75"}
                    ]},
                    "tax_arrears": {"name": "t", "periods": [
                        {"effective_from": "2022-09-08", "annual_rate_percent": "16.50"}
                    ]}
                }
            },
            "postal_fee": "10.00"
        }"#,
    )
    .unwrap();

    let config = CalculatorConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.rate_tables.version, "test");
    assert_eq!(config.tax_arrears_threshold(), Money::from_major(30));

    let statutory = StatutoryInterestCalculator::from_config(&config).unwrap();
    let report = statutory
        .calculate(RateTableKey::Standard, Money::from_major(5_000), date(2023, 9, 1), date(2023, 9, 15))
        .unwrap();
    assert_eq!(report.amount(), Money::from_decimal(dec!(22.26)));

    // 10000 * 0.165 * 6 / 365 = 27.12, rounds to 27, under 30
    let tax = TaxArrearsCalculator::from_config(&config).unwrap();
    let report = tax
        .calculate(Money::from_major(10_000), date(2022, 10, 1), date(2022, 10, 7))
        .unwrap();
    assert!(report.interest.suppressed);
    assert!(report.amount().is_zero());
}

#[test]
fn missing_config_file_is_an_io_error() {
    let result = CalculatorConfig::from_path("/nonexistent/statutory-interest.json");
    assert!(matches!(result, Err(AccrualError::Io(_))));
}
