use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::Money;
use crate::errors::{AccrualError, Result};
use crate::interest::{RoundingPolicy, DE_MINIMIS_MULTIPLIER, POSTAL_FEE};
use crate::types::{RatePeriod, RateTable, RateTableKey};

/// rate tables bundled with the crate
const EMBEDDED_RATE_TABLES: &str = include_str!("../data/rate_tables.json");

/// versioned collection of rate tables, read-only once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTableSet {
    /// date or label of the regulatory update the data reflects
    pub version: String,
    tables: BTreeMap<RateTableKey, RateTable>,
}

impl RateTableSet {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            tables: BTreeMap::new(),
        }
    }

    /// tables shipped with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_RATE_TABLES)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let set: RateTableSet = serde_json::from_str(json)?;
        debug!(
            version = %set.version,
            tables = set.tables.len(),
            "rate tables loaded"
        );
        Ok(set)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// add or replace a table
    pub fn insert(&mut self, key: RateTableKey, table: RateTable) -> Option<RateTable> {
        self.tables.insert(key, table)
    }

    pub fn get(&self, key: RateTableKey) -> Result<&RateTable> {
        self.tables
            .get(&key)
            .ok_or_else(|| AccrualError::UnknownRateTable {
                key: key.to_string(),
            })
    }

    pub fn keys(&self) -> impl Iterator<Item = RateTableKey> + '_ {
        self.tables.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl RateTable {
    /// load a single table from csv with an
    /// `effective_from,annual_rate_percent` header
    pub fn from_csv_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut periods = Vec::new();
        for record in rdr.deserialize::<RatePeriod>() {
            periods.push(record?);
        }

        RateTable::new(name, periods)
    }
}

/// calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub rate_tables: RateTableSet,
    /// registered letter fee the tax de-minimis is expressed in
    #[serde(default = "default_postal_fee")]
    pub postal_fee: Money,
    #[serde(default = "default_de_minimis_multiplier")]
    pub de_minimis_multiplier: u32,
}

fn default_postal_fee() -> Money {
    POSTAL_FEE
}

fn default_de_minimis_multiplier() -> u32 {
    DE_MINIMIS_MULTIPLIER
}

impl CalculatorConfig {
    pub fn new(rate_tables: RateTableSet) -> Self {
        Self {
            rate_tables,
            postal_fee: POSTAL_FEE,
            de_minimis_multiplier: DE_MINIMIS_MULTIPLIER,
        }
    }

    /// embedded tables with the default fees
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(RateTableSet::embedded()?))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.postal_fee.is_positive() {
            return Err(AccrualError::InvalidConfiguration {
                message: format!("postal fee must be positive, got {}", self.postal_fee),
            });
        }
        if self.rate_tables.is_empty() {
            return Err(AccrualError::InvalidConfiguration {
                message: "no rate tables configured".to_string(),
            });
        }
        Ok(())
    }

    /// smallest tax-arrears interest that is collected
    pub fn tax_arrears_threshold(&self) -> Money {
        self.postal_fee * Decimal::from(self.de_minimis_multiplier)
    }

    pub fn tax_arrears_policy(&self) -> RoundingPolicy {
        RoundingPolicy::RoundIntegerWithDeMinimis {
            threshold: self.tax_arrears_threshold(),
        }
    }
}
