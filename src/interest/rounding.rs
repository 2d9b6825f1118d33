use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// fee for sending a registered letter, the unit of the tax de-minimis
pub const POSTAL_FEE: Money = Money::from_decimal(dec!(8.70));

/// tax interest is not collected below this many postal fees
pub const DE_MINIMIS_MULTIPLIER: u32 = 3;

/// how a computed total is turned into the amount owed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum RoundingPolicy {
    /// whole currency units, zero when below the threshold
    #[serde(rename = "round-integer-with-deminimis")]
    RoundIntegerWithDeMinimis { threshold: Money },
    /// two decimal places, never suppressed
    RoundCents,
}

impl RoundingPolicy {
    /// tax-arrears convention with the default threshold of 3 x 8.70
    pub fn tax_arrears() -> Self {
        RoundingPolicy::RoundIntegerWithDeMinimis {
            threshold: POSTAL_FEE * rust_decimal::Decimal::from(DE_MINIMIS_MULTIPLIER),
        }
    }

    pub fn apply(&self, total: Money) -> RoundedInterest {
        match *self {
            RoundingPolicy::RoundIntegerWithDeMinimis { threshold } => {
                let rounded = total.round_dp(0);
                let suppressed = rounded < threshold;
                RoundedInterest {
                    amount: if suppressed { Money::ZERO } else { rounded },
                    unrounded: total,
                    suppressed,
                }
            }
            RoundingPolicy::RoundCents => RoundedInterest {
                amount: total.round_dp(2),
                unrounded: total,
                suppressed: false,
            },
        }
    }
}

/// amount owed after applying a rounding policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedInterest {
    pub amount: Money,
    pub unrounded: Money,
    /// true when the rounded amount fell under the de-minimis threshold
    pub suppressed: bool,
}
