pub mod accrual;
pub mod rounding;

pub use accrual::{compute_accrual, compute_accrual_from_input, DATE_FORMAT};
pub use rounding::{RoundedInterest, RoundingPolicy, DE_MINIMIS_MULTIPLIER, POSTAL_FEE};
