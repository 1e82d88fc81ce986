//! Strategy parameters.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Parameters of the limit-order strategy.
///
/// `alpha1` prices each entry limit relative to the prior close (typically
/// negative, buying a dip) and `day1` is how many sessions the entry stays
/// working. `alpha2` prices the exit limit relative to the filled entry
/// price (typically positive) and `day2` is how many sessions the exit
/// stays working, counting the fill day itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyParams {
    /// Asset symbol the order rows are written against
    pub asset: String,
    /// Entry limit offset from the prior close
    pub alpha1: Decimal,
    /// Entry scan window in sessions
    pub day1: usize,
    /// Exit limit offset from the filled entry price
    pub alpha2: Decimal,
    /// Exit scan window in sessions
    pub day2: usize,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            asset: "IVV".to_string(),
            alpha1: dec!(-0.01),
            day1: 3,
            alpha2: dec!(0.01),
            day2: 5,
        }
    }
}

impl StrategyParams {
    /// Validate the parameters before any simulation runs.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.day1 == 0 {
            return Err(InputError::WindowNotPositive { name: "day1" });
        }
        if self.day2 == 0 {
            return Err(InputError::WindowNotPositive { name: "day2" });
        }
        check_offset("alpha1", self.alpha1)?;
        check_offset("alpha2", self.alpha2)?;
        Ok(())
    }

    /// Entry limit price off the prior close: close × (1 + alpha1), rounded
    /// to cents.
    pub fn entry_limit_price(&self, prior_close: Decimal) -> Decimal {
        (prior_close * (Decimal::ONE + self.alpha1)).round_dp(2)
    }

    /// Exit limit price off the filled entry price: price × (1 + alpha2),
    /// rounded to cents.
    pub fn exit_limit_price(&self, entry_price: Decimal) -> Decimal {
        (entry_price * (Decimal::ONE + self.alpha2)).round_dp(2)
    }
}

/// An offset of -1 or below would produce a zero or negative limit price.
fn check_offset(name: &'static str, value: Decimal) -> Result<(), InputError> {
    if value <= dec!(-1) || value > dec!(1) {
        return Err(InputError::OffsetOutOfRange { name, value });
    }
    Ok(())
}
