//! Overtime and surcharge accumulation.
//!
//! The ledger records whole hours per [`OvertimeCategory`] and prices them
//! against the ordinary hourly rate of the employee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::OvertimeCategory;

use super::remuneration::MAX_MONTHLY_AMOUNT;
use super::rounding::{PESO_DECIMALS, round_half_away};

/// Returns the value of one ordinary hour: the base wage spread over the
/// monthly working hours.
///
/// A zero hour count yields a zero rate, which the ledger then rejects.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::ordinary_hourly_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     ordinary_hourly_rate(Decimal::from(2_400_000), 240),
///     Decimal::from(10_000)
/// );
/// ```
pub fn ordinary_hourly_rate(base_wage: Decimal, monthly_working_hours: u32) -> Decimal {
    if monthly_working_hours == 0 {
        return Decimal::ZERO;
    }
    base_wage / Decimal::from(monthly_working_hours)
}

/// The priced value of one overtime category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeCharge {
    /// The overtime category.
    pub category: OvertimeCategory,
    /// Whole hours registered.
    pub hours: u32,
    /// The multiplier applied to the hourly rate.
    pub multiplier: Decimal,
    /// Hours x multiplier x hourly rate, rounded to whole pesos.
    pub amount: Decimal,
}

/// Accumulates overtime hours per category.
///
/// Registering a category again replaces its previous quantity.
///
/// # Example
///
/// ```
/// use nomina_engine::calculation::OvertimeLedger;
/// use nomina_engine::models::OvertimeCategory;
/// use rust_decimal::Decimal;
///
/// let mut ledger = OvertimeLedger::new(Decimal::from(10_000)).unwrap();
/// ledger.register_quantity(OvertimeCategory::DaytimeOvertime, 3).unwrap();
/// assert_eq!(ledger.total(), Decimal::from(37_500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvertimeLedger {
    hourly_rate: Decimal,
    quantities: BTreeMap<OvertimeCategory, u32>,
}

impl OvertimeLedger {
    /// Creates an empty ledger priced at `hourly_rate`.
    ///
    /// Returns `InputDomain` if the rate is not greater than zero or exceeds
    /// the supported maximum amount.
    pub fn new(hourly_rate: Decimal) -> EngineResult<Self> {
        Self::validate_rate(hourly_rate)?;
        Ok(Self {
            hourly_rate,
            quantities: BTreeMap::new(),
        })
    }

    /// Records `hours` whole hours for `category`.
    ///
    /// Returns `InputDomain` for a negative quantity or one that does not
    /// fit the ledger.
    pub fn register_quantity(&mut self, category: OvertimeCategory, hours: i64) -> EngineResult<()> {
        if hours < 0 {
            return Err(EngineError::InputDomain {
                field: format!("overtime.{}", category.code()),
                message: format!("hours cannot be negative, got {}", hours),
            });
        }
        let hours = u32::try_from(hours).map_err(|_| EngineError::InputDomain {
            field: format!("overtime.{}", category.code()),
            message: format!("{} hours exceeds the supported range", hours),
        })?;

        self.quantities.insert(category, hours);
        Ok(())
    }

    /// Reprices the ledger at a new hourly rate.
    pub fn change_hourly_rate(&mut self, hourly_rate: Decimal) -> EngineResult<()> {
        Self::validate_rate(hourly_rate)?;
        self.hourly_rate = hourly_rate;
        Ok(())
    }

    /// Returns the ordinary hourly rate the ledger prices against.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Returns the hours registered for `category` (zero if none).
    pub fn quantity(&self, category: OvertimeCategory) -> u32 {
        self.quantities.get(&category).copied().unwrap_or(0)
    }

    /// Returns the value of the hours registered for `category`.
    pub fn category_amount(&self, category: OvertimeCategory) -> Decimal {
        let hours = Decimal::from(self.quantity(category));
        round_half_away(
            hours * category.multiplier() * self.hourly_rate,
            PESO_DECIMALS,
        )
    }

    /// Returns the value of every registered category.
    pub fn total(&self) -> Decimal {
        self.quantities
            .keys()
            .map(|&category| self.category_amount(category))
            .sum()
    }

    /// Returns one priced charge per registered category.
    pub fn charges(&self) -> Vec<OvertimeCharge> {
        self.quantities
            .iter()
            .map(|(&category, &hours)| OvertimeCharge {
                category,
                hours,
                multiplier: category.multiplier(),
                amount: self.category_amount(category),
            })
            .collect()
    }

    fn validate_rate(hourly_rate: Decimal) -> EngineResult<()> {
        if hourly_rate <= Decimal::ZERO {
            return Err(EngineError::InputDomain {
                field: "hourly_rate".to_string(),
                message: format!("must be greater than zero, got {}", hourly_rate),
            });
        }
        if hourly_rate > Decimal::from(MAX_MONTHLY_AMOUNT) {
            return Err(EngineError::InputDomain {
                field: "hourly_rate".to_string(),
                message: format!(
                    "{} exceeds the supported maximum of {}",
                    hourly_rate, MAX_MONTHLY_AMOUNT
                ),
            });
        }
        Ok(())
    }
}
