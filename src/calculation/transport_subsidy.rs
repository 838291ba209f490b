//! Transport subsidy eligibility.
//!
//! Employees earning less than two minimum wages receive the monthly
//! transport subsidy, unless they live close enough to walk to work.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::ParameterTable;
use crate::error::{EngineError, EngineResult};

/// Number of minimum wages below which the subsidy applies.
pub const TRANSPORT_SUBSIDY_MINIMUM_WAGES: u32 = 2;

/// Transport subsidy state for one employee and date.
///
/// # Example
///
/// ```
/// use nomina_engine::calculation::TransportSubsidy;
/// use nomina_engine::config::ParameterTable;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let params = ParameterTable::statutory();
/// let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let subsidy = TransportSubsidy::new(Decimal::from(2_000_000), date, &params).unwrap();
/// assert_eq!(subsidy.amount(), Decimal::from(200_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSubsidy {
    wage_base: Decimal,
    lives_near_workplace: bool,
    eligibility_ceiling: Decimal,
    subsidy_value: Decimal,
}

impl TransportSubsidy {
    /// Creates the subsidy state, resolving the legal values for `date`.
    ///
    /// Returns `InputDomain` for a negative wage base and
    /// `ParameterNotFound` when the year has no legislated values.
    pub fn new(wage_base: Decimal, date: NaiveDate, params: &ParameterTable) -> EngineResult<Self> {
        Self::validate_base(wage_base)?;
        let minimum_wage = params.minimum_wage(date)?;

        Ok(Self {
            wage_base,
            lives_near_workplace: false,
            eligibility_ceiling: minimum_wage * Decimal::from(TRANSPORT_SUBSIDY_MINIMUM_WAGES),
            subsidy_value: params.transport_subsidy(date)?,
        })
    }

    /// Replaces the wage base eligibility is measured on.
    pub fn change_wage_base(&mut self, wage_base: Decimal) -> EngineResult<()> {
        Self::validate_base(wage_base)?;
        self.wage_base = wage_base;
        Ok(())
    }

    /// Records whether the employee lives near the workplace.
    pub fn change_lives_near_workplace(&mut self, lives_near_workplace: bool) {
        self.lives_near_workplace = lives_near_workplace;
    }

    /// True when the wage base is strictly below two minimum wages.
    pub fn is_eligible(&self) -> bool {
        self.wage_base < self.eligibility_ceiling
    }

    /// Returns the subsidy paid this month.
    pub fn amount(&self) -> Decimal {
        if self.is_eligible() && !self.lives_near_workplace {
            self.subsidy_value
        } else {
            Decimal::ZERO
        }
    }

    /// Returns the wage base eligibility is measured on.
    pub fn wage_base(&self) -> Decimal {
        self.wage_base
    }

    /// Returns whether the employee lives near the workplace.
    pub fn lives_near_workplace(&self) -> bool {
        self.lives_near_workplace
    }

    fn validate_base(wage_base: Decimal) -> EngineResult<()> {
        if wage_base < Decimal::ZERO {
            return Err(EngineError::InputDomain {
                field: "transport_subsidy_base".to_string(),
                message: format!("cannot be negative, got {}", wage_base),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_wage_below_two_minimum_wages_is_eligible() {
        let params = ParameterTable::statutory();
        let subsidy = TransportSubsidy::new(dec("2846999"), date_2025(), &params).unwrap();

        assert!(subsidy.is_eligible());
        assert_eq!(subsidy.amount(), dec("200000"));
    }

    #[test]
    fn test_wage_at_two_minimum_wages_is_not_eligible() {
        let params = ParameterTable::statutory();
        let subsidy = TransportSubsidy::new(dec("2847000"), date_2025(), &params).unwrap();

        assert!(!subsidy.is_eligible());
        assert_eq!(subsidy.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_living_near_workplace_removes_subsidy() {
        let params = ParameterTable::statutory();
        let mut subsidy = TransportSubsidy::new(dec("1423500"), date_2025(), &params).unwrap();

        subsidy.change_lives_near_workplace(true);
        assert!(subsidy.is_eligible());
        assert_eq!(subsidy.amount(), Decimal::ZERO);

        subsidy.change_lives_near_workplace(false);
        assert_eq!(subsidy.amount(), dec("200000"));
    }

    #[test]
    fn test_subsidy_value_follows_year() {
        let params = ParameterTable::statutory();
        let date = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
        let subsidy = TransportSubsidy::new(dec("1160000"), date, &params).unwrap();

        assert_eq!(subsidy.amount(), dec("140606"));
    }

    #[test]
    fn test_negative_base_rejected_on_construction() {
        let params = ParameterTable::statutory();
        let result = TransportSubsidy::new(dec("-1"), date_2025(), &params);

        assert!(matches!(result, Err(EngineError::InputDomain { .. })));
    }

    #[test]
    fn test_negative_base_change_keeps_previous_base() {
        let params = ParameterTable::statutory();
        let mut subsidy = TransportSubsidy::new(dec("1500000"), date_2025(), &params).unwrap();

        assert!(subsidy.change_wage_base(dec("-100")).is_err());
        assert_eq!(subsidy.wage_base(), dec("1500000"));
    }

    #[test]
    fn test_raising_base_removes_eligibility() {
        let params = ParameterTable::statutory();
        let mut subsidy = TransportSubsidy::new(dec("1500000"), date_2025(), &params).unwrap();

        subsidy.change_wage_base(dec("3000000")).unwrap();
        assert_eq!(subsidy.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_year_fails() {
        let params = ParameterTable::statutory();
        let date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();

        assert!(matches!(
            TransportSubsidy::new(dec("1500000"), date, &params),
            Err(EngineError::ParameterNotFound { .. })
        ));
    }
}
