//! Base wage validation against the legal floors.
//!
//! An ordinary salary may not be lower than the minimum wage, and an
//! integral salary may not be lower than 13 minimum wages, both taken on the
//! liquidation date.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{INTEGRAL_SALARY_MINIMUM_WAGES, ParameterTable};
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryKind;

use super::remuneration::validate_amount;

/// A base wage together with its salary kind and effective date.
///
/// Every mutation re-validates the floor for the resulting combination; a
/// rejected mutation leaves the profile exactly as it was.
///
/// # Example
///
/// ```
/// use nomina_engine::calculation::WageProfile;
/// use nomina_engine::config::ParameterTable;
/// use nomina_engine::models::SalaryKind;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let params = ParameterTable::statutory();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let mut profile =
///     WageProfile::new(Decimal::from(2_000_000), SalaryKind::Ordinary, date, &params).unwrap();
///
/// assert!(profile.change_salary_kind(SalaryKind::Integral).is_err());
/// assert_eq!(profile.salary_kind(), SalaryKind::Ordinary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WageProfile {
    base_wage: Decimal,
    salary_kind: SalaryKind,
    effective_date: NaiveDate,
    minimum_wage: Decimal,
}

impl WageProfile {
    /// Creates a wage profile, validating the wage against its legal floor.
    ///
    /// # Returns
    ///
    /// Returns an error if:
    /// - The year of `effective_date` has no minimum wage (`ParameterNotFound`)
    /// - The wage is below the floor for `salary_kind` (`FloorViolation`)
    /// - The wage exceeds the supported maximum (`InputDomain`)
    pub fn new(
        base_wage: Decimal,
        salary_kind: SalaryKind,
        effective_date: NaiveDate,
        params: &ParameterTable,
    ) -> EngineResult<Self> {
        let minimum_wage = params.minimum_wage(effective_date)?;
        let profile = Self {
            base_wage,
            salary_kind,
            effective_date,
            minimum_wage,
        };
        profile.validate(base_wage, salary_kind)?;
        Ok(profile)
    }

    /// Replaces the base wage.
    pub fn change_wage(&mut self, base_wage: Decimal) -> EngineResult<()> {
        self.validate(base_wage, self.salary_kind)?;
        self.base_wage = base_wage;
        Ok(())
    }

    /// Replaces the salary kind, keeping the current wage.
    pub fn change_salary_kind(&mut self, salary_kind: SalaryKind) -> EngineResult<()> {
        self.validate(self.base_wage, salary_kind)?;
        self.salary_kind = salary_kind;
        Ok(())
    }

    /// Returns the lowest accepted wage for `salary_kind` on the effective date.
    pub fn floor_for(&self, salary_kind: SalaryKind) -> Decimal {
        match salary_kind {
            SalaryKind::Ordinary => self.minimum_wage,
            SalaryKind::Integral => {
                self.minimum_wage * Decimal::from(INTEGRAL_SALARY_MINIMUM_WAGES)
            }
        }
    }

    /// Returns the base wage.
    pub fn base_wage(&self) -> Decimal {
        self.base_wage
    }

    /// Returns the salary kind.
    pub fn salary_kind(&self) -> SalaryKind {
        self.salary_kind
    }

    /// Returns the date the wage is evaluated on.
    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    /// Returns the minimum wage in force on the effective date.
    pub fn minimum_wage(&self) -> Decimal {
        self.minimum_wage
    }

    fn validate(&self, base_wage: Decimal, salary_kind: SalaryKind) -> EngineResult<()> {
        validate_amount("base_wage", base_wage)?;
        let floor = self.floor_for(salary_kind);
        if base_wage < floor {
            return Err(EngineError::FloorViolation {
                salary_kind: salary_kind.to_string(),
                wage: base_wage,
                floor,
            });
        }
        Ok(())
    }
}
