//! Remuneration totals.
//!
//! [`RemunerationAggregate`] holds the monthly pay components of one
//! employee and derives the totals every downstream rule reads.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryKind;

/// Share of an integral salary that counts toward the contribution base.
pub const INTEGRAL_CONTRIBUTION_FACTOR: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

/// Largest monthly amount, in pesos, a wage, pay component or hourly rate
/// may take. Keeps every derived total within `Decimal` range.
pub const MAX_MONTHLY_AMOUNT: i64 = 1_000_000_000_000_000;

/// The monthly pay components of one employee.
///
/// Totals are derived on read:
///
/// - taxable total = base wage + taxable pay + overtime
/// - accrued total = taxable total + non-taxable pay
/// - contribution base total = taxable total x contribution factor
/// - transport subsidy base = base wage + taxable pay
///
/// # Example
///
/// ```
/// use nomina_engine::calculation::RemunerationAggregate;
/// use nomina_engine::models::SalaryKind;
/// use rust_decimal::Decimal;
///
/// let mut pay = RemunerationAggregate::new(Decimal::from(20_000_000), SalaryKind::Integral).unwrap();
/// pay.change_non_taxable_pay(Decimal::from(1_000_000)).unwrap();
///
/// assert_eq!(pay.contribution_base_total(), Decimal::from(14_000_000));
/// assert_eq!(pay.accrued_total(), Decimal::from(21_000_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemunerationAggregate {
    base_wage: Decimal,
    taxable_pay: Decimal,
    overtime_total: Decimal,
    non_taxable_pay: Decimal,
    salary_kind: SalaryKind,
}

impl RemunerationAggregate {
    /// Creates an aggregate holding only the base wage.
    pub fn new(base_wage: Decimal, salary_kind: SalaryKind) -> EngineResult<Self> {
        validate_amount("base_wage", base_wage)?;
        Ok(Self {
            base_wage,
            taxable_pay: Decimal::ZERO,
            overtime_total: Decimal::ZERO,
            non_taxable_pay: Decimal::ZERO,
            salary_kind,
        })
    }

    /// Replaces the base wage.
    pub fn change_base_wage(&mut self, base_wage: Decimal) -> EngineResult<()> {
        validate_amount("base_wage", base_wage)?;
        self.base_wage = base_wage;
        Ok(())
    }

    /// Replaces the additional pay that constitutes salary.
    pub fn change_taxable_pay(&mut self, taxable_pay: Decimal) -> EngineResult<()> {
        validate_amount("taxable_pay", taxable_pay)?;
        self.taxable_pay = taxable_pay;
        Ok(())
    }

    /// Replaces the overtime total.
    ///
    /// The total is derived from the overtime ledger, so only its sign is
    /// checked.
    pub fn change_overtime_total(&mut self, overtime_total: Decimal) -> EngineResult<()> {
        non_negative("overtime_total", overtime_total)?;
        self.overtime_total = overtime_total;
        Ok(())
    }

    /// Replaces the additional pay that does not constitute salary.
    pub fn change_non_taxable_pay(&mut self, non_taxable_pay: Decimal) -> EngineResult<()> {
        validate_amount("non_taxable_pay", non_taxable_pay)?;
        self.non_taxable_pay = non_taxable_pay;
        Ok(())
    }

    /// Replaces the salary kind.
    pub fn change_salary_kind(&mut self, salary_kind: SalaryKind) {
        self.salary_kind = salary_kind;
    }

    /// Base wage plus taxable pay plus overtime.
    pub fn taxable_total(&self) -> Decimal {
        self.base_wage + self.taxable_pay + self.overtime_total
    }

    /// Taxable total plus non-taxable pay.
    pub fn accrued_total(&self) -> Decimal {
        self.taxable_total() + self.non_taxable_pay
    }

    /// 0.7 for an integral salary, 1 otherwise.
    pub fn contribution_factor(&self) -> Decimal {
        if self.salary_kind.is_integral() {
            INTEGRAL_CONTRIBUTION_FACTOR
        } else {
            Decimal::ONE
        }
    }

    /// Taxable total scaled by the contribution factor.
    pub fn contribution_base_total(&self) -> Decimal {
        self.taxable_total() * self.contribution_factor()
    }

    /// Base wage plus taxable pay; overtime does not count toward
    /// transport subsidy eligibility.
    pub fn transport_subsidy_base(&self) -> Decimal {
        self.base_wage + self.taxable_pay
    }

    /// The base wage.
    pub fn base_wage(&self) -> Decimal {
        self.base_wage
    }

    /// Additional pay that constitutes salary.
    pub fn taxable_pay(&self) -> Decimal {
        self.taxable_pay
    }

    /// Total value of overtime and surcharges.
    pub fn overtime_total(&self) -> Decimal {
        self.overtime_total
    }

    /// Additional pay that does not constitute salary.
    pub fn non_taxable_pay(&self) -> Decimal {
        self.non_taxable_pay
    }

    /// The salary kind.
    pub fn salary_kind(&self) -> SalaryKind {
        self.salary_kind
    }
}

fn non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InputDomain {
            field: field.to_string(),
            message: format!("cannot be negative, got {}", value),
        });
    }
    Ok(())
}

/// Rejects negative amounts and amounts above [`MAX_MONTHLY_AMOUNT`].
pub(crate) fn validate_amount(field: &str, value: Decimal) -> EngineResult<()> {
    non_negative(field, value)?;
    if value > Decimal::from(MAX_MONTHLY_AMOUNT) {
        return Err(EngineError::InputDomain {
            field: field.to_string(),
            message: format!(
                "{} exceeds the supported maximum of {}",
                value, MAX_MONTHLY_AMOUNT
            ),
        });
    }
    Ok(())
}
