//! Payroll liquidation orchestration.
//!
//! [`PayrollLiquidation`] owns the stateful components of one liquidation
//! session and turns them into a [`LiquidationSnapshot`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ParameterTable;
use crate::error::EngineResult;
use crate::models::{
    EmployerProvisions, LiquidationSnapshot, OvertimeCategory, PayrollExpenses, RiskClass,
    SalaryKind,
};

use super::overtime_ledger::{OvertimeLedger, ordinary_hourly_rate};
use super::remuneration::RemunerationAggregate;
use super::social_benefits::{BenefitInputs, calculate_social_benefits};
use super::social_contributions::{ContributionInputs, calculate_social_security};
use super::transport_subsidy::TransportSubsidy;
use super::wage_profile::WageProfile;

/// Whether the current configuration has been liquidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidationState {
    /// Configuration changed since the last liquidation (or none happened yet).
    Configured,
    /// The latest snapshot reflects the current configuration.
    Liquidated,
}

/// One employee's monthly liquidation session.
///
/// The session is configured through its `change_*` and `register_*`
/// operations and liquidated with [`PayrollLiquidation::liquidate`]. Every
/// operation that succeeds brings the derived fields of the session back in
/// line with the new configuration before returning.
///
/// # Example
///
/// ```
/// use nomina_engine::calculation::PayrollLiquidation;
/// use nomina_engine::config::ParameterTable;
/// use nomina_engine::models::{OvertimeCategory, SalaryKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let params = ParameterTable::statutory();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
///
/// let mut liquidation =
///     PayrollLiquidation::new(Decimal::from(2_350_000), SalaryKind::Ordinary, date, &params)
///         .unwrap();
/// liquidation
///     .register_overtime(OvertimeCategory::DaytimeOvertime, 3)
///     .unwrap();
///
/// let snapshot = liquidation.liquidate();
/// assert_eq!(snapshot.expenses.overtime, Decimal::from(37_500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollLiquidation {
    monthly_working_hours: u32,
    wage: WageProfile,
    remuneration: RemunerationAggregate,
    transport: TransportSubsidy,
    overtime: OvertimeLedger,
    risk_class: RiskClass,
    state: LiquidationState,
}

impl PayrollLiquidation {
    /// Starts a liquidation session for `base_wage` on `date`.
    ///
    /// All legal parameters are resolved once, here; the session does not
    /// keep a reference to `params`.
    ///
    /// # Returns
    ///
    /// Returns an error if:
    /// - The year of `date` has no legislated values (`ParameterNotFound`)
    /// - The wage is below the floor for `salary_kind` (`FloorViolation`)
    pub fn new(
        base_wage: Decimal,
        salary_kind: SalaryKind,
        date: NaiveDate,
        params: &ParameterTable,
    ) -> EngineResult<Self> {
        let wage = WageProfile::new(base_wage, salary_kind, date, params)?;
        let monthly_working_hours = params.monthly_working_hours(date)?;
        let remuneration = RemunerationAggregate::new(base_wage, salary_kind)?;
        let transport =
            TransportSubsidy::new(remuneration.transport_subsidy_base(), date, params)?;
        let overtime =
            OvertimeLedger::new(ordinary_hourly_rate(base_wage, monthly_working_hours))?;

        Ok(Self {
            monthly_working_hours,
            wage,
            remuneration,
            transport,
            overtime,
            risk_class: RiskClass::default(),
            state: LiquidationState::Configured,
        })
    }

    /// Replaces the base wage.
    pub fn change_wage(&mut self, base_wage: Decimal) -> EngineResult<()> {
        self.wage.change_wage(base_wage)?;
        self.recompute_dependents()
    }

    /// Replaces the salary kind.
    pub fn change_salary_kind(&mut self, salary_kind: SalaryKind) -> EngineResult<()> {
        self.wage.change_salary_kind(salary_kind)?;
        self.recompute_dependents()
    }

    /// Replaces the occupational-risk class.
    pub fn change_risk(&mut self, risk_class: RiskClass) -> EngineResult<()> {
        self.risk_class = risk_class;
        self.recompute_dependents()
    }

    /// Records whole `hours` for an overtime category.
    pub fn register_overtime(&mut self, category: OvertimeCategory, hours: i64) -> EngineResult<()> {
        self.overtime.register_quantity(category, hours)?;
        self.recompute_dependents()
    }

    /// Records whether the employee lives near the workplace.
    pub fn change_lives_near_workplace(&mut self, lives_near_workplace: bool) -> EngineResult<()> {
        self.transport.change_lives_near_workplace(lives_near_workplace);
        self.recompute_dependents()
    }

    /// Replaces the additional pay that constitutes salary.
    pub fn change_taxable_pay(&mut self, taxable_pay: Decimal) -> EngineResult<()> {
        self.remuneration.change_taxable_pay(taxable_pay)?;
        self.recompute_dependents()
    }

    /// Replaces the additional pay that does not constitute salary.
    pub fn change_non_taxable_pay(&mut self, non_taxable_pay: Decimal) -> EngineResult<()> {
        self.remuneration.change_non_taxable_pay(non_taxable_pay)?;
        self.recompute_dependents()
    }

    /// Computes the snapshot for the current configuration.
    ///
    /// Sub-components are only read; liquidating twice without an
    /// intervening change yields equal snapshots.
    pub fn liquidate(&mut self) -> LiquidationSnapshot {
        let snapshot = self.snapshot();
        self.state = LiquidationState::Liquidated;
        snapshot
    }

    /// Returns the state of the session.
    pub fn state(&self) -> LiquidationState {
        self.state
    }

    /// Returns the wage profile.
    pub fn wage(&self) -> &WageProfile {
        &self.wage
    }

    /// Returns the remuneration totals.
    pub fn remuneration(&self) -> &RemunerationAggregate {
        &self.remuneration
    }

    /// Returns the transport subsidy state.
    pub fn transport(&self) -> &TransportSubsidy {
        &self.transport
    }

    /// Returns the overtime ledger.
    pub fn overtime(&self) -> &OvertimeLedger {
        &self.overtime
    }

    /// Returns the occupational-risk class.
    pub fn risk_class(&self) -> RiskClass {
        self.risk_class
    }

    /// Returns the monthly working hours in force on the liquidation date.
    pub fn monthly_working_hours(&self) -> u32 {
        self.monthly_working_hours
    }

    /// Brings every derived field in line with the owning components.
    ///
    /// wage -> remuneration base and kind -> overtime rate -> overtime total
    /// -> transport subsidy base.
    fn recompute_dependents(&mut self) -> EngineResult<()> {
        let base_wage = self.wage.base_wage();

        self.remuneration.change_base_wage(base_wage)?;
        self.remuneration.change_salary_kind(self.wage.salary_kind());

        self.overtime
            .change_hourly_rate(ordinary_hourly_rate(base_wage, self.monthly_working_hours))?;
        self.remuneration.change_overtime_total(self.overtime.total())?;

        self.transport
            .change_wage_base(self.remuneration.transport_subsidy_base())?;

        self.state = LiquidationState::Configured;
        Ok(())
    }

    fn snapshot(&self) -> LiquidationSnapshot {
        let transport_subsidy = self.transport.amount();

        let contributions = ContributionInputs {
            taxable_total: self.remuneration.taxable_total(),
            accrued_total: self.remuneration.accrued_total(),
            contribution_base_total: self.remuneration.contribution_base_total(),
            minimum_wage: self.wage.minimum_wage(),
            risk_class: self.risk_class,
        };
        let benefits = BenefitInputs {
            taxable_total: self.remuneration.taxable_total(),
            transport_subsidy,
            integral: self.wage.salary_kind().is_integral(),
        };

        LiquidationSnapshot::new(
            PayrollExpenses {
                base_wage: self.remuneration.base_wage(),
                transport_subsidy,
                taxable_pay: self.remuneration.taxable_pay(),
                non_taxable_pay: self.remuneration.non_taxable_pay(),
                overtime: self.remuneration.overtime_total(),
            },
            EmployerProvisions {
                social_benefits: calculate_social_benefits(&benefits),
                social_security: calculate_social_security(&contributions),
            },
        )
    }
}
