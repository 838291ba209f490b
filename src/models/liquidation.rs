//! Liquidation result models.
//!
//! This module contains the [`LiquidationSnapshot`] type and the line items
//! it is made of: direct payroll expenses, social-security contributions and
//! social-benefit accruals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The six employer social-security and parafiscal contribution lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionKind {
    /// Health insurance (EPS).
    Health,
    /// Pension fund.
    Pension,
    /// Occupational-risk insurance (ARL).
    OccupationalRisk,
    /// Family compensation fund (CCF).
    FamilyCompensation,
    /// Colombian Family Welfare Institute (ICBF).
    ChildWelfare,
    /// National Training Service (SENA).
    Training,
}

impl ContributionKind {
    /// Every contribution line, in liquidation order.
    pub const ALL: [ContributionKind; 6] = [
        ContributionKind::Health,
        ContributionKind::Pension,
        ContributionKind::OccupationalRisk,
        ContributionKind::FamilyCompensation,
        ContributionKind::ChildWelfare,
        ContributionKind::Training,
    ];

    /// Returns the name printed on the liquidation.
    pub fn name(self) -> &'static str {
        match self {
            ContributionKind::Health => "Salud",
            ContributionKind::Pension => "Pensión",
            ContributionKind::OccupationalRisk => "ARL",
            ContributionKind::FamilyCompensation => "Caja de Compensación",
            ContributionKind::ChildWelfare => "ICBF",
            ContributionKind::Training => "SENA",
        }
    }

    /// Returns a description of the line.
    pub fn description(self) -> &'static str {
        match self {
            ContributionKind::Health => "Employer health insurance contribution",
            ContributionKind::Pension => "Employer pension contribution",
            ContributionKind::OccupationalRisk => "Occupational-risk insurance (ARL)",
            ContributionKind::FamilyCompensation => "Family compensation fund levy",
            ContributionKind::ChildWelfare => "Colombian Family Welfare Institute levy",
            ContributionKind::Training => "National Training Service levy",
        }
    }
}

/// The four statutory social-benefit accruals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitKind {
    /// Service bonus (prima de servicios).
    ServiceBonus,
    /// Severance (cesantías).
    Severance,
    /// Interest on severance.
    SeveranceInterest,
    /// Paid vacation.
    Vacation,
}

impl BenefitKind {
    /// Every benefit line, in liquidation order.
    pub const ALL: [BenefitKind; 4] = [
        BenefitKind::ServiceBonus,
        BenefitKind::Severance,
        BenefitKind::SeveranceInterest,
        BenefitKind::Vacation,
    ];

    /// Returns the name printed on the liquidation.
    pub fn name(self) -> &'static str {
        match self {
            BenefitKind::ServiceBonus => "Prima",
            BenefitKind::Severance => "Cesantías",
            BenefitKind::SeveranceInterest => "Intereses de Cesantías",
            BenefitKind::Vacation => "Vacaciones",
        }
    }

    /// Returns a description of the line.
    pub fn description(self) -> &'static str {
        match self {
            BenefitKind::ServiceBonus => "Service bonus accrual",
            BenefitKind::Severance => "Severance accrual",
            BenefitKind::SeveranceInterest => "Interest on severance accrual",
            BenefitKind::Vacation => "Vacation accrual",
        }
    }
}

/// A single employer social-security or parafiscal contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionLine {
    /// Which contribution this line is.
    pub kind: ContributionKind,
    /// The name printed on the liquidation.
    pub name: String,
    /// A description of the contribution.
    pub description: String,
    /// The contribution base the rate was applied to.
    pub base: Decimal,
    /// The rate applied (zero when exonerated).
    pub rate: Decimal,
    /// The contribution amount, in whole pesos.
    pub amount: Decimal,
}

/// A single social-benefit accrual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitLine {
    /// Which benefit this line is.
    pub kind: BenefitKind,
    /// The name printed on the liquidation.
    pub name: String,
    /// A description of the benefit.
    pub description: String,
    /// The accrual base used for this benefit.
    pub base: Decimal,
    /// The accrued amount, rounded to cents.
    pub amount: Decimal,
}

/// Direct monthly payroll expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollExpenses {
    /// The base wage.
    pub base_wage: Decimal,
    /// The transport subsidy paid (zero when not eligible).
    pub transport_subsidy: Decimal,
    /// Additional payments that constitute salary.
    pub taxable_pay: Decimal,
    /// Additional payments that do not constitute salary.
    pub non_taxable_pay: Decimal,
    /// Total value of overtime and surcharges.
    pub overtime: Decimal,
}

impl PayrollExpenses {
    /// Returns the sum of every expense.
    pub fn total(&self) -> Decimal {
        self.base_wage + self.transport_subsidy + self.taxable_pay + self.non_taxable_pay
            + self.overtime
    }
}

/// Employer-side provisions on top of direct expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerProvisions {
    /// Social-benefit accruals.
    pub social_benefits: Vec<BenefitLine>,
    /// Social-security and parafiscal contributions.
    pub social_security: Vec<ContributionLine>,
}

impl EmployerProvisions {
    /// Returns the sum of every benefit accrual.
    pub fn total_social_benefits(&self) -> Decimal {
        self.social_benefits.iter().map(|line| line.amount).sum()
    }

    /// Returns the sum of every contribution.
    pub fn total_social_security(&self) -> Decimal {
        self.social_security.iter().map(|line| line.amount).sum()
    }
}

/// The immutable result of a payroll liquidation.
///
/// # Example
///
/// ```
/// use nomina_engine::models::{EmployerProvisions, LiquidationSnapshot, PayrollExpenses};
/// use rust_decimal::Decimal;
///
/// let snapshot = LiquidationSnapshot::new(
///     PayrollExpenses {
///         base_wage: Decimal::from(2_000_000),
///         transport_subsidy: Decimal::ZERO,
///         taxable_pay: Decimal::ZERO,
///         non_taxable_pay: Decimal::ZERO,
///         overtime: Decimal::ZERO,
///     },
///     EmployerProvisions {
///         social_benefits: vec![],
///         social_security: vec![],
///     },
/// );
/// assert_eq!(snapshot.total_cost, Decimal::from(2_000_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationSnapshot {
    /// Direct payroll expenses.
    pub expenses: PayrollExpenses,
    /// Sum of direct payroll expenses.
    pub total_expenses: Decimal,
    /// Employer provisions.
    pub provisions: EmployerProvisions,
    /// Sum of every provision line.
    pub total_provision: Decimal,
    /// Full monthly cost of the employee: expenses plus provisions.
    /// Includes the transport subsidy, since it is part of the expenses.
    pub total_cost: Decimal,
}

impl LiquidationSnapshot {
    /// Builds a snapshot, deriving every total from the line items.
    pub fn new(expenses: PayrollExpenses, provisions: EmployerProvisions) -> Self {
        let total_expenses = expenses.total();
        let total_provision =
            provisions.total_social_benefits() + provisions.total_social_security();

        Self {
            expenses,
            total_expenses,
            provisions,
            total_provision,
            total_cost: total_expenses + total_provision,
        }
    }

    /// Returns the contribution line of the given kind.
    pub fn contribution(&self, kind: ContributionKind) -> Option<&ContributionLine> {
        self.provisions
            .social_security
            .iter()
            .find(|line| line.kind == kind)
    }

    /// Returns the benefit line of the given kind.
    pub fn benefit(&self, kind: BenefitKind) -> Option<&BenefitLine> {
        self.provisions
            .social_benefits
            .iter()
            .find(|line| line.kind == kind)
    }
}
