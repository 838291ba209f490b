//! Calculation logic for the payroll liquidation engine.
//!
//! This module contains the stateful components of a liquidation session
//! (wage profile, overtime ledger, transport subsidy, remuneration totals),
//! the rule tables for social-security contributions and social-benefit
//! accruals, and the [`PayrollLiquidation`] orchestrator that ties them
//! together.

mod liquidation;
mod overtime_ledger;
mod remuneration;
mod rounding;
mod social_benefits;
mod social_contributions;
mod transport_subsidy;
mod wage_profile;

pub use liquidation::{LiquidationState, PayrollLiquidation};
pub use overtime_ledger::{OvertimeCharge, OvertimeLedger, ordinary_hourly_rate};
pub use remuneration::{INTEGRAL_CONTRIBUTION_FACTOR, MAX_MONTHLY_AMOUNT, RemunerationAggregate};
pub use rounding::{CENT_DECIMALS, PESO_DECIMALS, round_half_away};
pub use social_benefits::{
    BenefitBaseRule, BenefitInputs, BenefitRule, calculate_benefit, calculate_social_benefits,
};
pub use social_contributions::{
    BaseRule, CONTRIBUTION_CAP_MINIMUM_WAGES, ContributionInputs, ContributionRule,
    EXONERATION_MINIMUM_WAGES, LAW_1393_THRESHOLD_SHARE, RateRule, calculate_contribution,
    calculate_social_security, is_exonerated, law_1393_base, parafiscal_base,
};
pub use transport_subsidy::{TRANSPORT_SUBSIDY_MINIMUM_WAGES, TransportSubsidy};
pub use wage_profile::WageProfile;
