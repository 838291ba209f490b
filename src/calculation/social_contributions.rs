//! Employer social-security and parafiscal contributions.
//!
//! Every contribution line is described by a [`ContributionRule`]: which
//! base it is applied to and how its rate is chosen. Health, pension and
//! occupational risk share the Law 1393 base; the parafiscal levies use the
//! contribution base floored at one minimum wage.
//!
//! Employers whose worker accrues less than ten minimum wages are exonerated
//! from health, ICBF and SENA. Pension, ARL and the family compensation fund
//! are always paid.

use rust_decimal::Decimal;

use crate::models::{ContributionKind, ContributionLine, RiskClass};

use super::rounding::{PESO_DECIMALS, round_half_away};

/// Share of the accrued total the taxable total must reach before the
/// Law 1393 adjustment stops applying.
pub const LAW_1393_THRESHOLD_SHARE: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Cap on the Law 1393 base, in minimum wages.
pub const CONTRIBUTION_CAP_MINIMUM_WAGES: u32 = 25;

/// Accrued total, in minimum wages, at and above which no line is exonerated.
pub const EXONERATION_MINIMUM_WAGES: u32 = 10;

/// How the base of a contribution line is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseRule {
    /// Contribution base plus the Law 1393 adjustment, capped at 25 minimum wages.
    Law1393Capped,
    /// Contribution base, floored at one minimum wage.
    FloorAtMinimumWage,
}

/// How the rate of a contribution line is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateRule {
    /// The rate always applies.
    Fixed(Decimal),
    /// The rate drops to zero below the exoneration threshold.
    Exonerable(Decimal),
    /// The rate of the employee's occupational-risk class.
    OccupationalRisk,
}

/// The evaluation rule of one contribution line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionRule {
    /// The line this rule evaluates.
    pub kind: ContributionKind,
    /// How the base is computed.
    pub base_rule: BaseRule,
    /// How the rate is chosen.
    pub rate_rule: RateRule,
}

impl ContributionRule {
    /// Returns the rule for `kind`.
    pub fn for_kind(kind: ContributionKind) -> Self {
        let (base_rule, rate_rule) = match kind {
            ContributionKind::Health => {
                (BaseRule::Law1393Capped, RateRule::Exonerable(Decimal::new(85, 3)))
            }
            ContributionKind::Pension => {
                (BaseRule::Law1393Capped, RateRule::Fixed(Decimal::new(12, 2)))
            }
            ContributionKind::OccupationalRisk => {
                (BaseRule::Law1393Capped, RateRule::OccupationalRisk)
            }
            ContributionKind::FamilyCompensation => {
                (BaseRule::FloorAtMinimumWage, RateRule::Fixed(Decimal::new(4, 2)))
            }
            ContributionKind::ChildWelfare => {
                (BaseRule::FloorAtMinimumWage, RateRule::Exonerable(Decimal::new(3, 2)))
            }
            ContributionKind::Training => {
                (BaseRule::FloorAtMinimumWage, RateRule::Exonerable(Decimal::new(2, 2)))
            }
        };

        Self {
            kind,
            base_rule,
            rate_rule,
        }
    }
}

/// The remuneration figures a contribution is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionInputs {
    /// Base wage plus taxable pay plus overtime.
    pub taxable_total: Decimal,
    /// Taxable total plus non-taxable pay.
    pub accrued_total: Decimal,
    /// Taxable total after the integral-salary discount.
    pub contribution_base_total: Decimal,
    /// The minimum wage in force.
    pub minimum_wage: Decimal,
    /// The employee's occupational-risk class.
    pub risk_class: RiskClass,
}

/// Returns the Law 1393 base shared by health, pension and ARL.
///
/// When the taxable total is below 60% of the accrued total, the shortfall is
/// added to the contribution base. The result is capped at 25 minimum wages.
///
/// # Example
///
/// ```
/// use nomina_engine::calculation::{ContributionInputs, law_1393_base};
/// use nomina_engine::models::RiskClass;
/// use rust_decimal::Decimal;
///
/// let inputs = ContributionInputs {
///     taxable_total: Decimal::from(5_000_000),
///     accrued_total: Decimal::from(25_000_000),
///     contribution_base_total: Decimal::from(5_000_000),
///     minimum_wage: Decimal::from(1_300_000),
///     risk_class: RiskClass::I,
/// };
/// assert_eq!(law_1393_base(&inputs), Decimal::from(15_000_000));
/// ```
pub fn law_1393_base(inputs: &ContributionInputs) -> Decimal {
    let threshold = inputs.accrued_total * LAW_1393_THRESHOLD_SHARE;
    let adjustment = (threshold - inputs.taxable_total).max(Decimal::ZERO);
    let raw_base = adjustment + inputs.contribution_base_total;
    let cap = inputs.minimum_wage * Decimal::from(CONTRIBUTION_CAP_MINIMUM_WAGES);

    raw_base.min(cap)
}

/// Returns the base of the parafiscal levies.
pub fn parafiscal_base(inputs: &ContributionInputs) -> Decimal {
    inputs.contribution_base_total.max(inputs.minimum_wage)
}

/// True when the accrued total is strictly below ten minimum wages.
pub fn is_exonerated(inputs: &ContributionInputs) -> bool {
    inputs.accrued_total < inputs.minimum_wage * Decimal::from(EXONERATION_MINIMUM_WAGES)
}

/// Computes one contribution line.
pub fn calculate_contribution(kind: ContributionKind, inputs: &ContributionInputs) -> ContributionLine {
    let rule = ContributionRule::for_kind(kind);

    let base = match rule.base_rule {
        BaseRule::Law1393Capped => law_1393_base(inputs),
        BaseRule::FloorAtMinimumWage => parafiscal_base(inputs),
    };

    let rate = match rule.rate_rule {
        RateRule::Fixed(rate) => rate,
        RateRule::Exonerable(_) if is_exonerated(inputs) => Decimal::ZERO,
        RateRule::Exonerable(rate) => rate,
        RateRule::OccupationalRisk => inputs.risk_class.rate(),
    };

    ContributionLine {
        kind,
        name: kind.name().to_string(),
        description: kind.description().to_string(),
        base,
        rate,
        amount: round_half_away(base * rate, PESO_DECIMALS),
    }
}

/// Computes every contribution line, in liquidation order.
pub fn calculate_social_security(inputs: &ContributionInputs) -> Vec<ContributionLine> {
    ContributionKind::ALL
        .into_iter()
        .map(|kind| calculate_contribution(kind, inputs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Inputs for an ordinary salary with no non-taxable pay.
    fn plain(taxable: &str) -> ContributionInputs {
        ContributionInputs {
            taxable_total: dec(taxable),
            accrued_total: dec(taxable),
            contribution_base_total: dec(taxable),
            minimum_wage: dec("1300000"),
            risk_class: RiskClass::I,
        }
    }

    fn amount(kind: ContributionKind, inputs: &ContributionInputs) -> Decimal {
        calculate_contribution(kind, inputs).amount
    }

    #[test]
    fn test_law_1393_threshold_is_sixty_percent() {
        assert_eq!(LAW_1393_THRESHOLD_SHARE, dec("0.6"));
    }

    #[test]
    fn test_health_at_ten_minimum_wages() {
        let inputs = plain("13000000");

        assert_eq!(law_1393_base(&inputs), dec("13000000"));
        assert_eq!(amount(ContributionKind::Health, &inputs), dec("1105000"));
    }

    #[test]
    fn test_health_base_capped_at_25_minimum_wages() {
        let inputs = ContributionInputs {
            accrued_total: dec("56000000"),
            ..plain("36000000")
        };

        assert_eq!(law_1393_base(&inputs), dec("32500000"));
        assert_eq!(amount(ContributionKind::Health, &inputs), dec("2762500"));
    }

    #[test]
    fn test_law_1393_adjustment_applies_to_every_insurance_line() {
        let inputs = ContributionInputs {
            accrued_total: dec("25000000"),
            ..plain("5000000")
        };

        assert_eq!(law_1393_base(&inputs), dec("15000000"));
        assert_eq!(amount(ContributionKind::Health, &inputs), dec("1275000"));
        assert_eq!(amount(ContributionKind::Pension, &inputs), dec("1800000"));
        assert_eq!(amount(ContributionKind::OccupationalRisk, &inputs), dec("78300"));
    }

    #[test]
    fn test_parafiscals_ignore_law_1393_adjustment() {
        let inputs = ContributionInputs {
            accrued_total: dec("25000000"),
            ..plain("5000000")
        };

        assert_eq!(parafiscal_base(&inputs), dec("5000000"));
        assert_eq!(amount(ContributionKind::FamilyCompensation, &inputs), dec("200000"));
        assert_eq!(amount(ContributionKind::ChildWelfare, &inputs), dec("150000"));
        assert_eq!(amount(ContributionKind::Training, &inputs), dec("100000"));
    }

    #[test]
    fn test_no_adjustment_when_taxable_exceeds_sixty_percent() {
        let inputs = ContributionInputs {
            accrued_total: dec("50500000"),
            ..plain("30500000")
        };

        assert_eq!(law_1393_base(&inputs), dec("30500000"));
        assert_eq!(amount(ContributionKind::Pension, &inputs), dec("3660000"));
    }

    #[test]
    fn test_pension_at_minimum_wage() {
        assert_eq!(amount(ContributionKind::Pension, &plain("1300000")), dec("156000"));
    }

    #[test]
    fn test_occupational_risk_by_class() {
        let expected = [
            (RiskClass::I, "6786"),
            (RiskClass::II, "13572"),
            (RiskClass::III, "31668"),
            (RiskClass::IV, "56550"),
            (RiskClass::V, "90480"),
        ];

        for (risk_class, value) in expected {
            let inputs = ContributionInputs {
                risk_class,
                ..plain("1300000")
            };
            assert_eq!(
                amount(ContributionKind::OccupationalRisk, &inputs),
                dec(value),
                "risk class {}",
                risk_class
            );
        }
    }

    #[test]
    fn test_parafiscals_at_ten_minimum_wages() {
        let inputs = plain("13000000");

        assert_eq!(amount(ContributionKind::FamilyCompensation, &inputs), dec("520000"));
        assert_eq!(amount(ContributionKind::ChildWelfare, &inputs), dec("390000"));
        assert_eq!(amount(ContributionKind::Training, &inputs), dec("260000"));
    }

    #[test]
    fn test_parafiscals_with_non_taxable_pay() {
        let inputs = ContributionInputs {
            accrued_total: dec("16900000"),
            ..plain("11830000")
        };

        assert_eq!(amount(ContributionKind::FamilyCompensation, &inputs), dec("473200"));
        assert_eq!(amount(ContributionKind::ChildWelfare, &inputs), dec("354900"));
        assert_eq!(amount(ContributionKind::Training, &inputs), dec("236600"));
    }

    #[test]
    fn test_parafiscal_base_floored_at_minimum_wage() {
        let inputs = plain("900000");
        assert_eq!(parafiscal_base(&inputs), dec("1300000"));
        assert_eq!(amount(ContributionKind::FamilyCompensation, &inputs), dec("52000"));
    }

    #[test]
    fn test_exactly_ten_minimum_wages_is_not_exonerated() {
        let inputs = plain("13000000");

        assert!(!is_exonerated(&inputs));
        for line in calculate_social_security(&inputs) {
            assert!(line.rate > Decimal::ZERO, "{} should not be exonerated", line.name);
        }
    }

    #[test]
    fn test_one_unit_below_threshold_is_exonerated() {
        let inputs = plain("12999999");
        assert!(is_exonerated(&inputs));

        let lines = calculate_social_security(&inputs);
        let rate_of = |kind: ContributionKind| lines.iter().find(|l| l.kind == kind).unwrap().rate;

        assert_eq!(rate_of(ContributionKind::Health), Decimal::ZERO);
        assert_eq!(rate_of(ContributionKind::ChildWelfare), Decimal::ZERO);
        assert_eq!(rate_of(ContributionKind::Training), Decimal::ZERO);
        assert_eq!(rate_of(ContributionKind::Pension), dec("0.12"));
        assert_eq!(rate_of(ContributionKind::OccupationalRisk), dec("0.00522"));
        assert_eq!(rate_of(ContributionKind::FamilyCompensation), dec("0.04"));
    }

    #[test]
    fn test_exonerated_line_keeps_its_base() {
        let line = calculate_contribution(ContributionKind::Health, &plain("2000000"));

        assert_eq!(line.base, dec("2000000"));
        assert_eq!(line.amount, Decimal::ZERO);
    }

    #[test]
    fn test_social_security_in_liquidation_order() {
        let kinds: Vec<ContributionKind> = calculate_social_security(&plain("2000000"))
            .into_iter()
            .map(|line| line.kind)
            .collect();

        assert_eq!(kinds, ContributionKind::ALL.to_vec());
    }

    #[test]
    fn test_every_kind_has_a_rule() {
        for kind in ContributionKind::ALL {
            assert_eq!(ContributionRule::for_kind(kind).kind, kind);
        }
    }

    proptest! {
        #[test]
        fn prop_contributions_are_whole_pesos(
            taxable in 0u64..100_000_000,
            non_taxable in 0u64..100_000_000,
            cents in 0u32..100,
        ) {
            let taxable = Decimal::from(taxable) + Decimal::new(cents as i64, 2);
            let inputs = ContributionInputs {
                taxable_total: taxable,
                accrued_total: taxable + Decimal::from(non_taxable),
                contribution_base_total: taxable,
                minimum_wage: dec("1423500"),
                risk_class: RiskClass::III,
            };

            for line in calculate_social_security(&inputs) {
                prop_assert_eq!(line.amount, line.amount.trunc());
                prop_assert!(line.amount >= Decimal::ZERO);
            }
        }

        #[test]
        fn prop_law_1393_base_never_exceeds_cap(
            taxable in 0u64..200_000_000,
            non_taxable in 0u64..200_000_000,
        ) {
            let taxable = Decimal::from(taxable);
            let inputs = ContributionInputs {
                taxable_total: taxable,
                accrued_total: taxable + Decimal::from(non_taxable),
                contribution_base_total: taxable,
                minimum_wage: dec("1300000"),
                risk_class: RiskClass::I,
            };

            prop_assert!(law_1393_base(&inputs) <= dec("32500000"));
        }
    }
}
