//! Social benefit accruals.
//!
//! The employer provisions one twelfth of the benefit base each month for the
//! service bonus and severance, 12% a year of it for severance interest, and
//! one twenty-fourth of the taxable total for vacation. Integral salaries
//! already bundle the first three, so only vacation accrues for them.

use rust_decimal::Decimal;

use crate::models::{BenefitKind, BenefitLine};

use super::remuneration::INTEGRAL_CONTRIBUTION_FACTOR;
use super::rounding::{CENT_DECIMALS, round_half_away};

/// Which base a benefit line accrues on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenefitBaseRule {
    /// 70% of the taxable total for integral salaries, otherwise taxable
    /// total plus transport subsidy.
    BenefitBase,
    /// The raw taxable total, regardless of salary kind.
    TaxableTotal,
}

/// The evaluation rule of one benefit line: `base x rate / divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenefitRule {
    /// The line this rule evaluates.
    pub kind: BenefitKind,
    /// Which base the line accrues on.
    pub base_rule: BenefitBaseRule,
    /// Annual rate applied to the base.
    pub rate: Decimal,
    /// Number of monthly instalments the annual amount is spread over.
    pub divisor: u32,
    /// Whether an integral salary accrues nothing on this line.
    pub zero_if_integral: bool,
}

impl BenefitRule {
    /// Returns the rule for `kind`.
    pub fn for_kind(kind: BenefitKind) -> Self {
        let (base_rule, rate, divisor, zero_if_integral) = match kind {
            BenefitKind::ServiceBonus => (BenefitBaseRule::BenefitBase, Decimal::ONE, 12, true),
            BenefitKind::Severance => (BenefitBaseRule::BenefitBase, Decimal::ONE, 12, true),
            BenefitKind::SeveranceInterest => {
                (BenefitBaseRule::BenefitBase, Decimal::new(12, 2), 12, true)
            }
            BenefitKind::Vacation => (BenefitBaseRule::TaxableTotal, Decimal::ONE, 24, false),
        };

        Self {
            kind,
            base_rule,
            rate,
            divisor,
            zero_if_integral,
        }
    }
}

/// The remuneration figures a benefit is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenefitInputs {
    /// Base wage plus taxable pay plus overtime.
    pub taxable_total: Decimal,
    /// The transport subsidy paid this month.
    pub transport_subsidy: Decimal,
    /// Whether the salary is integral.
    pub integral: bool,
}

impl BenefitInputs {
    /// Returns the base the service bonus and severance lines accrue on.
    ///
    /// ```
    /// use nomina_engine::calculation::BenefitInputs;
    /// use rust_decimal::Decimal;
    ///
    /// let inputs = BenefitInputs {
    ///     taxable_total: Decimal::from(1_423_500),
    ///     transport_subsidy: Decimal::from(200_000),
    ///     integral: false,
    /// };
    /// assert_eq!(inputs.benefit_base(), Decimal::from(1_623_500));
    /// ```
    pub fn benefit_base(&self) -> Decimal {
        if self.integral {
            self.taxable_total * INTEGRAL_CONTRIBUTION_FACTOR
        } else {
            self.taxable_total + self.transport_subsidy
        }
    }
}

/// Computes one benefit line.
pub fn calculate_benefit(kind: BenefitKind, inputs: &BenefitInputs) -> BenefitLine {
    let rule = BenefitRule::for_kind(kind);

    let base = match rule.base_rule {
        BenefitBaseRule::BenefitBase => inputs.benefit_base(),
        BenefitBaseRule::TaxableTotal => inputs.taxable_total,
    };

    let amount = if rule.zero_if_integral && inputs.integral {
        Decimal::ZERO
    } else {
        round_half_away(base * rule.rate / Decimal::from(rule.divisor), CENT_DECIMALS)
    };

    BenefitLine {
        kind,
        name: kind.name().to_string(),
        description: kind.description().to_string(),
        base,
        amount,
    }
}

/// Computes every benefit line, in liquidation order.
pub fn calculate_social_benefits(inputs: &BenefitInputs) -> Vec<BenefitLine> {
    BenefitKind::ALL
        .into_iter()
        .map(|kind| calculate_benefit(kind, inputs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ordinary(taxable: &str, subsidy: &str) -> BenefitInputs {
        BenefitInputs {
            taxable_total: dec(taxable),
            transport_subsidy: dec(subsidy),
            integral: false,
        }
    }

    fn amount(kind: BenefitKind, inputs: &BenefitInputs) -> Decimal {
        calculate_benefit(kind, inputs).amount
    }

    #[test]
    fn test_minimum_wage_with_transport_subsidy() {
        let inputs = ordinary("1423500", "200000");

        assert_eq!(amount(BenefitKind::ServiceBonus, &inputs), dec("135291.67"));
        assert_eq!(amount(BenefitKind::Severance, &inputs), dec("135291.67"));
        assert_eq!(amount(BenefitKind::SeveranceInterest, &inputs), dec("16235.00"));
        assert_eq!(amount(BenefitKind::Vacation, &inputs), dec("59312.50"));
    }

    #[test]
    fn test_vacation_excludes_transport_subsidy() {
        let line = calculate_benefit(BenefitKind::Vacation, &ordinary("1423500", "200000"));
        assert_eq!(line.base, dec("1423500"));
    }

    #[test]
    fn test_without_subsidy() {
        let inputs = ordinary("3537500", "0");

        assert_eq!(amount(BenefitKind::ServiceBonus, &inputs), dec("294791.67"));
        assert_eq!(amount(BenefitKind::SeveranceInterest, &inputs), dec("35375"));
        assert_eq!(amount(BenefitKind::Vacation, &inputs), dec("147395.83"));
    }

    #[test]
    fn test_integral_salary_accrues_only_vacation() {
        let inputs = BenefitInputs {
            taxable_total: dec("20000000"),
            transport_subsidy: Decimal::ZERO,
            integral: true,
        };

        assert_eq!(inputs.benefit_base(), dec("14000000"));
        assert_eq!(amount(BenefitKind::ServiceBonus, &inputs), Decimal::ZERO);
        assert_eq!(amount(BenefitKind::Severance, &inputs), Decimal::ZERO);
        assert_eq!(amount(BenefitKind::SeveranceInterest, &inputs), Decimal::ZERO);
        assert_eq!(amount(BenefitKind::Vacation, &inputs), dec("833333.33"));
    }

    #[test]
    fn test_amounts_round_half_away_to_cents() {
        // 1.5 / 24 = 0.0625 -> 0.06; 0.18 / 12 = 0.015 -> 0.02
        let inputs = ordinary("0.18", "0");

        assert_eq!(amount(BenefitKind::ServiceBonus, &inputs), dec("0.02"));
        assert_eq!(amount(BenefitKind::Vacation, &ordinary("1.5", "0")), dec("0.06"));
    }

    #[test]
    fn test_benefits_in_liquidation_order() {
        let kinds: Vec<BenefitKind> = calculate_social_benefits(&ordinary("2000000", "0"))
            .into_iter()
            .map(|line| line.kind)
            .collect();

        assert_eq!(kinds, BenefitKind::ALL.to_vec());
    }

    #[test]
    fn test_only_vacation_survives_integral_salary() {
        for kind in BenefitKind::ALL {
            let rule = BenefitRule::for_kind(kind);
            assert_eq!(rule.zero_if_integral, kind != BenefitKind::Vacation);
        }
    }
}
