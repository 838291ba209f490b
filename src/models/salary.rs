//! Salary kind and occupational-risk classification.
//!
//! These enums describe how an employee is paid and which risk tier their
//! work falls in; both drive rule selection in the calculation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents how the base wage is structured under Colombian labor law.
///
/// # Example
///
/// ```
/// use nomina_engine::models::SalaryKind;
///
/// let kind: SalaryKind = serde_json::from_str("\"integral\"").unwrap();
/// assert!(kind.is_integral());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryKind {
    /// Ordinary salary; benefits accrue separately.
    #[default]
    Ordinary,
    /// Integral salary bundling benefit accrual into the wage (at least 13 minimum wages).
    Integral,
}

impl SalaryKind {
    /// Returns true for an integral salary.
    pub fn is_integral(self) -> bool {
        self == SalaryKind::Integral
    }
}

impl fmt::Display for SalaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalaryKind::Ordinary => write!(f, "ordinary"),
            SalaryKind::Integral => write!(f, "integral"),
        }
    }
}

/// The five occupational-risk classes used to price ARL insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RiskClass {
    /// Minimum risk (office work).
    #[default]
    I,
    /// Low risk.
    II,
    /// Medium risk.
    III,
    /// High risk.
    IV,
    /// Maximum risk.
    V,
}

impl RiskClass {
    /// Every risk class, lowest first.
    pub const ALL: [RiskClass; 5] = [
        RiskClass::I,
        RiskClass::II,
        RiskClass::III,
        RiskClass::IV,
        RiskClass::V,
    ];

    /// Returns the employer ARL contribution rate for this class.
    ///
    /// ```
    /// use nomina_engine::models::RiskClass;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(RiskClass::III.rate(), Decimal::new(2436, 5));
    /// ```
    pub fn rate(self) -> Decimal {
        match self {
            RiskClass::I => Decimal::new(522, 5),
            RiskClass::II => Decimal::new(1044, 5),
            RiskClass::III => Decimal::new(2436, 5),
            RiskClass::IV => Decimal::new(4350, 5),
            RiskClass::V => Decimal::new(6960, 5),
        }
    }
}

impl fmt::Display for RiskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskClass::I => "I",
            RiskClass::II => "II",
            RiskClass::III => "III",
            RiskClass::IV => "IV",
            RiskClass::V => "V",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_salary_kind_is_ordinary() {
        assert_eq!(SalaryKind::default(), SalaryKind::Ordinary);
        assert!(!SalaryKind::Ordinary.is_integral());
    }

    #[test]
    fn test_serialize_salary_kind() {
        assert_eq!(
            serde_json::to_string(&SalaryKind::Integral).unwrap(),
            "\"integral\""
        );
        let kind: SalaryKind = serde_json::from_str("\"ordinary\"").unwrap();
        assert_eq!(kind, SalaryKind::Ordinary);
    }

    #[test]
    fn test_risk_rates() {
        assert_eq!(RiskClass::I.rate(), dec("0.00522"));
        assert_eq!(RiskClass::II.rate(), dec("0.01044"));
        assert_eq!(RiskClass::III.rate(), dec("0.02436"));
        assert_eq!(RiskClass::IV.rate(), dec("0.04350"));
        assert_eq!(RiskClass::V.rate(), dec("0.06960"));
    }

    #[test]
    fn test_risk_rates_increase_with_class() {
        let rates: Vec<Decimal> = RiskClass::ALL.iter().map(|c| c.rate()).collect();
        assert!(rates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_deserialize_risk_class_from_roman_numeral() {
        let class: RiskClass = serde_json::from_str("\"IV\"").unwrap();
        assert_eq!(class, RiskClass::IV);
        assert_eq!(class.to_string(), "IV");
    }

    #[test]
    fn test_unknown_risk_class_fails_to_deserialize() {
        let result: Result<RiskClass, _> = serde_json::from_str("\"VI\"");
        assert!(result.is_err());
    }
}
