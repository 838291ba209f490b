//! Request types for the payroll liquidation API.
//!
//! Overtime quantities arrive keyed by payroll code (`"HED"`, `"RN"`, ...)
//! and as whole hours; converting free-form durations is left to the caller.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{OvertimeLedger, PayrollLiquidation, ordinary_hourly_rate};
use crate::config::ParameterTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{OvertimeCategory, RiskClass, SalaryKind};

/// Request body for the `/liquidations` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidationRequest {
    /// Monthly base wage.
    pub base_wage: Decimal,
    /// How the wage is structured.
    #[serde(default)]
    pub salary_kind: SalaryKind,
    /// The date that selects the legal parameters.
    pub date: NaiveDate,
    /// Whether the employee lives near the workplace.
    #[serde(default)]
    pub lives_near_workplace: bool,
    /// Occupational-risk class.
    #[serde(default)]
    pub risk_class: RiskClass,
    /// Additional pay that constitutes salary.
    #[serde(default)]
    pub taxable_pay: Decimal,
    /// Additional pay that does not constitute salary.
    #[serde(default)]
    pub non_taxable_pay: Decimal,
    /// Whole overtime hours keyed by payroll code.
    #[serde(default)]
    pub overtime: BTreeMap<String, i64>,
}

impl LiquidationRequest {
    /// Builds a configured liquidation session from the request.
    pub fn into_liquidation(self, params: &ParameterTable) -> EngineResult<PayrollLiquidation> {
        let mut liquidation =
            PayrollLiquidation::new(self.base_wage, self.salary_kind, self.date, params)?;

        liquidation.change_risk(self.risk_class)?;
        liquidation.change_lives_near_workplace(self.lives_near_workplace)?;
        liquidation.change_taxable_pay(self.taxable_pay)?;
        liquidation.change_non_taxable_pay(self.non_taxable_pay)?;
        for (category, hours) in parse_overtime(&self.overtime)? {
            liquidation.register_overtime(category, hours)?;
        }

        Ok(liquidation)
    }
}

/// Request body for the `/overtime` endpoint.
///
/// Either `hourly_rate` or `base_wage` must be given. A base wage is divided
/// by the monthly working hours in force on `date` (today when omitted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// Monthly base wage the hourly rate is derived from.
    #[serde(default)]
    pub base_wage: Option<Decimal>,
    /// Explicit ordinary hourly rate; takes precedence over `base_wage`.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// The date that selects the monthly working hours.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Whole hours keyed by payroll code.
    pub hours: BTreeMap<String, i64>,
}

impl OvertimeRequest {
    /// Builds a priced overtime ledger from the request.
    pub fn into_ledger(self, params: &ParameterTable, today: NaiveDate) -> EngineResult<OvertimeLedger> {
        let hourly_rate = match (self.hourly_rate, self.base_wage) {
            (Some(rate), _) => rate,
            (None, Some(base_wage)) => {
                let hours = params.monthly_working_hours(self.date.unwrap_or(today))?;
                ordinary_hourly_rate(base_wage, hours)
            }
            (None, None) => {
                return Err(EngineError::InputDomain {
                    field: "hourly_rate".to_string(),
                    message: "either base_wage or hourly_rate is required".to_string(),
                });
            }
        };

        let mut ledger = OvertimeLedger::new(hourly_rate)?;
        for (category, hours) in parse_overtime(&self.hours)? {
            ledger.register_quantity(category, hours)?;
        }
        Ok(ledger)
    }
}

/// Resolves payroll codes to categories. Codes are case-insensitive, so two
/// keys naming the same category are rejected.
fn parse_overtime(
    hours: &BTreeMap<String, i64>,
) -> EngineResult<BTreeMap<OvertimeCategory, i64>> {
    let mut parsed = BTreeMap::new();
    for (code, &quantity) in hours {
        let category = OvertimeCategory::from_str(code)?;
        if parsed.insert(category, quantity).is_some() {
            return Err(EngineError::InputDomain {
                field: format!("overtime.{}", category.code()),
                message: format!("category {} is given more than once", category.code()),
            });
        }
    }
    Ok(parsed)
}
