//! The date-keyed table of Colombian legal parameters.
//!
//! The table is built once at process start, either from the statutory
//! values compiled into the crate or from YAML files via
//! [`ConfigLoader`](super::ConfigLoader), and is then shared by reference
//! with every component that needs a legal value.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::calculation::{CENT_DECIMALS, ordinary_hourly_rate, round_half_away};
use crate::error::{EngineError, EngineResult};

use super::types::{WorkingHoursStep, YearParameters, YearRates};

/// Number of minimum wages an integral salary must reach.
pub const INTEGRAL_SALARY_MINIMUM_WAGES: u32 = 13;

/// Minimum wage and transport subsidy per year, in pesos.
const STATUTORY_YEARS: [(i32, i64, i64); 5] = [
    (2022, 1_000_000, 117_172),
    (2023, 1_160_000, 140_606),
    (2024, 1_300_000, 162_000),
    (2025, 1_423_500, 200_000),
    (2026, 1_423_500, 200_000),
];

/// Monthly hours before the first reduction of the working week.
const STATUTORY_INITIAL_HOURS: u32 = 240;

/// Progressive reduction of the working week: (year, month, day, hours).
const STATUTORY_HOUR_STEPS: [(i32, u32, u32, u32); 4] = [
    (2023, 7, 15, 235),
    (2024, 7, 15, 230),
    (2025, 7, 15, 220),
    (2026, 7, 15, 210),
];

/// Read-only lookup of minimum wage, transport subsidy and monthly
/// working hours keyed by calendar date.
///
/// Lookups for a year that has no legislated values fail with
/// [`EngineError::ParameterNotFound`]; nothing is extrapolated.
///
/// # Example
///
/// ```
/// use nomina_engine::config::ParameterTable;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let table = ParameterTable::statutory();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(table.minimum_wage(date).unwrap(), Decimal::from(1_300_000));
/// assert_eq!(table.monthly_working_hours(date).unwrap(), 235);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterTable {
    years: BTreeMap<i32, YearRates>,
    initial_hours: u32,
    /// Sorted by effective date, oldest first.
    hour_steps: Vec<WorkingHoursStep>,
}

impl ParameterTable {
    /// Builds a table from its parts.
    ///
    /// The working-hour schedule is sorted by date, must never increase
    /// the hour count and may not reach zero hours. A schedule breaking
    /// either rule is rejected as an [`EngineError::InputDomain`] error.
    pub fn new(
        years: BTreeMap<i32, YearRates>,
        initial_hours: u32,
        hour_steps: Vec<WorkingHoursStep>,
    ) -> EngineResult<Self> {
        let mut sorted_steps = hour_steps;
        sorted_steps.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));

        if initial_hours == 0 || sorted_steps.iter().any(|step| step.hours == 0) {
            return Err(EngineError::InputDomain {
                field: "working_hours".to_string(),
                message: "monthly hours must be greater than zero".to_string(),
            });
        }

        let mut previous = initial_hours;
        for step in &sorted_steps {
            if step.hours > previous {
                return Err(EngineError::InputDomain {
                    field: "working_hours".to_string(),
                    message: format!(
                        "step on {} raises monthly hours from {} to {}",
                        step.effective_date, previous, step.hours
                    ),
                });
            }
            previous = step.hours;
        }

        Ok(Self {
            years,
            initial_hours,
            hour_steps: sorted_steps,
        })
    }

    /// Builds the table of values legislated for 2022 through 2026.
    pub fn statutory() -> Self {
        let years = STATUTORY_YEARS
            .iter()
            .map(|&(year, minimum_wage, transport_subsidy)| {
                (
                    year,
                    YearRates {
                        minimum_wage: Decimal::from(minimum_wage),
                        transport_subsidy: Decimal::from(transport_subsidy),
                    },
                )
            })
            .collect();

        let hour_steps = STATUTORY_HOUR_STEPS
            .iter()
            .filter_map(|&(year, month, day, hours)| {
                NaiveDate::from_ymd_opt(year, month, day).map(|effective_date| {
                    WorkingHoursStep {
                        effective_date,
                        hours,
                    }
                })
            })
            .collect();

        Self {
            years,
            initial_hours: STATUTORY_INITIAL_HOURS,
            hour_steps,
        }
    }

    /// Returns the legal monthly minimum wage in force on `date`.
    pub fn minimum_wage(&self, date: NaiveDate) -> EngineResult<Decimal> {
        self.year_rates(date.year(), "minimum_wage")
            .map(|rates| rates.minimum_wage)
    }

    /// Returns the monthly transport subsidy in force on `date`.
    pub fn transport_subsidy(&self, date: NaiveDate) -> EngineResult<Decimal> {
        self.year_rates(date.year(), "transport_subsidy")
            .map(|rates| rates.transport_subsidy)
    }

    /// Returns the monthly working-hour count in force on `date`.
    ///
    /// The count follows the step schedule, but the year of `date` must
    /// still be present in the table.
    pub fn monthly_working_hours(&self, date: NaiveDate) -> EngineResult<u32> {
        self.year_rates(date.year(), "monthly_working_hours")?;

        Ok(self
            .hour_steps
            .iter()
            .rfind(|step| step.effective_date <= date)
            .map(|step| step.hours)
            .unwrap_or(self.initial_hours))
    }

    /// Returns the lowest accepted integral salary on `date`.
    pub fn integral_salary_floor(&self, date: NaiveDate) -> EngineResult<Decimal> {
        Ok(self.minimum_wage(date)? * Decimal::from(INTEGRAL_SALARY_MINIMUM_WAGES))
    }

    /// Summarizes the parameters of `year`, evaluated on December 31st.
    pub fn parameters_for_year(&self, year: i32) -> EngineResult<YearParameters> {
        let date = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| {
            EngineError::ParameterNotFound {
                parameter: "calendar_date".to_string(),
                year,
            }
        })?;

        let minimum_wage = self.minimum_wage(date)?;
        let monthly_working_hours = self.monthly_working_hours(date)?;

        Ok(YearParameters {
            year,
            minimum_wage,
            transport_subsidy: self.transport_subsidy(date)?,
            monthly_working_hours,
            integral_salary_floor: self.integral_salary_floor(date)?,
            ordinary_hourly_rate: round_half_away(
                ordinary_hourly_rate(minimum_wage, monthly_working_hours),
                CENT_DECIMALS,
            ),
        })
    }

    /// Returns every year with legislated values, in ascending order.
    pub fn available_years(&self) -> Vec<i32> {
        self.years.keys().copied().collect()
    }

    fn year_rates(&self, year: i32, parameter: &str) -> EngineResult<&YearRates> {
        self.years
            .get(&year)
            .ok_or_else(|| EngineError::ParameterNotFound {
                parameter: parameter.to_string(),
                year,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_minimum_wage_per_year() {
        let table = ParameterTable::statutory();

        assert_eq!(table.minimum_wage(date(2022, 6, 1)).unwrap(), dec("1000000"));
        assert_eq!(table.minimum_wage(date(2023, 6, 1)).unwrap(), dec("1160000"));
        assert_eq!(table.minimum_wage(date(2024, 6, 1)).unwrap(), dec("1300000"));
        assert_eq!(table.minimum_wage(date(2025, 6, 1)).unwrap(), dec("1423500"));
        assert_eq!(table.minimum_wage(date(2026, 6, 1)).unwrap(), dec("1423500"));
    }

    #[test]
    fn test_transport_subsidy_per_year() {
        let table = ParameterTable::statutory();

        assert_eq!(
            table.transport_subsidy(date(2022, 1, 1)).unwrap(),
            dec("117172")
        );
        assert_eq!(
            table.transport_subsidy(date(2024, 12, 31)).unwrap(),
            dec("162000")
        );
        assert_eq!(
            table.transport_subsidy(date(2025, 2, 1)).unwrap(),
            dec("200000")
        );
    }

    #[test]
    fn test_unknown_year_returns_parameter_not_found() {
        let table = ParameterTable::statutory();

        match table.minimum_wage(date(2021, 12, 31)) {
            Err(EngineError::ParameterNotFound { parameter, year }) => {
                assert_eq!(parameter, "minimum_wage");
                assert_eq!(year, 2021);
            }
            other => panic!("Expected ParameterNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_working_hours_step_boundaries() {
        let table = ParameterTable::statutory();

        assert_eq!(table.monthly_working_hours(date(2023, 7, 14)).unwrap(), 240);
        assert_eq!(table.monthly_working_hours(date(2023, 7, 15)).unwrap(), 235);
        assert_eq!(table.monthly_working_hours(date(2024, 7, 14)).unwrap(), 235);
        assert_eq!(table.monthly_working_hours(date(2024, 7, 15)).unwrap(), 230);
        assert_eq!(table.monthly_working_hours(date(2025, 7, 15)).unwrap(), 220);
        assert_eq!(table.monthly_working_hours(date(2026, 7, 14)).unwrap(), 220);
        assert_eq!(table.monthly_working_hours(date(2026, 7, 15)).unwrap(), 210);
    }

    #[test]
    fn test_working_hours_fail_for_unknown_year() {
        let table = ParameterTable::statutory();

        let result = table.monthly_working_hours(date(2027, 1, 1));
        assert!(matches!(
            result,
            Err(EngineError::ParameterNotFound { year: 2027, .. })
        ));
    }

    #[test]
    fn test_integral_salary_floor_is_13_minimum_wages() {
        let table = ParameterTable::statutory();

        assert_eq!(
            table.integral_salary_floor(date(2024, 5, 1)).unwrap(),
            dec("16900000")
        );
    }

    #[test]
    fn test_parameters_for_year_uses_year_end() {
        let table = ParameterTable::statutory();

        let params = table.parameters_for_year(2025).unwrap();
        assert_eq!(params.minimum_wage, dec("1423500"));
        assert_eq!(params.transport_subsidy, dec("200000"));
        assert_eq!(params.monthly_working_hours, 220);
        assert_eq!(params.integral_salary_floor, dec("18505500"));
        assert_eq!(params.ordinary_hourly_rate, dec("6470.45"));
    }

    #[test]
    fn test_available_years_are_sorted() {
        let table = ParameterTable::statutory();
        assert_eq!(table.available_years(), vec![2022, 2023, 2024, 2025, 2026]);
    }

    #[test]
    fn test_increasing_schedule_is_rejected() {
        let steps = vec![WorkingHoursStep {
            effective_date: date(2024, 1, 1),
            hours: 250,
        }];

        let result = ParameterTable::new(BTreeMap::new(), 240, steps);
        assert!(matches!(result, Err(EngineError::InputDomain { .. })));
    }

    #[test]
    fn test_zero_hour_schedule_is_rejected() {
        let steps = vec![WorkingHoursStep {
            effective_date: date(2024, 1, 1),
            hours: 0,
        }];

        assert!(ParameterTable::new(BTreeMap::new(), 240, steps).is_err());
        assert!(ParameterTable::new(BTreeMap::new(), 0, vec![]).is_err());
    }

    #[test]
    fn test_new_sorts_unordered_schedule() {
        let steps = vec![
            WorkingHoursStep {
                effective_date: date(2024, 7, 15),
                hours: 230,
            },
            WorkingHoursStep {
                effective_date: date(2023, 7, 15),
                hours: 235,
            },
        ];
        let mut years = BTreeMap::new();
        years.insert(
            2024,
            YearRates {
                minimum_wage: dec("1300000"),
                transport_subsidy: dec("162000"),
            },
        );

        let table = ParameterTable::new(years, 240, steps).unwrap();
        assert_eq!(table.monthly_working_hours(date(2024, 1, 1)).unwrap(), 235);
        assert_eq!(table.monthly_working_hours(date(2024, 8, 1)).unwrap(), 230);
    }

    proptest! {
        #[test]
        fn prop_years_outside_table_always_fail(
            year in prop_oneof![1900i32..2022, 2027i32..2500],
            ordinal in 1u32..=365,
        ) {
            let table = ParameterTable::statutory();
            let day = NaiveDate::from_yo_opt(year, ordinal).unwrap();

            let min_wage_not_found = matches!(
                table.minimum_wage(day),
                Err(EngineError::ParameterNotFound { .. })
            );
            let subsidy_not_found = matches!(
                table.transport_subsidy(day),
                Err(EngineError::ParameterNotFound { .. })
            );
            let hours_not_found = matches!(
                table.monthly_working_hours(day),
                Err(EngineError::ParameterNotFound { .. })
            );
            prop_assert!(min_wage_not_found);
            prop_assert!(subsidy_not_found);
            prop_assert!(hours_not_found);
        }

        #[test]
        fn prop_working_hours_never_increase(a in 0i64..1826, b in 0i64..1826) {
            let table = ParameterTable::statutory();
            let start = date(2022, 1, 1);
            let (early, late) = if a <= b { (a, b) } else { (b, a) };

            let early_hours = table
                .monthly_working_hours(start + chrono::Duration::days(early))
                .unwrap();
            let late_hours = table
                .monthly_working_hours(start + chrono::Duration::days(late))
                .unwrap();
            prop_assert!(late_hours <= early_hours);
        }
    }
}
