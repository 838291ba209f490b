//! Overtime and surcharge categories.
//!
//! Each category carries the multiplier applied to the ordinary hourly
//! rate, as fixed by the Colombian labor code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// A category of extra hours or hourly surcharge.
///
/// Categories are identified on the wire by their payroll code
/// (e.g. `"HED"` for daytime overtime).
///
/// # Example
///
/// ```
/// use nomina_engine::models::OvertimeCategory;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let category = OvertimeCategory::from_str("hed").unwrap();
/// assert_eq!(category, OvertimeCategory::DaytimeOvertime);
/// assert_eq!(category.multiplier(), Decimal::new(125, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OvertimeCategory {
    /// Daytime overtime on a working day (HED).
    #[serde(rename = "HED")]
    DaytimeOvertime,
    /// Night overtime on a working day (HEN).
    #[serde(rename = "HEN")]
    NightOvertime,
    /// Daytime overtime on a Sunday or holiday (HEFD).
    #[serde(rename = "HEFD")]
    HolidayDaytimeOvertime,
    /// Night overtime on a Sunday or holiday (HEFN).
    #[serde(rename = "HEFN")]
    HolidayNightOvertime,
    /// Night surcharge on ordinary hours (RN).
    #[serde(rename = "RN")]
    NightSurcharge,
    /// Sunday or holiday daytime surcharge (RDD).
    #[serde(rename = "RDD")]
    HolidayDaytimeSurcharge,
    /// Sunday or holiday night surcharge (RDN).
    #[serde(rename = "RDN")]
    HolidayNightSurcharge,
    /// Habitual Sunday or holiday daytime work with compensatory rest (RDDHC).
    #[serde(rename = "RDDHC")]
    HabitualHolidayDaytime,
    /// Habitual Sunday or holiday night work with compensatory rest (RDNHC).
    #[serde(rename = "RDNHC")]
    HabitualHolidayNight,
    /// Occasional Sunday or holiday daytime work without compensatory rest (RDDONC).
    #[serde(rename = "RDDONC")]
    OccasionalHolidayDaytime,
    /// Occasional Sunday or holiday night work without compensatory rest (RDNONC).
    #[serde(rename = "RDNONC")]
    OccasionalHolidayNight,
}

impl OvertimeCategory {
    /// Every defined category, in payroll-code order.
    pub const ALL: [OvertimeCategory; 11] = [
        OvertimeCategory::DaytimeOvertime,
        OvertimeCategory::NightOvertime,
        OvertimeCategory::HolidayDaytimeOvertime,
        OvertimeCategory::HolidayNightOvertime,
        OvertimeCategory::NightSurcharge,
        OvertimeCategory::HolidayDaytimeSurcharge,
        OvertimeCategory::HolidayNightSurcharge,
        OvertimeCategory::HabitualHolidayDaytime,
        OvertimeCategory::HabitualHolidayNight,
        OvertimeCategory::OccasionalHolidayDaytime,
        OvertimeCategory::OccasionalHolidayNight,
    ];

    /// Returns the payroll code of the category.
    pub fn code(self) -> &'static str {
        match self {
            OvertimeCategory::DaytimeOvertime => "HED",
            OvertimeCategory::NightOvertime => "HEN",
            OvertimeCategory::HolidayDaytimeOvertime => "HEFD",
            OvertimeCategory::HolidayNightOvertime => "HEFN",
            OvertimeCategory::NightSurcharge => "RN",
            OvertimeCategory::HolidayDaytimeSurcharge => "RDD",
            OvertimeCategory::HolidayNightSurcharge => "RDN",
            OvertimeCategory::HabitualHolidayDaytime => "RDDHC",
            OvertimeCategory::HabitualHolidayNight => "RDNHC",
            OvertimeCategory::OccasionalHolidayDaytime => "RDDONC",
            OvertimeCategory::OccasionalHolidayNight => "RDNONC",
        }
    }

    /// Returns the multiplier applied to the ordinary hourly rate.
    pub fn multiplier(self) -> Decimal {
        match self {
            OvertimeCategory::DaytimeOvertime => Decimal::new(125, 2),
            OvertimeCategory::NightOvertime => Decimal::new(175, 2),
            OvertimeCategory::HolidayDaytimeOvertime => Decimal::new(205, 2),
            OvertimeCategory::HolidayNightOvertime => Decimal::new(255, 2),
            OvertimeCategory::NightSurcharge => Decimal::new(35, 2),
            OvertimeCategory::HolidayDaytimeSurcharge => Decimal::new(80, 2),
            OvertimeCategory::HolidayNightSurcharge => Decimal::new(115, 2),
            OvertimeCategory::HabitualHolidayDaytime => Decimal::new(180, 2),
            OvertimeCategory::HabitualHolidayNight => Decimal::new(215, 2),
            OvertimeCategory::OccasionalHolidayDaytime => Decimal::new(180, 2),
            OvertimeCategory::OccasionalHolidayNight => Decimal::new(215, 2),
        }
    }

    /// Returns a human-readable description of the category.
    pub fn description(self) -> &'static str {
        match self {
            OvertimeCategory::DaytimeOvertime => "Daytime overtime",
            OvertimeCategory::NightOvertime => "Night overtime",
            OvertimeCategory::HolidayDaytimeOvertime => "Sunday/holiday daytime overtime",
            OvertimeCategory::HolidayNightOvertime => "Sunday/holiday night overtime",
            OvertimeCategory::NightSurcharge => "Night surcharge",
            OvertimeCategory::HolidayDaytimeSurcharge => "Sunday/holiday daytime surcharge",
            OvertimeCategory::HolidayNightSurcharge => "Sunday/holiday night surcharge",
            OvertimeCategory::HabitualHolidayDaytime => {
                "Habitual Sunday/holiday daytime work with compensatory rest"
            }
            OvertimeCategory::HabitualHolidayNight => {
                "Habitual Sunday/holiday night work with compensatory rest"
            }
            OvertimeCategory::OccasionalHolidayDaytime => {
                "Occasional Sunday/holiday daytime work without compensatory rest"
            }
            OvertimeCategory::OccasionalHolidayNight => {
                "Occasional Sunday/holiday night work without compensatory rest"
            }
        }
    }
}

impl fmt::Display for OvertimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OvertimeCategory {
    type Err = EngineError;

    /// Parses a payroll code, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        OvertimeCategory::ALL
            .into_iter()
            .find(|category| category.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| EngineError::InputDomain {
                field: "overtime_category".to_string(),
                message: format!("'{}' is not a defined overtime category", code),
            })
    }
}
