//! Configuration types for work calendars.
//!
//! These structures are deserialized from the YAML calendar configuration
//! file. Hours are plain decimal values; an omitted weekday means zero
//! expected hours on that day.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Expected work hours per weekday.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeeklyHours {
    /// Expected hours on Monday.
    #[serde(default)]
    pub monday: Decimal,
    /// Expected hours on Tuesday.
    #[serde(default)]
    pub tuesday: Decimal,
    /// Expected hours on Wednesday.
    #[serde(default)]
    pub wednesday: Decimal,
    /// Expected hours on Thursday.
    #[serde(default)]
    pub thursday: Decimal,
    /// Expected hours on Friday.
    #[serde(default)]
    pub friday: Decimal,
    /// Expected hours on Saturday.
    #[serde(default)]
    pub saturday: Decimal,
    /// Expected hours on Sunday.
    #[serde(default)]
    pub sunday: Decimal,
}

impl WeeklyHours {
    /// Returns the expected hours for the given weekday.
    pub fn for_weekday(&self, weekday: Weekday) -> Decimal {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

/// A single work calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkCalendar {
    /// The human-readable name of the calendar.
    pub name: String,
    /// Expected hours per weekday.
    pub weekly_hours: WeeklyHours,
}

/// Calendar configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarsConfig {
    /// Map of calendar id to calendar definition.
    pub calendars: HashMap<String, WorkCalendar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_weekly_hours_with_defaults() {
        let yaml = r#"
monday: 8
tuesday: 8
wednesday: 8
thursday: 8
friday: 8
"#;
        let hours: WeeklyHours = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(hours.for_weekday(Weekday::Wed), Decimal::new(8, 0));
        // Omitted weekend days default to zero.
        assert_eq!(hours.for_weekday(Weekday::Sat), Decimal::ZERO);
        assert_eq!(hours.for_weekday(Weekday::Sun), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_calendars_config() {
        let yaml = r#"
calendars:
  cal_standard:
    name: Standard Full-Time
    weekly_hours:
      monday: 8
      tuesday: 8
      wednesday: 8
      thursday: 8
      friday: 8
"#;
        let config: CalendarsConfig = serde_yaml::from_str(yaml).unwrap();
        let calendar = config.calendars.get("cal_standard").unwrap();
        assert_eq!(calendar.name, "Standard Full-Time");
        assert_eq!(
            calendar.weekly_hours.for_weekday(Weekday::Mon),
            Decimal::new(8, 0)
        );
    }

    #[test]
    fn test_fractional_hours() {
        let yaml = "monday: 7.6";
        let hours: WeeklyHours = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(hours.for_weekday(Weekday::Mon), Decimal::new(76, 1));
    }
}
