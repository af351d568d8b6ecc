//! Public-holiday records and region filtering.

use chrono::NaiveDate;
use serde::Deserialize;

/// One public holiday as published by the holiday service.
///
/// `counties` of `None` marks a nationwide holiday that applies
/// everywhere; `Some` restricts it to the listed region codes
/// (e.g. `DE-NW`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub counties: Option<Vec<String>>,
}

impl HolidayRecord {
    /// Whether this holiday applies in the given region.
    #[must_use]
    pub fn applies_to(&self, region: &str) -> bool {
        match &self.counties {
            None => true,
            Some(counties) => counties.iter().any(|county| county == region),
        }
    }
}

/// Whether any record marks `date` as a holiday in `region`.
#[must_use]
pub fn contains_holiday(records: &[HolidayRecord], date: NaiveDate, region: &str) -> bool {
    records
        .iter()
        .any(|record| record.date == date && record.applies_to(region))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn nationwide(y: i32, m: u32, d: u32) -> HolidayRecord {
        HolidayRecord {
            date: date(y, m, d),
            counties: None,
        }
    }

    fn regional(y: i32, m: u32, d: u32, counties: &[&str]) -> HolidayRecord {
        HolidayRecord {
            date: date(y, m, d),
            counties: Some(counties.iter().map(ToString::to_string).collect()),
        }
    }

    #[test]
    fn should_parse_service_payload() {
        let json = r#"[
            {"date": "2026-01-01", "localName": "Neujahr", "counties": null},
            {"date": "2026-01-06", "localName": "Heilige Drei Könige",
             "counties": ["DE-BW", "DE-BY", "DE-ST"]}
        ]"#;
        let records: Vec<HolidayRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].counties.is_none());
        assert_eq!(records[1].counties.as_deref().map(<[String]>::len), Some(3));
    }

    #[test]
    fn should_apply_nationwide_holiday_to_every_region() {
        let record = nationwide(2026, 12, 25);
        assert!(record.applies_to("DE-NW"));
        assert!(record.applies_to("DE-BY"));
    }

    #[test]
    fn should_restrict_regional_holiday_to_listed_counties() {
        let record = regional(2026, 8, 15, &["DE-BY", "DE-SL"]);
        assert!(record.applies_to("DE-BY"));
        assert!(!record.applies_to("DE-NW"));
    }

    #[test]
    fn should_find_holiday_matching_date_and_region() {
        let records = vec![nationwide(2026, 12, 25), regional(2026, 8, 15, &["DE-BY"])];
        assert!(contains_holiday(&records, date(2026, 12, 25), "DE-NW"));
        assert!(contains_holiday(&records, date(2026, 8, 15), "DE-BY"));
    }

    #[test]
    fn should_ignore_holiday_restricted_to_other_region() {
        let records = vec![regional(2026, 8, 15, &["DE-BY"])];
        assert!(!contains_holiday(&records, date(2026, 8, 15), "DE-NW"));
    }

    #[test]
    fn should_ignore_holiday_on_different_date() {
        let records = vec![nationwide(2026, 12, 25)];
        assert!(!contains_holiday(&records, date(2026, 12, 24), "DE-NW"));
    }

    #[test]
    fn should_report_no_holiday_for_empty_record_set() {
        assert!(!contains_holiday(&[], date(2026, 12, 25), "DE-NW"));
    }
}
