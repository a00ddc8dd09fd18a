use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::variant::ClientVariant;

/// Form problems caught before any request is sent. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("End time must be after start time.")]
    EndNotAfterStart,
    #[error("You cannot create an availability in the past.")]
    StartsInPast,
}

/// Check a draft slot, first failure wins.
///
/// Times are compared as the strings the time inputs produce ("HH:MM"), so an
/// empty end time is always rejected. The past check only runs for variants that
/// ask for it and is skipped when date or start time cannot be read.
pub fn validate_slot(
    variant: &ClientVariant,
    date: &str,
    start_time: &str,
    end_time: &str,
    now: NaiveDateTime,
) -> Result<(), ValidationError> {
    if start_time >= end_time {
        return Err(ValidationError::EndNotAfterStart);
    }

    if variant.rejects_past_slots() {
        if let Some(start) = slot_start(date, start_time) {
            if start < now {
                return Err(ValidationError::StartsInPast);
            }
        }
    }

    Ok(())
}

/// Local start instant of a slot
pub fn slot_start(date: &str, start_time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(start_time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(start_time, "%H:%M"))
        .ok()?;
    Some(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn noon(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(12, 0, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 4).unwrap()
    }

    #[test]
    fn test_end_before_start_rejected_in_both_variants() {
        for variant in [ClientVariant::team("1"), ClientVariant::Simplified] {
            let result = validate_slot(&variant, "2025-01-10", "10:00", "09:00", noon(today()));
            assert_eq!(result, Err(ValidationError::EndNotAfterStart));
            assert_eq!(
                result.unwrap_err().to_string(),
                "End time must be after start time."
            );
        }
    }

    #[test]
    fn test_equal_and_empty_times_rejected() {
        let variant = ClientVariant::Simplified;
        assert_eq!(
            validate_slot(&variant, "2025-01-10", "09:00", "09:00", noon(today())),
            Err(ValidationError::EndNotAfterStart)
        );
        assert_eq!(
            validate_slot(&variant, "2025-01-10", "", "", noon(today())),
            Err(ValidationError::EndNotAfterStart)
        );
    }

    #[test]
    fn test_past_date_diverges_between_variants() {
        let yesterday = (today() - Days::new(1)).format("%Y-%m-%d").to_string();

        let team = validate_slot(&ClientVariant::team("1"), &yesterday, "09:00", "10:00", noon(today()));
        assert_eq!(team, Err(ValidationError::StartsInPast));
        assert_eq!(
            team.unwrap_err().to_string(),
            "You cannot create an availability in the past."
        );

        let simplified =
            validate_slot(&ClientVariant::Simplified, &yesterday, "09:00", "10:00", noon(today()));
        assert_eq!(simplified, Ok(()));
    }

    #[test]
    fn test_earlier_today_is_past_but_later_is_not() {
        let variant = ClientVariant::team("1");
        assert_eq!(
            validate_slot(&variant, "2024-12-04", "11:59", "13:00", noon(today())),
            Err(ValidationError::StartsInPast)
        );
        assert_eq!(
            validate_slot(&variant, "2024-12-04", "12:00", "13:00", noon(today())),
            Ok(())
        );
    }

    #[test]
    fn test_ordering_check_runs_first() {
        let result = validate_slot(&ClientVariant::team("1"), "2020-01-01", "10:00", "09:00", noon(today()));
        assert_eq!(result, Err(ValidationError::EndNotAfterStart));
    }

    #[test]
    fn test_unreadable_date_skips_past_check() {
        assert_eq!(
            validate_slot(&ClientVariant::team("1"), "", "09:00", "10:00", noon(today())),
            Ok(())
        );
    }

    #[test]
    fn test_slot_start_accepts_seconds() {
        let expected = today().and_hms_opt(9, 30, 0).unwrap();
        assert_eq!(slot_start("2024-12-04", "09:30"), Some(expected));
        assert_eq!(slot_start("2024-12-04", "09:30:00"), Some(expected));
        assert_eq!(slot_start("2024-12-04", "nine"), None);
    }
}
