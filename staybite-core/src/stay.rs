use chrono::NaiveDate;

/// Why a check-in/check-out pair was rejected. The messages are exactly what
/// the booking card surfaces, so flows can show `to_string()` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StayError {
    #[error("Please select check-in and check-out dates")]
    MissingDates,
    #[error("Check-out must be after check-in")]
    CheckOutNotAfterCheckIn,
}

/// A validated stay: check-out is strictly after check-in, compared as
/// calendar days (the date inputs carry no time component).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    pub fn new(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Result<Self, StayError> {
        let (check_in, check_out) = match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => (check_in, check_out),
            _ => return Err(StayError::MissingDates),
        };
        if check_out <= check_in {
            return Err(StayError::CheckOutNotAfterCheckIn);
        }
        Ok(Self { check_in, check_out })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Whole nights between the two dates, never negative. Display/estimate
    /// value only; the submitted amount does not depend on it.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}

/// Night count for an unvalidated date pair, as the booking card shows it
/// while the user is still picking: 0 when either date is missing or the
/// range is inverted.
pub fn night_count(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> i64 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => (check_out - check_in).num_days().max(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn three_nights_for_first_to_fourth() {
        let stay = StayRange::new(Some(date("2024-05-01")), Some(date("2024-05-04"))).unwrap();
        assert_eq!(stay.nights(), 3);
    }

    #[test]
    fn missing_either_date_is_rejected() {
        assert_eq!(
            StayRange::new(None, Some(date("2024-05-04"))),
            Err(StayError::MissingDates)
        );
        assert_eq!(
            StayRange::new(Some(date("2024-05-01")), None),
            Err(StayError::MissingDates)
        );
        assert_eq!(StayRange::new(None, None), Err(StayError::MissingDates));
    }

    #[test]
    fn same_day_checkout_is_rejected() {
        assert_eq!(
            StayRange::new(Some(date("2024-05-01")), Some(date("2024-05-01"))),
            Err(StayError::CheckOutNotAfterCheckIn)
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            StayRange::new(Some(date("2024-05-04")), Some(date("2024-05-01"))),
            Err(StayError::CheckOutNotAfterCheckIn)
        );
    }

    #[test]
    fn night_count_is_zero_until_both_dates_are_picked() {
        assert_eq!(night_count(Some(date("2024-05-01")), None), 0);
        assert_eq!(night_count(None, None), 0);
        // Inverted picks render as 0 nights rather than a negative number.
        assert_eq!(
            night_count(Some(date("2024-05-04")), Some(date("2024-05-01"))),
            0
        );
    }
}
