//! End-of-validity dates.

use chrono::{Days, NaiveDate};

use super::DomainError;

/// Base date that end-of-validity day offsets count from.
pub const FORMAT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1997, 1, 1) {
    Some(date) => date,
    None => panic!("invalid format epoch"),
};

/// Largest day offset a 9-bit validity field can carry.
pub const MAX_VALIDITY_DAYS: u64 = 511;

/// Converts an end-of-validity day offset into a calendar date.
///
/// # Examples
///
/// ```
/// use stripe_decoder::domain::{FORMAT_EPOCH, expiry_date};
///
/// assert_eq!(expiry_date(0).unwrap(), FORMAT_EPOCH);
/// assert_eq!(expiry_date(106).unwrap().to_string(), "1997-04-17");
/// ```
pub fn expiry_date(days: u64) -> Result<NaiveDate, DomainError> {
    let out_of_range = DomainError::FieldValue {
        field: "end-of-validity days",
        value: days,
        max: MAX_VALIDITY_DAYS,
    };

    if days > MAX_VALIDITY_DAYS {
        return Err(out_of_range);
    }

    FORMAT_EPOCH.checked_add_days(Days::new(days)).ok_or(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_is_epoch() {
        assert_eq!(expiry_date(0).unwrap(), FORMAT_EPOCH);
        assert_eq!(FORMAT_EPOCH, date(1997, 1, 1));
    }

    #[test]
    fn one_common_year() {
        assert_eq!(expiry_date(365).unwrap(), date(1998, 1, 1));
    }

    #[test]
    fn crosses_month_ends() {
        assert_eq!(expiry_date(31).unwrap(), date(1997, 2, 1));
        assert_eq!(expiry_date(59).unwrap(), date(1997, 3, 1));
        assert_eq!(expiry_date(106).unwrap(), date(1997, 4, 17));
    }

    #[test]
    fn maximum_offset() {
        assert_eq!(expiry_date(511).unwrap(), date(1998, 5, 27));
    }

    #[test]
    fn reject_offset_past_field_width() {
        assert!(matches!(
            expiry_date(512),
            Err(DomainError::FieldValue { value: 512, .. })
        ));
    }
}
