use chrono::NaiveDate;

/// Today's date in the server's local timezone
///
/// Hire dates are compared against this value.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
