use chrono::Datelike;

/// Formats a date as the `M-YYYY` month stamp the API expects for `start` / `end`.
///
/// ```
/// use chrono::NaiveDate;
/// use similarweb_rs_sdk::util::month_year;
///
/// let date = NaiveDate::from_ymd_opt(2013, 9, 15).unwrap();
/// assert_eq!(month_year(&date), "9-2013");
/// ```
pub fn month_year<D: Datelike>(date: &D) -> String {
    format!("{}-{}", date.month(), date.year())
}
