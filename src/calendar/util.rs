use chrono::NaiveDate;

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Returns `None` on `i32` overflow.
pub fn add_months(year: i32, month: u32, delta: i32) -> Option<(i32, u32)> {
    let month0 = i32::try_from(month).ok()?.checked_sub(1)?.checked_add(delta)?;
    let year = year.checked_add(month0.div_euclid(12))?;
    let month = month0.rem_euclid(12) as u32 + 1;
    Some((year, month))
}

/// Months since year 0, used to count whole months between dates.
pub fn month_number(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month) - 1
}
