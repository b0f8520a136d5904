use chrono::{NaiveDate, NaiveTime};

/// Day of week for a proleptic Gregorian date, 1 = Monday through 7 = Sunday.
///
/// Zeller's congruence: January and February count as months 13 and 14 of the
/// previous year. The raw result has Saturday = 0 and is shifted to ISO numbering.
pub fn calculate_weekday(year: i32, month: u32, day: u32) -> u8 {
    let (year, month) = if month < 3 {
        (year - 1, month as i32 + 12)
    } else {
        (year, month as i32)
    };

    let zeller = (day as i32
        + (13 * (month + 1)).div_euclid(5)
        + year
        + year.div_euclid(4)
        - year.div_euclid(100)
        + year.div_euclid(400))
    .rem_euclid(7);

    ((zeller + 5) % 7 + 1) as u8
}

pub fn is_valid_time(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
        && NaiveTime::from_hms_opt(hour, minute, second).is_some()
}
