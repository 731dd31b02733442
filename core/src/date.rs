use chrono::{NaiveTime, Timelike};

use crate::error::{Result, TaskError};

const DAY_SUFFIXES: [&str; 32] = [
    "th", "st", "nd", "rd", "th", "th", "th", "th", "th", "th", "th", "th", "th", "th", "th", "th",
    "th", "th", "th", "th", "th", "st", "nd", "rd", "th", "th", "th", "th", "th", "th", "th", "st",
];

const MONTHS: [&str; 13] = [
    "Month", "January", "February", "March", "April", "May", "June", "July", "August",
    "September", "October", "November", "December",
];

const HOURS_12: [&str; 24] = [
    "12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "1", "2", "3", "4", "5",
    "6", "7", "8", "9", "10", "11",
];

const MERIDIEMS: [&str; 24] = [
    "am", "am", "am", "am", "am", "am", "am", "am", "am", "am", "am", "am", "pm", "pm", "pm", "pm",
    "pm", "pm", "pm", "pm", "pm", "pm", "pm", "pm",
];

/// Whether a date argument has the `DD/MM/YYYY HHMM` shape and should be
/// normalized instead of stored verbatim.
pub fn looks_like_date(arg: &str) -> bool {
    let tokens: Vec<&str> = arg.split_whitespace().collect();
    tokens.len() == 2 && tokens[0].matches('/').count() == 2
}

/// Turns `1/12/2000` + `0033` into `1st of December 2000, 12.33am`.
pub fn normalize_date(date: &str, time: &str) -> Result<String> {
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return Err(TaskError::InvalidDate);
    }

    let day: usize = parse_number(parts[0])?;
    let month: usize = parse_number(parts[1])?;
    let year: u32 = parse_number(parts[2])?;

    if !(1..DAY_SUFFIXES.len()).contains(&day) || !(1..MONTHS.len()).contains(&month) {
        return Err(TaskError::InvalidDate);
    }

    let time = parse_time(time)?;
    let hour = time.hour() as usize;

    Ok(format!(
        "{}{} of {} {}, {}.{:02}{}",
        day,
        DAY_SUFFIXES[day],
        MONTHS[month],
        year,
        HOURS_12[hour],
        time.minute(),
        MERIDIEMS[hour]
    ))
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(TaskError::InvalidDate);
    }
    token.parse().map_err(|_| TaskError::InvalidDate)
}

fn parse_time(token: &str) -> Result<NaiveTime> {
    if token.len() != 4 || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(TaskError::InvalidDate);
    }
    let (hour, minute) = token.split_at(2);
    let hour: u32 = hour.parse().map_err(|_| TaskError::InvalidDate)?;
    let minute: u32 = minute.parse().map_err(|_| TaskError::InvalidDate)?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TaskError::InvalidDate)
}
