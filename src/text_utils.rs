use std::ops::Index;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses the date part of a front matter or file name date.
/// Accepts `2015-06-08`, `2015-6-8` and anything trailing it, like `2015-06-08 10:42:32 +0200`
pub fn parse_date(buf: &str) -> Result<NaiveDate, String> {
    lazy_static! {
        static ref DATE_REGEX: Regex = Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:$|[ T])").unwrap();
    }

    let buf = buf.trim();
    let Some(caps) = DATE_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date {}", buf));
    };

    let y: i32 = to_int(caps.index(1), buf)?;
    let m: u32 = to_int(caps.index(2), buf)?;
    let d: u32 = to_int(caps.index(3), buf)?;

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| format!("Invalid calendar date {}", buf))
}

/// `2015 June 08`
pub fn format_feed_date(date: &NaiveDate) -> String {
    date.format("%Y %B %d").to_string()
}

/// `2015/06/08`, as used in post links
pub fn format_url_date(date: &NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}
