use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::builder::page::model::OrderKey;
use crate::config::ArticleNaming;

lazy_static! {
    static ref NUMBERED_REGEX: Regex = Regex::new(r"^([0-9]+)\s*-\s*(.+)").unwrap();
    static ref DATED_REGEX: Regex =
        Regex::new(r"^([0-9]{2})\s+([0-9]{1,2})\s+([0-9]{1,2})\s*-\s*(.+)").unwrap();
}

/// Ordering and display data taken from a directory name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub key: OrderKey,
    pub title: String,
    pub date_label: Option<String>,
}

impl ParsedName {
    fn fallback(key: OrderKey, dir_name: &str) -> Self {
        ParsedName {
            key,
            title: dir_name.to_string(),
            date_label: None,
        }
    }
}

/// Parse a directory name with the grammar chosen for its listing
pub fn parse_dir_name(dir_name: &str, naming: ArticleNaming) -> ParsedName {
    match naming {
        ArticleNaming::Numbered => parse_numbered(dir_name),
        ArticleNaming::Dated => parse_dated(dir_name),
    }
}

/// `"3 - Hello World"` gives key 3 and title `"Hello World"`
pub fn parse_numbered(dir_name: &str) -> ParsedName {
    let parsed = NUMBERED_REGEX.captures(dir_name).and_then(|caps| {
        let number = caps[1].parse::<u64>().ok()?;
        let title = caps[2].trim();
        (!title.is_empty()).then(|| ParsedName {
            key: OrderKey::Number(number),
            title: title.to_string(),
            date_label: None,
        })
    });

    parsed.unwrap_or_else(|| ParsedName::fallback(OrderKey::unnumbered(), dir_name))
}

/// `"25 03 9 - Launch"` gives key `"2025-03-09"` and title `"Launch"`
pub fn parse_dated(dir_name: &str) -> ParsedName {
    let parsed = DATED_REGEX.captures(dir_name).and_then(|caps| {
        let year = 2000 + caps[1].parse::<i32>().ok()?;
        let month = caps[2].parse::<u32>().ok()?;
        let day = caps[3].parse::<u32>().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;

        let title = caps[4].trim();
        (!title.is_empty()).then(|| ParsedName {
            key: OrderKey::Date(date.format("%Y-%m-%d").to_string()),
            title: title.to_string(),
            date_label: Some(date.format("%B %-d, %Y").to_string()),
        })
    });

    parsed.unwrap_or_else(|| ParsedName::fallback(OrderKey::undated(), dir_name))
}
