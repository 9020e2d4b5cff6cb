//! 浏览器本地时间

use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 消息时间戳，如 "2:30 PM"
pub fn time_label() -> String {
    Local::now().format("%-I:%M %p").to_string()
}
