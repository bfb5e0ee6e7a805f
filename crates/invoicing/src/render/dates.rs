//! Indonesian date formatting.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun",
    "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// `02 Januari 2025`
pub fn long_date(date: NaiveDate) -> String {
    format!("{:02} {} {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

/// `02 Jan 2025`
pub fn short_date(date: NaiveDate) -> String {
    format!("{:02} {} {}", date.day(), MONTHS_SHORT[date.month0() as usize], date.year())
}
