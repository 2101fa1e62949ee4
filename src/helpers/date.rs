//! Date helper functions

use chrono::{Datelike, NaiveDate};

/// Format a date in full (like "January 01, 2024")
pub fn full_date<D: Datelike>(date: &D) -> String {
    match NaiveDate::from_ymd_opt(date.year(), date.month(), date.day()) {
        Some(d) => d.format("%B %d, %Y").to_string(),
        None => String::new(),
    }
}

/// Expand a `new_post_name` pattern such as `:year-:month-:day-:title.md`
pub fn expand_post_name<D: Datelike>(pattern: &str, date: &D, slug: &str) -> String {
    pattern
        .replace(":title", slug)
        .replace(":year", &format!("{:04}", date.year()))
        .replace(":i_month", &date.month().to_string())
        .replace(":i_day", &date.day().to_string())
        .replace(":month", &format!("{:02}", date.month()))
        .replace(":day", &format!("{:02}", date.day()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(full_date(&date), "January 05, 2024");
    }

    #[test]
    fn test_expand_post_name() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            expand_post_name(":year-:month-:day-:title.md", &date, "ai-first"),
            "2024-06-01-ai-first.md"
        );
        assert_eq!(
            expand_post_name(":i_month-:i_day-:title.md", &date, "x"),
            "6-1-x.md"
        );
    }
}
