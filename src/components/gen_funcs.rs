use ammonia::Builder;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;

pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .unwrap_or_else(|_| Utc::now().date_naive()) // Fallback for parsing error
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%-d %b %y").to_string()
}

// Zero-padded MM:SS, growing to H:MM:SS past the hour mark. Zero (or an
// unknown duration) renders as the 00:00 sentinel.
pub fn format_time(time_in_seconds: u32) -> String {
    let hours = time_in_seconds / 3600;
    let minutes = (time_in_seconds % 3600) / 60;
    let seconds = time_in_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

pub fn truncate_description(description: String, max_length: usize) -> (String, bool) {
    let is_truncated = description.chars().count() > max_length;

    let truncated_text = if is_truncated {
        description.chars().take(max_length).collect::<String>() + "..."
    } else {
        description
    };

    (truncated_text, is_truncated)
}

pub fn sanitize_html_with_blank_target(description: &str) -> String {
    // Create the inner HashMap for attribute "target" with value "_blank"
    let mut attribute_values = HashMap::new();
    attribute_values.insert("target", "_blank");

    // Create the outer HashMap for tag "a"
    let mut tag_attribute_values = HashMap::new();
    tag_attribute_values.insert("a", attribute_values);

    let mut builder = Builder::default();
    builder.add_tags(&["a"]);
    builder.add_tag_attributes("a", &["href", "target"]);
    builder.set_tag_attribute_values(tag_attribute_values);

    builder.clean(description).to_string()
}

// Descriptions arrive as HTML; list snippets want plain text.
pub fn strip_html_tags(description: &str) -> String {
    Builder::empty().clean(description).to_string()
}
