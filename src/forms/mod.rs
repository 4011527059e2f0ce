use chrono::NaiveTime;
use csv::StringRecord;

pub mod appointments;
pub mod businesses;
pub mod catalog;
pub mod schedules;

/// Accepted clock formats for times of day (`06:00`, `06:00:00`).
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Parse a wall-clock time written as `HH:MM` or `HH:MM:SS`.
pub(crate) fn parse_clock_time(input: &str) -> Option<NaiveTime> {
    let trimmed = input.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
}

pub(crate) fn locate_header(headers: &StringRecord, expected: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(expected))
}

/// Collapse whitespace runs and drop control characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitize every line and keep at most one blank line between paragraphs.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    let mut previous_empty = true;

    for line in input.lines().map(sanitize_inline_text) {
        if line.is_empty() {
            if !previous_empty {
                result.push(String::new());
            }
            previous_empty = true;
        } else {
            result.push(line);
            previous_empty = false;
        }
    }

    while matches!(result.last(), Some(line) if line.is_empty()) {
        result.pop();
    }

    result.join("\n")
}
