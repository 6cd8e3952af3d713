// ABOUTME: Date-string splicing for event edit forms
// ABOUTME: Splits backend datetimes into date/time inputs and joins them back on submit

/// Split `"2025-03-01T10:00:00"` into `("2025-03-01", "10:00")`.
///
/// The time keeps hours and minutes only. A value without a `T` separator
/// yields the whole string as the date and an empty time.
pub fn split_datetime(datetime: &str) -> (String, String) {
    match datetime.split_once('T') {
        Some((date, time)) => {
            let short: String = time.chars().take(5).collect();
            (date.to_string(), short)
        }
        None => (datetime.to_string(), String::new()),
    }
}

/// Join date and time inputs into the backend's `YYYY-MM-DDTHH:MM:00` shape.
///
/// Returns `None` unless both parts are filled in.
pub fn join_datetime(date: &str, time: &str) -> Option<String> {
    let date = date.trim();
    let time = time.trim();
    if date.is_empty() || time.is_empty() {
        return None;
    }
    Some(format!("{}T{}:00", date, time))
}

/// Leading integer of a form input, so `"12abc"` reads as 12.
///
/// Leading whitespace and one sign are accepted; anything after the digits is
/// ignored. `None` when the input does not start with a number.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value = rest[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Parse a comma-separated list of tag ids, dropping entries that are not numbers
pub fn parse_tag_ids(input: &str) -> Vec<i64> {
    input.split(',').filter_map(parse_int_prefix).collect()
}

/// Format tag ids back into the comma-separated form input
pub fn format_tag_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_split_backend_datetime() {
        let (date, time) = split_datetime("2025-03-01T10:00:00");
        assert_eq!(date, "2025-03-01");
        assert_eq!(time, "10:00");
    }

    #[test]
    fn test_split_and_join_restores_value() {
        let (date, time) = split_datetime("2025-03-01T10:00:00");
        assert_eq!(
            join_datetime(&date, &time).as_deref(),
            Some("2025-03-01T10:00:00")
        );
    }

    #[rstest]
    #[case("2025-03-01", ("2025-03-01", ""))]
    #[case("2025-03-01T", ("2025-03-01", ""))]
    #[case("2025-03-01T09:30", ("2025-03-01", "09:30"))]
    fn test_split_partial_values(#[case] input: &str, #[case] expected: (&str, &str)) {
        let (date, time) = split_datetime(input);
        assert_eq!((date.as_str(), time.as_str()), expected);
    }

    #[rstest]
    #[case("", "10:00")]
    #[case("2025-03-01", "")]
    #[case(" ", " ")]
    fn test_join_requires_both_parts(#[case] date: &str, #[case] time: &str) {
        assert!(join_datetime(date, time).is_none());
    }

    #[test]
    fn test_parse_tag_ids_skips_garbage() {
        assert_eq!(parse_tag_ids("1, 2,,abc, 10 "), vec![1, 2, 10]);
        assert!(parse_tag_ids("").is_empty());
        assert_eq!(format_tag_ids(&[1, 2, 10]), "1, 2, 10");
    }

    #[rstest]
    #[case("12", Some(12))]
    #[case(" 12abc", Some(12))]
    #[case("-3 years", Some(-3))]
    #[case("+7", Some(7))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("-", None)]
    fn test_parse_int_prefix(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_int_prefix(input), expected);
    }
}
