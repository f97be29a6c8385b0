/// Parse a user id from a plain snowflake or a `<@id>` / `<@!id>` mention.
pub fn parse_user_id(raw: &str) -> Option<u64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(id) = value.parse::<u64>() {
        return Some(id);
    }

    if value.starts_with("<@") && value.ends_with('>') {
        return value
            .trim_start_matches("<@")
            .trim_start_matches('!')
            .trim_end_matches('>')
            .parse::<u64>()
            .ok();
    }

    None
}

/// Split a comma-separated option list, dropping empty entries.
pub fn split_choices(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_user_id, split_choices};

    #[test]
    fn parses_plain_ids_and_mentions() {
        assert_eq!(parse_user_id("123"), Some(123));
        assert_eq!(parse_user_id("  123  "), Some(123));
        assert_eq!(parse_user_id("<@123>"), Some(123));
        assert_eq!(parse_user_id("<@!123>"), Some(123));
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("<@abc>"), None);
    }

    #[test]
    fn splits_choices_and_drops_empties() {
        assert_eq!(split_choices("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_choices("a,,b"), vec!["a", "b"]);
        assert_eq!(split_choices(" , ,"), Vec::<&str>::new());
        assert_eq!(split_choices("solo"), vec!["solo"]);
    }
}
