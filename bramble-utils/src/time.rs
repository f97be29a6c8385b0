use std::time::{SystemTime, UNIX_EPOCH};

/// Return the current unix timestamp in milliseconds.
pub fn now_unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis() as u64)
}

/// Convert a caller-supplied minute count into milliseconds.
pub fn minutes_to_millis(minutes: u64) -> u64 {
    minutes.saturating_mul(60_000)
}

#[cfg(test)]
mod tests {
    use super::minutes_to_millis;

    #[test]
    fn minute_conversion() {
        assert_eq!(minutes_to_millis(0), 0);
        assert_eq!(minutes_to_millis(1), 60_000);
        assert_eq!(minutes_to_millis(90), 5_400_000);
        assert_eq!(minutes_to_millis(u64::MAX), u64::MAX);
    }
}
