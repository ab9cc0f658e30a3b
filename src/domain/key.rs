use chrono::{DateTime, Local};

/// Derive a stable identifier for a task or subtask from its text and
/// creation instant: trimmed text, an underscore, and the millisecond
/// timestamp. Collisions require the same text in the same millisecond,
/// which discrete user actions cannot produce.
pub fn derive_key(text: &str, at: DateTime<Local>) -> String {
    format!("{}_{}", text.trim(), at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_key_format() {
        let at = Local.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(derive_key("Buy milk", at), "Buy milk_1700000000123");
    }

    #[test]
    fn test_key_trims_text() {
        let at = Local.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(derive_key("  Walk dog  ", at), derive_key("Walk dog", at));
    }

    #[test]
    fn test_key_differs_across_instants() {
        let a = Local.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let b = Local.timestamp_millis_opt(1_700_000_000_001).unwrap();
        assert_ne!(derive_key("Same text", a), derive_key("Same text", b));
    }
}
