//! Presence rules for free-text form fields

/// Treat an empty string the same as a missing value.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Free text as stored: absent values become the empty string.
pub fn or_blank(value: Option<String>) -> String {
    value.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_absent() {
        assert_eq!(present(Some(String::new())), None);
        assert_eq!(present(None), None);
        assert_eq!(present(Some(" ".to_string())), Some(" ".to_string()));
    }
}
