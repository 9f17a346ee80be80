/// Case-insensitive substring test used by roster search
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Senior Engineer", "engineer"));
        assert!(contains_ignore_case("HR", "hr"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Sales", "finance"));
    }
}
