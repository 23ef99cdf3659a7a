// Field validators for form input. Each constructor returns a predicate
// closure with the bound baked in. Lengths count characters, not bytes.

/// Passes when the value is empty or no longer than `len`. An empty
/// value is not this rule's problem; emptiness is min_length's job.
pub fn max_length(len: usize) -> impl Fn(&str) -> bool {
    move |val: &str| val.is_empty() || val.chars().count() <= len
}

/// Passes when the value is non-empty and at least `len` characters.
pub fn min_length(len: usize) -> impl Fn(&str) -> bool {
    move |val: &str| !val.is_empty() && val.chars().count() >= len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_length_rejects_short_and_empty_values() {
        let rule = min_length(2);
        assert!(!rule(""));
        assert!(!rule("A"));
        assert!(rule("Al"));
        assert!(rule("Alice"));
    }

    #[test]
    fn max_length_passes_empty_values_through() {
        let rule = max_length(15);
        assert!(rule(""));
        assert!(rule("exactly15chars!"));
        assert!(!rule("sixteen chars!!!"));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(min_length(2)("ab"));
        assert!(max_length(15)("123456789012345"));
        assert!(!min_length(2)("a"));
        assert!(!max_length(15)("1234567890123456"));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // Two chars, six bytes
        assert!(min_length(2)("éé"));
        assert!(max_length(2)("éé"));
        assert!(!max_length(1)("éé"));
    }
}
