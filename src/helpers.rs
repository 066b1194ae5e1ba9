/// Normalizes a free-text guess for comparison: surrounding whitespace is
/// ignored and matching is case-insensitive.
pub fn normalize_guess(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_guess_trims_and_lowercases() {
        assert_eq!(normalize_guess("  Paris "), "paris");
        assert_eq!(normalize_guess("ECHO"), "echo");
        assert_eq!(normalize_guess("a shadow"), "a shadow");
    }

    #[test]
    fn test_normalize_guess_whitespace_only_is_empty() {
        assert_eq!(normalize_guess("   "), "");
        assert_eq!(normalize_guess(""), "");
    }
}
