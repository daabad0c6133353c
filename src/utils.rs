

/// Lower-cases and trims a free-text term for set comparison.
#[inline]
pub fn normalize_term(s: &str) -> String {
    s.trim().to_lowercase()
}


#[inline]
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("  React "), "react");
        assert_eq!(normalize_term("Data Science"), "data science");
        assert_eq!(normalize_term("   "), "");
    }

    #[test]
    fn test_safe_truncate_multibyte() {
        assert_eq!(safe_truncate("Développeuse senior", 11), "Développeus");
    }

    #[test]
    fn test_safe_truncate_shorter() {
        assert_eq!(safe_truncate("ux", 10), "ux");
    }
}
