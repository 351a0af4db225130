//! Search Input

/// Normalize raw search input into a ticker symbol.
///
/// Trims surrounding whitespace and uppercases. Empty input yields `None`.
#[must_use]
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_uppercases() {
        assert_eq!(normalize_symbol("  aapl "), Some("AAPL".to_string()));
        assert_eq!(normalize_symbol("TataSteel"), Some("TATASTEEL".to_string()));
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(normalize_symbol(""), None);
        assert_eq!(normalize_symbol(" \t\n "), None);
    }

    #[test]
    fn inner_spaces_are_kept() {
        assert_eq!(normalize_symbol(" nifty bank "), Some("NIFTY BANK".to_string()));
    }
}
