use std::borrow::Cow;

/// Lowercase a string for comparison.
///
/// Every metric compares case-normalized text. The engine calls this once per
/// input and the individual metrics call it again on whatever they receive, so
/// it must be idempotent and cheap on input that is already lowercase.
#[inline]
pub fn normalize(input: &str) -> Cow<'_, str> {
    if input.chars().flat_map(char::to_lowercase).eq(input.chars()) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(input.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_mixed_case() {
        assert_eq!(normalize("Apt 411 Washington DC"), "apt 411 washington dc");
    }

    #[test]
    fn test_borrows_when_already_lowercase() {
        assert!(matches!(normalize("1730 7th st nw"), Cow::Borrowed(_)));
        assert!(matches!(normalize(""), Cow::Borrowed(_)));
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("ÉCOLE Straße");
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }
}
