use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Returns true if the haystack contains the needle, ignoring case.
///
/// ASCII input uses a sliding window over the bytes; anything else falls back to comparing the
/// Unicode lowercase forms.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    if haystack.is_ascii() && needle.is_ascii() {
        if needle.len() > haystack.len() {
            return false;
        }
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()));
    }

    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Orders two names the way a human-facing collation does.
///
/// Base letters compare first, ignoring accents and case. Remaining ties put the unaccented
/// form first, then the lowercase form.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| a.nfd().flat_map(char::to_lowercase).cmp(b.nfd().flat_map(char::to_lowercase)))
        .then_with(|| b.cmp(a))
}

/// Lowercased characters with combining marks stripped after canonical decomposition.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case_finds_different_cases() {
        assert!(contains_ignore_case("Ervin Howell", "ervin"));
        assert!(contains_ignore_case("ervin howell", "HOWELL"));
        assert!(contains_ignore_case("Ervin Howell", "vIn hO"));
    }

    #[test]
    fn test_contains_ignore_case_returns_false_for_no_match() {
        assert!(!contains_ignore_case("Leanne Graham", "ervin"));
    }

    #[test]
    fn test_contains_ignore_case_handles_empty_needle() {
        assert!(contains_ignore_case("Leanne Graham", ""));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn test_contains_ignore_case_handles_needle_longer_than_haystack() {
        assert!(!contains_ignore_case("Ann", "Annabelle"));
    }

    #[test]
    fn test_contains_ignore_case_handles_non_ascii() {
        assert!(contains_ignore_case("Zoë Ångström", "ÅNG"));
        assert!(contains_ignore_case("Zoë Ångström", "zoë"));
        assert!(!contains_ignore_case("Zoë Ångström", "zoe"));
    }

    #[test]
    fn test_compare_names_ignores_case_first() {
        assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
        assert_eq!(compare_names("Bob", "alice"), Ordering::Greater);
        assert_eq!(compare_names("Chelsey Dietrich", "Clementina DuBuque"), Ordering::Less);
    }

    #[test]
    fn test_compare_names_puts_lowercase_first_on_tie() {
        assert_eq!(compare_names("ann", "Ann"), Ordering::Less);
        assert_eq!(compare_names("Ann", "ann"), Ordering::Greater);
        assert_eq!(compare_names("Ann", "Ann"), Ordering::Equal);
    }

    #[test]
    fn test_compare_names_folds_accents() {
        let mut names = vec!["Zoe Adams", "Émile Zola", "Evan Brown"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["Émile Zola", "Evan Brown", "Zoe Adams"]);

        assert_eq!(compare_names("Ångström", "Bauch"), Ordering::Less);
        assert_eq!(compare_names("Zoë", "Zoe Adams"), Ordering::Less);
    }

    #[test]
    fn test_compare_names_puts_unaccented_first_on_tie() {
        assert_eq!(compare_names("Emile", "Émile"), Ordering::Less);
        assert_eq!(compare_names("émile", "Émile"), Ordering::Less);
        assert_eq!(compare_names("Émile", "Émile"), Ordering::Equal);
    }

    #[test]
    fn test_compare_names_shorter_prefix_first() {
        assert_eq!(compare_names("Ann", "Anna"), Ordering::Less);
    }
}
