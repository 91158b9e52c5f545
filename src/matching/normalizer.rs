/// Punctuation that carries no meaning for answer comparison. Digits and
/// hyphens stay intact so answers like "9-5" survive normalization.
const STRIPPED_PUNCTUATION: &[char] = &[',', '.', '!', '?', '\'', '"', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', ';', ':'];

/// Canonicalize a free-text answer before comparison: lower-case, strip
/// non-semantic punctuation, collapse whitespace runs to single spaces.
/// Whitespace-only input normalizes to the empty string.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize("  Pizza Night  "), "pizza night");
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(normalize("Well, it's \"pizza\"!"), "well its pizza");
        assert_eq!(normalize("Really?!"), "really");
    }

    #[test]
    fn test_digits_and_hyphens_kept() {
        assert_eq!(normalize("My 9-5 job."), "my 9-5 job");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize("a   quiet\twalk\n on  the beach"), "a quiet walk on the beach");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
        assert_eq!(normalize("?!,."), "");
    }
}
