//! Bar splitting

pub const BAR_SEPARATOR: char = '|';

/// Split stripped progression text into bar strings, dropping empty and
/// whitespace-only segments.
pub fn split_bars(text: &str) -> Vec<&str> {
    text.split(BAR_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bars() {
        assert_eq!(split_bars("Eb7|Ab7|Db^7|"), vec!["Eb7", "Ab7", "Db^7"]);
    }

    #[test]
    fn test_blank_segments_dropped() {
        assert_eq!(split_bars("|C|  ||G7 |"), vec!["C", "G7 "]);
        assert!(split_bars("").is_empty());
        assert!(split_bars(" | |").is_empty());
    }
}
