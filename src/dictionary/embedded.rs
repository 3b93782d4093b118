//! Embedded dictionary
//!
//! Word list compiled into the binary so the game runs without any data
//! files installed.

/// Bundled American English word list, `spelling,transcription` per line
pub const EN_US: &str = include_str!("../../data/en_us.txt");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_has_both_fields() {
        for line in EN_US.lines() {
            let (spelling, transcription) = line
                .split_once(',')
                .unwrap_or_else(|| panic!("malformed embedded record: {line}"));
            assert!(!spelling.trim().is_empty(), "empty spelling: {line}");
            assert!(!transcription.trim().is_empty(), "empty transcription: {line}");
        }
    }

    #[test]
    fn spellings_are_lowercase_ascii() {
        for line in EN_US.lines() {
            let spelling = line.split(',').next().unwrap();
            assert!(
                spelling.chars().all(|c| c.is_ascii_lowercase()),
                "spelling not lowercase ascii: {spelling}"
            );
        }
    }
}
