//! Dictionary parsing and loading
//!
//! Records are newline-delimited `spelling,transcription` pairs. Lines
//! missing either field are dropped silently; spellings are lowercased.

use super::{Dictionary, DictionaryError, classifier};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Parse dictionary records from text
///
/// # Errors
/// Returns [`DictionaryError::Empty`] if no line yields a usable record.
///
/// # Examples
/// ```
/// use ipa_master::dictionary::loader::parse;
///
/// let dict = parse("cat,kæt\ndog,dɔg\n").unwrap();
/// assert_eq!(dict.len(), 2);
/// ```
pub fn parse(text: &str) -> Result<Dictionary, DictionaryError> {
    let words = text
        .lines()
        .filter_map(|line| {
            let (spelling, transcription) = line.split_once(',')?;
            let spelling = spelling.trim().to_lowercase();
            let transcription = transcription.trim();
            if spelling.is_empty() || transcription.is_empty() {
                return None;
            }

            let difficulty = classifier::classify(&spelling, transcription);
            Some(Word::new(spelling, transcription, difficulty))
        })
        .collect();

    Dictionary::new(words)
}

/// Load a dictionary from a file
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or
/// [`DictionaryError::Empty`] if it holds no usable records.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_records() {
        let dict = parse("cat,kæt\ndog,dɔg\nsee,si\n").unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.transcription_of("cat"), Some("kæt"));
    }

    #[test]
    fn malformed_lines_are_dropped_silently() {
        let dict = parse("cat,kæt\nno-comma-here\n,kæt\ncat-only,\n\ndog,dɔg\n").unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.transcription_of("dog"), Some("dɔg"));
    }

    #[test]
    fn spellings_are_lowercased() {
        let dict = parse("Cat,kæt\n").unwrap();
        assert_eq!(dict.transcription_of("cat"), Some("kæt"));
        assert_eq!(dict.transcription_of("Cat"), None);
    }

    #[test]
    fn fields_are_trimmed() {
        let dict = parse("  cat , kæt \n").unwrap();
        assert_eq!(dict.transcription_of("cat"), Some("kæt"));
    }

    #[test]
    fn empty_input_is_a_load_error() {
        assert!(matches!(parse(""), Err(DictionaryError::Empty)));
        assert!(matches!(
            parse("malformed\nlines\nonly\n"),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/nonexistent/words.txt");
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }
}
