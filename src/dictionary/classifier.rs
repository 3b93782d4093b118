//! Difficulty classification
//!
//! Scores a word on spelling length, complex-phoneme count, and syllable
//! count, then buckets the total into a difficulty level.

use crate::core::DifficultyLevel;

/// Phonemes that make a word harder to recognize from its transcription.
/// Each symbol is counted independently over the whole transcription.
const COMPLEX_SOUNDS: &[&str] = &[
    "θ", "ð", "ʃ", "ʒ", "ŋ", "tʃ", "dʒ", "æ", "ɔj", "aj", "aw", "ɚ", "ɝ",
];

/// Vowel symbols used to approximate the syllable count
const VOWEL_SYMBOLS: &str = "aeiouæɑɔəɚɛɜɝɪʊʌ";

/// Assign a difficulty level to a dictionary record
pub(crate) fn classify(spelling: &str, transcription: &str) -> DifficultyLevel {
    let mut score = match spelling.chars().count() {
        0..=4 => 0,
        5..=7 => 1,
        8..=10 => 2,
        _ => 3,
    };

    let complex_count: usize = COMPLEX_SOUNDS
        .iter()
        .map(|sound| transcription.matches(sound).count())
        .sum();
    score += complex_count.min(3);

    let syllable_count = transcription
        .chars()
        .filter(|c| VOWEL_SYMBOLS.contains(*c))
        .count();
    if syllable_count >= 3 {
        score += 1;
    }
    if syllable_count >= 5 {
        score += 1;
    }

    match score {
        0..=2 => DifficultyLevel::Beginner,
        3..=4 => DifficultyLevel::Intermediate,
        5..=6 => DifficultyLevel::Advanced,
        _ => DifficultyLevel::Expert,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_plain_words_are_beginner() {
        assert_eq!(classify("cat", "kæt"), DifficultyLevel::Beginner);
        assert_eq!(classify("dog", "dɔg"), DifficultyLevel::Beginner);
        assert_eq!(classify("see", "si"), DifficultyLevel::Beginner);
    }

    #[test]
    fn complex_sounds_raise_the_score() {
        // len 7 -> 1, tʃ + ɚ (plus the ʃ inside tʃ) -> 3, two vowels -> 0
        assert_eq!(classify("teacher", "titʃɚ"), DifficultyLevel::Intermediate);
        // len 8 -> 2, θ + ŋ + ŋ -> 3, two vowels -> 0
        assert_eq!(classify("thinking", "θɪŋkɪŋ"), DifficultyLevel::Advanced);
    }

    #[test]
    fn each_complex_sound_counts_independently() {
        // "tʃ" contributes both the digraph and its embedded "ʃ"
        assert_eq!(classify("chair", "tʃɛɹ"), DifficultyLevel::Intermediate);
    }

    #[test]
    fn long_polysyllabic_words_are_expert() {
        assert_eq!(
            classify("juxtaposition", "dʒʌkstəpəzɪʃən"),
            DifficultyLevel::Expert
        );
        assert_eq!(
            classify("refrigerator", "ɹəfɹɪdʒɚejtɚ"),
            DifficultyLevel::Expert
        );
    }

    #[test]
    fn syllable_bonus_applies_at_three_and_five() {
        // len 10 -> 2, ɚ + æ -> 2, three vowels -> +1
        assert_eq!(
            classify("understand", "ʌndɚstænd"),
            DifficultyLevel::Advanced
        );
    }
}
