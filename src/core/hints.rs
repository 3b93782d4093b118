//! Phoneme hint table
//!
//! Maps the phonetic symbols used by the dictionary to example English
//! words illustrating the sound. `hints_for` decomposes a transcription
//! into its symbols with a greedy longest-match scan.

/// A phonetic symbol paired with an example word for its sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub symbol: &'static str,
    pub example: &'static str,
}

/// Digraph symbols, matched before single characters
const MULTI_CHAR_HINTS: &[(&str, &str)] = &[
    ("tʃ", "(ch)eck"),
    ("dʒ", "(j)ump"),
    ("aj", "(i)ce"),
    ("aw", "(ou)t"),
    ("ej", "(a)te"),
    ("ow", "b(o)ne"),
    ("ɔj", "(oy)"),
    ("ɪə", "(ear)"),
    ("ɛə", "(air)"),
    ("ʊə", "(our)"),
];

const SINGLE_CHAR_HINTS: &[(&str, &str)] = &[
    ("æ", "c(a)t"),
    ("ə", "sof(a)"),
    ("a", "f(a)ther"),
    ("ʌ", "b(u)t"),
    ("ɪ", "b(i)t"),
    ("ʊ", "b(oo)k"),
    ("ɔ", "l(aw)"),
    ("ɛ", "b(e)d"),
    ("ɑ", "c(o)t"),
    ("i", "s(ee)"),
    ("u", "b(oo)t"),
    ("e", "b(a)te"),
    ("ɝ", "b(ir)d"),
    ("θ", "(th)ink"),
    ("ð", "(th)is"),
    ("ʃ", "(sh)e"),
    ("ʒ", "mea(s)ure"),
    ("ŋ", "si(ng)"),
    ("ɹ", "(r)ed"),
    ("l", "(l)ove"),
    ("w", "(w)e"),
    ("j", "(y)es"),
    ("h", "(h)ouse"),
    ("p", "(p)et"),
    ("b", "(b)et"),
    ("t", "(t)op"),
    ("d", "(d)og"),
    ("k", "(c)at"),
    ("g", "(g)o"),
    ("f", "(f)un"),
    ("v", "(v)ery"),
    ("s", "(s)it"),
    ("z", "(z)oo"),
    ("m", "(m)y"),
    ("n", "(n)o"),
];

/// Decompose a transcription into hint entries, one per matched symbol
///
/// Digraphs take precedence over their constituent characters, so "tʃ"
/// yields the (ch)eck hint rather than (t)op followed by (sh)e. Symbols
/// not present in either table are skipped.
#[must_use]
pub fn hints_for(transcription: &str) -> Vec<Hint> {
    let mut found = Vec::new();
    let mut rest = transcription;

    'outer: while !rest.is_empty() {
        for &(symbol, example) in MULTI_CHAR_HINTS.iter().chain(SINGLE_CHAR_HINTS) {
            if let Some(stripped) = rest.strip_prefix(symbol) {
                found.push(Hint { symbol, example });
                rest = stripped;
                continue 'outer;
            }
        }

        // Unknown symbol, skip one character
        let mut chars = rest.chars();
        chars.next();
        rest = chars.as_str();
    }

    found
}
