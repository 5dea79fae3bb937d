// Character classification for pinyin input.

use crate::tone::Tone;

// ---------------------------------------------------------------------------
// Pinyin letter constants
// ---------------------------------------------------------------------------

/// Vowel letters of canonical pinyin. `v` stands in for `ü`.
pub const PINYIN_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'v'];

/// The rounded front vowel `ü` without a tone mark.
pub const ROUNDED_VOWEL: char = '\u{00FC}';

/// ASCII substitute written for `ü` in canonical form.
pub const ROUNDED_VOWEL_SUBSTITUTE: char = 'v';

/// Combining diaeresis (U+0308), as in decomposed `u\u{0308}`.
pub const COMBINING_DIAERESIS: char = '\u{0308}';

// ---------------------------------------------------------------------------
// Diacritic map
// ---------------------------------------------------------------------------

/// Look up an accented glyph in the diacritic map.
///
/// Covers the five plain vowels and `ü` with each of the four tone marks,
/// plus the three accented forms of syllabic `n`. Input is expected to be
/// lowercase already.
pub fn toned_letter(c: char) -> Option<(char, Tone)> {
    let entry = match c {
        '\u{0101}' => ('a', Tone::First),  // ā
        '\u{00E1}' => ('a', Tone::Second), // á
        '\u{01CE}' => ('a', Tone::Third),  // ǎ
        '\u{00E0}' => ('a', Tone::Fourth), // à
        '\u{0113}' => ('e', Tone::First),  // ē
        '\u{00E9}' => ('e', Tone::Second), // é
        '\u{011B}' => ('e', Tone::Third),  // ě
        '\u{00E8}' => ('e', Tone::Fourth), // è
        '\u{012B}' => ('i', Tone::First),  // ī
        '\u{00ED}' => ('i', Tone::Second), // í
        '\u{01D0}' => ('i', Tone::Third),  // ǐ
        '\u{00EC}' => ('i', Tone::Fourth), // ì
        '\u{014D}' => ('o', Tone::First),  // ō
        '\u{00F3}' => ('o', Tone::Second), // ó
        '\u{01D2}' => ('o', Tone::Third),  // ǒ
        '\u{00F2}' => ('o', Tone::Fourth), // ò
        '\u{016B}' => ('u', Tone::First),  // ū
        '\u{00FA}' => ('u', Tone::Second), // ú
        '\u{01D4}' => ('u', Tone::Third),  // ǔ
        '\u{00F9}' => ('u', Tone::Fourth), // ù
        '\u{01D6}' => ('v', Tone::First),  // ǖ
        '\u{01D8}' => ('v', Tone::Second), // ǘ
        '\u{01DA}' => ('v', Tone::Third),  // ǚ
        '\u{01DC}' => ('v', Tone::Fourth), // ǜ
        '\u{0144}' => ('n', Tone::Second), // ń
        '\u{0148}' => ('n', Tone::Third),  // ň
        '\u{01F9}' => ('n', Tone::Fourth), // ǹ
        _ => return None,
    };
    Some(entry)
}

/// Tone carried by a combining accent (decomposed input).
pub fn combining_tone(c: char) -> Option<Tone> {
    match c {
        '\u{0304}' => Some(Tone::First),  // macron
        '\u{0301}' => Some(Tone::Second), // acute
        '\u{030C}' => Some(Tone::Third),  // caron
        '\u{0300}' => Some(Tone::Fourth), // grave
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// What a single (lowercased) input character contributes to a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Accented vowel or nasal: emits `base`, records `tone`.
    TonedLetter { base: char, tone: Tone },
    /// Unaccented `ü`: emits `v`.
    RoundedVowel,
    /// ASCII `1`-`4`: records a tone, emits nothing.
    ToneDigit(Tone),
    /// Combining tone accent: records a tone, emits nothing.
    CombiningTone(Tone),
    /// Combining diaeresis: turns a preceding `u` into `v`.
    CombiningDiaeresis,
    /// Plain ASCII lowercase letter, emitted unchanged.
    Letter(char),
    /// Anything else. Dropped silently.
    Discard,
}

/// Classify one lowercase character.
pub fn classify(c: char) -> CharClass {
    if let Some((base, tone)) = toned_letter(c) {
        return CharClass::TonedLetter { base, tone };
    }
    if c == ROUNDED_VOWEL {
        return CharClass::RoundedVowel;
    }
    if let Some(tone) = Tone::from_ascii_digit(c) {
        return CharClass::ToneDigit(tone);
    }
    if let Some(tone) = combining_tone(c) {
        return CharClass::CombiningTone(tone);
    }
    if c == COMBINING_DIAERESIS {
        return CharClass::CombiningDiaeresis;
    }
    if c.is_ascii_lowercase() {
        return CharClass::Letter(c);
    }
    CharClass::Discard
}

/// Check whether a canonical letter is a pinyin vowel.
pub fn is_vowel(c: char) -> bool {
    PINYIN_VOWELS.contains(&c)
}

/// Strip the tone mark from a glyph, keeping everything else as is.
///
/// `ü` and its toned forms become `v`.
pub fn base_letter(c: char) -> char {
    match toned_letter(c) {
        Some((base, _)) => base,
        None if c == ROUNDED_VOWEL => ROUNDED_VOWEL_SUBSTITUTE,
        None => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENTED_VOWELS: &[(&str, char)] = &[
        ("\u{0101}\u{00E1}\u{01CE}\u{00E0}", 'a'),
        ("\u{0113}\u{00E9}\u{011B}\u{00E8}", 'e'),
        ("\u{012B}\u{00ED}\u{01D0}\u{00EC}", 'i'),
        ("\u{014D}\u{00F3}\u{01D2}\u{00F2}", 'o'),
        ("\u{016B}\u{00FA}\u{01D4}\u{00F9}", 'u'),
        ("\u{01D6}\u{01D8}\u{01DA}\u{01DC}", 'v'),
    ];

    #[test]
    fn every_accented_vowel_maps_to_one_pair() {
        for &(glyphs, base) in ACCENTED_VOWELS {
            let mapped: Vec<_> = glyphs.chars().filter_map(toned_letter).collect();
            assert_eq!(mapped.len(), 4, "{glyphs}");
            for (tone, (b, t)) in Tone::MARKED.iter().zip(mapped) {
                assert_eq!(b, base);
                assert_eq!(t, *tone);
            }
        }
    }

    #[test]
    fn accented_nasal() {
        assert_eq!(toned_letter('\u{0144}'), Some(('n', Tone::Second)));
        assert_eq!(toned_letter('\u{0148}'), Some(('n', Tone::Third)));
        assert_eq!(toned_letter('\u{01F9}'), Some(('n', Tone::Fourth)));
        assert_eq!(toned_letter('n'), None);
    }

    #[test]
    fn plain_letters_are_not_in_the_map() {
        for c in 'a'..='z' {
            assert_eq!(toned_letter(c), None);
        }
        assert_eq!(toned_letter(ROUNDED_VOWEL), None);
    }

    #[test]
    fn classify_branches() {
        assert_eq!(
            classify('\u{01CE}'),
            CharClass::TonedLetter {
                base: 'a',
                tone: Tone::Third
            }
        );
        assert_eq!(classify('\u{00FC}'), CharClass::RoundedVowel);
        assert_eq!(classify('2'), CharClass::ToneDigit(Tone::Second));
        assert_eq!(classify('\u{0300}'), CharClass::CombiningTone(Tone::Fourth));
        assert_eq!(classify('\u{0308}'), CharClass::CombiningDiaeresis);
        assert_eq!(classify('m'), CharClass::Letter('m'));
    }

    #[test]
    fn classify_discards_the_rest() {
        for c in ['5', '0', '.', '\'', '-', '?', '\u{4F60}', '\u{00E7}', 'A'] {
            assert_eq!(classify(c), CharClass::Discard, "{c:?}");
        }
    }

    #[test]
    fn vowels() {
        for c in ['a', 'e', 'i', 'o', 'u', 'v'] {
            assert!(is_vowel(c));
        }
        assert!(!is_vowel('n'));
        assert!(!is_vowel('\u{00FC}'));
    }

    #[test]
    fn base_letters() {
        assert_eq!(base_letter('\u{0101}'), 'a');
        assert_eq!(base_letter('\u{01DC}'), 'v');
        assert_eq!(base_letter('\u{00FC}'), 'v');
        assert_eq!(base_letter('x'), 'x');
        assert_eq!(base_letter('-'), '-');
    }
}
