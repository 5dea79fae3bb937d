// Pinyin normalization: tone-marked, numbered or bare input to canonical
// numeric form.
//
// Every whitespace-separated token becomes one syllable. Characters are
// classified one at a time (see `tonedrill_core::character::classify`):
// accented glyphs and tone digits record a tone, letters are collected, and
// everything else is dropped. The last tone seen in a token wins.

use tonedrill_core::character::{
    COMBINING_DIAERESIS, CharClass, ROUNDED_VOWEL_SUBSTITUTE, base_letter, classify,
    combining_tone,
};
use tonedrill_core::{Syllable, Tone, Transcription};

/// Parse free-form pinyin into a [`Transcription`].
///
/// Never fails: unknown characters are discarded, and tokens left with no
/// letters are skipped entirely.
pub fn parse(text: &str) -> Transcription {
    text.to_lowercase()
        .split_whitespace()
        .filter_map(parse_syllable)
        .collect()
}

/// Normalize free-form pinyin to canonical numeric form.
///
/// ```
/// use tonedrill_pinyin::normalize_to_numeric;
///
/// assert_eq!(normalize_to_numeric("Nǐ hǎo"), "ni3 hao3");
/// assert_eq!(normalize_to_numeric("lǜ"), "lv4");
/// assert_eq!(normalize_to_numeric("?!"), "");
/// ```
pub fn normalize_to_numeric(text: &str) -> String {
    parse(text).to_string()
}

/// Build one syllable from a lowercase token.
fn parse_syllable(token: &str) -> Option<Syllable> {
    let mut letters = String::with_capacity(token.len());
    let mut tone = Tone::Neutral;

    for c in token.chars() {
        match classify(c) {
            CharClass::TonedLetter { base, tone: t } => {
                letters.push(base);
                tone = t;
            }
            CharClass::RoundedVowel => letters.push(ROUNDED_VOWEL_SUBSTITUTE),
            CharClass::ToneDigit(t) | CharClass::CombiningTone(t) => tone = t,
            CharClass::CombiningDiaeresis => {
                if letters.ends_with('u') {
                    letters.pop();
                    letters.push(ROUNDED_VOWEL_SUBSTITUTE);
                }
            }
            CharClass::Letter(l) => letters.push(l),
            CharClass::Discard => {}
        }
    }

    if letters.is_empty() {
        None
    } else {
        Some(Syllable::new(letters, tone))
    }
}

/// Display form of a pinyin string.
///
/// Lowercases, trims, replaces accented glyphs with their base letter (`ü`
/// with `v`) and collapses whitespace runs to a single space. Unlike
/// [`normalize_to_numeric`] nothing else is removed and no tone digits are
/// added, so punctuation and digits survive.
pub fn normalize_display(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());

    for (i, word) in lowered.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        for c in word.chars() {
            if combining_tone(c).is_some() {
                continue;
            }
            if c == COMBINING_DIAERESIS && out.ends_with('u') {
                out.pop();
                out.push(ROUNDED_VOWEL_SUBSTITUTE);
                continue;
            }
            out.push(base_letter(c));
        }
    }
    out
}

/// Remove tone digits `1`-`4` from a canonical string.
pub fn strip_tones(canonical: &str) -> String {
    canonical
        .chars()
        .filter(|c| Tone::from_ascii_digit(*c).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- normalize_to_numeric --

    #[test]
    fn single_marked_syllable() {
        assert_eq!(normalize_to_numeric("m\u{0101}"), "ma1");
    }

    #[test]
    fn numeric_input_passes_through() {
        assert_eq!(normalize_to_numeric("ni3 hao3"), "ni3 hao3");
    }

    #[test]
    fn all_four_tones() {
        assert_eq!(
            normalize_to_numeric("m\u{0101} m\u{00E1} m\u{01CE} m\u{00E0} ma"),
            "ma1 ma2 ma3 ma4 ma"
        );
    }

    #[test]
    fn uppercase_is_lowered() {
        assert_eq!(normalize_to_numeric("N\u{01D0} H\u{01CE}O"), "ni3 hao3");
        assert_eq!(normalize_to_numeric("\u{0100}"), "a1"); // Ā
    }

    #[test]
    fn rounded_vowel() {
        assert_eq!(normalize_to_numeric("n\u{00FC}"), "nv");
        assert_eq!(normalize_to_numeric("n\u{01DA}"), "nv3");
        assert_eq!(normalize_to_numeric("l\u{01DC}s\u{00E8}"), "lvse4");
    }

    #[test]
    fn last_tone_in_token_wins() {
        assert_eq!(normalize_to_numeric("n\u{01D0}h\u{01CE}o"), "nihao3");
        assert_eq!(normalize_to_numeric("m\u{0101}\u{00E0}"), "maa4");
        assert_eq!(normalize_to_numeric("m\u{0101}4"), "ma4");
        assert_eq!(normalize_to_numeric("ma4\u{0101}"), "maa1");
    }

    #[test]
    fn tone_digit_position_in_token() {
        assert_eq!(normalize_to_numeric("3hao"), "hao3");
        assert_eq!(normalize_to_numeric("ha3o"), "hao3");
    }

    #[test]
    fn other_digits_are_discarded() {
        assert_eq!(normalize_to_numeric("ma5"), "ma");
        assert_eq!(normalize_to_numeric("ma0"), "ma");
        assert_eq!(normalize_to_numeric("2024"), "");
    }

    #[test]
    fn punctuation_is_discarded() {
        assert_eq!(normalize_to_numeric("x\u{012B}'\u{0101}n"), "xian1");
        assert_eq!(normalize_to_numeric("n\u{01D0} h\u{01CE}o!"), "ni3 hao3");
        assert_eq!(normalize_to_numeric("h\u{01CE}o - ba"), "hao3 ba");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(normalize_to_numeric("  ni3\t\thao3 \n"), "ni3 hao3");
    }

    #[test]
    fn consonant_only_tokens_keep_no_tone() {
        assert_eq!(normalize_to_numeric("hm"), "hm");
        assert_eq!(normalize_to_numeric("\u{0148}"), "n");
        assert_eq!(normalize_to_numeric("n2"), "n");
    }

    #[test]
    fn empty_and_garbage() {
        assert_eq!(normalize_to_numeric(""), "");
        assert_eq!(normalize_to_numeric("   "), "");
        assert_eq!(normalize_to_numeric("?! ... 9"), "");
        assert_eq!(normalize_to_numeric("\u{4F60}\u{597D}"), "");
    }

    #[test]
    fn decomposed_marks() {
        assert_eq!(normalize_to_numeric("ma\u{0304}"), "ma1");
        assert_eq!(normalize_to_numeric("ha\u{030C}o"), "hao3");
        assert_eq!(normalize_to_numeric("lu\u{0308}\u{0300}"), "lv4");
        assert_eq!(normalize_to_numeric("nu\u{0308}"), "nv");
    }

    #[test]
    fn idempotent_on_canonical_form() {
        for input in [
            "ma1",
            "ni3 hao3",
            "lv4 se4",
            "n",
            "zhong1 guo2 ren2",
            "de",
            "",
        ] {
            let once = normalize_to_numeric(input);
            assert_eq!(once, input);
            assert_eq!(normalize_to_numeric(&once), once);
        }
    }

    #[test]
    fn normalizing_twice_is_stable() {
        for input in ["Nǐ hǎo!", "lǜ", "xièxie", "ń", "  WǑ   ài  nǐ "] {
            let once = normalize_to_numeric(input);
            assert_eq!(normalize_to_numeric(&once), once, "{input}");
        }
    }

    // -- parse --

    #[test]
    fn parse_yields_syllables() {
        let t = parse("zh\u{014D}ng gu\u{00F3}");
        assert_eq!(t.len(), 2);
        assert_eq!(t.syllables[0], Syllable::new("zhong", Tone::First));
        assert_eq!(t.syllables[1], Syllable::new("guo", Tone::Second));
    }

    #[test]
    fn parse_skips_empty_tokens() {
        let t = parse("ni ... hao");
        assert_eq!(t.len(), 2);
    }

    // -- normalize_display --

    #[test]
    fn display_strips_marks_and_keeps_the_rest() {
        assert_eq!(normalize_display("  N\u{01D0}   h\u{01CE}o! "), "ni hao!");
        assert_eq!(normalize_display("l\u{01DC} n\u{00FC}"), "lv nv");
        assert_eq!(normalize_display("ma3"), "ma3");
        assert_eq!(normalize_display("ha\u{030C}o"), "hao");
        assert_eq!(normalize_display(""), "");
    }

    // -- strip_tones --

    #[test]
    fn strip_tones_removes_digits_one_to_four() {
        assert_eq!(strip_tones("ni3 hao3"), "ni hao");
        assert_eq!(strip_tones("ma1 ma2 ma3 ma4"), "ma ma ma ma");
        assert_eq!(strip_tones("ma5"), "ma5");
    }
}
