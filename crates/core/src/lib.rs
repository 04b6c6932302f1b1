//! kotoba core types and functions.

use std::ops::RangeInclusive;

pub mod japanese_text;
pub mod types;

pub use japanese_text::{JapaneseText, TextError};
pub use types::{ConjugationClass, FuriganaParseResult, RenderNode};

const HIRAGANA_RANGE: RangeInclusive<char> = '\u{3041}'..='\u{309F}';
const KATAKANA_RANGE: RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';
// CJK Unified Ideographs
const KANJI_RANGE: RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';
// CJK Unified Ideographs Extension A
const KANJI_EXTENSION_A_RANGE: RangeInclusive<char> = '\u{3400}'..='\u{4DBF}';
// 々 repeats the previous kanji and is read as one
const ITERATION_MARK: char = '\u{3005}';

pub fn is_hiragana(c: char) -> bool {
    HIRAGANA_RANGE.contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    KATAKANA_RANGE.contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// Kanji are the characters that get furigana, so the iteration mark counts as one.
pub fn is_kanji(c: char) -> bool {
    KANJI_RANGE.contains(&c) || KANJI_EXTENSION_A_RANGE.contains(&c) || c == ITERATION_MARK
}

/// Iterates over the kanji in the word.
pub fn kanji_from_word(word: &str) -> impl Iterator<Item = &str> {
    word.char_indices()
        .filter(|(_, c)| is_kanji(*c))
        .map(|(i, c)| &word[i..i + c.len_utf8()])
}
