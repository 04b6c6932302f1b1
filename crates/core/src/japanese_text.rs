//! Contains JapaneseText, the reading and orthography of a single vocabulary item.

use crate::kanji_from_word;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use wana_kana::ConvertJapanese;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("the reading is empty")]
    Empty,
    #[error("the orthography '{0}' contains no kanji")]
    NoKanji(String),
}

/// A word or phrase in the two-line convention, `"<reading>\n<orthography>"`,
/// or just `"<reading>"` when the item has no separate kanji spelling.
///
/// A single line may still contain kanji (`"読む"`), in which case it is treated
/// as both the reading and the spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JapaneseText {
    kana: String,
    kanji: Option<String>,
}

impl JapaneseText {
    pub fn new(kana: impl Into<String>, kanji: Option<String>) -> Result<Self, TextError> {
        let kana = kana.into();
        if kana.is_empty() {
            return Err(TextError::Empty);
        }
        if let Some(kanji) = &kanji {
            if kanji_from_word(kanji).next().is_none() {
                return Err(TextError::NoKanji(kanji.clone()));
            }
        }
        Ok(Self { kana, kanji })
    }

    /// Parses the two-line convention.
    pub fn parse(text: &str) -> Result<Self, TextError> {
        match text.split_once('\n') {
            Some((kana, kanji)) => Self::new(
                kana.trim_end_matches('\r'),
                Some(kanji.trim_end_matches('\r').to_string()),
            ),
            None => Self::new(text.trim_end_matches('\r'), None),
        }
    }

    /// The reading line.
    pub fn pronunciation(&self) -> &str {
        &self.kana
    }

    /// The orthography, if it differs from the reading.
    pub fn kanji(&self) -> Option<&str> {
        self.kanji.as_deref()
    }

    /// The kanji spelling if there is one, otherwise the reading.
    pub fn spelling(&self) -> &str {
        self.kanji.as_deref().unwrap_or(&self.kana)
    }

    pub fn has_furigana(&self) -> bool {
        self.kanji.is_some()
    }

    /// The reading in romaji, or None if the reading line itself contains kanji.
    pub fn romaji(&self) -> Option<String> {
        if kanji_from_word(&self.kana).next().is_some() {
            return None;
        }
        Some(self.kana.as_str().to_romaji())
    }
}

impl fmt::Display for JapaneseText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kanji {
            Some(kanji) => write!(f, "{}\n{}", self.kana, kanji),
            None => f.write_str(&self.kana),
        }
    }
}

impl FromStr for JapaneseText {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for JapaneseText {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<JapaneseText> for String {
    fn from(value: JapaneseText) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_two_lines() {
        let text = JapaneseText::parse("きたない\n汚い").unwrap();
        assert_eq!(text.pronunciation(), "きたない");
        assert_eq!(text.kanji(), Some("汚い"));
        assert_eq!(text.spelling(), "汚い");
        assert!(text.has_furigana());
        assert_eq!(text.to_string(), "きたない\n汚い");
    }

    #[test]
    fn parses_single_line() {
        let text = JapaneseText::parse("ありがとう").unwrap();
        assert_eq!(text.pronunciation(), "ありがとう");
        assert_eq!(text.kanji(), None);
        assert_eq!(text.spelling(), "ありがとう");
        assert!(!text.has_furigana());
        assert_eq!(text.to_string(), "ありがとう");
    }

    #[test]
    fn single_line_may_contain_kanji() {
        let text: JapaneseText = "読む".parse().unwrap();
        assert_eq!(text.pronunciation(), "読む");
        assert_eq!(text.spelling(), "読む");
    }

    #[test]
    fn strips_carriage_returns() {
        let text = JapaneseText::parse("こおり\r\n氷\r").unwrap();
        assert_eq!(text.pronunciation(), "こおり");
        assert_eq!(text.kanji(), Some("氷"));
    }

    #[test]
    fn rejects_orthography_without_kanji() {
        let err = JapaneseText::parse("てれび\nテレビ").unwrap_err();
        assert_eq!(err, TextError::NoKanji("テレビ".to_string()));
    }

    #[test]
    fn rejects_empty_reading() {
        assert_eq!(JapaneseText::parse("").unwrap_err(), TextError::Empty);
        assert_eq!(JapaneseText::parse("\n氷").unwrap_err(), TextError::Empty);
    }

    #[test]
    fn converts_to_romaji() {
        let text = JapaneseText::parse("たべる\n食べる").unwrap();
        assert_eq!(text.romaji().as_deref(), Some("taberu"));
    }

    #[test]
    fn no_romaji_for_kanji_reading() {
        let text = JapaneseText::parse("読む").unwrap();
        assert_eq!(text.romaji(), None);
    }

    #[test]
    fn serializes_as_string() {
        let text = JapaneseText::parse("つくる\n作る").unwrap();
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, r#""つくる\n作る""#);
        let back: JapaneseText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, text);
        assert!(serde_json::from_str::<JapaneseText>(r#""""#).is_err());
    }
}
