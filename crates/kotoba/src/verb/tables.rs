//! Rule tables for verb classification and conjugation.
//!
//! Adding an exception only requires adding an entry here.

use super::Form;
use kotoba_core::JapaneseText;

/// A specific verb, identified by its reading and spelling.
#[derive(Debug)]
pub(super) struct Lexeme {
    pub kana: &'static str,
    pub kanji: &'static str,
    /// No other verb with a different conjugation shares the reading.
    pub unique_reading: bool,
}

impl Lexeme {
    const fn new(kana: &'static str, kanji: &'static str, unique_reading: bool) -> Self {
        Self {
            kana,
            kanji,
            unique_reading,
        }
    }

    pub fn matches(&self, verb: &JapaneseText) -> bool {
        match verb.kanji() {
            Some(kanji) => verb.pronunciation() == self.kana && kanji == self.kanji,
            None => {
                let line = verb.pronunciation();
                line == self.kanji || (self.unique_reading && line == self.kana)
            }
        }
    }

    /// Like [`Self::matches`], but also accepts compounds that end in the verb.
    pub fn matches_tail(&self, verb: &JapaneseText) -> bool {
        let line = verb.pronunciation();
        match verb.kanji() {
            Some(kanji) => line.ends_with(self.kana) && kanji.ends_with(self.kanji),
            None => {
                line.ends_with(self.kanji)
                    || (self.unique_reading
                        && (line == self.kana || line.ends_with(&["て", self.kana].concat())))
            }
        }
    }
}

/// Verbs ending in -iru or -eru that conjugate as godan.
pub(super) static GODAN_EXCEPTIONS: &[Lexeme] = &[
    Lexeme::new("あせる", "焦る", true),
    Lexeme::new("いじる", "弄る", true),
    Lexeme::new("いる", "要る", false),
    Lexeme::new("うねる", "畝る", true),
    Lexeme::new("かえる", "帰る", false),
    Lexeme::new("かえる", "返る", false),
    Lexeme::new("かぎる", "限る", true),
    Lexeme::new("かじる", "齧る", true),
    Lexeme::new("きる", "切る", false),
    Lexeme::new("きる", "斬る", false),
    Lexeme::new("ける", "蹴る", true),
    Lexeme::new("しげる", "茂る", true),
    Lexeme::new("しゃべる", "喋る", true),
    Lexeme::new("しる", "知る", true),
    Lexeme::new("すべる", "滑る", true),
    Lexeme::new("ちる", "散る", true),
    Lexeme::new("つねる", "抓る", true),
    Lexeme::new("てる", "照る", true),
    Lexeme::new("にぎる", "握る", true),
    Lexeme::new("ねる", "練る", false),
    Lexeme::new("はいる", "入る", true),
    Lexeme::new("はしる", "走る", true),
    Lexeme::new("ひねる", "捻る", true),
    Lexeme::new("ひるがえる", "翻る", true),
    Lexeme::new("へる", "減る", false),
    Lexeme::new("まいる", "参る", true),
    Lexeme::new("まじる", "混じる", true),
    Lexeme::new("よみがえる", "蘇る", true),
    // godan verbs that would otherwise pass for する compounds
    Lexeme::new("かする", "掠る", true),
    Lexeme::new("こする", "擦る", true),
    Lexeme::new("さする", "摩る", true),
    Lexeme::new("ゆする", "揺する", true),
];

/// Ichidan verbs whose stem vowel is hidden behind a kanji when written without a reading.
pub(super) static ICHIDAN_EXCEPTIONS: &[Lexeme] = &[
    Lexeme::new("いる", "居る", false),
    Lexeme::new("いる", "射る", false),
    Lexeme::new("える", "得る", false),
    Lexeme::new("きる", "着る", false),
    Lexeme::new("くれる", "呉れる", false),
    // would otherwise pass for a 来る compound
    Lexeme::new("できる", "出来る", true),
    Lexeme::new("でる", "出る", false),
    Lexeme::new("にる", "似る", false),
    Lexeme::new("にる", "煮る", false),
    Lexeme::new("ねる", "寝る", false),
    Lexeme::new("ひる", "干る", false),
    Lexeme::new("へる", "経る", false),
    Lexeme::new("みる", "見る", false),
    Lexeme::new("みる", "診る", false),
];

/// Recognises する, 来る and their compounds.
#[derive(Debug)]
pub(super) struct IrregularPattern {
    /// Ending of the reading line.
    pub reading: &'static str,
    /// Endings of the orthography line.
    pub spellings: &'static [&'static str],
    /// Endings that identify the verb when it is written on a single line.
    pub single_line_endings: &'static [&'static str],
    /// Whole words that identify the verb when it is written on a single line.
    pub single_line_words: &'static [&'static str],
}

impl IrregularPattern {
    pub fn matches(&self, verb: &JapaneseText) -> bool {
        let line = verb.pronunciation();
        match verb.kanji() {
            Some(kanji) => {
                line.ends_with(self.reading) && self.spellings.iter().any(|s| kanji.ends_with(s))
            }
            None => {
                self.single_line_words.contains(&line)
                    || self.single_line_endings.iter().any(|e| line.ends_with(e))
            }
        }
    }
}

pub(super) static IRREGULAR: &[IrregularPattern] = &[
    IrregularPattern {
        reading: "する",
        spellings: &["する", "為る"],
        single_line_endings: &["する", "為る"],
        single_line_words: &[],
    },
    IrregularPattern {
        reading: "くる",
        spellings: &["来る", "てくる"],
        single_line_endings: &["来る", "てくる"],
        single_line_words: &["くる"],
    },
];

/// Endings of irregular verb lines and the stems that replace them.
pub(super) static IRREGULAR_STEMS: &[(&str, &str)] = &[
    ("する", "し"),
    ("為る", "為"),
    ("くる", "き"),
    ("来る", "来"),
];

/// Endings that may close a dictionary form verb.
pub(super) static DICTIONARY_ENDINGS: &[char] =
    &['う', 'く', 'ぐ', 'す', 'つ', 'ぬ', 'ぶ', 'む', 'る'];

/// The i-row counterpart of each godan ending, for the masu stem.
pub(super) static I_ROW: &[(char, char)] = &[
    ('う', 'い'),
    ('く', 'き'),
    ('ぐ', 'ぎ'),
    ('す', 'し'),
    ('つ', 'ち'),
    ('ぬ', 'に'),
    ('ぶ', 'び'),
    ('む', 'み'),
    ('る', 'り'),
];

/// Kana that end an -iru or -eru stem.
pub(super) static ICHIDAN_STEM_ENDINGS: &[char] = &[
    'い', 'き', 'ぎ', 'し', 'じ', 'ち', 'ぢ', 'に', 'ひ', 'び', 'ぴ', 'み', 'り', //
    'え', 'け', 'げ', 'せ', 'ぜ', 'て', 'で', 'ね', 'へ', 'べ', 'ぺ', 'め', 'れ',
];

/// Sound change of a godan ending before て and た.
#[derive(Debug)]
pub(super) struct Euphonic {
    pub ending: char,
    pub te: &'static str,
    pub ta: &'static str,
}

pub(super) static EUPHONIC: &[Euphonic] = &[
    Euphonic {
        ending: 'く',
        te: "いて",
        ta: "いた",
    },
    Euphonic {
        ending: 'ぐ',
        te: "いで",
        ta: "いだ",
    },
    Euphonic {
        ending: 'う',
        te: "って",
        ta: "った",
    },
    Euphonic {
        ending: 'つ',
        te: "って",
        ta: "った",
    },
    Euphonic {
        ending: 'る',
        te: "って",
        ta: "った",
    },
    Euphonic {
        ending: 'ぬ',
        te: "んで",
        ta: "んだ",
    },
    Euphonic {
        ending: 'ぶ',
        te: "んで",
        ta: "んだ",
    },
    Euphonic {
        ending: 'む',
        te: "んで",
        ta: "んだ",
    },
    Euphonic {
        ending: 'す',
        te: "して",
        ta: "した",
    },
];

/// 行く and its compounds take って instead of いて.
pub(super) static IKU: &[Lexeme] = &[
    Lexeme::new("いく", "行く", true),
    Lexeme::new("ゆく", "行く", true),
];

/// Honorific godan verbs whose masu stem ends in い instead of り.
pub(super) static HONORIFIC: &[Lexeme] = &[
    Lexeme::new("いらっしゃる", "いらっしゃる", true),
    Lexeme::new("おっしゃる", "仰る", true),
    Lexeme::new("くださる", "下さる", true),
    Lexeme::new("ござる", "御座る", true),
    Lexeme::new("なさる", "為さる", true),
];

/// Forms of the copula だ.
pub(super) static COPULA: &[(Form, &str)] = &[
    (Form::Masu, "です"),
    (Form::Mashou, "でしょう"),
    (Form::Te, "で"),
    (Form::Ta, "だった"),
];
