//! Provides kotoba's Japanese text functionality: furigana alignment, ruby node
//! construction and verb conjugation.
//!
//! Every function is pure, so they can be called from any thread without
//! synchronisation.

pub mod error;
pub mod furigana;
pub mod ruby;
pub mod verb;

pub use error::{KotobaError, KotobaResult};
pub use furigana::{align, align_text};
pub use kotoba_core::{
    is_hiragana, is_kana, is_kanji, is_katakana, ConjugationClass, FuriganaParseResult,
    JapaneseText, RenderNode, TextError,
};
pub use ruby::{build, build_text};
pub use verb::{
    classify, conjugate, conjugations, dictionary_verb_class, mashou_form, masu_form, ta_form,
    te_form, Conjugations, Form, VerbForm,
};
