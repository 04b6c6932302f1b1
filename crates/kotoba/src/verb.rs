//! Verb classification and conjugation.
//!
//! Verbs use the same two-line convention as [`JapaneseText`] and conjugated forms
//! keep whichever lines the dictionary form had. A verb's spelling ends in the same
//! kana as its reading, so both lines are conjugated with the same rule.

mod class;
mod conjugate;
mod tables;

pub use self::{
    class::{classify, dictionary_verb_class},
    conjugate::{conjugate, conjugations, mashou_form, masu_form, ta_form, te_form},
};
use kotoba_core::{ConjugationClass, JapaneseText};
use serde::{Deserialize, Serialize};

/// A verb in the two-line convention.
pub type VerbForm = JapaneseText;

/// The forms the conjugator can derive from a dictionary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    /// Polite non-past, 書きます.
    Masu,
    /// Polite volitional, 書きましょう.
    Mashou,
    /// Connective, 書いて.
    Te,
    /// Plain past, 書いた.
    Ta,
}

impl Form {
    // what follows a stem that needs no sound change
    fn suffix(self) -> &'static str {
        match self {
            Self::Masu => "ます",
            Self::Mashou => "ましょう",
            Self::Te => "て",
            Self::Ta => "た",
        }
    }
}

/// Every form of a single verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugations {
    pub dictionary: VerbForm,
    /// None for the copula, which has no conjugation class.
    pub class: Option<ConjugationClass>,
    pub masu: VerbForm,
    pub mashou: VerbForm,
    pub te: VerbForm,
    pub ta: VerbForm,
}
