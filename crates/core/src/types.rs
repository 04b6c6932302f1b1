//! Contains the types produced by kotoba's furigana and conjugation functionality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of aligning a reading with an orthography.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuriganaParseResult {
    /// Maximal runs of kanji in the orthography, in order.
    pub kanji_runs: Vec<String>,
    /// The part of the reading that belongs to each kanji run.
    pub furigana_runs: Vec<String>,
    /// The runs of everything else, kana, punctuation etc.
    pub non_kanji_runs: Vec<String>,
    /// Whether the orthography begins with a non-kanji run.
    pub starts_with_kana: bool,
}

impl FuriganaParseResult {
    /// Rebuilds the orthography from the runs.
    pub fn orthography(&self) -> String {
        self.interleave(&self.kanji_runs)
    }

    /// Rebuilds the reading from the runs.
    pub fn reading(&self) -> String {
        self.interleave(&self.furigana_runs)
    }

    fn interleave(&self, kanji_side: &[String]) -> String {
        let mut text = String::new();
        let mut non_kanji = self.non_kanji_runs.iter();
        if self.starts_with_kana {
            if let Some(run) = non_kanji.next() {
                text.push_str(run);
            }
        }
        for run in kanji_side {
            text.push_str(run);
            if let Some(run) = non_kanji.next() {
                text.push_str(run);
            }
        }
        text
    }
}

/// A renderer-agnostic ruby node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderNode {
    /// Text displayed as is.
    Plain(String),
    /// Text displayed with a reading above it.
    Annotated { base: String, annotation: String },
}

impl RenderNode {
    pub fn base(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Annotated { base, .. } => base,
        }
    }

    pub fn annotation(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Annotated { annotation, .. } => Some(annotation),
        }
    }
}

/// The conjugation class of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjugationClass {
    /// する, 来る and their compounds.
    Irregular,
    /// Verbs that drop the final る, 食べる etc.
    Ichidan,
    /// Verbs that change the final mora, 書く etc.
    Godan,
}

impl fmt::Display for ConjugationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Irregular => "irregular",
            Self::Ichidan => "ichidan",
            Self::Godan => "godan",
        };
        f.write_str(name)
    }
}
