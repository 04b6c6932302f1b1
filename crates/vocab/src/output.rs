//! Types and functionality for producing the output files.

use crate::input::Records;
use eyre::WrapErr;
use kotoba::{Conjugations, FuriganaParseResult, JapaneseText, RenderNode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuriganaEntry {
    pub id: String,
    pub japanese: JapaneseText,
    pub furigana: FuriganaParseResult,
    pub nodes: Vec<RenderNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConjugationEntry {
    pub id: String,
    #[serde(flatten)]
    pub conjugations: Conjugations,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub romaji: Option<Romaji>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Romaji {
    pub masu: String,
    pub mashou: String,
    pub te: String,
    pub ta: String,
}

impl Romaji {
    fn of(conjugations: &Conjugations) -> Option<Self> {
        Some(Self {
            masu: conjugations.masu.romaji()?,
            mashou: conjugations.mashou.romaji()?,
            te: conjugations.te.romaji()?,
            ta: conjugations.ta.romaji()?,
        })
    }
}

pub fn furigana_entries(
    records: &Records,
    skip_invalid: bool,
) -> eyre::Result<Vec<FuriganaEntry>> {
    let entries = records.iter().map(|(id, record)| {
        let entry = JapaneseText::parse(&record.japanese)
            .map_err(eyre::Report::from)
            .and_then(|japanese| {
                let furigana = kotoba::align_text(&japanese)?;
                let nodes = kotoba::build_text(&furigana);
                Ok(FuriganaEntry {
                    id: id.clone(),
                    japanese,
                    furigana,
                    nodes,
                })
            });
        (id, entry)
    });
    collect(entries, skip_invalid)
}

pub fn conjugation_entries(
    records: &Records,
    romaji: bool,
    skip_invalid: bool,
) -> eyre::Result<Vec<ConjugationEntry>> {
    let entries = records
        .iter()
        .filter(|(_, record)| record.is_verb())
        .map(|(id, record)| {
            let entry = JapaneseText::parse(&record.japanese)
                .map_err(eyre::Report::from)
                .and_then(|verb| {
                    let conjugations = kotoba::conjugations(&verb)?;
                    let romaji = if romaji {
                        let romaji = Romaji::of(&conjugations);
                        if romaji.is_none() {
                            tracing::warn!("No romaji for '{id}', its reading contains kanji");
                        }
                        romaji
                    } else {
                        None
                    };
                    Ok(ConjugationEntry {
                        id: id.clone(),
                        conjugations,
                        romaji,
                    })
                });
            (id, entry)
        });
    collect(entries, skip_invalid)
}

fn collect<'a, T>(
    entries: impl Iterator<Item = (&'a String, eyre::Result<T>)>,
    skip_invalid: bool,
) -> eyre::Result<Vec<T>> {
    let mut collected = vec![];
    for (id, entry) in entries {
        match entry {
            Ok(entry) => collected.push(entry),
            Err(err) if skip_invalid => {
                tracing::warn!("Skipping record '{id}': {err}");
            }
            Err(err) => {
                return Err(err).wrap_err_with(|| format!("Failed to process record '{id}'"));
            }
        }
    }
    tracing::info!("processed {} records", collected.len());
    Ok(collected)
}
