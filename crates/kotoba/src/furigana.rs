//! Aligns a kana reading with a mixed kanji and kana orthography.
//!
//! The orthography is split into maximal kanji and non-kanji runs. Non-kanji runs
//! must appear verbatim in the reading, and each kanji run takes the reading up to
//! the first occurrence of the non-kanji run that follows it.
//!
//! The search is greedy and never backtracks: if the following kana also occurs
//! inside the kanji's actual reading, the split lands too early. For example
//! `殿の城` read `とののしろ` aligns 殿 with `と` and 城 with `のしろ`.

use crate::error::{KotobaError, KotobaResult};
use kotoba_core::{is_kanji, FuriganaParseResult, JapaneseText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Kanji,
    NonKanji,
}

#[derive(Debug)]
struct Run<'a> {
    kind: RunKind,
    text: &'a str,
}

/// Aligns the reading with the orthography.
pub fn align(reading: &str, orthography: &str) -> KotobaResult<FuriganaParseResult> {
    tracing::trace!("aligning '{reading}' with '{orthography}'");

    let mismatch = |reason: &'static str| KotobaError::AlignmentMismatch {
        reading: reading.to_string(),
        orthography: orthography.to_string(),
        reason,
    };

    if orthography.is_empty() || reading.is_empty() {
        if orthography.is_empty() && reading.is_empty() {
            return Ok(FuriganaParseResult::default());
        }
        return Err(mismatch("only one of them is empty"));
    }

    let runs = runs(orthography);
    let starts_with_kana = runs
        .first()
        .map(|r| r.kind == RunKind::NonKanji)
        .unwrap_or_default();
    let mut result = FuriganaParseResult {
        starts_with_kana,
        ..Default::default()
    };

    let mut cursor = 0;
    for (idx, run) in runs.iter().enumerate() {
        let remaining = &reading[cursor..];
        match run.kind {
            RunKind::NonKanji => {
                if !remaining.starts_with(run.text) {
                    return Err(mismatch("the phrases do not match"));
                }
                cursor += run.text.len();
                result.non_kanji_runs.push(run.text.to_string());
            }
            RunKind::Kanji => {
                // runs are maximal so the next one, if any, is always kana
                let furigana_len = match runs.get(idx + 1) {
                    Some(delimiter) => find_delimiter(remaining, delimiter.text)
                        .ok_or_else(|| mismatch("the reading is missing kana"))?,
                    None => remaining.len(),
                };
                if furigana_len == 0 {
                    return Err(mismatch("no reading left for kanji"));
                }
                let furigana = &remaining[..furigana_len];
                tracing::trace!("{} reads {furigana}", run.text);
                cursor += furigana_len;
                result.kanji_runs.push(run.text.to_string());
                result.furigana_runs.push(furigana.to_string());
            }
        }
    }

    if cursor != reading.len() {
        return Err(mismatch("the reading is longer than the orthography"));
    }
    Ok(result)
}

/// Aligns the reading of the text with its orthography.
/// Text without a separate orthography has no reading to distribute and comes out
/// as a single plain run, even when it contains kanji.
pub fn align_text(text: &JapaneseText) -> KotobaResult<FuriganaParseResult> {
    match text.kanji() {
        Some(kanji) => align(text.pronunciation(), kanji),
        None => Ok(FuriganaParseResult {
            non_kanji_runs: vec![text.pronunciation().to_string()],
            starts_with_kana: true,
            ..Default::default()
        }),
    }
}

fn runs(orthography: &str) -> Vec<Run<'_>> {
    let mut runs = vec![];
    let mut start = 0;
    let mut current = None;
    for (idx, c) in orthography.char_indices() {
        let kind = if is_kanji(c) {
            RunKind::Kanji
        } else {
            RunKind::NonKanji
        };
        match current {
            Some(current_kind) if current_kind == kind => {}
            Some(current_kind) => {
                runs.push(Run {
                    kind: current_kind,
                    text: &orthography[start..idx],
                });
                start = idx;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
    }
    if let Some(kind) = current {
        runs.push(Run {
            kind,
            text: &orthography[start..],
        });
    }
    runs
}

// returns the length of the reading before the delimiter
// every kanji needs at least one character of reading so the first one is skipped
fn find_delimiter(remaining: &str, delimiter: &str) -> Option<usize> {
    let first = remaining.chars().next()?.len_utf8();
    remaining[first..]
        .find(delimiter)
        .map(|offset| offset + first)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn strings(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn okurigana_goes_to_the_kana_run() {
        let res = align("きたない", "汚い").unwrap();
        assert_eq!(res.kanji_runs, strings(&["汚"]));
        assert_eq!(res.furigana_runs, strings(&["きたな"]));
        assert_eq!(res.non_kanji_runs, strings(&["い"]));
        assert!(!res.starts_with_kana);
    }

    #[test]
    fn aligns_proverb() {
        let res = align("はやおきはさんもんのとく", "早起きは三文の得").unwrap();
        assert_eq!(res.kanji_runs, strings(&["早起", "三文", "得"]));
        assert_eq!(res.furigana_runs, strings(&["はやお", "さんもん", "とく"]));
        assert_eq!(res.non_kanji_runs, strings(&["きは", "の"]));
        assert!(!res.starts_with_kana);
    }

    #[test]
    fn single_kanji_takes_whole_reading() {
        let res = align("こおり", "氷").unwrap();
        assert_eq!(res.kanji_runs, strings(&["氷"]));
        assert_eq!(res.furigana_runs, strings(&["こおり"]));
        assert!(res.non_kanji_runs.is_empty());
        assert!(!res.starts_with_kana);
    }

    #[test]
    fn leading_kana() {
        let res = align("おちゃ", "お茶").unwrap();
        assert_eq!(res.kanji_runs, strings(&["茶"]));
        assert_eq!(res.furigana_runs, strings(&["ちゃ"]));
        assert_eq!(res.non_kanji_runs, strings(&["お"]));
        assert!(res.starts_with_kana);
    }

    #[test]
    fn pure_kana() {
        let res = align("ありがとう", "ありがとう").unwrap();
        assert!(res.kanji_runs.is_empty());
        assert!(res.furigana_runs.is_empty());
        assert_eq!(res.non_kanji_runs, strings(&["ありがとう"]));
        assert!(res.starts_with_kana);
    }

    #[test]
    fn iteration_mark_joins_the_kanji_run() {
        let res = align("ときどき", "時々").unwrap();
        assert_eq!(res.kanji_runs, strings(&["時々"]));
        assert_eq!(res.furigana_runs, strings(&["ときどき"]));
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(align("", "").unwrap(), FuriganaParseResult::default());
        assert!(matches!(
            align("", "氷"),
            Err(KotobaError::AlignmentMismatch { .. })
        ));
        assert!(matches!(
            align("こおり", ""),
            Err(KotobaError::AlignmentMismatch { .. })
        ));
    }

    #[test]
    fn missing_okurigana_is_a_mismatch() {
        let err = align("きたな", "汚い").unwrap_err();
        assert!(matches!(err, KotobaError::AlignmentMismatch { .. }));
    }

    #[test]
    fn differing_kana_is_a_mismatch() {
        assert!(align("きたなう", "汚い").is_err());
        assert!(align("おちゃ", "ご茶").is_err());
        assert!(align("ありがと", "ありがとう").is_err());
    }

    #[test]
    fn extra_reading_is_a_mismatch() {
        let err = align("ありがとうね", "ありがとう").unwrap_err();
        assert!(matches!(err, KotobaError::AlignmentMismatch { .. }));
    }

    #[test]
    fn kanji_without_reading_is_a_mismatch() {
        assert!(align("い", "汚い").is_err());
    }

    #[test]
    fn leftmost_delimiter_is_used() {
        // known limitation, 殿 should read との
        let res = align("とののしろ", "殿の城").unwrap();
        assert_eq!(res.furigana_runs, strings(&["と", "のしろ"]));
        assert_eq!(res.orthography(), "殿の城");
        assert_eq!(res.reading(), "とののしろ");
    }

    #[test]
    fn aligns_text() {
        let text = JapaneseText::parse("きたない\n汚い").unwrap();
        let res = align_text(&text).unwrap();
        assert_eq!(res.furigana_runs, strings(&["きたな"]));

        let text = JapaneseText::parse("ありがとう").unwrap();
        let res = align_text(&text).unwrap();
        assert_eq!(res, align("ありがとう", "ありがとう").unwrap());
    }

    #[test]
    fn single_line_kanji_gets_no_furigana() {
        let text = JapaneseText::parse("読む").unwrap();
        let res = align_text(&text).unwrap();
        assert!(res.kanji_runs.is_empty());
        assert!(res.furigana_runs.is_empty());
        assert_eq!(res.non_kanji_runs, strings(&["読む"]));
        assert_eq!(res.orthography(), "読む");
        assert_eq!(
            crate::ruby::build_text(&res),
            vec![kotoba_core::RenderNode::Plain("読む".to_string())]
        );
    }

    #[test]
    fn mismatch_message_names_inputs() {
        let err = align("きたな", "汚い").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("きたな"));
        assert!(message.contains("汚い"));
    }

    // kana runs and furigana are drawn from disjoint characters so the greedy search is exact
    fn pieces() -> impl Strategy<Value = (Option<String>, Vec<(String, String, String)>)> {
        (
            proptest::option::of("[あいうえお]{1,3}"),
            proptest::collection::vec(
                ("[日本語山川学生]{1,3}", "[かきくけこ]{1,4}", "[あいうえお]{0,3}"),
                1..5,
            ),
        )
    }

    fn assemble(
        leading: &Option<String>,
        runs: &[(String, String, String)],
    ) -> (String, String, FuriganaParseResult) {
        let mut reading = String::new();
        let mut orthography = String::new();
        let mut expected = FuriganaParseResult {
            starts_with_kana: leading.is_some(),
            ..Default::default()
        };
        if let Some(leading) = leading {
            reading.push_str(leading);
            orthography.push_str(leading);
            expected.non_kanji_runs.push(leading.clone());
        }
        for (idx, (kanji, furigana, kana)) in runs.iter().enumerate() {
            // consecutive kanji runs would merge, so only the last one may go without kana
            let kana = if kana.is_empty() && idx + 1 < runs.len() {
                "あ"
            } else {
                kana.as_str()
            };
            orthography.push_str(kanji);
            orthography.push_str(kana);
            reading.push_str(furigana);
            reading.push_str(kana);
            expected.kanji_runs.push(kanji.clone());
            expected.furigana_runs.push(furigana.clone());
            if !kana.is_empty() {
                expected.non_kanji_runs.push(kana.to_string());
            }
        }
        (reading, orthography, expected)
    }

    proptest! {
        #[test]
        fn aligns_generated_pairs((leading, runs) in pieces()) {
            let (reading, orthography, expected) = assemble(&leading, &runs);
            let res = align(&reading, &orthography).unwrap();
            prop_assert_eq!(&res, &expected);
            prop_assert_eq!(res.orthography(), orthography);
            prop_assert_eq!(res.reading(), reading);
        }

        #[test]
        fn successful_alignments_round_trip(
            reading in "[あいかき]{1,8}",
            orthography in "[あいか日本]{1,6}",
        ) {
            if let Ok(res) = align(&reading, &orthography) {
                prop_assert_eq!(res.kanji_runs.len(), res.furigana_runs.len());
                prop_assert_eq!(res.orthography(), orthography.clone());
                prop_assert_eq!(res.reading(), reading.clone());
                prop_assert_eq!(align(&reading, &orthography).unwrap(), res);
            }
        }
    }
}
