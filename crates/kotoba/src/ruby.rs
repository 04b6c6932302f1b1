//! Turns an alignment into ruby nodes for a renderer.

use kotoba_core::{FuriganaParseResult, RenderNode};

/// Interleaves the runs back into their original order.
/// The runs are expected to come from [`crate::align`].
pub fn build(
    kanji_runs: &[String],
    furigana_runs: &[String],
    non_kanji_runs: &[String],
    starts_with_kana: bool,
) -> Vec<RenderNode> {
    let mut nodes = Vec::with_capacity(kanji_runs.len() + non_kanji_runs.len());
    let mut plain = non_kanji_runs.iter().cloned().map(RenderNode::Plain);
    if starts_with_kana {
        nodes.extend(plain.next());
    }
    for (base, annotation) in kanji_runs.iter().zip(furigana_runs) {
        nodes.push(RenderNode::Annotated {
            base: base.clone(),
            annotation: annotation.clone(),
        });
        nodes.extend(plain.next());
    }
    nodes
}

pub fn build_text(furigana: &FuriganaParseResult) -> Vec<RenderNode> {
    build(
        &furigana.kanji_runs,
        &furigana.furigana_runs,
        &furigana.non_kanji_runs,
        furigana.starts_with_kana,
    )
}
