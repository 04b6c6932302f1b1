//! Assigns dictionary form verbs to a conjugation class.

use super::{tables, VerbForm};
use crate::error::{KotobaError, KotobaResult};
use kotoba_core::{is_kanji, ConjugationClass};

/// Classifies a dictionary form verb.
///
/// The exception tables are consulted before the general rules, so a listed verb
/// always gets its listed class. Otherwise する and 来る compounds are irregular,
/// verbs ending in -iru or -eru are ichidan and everything else is godan.
pub fn classify(verb: &VerbForm) -> KotobaResult<ConjugationClass> {
    let class = classify_inner(verb)?;
    tracing::debug!("classified {} as {class}", verb.spelling());
    Ok(class)
}

/// Parses and classifies a verb in the two-line convention.
pub fn dictionary_verb_class(dictionary_form: &str) -> KotobaResult<ConjugationClass> {
    let verb = VerbForm::parse(dictionary_form)?;
    classify(&verb)
}

fn classify_inner(verb: &VerbForm) -> KotobaResult<ConjugationClass> {
    let reading = verb.pronunciation();
    let mut chars = reading.chars().rev();
    let ending = chars
        .next()
        .filter(|c| tables::DICTIONARY_ENDINGS.contains(c))
        .ok_or_else(|| KotobaError::UnclassifiableVerb(verb.to_string()))?;

    if tables::GODAN_EXCEPTIONS.iter().any(|l| l.matches(verb)) {
        return Ok(ConjugationClass::Godan);
    }
    if tables::ICHIDAN_EXCEPTIONS.iter().any(|l| l.matches(verb)) {
        return Ok(ConjugationClass::Ichidan);
    }
    if tables::IRREGULAR.iter().any(|p| p.matches(verb)) {
        return Ok(ConjugationClass::Irregular);
    }
    if ending == 'る' {
        match chars.next() {
            Some(c) if tables::ICHIDAN_STEM_ENDINGS.contains(&c) => {
                return Ok(ConjugationClass::Ichidan);
            }
            Some(c) if is_kanji(c) => {
                tracing::warn!("the stem vowel of {reading} is hidden, assuming godan");
            }
            _ => {}
        }
    }
    Ok(ConjugationClass::Godan)
}
