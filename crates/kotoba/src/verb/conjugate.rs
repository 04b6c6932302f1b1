//! Derives conjugated forms from dictionary form verbs.

use super::{classify, tables, Conjugations, Form, VerbForm};
use crate::error::{KotobaError, KotobaResult};
use kotoba_core::ConjugationClass;

/// Polite non-past, 書く → 書きます.
pub fn masu_form(verb: &VerbForm) -> KotobaResult<VerbForm> {
    conjugate(verb, Form::Masu)
}

/// Polite volitional, 書く → 書きましょう.
pub fn mashou_form(verb: &VerbForm) -> KotobaResult<VerbForm> {
    conjugate(verb, Form::Mashou)
}

/// Connective, 書く → 書いて.
pub fn te_form(verb: &VerbForm) -> KotobaResult<VerbForm> {
    conjugate(verb, Form::Te)
}

/// Plain past, 書く → 書いた.
pub fn ta_form(verb: &VerbForm) -> KotobaResult<VerbForm> {
    conjugate(verb, Form::Ta)
}

pub fn conjugate(verb: &VerbForm, form: Form) -> KotobaResult<VerbForm> {
    let class = class_of(verb)?;
    conjugate_with(verb, class, form)
}

/// Derives every form of the verb.
pub fn conjugations(verb: &VerbForm) -> KotobaResult<Conjugations> {
    let class = class_of(verb)?;
    Ok(Conjugations {
        dictionary: verb.clone(),
        class,
        masu: conjugate_with(verb, class, Form::Masu)?,
        mashou: conjugate_with(verb, class, Form::Mashou)?,
        te: conjugate_with(verb, class, Form::Te)?,
        ta: conjugate_with(verb, class, Form::Ta)?,
    })
}

// the copula has no class
fn class_of(verb: &VerbForm) -> KotobaResult<Option<ConjugationClass>> {
    if verb.kanji().is_none() && verb.pronunciation() == "だ" {
        Ok(None)
    } else {
        classify(verb).map(Some)
    }
}

fn conjugate_with(
    verb: &VerbForm,
    class: Option<ConjugationClass>,
    form: Form,
) -> KotobaResult<VerbForm> {
    let Some(class) = class else {
        let (_, copula) = tables::COPULA
            .iter()
            .find(|(f, _)| *f == form)
            .ok_or_else(|| unsupported(verb, "the copula has no such form"))?;
        return Ok(VerbForm::new(*copula, None)?);
    };

    let reading = conjugate_line(verb, verb.pronunciation(), class, form)?;
    let spelling = verb
        .kanji()
        .map(|line| conjugate_line(verb, line, class, form))
        .transpose()?;
    tracing::trace!("{form:?} of {} is {reading}", verb.spelling());
    Ok(VerbForm::new(reading, spelling)?)
}

fn conjugate_line(
    verb: &VerbForm,
    line: &str,
    class: ConjugationClass,
    form: Form,
) -> KotobaResult<String> {
    match class {
        ConjugationClass::Irregular => {
            let (ending, stem) = tables::IRREGULAR_STEMS
                .iter()
                .find(|(ending, _)| line.ends_with(ending))
                .ok_or_else(|| unsupported(verb, "irregular verbs end in する or くる"))?;
            let prefix = &line[..line.len() - ending.len()];
            Ok([prefix, stem, form.suffix()].concat())
        }
        ConjugationClass::Ichidan => {
            let stem = line
                .strip_suffix('る')
                .ok_or_else(|| unsupported(verb, "ichidan verbs end in る"))?;
            Ok([stem, form.suffix()].concat())
        }
        ConjugationClass::Godan => conjugate_godan(verb, line, form),
    }
}

fn conjugate_godan(verb: &VerbForm, line: &str, form: Form) -> KotobaResult<String> {
    // the reading decides the ending, the spelling has to agree with it
    let ending = verb
        .pronunciation()
        .chars()
        .last()
        .ok_or_else(|| unsupported(verb, "the verb is empty"))?;
    let stem = line
        .strip_suffix(ending)
        .ok_or_else(|| unsupported(verb, "the spelling and the reading end differently"))?;

    let mut conjugated = stem.to_string();
    match form {
        Form::Masu | Form::Mashou => {
            let i_row = if tables::HONORIFIC.iter().any(|l| l.matches(verb)) {
                'い'
            } else {
                tables::I_ROW
                    .iter()
                    .find(|(u, _)| *u == ending)
                    .map(|(_, i)| *i)
                    .ok_or_else(|| unsupported(verb, "no stem for the ending"))?
            };
            conjugated.push(i_row);
            conjugated.push_str(form.suffix());
        }
        Form::Te | Form::Ta => {
            let euphonic = if ending == 'く' && tables::IKU.iter().any(|l| l.matches_tail(verb)) {
                ("って", "った")
            } else {
                tables::EUPHONIC
                    .iter()
                    .find(|e| e.ending == ending)
                    .map(|e| (e.te, e.ta))
                    .ok_or_else(|| unsupported(verb, "no sound change for the ending"))?
            };
            conjugated.push_str(if form == Form::Te {
                euphonic.0
            } else {
                euphonic.1
            });
        }
    }
    Ok(conjugated)
}

fn unsupported(verb: &VerbForm, reason: &'static str) -> KotobaError {
    KotobaError::UnsupportedVerbForm {
        verb: verb.to_string(),
        reason,
    }
}
