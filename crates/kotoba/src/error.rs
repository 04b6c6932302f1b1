//! kotoba error type.

use kotoba_core::TextError;

pub type KotobaResult<T> = Result<T, KotobaError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KotobaError {
    #[error("the reading '{reading}' does not match '{orthography}': {reason}")]
    AlignmentMismatch {
        reading: String,
        orthography: String,
        reason: &'static str,
    },
    #[error("'{0}' does not end in a verb ending")]
    UnclassifiableVerb(String),
    #[error("cannot conjugate '{verb}': {reason}")]
    UnsupportedVerbForm { verb: String, reason: &'static str },
    #[error(transparent)]
    Text(#[from] TextError),
}
