use romanz_inflect::InflectError;
use romanz_morph::MorphError;
use romanz_protocol::{Lang, ParseError};

/// Faults in dataset records, raised while loading.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("template '{template}': {source}")]
    Code {
        template: String,
        #[source]
        source: ParseError,
    },
    #[error("template '{template}' has an empty ending list for {mood}/{tense}/{person}")]
    EmptyEndings {
        template: String,
        mood: String,
        tense: String,
        person: String,
    },
    #[error("template '{0}' is defined twice")]
    DuplicateTemplate(String),
    #[error(transparent)]
    TemplateName(#[from] MorphError),
    #[error("verb '{verb}' references unknown template '{template}'")]
    UnknownTemplate { verb: String, template: String },
    #[error("dataset is for language '{found}', expected '{expected}'")]
    LangMismatch { expected: Lang, found: Lang },
    #[error("archive rejected: {0}")]
    Archive(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConjugatorError {
    #[error("verb '{0}' not found")]
    VerbNotFound(String),
    #[error("template '{0}' not found")]
    TemplateNotFound(String),
    #[error("mood '{mood}' is not defined by template '{template}'")]
    InvalidMood { mood: String, template: String },
    #[error("tense '{tense}' is not defined for mood '{mood}' of template '{template}'")]
    InvalidTense {
        mood: String,
        tense: String,
        template: String,
    },
    #[error(transparent)]
    StemMismatch(#[from] MorphError),
    #[error("verb '{0}' cannot be conjugated reflexively")]
    NotReflexive(String),
    #[error(transparent)]
    NotImplemented(#[from] InflectError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
