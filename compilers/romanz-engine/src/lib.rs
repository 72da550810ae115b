//! Conjugation engine: dataset loading, verb/template lookup and the
//! simple and compound tense generators, parameterized by a language
//! [`Inflector`](romanz_inflect::Inflector).

pub mod conjugator;
pub mod dataset;
pub mod error;
pub mod predictor;
pub mod repository;

pub use conjugator::{ConjugateOptions, Conjugation, Conjugator, Inflection, VerbInfo};
pub use error::{ConjugatorError, DatasetError};
pub use predictor::{Prediction, SuffixPredictor, TemplatePredictor};
pub use repository::Repository;

pub use romanz_protocol::{AlternatesMode, DialectOptions, Gender, Lang, Mood, Tense};

/// Loads a JSON dataset and builds a conjugator for its language.
pub fn conjugator_from_json(text: &str) -> Result<Conjugator, ConjugatorError> {
    let dataset = dataset::load_json(text)?;
    let lang = dataset.lang;
    Conjugator::new(lang, Repository::new(dataset)?)
}
