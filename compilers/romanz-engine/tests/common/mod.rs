#![allow(dead_code)]

use romanz_engine::{dataset, ConjugateOptions, Conjugator, Inflection, Lang, Repository};
use romanz_protocol::Dataset;

pub const LANGS: [Lang; 6] = Lang::ALL;

pub fn fixture(lang: Lang) -> &'static str {
    match lang {
        Lang::Fr => include_str!("../data/fr.json"),
        Lang::Es => include_str!("../data/es.json"),
        Lang::It => include_str!("../data/it.json"),
        Lang::Pt => include_str!("../data/pt.json"),
        Lang::Ca => include_str!("../data/ca.json"),
        Lang::Ro => include_str!("../data/ro.json"),
    }
}

pub fn load(lang: Lang) -> Dataset {
    let _ = env_logger::builder().is_test(true).try_init();
    dataset::load_json(fixture(lang)).unwrap()
}

pub fn conjugator(lang: Lang) -> Conjugator {
    Conjugator::new(lang, Repository::new(load(lang)).unwrap()).unwrap()
}

/// Default spellings of one tense.
pub fn forms(conjugator: &Conjugator, verb: &str, mood: &str, tense: &str, options: &ConjugateOptions) -> Vec<String> {
    conjugator
        .conjugate_mood_tense(verb, mood, tense, options)
        .unwrap()
        .iter()
        .map(|inflection| inflection.forms()[0].clone())
        .collect()
}

pub fn single(inflections: &[Inflection]) -> Vec<&str> {
    inflections.iter().filter_map(Inflection::as_single).collect()
}
