use std::borrow::Cow;

use log::{debug, info, warn};
use romanz_protocol::{fold, ConjugationTemplate, Dataset, Lang, Verb};

use crate::dataset::validate;
use crate::error::{ConjugatorError, DatasetError};
use crate::predictor::TemplatePredictor;

/// Read-only store of one language's verbs and templates.
///
/// Verbs are kept sorted by infinitive, with a secondary index sorted by the
/// diacritic-stripped infinitive; templates are sorted by name. Every lookup
/// is a binary search.
pub struct Repository {
    lang: Lang,
    verbs: Vec<Verb>,
    by_no_accents: Vec<usize>,
    templates: Vec<ConjugationTemplate>,
    predictor: Option<Box<dyn TemplatePredictor>>,
}

impl Repository {
    pub fn new(dataset: Dataset) -> Result<Self, DatasetError> {
        validate(&dataset)?;
        let Dataset {
            lang,
            mut verbs,
            mut templates,
            ..
        } = dataset;

        verbs.sort_by(|a, b| a.infinitive.cmp(&b.infinitive));
        templates.sort_by(|a, b| a.name.cmp(&b.name));

        let mut by_no_accents: Vec<usize> = (0..verbs.len()).collect();
        by_no_accents.sort_by(|&a, &b| verbs[a].infinitive_no_accents.cmp(&verbs[b].infinitive_no_accents));

        info!("{} repository: {} verbs, {} templates", lang, verbs.len(), templates.len());
        Ok(Self {
            lang,
            verbs,
            by_no_accents,
            templates,
            predictor: None,
        })
    }

    pub fn with_predictor(mut self, predictor: impl TemplatePredictor + 'static) -> Self {
        self.predictor = Some(Box::new(predictor));
        self
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Verbs in infinitive order.
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn templates(&self) -> &[ConjugationTemplate] {
        &self.templates
    }

    /// Exact match, then diacritic-insensitive match, then the predictor.
    pub fn find_verb_by_infinitive(&self, text: &str) -> Result<Cow<'_, Verb>, ConjugatorError> {
        let key = text.trim().to_lowercase();
        if let Some(verb) = self.find_known_verb(&key) {
            return Ok(Cow::Borrowed(verb));
        }

        if let Some(prediction) = self.predictor.as_ref().and_then(|p| p.predict(&key)) {
            let score = prediction.score.clamp(0.0, 1.0);
            warn!(
                "'{}' is not in the {} dataset; predicted template '{}' (score {:.2})",
                key, self.lang, prediction.template, score
            );
            return Ok(Cow::Owned(Verb::predicted(key, prediction.template, score)));
        }

        Err(ConjugatorError::VerbNotFound(text.to_string()))
    }

    /// Dataset verbs only: exact match, then diacritic-insensitive match.
    pub fn find_known_verb(&self, text: &str) -> Option<&Verb> {
        let key = text.trim().to_lowercase();

        if let Ok(idx) = self.verbs.binary_search_by(|v| v.infinitive.as_str().cmp(&key)) {
            return Some(&self.verbs[idx]);
        }

        let folded = fold(&key);
        let pos = self
            .by_no_accents
            .binary_search_by(|&i| self.verbs[i].infinitive_no_accents.as_str().cmp(&folded))
            .ok()?;
        let verb = &self.verbs[self.by_no_accents[pos]];
        debug!("'{}' matched '{}' ignoring diacritics", key, verb.infinitive);
        Some(verb)
    }

    pub fn find_template(&self, name: &str) -> Result<&ConjugationTemplate, ConjugatorError> {
        self.templates
            .binary_search_by(|t| t.name.as_str().cmp(name))
            .map(|idx| &self.templates[idx])
            .map_err(|_| ConjugatorError::TemplateNotFound(name.to_string()))
    }

    /// Infinitives starting with `prefix`, ignoring case and diacritics, in
    /// infinitive order.
    pub fn verbs_starting_with(&self, prefix: &str, max_results: usize) -> Vec<&str> {
        let key = fold(prefix.trim());
        let start = self
            .by_no_accents
            .partition_point(|&i| self.verbs[i].infinitive_no_accents.as_str() < key.as_str());

        let mut hits: Vec<usize> = self.by_no_accents[start..]
            .iter()
            .copied()
            .take_while(|&i| self.verbs[i].infinitive_no_accents.starts_with(&key))
            .collect();
        hits.sort_unstable();
        hits.dedup_by(|a, b| self.verbs[*a].infinitive == self.verbs[*b].infinitive);

        hits.into_iter()
            .take(max_results)
            .map(|i| self.verbs[i].infinitive.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::Prediction;
    use romanz_protocol::{MoodTemplate, TenseTemplate};

    fn template(name: &str) -> ConjugationTemplate {
        ConjugationTemplate {
            name: name.to_string(),
            modify_stem: None,
            moods: vec![MoodTemplate {
                name: "indicatif".to_string(),
                tenses: vec![TenseTemplate::new("présent", vec![])],
            }],
        }
    }

    fn repository() -> Repository {
        Repository::new(Dataset {
            version: 1,
            lang: Lang::Fr,
            verbs: vec![
                Verb::new("manger", "man:ger"),
                Verb::new("céder", "c:éder"),
                Verb::new("aimer", "aim:er"),
                Verb::new("cesser", "aim:er"),
                Verb::new("cacher", "aim:er"),
            ],
            templates: vec![template("man:ger"), template("aim:er"), template("c:éder")],
        })
        .unwrap()
    }

    struct Always;

    impl TemplatePredictor for Always {
        fn predict(&self, _infinitive: &str) -> Option<Prediction> {
            Some(Prediction {
                template: "aim:er".to_string(),
                score: 0.7,
            })
        }
    }

    #[test]
    fn test_exact_and_folded_lookup() {
        let repo = repository();
        assert_eq!(repo.find_verb_by_infinitive("Manger").unwrap().infinitive, "manger");
        let verb = repo.find_verb_by_infinitive("ceder").unwrap();
        assert_eq!(verb.infinitive, "céder");
        assert!(matches!(verb, Cow::Borrowed(_)));
    }

    #[test]
    fn test_missing_verb() {
        let repo = repository();
        assert!(matches!(
            repo.find_verb_by_infinitive("chanter"),
            Err(ConjugatorError::VerbNotFound(v)) if v == "chanter"
        ));
    }

    #[test]
    fn test_predicted_verb() {
        let repo = repository().with_predictor(Always);
        let verb = repo.find_verb_by_infinitive("chanter").unwrap();
        assert!(verb.predicted);
        assert_eq!(verb.template, "aim:er");
        assert!((verb.pred_score - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_known_verb_skips_predictor() {
        let repo = repository().with_predictor(Always);
        assert_eq!(repo.find_known_verb("ceder").map(|v| v.infinitive.as_str()), Some("céder"));
        assert!(repo.find_known_verb("chanter").is_none());
    }

    #[test]
    fn test_find_template() {
        let repo = repository();
        assert_eq!(repo.find_template("c:éder").unwrap().name, "c:éder");
        assert!(matches!(repo.find_template("fin:ir"), Err(ConjugatorError::TemplateNotFound(_))));
    }

    #[test]
    fn test_prefix_search() {
        let repo = repository();
        assert_eq!(repo.verbs_starting_with("CE", 10), vec!["cesser", "céder"]);
        assert_eq!(repo.verbs_starting_with("cé", 10), vec!["cesser", "céder"]);
        assert_eq!(repo.verbs_starting_with("c", 2), vec!["cacher", "cesser"]);
        assert!(repo.verbs_starting_with("z", 10).is_empty());
    }
}
