//! Dataset loading: JSON documents and validated rkyv archives.
//!
//! JSON layout:
//!
//! ```json
//! {
//!   "version": 1,
//!   "lang": "fr",
//!   "verbs": [{ "infinitive": "aimer", "template": "aim:er", "translation": "to love" }],
//!   "templates": [{
//!     "name": "aim:er",
//!     "modify_stem": null,
//!     "moods": { "indicatif": { "présent": { "1s": "e", "2s": ["es"] } } }
//!   }]
//! }
//! ```
//!
//! Person keys are the codes of [`Person`]; an ending is either a string or a
//! list whose first entry is the default spelling.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Deserialize;

use romanz_morph::split_template_name;
use romanz_protocol::{
    ConjugationTemplate, Dataset, Lang, MoodTemplate, Person, PersonEnding, StemModifier,
    TenseTemplate, Verb,
};

use crate::error::DatasetError;

#[derive(Deserialize)]
struct RawDataset {
    #[serde(default = "default_version")]
    version: u32,
    lang: Lang,
    #[serde(default)]
    verbs: Vec<RawVerb>,
    #[serde(default)]
    templates: Vec<RawTemplate>,
}

fn default_version() -> u32 {
    1
}

#[derive(Deserialize)]
struct RawVerb {
    infinitive: String,
    template: String,
    #[serde(default)]
    translation: Option<String>,
}

#[derive(Deserialize)]
struct RawTemplate {
    name: String,
    #[serde(default)]
    modify_stem: Option<StemModifier>,
    moods: IndexMap<String, IndexMap<String, IndexMap<String, RawEndings>>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEndings {
    One(String),
    Many(Vec<String>),
}

impl RawEndings {
    fn into_vec(self) -> Vec<String> {
        match self {
            RawEndings::One(ending) => vec![ending],
            RawEndings::Many(endings) => endings,
        }
    }
}

/// Parses a JSON dataset. Structural checks run in [`validate`].
pub fn load_json(text: &str) -> Result<Dataset, DatasetError> {
    let raw: RawDataset = serde_json::from_str(text)?;

    let verbs = raw
        .verbs
        .into_iter()
        .map(|v| {
            let verb = Verb::new(v.infinitive.trim().to_lowercase(), v.template);
            match v.translation {
                Some(translation) => verb.with_translation(translation),
                None => verb,
            }
        })
        .collect();

    let templates = raw
        .templates
        .into_iter()
        .map(convert_template)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset {
        version: raw.version,
        lang: raw.lang,
        verbs,
        templates,
    })
}

fn convert_template(raw: RawTemplate) -> Result<ConjugationTemplate, DatasetError> {
    let mut moods = Vec::with_capacity(raw.moods.len());
    for (mood, tenses) in raw.moods {
        let mut tense_templates = Vec::with_capacity(tenses.len());
        for (tense, persons) in tenses {
            let mut person_endings = Vec::with_capacity(persons.len());
            for (code, endings) in persons {
                let person: Person = code.parse().map_err(|source| DatasetError::Code {
                    template: raw.name.clone(),
                    source,
                })?;
                person_endings.push(PersonEnding::new(person, endings.into_vec()));
            }
            tense_templates.push(TenseTemplate::new(tense, person_endings));
        }
        moods.push(MoodTemplate {
            name: mood,
            tenses: tense_templates,
        });
    }
    Ok(ConjugationTemplate {
        name: raw.name,
        modify_stem: raw.modify_stem,
        moods,
    })
}

/// Rejects datasets the engine cannot conjugate from: malformed or duplicate
/// template names, empty ending lists and verbs pointing at unknown templates.
pub fn validate(dataset: &Dataset) -> Result<(), DatasetError> {
    let mut names = HashSet::with_capacity(dataset.templates.len());
    for template in &dataset.templates {
        split_template_name(&template.name)?;
        if !names.insert(template.name.as_str()) {
            return Err(DatasetError::DuplicateTemplate(template.name.clone()));
        }
        for mood in &template.moods {
            for tense in &mood.tenses {
                if let Some(empty) = tense.person_endings.iter().find(|pe| pe.endings.is_empty()) {
                    return Err(DatasetError::EmptyEndings {
                        template: template.name.clone(),
                        mood: mood.name.clone(),
                        tense: tense.name.clone(),
                        person: empty.person.to_string(),
                    });
                }
            }
        }
    }

    for verb in &dataset.verbs {
        if !names.contains(verb.template.as_str()) {
            return Err(DatasetError::UnknownTemplate {
                verb: verb.infinitive.clone(),
                template: verb.template.clone(),
            });
        }
    }
    Ok(())
}

/// Serializes a dataset into an rkyv archive.
pub fn to_archive(dataset: &Dataset) -> Result<rkyv::AlignedVec, DatasetError> {
    rkyv::to_bytes::<_, 4096>(dataset).map_err(|e| DatasetError::Archive(e.to_string()))
}

/// Validates an rkyv archive and deserializes its dataset.
pub fn load_archive(bytes: &[u8]) -> Result<Dataset, DatasetError> {
    // Archives read from disk carry no alignment guarantee.
    let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);
    rkyv::from_bytes::<Dataset>(&aligned).map_err(|e| DatasetError::Archive(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "lang": "fr",
        "verbs": [{ "infinitive": "Aimer", "template": "aim:er", "translation": "to love" }],
        "templates": [{
            "name": "aim:er",
            "moods": {
                "indicatif": { "présent": { "3p": "ent", "1s": ["e", "è"] } },
                "participe": { "participe-passé": { "ms": "é", "fp": "ées" } }
            }
        }]
    }"#;

    #[test]
    fn test_load_json() {
        let dataset = load_json(SMALL).unwrap();
        assert_eq!(dataset.version, 1);
        assert_eq!(dataset.lang, Lang::Fr);
        assert_eq!(dataset.verbs[0].infinitive, "aimer");
        assert_eq!(dataset.verbs[0].translation.as_deref(), Some("to love"));

        let template = &dataset.templates[0];
        assert_eq!(template.moods[0].name, "indicatif");
        let present = template.tense("indicatif", "présent").unwrap();
        assert_eq!(present.person_endings[0].person, Person::FirstSingular);
        assert_eq!(present.person_endings[0].endings, vec!["e", "è"]);
        validate(&dataset).unwrap();
    }

    #[test]
    fn test_unknown_person_code() {
        let text = SMALL.replace("\"3p\"", "\"4p\"");
        assert!(matches!(load_json(&text), Err(DatasetError::Code { .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(load_json("{ \"lang\": "), Err(DatasetError::Json(_))));
        assert!(matches!(load_json(r#"{ "lang": "xx" }"#), Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_validation_failures() {
        let mut dataset = load_json(SMALL).unwrap();
        dataset.templates.push(dataset.templates[0].clone());
        assert!(matches!(validate(&dataset), Err(DatasetError::DuplicateTemplate(_))));

        let mut dataset = load_json(SMALL).unwrap();
        dataset.verbs.push(Verb::new("finir", "fin:ir"));
        assert!(matches!(validate(&dataset), Err(DatasetError::UnknownTemplate { .. })));

        let mut dataset = load_json(SMALL).unwrap();
        dataset.templates[0].moods[0].tenses[0].person_endings[0].endings.clear();
        assert!(matches!(validate(&dataset), Err(DatasetError::EmptyEndings { .. })));

        let mut dataset = load_json(SMALL).unwrap();
        dataset.templates[0].name = "aimer".to_string();
        assert!(matches!(validate(&dataset), Err(DatasetError::TemplateName(_))));
    }

    #[test]
    fn test_archive_round_trip() {
        let dataset = load_json(SMALL).unwrap();
        let bytes = to_archive(&dataset).unwrap();
        let loaded = load_archive(&bytes).unwrap();
        assert_eq!(loaded.verbs, dataset.verbs);
        assert_eq!(loaded.templates, dataset.templates);

        assert!(matches!(load_archive(&[1, 2, 3]), Err(DatasetError::Archive(_))));
    }
}
