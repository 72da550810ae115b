use rkyv::{Archive, Deserialize, Serialize};

use crate::morphology::{Lang, Person};
use crate::text::strip_accents;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One dictionary entry.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Verb {
    pub infinitive: String,
    /// Diacritic-stripped infinitive, the secondary sort key.
    pub infinitive_no_accents: String,
    /// Template name of the form `"<pattern>:<ending>"`.
    pub template: String,
    pub translation: Option<String>,
    pub predicted: bool,
    pub pred_score: f32,
}

impl Verb {
    pub fn new(infinitive: impl Into<String>, template: impl Into<String>) -> Self {
        let infinitive = infinitive.into();
        Self {
            infinitive_no_accents: strip_accents(&infinitive),
            infinitive,
            template: template.into(),
            translation: None,
            predicted: false,
            pred_score: 1.0,
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// Stand-in for an infinitive absent from the dataset.
    pub fn predicted(infinitive: impl Into<String>, template: impl Into<String>, score: f32) -> Self {
        Self {
            predicted: true,
            pred_score: score,
            ..Self::new(infinitive, template)
        }
    }
}

/// Endings of one person in one tense; index 0 is the default spelling.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct PersonEnding {
    pub person: Person,
    pub endings: Vec<String>,
}

impl PersonEnding {
    pub fn new(person: Person, endings: Vec<String>) -> Self {
        Self { person, endings }
    }

    pub fn ending(&self) -> &str {
        self.endings.first().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TenseTemplate {
    pub name: String,
    /// Canonical person order.
    pub person_endings: Vec<PersonEnding>,
}

impl TenseTemplate {
    pub fn new(name: impl Into<String>, mut person_endings: Vec<PersonEnding>) -> Self {
        person_endings.sort_by_key(|pe| pe.person);
        Self {
            name: name.into(),
            person_endings,
        }
    }

    pub fn persons(&self) -> impl Iterator<Item = Person> + '_ {
        self.person_endings.iter().map(|pe| pe.person)
    }

    pub fn person_ending(&self, person: Person) -> Option<&PersonEnding> {
        self.person_endings.iter().find(|pe| pe.person == person)
    }

    /// A copy holding only the given persons, canonical order kept.
    pub fn restrict_to(&self, persons: &[Person]) -> TenseTemplate {
        TenseTemplate {
            name: self.name.clone(),
            person_endings: self
                .person_endings
                .iter()
                .filter(|pe| persons.contains(&pe.person))
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct MoodTemplate {
    pub name: String,
    pub tenses: Vec<TenseTemplate>,
}

impl MoodTemplate {
    pub fn tense(&self, name: &str) -> Option<&TenseTemplate> {
        self.tenses.iter().find(|t| t.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum StemModifier {
    /// Remove diacritics from the stem outside the infinitive mood.
    StripAccents = 0,
}

/// A named conjugation pattern such as `"aim:er"`.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ConjugationTemplate {
    pub name: String,
    pub modify_stem: Option<StemModifier>,
    pub moods: Vec<MoodTemplate>,
}

impl ConjugationTemplate {
    pub fn mood(&self, name: &str) -> Option<&MoodTemplate> {
        self.moods.iter().find(|m| m.name == name)
    }

    pub fn tense(&self, mood: &str, tense: &str) -> Option<&TenseTemplate> {
        self.mood(mood).and_then(|m| m.tense(tense))
    }

    /// Literal ending after the `:` separator.
    pub fn ending(&self) -> Option<&str> {
        self.name.split_once(':').map(|(_, ending)| ending)
    }
}

/// Archive root: everything a language needs to conjugate.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Dataset {
    pub version: u32,
    pub lang: Lang,
    pub verbs: Vec<Verb>,
    pub templates: Vec<ConjugationTemplate>,
}
