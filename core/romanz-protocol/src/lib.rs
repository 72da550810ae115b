pub mod model;
pub mod morphology;
pub mod text;

// Re-export core types for convenience
pub use model::*;
pub use morphology::*;
pub use text::{fold, strip_accents};

/// Failure to read a vocabulary code from dataset text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown person code '{0}'")]
    Person(String),
    #[error("unknown language code '{0}'")]
    Lang(String),
    #[error("unknown stem modifier '{0}'")]
    StemModifier(String),
}

impl core::str::FromStr for StemModifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strip-accents" => Ok(StemModifier::StripAccents),
            other => Err(ParseError::StemModifier(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rkyv::{from_bytes, to_bytes};

    fn ending(person: Person, text: &str) -> PersonEnding {
        PersonEnding::new(person, vec![text.to_string()])
    }

    #[test]
    fn test_person_serialization() {
        let original = Person::FemininePlural;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize Person");
        let deserialized: Person = from_bytes(&bytes).expect("Failed to deserialize Person");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_dataset_archive_validates() {
        let template = ConjugationTemplate {
            name: "aim:er".to_string(),
            modify_stem: Some(StemModifier::StripAccents),
            moods: vec![MoodTemplate {
                name: "indicatif".to_string(),
                tenses: vec![TenseTemplate::new(
                    "présent",
                    vec![ending(Person::FirstSingular, "e"), ending(Person::ThirdPlural, "ent")],
                )],
            }],
        };
        let dataset = Dataset {
            version: 1,
            lang: Lang::Fr,
            verbs: vec![Verb::new("aimer", "aim:er").with_translation("to love")],
            templates: vec![template],
        };

        let bytes = to_bytes::<_, 1024>(&dataset).expect("Failed to serialize Dataset");
        let archived = rkyv::check_archived_root::<Dataset>(&bytes).expect("archive must validate");

        assert_eq!(archived.verbs[0].infinitive.as_str(), "aimer");
        assert_eq!(archived.templates[0].moods[0].tenses[0].person_endings.len(), 2);
    }

    #[test]
    fn test_tense_template_canonical_order() {
        let tense = TenseTemplate::new(
            "présent",
            vec![
                ending(Person::ThirdPlural, "ent"),
                ending(Person::FirstSingular, "e"),
                ending(Person::SecondPlural, "ez"),
            ],
        );
        let persons: Vec<Person> = tense.persons().collect();
        assert_eq!(persons, vec![Person::FirstSingular, Person::SecondPlural, Person::ThirdPlural]);
    }

    #[test]
    fn test_restrict_to_leaves_source_untouched() {
        let tense = TenseTemplate::new(
            "présent",
            Person::GRAMMATICAL.iter().map(|p| ending(*p, p.code())).collect(),
        );
        let third = tense.restrict_to(&[Person::ThirdSingular, Person::ThirdPlural]);

        assert_eq!(third.person_endings.len(), 2);
        assert_eq!(third.person_endings[1].ending(), "3p");
        assert_eq!(tense.person_endings.len(), 6);
    }

    #[test]
    fn test_participle_slot() {
        assert_eq!(Person::FirstPlural.participle_slot(Gender::Feminine), Person::FemininePlural);
        assert_eq!(Person::SecondSingular.participle_slot(Gender::Masculine), Person::MasculineSingular);
    }

    #[test]
    fn test_alternates_select() {
        let endings = vec!["e".to_string(), "è".to_string()];
        assert_eq!(AlternatesMode::First.select(&endings), &endings[..1]);
        assert_eq!(AlternatesMode::Second.select(&endings), &endings[1..]);
        assert_eq!(AlternatesMode::All.select(&endings).len(), 2);
        assert_eq!(AlternatesMode::Second.select(&endings[..1]), &endings[..1]);
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("naître"), "naitre");
        assert_eq!(strip_accents("faceţi"), "faceti");
        assert_eq!(fold("Céder"), "ceder");
    }

    proptest! {
        #[test]
        fn test_person_code_round_trip(idx in 0u8..11) {
            let person = Person::GRAMMATICAL
                .iter()
                .copied()
                .chain([
                    Person::MasculineSingular,
                    Person::MasculinePlural,
                    Person::FeminineSingular,
                    Person::FemininePlural,
                    Person::Invariant,
                ])
                .nth(idx as usize)
                .unwrap();
            prop_assert_eq!(person.code().parse::<Person>().unwrap(), person);
        }

        #[test]
        fn test_fold_is_idempotent(word in "[a-zA-ZàâçéèêëîïôûùüÿñăşţÉÈÂ]{0,12}") {
            let once = fold(&word);
            prop_assert_eq!(fold(&once), once.clone());
        }
    }
}
