use romanz_protocol::{fold, DialectOptions, Gender, Lang, Mood, Person, Tense};

use crate::compound::CompoundTense;
use crate::{split_last_word, starts_with_vowel, Inflector};

const INFINITIVE: &str = "infinitif";
const INDICATIVE: &str = "indicatif";
const SUBJUNCTIVE: &str = "subjonctif";
const CONDITIONAL: &str = "conditionnel";
const IMPERATIVE: &str = "imperatif";
const PARTICIPLE: &str = "participe";

const PRESENT_PARTICIPLE: &str = "participe-présent";
const IMPERATIVE_PRESENT: &str = "imperatif-présent";

const COMPOUNDS: &[CompoundTense] = &[
    CompoundTense::standard(INDICATIVE, "passé-composé", INDICATIVE, "présent"),
    CompoundTense::standard(INDICATIVE, "plus-que-parfait", INDICATIVE, "imparfait"),
    CompoundTense::standard(INDICATIVE, "futur-antérieur", INDICATIVE, "futur-simple"),
    CompoundTense::standard(INDICATIVE, "passé-antérieur", INDICATIVE, "passé-simple"),
    CompoundTense::standard(SUBJUNCTIVE, "passé", SUBJUNCTIVE, "présent"),
    CompoundTense::standard(SUBJUNCTIVE, "plus-que-parfait", SUBJUNCTIVE, "imparfait"),
    CompoundTense::standard(CONDITIONAL, "passé", CONDITIONAL, "présent"),
    CompoundTense::standard(IMPERATIVE, "imperatif-passé", IMPERATIVE, IMPERATIVE_PRESENT),
];

const WITHOUT_PRONOUN: &[(&str, &str)] = &[
    (INFINITIVE, "infinitif-présent"),
    (PARTICIPLE, PRESENT_PARTICIPLE),
    (PARTICIPLE, "participe-passé"),
    (IMPERATIVE, IMPERATIVE_PRESENT),
    (IMPERATIVE, "imperatif-passé"),
];

/// Verbs conjugated with `être` in compound tenses.
const ETRE_VERBS: &[&str] = &[
    "aller", "apparaître", "arriver", "décéder", "descendre", "devenir", "entrer", "intervenir",
    "monter", "mourir", "naître", "partir", "parvenir", "redescendre", "remonter", "rentrer",
    "repartir", "rester", "retomber", "retourner", "revenir", "sortir", "survenir", "tomber",
    "venir",
];

/// Word starts (diacritics folded) with an aspirated `h`, which blocks elision.
const ASPIRATED_H: &[&str] = &[
    "hach", "hai", "hal", "hant", "harass", "harcel", "hasard", "hauss", "heurt", "hiss", "hont",
    "hurl",
];

const ELIDED: &[&str] = &["je", "me", "te", "se"];

fn elides_before(form: &str) -> bool {
    if starts_with_vowel(form) {
        return true;
    }
    let folded = fold(form);
    folded.starts_with('h') && !ASPIRATED_H.iter().any(|h| folded.starts_with(h))
}

pub struct French;

impl Inflector for French {
    fn lang(&self) -> Lang {
        Lang::Fr
    }

    fn mood_name(&self, mood: Mood) -> &'static str {
        match mood {
            Mood::Infinitive => INFINITIVE,
            Mood::Indicative => INDICATIVE,
            Mood::Subjunctive => SUBJUNCTIVE,
            Mood::Conditional => CONDITIONAL,
            Mood::Imperative => IMPERATIVE,
            Mood::Participle | Mood::Gerund => PARTICIPLE,
        }
    }

    fn tense_name(&self, mood: Mood, tense: Tense) -> Option<&'static str> {
        let name = match (mood, tense) {
            (Mood::Infinitive, Tense::Present) => "infinitif-présent",
            (Mood::Indicative, Tense::Present) => "présent",
            (Mood::Indicative, Tense::Imperfect) => "imparfait",
            (Mood::Indicative, Tense::Future) => "futur-simple",
            (Mood::Indicative, Tense::Preterite) => "passé-simple",
            (Mood::Indicative, Tense::Perfect) => "passé-composé",
            (Mood::Indicative, Tense::Pluperfect) => "plus-que-parfait",
            (Mood::Indicative, Tense::FuturePerfect) => "futur-antérieur",
            (Mood::Indicative, Tense::PastAnterior) => "passé-antérieur",
            (Mood::Subjunctive, Tense::Present) => "présent",
            (Mood::Subjunctive, Tense::Imperfect) => "imparfait",
            (Mood::Subjunctive, Tense::Perfect | Tense::Past) => "passé",
            (Mood::Subjunctive, Tense::Pluperfect) => "plus-que-parfait",
            (Mood::Conditional, Tense::Present) => "présent",
            (Mood::Conditional, Tense::Perfect | Tense::Past) => "passé",
            (Mood::Imperative, Tense::Present) => IMPERATIVE_PRESENT,
            (Mood::Imperative, Tense::Perfect | Tense::Past) => "imperatif-passé",
            (Mood::Participle | Mood::Gerund, Tense::Present) => PRESENT_PARTICIPLE,
            (Mood::Participle, Tense::Past) => "participe-passé",
            _ => return None,
        };
        Some(name)
    }

    fn mood_alias(&self, name: &str) -> Option<&'static str> {
        match name {
            "impératif" => Some(IMPERATIVE),
            "subjonctif-présent" => Some(SUBJUNCTIVE),
            _ => None,
        }
    }

    fn tense_alias(&self, mood: &str, name: &str) -> Option<&'static str> {
        match (mood, name) {
            (IMPERATIVE, "impératif-présent") => Some(IMPERATIVE_PRESENT),
            (IMPERATIVE, "impératif-passé") => Some("imperatif-passé"),
            (INDICATIVE, "futur") => Some("futur-simple"),
            _ => None,
        }
    }

    fn subject_pronoun(&self, person: Person, gender: Gender, _dialect: DialectOptions) -> &'static str {
        match (person, gender) {
            (Person::FirstSingular, _) => "je",
            (Person::SecondSingular, _) => "tu",
            (Person::ThirdSingular, Gender::Masculine) => "il",
            (Person::ThirdSingular, Gender::Feminine) => "elle",
            (Person::FirstPlural, _) => "nous",
            (Person::SecondPlural, _) => "vous",
            (Person::ThirdPlural, Gender::Masculine) => "ils",
            (Person::ThirdPlural, Gender::Feminine) => "elles",
            _ => "",
        }
    }

    fn reflexive_pronoun(&self, person: Person) -> &'static str {
        match person {
            Person::FirstSingular => "me",
            Person::SecondSingular => "te",
            Person::FirstPlural => "nous",
            Person::SecondPlural => "vous",
            _ => "se",
        }
    }

    fn combine_pronoun_and_form(&self, pronoun: &str, form: &str) -> String {
        let (head, last) = split_last_word(pronoun);
        if ELIDED.contains(&last) && elides_before(form) {
            format!("{}{}'{}", head, &last[..last.len() - 1], form)
        } else if pronoun.is_empty() {
            form.to_string()
        } else {
            format!("{} {}", pronoun, form)
        }
    }

    fn split_reflexive(&self, infinitive: &str) -> (bool, String) {
        let trimmed = infinitive.trim();
        for prefix in ["se ", "s'", "s’"] {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                return (true, rest.trim_start().to_string());
            }
        }
        (false, trimmed.to_string())
    }

    fn add_reflexive_pronoun(&self, infinitive: &str) -> String {
        if elides_before(infinitive) {
            format!("s'{}", infinitive)
        } else {
            format!("se {}", infinitive)
        }
    }

    fn add_reflexive_clitic(&self, form: &str, mood: &str, tense: &str, person: Person) -> String {
        match (mood, tense) {
            (INFINITIVE, _) => self.add_reflexive_pronoun(form),
            (IMPERATIVE, IMPERATIVE_PRESENT) => match person {
                Person::SecondSingular => format!("{}-toi", form),
                Person::FirstPlural => format!("{}-nous", form),
                Person::SecondPlural => format!("{}-vous", form),
                _ => form.to_string(),
            },
            _ => form.to_string(),
        }
    }

    fn add_present_participle_prefix(&self, form: &str, mood: &str, tense: &str, is_reflexive: bool) -> String {
        if is_reflexive && mood == PARTICIPLE && tense == PRESENT_PARTICIPLE {
            self.add_reflexive_pronoun(form)
        } else {
            form.to_string()
        }
    }

    fn non_reflexive_verbs(&self) -> &'static [&'static str] {
        &["avoir", "être"]
    }

    fn tenses_conjugated_without_pronoun(&self) -> &'static [(&'static str, &'static str)] {
        WITHOUT_PRONOUN
    }

    fn compound_tenses(&self) -> &'static [CompoundTense] {
        COMPOUNDS
    }

    fn auxiliary_verb(&self, infinitive: &str, is_reflexive: bool, _mood: &str, _tense: &str) -> &'static str {
        if is_reflexive || ETRE_VERBS.contains(&infinitive) {
            "être"
        } else {
            "avoir"
        }
    }

    fn is_auxiliary_inflected(&self, auxiliary: &str) -> bool {
        auxiliary == "être"
    }

    fn subjunctive_relative_pronoun(&self, form: &str, _tense: &str) -> String {
        if starts_with_vowel(form) {
            format!("qu'{}", form)
        } else {
            format!("que {}", form)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_elision() {
        assert_eq!(French.combine_pronoun_and_form("je", "ai"), "j'ai");
        assert_eq!(French.combine_pronoun_and_form("je me", "appelle"), "je m'appelle");
        assert_eq!(French.combine_pronoun_and_form("je", "habite"), "j'habite");
        assert_eq!(French.combine_pronoun_and_form("je", "hais"), "je hais");
        assert_eq!(French.combine_pronoun_and_form("nous nous", "aimons"), "nous nous aimons");
    }

    #[test]
    fn test_auxiliary_choice() {
        assert_eq!(French.auxiliary_verb("aller", false, INDICATIVE, "passé-composé"), "être");
        assert_eq!(French.auxiliary_verb("manger", false, INDICATIVE, "passé-composé"), "avoir");
        assert_eq!(French.auxiliary_verb("laver", true, INDICATIVE, "passé-composé"), "être");
        assert!(French.is_auxiliary_inflected("être"));
        assert!(!French.is_auxiliary_inflected("avoir"));
    }

    #[test]
    fn test_subjunctive_marker() {
        assert_eq!(French.subjunctive_relative_pronoun("il mange", "présent"), "qu'il mange");
        assert_eq!(French.subjunctive_relative_pronoun("je mange", "présent"), "que je mange");
    }

    #[test]
    fn test_reflexive_imperative() {
        assert_eq!(
            French.add_reflexive_clitic("lave", IMPERATIVE, IMPERATIVE_PRESENT, Person::SecondSingular),
            "lave-toi"
        );
        assert_eq!(French.add_reflexive_clitic("laver", INFINITIVE, "infinitif-présent", Person::Invariant), "se laver");
    }

    #[test]
    fn test_split_reflexive() {
        assert_eq!(French.split_reflexive("s'appeler"), (true, "appeler".to_string()));
        assert_eq!(French.split_reflexive("se laver"), (true, "laver".to_string()));
        assert_eq!(French.split_reflexive("manger"), (false, "manger".to_string()));
    }

    proptest! {
        #[test]
        fn test_reflexive_symmetry(verb in "[a-zéèêâîôûç]{2,10}") {
            let with = French.add_reflexive_pronoun(&verb);
            prop_assert_eq!(French.split_reflexive(&with), (true, verb));
        }
    }
}
