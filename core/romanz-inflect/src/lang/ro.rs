use romanz_protocol::{DialectOptions, Gender, Lang, Mood, Person, Tense};

use crate::compound::{CompoundShape, CompoundTense};
use crate::{split_last_word, Inflector};

const INFINITIVE: &str = "infinitiv";
const INDICATIVE: &str = "indicativ";
const SUBJUNCTIVE: &str = "conjunctiv";
const CONDITIONAL: &str = "conditional";
const IMPERATIVE: &str = "imperativ";
const PARTICIPLE: &str = "participiu";
const GERUND: &str = "gerunziu";

const NEGATIVE: &str = "negativ";
const PERFECT: &str = "perfect-compus";
const FUTURE: &str = "viitor-1";
const FUTURE_PERFECT: &str = "viitor-2";

const HAVE_FORMS: [&str; 6] = ["am", "ai", "a", "am", "aţi", "au"];
const WILL_FORMS: [&str; 6] = ["voi", "vei", "va", "vom", "veţi", "vor"];
const WOULD_FORMS: [&str; 6] = ["aş", "ai", "ar", "am", "aţi", "ar"];

const COMPOUNDS: &[CompoundTense] = &[
    CompoundTense::standard(INDICATIVE, PERFECT, INDICATIVE, "prezent"),
    CompoundTense::standard(INDICATIVE, FUTURE, INDICATIVE, "prezent")
        .with_shape(CompoundShape::Infinitive),
    CompoundTense::standard(INDICATIVE, "viitor-1-popular", SUBJUNCTIVE, "prezent")
        .with_shape(CompoundShape::NoPrimaryVerb("o să")),
    CompoundTense::standard(INDICATIVE, FUTURE_PERFECT, INDICATIVE, "prezent")
        .with_shape(CompoundShape::Particle("fi")),
    CompoundTense::standard(SUBJUNCTIVE, "perfect", SUBJUNCTIVE, "prezent")
        .with_shape(CompoundShape::NoAuxiliary("fi")),
    CompoundTense::standard(CONDITIONAL, "prezent", INDICATIVE, "prezent")
        .with_shape(CompoundShape::Infinitive),
    CompoundTense::standard(CONDITIONAL, "perfect", INDICATIVE, "prezent")
        .with_shape(CompoundShape::Particle("fi")),
];

const WITHOUT_PRONOUN: &[(&str, &str)] = &[
    (INFINITIVE, INFINITIVE),
    (GERUND, GERUND),
    (PARTICIPLE, PARTICIPLE),
    (IMPERATIVE, IMPERATIVE),
    (IMPERATIVE, NEGATIVE),
];

/// Auxiliary forms beginning with `a`, before which reflexive clitics
/// contract: `mă` + `am` gives `m-am`.
const A_INITIAL: &[&str] = &["am", "ai", "a", "aţi", "au", "aş", "ar"];

pub struct Romanian;

fn contracted_clitic(clitic: &str) -> Option<&'static str> {
    match clitic {
        "mă" => Some("m-"),
        "te" => Some("te-"),
        "se" => Some("s-"),
        "ne" => Some("ne-"),
        "vă" => Some("v-"),
        _ => None,
    }
}

impl Inflector for Romanian {
    fn lang(&self) -> Lang {
        Lang::Ro
    }

    fn mood_name(&self, mood: Mood) -> &'static str {
        match mood {
            Mood::Infinitive => INFINITIVE,
            Mood::Indicative => INDICATIVE,
            Mood::Subjunctive => SUBJUNCTIVE,
            Mood::Conditional => CONDITIONAL,
            Mood::Imperative => IMPERATIVE,
            Mood::Participle => PARTICIPLE,
            Mood::Gerund => GERUND,
        }
    }

    fn tense_name(&self, mood: Mood, tense: Tense) -> Option<&'static str> {
        let name = match (mood, tense) {
            (Mood::Infinitive, Tense::Present) => INFINITIVE,
            (Mood::Indicative, Tense::Present) => "prezent",
            (Mood::Indicative, Tense::Imperfect) => "imperfect",
            (Mood::Indicative, Tense::Preterite) => "perfect-simplu",
            (Mood::Indicative, Tense::Pluperfect) => "mai-mult-ca-perfect",
            (Mood::Indicative, Tense::Perfect) => PERFECT,
            (Mood::Indicative, Tense::Future) => FUTURE,
            (Mood::Indicative, Tense::PopularFuture) => "viitor-1-popular",
            (Mood::Indicative, Tense::FuturePerfect) => FUTURE_PERFECT,
            (Mood::Subjunctive, Tense::Present) => "prezent",
            (Mood::Subjunctive, Tense::Perfect | Tense::Past) => "perfect",
            (Mood::Conditional, Tense::Present) => "prezent",
            (Mood::Conditional, Tense::Perfect | Tense::Past) => "perfect",
            (Mood::Imperative, Tense::Present) => IMPERATIVE,
            (Mood::Imperative, Tense::Negative) => NEGATIVE,
            (Mood::Participle, Tense::Past) => PARTICIPLE,
            (Mood::Gerund, Tense::Present) => GERUND,
            _ => return None,
        };
        Some(name)
    }

    fn mood_alias(&self, name: &str) -> Option<&'static str> {
        match name {
            "condiţional" | "condițional" => Some(CONDITIONAL),
            "subjonctiv" => Some(SUBJUNCTIVE),
            _ => None,
        }
    }

    fn tense_alias(&self, mood: &str, name: &str) -> Option<&'static str> {
        match (mood, name) {
            (INDICATIVE, "viitor-i") => Some(FUTURE),
            (INDICATIVE, "viitor-ii") => Some(FUTURE_PERFECT),
            (INDICATIVE, "perfect") => Some(PERFECT),
            _ => None,
        }
    }

    fn subject_pronoun(&self, person: Person, gender: Gender, _dialect: DialectOptions) -> &'static str {
        match (person, gender) {
            (Person::FirstSingular, _) => "eu",
            (Person::SecondSingular, _) => "tu",
            (Person::ThirdSingular, Gender::Masculine) => "el",
            (Person::ThirdSingular, Gender::Feminine) => "ea",
            (Person::FirstPlural, _) => "noi",
            (Person::SecondPlural, _) => "voi",
            (Person::ThirdPlural, Gender::Masculine) => "ei",
            (Person::ThirdPlural, Gender::Feminine) => "ele",
            _ => "",
        }
    }

    fn reflexive_pronoun(&self, person: Person) -> &'static str {
        match person {
            Person::FirstSingular => "mă",
            Person::SecondSingular => "te",
            Person::FirstPlural => "ne",
            Person::SecondPlural => "vă",
            _ => "se",
        }
    }

    fn combine_pronoun_and_form(&self, pronoun: &str, form: &str) -> String {
        let (head, last) = split_last_word(pronoun);
        let first_word = form.split(' ').next().unwrap_or(form);
        match contracted_clitic(last) {
            Some(short) if A_INITIAL.contains(&first_word) => format!("{}{}{}", head, short, form),
            _ if pronoun.is_empty() => form.to_string(),
            _ => format!("{} {}", pronoun, form),
        }
    }

    fn split_reflexive(&self, infinitive: &str) -> (bool, String) {
        let trimmed = infinitive.trim();
        let bare = trimmed.strip_prefix("a ").unwrap_or(trimmed).trim_start();
        match bare.strip_prefix("se ") {
            Some(rest) => (true, rest.trim_start().to_string()),
            None => (false, bare.to_string()),
        }
    }

    fn add_reflexive_pronoun(&self, infinitive: &str) -> String {
        format!("se {}", infinitive)
    }

    fn add_reflexive_clitic(&self, form: &str, mood: &str, tense: &str, person: Person) -> String {
        match (mood, tense) {
            (INFINITIVE, _) => self.add_reflexive_pronoun(form),
            (GERUND, _) if form.ends_with('d') => format!("{}u-se", form),
            (GERUND, _) => format!("{}-se", form),
            (IMPERATIVE, NEGATIVE) => format!("{} {}", self.reflexive_pronoun(person), form),
            (IMPERATIVE, _) => format!("{}-{}", form, self.reflexive_pronoun(person)),
            _ => form.to_string(),
        }
    }

    fn non_reflexive_verbs(&self) -> &'static [&'static str] {
        &["avea", "fi", "vrea"]
    }

    fn tenses_conjugated_without_pronoun(&self) -> &'static [(&'static str, &'static str)] {
        WITHOUT_PRONOUN
    }

    fn compound_tenses(&self) -> &'static [CompoundTense] {
        COMPOUNDS
    }

    fn auxiliary_verb(&self, _infinitive: &str, _is_reflexive: bool, mood: &str, tense: &str) -> &'static str {
        match (mood, tense) {
            (INDICATIVE, FUTURE | FUTURE_PERFECT) => "vrea",
            (SUBJUNCTIVE, _) => "fi",
            _ => "avea",
        }
    }

    fn auxiliary_override(&self, mood: &str, tense: &str) -> Option<&'static [&'static str; 6]> {
        match (mood, tense) {
            (INDICATIVE, PERFECT) => Some(&HAVE_FORMS),
            (INDICATIVE, FUTURE | FUTURE_PERFECT) => Some(&WILL_FORMS),
            (CONDITIONAL, _) => Some(&WOULD_FORMS),
            _ => None,
        }
    }

    /// `să` follows the subject pronoun: `eu să fac`, `el să se spele`.
    fn subjunctive_relative_pronoun(&self, form: &str, _tense: &str) -> String {
        match form.split_once(' ') {
            Some((subject, rest)) => format!("{} să {}", subject, rest),
            None => format!("să {}", form),
        }
    }

    fn adverb_or_negation(&self, form: &str, mood: &str, tense: &str) -> String {
        match (mood, tense) {
            (INFINITIVE, _) => format!("a {}", form),
            (IMPERATIVE, NEGATIVE) => format!("nu {}", form),
            _ => form.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clitic_contraction() {
        let ro = Romanian;
        assert_eq!(ro.combine_pronoun_and_form("eu mă", "am spălat"), "eu m-am spălat");
        assert_eq!(ro.combine_pronoun_and_form("el se", "a spălat"), "el s-a spălat");
        assert_eq!(ro.combine_pronoun_and_form("tu te", "ai spălat"), "tu te-ai spălat");
        assert_eq!(ro.combine_pronoun_and_form("voi vă", "aţi spălat"), "voi v-aţi spălat");
        assert_eq!(ro.combine_pronoun_and_form("eu mă", "voi spăla"), "eu mă voi spăla");
        assert_eq!(ro.combine_pronoun_and_form("eu", "am făcut"), "eu am făcut");
    }

    #[test]
    fn test_subjunctive_marker() {
        let ro = Romanian;
        assert_eq!(ro.subjunctive_relative_pronoun("eu fac", "prezent"), "eu să fac");
        assert_eq!(ro.subjunctive_relative_pronoun("eu mă fi spălat", "perfect"), "eu să mă fi spălat");
        assert_eq!(ro.subjunctive_relative_pronoun("fac", "prezent"), "să fac");
    }

    #[test]
    fn test_reflexive_hooks() {
        let ro = Romanian;
        let infinitive = ro.add_reflexive_clitic("spăla", INFINITIVE, INFINITIVE, Person::Invariant);
        assert_eq!(ro.adverb_or_negation(&infinitive, INFINITIVE, INFINITIVE), "a se spăla");
        assert_eq!(ro.add_reflexive_clitic("spălând", GERUND, GERUND, Person::Invariant), "spălându-se");
        assert_eq!(ro.add_reflexive_clitic("spală", IMPERATIVE, IMPERATIVE, Person::SecondSingular), "spală-te");
        let negative = ro.add_reflexive_clitic("spăla", IMPERATIVE, NEGATIVE, Person::SecondSingular);
        assert_eq!(ro.adverb_or_negation(&negative, IMPERATIVE, NEGATIVE), "nu te spăla");
        assert_eq!(ro.split_reflexive("a se spăla"), (true, "spăla".to_string()));
        assert_eq!(ro.split_reflexive("a face"), (false, "face".to_string()));
    }

    #[test]
    fn test_auxiliary_overrides() {
        assert_eq!(Romanian.auxiliary_override(INDICATIVE, PERFECT), Some(&HAVE_FORMS));
        assert_eq!(Romanian.auxiliary_override(CONDITIONAL, "perfect"), Some(&WOULD_FORMS));
        assert_eq!(Romanian.auxiliary_override(SUBJUNCTIVE, "perfect"), None);
        assert!(!Romanian.compound_tense(SUBJUNCTIVE, "perfect").is_some_and(|c| c.has_auxiliary()));
    }

    proptest! {
        #[test]
        fn test_reflexive_symmetry(verb in "[a-zăâîşţ]{2,10}") {
            let with = Romanian.add_reflexive_pronoun(&verb);
            prop_assert_eq!(Romanian.split_reflexive(&with), (true, verb));
        }
    }
}
