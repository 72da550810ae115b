use romanz_protocol::{DialectOptions, Gender, Lang, Mood, Person, Tense};

use crate::compound::{CompoundShape, CompoundTense};
use crate::{split_last_word, starts_with_vowel, Inflector};

const INFINITIVE: &str = "infinitiu";
const INDICATIVE: &str = "indicatiu";
const SUBJUNCTIVE: &str = "subjuntiu";
const CONDITIONAL: &str = "condicional";
const IMPERATIVE: &str = "imperatiu";
const PARTICIPLE: &str = "participi";
const GERUND: &str = "gerundi";

const PERIPHRASTIC_PAST: &str = "passat-perifràstic";

const COMPOUNDS: &[CompoundTense] = &[
    CompoundTense::standard(INDICATIVE, "perfet", INDICATIVE, "present"),
    CompoundTense::standard(INDICATIVE, "plusquamperfet", INDICATIVE, "imperfet"),
    CompoundTense::standard(INDICATIVE, "passat-anterior", INDICATIVE, "passat-simple"),
    CompoundTense::standard(INDICATIVE, "futur-perfet", INDICATIVE, "futur"),
    CompoundTense::standard(INDICATIVE, PERIPHRASTIC_PAST, INDICATIVE, "present")
        .with_shape(CompoundShape::Infinitive),
    CompoundTense::standard(SUBJUNCTIVE, "perfet", SUBJUNCTIVE, "present"),
    CompoundTense::standard(SUBJUNCTIVE, "plusquamperfet", SUBJUNCTIVE, "imperfet"),
    CompoundTense::standard(CONDITIONAL, "perfet", CONDITIONAL, "present"),
];

const WITHOUT_PRONOUN: &[(&str, &str)] = &[
    (INFINITIVE, INFINITIVE),
    (GERUND, GERUND),
    (PARTICIPLE, PARTICIPLE),
    (IMPERATIVE, "present"),
];

/// `anar` forms of the periphrastic past, by person.
const ANAR_AUXILIARY: [&str; 6] = ["vaig", "vas", "va", "vam", "vau", "van"];

pub struct Catalan;

fn elides_before(form: &str) -> bool {
    starts_with_vowel(form) || form.starts_with('h')
}

fn ends_with_vowel(form: &str) -> bool {
    form.chars().last().is_some_and(|c| starts_with_vowel(&c.to_string()))
}

impl Inflector for Catalan {
    fn lang(&self) -> Lang {
        Lang::Ca
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
            (Mood::Indicative, Tense::Present) => "present",
            (Mood::Indicative, Tense::Imperfect) => "imperfet",
            (Mood::Indicative, Tense::Preterite) => "passat-simple",
            (Mood::Indicative, Tense::Future) => "futur",
            (Mood::Indicative, Tense::Perfect) => "perfet",
            (Mood::Indicative, Tense::Pluperfect) => "plusquamperfet",
            (Mood::Indicative, Tense::PastAnterior) => "passat-anterior",
            (Mood::Indicative, Tense::FuturePerfect) => "futur-perfet",
            (Mood::Indicative, Tense::PeriphrasticPast) => PERIPHRASTIC_PAST,
            (Mood::Subjunctive, Tense::Present) => "present",
            (Mood::Subjunctive, Tense::Imperfect) => "imperfet",
            (Mood::Subjunctive, Tense::Perfect | Tense::Past) => "perfet",
            (Mood::Subjunctive, Tense::Pluperfect) => "plusquamperfet",
            (Mood::Conditional, Tense::Present) => "present",
            (Mood::Conditional, Tense::Perfect | Tense::Past) => "perfet",
            (Mood::Imperative, Tense::Present) => "present",
            (Mood::Participle, Tense::Past) => PARTICIPLE,
            (Mood::Gerund, Tense::Present) => GERUND,
            _ => return None,
        };
        Some(name)
    }

    fn tense_alias(&self, mood: &str, name: &str) -> Option<&'static str> {
        match (mood, name) {
            (INDICATIVE, "passat-perifrastic") => Some(PERIPHRASTIC_PAST),
            (INDICATIVE, "passat") => Some("passat-simple"),
            _ => None,
        }
    }

    fn subject_pronoun(&self, person: Person, gender: Gender, _dialect: DialectOptions) -> &'static str {
        match (person, gender) {
            (Person::FirstSingular, _) => "jo",
            (Person::SecondSingular, _) => "tu",
            (Person::ThirdSingular, Gender::Masculine) => "ell",
            (Person::ThirdSingular, Gender::Feminine) => "ella",
            (Person::FirstPlural, _) => "nosaltres",
            (Person::SecondPlural, _) => "vosaltres",
            (Person::ThirdPlural, Gender::Masculine) => "ells",
            (Person::ThirdPlural, Gender::Feminine) => "elles",
            _ => "",
        }
    }

    fn reflexive_pronoun(&self, person: Person) -> &'static str {
        match person {
            Person::FirstSingular => "em",
            Person::SecondSingular => "et",
            Person::FirstPlural => "ens",
            Person::SecondPlural => "us",
            _ => "es",
        }
    }

    /// `em`, `et`, `es` become `m'`, `t'`, `s'` before a vowel or `h`.
    fn combine_pronoun_and_form(&self, pronoun: &str, form: &str) -> String {
        let (head, last) = split_last_word(pronoun);
        match last {
            "em" | "et" | "es" if elides_before(form) => {
                format!("{}{}'{}", head, &last[1..], form)
            }
            _ if pronoun.is_empty() => form.to_string(),
            _ => format!("{} {}", pronoun, form),
        }
    }

    fn split_reflexive(&self, infinitive: &str) -> (bool, String) {
        let trimmed = infinitive.trim();
        match trimmed.strip_suffix("-se").or_else(|| trimmed.strip_suffix("'s")) {
            Some(base) => (true, base.to_string()),
            None => (false, trimmed.to_string()),
        }
    }

    fn add_reflexive_pronoun(&self, infinitive: &str) -> String {
        if ends_with_vowel(infinitive) {
            format!("{}'s", infinitive)
        } else {
            format!("{}-se", infinitive)
        }
    }

    fn add_reflexive_clitic(&self, form: &str, mood: &str, _tense: &str, person: Person) -> String {
        match mood {
            INFINITIVE | GERUND => self.add_reflexive_pronoun(form),
            IMPERATIVE => {
                let (short, full) = match person {
                    Person::SecondSingular => ("t", "te"),
                    Person::FirstPlural => ("nos", "nos"),
                    Person::SecondPlural => ("vos", "vos"),
                    _ => ("s", "se"),
                };
                if ends_with_vowel(form) && short.len() == 1 {
                    format!("{}'{}", form, short)
                } else {
                    format!("{}-{}", form, full)
                }
            }
            _ => form.to_string(),
        }
    }

    fn non_reflexive_verbs(&self) -> &'static [&'static str] {
        &["haver", "ser", "ésser"]
    }

    fn tenses_conjugated_without_pronoun(&self) -> &'static [(&'static str, &'static str)] {
        WITHOUT_PRONOUN
    }

    fn compound_tenses(&self) -> &'static [CompoundTense] {
        COMPOUNDS
    }

    fn auxiliary_verb(&self, _infinitive: &str, _is_reflexive: bool, mood: &str, tense: &str) -> &'static str {
        if mood == INDICATIVE && tense == PERIPHRASTIC_PAST {
            "anar"
        } else {
            "haver"
        }
    }

    fn auxiliary_override(&self, mood: &str, tense: &str) -> Option<&'static [&'static str; 6]> {
        (mood == INDICATIVE && tense == PERIPHRASTIC_PAST).then_some(&ANAR_AUXILIARY)
    }

    fn subjunctive_relative_pronoun(&self, form: &str, _tense: &str) -> String {
        format!("que {}", form)
    }
}
