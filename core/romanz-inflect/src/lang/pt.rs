use romanz_protocol::{DialectOptions, Gender, Lang, Mood, Person, Tense};

use crate::compound::CompoundTense;
use crate::Inflector;

const INFINITIVE: &str = "infinitivo";
const INDICATIVE: &str = "indicativo";
const SUBJUNCTIVE: &str = "subjuntivo";
const CONDITIONAL: &str = "condicional";
const IMPERATIVE: &str = "imperativo";
const PARTICIPLE: &str = "particípio";
const GERUND: &str = "gerúndio";

const AFFIRMATIVE: &str = "afirmativo";
const NEGATIVE: &str = "negativo";

const COMPOUNDS: &[CompoundTense] = &[
    CompoundTense::standard(INDICATIVE, "pretérito-perfeito-composto", INDICATIVE, "presente"),
    CompoundTense::standard(INDICATIVE, "pretérito-mais-que-perfeito-composto", INDICATIVE, "pretérito-imperfeito"),
    CompoundTense::standard(INDICATIVE, "futuro-do-presente-composto", INDICATIVE, "futuro-do-presente"),
    CompoundTense::standard(SUBJUNCTIVE, "pretérito-perfeito", SUBJUNCTIVE, "presente"),
    CompoundTense::standard(SUBJUNCTIVE, "pretérito-mais-que-perfeito", SUBJUNCTIVE, "pretérito-imperfeito"),
    CompoundTense::standard(SUBJUNCTIVE, "futuro-composto", SUBJUNCTIVE, "futuro"),
    CompoundTense::standard(CONDITIONAL, "futuro-do-pretérito-composto", CONDITIONAL, "futuro-do-pretérito"),
];

const WITHOUT_PRONOUN: &[(&str, &str)] = &[
    (INFINITIVE, "infinitivo-impessoal"),
    (GERUND, GERUND),
    (PARTICIPLE, PARTICIPLE),
    (IMPERATIVE, AFFIRMATIVE),
    (IMPERATIVE, NEGATIVE),
];

pub struct Portuguese;

impl Inflector for Portuguese {
    fn lang(&self) -> Lang {
        Lang::Pt
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
            (Mood::Infinitive, Tense::Present) => "infinitivo-impessoal",
            (Mood::Indicative, Tense::Present) => "presente",
            (Mood::Indicative, Tense::Imperfect) => "pretérito-imperfeito",
            (Mood::Indicative, Tense::Preterite) => "pretérito-perfeito",
            (Mood::Indicative, Tense::Pluperfect) => "pretérito-mais-que-perfeito",
            (Mood::Indicative, Tense::Future) => "futuro-do-presente",
            (Mood::Indicative, Tense::Perfect) => "pretérito-perfeito-composto",
            (Mood::Indicative, Tense::PastAnterior) => "pretérito-mais-que-perfeito-composto",
            (Mood::Indicative, Tense::FuturePerfect) => "futuro-do-presente-composto",
            (Mood::Subjunctive, Tense::Present) => "presente",
            (Mood::Subjunctive, Tense::Imperfect) => "pretérito-imperfeito",
            (Mood::Subjunctive, Tense::Future) => "futuro",
            (Mood::Subjunctive, Tense::Perfect | Tense::Past) => "pretérito-perfeito",
            (Mood::Subjunctive, Tense::Pluperfect) => "pretérito-mais-que-perfeito",
            (Mood::Subjunctive, Tense::FuturePerfect) => "futuro-composto",
            (Mood::Conditional, Tense::Present) => "futuro-do-pretérito",
            (Mood::Conditional, Tense::Perfect | Tense::Past) => "futuro-do-pretérito-composto",
            (Mood::Imperative, Tense::Present) => AFFIRMATIVE,
            (Mood::Imperative, Tense::Negative) => NEGATIVE,
            (Mood::Participle, Tense::Past) => PARTICIPLE,
            (Mood::Gerund, Tense::Present) => GERUND,
            _ => return None,
        };
        Some(name)
    }

    fn mood_alias(&self, name: &str) -> Option<&'static str> {
        match name {
            "conjuntivo" => Some(SUBJUNCTIVE),
            "participio" => Some(PARTICIPLE),
            "gerundio" => Some(GERUND),
            _ => None,
        }
    }

    fn subject_pronoun(&self, person: Person, gender: Gender, _dialect: DialectOptions) -> &'static str {
        match (person, gender) {
            (Person::FirstSingular, _) => "eu",
            (Person::SecondSingular, _) => "tu",
            (Person::ThirdSingular, Gender::Masculine) => "ele",
            (Person::ThirdSingular, Gender::Feminine) => "ela",
            (Person::FirstPlural, _) => "nós",
            (Person::SecondPlural, _) => "vós",
            (Person::ThirdPlural, Gender::Masculine) => "eles",
            (Person::ThirdPlural, Gender::Feminine) => "elas",
            _ => "",
        }
    }

    fn reflexive_pronoun(&self, person: Person) -> &'static str {
        match person {
            Person::FirstSingular => "me",
            Person::SecondSingular => "te",
            Person::FirstPlural => "nos",
            Person::SecondPlural => "vos",
            _ => "se",
        }
    }

    fn split_reflexive(&self, infinitive: &str) -> (bool, String) {
        let trimmed = infinitive.trim();
        match trimmed.strip_suffix("-se") {
            Some(base) => (true, base.to_string()),
            None => (false, trimmed.to_string()),
        }
    }

    fn add_reflexive_pronoun(&self, infinitive: &str) -> String {
        format!("{}-se", infinitive)
    }

    fn add_reflexive_clitic(&self, form: &str, mood: &str, tense: &str, person: Person) -> String {
        match (mood, tense) {
            (INFINITIVE, _) => self.add_reflexive_pronoun(form),
            (GERUND, _) => format!("{}-se", form),
            (IMPERATIVE, AFFIRMATIVE) => match person {
                Person::FirstPlural => format!("{}-nos", form.strip_suffix('s').unwrap_or(form)),
                other => format!("{}-{}", form, self.reflexive_pronoun(other)),
            },
            (IMPERATIVE, NEGATIVE) => format!("{} {}", self.reflexive_pronoun(person), form),
            _ => form.to_string(),
        }
    }

    fn non_reflexive_verbs(&self) -> &'static [&'static str] {
        &["ter", "haver", "ser"]
    }

    fn tenses_conjugated_without_pronoun(&self) -> &'static [(&'static str, &'static str)] {
        WITHOUT_PRONOUN
    }

    fn compound_tenses(&self) -> &'static [CompoundTense] {
        COMPOUNDS
    }

    fn auxiliary_verb(&self, _infinitive: &str, _is_reflexive: bool, _mood: &str, _tense: &str) -> &'static str {
        "ter"
    }

    /// The conjunction depends on the tense: `que eu fale`, `se eu falasse`,
    /// `quando eu falar`.
    fn subjunctive_relative_pronoun(&self, form: &str, tense: &str) -> String {
        let conjunction = match tense {
            "pretérito-imperfeito" | "pretérito-mais-que-perfeito" => "se",
            "futuro" | "futuro-composto" => "quando",
            _ => "que",
        };
        format!("{} {}", conjunction, form)
    }

    fn adverb_or_negation(&self, form: &str, mood: &str, tense: &str) -> String {
        if mood == IMPERATIVE && tense == NEGATIVE {
            format!("não {}", form)
        } else {
            form.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subjunctive_conjunctions() {
        let pt = Portuguese;
        assert_eq!(pt.subjunctive_relative_pronoun("eu fale", "presente"), "que eu fale");
        assert_eq!(pt.subjunctive_relative_pronoun("eu falasse", "pretérito-imperfeito"), "se eu falasse");
        assert_eq!(pt.subjunctive_relative_pronoun("eu falar", "futuro"), "quando eu falar");
    }

    #[test]
    fn test_reflexive_imperative() {
        let pt = Portuguese;
        assert_eq!(pt.add_reflexive_clitic("lava", IMPERATIVE, AFFIRMATIVE, Person::SecondSingular), "lava-te");
        assert_eq!(pt.add_reflexive_clitic("lavemos", IMPERATIVE, AFFIRMATIVE, Person::FirstPlural), "lavemo-nos");
        assert_eq!(pt.add_reflexive_clitic("laves", IMPERATIVE, NEGATIVE, Person::SecondSingular), "te laves");
    }

    #[test]
    fn test_reflexive_symmetry() {
        for verb in ["lavar", "pôr", "vestir"] {
            let with = Portuguese.add_reflexive_pronoun(verb);
            assert_eq!(Portuguese.split_reflexive(&with), (true, verb.to_string()));
        }
    }
}
