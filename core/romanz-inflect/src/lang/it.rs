use romanz_morph::StemMatch;
use romanz_protocol::{DialectOptions, Gender, Lang, Mood, Person, Tense};

use crate::compound::CompoundTense;
use crate::Inflector;

const INFINITIVE: &str = "infinito";
const INDICATIVE: &str = "indicativo";
const SUBJUNCTIVE: &str = "congiuntivo";
const CONDITIONAL: &str = "condizionale";
const IMPERATIVE: &str = "imperativo";
const PARTICIPLE: &str = "participio";
const GERUND: &str = "gerundio";

const IMPERATIVE_PRESENT: &str = "imperativo-presente";

const COMPOUNDS: &[CompoundTense] = &[
    CompoundTense::standard(INDICATIVE, "passato-prossimo", INDICATIVE, "presente"),
    CompoundTense::standard(INDICATIVE, "trapassato-prossimo", INDICATIVE, "imperfetto"),
    CompoundTense::standard(INDICATIVE, "trapassato-remoto", INDICATIVE, "passato-remoto"),
    CompoundTense::standard(INDICATIVE, "futuro-anteriore", INDICATIVE, "futuro"),
    CompoundTense::standard(SUBJUNCTIVE, "passato", SUBJUNCTIVE, "presente"),
    CompoundTense::standard(SUBJUNCTIVE, "trapassato", SUBJUNCTIVE, "imperfetto"),
    CompoundTense::standard(CONDITIONAL, "passato", CONDITIONAL, "presente"),
];

const WITHOUT_PRONOUN: &[(&str, &str)] = &[
    (INFINITIVE, "infinito-presente"),
    (GERUND, "gerundio-presente"),
    (PARTICIPLE, "participio-presente"),
    (PARTICIPLE, "participio-passato"),
    (IMPERATIVE, IMPERATIVE_PRESENT),
];

/// Verbs conjugated with `essere` in compound tenses.
const ESSERE_VERBS: &[&str] = &[
    "andare", "arrivare", "cadere", "diventare", "entrare", "essere", "morire", "nascere",
    "partire", "piacere", "restare", "rimanere", "riuscire", "sembrare", "stare", "succedere",
    "tornare", "uscire", "venire",
];

pub struct Italian;

impl Inflector for Italian {
    fn lang(&self) -> Lang {
        Lang::It
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
            (Mood::Infinitive, Tense::Present) => "infinito-presente",
            (Mood::Indicative, Tense::Present) => "presente",
            (Mood::Indicative, Tense::Imperfect) => "imperfetto",
            (Mood::Indicative, Tense::Preterite) => "passato-remoto",
            (Mood::Indicative, Tense::Future) => "futuro",
            (Mood::Indicative, Tense::Perfect) => "passato-prossimo",
            (Mood::Indicative, Tense::Pluperfect) => "trapassato-prossimo",
            (Mood::Indicative, Tense::PastAnterior) => "trapassato-remoto",
            (Mood::Indicative, Tense::FuturePerfect) => "futuro-anteriore",
            (Mood::Subjunctive, Tense::Present) => "presente",
            (Mood::Subjunctive, Tense::Imperfect) => "imperfetto",
            (Mood::Subjunctive, Tense::Perfect | Tense::Past) => "passato",
            (Mood::Subjunctive, Tense::Pluperfect) => "trapassato",
            (Mood::Conditional, Tense::Present) => "presente",
            (Mood::Conditional, Tense::Perfect | Tense::Past) => "passato",
            (Mood::Imperative, Tense::Present) => IMPERATIVE_PRESENT,
            (Mood::Participle, Tense::Present) => "participio-presente",
            (Mood::Participle, Tense::Past) => "participio-passato",
            (Mood::Gerund, Tense::Present) => "gerundio-presente",
            _ => return None,
        };
        Some(name)
    }

    fn tense_alias(&self, mood: &str, name: &str) -> Option<&'static str> {
        match (mood, name) {
            (INDICATIVE, "futuro-semplice") => Some("futuro"),
            (IMPERATIVE, "presente") => Some(IMPERATIVE_PRESENT),
            _ => None,
        }
    }

    fn subject_pronoun(&self, person: Person, gender: Gender, _dialect: DialectOptions) -> &'static str {
        match (person, gender) {
            (Person::FirstSingular, _) => "io",
            (Person::SecondSingular, _) => "tu",
            (Person::ThirdSingular, Gender::Masculine) => "lui",
            (Person::ThirdSingular, Gender::Feminine) => "lei",
            (Person::FirstPlural, _) => "noi",
            (Person::SecondPlural, _) => "voi",
            (Person::ThirdPlural, _) => "loro",
            _ => "",
        }
    }

    fn reflexive_pronoun(&self, person: Person) -> &'static str {
        match person {
            Person::FirstSingular => "mi",
            Person::SecondSingular => "ti",
            Person::FirstPlural => "ci",
            Person::SecondPlural => "vi",
            _ => "si",
        }
    }

    /// `"porsi"` gives `"porre"`, `"lavarsi"` gives `"lavare"`.
    fn split_reflexive(&self, infinitive: &str) -> (bool, String) {
        let trimmed = infinitive.trim();
        match trimmed.strip_suffix("si") {
            Some(base) if base.ends_with("or") || base.ends_with("ur") => (true, format!("{}re", base)),
            Some(base) if base.ends_with('r') => (true, format!("{}e", base)),
            _ => (false, trimmed.to_string()),
        }
    }

    fn add_reflexive_pronoun(&self, infinitive: &str) -> String {
        let base = infinitive
            .strip_suffix("rre")
            .map(|stem| format!("{}r", stem))
            .unwrap_or_else(|| infinitive.strip_suffix('e').unwrap_or(infinitive).to_string());
        format!("{}si", base)
    }

    /// `"trarsi"` may be `trare` or `trarre`.
    fn reflexive_base_candidates(&self, infinitive: &str) -> (bool, Vec<String>) {
        let (is_reflexive, base) = self.split_reflexive(infinitive);
        if is_reflexive && base.ends_with("are") {
            let contracted = format!("{}re", &base[..base.len() - 1]);
            return (true, vec![base, contracted]);
        }
        (is_reflexive, vec![base])
    }

    fn add_reflexive_clitic(&self, form: &str, mood: &str, tense: &str, person: Person) -> String {
        match (mood, tense) {
            (INFINITIVE, _) => self.add_reflexive_pronoun(form),
            (GERUND, _) => format!("{}si", form),
            (IMPERATIVE, _) => match person {
                Person::ThirdSingular | Person::ThirdPlural => format!("si {}", form),
                other => format!("{}{}", form, self.reflexive_pronoun(other)),
            },
            _ => form.to_string(),
        }
    }

    fn non_reflexive_verbs(&self) -> &'static [&'static str] {
        &["avere", "essere"]
    }

    fn tenses_conjugated_without_pronoun(&self) -> &'static [(&'static str, &'static str)] {
        WITHOUT_PRONOUN
    }

    fn compound_tenses(&self) -> &'static [CompoundTense] {
        COMPOUNDS
    }

    fn auxiliary_verb(&self, infinitive: &str, is_reflexive: bool, _mood: &str, _tense: &str) -> &'static str {
        if is_reflexive || ESSERE_VERBS.contains(&infinitive) {
            "essere"
        } else {
            "avere"
        }
    }

    fn is_auxiliary_inflected(&self, auxiliary: &str) -> bool {
        auxiliary == "essere"
    }

    fn subjunctive_relative_pronoun(&self, form: &str, _tense: &str) -> String {
        format!("che {}", form)
    }

    /// Variant infinitives (`compiere` / `compire`) share one template.
    fn stem_matching(&self) -> StemMatch {
        StemMatch::Relaxed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reflexive_forms() {
        let it = Italian;
        assert_eq!(it.add_reflexive_pronoun("lavare"), "lavarsi");
        assert_eq!(it.add_reflexive_pronoun("porre"), "porsi");
        assert_eq!(it.add_reflexive_pronoun("condurre"), "condursi");
        assert_eq!(it.split_reflexive("porsi"), (true, "porre".to_string()));
        assert_eq!(it.split_reflexive("condursi"), (true, "condurre".to_string()));
        assert_eq!(it.split_reflexive("lavarsi"), (true, "lavare".to_string()));
        assert_eq!(it.split_reflexive("parlare"), (false, "parlare".to_string()));
        assert_eq!(
            it.reflexive_base_candidates("trarsi"),
            (true, vec!["trare".to_string(), "trarre".to_string()])
        );
        assert_eq!(it.reflexive_base_candidates("porsi"), (true, vec!["porre".to_string()]));
        assert_eq!(it.add_reflexive_clitic("porre", INFINITIVE, "infinito-presente", Person::Invariant), "porsi");
        assert_eq!(it.add_reflexive_clitic("lava", IMPERATIVE, IMPERATIVE_PRESENT, Person::SecondSingular), "lavati");
        assert_eq!(it.add_reflexive_clitic("lavi", IMPERATIVE, IMPERATIVE_PRESENT, Person::ThirdSingular), "si lavi");
        assert_eq!(it.add_reflexive_clitic("lavando", GERUND, "gerundio-presente", Person::Invariant), "lavandosi");
    }

    #[test]
    fn test_essere_verbs() {
        assert_eq!(Italian.auxiliary_verb("andare", false, INDICATIVE, "passato-prossimo"), "essere");
        assert_eq!(Italian.auxiliary_verb("parlare", false, INDICATIVE, "passato-prossimo"), "avere");
    }

    proptest! {
        #[test]
        fn test_reflexive_symmetry(stem in "[a-z]{1,8}", ending in "(are|ere|ire|arre|orre|urre)") {
            let verb = format!("{}{}", stem, ending);
            let with = Italian.add_reflexive_pronoun(&verb);
            let (is_reflexive, candidates) = Italian.reflexive_base_candidates(&with);
            prop_assert!(is_reflexive);
            prop_assert!(candidates.contains(&verb), "{} -> {} -> {:?}", verb, with, candidates);
        }
    }
}
