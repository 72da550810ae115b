use std::borrow::Cow;

use romanz_protocol::{
    text::has_accents, DialectOptions, Gender, Lang, Mood, Person, PersonEnding, Tense,
    TenseTemplate,
};

use crate::compound::CompoundTense;
use crate::{InflectError, Inflector};

const INFINITIVE: &str = "infinitivo";
const INDICATIVE: &str = "indicativo";
const SUBJUNCTIVE: &str = "subjuntivo";
const CONDITIONAL: &str = "condicional";
const IMPERATIVE: &str = "imperativo";
const PARTICIPLE: &str = "participo";
const GERUND: &str = "gerundio";

const AFFIRMATIVE: &str = "afirmativo";
const NEGATIVE: &str = "negativo";

const COMPOUNDS: &[CompoundTense] = &[
    CompoundTense::standard(INDICATIVE, "pretérito-perfecto-compuesto", INDICATIVE, "presente"),
    CompoundTense::standard(INDICATIVE, "pretérito-pluscuamperfecto", INDICATIVE, "pretérito-imperfecto"),
    CompoundTense::standard(INDICATIVE, "pretérito-anterior", INDICATIVE, "pretérito-perfecto-simple"),
    CompoundTense::standard(INDICATIVE, "futuro-perfecto", INDICATIVE, "futuro"),
    CompoundTense::standard(SUBJUNCTIVE, "pretérito-perfecto", SUBJUNCTIVE, "presente"),
    CompoundTense::standard(SUBJUNCTIVE, "pretérito-pluscuamperfecto-1", SUBJUNCTIVE, "pretérito-imperfecto-1"),
    CompoundTense::standard(SUBJUNCTIVE, "pretérito-pluscuamperfecto-2", SUBJUNCTIVE, "pretérito-imperfecto-2"),
    CompoundTense::standard(SUBJUNCTIVE, "futuro-perfecto", SUBJUNCTIVE, "futuro"),
    CompoundTense::standard(CONDITIONAL, "perfecto", CONDITIONAL, "presente"),
];

const WITHOUT_PRONOUN: &[(&str, &str)] = &[
    (INFINITIVE, INFINITIVE),
    (GERUND, GERUND),
    (PARTICIPLE, PARTICIPLE),
    (IMPERATIVE, AFFIRMATIVE),
    (IMPERATIVE, NEGATIVE),
];

pub struct Spanish;

fn accented(c: char) -> char {
    match c {
        'a' => 'á',
        'e' => 'é',
        'i' => 'í',
        'o' => 'ó',
        'u' => 'ú',
        other => other,
    }
}

fn unaccented(c: char) -> char {
    match c {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' => 'u',
        other => other,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(unaccented(c), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Writes the accent on the naturally stressed vowel of a word that ends in a
/// vowel, `n` or `s` (penultimate syllable).
fn mark_penultimate_stress(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let mut groups: Vec<(usize, usize)> = Vec::new();
    let mut idx = 0;
    while idx < chars.len() {
        if is_vowel(chars[idx]) {
            let start = idx;
            while idx < chars.len() && is_vowel(chars[idx]) {
                idx += 1;
            }
            groups.push((start, idx));
        } else {
            idx += 1;
        }
    }
    let Some(&(start, end)) = groups.len().checked_sub(2).and_then(|g| groups.get(g)) else {
        return word.to_string();
    };
    let pos = (start..end)
        .find(|i| matches!(chars[*i], 'a' | 'e' | 'o'))
        .unwrap_or(end - 1);
    chars[pos] = accented(chars[pos]);
    chars.into_iter().collect()
}

/// Appends an enclitic pronoun keeping the stress where it was.
fn with_enclitic(form: &str, clitic: &str) -> String {
    let last = form.chars().last();
    match last {
        Some(c) if c != unaccented(c) => {
            // vos imperative: hablá + te -> hablate
            let mut base: String = form.chars().take(form.chars().count() - 1).collect();
            base.push(unaccented(c));
            format!("{}{}", base, clitic)
        }
        _ if has_accents(form) => format!("{}{}", form, clitic),
        Some(c) if is_vowel(c) || c == 'n' || c == 's' => {
            format!("{}{}", mark_penultimate_stress(form), clitic)
        }
        _ => format!("{}{}", form, clitic),
    }
}

/// `áis` -> `ás`, `éis` -> `és`, `ois` -> `os`; other endings unchanged.
fn drop_medial_i(ending: &str) -> String {
    match ending.strip_suffix("is") {
        Some(head) if head.chars().last().is_some_and(is_vowel) => format!("{}s", head),
        _ => ending.to_string(),
    }
}

/// `ad` -> `á`, `ed` -> `é`, `id` -> `í`.
fn drop_final_d(ending: &str) -> String {
    match ending.strip_suffix('d') {
        Some(head) => {
            let mut chars: Vec<char> = head.chars().collect();
            if let Some(last) = chars.last_mut() {
                *last = accented(*last);
            }
            chars.into_iter().collect()
        }
        None => ending.to_string(),
    }
}

fn strip_accent_chars(ending: &str) -> String {
    ending.chars().map(unaccented).collect()
}

impl Inflector for Spanish {
    fn lang(&self) -> Lang {
        Lang::Es
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
            (Mood::Indicative, Tense::Present) => "presente",
            (Mood::Indicative, Tense::Imperfect) => "pretérito-imperfecto",
            (Mood::Indicative, Tense::Preterite) => "pretérito-perfecto-simple",
            (Mood::Indicative, Tense::Future) => "futuro",
            (Mood::Indicative, Tense::Perfect) => "pretérito-perfecto-compuesto",
            (Mood::Indicative, Tense::Pluperfect) => "pretérito-pluscuamperfecto",
            (Mood::Indicative, Tense::PastAnterior) => "pretérito-anterior",
            (Mood::Indicative, Tense::FuturePerfect) => "futuro-perfecto",
            (Mood::Subjunctive, Tense::Present) => "presente",
            (Mood::Subjunctive, Tense::Imperfect) => "pretérito-imperfecto-1",
            (Mood::Subjunctive, Tense::ImperfectAlt) => "pretérito-imperfecto-2",
            (Mood::Subjunctive, Tense::Future) => "futuro",
            (Mood::Subjunctive, Tense::Perfect | Tense::Past) => "pretérito-perfecto",
            (Mood::Subjunctive, Tense::Pluperfect) => "pretérito-pluscuamperfecto-1",
            (Mood::Subjunctive, Tense::PluperfectAlt) => "pretérito-pluscuamperfecto-2",
            (Mood::Subjunctive, Tense::FuturePerfect) => "futuro-perfecto",
            (Mood::Conditional, Tense::Present) => "presente",
            (Mood::Conditional, Tense::Perfect | Tense::Past) => "perfecto",
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
            "participio" => Some(PARTICIPLE),
            "imperativo-afirmativo" => Some(IMPERATIVE),
            _ => None,
        }
    }

    fn tense_alias(&self, mood: &str, name: &str) -> Option<&'static str> {
        match (mood, name) {
            (PARTICIPLE, "participio") => Some(PARTICIPLE),
            (IMPERATIVE, "imperativo-afirmativo") => Some(AFFIRMATIVE),
            (IMPERATIVE, "imperativo-negativo") => Some(NEGATIVE),
            (INDICATIVE, "pretérito-indefinido") => Some("pretérito-perfecto-simple"),
            _ => None,
        }
    }

    fn supported_dialects(&self) -> DialectOptions {
        DialectOptions::VOSEO
    }

    fn subject_pronoun(&self, person: Person, gender: Gender, dialect: DialectOptions) -> &'static str {
        match (person, gender) {
            (Person::FirstSingular, _) => "yo",
            (Person::SecondSingular, _) if dialect.contains(DialectOptions::VOSEO) => "vos",
            (Person::SecondSingular, _) => "tú",
            (Person::ThirdSingular, Gender::Masculine) => "él",
            (Person::ThirdSingular, Gender::Feminine) => "ella",
            (Person::FirstPlural, Gender::Masculine) => "nosotros",
            (Person::FirstPlural, Gender::Feminine) => "nosotras",
            (Person::SecondPlural, Gender::Masculine) => "vosotros",
            (Person::SecondPlural, Gender::Feminine) => "vosotras",
            (Person::ThirdPlural, Gender::Masculine) => "ellos",
            (Person::ThirdPlural, Gender::Feminine) => "ellas",
            _ => "",
        }
    }

    fn reflexive_pronoun(&self, person: Person) -> &'static str {
        match person {
            Person::FirstSingular => "me",
            Person::SecondSingular => "te",
            Person::FirstPlural => "nos",
            Person::SecondPlural => "os",
            _ => "se",
        }
    }

    fn split_reflexive(&self, infinitive: &str) -> (bool, String) {
        let trimmed = infinitive.trim();
        match trimmed.strip_suffix("se") {
            Some(base) if ["ar", "er", "ir", "ír"].iter().any(|e| base.ends_with(e)) => {
                (true, base.to_string())
            }
            _ => (false, trimmed.to_string()),
        }
    }

    fn add_reflexive_pronoun(&self, infinitive: &str) -> String {
        format!("{}se", infinitive)
    }

    fn add_reflexive_clitic(&self, form: &str, mood: &str, tense: &str, person: Person) -> String {
        match (mood, tense) {
            (INFINITIVE, _) => self.add_reflexive_pronoun(form),
            (GERUND, _) => with_enclitic(form, "se"),
            (IMPERATIVE, AFFIRMATIVE) => match person {
                Person::FirstPlural => with_enclitic(form.strip_suffix('s').unwrap_or(form), "nos"),
                Person::SecondPlural => match form.strip_suffix("id") {
                    Some(head) => format!("{}íos", head),
                    None => format!("{}os", form.strip_suffix('d').unwrap_or(form)),
                },
                other => with_enclitic(form, self.reflexive_pronoun(other)),
            },
            (IMPERATIVE, NEGATIVE) => format!("{} {}", self.reflexive_pronoun(person), form),
            _ => form.to_string(),
        }
    }

    fn non_reflexive_verbs(&self) -> &'static [&'static str] {
        &["haber", "ser"]
    }

    fn tenses_conjugated_without_pronoun(&self) -> &'static [(&'static str, &'static str)] {
        WITHOUT_PRONOUN
    }

    fn compound_tenses(&self) -> &'static [CompoundTense] {
        COMPOUNDS
    }

    fn auxiliary_verb(&self, _infinitive: &str, _is_reflexive: bool, _mood: &str, _tense: &str) -> &'static str {
        "haber"
    }

    fn adverb_or_negation(&self, form: &str, mood: &str, tense: &str) -> String {
        if mood == IMPERATIVE && tense == NEGATIVE {
            format!("no {}", form)
        } else {
            form.to_string()
        }
    }

    /// Voseo: the `vos` ending is derived from the `vosotros` ending of the
    /// same tense. Tenses not listed keep the `tú` ending.
    fn modify_person_ending<'a>(
        &self,
        ending: &'a PersonEnding,
        tense: &TenseTemplate,
        mood: &str,
        dialect: DialectOptions,
    ) -> Result<Cow<'a, PersonEnding>, InflectError> {
        self.check_dialect(dialect)?;
        if !dialect.contains(DialectOptions::VOSEO) || ending.person != Person::SecondSingular {
            return Ok(Cow::Borrowed(ending));
        }
        let Some(plural) = tense.person_ending(Person::SecondPlural) else {
            return Ok(Cow::Borrowed(ending));
        };
        let source = plural.ending();
        let vos = match (mood, tense.name.as_str()) {
            (INDICATIVE, "presente") => drop_medial_i(source),
            (IMPERATIVE, AFFIRMATIVE) => drop_final_d(source),
            (SUBJUNCTIVE, "presente") | (IMPERATIVE, NEGATIVE) => strip_accent_chars(&drop_medial_i(source)),
            _ => return Ok(Cow::Borrowed(ending)),
        };
        Ok(Cow::Owned(PersonEnding::new(Person::SecondSingular, vec![vos])))
    }
}
