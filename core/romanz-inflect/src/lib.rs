pub mod compound;
pub mod lang;

use std::borrow::Cow;

use romanz_morph::StemMatch;
use romanz_protocol::{
    ConjugationTemplate, DialectOptions, Gender, Lang, Mood, Person, PersonEnding, Tense,
    TenseTemplate,
};

pub use compound::{CompoundShape, CompoundTense};
pub use lang::{Catalan, French, Italian, Portuguese, Romanian, Spanish};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InflectError {
    #[error("{lang} inflector does not implement dialect options {options:?}")]
    NotImplemented { lang: Lang, options: DialectOptions },
}

/// Every language-specific rule of the conjugation engine.
///
/// Mood and tense arguments are the language's own names as they appear in
/// the template data. Hooks with a default body are no-ops for languages
/// that have no such rule.
pub trait Inflector: Send + Sync {
    fn lang(&self) -> Lang;

    // --- Names

    fn mood_name(&self, mood: Mood) -> &'static str;

    fn tense_name(&self, mood: Mood, tense: Tense) -> Option<&'static str>;

    /// Alternate spelling accepted for a mood name.
    fn mood_alias(&self, _name: &str) -> Option<&'static str> {
        None
    }

    /// Alternate spelling accepted for a tense name within `mood`.
    fn tense_alias(&self, _mood: &str, _name: &str) -> Option<&'static str> {
        None
    }

    fn infinitive_mood(&self) -> &'static str {
        self.mood_name(Mood::Infinitive)
    }

    fn indicative_mood(&self) -> &'static str {
        self.mood_name(Mood::Indicative)
    }

    fn subjunctive_mood(&self) -> &'static str {
        self.mood_name(Mood::Subjunctive)
    }

    /// `(mood, tense)` holding the bare infinitive.
    fn infinitive_tense(&self) -> (&'static str, &'static str) {
        let mood = self.mood_name(Mood::Infinitive);
        (mood, self.tense_name(Mood::Infinitive, Tense::Present).unwrap_or(mood))
    }

    /// `(mood, tense)` holding the past participle used by compound tenses.
    fn past_participle(&self) -> (&'static str, &'static str) {
        let mood = self.mood_name(Mood::Participle);
        (mood, self.tense_name(Mood::Participle, Tense::Past).unwrap_or(mood))
    }

    fn indicative_present(&self) -> (&'static str, &'static str) {
        let mood = self.mood_name(Mood::Indicative);
        (mood, self.tense_name(Mood::Indicative, Tense::Present).unwrap_or(mood))
    }

    // --- Pronouns

    fn supported_dialects(&self) -> DialectOptions {
        DialectOptions::empty()
    }

    fn check_dialect(&self, options: DialectOptions) -> Result<(), InflectError> {
        let unsupported = options.difference(self.supported_dialects());
        if unsupported.is_empty() {
            Ok(())
        } else {
            Err(InflectError::NotImplemented {
                lang: self.lang(),
                options: unsupported,
            })
        }
    }

    /// Subject pronoun; empty for participle slots and invariant forms.
    fn subject_pronoun(&self, person: Person, gender: Gender, dialect: DialectOptions) -> &'static str;

    fn reflexive_pronoun(&self, person: Person) -> &'static str;

    fn default_pronoun(
        &self,
        person: Person,
        gender: Gender,
        is_reflexive: bool,
        dialect: DialectOptions,
    ) -> Result<String, InflectError> {
        self.check_dialect(dialect)?;
        let subject = self.subject_pronoun(person, gender, dialect);
        if is_reflexive {
            Ok(join_words(subject, self.reflexive_pronoun(person)))
        } else {
            Ok(subject.to_string())
        }
    }

    /// Joins a pronoun group and a verb form, applying elision.
    fn combine_pronoun_and_form(&self, pronoun: &str, form: &str) -> String {
        join_words(pronoun, form)
    }

    // --- Reflexives

    /// `"se laver"` gives `(true, "laver")`.
    fn split_reflexive(&self, infinitive: &str) -> (bool, String);

    /// Inverse of [`Inflector::split_reflexive`].
    fn add_reflexive_pronoun(&self, infinitive: &str) -> String;

    /// Every base infinitive the input may stand for, most likely first.
    /// Languages whose reflexive infinitive drops letters of the base yield
    /// more than one candidate.
    fn reflexive_base_candidates(&self, infinitive: &str) -> (bool, Vec<String>) {
        let (is_reflexive, base) = self.split_reflexive(infinitive);
        (is_reflexive, vec![base])
    }

    /// Attaches the reflexive clitic to a form of a pronoun-less tense.
    fn add_reflexive_clitic(&self, form: &str, _mood: &str, _tense: &str, _person: Person) -> String {
        form.to_string()
    }

    fn add_present_participle_prefix(&self, form: &str, _mood: &str, _tense: &str, _is_reflexive: bool) -> String {
        form.to_string()
    }

    /// Verbs lacking some of the six persons in the indicative present.
    fn is_impersonal_verb(&self, template: &ConjugationTemplate) -> bool {
        let (mood, tense) = self.indicative_present();
        template
            .tense(mood, tense)
            .map(|t| t.persons().filter(|p| p.grammatical_index().is_some()).count() < 6)
            .unwrap_or(false)
    }

    fn non_reflexive_verbs(&self) -> &'static [&'static str] {
        &[]
    }

    fn verb_can_be_reflexive(&self, infinitive: &str, template: &ConjugationTemplate) -> bool {
        !self.is_impersonal_verb(template) && !self.non_reflexive_verbs().contains(&infinitive)
    }

    // --- Tense shapes

    fn tenses_conjugated_without_pronoun(&self) -> &'static [(&'static str, &'static str)];

    fn conjugates_without_pronoun(&self, mood: &str, tense: &str) -> bool {
        self.tenses_conjugated_without_pronoun()
            .iter()
            .any(|(m, t)| *m == mood && *t == tense)
    }

    fn compound_tenses(&self) -> &'static [CompoundTense];

    fn compound_tense(&self, mood: &str, tense: &str) -> Option<&'static CompoundTense> {
        self.compound_tenses()
            .iter()
            .find(|c| c.mood == mood && c.tense == tense)
    }

    fn auxiliary_verb(&self, infinitive: &str, is_reflexive: bool, mood: &str, tense: &str) -> &'static str;

    /// Whether the participle agrees with the subject after this auxiliary.
    fn is_auxiliary_inflected(&self, _auxiliary: &str) -> bool {
        false
    }

    /// Irregular auxiliary forms, by subject person, used instead of
    /// conjugating the auxiliary verb for this compound tense.
    fn auxiliary_override(&self, _mood: &str, _tense: &str) -> Option<&'static [&'static str; 6]> {
        None
    }

    fn participle_inflection_for(&self, person: Person, gender: Gender) -> Person {
        person.participle_slot(gender)
    }

    // --- Mood-level decoration

    fn subjunctive_relative_pronoun(&self, form: &str, _tense: &str) -> String {
        form.to_string()
    }

    fn adverb_or_negation(&self, form: &str, _mood: &str, _tense: &str) -> String {
        form.to_string()
    }

    // --- Endings

    /// Rewrites an ending for the requested dialect. `tense` is the template
    /// the ending belongs to, for rules derived from another person.
    fn modify_person_ending<'a>(
        &self,
        ending: &'a PersonEnding,
        _tense: &TenseTemplate,
        _mood: &str,
        dialect: DialectOptions,
    ) -> Result<Cow<'a, PersonEnding>, InflectError> {
        self.check_dialect(dialect)?;
        Ok(Cow::Borrowed(ending))
    }

    fn stem_matching(&self) -> StemMatch {
        StemMatch::Exact
    }
}

/// The inflector for `lang`.
pub fn inflector_for(lang: Lang) -> Box<dyn Inflector> {
    match lang {
        Lang::Fr => Box::new(French),
        Lang::Es => Box::new(Spanish),
        Lang::It => Box::new(Italian),
        Lang::Pt => Box::new(Portuguese),
        Lang::Ca => Box::new(Catalan),
        Lang::Ro => Box::new(Romanian),
    }
}

pub(crate) fn join_words(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{} {}", left, right),
    }
}

/// Splits off the last word of a pronoun group: `"je me"` gives
/// `("je ", "me")`.
pub(crate) fn split_last_word(text: &str) -> (&str, &str) {
    match text.rfind(' ') {
        Some(idx) => (&text[..=idx], &text[idx + 1..]),
        None => ("", text),
    }
}

pub(crate) fn starts_with_vowel(text: &str) -> bool {
    text.chars()
        .next()
        .map(|c| romanz_protocol::strip_accents(&c.to_string()))
        .is_some_and(|c| matches!(c.as_str(), "a" | "e" | "i" | "o" | "u" | "y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_binds_language() {
        for lang in Lang::ALL {
            assert_eq!(inflector_for(lang).lang(), lang);
        }
    }

    #[test]
    fn test_unsupported_dialect_is_not_implemented() {
        let french = inflector_for(Lang::Fr);
        let err = french
            .default_pronoun(Person::SecondSingular, Gender::Masculine, false, DialectOptions::VOSEO)
            .unwrap_err();
        assert_eq!(
            err,
            InflectError::NotImplemented {
                lang: Lang::Fr,
                options: DialectOptions::VOSEO
            }
        );
    }

    #[test]
    fn test_every_compound_refers_to_named_moods() {
        for lang in Lang::ALL {
            let inflector = inflector_for(lang);
            let moods: Vec<&str> = [
                Mood::Infinitive,
                Mood::Indicative,
                Mood::Subjunctive,
                Mood::Conditional,
                Mood::Imperative,
                Mood::Participle,
                Mood::Gerund,
            ]
            .into_iter()
            .map(|m| inflector.mood_name(m))
            .collect();
            for compound in inflector.compound_tenses() {
                assert!(moods.contains(&compound.mood), "{lang}: {}", compound.mood);
                assert!(moods.contains(&compound.aux_mood), "{lang}: {}", compound.aux_mood);
            }
        }
    }

    #[test]
    fn test_helpers() {
        assert_eq!(split_last_word("je me"), ("je ", "me"));
        assert_eq!(split_last_word("je"), ("", "je"));
        assert_eq!(join_words("", "mange"), "mange");
        assert!(starts_with_vowel("été"));
        assert!(!starts_with_vowel("hache"));
    }
}
