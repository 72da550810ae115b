use std::borrow::Cow;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use romanz_inflect::{inflector_for, CompoundShape, CompoundTense, Inflector};
use romanz_morph::{apply_ending, verb_stem, PLACEHOLDER};
use romanz_protocol::{
    strip_accents, AlternatesMode, ConjugationTemplate, DialectOptions, Gender, Lang, Mood,
    MoodTemplate, Person, StemModifier, Tense, TenseTemplate, Verb,
};

use crate::error::{ConjugatorError, DatasetError};
use crate::repository::Repository;

/// Per-call generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConjugateOptions {
    pub alternates: AlternatesMode,
    /// Gender of subject pronouns and agreeing participles.
    pub gender: Gender,
    pub conjugate_pronouns: bool,
    pub dialect: DialectOptions,
}

impl Default for ConjugateOptions {
    fn default() -> Self {
        Self {
            alternates: AlternatesMode::First,
            gender: Gender::Masculine,
            conjugate_pronouns: true,
            dialect: DialectOptions::empty(),
        }
    }
}

impl ConjugateOptions {
    pub fn include_alternates(mut self, include: bool) -> Self {
        self.alternates = if include {
            AlternatesMode::All
        } else {
            AlternatesMode::First
        };
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn pronouns(mut self, conjugate_pronouns: bool) -> Self {
        self.conjugate_pronouns = conjugate_pronouns;
        self
    }

    pub fn dialect(mut self, dialect: DialectOptions) -> Self {
        self.dialect = dialect;
        self
    }
}

/// One person slot: a single spelling, or every spelling with
/// [`AlternatesMode::All`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Inflection {
    Single(String),
    Variants(Vec<String>),
}

impl Inflection {
    fn from_forms(mode: AlternatesMode, mut forms: Vec<String>) -> Self {
        match mode {
            AlternatesMode::All => Inflection::Variants(forms),
            _ if forms.is_empty() => Inflection::Single(String::new()),
            _ => Inflection::Single(forms.swap_remove(0)),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Inflection::Single(form) => Some(form),
            Inflection::Variants(_) => None,
        }
    }

    pub fn forms(&self) -> &[String] {
        match self {
            Inflection::Single(form) => std::slice::from_ref(form),
            Inflection::Variants(forms) => forms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerbInfo {
    pub infinitive: String,
    pub translation: Option<String>,
    pub template: String,
    pub stem: String,
    pub predicted: bool,
    pub pred_score: f32,
}

/// Every mood and tense of one verb, in template declaration order with
/// compound tenses after the simple ones of their mood.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conjugation {
    pub verb: VerbInfo,
    pub moods: IndexMap<String, IndexMap<String, Vec<Inflection>>>,
}

impl Conjugation {
    pub fn tense(&self, mood: &str, tense: &str) -> Option<&[Inflection]> {
        self.moods.get(mood)?.get(tense).map(Vec::as_slice)
    }
}

struct ConjugationObjects<'r> {
    verb: Cow<'r, Verb>,
    template: &'r ConjugationTemplate,
    verb_stem: String,
    is_reflexive: bool,
}

enum TenseKind<'t> {
    Simple(&'t TenseTemplate),
    Compound(&'static CompoundTense),
}

/// Raw forms of one person slot, before alternates are folded.
type PersonForms = (Person, Vec<String>);

/// Conjugates the verbs of one language.
pub struct Conjugator {
    repository: Repository,
    inflector: Box<dyn Inflector>,
}

impl Conjugator {
    pub fn new(lang: Lang, repository: Repository) -> Result<Self, ConjugatorError> {
        Self::with_inflector(inflector_for(lang), repository)
    }

    pub fn with_inflector(inflector: Box<dyn Inflector>, repository: Repository) -> Result<Self, ConjugatorError> {
        if inflector.lang() != repository.lang() {
            return Err(DatasetError::LangMismatch {
                expected: inflector.lang(),
                found: repository.lang(),
            }
            .into());
        }
        Ok(Self {
            repository,
            inflector,
        })
    }

    pub fn lang(&self) -> Lang {
        self.inflector.lang()
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn inflector(&self) -> &dyn Inflector {
        &*self.inflector
    }

    /// Every mood the verb's template declares, with all simple and compound
    /// tenses.
    pub fn conjugate(&self, infinitive: &str, options: &ConjugateOptions) -> Result<Conjugation, ConjugatorError> {
        self.inflector.check_dialect(options.dialect)?;
        let objects = self.resolve(infinitive)?;

        let mut moods = IndexMap::with_capacity(objects.template.moods.len());
        for mood in &objects.template.moods {
            let mut tenses = IndexMap::with_capacity(mood.tenses.len());
            for tense in &mood.tenses {
                let forms = self.simple_tense(&objects, &mood.name, tense, options)?;
                tenses.insert(tense.name.clone(), forms);
            }
            for compound in self.inflector.compound_tenses().iter().filter(|c| c.mood == mood.name) {
                let forms = self.compound_tense(&objects, compound, options)?;
                tenses.insert(compound.tense.to_string(), forms);
            }
            moods.insert(mood.name.clone(), tenses);
        }

        Ok(Conjugation {
            verb: VerbInfo {
                infinitive: objects.verb.infinitive.clone(),
                translation: objects.verb.translation.clone(),
                template: objects.template.name.clone(),
                stem: objects.verb_stem.clone(),
                predicted: objects.verb.predicted,
                pred_score: objects.verb.pred_score,
            },
            moods,
        })
    }

    /// A single tense, addressed by the language's own mood and tense names
    /// or their aliases.
    pub fn conjugate_mood_tense(
        &self,
        infinitive: &str,
        mood: &str,
        tense: &str,
        options: &ConjugateOptions,
    ) -> Result<Vec<Inflection>, ConjugatorError> {
        self.inflector.check_dialect(options.dialect)?;
        let objects = self.resolve(infinitive)?;
        let mood_template = self.resolve_mood(objects.template, mood)?;

        match self.resolve_tense(objects.template, mood_template, tense)? {
            TenseKind::Simple(tense) => self.simple_tense(&objects, &mood_template.name, tense, options),
            TenseKind::Compound(compound) => self.compound_tense(&objects, compound, options),
        }
    }

    /// A single tense, addressed by language-neutral concepts.
    pub fn conjugate_neutral(
        &self,
        infinitive: &str,
        mood: Mood,
        tense: Tense,
        options: &ConjugateOptions,
    ) -> Result<Vec<Inflection>, ConjugatorError> {
        let mood_name = self.inflector.mood_name(mood);
        match self.inflector.tense_name(mood, tense) {
            Some(tense_name) => self.conjugate_mood_tense(infinitive, mood_name, tense_name, options),
            None => {
                let objects = self.resolve(infinitive)?;
                Err(ConjugatorError::InvalidTense {
                    mood: mood_name.to_string(),
                    tense: format!("{:?}", tense),
                    template: objects.template.name.clone(),
                })
            }
        }
    }

    // --- Resolution

    fn resolve(&self, infinitive: &str) -> Result<ConjugationObjects<'_>, ConjugatorError> {
        let input = infinitive.trim().to_lowercase();
        let (is_reflexive, candidates) = self.inflector.reflexive_base_candidates(&input);
        let verb = match candidates.iter().find_map(|base| self.repository.find_known_verb(base)) {
            Some(verb) => Cow::Borrowed(verb),
            None => {
                let base = candidates.first().map_or(input.as_str(), String::as_str);
                self.repository.find_verb_by_infinitive(base)?
            }
        };
        let template = self.repository.find_template(&verb.template)?;

        if is_reflexive && !self.inflector.verb_can_be_reflexive(&verb.infinitive, template) {
            return Err(ConjugatorError::NotReflexive(infinitive.to_string()));
        }

        let verb_stem = verb_stem(&verb.infinitive, &template.name, self.inflector.stem_matching())?;
        debug!(
            "'{}' resolved to template '{}', stem '{}'{}",
            infinitive,
            template.name,
            verb_stem,
            if is_reflexive { " (reflexive)" } else { "" }
        );

        Ok(ConjugationObjects {
            verb,
            template,
            verb_stem,
            is_reflexive,
        })
    }

    fn resolve_mood<'t>(&self, template: &'t ConjugationTemplate, mood: &str) -> Result<&'t MoodTemplate, ConjugatorError> {
        template
            .mood(mood)
            .or_else(|| self.inflector.mood_alias(mood).and_then(|alias| template.mood(alias)))
            .ok_or_else(|| ConjugatorError::InvalidMood {
                mood: mood.to_string(),
                template: template.name.clone(),
            })
    }

    fn resolve_tense<'t>(
        &self,
        template: &ConjugationTemplate,
        mood: &'t MoodTemplate,
        tense: &str,
    ) -> Result<TenseKind<'t>, ConjugatorError> {
        let alias = self.inflector.tense_alias(&mood.name, tense);
        for name in std::iter::once(tense).chain(alias) {
            if let Some(simple) = mood.tense(name) {
                return Ok(TenseKind::Simple(simple));
            }
            if let Some(compound) = self.inflector.compound_tense(&mood.name, name) {
                return Ok(TenseKind::Compound(compound));
            }
        }
        Err(ConjugatorError::InvalidTense {
            mood: mood.name.clone(),
            tense: tense.to_string(),
            template: template.name.clone(),
        })
    }

    /// The stem loses its diacritics outside the infinitive mood when the
    /// template asks for it.
    fn stem_for<'o>(&self, objects: &'o ConjugationObjects<'_>, mood: &str) -> Cow<'o, str> {
        match objects.template.modify_stem {
            Some(StemModifier::StripAccents) if mood != self.inflector.infinitive_mood() => {
                Cow::Owned(strip_accents(&objects.verb_stem))
            }
            _ => Cow::Borrowed(&objects.verb_stem),
        }
    }

    // --- Simple tenses

    fn simple_tense(
        &self,
        objects: &ConjugationObjects<'_>,
        mood: &str,
        tense: &TenseTemplate,
        options: &ConjugateOptions,
    ) -> Result<Vec<Inflection>, ConjugatorError> {
        let stem = self.stem_for(objects, mood);
        let forms = self.simple_forms(&stem, mood, tense, objects.is_reflexive, options, true, true)?;
        Ok(fold_alternates(options.alternates, forms))
    }

    /// Forms of every person of `tense`. `mark_subjunctive` is off when the
    /// forms are the auxiliary part of a compound, which is marked as a whole;
    /// `dialect_endings` is off for auxiliaries, whose endings stay standard.
    #[allow(clippy::too_many_arguments)]
    fn simple_forms(
        &self,
        stem: &str,
        mood: &str,
        tense: &TenseTemplate,
        is_reflexive: bool,
        options: &ConjugateOptions,
        mark_subjunctive: bool,
        dialect_endings: bool,
    ) -> Result<Vec<PersonForms>, ConjugatorError> {
        let inflector = &*self.inflector;
        let pronoun_less = inflector.conjugates_without_pronoun(mood, &tense.name);
        let with_pronoun = options.conjugate_pronouns && !pronoun_less;
        let subjunctive = mark_subjunctive && mood == inflector.subjunctive_mood();

        let mut result = Vec::with_capacity(tense.person_endings.len());
        for original in &tense.person_endings {
            let person_ending = if dialect_endings {
                inflector.modify_person_ending(original, tense, mood, options.dialect)?
            } else {
                Cow::Borrowed(original)
            };
            let person = person_ending.person;

            let mut forms = Vec::new();
            for ending in options.alternates.select(&person_ending.endings) {
                let Some(form) = apply_ending(stem, ending) else {
                    forms.push(PLACEHOLDER.to_string());
                    continue;
                };

                let form = if with_pronoun {
                    let pronoun = inflector.default_pronoun(person, options.gender, is_reflexive, options.dialect)?;
                    let form = inflector.combine_pronoun_and_form(&pronoun, &form);
                    if subjunctive {
                        inflector.subjunctive_relative_pronoun(&form, &tense.name)
                    } else {
                        form
                    }
                } else if pronoun_less {
                    self.decorate_bare(&form, mood, &tense.name, person, is_reflexive)
                } else if is_reflexive {
                    inflector.combine_pronoun_and_form(inflector.reflexive_pronoun(person), &form)
                } else {
                    form
                };
                forms.push(form);
            }
            result.push((person, forms));
        }
        Ok(result)
    }

    /// Hooks for forms written without a subject pronoun.
    fn decorate_bare(&self, form: &str, mood: &str, tense: &str, person: Person, is_reflexive: bool) -> String {
        let inflector = &*self.inflector;
        let form = inflector.add_present_participle_prefix(form, mood, tense, is_reflexive);
        let form = if is_reflexive {
            inflector.add_reflexive_clitic(&form, mood, tense, person)
        } else {
            form
        };
        inflector.adverb_or_negation(&form, mood, tense)
    }

    // --- Compound tenses

    fn compound_tense(
        &self,
        objects: &ConjugationObjects<'_>,
        compound: &CompoundTense,
        options: &ConjugateOptions,
    ) -> Result<Vec<Inflection>, ConjugatorError> {
        let inflector = &*self.inflector;
        if let CompoundShape::NoPrimaryVerb(particle) = compound.shape {
            let forms = self.particle_forms(objects, compound, particle, options)?;
            return Ok(fold_alternates(options.alternates, forms));
        }

        let persons = self.compound_persons(objects.template, compound)?;
        let with_pronoun = options.conjugate_pronouns && !inflector.conjugates_without_pronoun(compound.mood, compound.tense);
        let auxiliary = inflector.auxiliary_verb(&objects.verb.infinitive, objects.is_reflexive, compound.mood, compound.tense);
        debug!("{} {}: auxiliary '{}', shape {:?}", compound.mood, compound.tense, auxiliary, compound.shape);

        // 1. Auxiliary part, with pronouns attached
        let heads: Vec<PersonForms> = match compound.shape {
            CompoundShape::NoAuxiliary(particle) => {
                let mut heads = Vec::with_capacity(persons.len());
                for &person in &persons {
                    let head = self.prefix_pronoun(person, particle, objects.is_reflexive, with_pronoun, options)?;
                    heads.push((person, vec![head]));
                }
                heads
            }
            _ => match inflector.auxiliary_override(compound.mood, compound.tense) {
                Some(forms) => {
                    let mut heads = Vec::with_capacity(persons.len());
                    for &person in &persons {
                        let Some(idx) = person.grammatical_index() else {
                            continue;
                        };
                        let head = self.prefix_pronoun(person, forms[idx], objects.is_reflexive, with_pronoun, options)?;
                        heads.push((person, vec![head]));
                    }
                    heads
                }
                None => self.auxiliary_forms(auxiliary, objects.is_reflexive, compound, &persons, with_pronoun, options)?,
            },
        };

        // 2. Primary verb part, then the two joined
        let agrees = compound.has_auxiliary() && inflector.is_auxiliary_inflected(auxiliary);
        let subjunctive = with_pronoun && compound.mood == inflector.subjunctive_mood();

        let mut result = Vec::with_capacity(heads.len());
        for (person, head_forms) in heads {
            let tails: Vec<Option<String>> = match compound.shape {
                CompoundShape::Infinitive => vec![Some(objects.verb.infinitive.clone())],
                CompoundShape::Particle(particle) => self
                    .participle(objects, person, agrees, options)?
                    .into_iter()
                    .map(|p| (p != PLACEHOLDER).then(|| format!("{} {}", particle, p)))
                    .collect(),
                _ => self
                    .participle(objects, person, agrees, options)?
                    .into_iter()
                    .map(|p| (p != PLACEHOLDER).then_some(p))
                    .collect(),
            };

            let mut forms = Vec::with_capacity(head_forms.len() * tails.len());
            for head in &head_forms {
                for tail in &tails {
                    let form = match tail {
                        Some(tail) if head != PLACEHOLDER => format!("{} {}", head, tail),
                        _ => {
                            forms.push(PLACEHOLDER.to_string());
                            continue;
                        }
                    };
                    forms.push(if subjunctive {
                        inflector.subjunctive_relative_pronoun(&form, compound.tense)
                    } else {
                        form
                    });
                }
            }
            result.push((person, forms));
        }
        Ok(fold_alternates(options.alternates, result))
    }

    /// Subject persons of a compound, from the verb's own auxiliary tense,
    /// else the indicative tense of that name, else the indicative present.
    fn compound_persons(&self, template: &ConjugationTemplate, compound: &CompoundTense) -> Result<Vec<Person>, ConjugatorError> {
        let inflector = &*self.inflector;
        let (present_mood, present_tense) = inflector.indicative_present();
        let source = template
            .tense(compound.aux_mood, compound.aux_tense)
            .or_else(|| template.tense(inflector.indicative_mood(), compound.aux_tense))
            .or_else(|| template.tense(present_mood, present_tense))
            .ok_or_else(|| ConjugatorError::InvalidTense {
                mood: compound.aux_mood.to_string(),
                tense: compound.aux_tense.to_string(),
                template: template.name.clone(),
            })?;
        Ok(source.persons().filter(|p| p.grammatical_index().is_some()).collect())
    }

    /// `word` preceded by the subject pronoun group, or by the bare reflexive
    /// clitic when pronouns are off.
    fn prefix_pronoun(
        &self,
        person: Person,
        word: &str,
        is_reflexive: bool,
        with_pronoun: bool,
        options: &ConjugateOptions,
    ) -> Result<String, ConjugatorError> {
        let inflector = &*self.inflector;
        let pronoun = if with_pronoun {
            inflector.default_pronoun(person, options.gender, is_reflexive, options.dialect)?
        } else if is_reflexive {
            inflector.reflexive_pronoun(person).to_string()
        } else {
            String::new()
        };
        Ok(inflector.combine_pronoun_and_form(&pronoun, word))
    }

    /// Conjugates the auxiliary verb in the compound's auxiliary tense,
    /// restricted to `persons`.
    fn auxiliary_forms(
        &self,
        auxiliary: &str,
        is_reflexive: bool,
        compound: &CompoundTense,
        persons: &[Person],
        with_pronoun: bool,
        options: &ConjugateOptions,
    ) -> Result<Vec<PersonForms>, ConjugatorError> {
        let aux_verb = self
            .repository
            .find_known_verb(auxiliary)
            .map(Cow::Borrowed)
            .ok_or_else(|| ConjugatorError::VerbNotFound(auxiliary.to_string()))?;
        let aux_template = self.repository.find_template(&aux_verb.template)?;
        let aux_tense = aux_template
            .tense(compound.aux_mood, compound.aux_tense)
            .ok_or_else(|| ConjugatorError::InvalidTense {
                mood: compound.aux_mood.to_string(),
                tense: compound.aux_tense.to_string(),
                template: aux_template.name.clone(),
            })?
            .restrict_to(persons);

        let aux_objects = ConjugationObjects {
            verb_stem: verb_stem(&aux_verb.infinitive, &aux_template.name, self.inflector.stem_matching())?,
            verb: aux_verb,
            template: aux_template,
            is_reflexive,
        };
        let stem = self.stem_for(&aux_objects, compound.aux_mood);
        let aux_options = ConjugateOptions {
            conjugate_pronouns: with_pronoun,
            ..*options
        };
        self.simple_forms(&stem, compound.aux_mood, &aux_tense, is_reflexive, &aux_options, false, false)
    }

    /// Past participle forms agreeing with `person` when the auxiliary
    /// inflects, else the invariant first slot.
    fn participle(
        &self,
        objects: &ConjugationObjects<'_>,
        person: Person,
        agrees: bool,
        options: &ConjugateOptions,
    ) -> Result<Vec<String>, ConjugatorError> {
        let (mood, tense) = self.inflector.past_participle();
        let participle = objects
            .template
            .tense(mood, tense)
            .ok_or_else(|| ConjugatorError::InvalidTense {
                mood: mood.to_string(),
                tense: tense.to_string(),
                template: objects.template.name.clone(),
            })?;

        let first = participle.person_endings.first();
        let slot = if agrees {
            let wanted = self.inflector.participle_inflection_for(person, options.gender);
            participle.person_ending(wanted).or(first)
        } else {
            first
        };
        let Some(slot) = slot else {
            return Ok(vec![PLACEHOLDER.to_string()]);
        };

        let stem = self.stem_for(objects, mood);
        Ok(options
            .alternates
            .select(&slot.endings)
            .iter()
            .map(|ending| apply_ending(&stem, ending).unwrap_or_else(|| PLACEHOLDER.to_string()))
            .collect())
    }

    /// The verb's own `(aux_mood, aux_tense)` forms with `particle` after the
    /// subject pronoun.
    fn particle_forms(
        &self,
        objects: &ConjugationObjects<'_>,
        compound: &CompoundTense,
        particle: &str,
        options: &ConjugateOptions,
    ) -> Result<Vec<PersonForms>, ConjugatorError> {
        let inflector = &*self.inflector;
        let tense = objects
            .template
            .tense(compound.aux_mood, compound.aux_tense)
            .ok_or_else(|| ConjugatorError::InvalidTense {
                mood: compound.aux_mood.to_string(),
                tense: compound.aux_tense.to_string(),
                template: objects.template.name.clone(),
            })?;
        let stem = self.stem_for(objects, compound.aux_mood);

        let mut result = Vec::with_capacity(tense.person_endings.len());
        for original in tense.person_endings.iter().filter(|pe| pe.person.grammatical_index().is_some()) {
            let person_ending = inflector.modify_person_ending(original, tense, compound.aux_mood, options.dialect)?;
            let person = person_ending.person;

            let subject = if options.conjugate_pronouns {
                inflector.subject_pronoun(person, options.gender, options.dialect)
            } else {
                ""
            };
            let mut group = join(subject, particle);
            if objects.is_reflexive {
                group = join(&group, inflector.reflexive_pronoun(person));
            }

            let forms = options
                .alternates
                .select(&person_ending.endings)
                .iter()
                .map(|ending| match apply_ending(&stem, ending) {
                    Some(form) => inflector.combine_pronoun_and_form(&group, &form),
                    None => PLACEHOLDER.to_string(),
                })
                .collect();
            result.push((person, forms));
        }
        Ok(result)
    }
}

fn join(left: &str, right: &str) -> String {
    if left.is_empty() {
        right.to_string()
    } else {
        format!("{} {}", left, right)
    }
}

fn fold_alternates(mode: AlternatesMode, forms: Vec<PersonForms>) -> Vec<Inflection> {
    forms
        .into_iter()
        .map(|(_, forms)| Inflection::from_forms(mode, forms))
        .collect()
}
