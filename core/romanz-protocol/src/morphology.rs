use core::fmt;
use core::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

use crate::ParseError;

/// Grammatical person of a conjugated form, or the agreement slot of a
/// participle. The declaration order is the canonical ordering used by every
/// tense template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Person {
    FirstSingular = 0,
    SecondSingular = 1,
    ThirdSingular = 2,
    FirstPlural = 3,
    SecondPlural = 4,
    ThirdPlural = 5,
    MasculineSingular = 6,
    MasculinePlural = 7,
    FeminineSingular = 8,
    FemininePlural = 9,
    /// Single-form tenses (infinitive, gerund).
    Invariant = 10,
}

impl Person {
    /// The six subject persons in canonical order.
    pub const GRAMMATICAL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Person::FirstSingular => "1s",
            Person::SecondSingular => "2s",
            Person::ThirdSingular => "3s",
            Person::FirstPlural => "1p",
            Person::SecondPlural => "2p",
            Person::ThirdPlural => "3p",
            Person::MasculineSingular => "ms",
            Person::MasculinePlural => "mp",
            Person::FeminineSingular => "fs",
            Person::FemininePlural => "fp",
            Person::Invariant => "0",
        }
    }

    /// Position among the six subject persons, `None` for participle slots.
    pub fn grammatical_index(self) -> Option<usize> {
        let idx = self as usize;
        (idx < 6).then_some(idx)
    }

    pub fn is_plural(self) -> bool {
        matches!(
            self,
            Person::FirstPlural
                | Person::SecondPlural
                | Person::ThirdPlural
                | Person::MasculinePlural
                | Person::FemininePlural
        )
    }

    pub fn is_participle_slot(self) -> bool {
        matches!(
            self,
            Person::MasculineSingular
                | Person::MasculinePlural
                | Person::FeminineSingular
                | Person::FemininePlural
        )
    }

    /// Participle slot agreeing with a subject of this person and `gender`.
    pub fn participle_slot(self, gender: Gender) -> Person {
        match (self.is_plural(), gender) {
            (false, Gender::Masculine) => Person::MasculineSingular,
            (true, Gender::Masculine) => Person::MasculinePlural,
            (false, Gender::Feminine) => Person::FeminineSingular,
            (true, Gender::Feminine) => Person::FemininePlural,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Person {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let person = match s {
            "1s" => Person::FirstSingular,
            "2s" => Person::SecondSingular,
            "3s" => Person::ThirdSingular,
            "1p" => Person::FirstPlural,
            "2p" => Person::SecondPlural,
            "3p" => Person::ThirdPlural,
            "ms" => Person::MasculineSingular,
            "mp" => Person::MasculinePlural,
            "fs" => Person::FeminineSingular,
            "fp" => Person::FemininePlural,
            "0" => Person::Invariant,
            other => return Err(ParseError::Person(other.to_string())),
        };
        Ok(person)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Gender {
    #[default]
    Masculine = 0,
    Feminine = 1,
}

/// Language-neutral mood concept. Each inflector maps it to its own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum Mood {
    Infinitive = 0,
    Indicative = 1,
    Subjunctive = 2,
    Conditional = 3,
    Imperative = 4,
    Participle = 5,
    Gerund = 6,
}

/// Language-neutral tense concept, interpreted together with a [`Mood`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum Tense {
    Present = 0,
    Imperfect = 1,
    Preterite = 2,
    Future = 3,
    Perfect = 4,
    Pluperfect = 5,
    PastAnterior = 6,
    FuturePerfect = 7,
    Negative = 8,
    Past = 9,
    /// Spanish `-se` imperfect subjunctive and its pluperfect.
    ImperfectAlt = 10,
    PluperfectAlt = 11,
    /// Analytic futures (Romanian `o să`).
    PopularFuture = 12,
    /// Catalan `vaig + infinitive`.
    PeriphrasticPast = 13,
}

/// How many spellings each person slot yields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlternatesMode {
    /// Default spelling only.
    #[default]
    First,
    /// First alternate, or the default when none exists.
    Second,
    /// Every spelling, as a list.
    All,
}

impl AlternatesMode {
    pub fn select<'a>(self, endings: &'a [String]) -> &'a [String] {
        match self {
            AlternatesMode::First => &endings[..endings.len().min(1)],
            AlternatesMode::Second if endings.len() > 1 => &endings[1..2],
            AlternatesMode::Second => &endings[..endings.len().min(1)],
            AlternatesMode::All => endings,
        }
    }
}

bitflags! {
    /// Regional variants an inflector may apply on top of the template data.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct DialectOptions: u32 {
        /// Rioplatense `vos` for the second person singular.
        const VOSEO = 1;
    }
}

/// Supported languages, one inflector each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Lang {
    Fr = 0,
    Es = 1,
    It = 2,
    Pt = 3,
    Ca = 4,
    Ro = 5,
}

impl Lang {
    pub const ALL: [Lang; 6] = [Lang::Fr, Lang::Es, Lang::It, Lang::Pt, Lang::Ca, Lang::Ro];

    pub const fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::Es => "es",
            Lang::It => "it",
            Lang::Pt => "pt",
            Lang::Ca => "ca",
            Lang::Ro => "ro",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::Lang(s.to_string()))
    }
}
