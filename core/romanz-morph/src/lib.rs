use std::collections::HashMap;

use nom::{
    bytes::complete::take_until,
    character::complete::char,
    combinator::rest,
    multi::many0_count,
    sequence::{pair, separated_pair},
    IResult,
};
use romanz_protocol::strip_accents;

/// Ending text that stands for "no form exists for this person".
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorphError {
    #[error("template ending '{ending}' does not match infinitive '{infinitive}'")]
    StemMismatch { infinitive: String, ending: String },
    #[error("template name '{0}' has no ':' separator")]
    MalformedTemplateName(String),
}

/// How strictly a template ending must match the infinitive's tail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StemMatch {
    /// The infinitive must end with the literal ending.
    #[default]
    Exact,
    /// Also accept tails sharing all but one letter with the ending,
    /// compared without diacritics.
    Relaxed,
}

/// A template ending split into its stem-truncation prefix and suffix text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending<'a> {
    Placeholder,
    Suffix { truncate: usize, text: &'a str },
}

fn truncation_prefix(input: &str) -> IResult<&str, (usize, &str)> {
    pair(many0_count(char('-')), rest)(input)
}

fn template_name(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_until(":"), char(':'), rest)(input)
}

pub fn parse_ending(raw: &str) -> Ending<'_> {
    if raw == PLACEHOLDER {
        return Ending::Placeholder;
    }
    match truncation_prefix(raw) {
        Ok((_, (truncate, text))) => Ending::Suffix { truncate, text },
        Err(_) => Ending::Suffix { truncate: 0, text: raw },
    }
}

/// Joins a stem and a template ending. Each leading `-` of the ending deletes
/// one trailing stem character. Returns `None` for the placeholder ending.
pub fn apply_ending(stem: &str, ending: &str) -> Option<String> {
    match parse_ending(ending) {
        Ending::Placeholder => None,
        Ending::Suffix { truncate, text } => {
            let keep = stem.chars().count().saturating_sub(truncate);
            let mut form: String = stem.chars().take(keep).collect();
            form.push_str(text);
            Some(form)
        }
    }
}

/// Splits `"aim:er"` into `("aim", "er")`.
pub fn split_template_name(name: &str) -> Result<(&str, &str), MorphError> {
    template_name(name)
        .map(|(_, parts)| parts)
        .map_err(|_| MorphError::MalformedTemplateName(name.to_string()))
}

/// Removes the template's literal ending from the infinitive.
pub fn verb_stem(infinitive: &str, template: &str, mode: StemMatch) -> Result<String, MorphError> {
    let (_, ending) = split_template_name(template)?;
    let ending_len = ending.chars().count();
    let infinitive_len = infinitive.chars().count();

    let matches = infinitive.ends_with(ending)
        || (mode == StemMatch::Relaxed
            && infinitive_len >= ending_len
            && tails_nearly_match(infinitive, ending, infinitive_len - ending_len, ending_len));

    if !matches {
        return Err(MorphError::StemMismatch {
            infinitive: infinitive.to_string(),
            ending: ending.to_string(),
        });
    }
    Ok(infinitive.chars().take(infinitive_len - ending_len).collect())
}

fn tails_nearly_match(infinitive: &str, ending: &str, tail_start: usize, ending_len: usize) -> bool {
    let tail: String = infinitive.chars().skip(tail_start).collect();
    let mut available: HashMap<char, usize> = HashMap::new();
    for c in strip_accents(&tail).chars() {
        *available.entry(c).or_insert(0) += 1;
    }

    let mut common = 0;
    for c in strip_accents(ending).chars() {
        if let Some(count) = available.get_mut(&c) {
            if *count > 0 {
                *count -= 1;
                common += 1;
            }
        }
    }
    common >= ending_len.saturating_sub(1)
}
