/// How a compound tense is assembled from its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundShape {
    /// Auxiliary + past participle: `j'ai mangé`.
    Standard,
    /// Auxiliary + bare infinitive: `voi face`, `vaig parlar`.
    Infinitive,
    /// Auxiliary + particle + past participle: `voi fi făcut`.
    Particle(&'static str),
    /// Invariant particle + past participle, no auxiliary: `să fi făcut`.
    NoAuxiliary(&'static str),
    /// The verb's own `(aux_mood, aux_tense)` forms with a particle after the
    /// subject pronoun, no participle: `o să fac`.
    NoPrimaryVerb(&'static str),
}

/// A compound tense declared by an inflector rather than by template data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundTense {
    pub mood: &'static str,
    pub tense: &'static str,
    /// Simple tense the auxiliary (or helper form) is conjugated in.
    pub aux_mood: &'static str,
    pub aux_tense: &'static str,
    pub shape: CompoundShape,
}

impl CompoundTense {
    pub const fn standard(
        mood: &'static str,
        tense: &'static str,
        aux_mood: &'static str,
        aux_tense: &'static str,
    ) -> Self {
        Self {
            mood,
            tense,
            aux_mood,
            aux_tense,
            shape: CompoundShape::Standard,
        }
    }

    pub const fn with_shape(self, shape: CompoundShape) -> Self {
        Self { shape, ..self }
    }

    /// Whether an auxiliary verb is conjugated at all.
    pub fn has_auxiliary(&self) -> bool {
        !matches!(self.shape, CompoundShape::NoAuxiliary(_) | CompoundShape::NoPrimaryVerb(_))
    }
}
